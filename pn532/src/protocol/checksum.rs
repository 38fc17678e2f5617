// pn532/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) byte.
/// Satisfies: lower byte of [LEN + LCS] = 0x00
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) byte over the TFI and the packet data.
/// Satisfies: lower byte of [TFI + PD0 + ... + PDn + DCS] = 0x00
pub fn dcs(tfi: u8, data: &[u8]) -> u8 {
    let sum = data.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
