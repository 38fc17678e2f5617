use pn532::protocol::{dcs, lcs};

#[test]
fn lcs_examples() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(lcs(0x00), 0x00);
    assert_eq!(lcs(0xFF), 0x01);
}

#[test]
fn dcs_examples() {
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    assert_eq!(dcs(0xD5, &[]), 0x2B);
}

#[test]
fn checksum_identities_hold() {
    for len in [0x01u8, 0x40, 0xFF] {
        assert_eq!(len.wrapping_add(lcs(len)), 0);
    }
    let payload = [0x4A, 0x01, 0x00];
    let sum = payload
        .iter()
        .fold(0xD4u8, |acc, &b| acc.wrapping_add(b))
        .wrapping_add(dcs(0xD4, &payload));
    assert_eq!(sum, 0);
}
