use dnsforge_infrastructure::wire::{internet_checksum, ChecksumAccumulator};

#[test]
fn test_checksum_verifies_to_zero_once_inserted() {
    let mut rng = fastrand::Rng::with_seed(0x1071);

    for _ in 0..500 {
        let words = rng.usize(2..64);
        let mut data: Vec<u8> = (0..words * 2).map(|_| rng.u8(..)).collect();

        // Reserve one word as the checksum field.
        let field = rng.usize(..words) * 2;
        data[field] = 0;
        data[field + 1] = 0;

        let sum = internet_checksum(&data);
        data[field..field + 2].copy_from_slice(&sum.to_be_bytes());

        // Summing data that carries its own checksum folds to 0xFFFF.
        assert_eq!(internet_checksum(&data), 0, "data: {:02x?}", data);
    }
}

#[test]
fn test_accumulator_matches_one_shot_on_random_splits() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..200 {
        let data: Vec<u8> = (0..rng.usize(0..200)).map(|_| rng.u8(..)).collect();
        let cut_a = rng.usize(..=data.len());
        let cut_b = rng.usize(cut_a..=data.len());

        let split = ChecksumAccumulator::new()
            .add(&data[..cut_a])
            .add(&data[cut_a..cut_b])
            .add(&data[cut_b..])
            .finish();

        assert_eq!(split, internet_checksum(&data));
    }
}

#[test]
fn test_known_ipv4_header() {
    // Header from a capture: 45 00 00 73 00 00 40 00 40 11 [b8 61] c0 a8 00 01 c0 a8 00 c7
    let header = [
        0x45, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0x00, 0x00, 0xc0, 0xa8,
        0x00, 0x01, 0xc0, 0xa8, 0x00, 0xc7,
    ];
    assert_eq!(internet_checksum(&header), 0xb861);
}
