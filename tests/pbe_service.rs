//! End-to-end tests of the password-based encryption service

use msgvault::{pbe, Direction, Error, KeySize, MemoryStore, Vault};

#[test]
fn round_trip_multiple_block_counts() {
    for blocks in 1..=8 {
        let len = blocks * 16;
        let original: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
        let mut buffer = original.clone();

        pbe::process(
            Direction::Encrypt,
            b"a modest password",
            KeySize::Bits192,
            &mut buffer,
            len,
        )
        .unwrap();
        assert_ne!(buffer, original);

        pbe::process(
            Direction::Decrypt,
            b"a modest password",
            KeySize::Bits192,
            &mut buffer,
            len,
        )
        .unwrap();
        assert_eq!(buffer, original);
    }
}

#[test]
fn same_password_same_key_size_is_deterministic() {
    let mut first = [0x55u8; 32];
    let mut second = [0x55u8; 32];
    pbe::process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut first, 32).unwrap();
    pbe::process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut second, 32).unwrap();
    assert_eq!(first, second);
}

#[test]
fn key_size_changes_the_ciphertext() {
    let mut k128 = [0x55u8; 16];
    let mut k256 = [0x55u8; 16];
    pbe::process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut k128, 16).unwrap();
    pbe::process(Direction::Encrypt, b"pw", KeySize::Bits256, &mut k256, 16).unwrap();
    assert_ne!(k128, k256);
}

#[test]
fn caller_key_is_erased_on_every_path() {
    // Success path
    let mut key = [0xddu8; 32];
    let mut buffer = [1u8; 16];
    pbe::process_with_key(Direction::Encrypt, &mut key, &mut buffer, 16).unwrap();
    assert_eq!(key, [0u8; 32]);

    // Validation failure still consumes the key
    let mut key = [0xddu8; 32];
    let mut empty: [u8; 0] = [];
    assert!(pbe::process_with_key(Direction::Decrypt, &mut key, &mut empty, 0).is_err());
    assert_eq!(key, [0u8; 32]);
}

#[test]
fn invalid_inputs_leave_the_message_untouched() {
    let original = [0x42u8; 16];

    // Empty password
    let mut buffer = original;
    assert!(matches!(
        pbe::process(Direction::Encrypt, b"", KeySize::Bits128, &mut buffer, 16),
        Err(Error::EmptyInput { .. })
    ));
    assert_eq!(buffer, original);

    // Over-limit password
    let mut buffer = original;
    assert!(
        pbe::process(Direction::Encrypt, &[b'p'; 33], KeySize::Bits128, &mut buffer, 16).is_err()
    );
    assert_eq!(buffer, original);

    // Buffer shorter than the padded length
    let mut buffer = original;
    assert!(pbe::process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 17).is_err());
    assert_eq!(buffer, original);
}

#[test]
fn direction_flag_boundary() {
    assert_eq!(Direction::from_flag(0).unwrap(), Direction::Encrypt);
    assert_eq!(Direction::from_flag(1).unwrap(), Direction::Decrypt);
    assert_eq!(
        Direction::from_flag(2),
        Err(Error::InvalidDirection { flag: 2 })
    );
}

#[test]
fn vault_fills_and_drains_every_slot() {
    let mut vault = Vault::new(MemoryStore::new());

    for slot in 0..10 {
        let message = format!("message for slot {}", slot);
        let title = format!("title-{}", slot);
        vault
            .save(slot, title.as_bytes(), message.as_bytes(), b"pw", KeySize::Bits128)
            .unwrap();
    }
    assert!(vault.save(10, b"t", b"m", b"pw", KeySize::Bits128).is_err());

    for slot in 0..10 {
        let mut out = [0u8; 256];
        let len = vault.open(slot, b"pw", KeySize::Bits128, &mut out).unwrap();
        assert_eq!(&out[..len], format!("message for slot {}", slot).as_bytes());
        vault.delete(slot).unwrap();
        assert!(!vault.is_occupied(slot));
    }
}

#[test]
fn vault_round_trips_partial_blocks() {
    let mut vault = Vault::new(MemoryStore::new());
    // 21 bytes: one full chunk plus a partial one
    let message = b"twenty-one bytes here";
    vault
        .save(2, b"partial", message, b"pw", KeySize::Bits256)
        .unwrap();

    let mut out = [0u8; 256];
    let len = vault.open(2, b"pw", KeySize::Bits256, &mut out).unwrap();
    assert_eq!(len, message.len());
    assert_eq!(&out[..len], message);
}
