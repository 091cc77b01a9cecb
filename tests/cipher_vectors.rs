//! FIPS 197 known-answer and round-trip tests through the public facade

use msgvault::{Aes, Direction, KeySize};

const PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

fn encrypt_hex(key_hex: &str, plaintext_hex: &str) -> String {
    let key = hex::decode(key_hex).unwrap();
    let cipher = Aes::with_key(&key).unwrap();
    let mut block = [0u8; 16];
    block.copy_from_slice(&hex::decode(plaintext_hex).unwrap());
    cipher.encrypt_block(&mut block).unwrap();
    hex::encode(block)
}

#[test]
fn fips_appendix_c_vectors() {
    assert_eq!(
        encrypt_hex("000102030405060708090a0b0c0d0e0f", PLAINTEXT),
        "69c4e0d86a7b0430d8cdb78070b4c55a"
    );
    assert_eq!(
        encrypt_hex("000102030405060708090a0b0c0d0e0f1011121314151617", PLAINTEXT),
        "dda97ca4864cdfe06eaf70a0ec0d7191"
    );
    assert_eq!(
        encrypt_hex(
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            PLAINTEXT
        ),
        "8ea2b7ca516745bfeafc49904b496089"
    );
}

#[test]
fn decrypt_inverts_encrypt_for_every_key_size() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xae5);

    for size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
        let mut key = vec![0u8; size.key_len()];
        rng.fill(&mut key[..]);
        let cipher = Aes::new(&key, size).unwrap();

        for _ in 0..50 {
            let original: [u8; 16] = rng.gen();
            let mut block = original;
            cipher.encrypt_block(&mut block).unwrap();
            assert_ne!(block, original);
            cipher.decrypt_block(&mut block).unwrap();
            assert_eq!(block, original);
        }
    }
}

#[test]
fn apply_block_matches_explicit_calls() {
    let cipher = Aes::with_key(&[7u8; 24]).unwrap();

    let mut via_apply = [0x3cu8; 16];
    let mut via_encrypt = [0x3cu8; 16];
    cipher.apply_block(&mut via_apply, Direction::Encrypt).unwrap();
    cipher.encrypt_block(&mut via_encrypt).unwrap();
    assert_eq!(via_apply, via_encrypt);
}

#[test]
fn key_size_rejects_nonstandard_lengths() {
    for bits in [0, 64, 129, 255, 512] {
        assert!(KeySize::from_bits(bits).is_err());
    }
    for len in [0usize, 8, 17, 33] {
        assert!(Aes::with_key(&vec![0u8; len]).is_err());
    }
}
