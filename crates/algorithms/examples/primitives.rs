//! Exercise the two primitives directly: hash a password, use the digest as
//! an AES-256 key, and transform a block in place.

use msgvault_algorithms::{Aes, HashFunction, KeySize, Sha256};
use zeroize::Zeroize;

fn main() -> msgvault_algorithms::Result<()> {
    let mut digest = Sha256::digest(b"correct horse battery staple")?;
    println!("SHA-256(password) = {}", digest.to_hex());

    let cipher = Aes::new(digest.as_bytes(), KeySize::Bits256)?;
    digest.zeroize();

    let mut block = *b"sixteen byte msg";
    cipher.encrypt_block(&mut block)?;
    println!("ciphertext block  = {}", hex::encode(block));

    cipher.decrypt_block(&mut block)?;
    println!("recovered block   = {}", String::from_utf8_lossy(&block));
    Ok(())
}
