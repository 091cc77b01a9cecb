//! The record vault: password-based encryption composed with storage
//!
//! `Vault` owns a [`RecordStore`] and moves plaintext through the encrypt/
//! store and load/decrypt paths. Storage failures surface verbatim from the
//! collaborator; nothing is retried. Plaintext staging buffers are wiped on
//! every exit path.

use msgvault_algorithms::KeySize;
use msgvault_api::Direction;
use msgvault_common::ZeroizeGuard;
use msgvault_params::vault::MAX_MESSAGE_LEN;

use crate::error::{validate, Result};
use crate::pbe;
use crate::store::RecordStore;

/// Encrypted record service over a storage collaborator
pub struct Vault<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Vault<S> {
    /// Create a vault over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the vault, returning the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Encrypt `message` under `password` and persist it in `slot`.
    ///
    /// The caller's plaintext is not modified; encryption happens in a
    /// staging buffer that is wiped before returning.
    pub fn save(
        &mut self,
        slot: usize,
        title: &[u8],
        message: &[u8],
        password: &[u8],
        key_size: KeySize,
    ) -> Result<()> {
        validate::non_empty("message", message.len())?;
        validate::max_length("message", message.len(), MAX_MESSAGE_LEN)?;

        let mut staging = [0u8; MAX_MESSAGE_LEN];
        let mut buffer = ZeroizeGuard::new(&mut staging);
        buffer[..message.len()].copy_from_slice(message);

        let full_len = pbe::padded_len(message.len());
        pbe::process(
            Direction::Encrypt,
            password,
            key_size,
            &mut buffer[..full_len],
            message.len(),
        )?;

        self.store
            .store(slot, title, &buffer[..full_len], message.len())
    }

    /// Load `slot`, decrypt it under `password`, and copy the plaintext
    /// into `out`, returning its length.
    pub fn open(
        &mut self,
        slot: usize,
        password: &[u8],
        key_size: KeySize,
        out: &mut [u8],
    ) -> Result<usize> {
        let mut staging = [0u8; MAX_MESSAGE_LEN];
        let mut buffer = ZeroizeGuard::new(&mut staging);

        let msg_len = self.store.load(slot, &mut buffer[..])?;
        validate::min_length("output buffer", out.len(), msg_len)?;

        let full_len = pbe::padded_len(msg_len);
        pbe::process(
            Direction::Decrypt,
            password,
            key_size,
            &mut buffer[..full_len],
            msg_len,
        )?;

        out[..msg_len].copy_from_slice(&buffer[..msg_len]);
        Ok(msg_len)
    }

    /// Read the title of `slot` into `out`, returning its length
    pub fn title(&self, slot: usize, out: &mut [u8]) -> Result<usize> {
        self.store.load_title(slot, out)
    }

    /// Delete the record in `slot`, wiping its stored content
    pub fn delete(&mut self, slot: usize) -> Result<()> {
        self.store.delete(slot)
    }

    /// Whether `slot` currently holds a record
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.store.is_occupied(slot)
    }
}

#[cfg(test)]
mod tests {
    use msgvault_api::Error;

    use super::*;
    use crate::store::MemoryStore;

    /// A store whose writes always fail, for exercising verbatim propagation
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn store(&mut self, _: usize, _: &[u8], _: &[u8], _: usize) -> Result<()> {
            Err(crate::error::storage_error("store", "device offline"))
        }

        fn load(&self, _: usize, _: &mut [u8]) -> Result<usize> {
            Err(crate::error::storage_error("load", "device offline"))
        }

        fn load_title(&self, _: usize, _: &mut [u8]) -> Result<usize> {
            Err(crate::error::storage_error("load_title", "device offline"))
        }

        fn delete(&mut self, _: usize) -> Result<()> {
            Err(crate::error::storage_error("delete", "device offline"))
        }

        fn is_occupied(&self, _: usize) -> bool {
            false
        }
    }

    #[test]
    fn save_open_round_trip() {
        let mut vault = Vault::new(MemoryStore::new());
        let message = b"meet at the usual place at nine";
        vault
            .save(4, b"plans", message, b"hunter2", KeySize::Bits256)
            .unwrap();

        let mut out = [0u8; 256];
        let len = vault.open(4, b"hunter2", KeySize::Bits256, &mut out).unwrap();
        assert_eq!(&out[..len], message);

        let mut title = [0u8; 16];
        let title_len = vault.title(4, &mut title).unwrap();
        assert_eq!(&title[..title_len], b"plans");
    }

    #[test]
    fn stored_record_is_not_plaintext() {
        let mut vault = Vault::new(MemoryStore::new());
        let message = b"sixteen byte msg";
        vault
            .save(0, b"t", message, b"pw", KeySize::Bits128)
            .unwrap();

        let store = vault.into_store();
        let mut stored = [0u8; 16];
        store.load(0, &mut stored).unwrap();
        assert_ne!(&stored, message);
    }

    #[test]
    fn wrong_password_garbles_the_plaintext() {
        let mut vault = Vault::new(MemoryStore::new());
        let message = b"sixteen byte msg";
        vault
            .save(0, b"t", message, b"right", KeySize::Bits128)
            .unwrap();

        let mut out = [0u8; 16];
        vault.open(0, b"wrong", KeySize::Bits128, &mut out).unwrap();
        assert_ne!(&out, message);
    }

    #[test]
    fn delete_then_open_fails() {
        let mut vault = Vault::new(MemoryStore::new());
        vault
            .save(7, b"t", b"some message", b"pw", KeySize::Bits128)
            .unwrap();
        vault.delete(7).unwrap();
        assert!(!vault.is_occupied(7));

        let mut out = [0u8; 16];
        assert!(matches!(
            vault.open(7, b"pw", KeySize::Bits128, &mut out),
            Err(Error::Storage { .. })
        ));
    }

    #[test]
    fn storage_failures_surface_verbatim() {
        let mut vault = Vault::new(FailingStore);
        let err = vault
            .save(0, b"t", b"message", b"pw", KeySize::Bits128)
            .unwrap_err();
        assert!(matches!(err, Error::Storage { context: "store", .. }));

        let mut out = [0u8; 16];
        assert!(matches!(
            vault.open(0, b"pw", KeySize::Bits128, &mut out),
            Err(Error::Storage { context: "load", .. })
        ));
    }

    #[test]
    fn save_rejects_over_limit_message() {
        let mut vault = Vault::new(MemoryStore::new());
        let too_long = [0u8; 257];
        assert!(matches!(
            vault.save(0, b"t", &too_long, b"pw", KeySize::Bits128),
            Err(Error::InvalidLength { context: "message", .. })
        ));
        assert!(!vault.is_occupied(0));
    }

    #[test]
    fn open_requires_a_large_enough_output() {
        let mut vault = Vault::new(MemoryStore::new());
        vault
            .save(0, b"t", b"twenty bytes of text", b"pw", KeySize::Bits128)
            .unwrap();

        let mut out = [0u8; 19];
        assert!(vault.open(0, b"pw", KeySize::Bits128, &mut out).is_err());
    }
}
