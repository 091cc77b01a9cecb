//! The storage collaborator boundary
//!
//! [`RecordStore`] is the seam between the encryption service and whatever
//! persists records. Operations are blocking and status-returning; a failed
//! write leaves the slot holding either the old record or the new one, never
//! a blend. Validation failures (bad slot, over-limit lengths) are reported
//! distinctly from write failures, which surface as `Error::Storage`.
//!
//! [`MemoryStore`] is the in-memory slot store: a fixed number of slots, each
//! holding one titled record in fixed backing arrays. Deleting a slot wipes
//! its content, not just its occupancy flag.

use msgvault_params::vault::{MAX_MESSAGE_LEN, MAX_TITLE_LEN, RECORD_SLOTS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{storage_error, validate, Result};

/// Storage collaborator for encrypted records
pub trait RecordStore {
    /// Write a record into a slot, replacing any existing record.
    ///
    /// `ciphertext` is the padded cipher data; `msg_len` is the logical
    /// plaintext length it encodes.
    fn store(&mut self, slot: usize, title: &[u8], ciphertext: &[u8], msg_len: usize)
        -> Result<()>;

    /// Read a slot's cipher data into `out`, returning the logical length.
    ///
    /// `out` must hold the record's full padded length.
    fn load(&self, slot: usize, out: &mut [u8]) -> Result<usize>;

    /// Read a slot's title into `out`, returning the title length
    fn load_title(&self, slot: usize, out: &mut [u8]) -> Result<usize>;

    /// Delete a slot's record, wiping its content
    fn delete(&mut self, slot: usize) -> Result<()>;

    /// Whether a slot currently holds a record
    fn is_occupied(&self, slot: usize) -> bool;
}

/// One slot's backing storage
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct Record {
    title: [u8; MAX_TITLE_LEN],
    title_len: usize,
    data: [u8; MAX_MESSAGE_LEN],
    data_len: usize,
    msg_len: usize,
    occupied: bool,
}

impl Record {
    const EMPTY: Record = Record {
        title: [0u8; MAX_TITLE_LEN],
        title_len: 0,
        data: [0u8; MAX_MESSAGE_LEN],
        data_len: 0,
        msg_len: 0,
        occupied: false,
    };
}

/// Fixed-capacity in-memory record store
pub struct MemoryStore {
    slots: [Record; RECORD_SLOTS],
}

impl MemoryStore {
    /// Create a store with every slot empty
    pub fn new() -> Self {
        Self {
            slots: [Record::EMPTY; RECORD_SLOTS],
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        RECORD_SLOTS
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.occupied).count()
    }

    fn slot(&self, slot: usize) -> Result<&Record> {
        validate::max_length("record slot", slot, RECORD_SLOTS - 1)?;
        Ok(&self.slots[slot])
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn store(
        &mut self,
        slot: usize,
        title: &[u8],
        ciphertext: &[u8],
        msg_len: usize,
    ) -> Result<()> {
        validate::max_length("record slot", slot, RECORD_SLOTS - 1)?;
        validate::max_length("title", title.len(), MAX_TITLE_LEN)?;
        validate::non_empty("record data", ciphertext.len())?;
        validate::max_length("record data", ciphertext.len(), MAX_MESSAGE_LEN)?;
        validate::max_length("message length", msg_len, ciphertext.len())?;

        let record = &mut self.slots[slot];
        record.zeroize();
        record.title[..title.len()].copy_from_slice(title);
        record.title_len = title.len();
        record.data[..ciphertext.len()].copy_from_slice(ciphertext);
        record.data_len = ciphertext.len();
        record.msg_len = msg_len;
        record.occupied = true;
        Ok(())
    }

    fn load(&self, slot: usize, out: &mut [u8]) -> Result<usize> {
        let record = self.slot(slot)?;
        if !record.occupied {
            return Err(storage_error("load", "slot is empty"));
        }
        validate::min_length("load buffer", out.len(), record.data_len)?;
        out[..record.data_len].copy_from_slice(&record.data[..record.data_len]);
        Ok(record.msg_len)
    }

    fn load_title(&self, slot: usize, out: &mut [u8]) -> Result<usize> {
        let record = self.slot(slot)?;
        if !record.occupied {
            return Err(storage_error("load_title", "slot is empty"));
        }
        validate::min_length("title buffer", out.len(), record.title_len)?;
        out[..record.title_len].copy_from_slice(&record.title[..record.title_len]);
        Ok(record.title_len)
    }

    fn delete(&mut self, slot: usize) -> Result<()> {
        validate::max_length("record slot", slot, RECORD_SLOTS - 1)?;
        if !self.slots[slot].occupied {
            return Err(storage_error("delete", "slot is empty"));
        }
        self.slots[slot].zeroize();
        Ok(())
    }

    fn is_occupied(&self, slot: usize) -> bool {
        self.slots.get(slot).map_or(false, |record| record.occupied)
    }
}
