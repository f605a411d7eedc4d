use std::sync::Mutex;

use super::{AttributeTable, StorageSlot};
use crate::error::Result;

/// In-memory storage slot. No persistence; used in tests and by hosts
/// without durable storage.
#[derive(Default)]
pub struct MemorySlot {
    table: Mutex<AttributeTable>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<AttributeTable> {
        Ok(self.table.lock().expect("memory slot lock poisoned").clone())
    }

    fn write(&self, table: &AttributeTable) -> Result<()> {
        *self.table.lock().expect("memory slot lock poisoned") = table.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_slot_reads_empty() {
        let slot = MemorySlot::new();
        assert!(slot.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_is_visible_to_read() {
        let slot = MemorySlot::new();
        let mut table = AttributeTable::new();
        table.insert("firefox-container-1".to_string(), Default::default());
        slot.write(&table).unwrap();
        assert_eq!(slot.read().unwrap(), table);
    }
}
