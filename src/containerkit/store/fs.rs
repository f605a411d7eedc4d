use std::fs;
use std::path::{Path, PathBuf};

use super::{AttributeTable, StorageSlot};
use crate::error::{ContainerError, Result};

/// File-backed storage slot. The table is serialized as a JSON object in
/// a single file; writes go through a temp file and rename so a crash
/// mid-write never leaves a truncated table behind.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ContainerError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<AttributeTable> {
        if !self.path.exists() {
            return Ok(AttributeTable::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ContainerError::Io)?;
        let table: AttributeTable =
            serde_json::from_str(&content).map_err(ContainerError::Serialization)?;
        Ok(table)
    }

    fn write(&self, table: &AttributeTable) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(table).map_err(ContainerError::Serialization)?;
        // Appended suffix, not a replaced extension: the temp file must be
        // unique to this slot's target filename.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content).map_err(ContainerError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ContainerError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSlot) {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("attributes.json"));
        (dir, slot)
    }

    #[test]
    fn test_unwritten_slot_reads_empty() {
        let (_dir, slot) = setup();
        assert!(slot.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let (_dir, slot) = setup();
        let mut table = AttributeTable::new();
        let mut dict = super::super::AttributeDictionary::new();
        dict.insert("tag".to_string(), json!("work"));
        table.insert("firefox-container-1".to_string(), dict);

        slot.write(&table).unwrap();
        assert_eq!(slot.read().unwrap(), table);
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let (_dir, slot) = setup();
        let mut table = AttributeTable::new();
        table.insert("firefox-container-1".to_string(), Default::default());
        slot.write(&table).unwrap();

        let mut replacement = AttributeTable::new();
        replacement.insert("firefox-container-2".to_string(), Default::default());
        slot.write(&replacement).unwrap();

        let read_back = slot.read().unwrap();
        assert!(!read_back.contains_key("firefox-container-1"));
        assert!(read_back.contains_key("firefox-container-2"));
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let (dir, slot) = setup();
        slot.write(&AttributeTable::new()).unwrap();
        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            assert!(!name.to_string_lossy().ends_with(".tmp"));
        }
    }

    #[test]
    fn test_temp_file_does_not_collide_with_sibling_slots() {
        let dir = TempDir::new().unwrap();
        // A sibling file that a replaced-extension temp path would clobber.
        let sibling = dir.path().join("attributes.tmp");
        fs::write(&sibling, "other slot").unwrap();

        let slot = FileSlot::new(dir.path().join("attributes.json"));
        slot.write(&AttributeTable::new()).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "other slot");
        assert!(slot.path().exists());
    }

    #[test]
    fn test_missing_parent_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("attributes.json"));
        slot.write(&AttributeTable::new()).unwrap();
        assert!(slot.path().exists());
    }
}
