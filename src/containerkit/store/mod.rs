//! # Storage Layer
//!
//! The attribute table lives in a single durable slot. The [`StorageSlot`]
//! trait abstracts that slot so the provider can run against different
//! backends:
//!
//! - [`fs::FileSlot`]: production JSON-file-backed slot
//! - [`memory::MemorySlot`]: in-memory slot for testing
//!
//! The slot is wholesale: `read` yields the entire table (empty when the
//! slot has never been written) and `write` replaces the entire table.
//! There are no partial-key updates at this layer, so every mutation above
//! it is a full read-modify-write cycle. The scope of durability (per
//! profile, shared, ...) is the backend's contract, not this crate's.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::Result;

pub mod fs;
pub mod memory;

/// An open mapping from attribute names to arbitrary JSON values.
pub type AttributeDictionary = Map<String, Value>;

/// The persisted mapping from cookie store id to attribute dictionary.
/// This is the sole persisted state of the crate.
pub type AttributeTable = HashMap<String, AttributeDictionary>;

/// A single durable slot holding the whole [`AttributeTable`].
///
/// Implementations outside this crate report backend failures as
/// [`crate::error::ContainerError::Storage`]; failures propagate to
/// callers unchanged, with no retry.
pub trait StorageSlot: Send + Sync {
    /// Load the table. A slot that has never been written reads as an
    /// empty table, not an error.
    fn read(&self) -> Result<AttributeTable>;

    /// Replace the slot's value wholesale.
    fn write(&self, table: &AttributeTable) -> Result<()>;
}
