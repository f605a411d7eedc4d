//! Bulk attribute access per container, plus the removal-cleanup wiring.
//!
//! The provider is an explicit object over an injected [`StorageSlot`];
//! there is no hidden global table. Every mutation is one read-modify-write
//! of the whole table, with no optimistic-concurrency check: two mutations
//! issued concurrently (say, a caller's [`ContainerAttributeProvider::save_attributes`]
//! racing the removal-cleanup listener) can interleave so the later write
//! clobbers the earlier one. Callers that can race writers must serialize
//! them externally; this crate does not.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cookie_store::CookieStore;
use crate::error::Result;
use crate::factory::ContextualIdentityFactory;
use crate::store::{AttributeDictionary, StorageSlot};

/// Reads and writes per-container attribute dictionaries, and deletes a
/// container's entry when the lifecycle relay reports it removed.
pub struct ContainerAttributeProvider {
    storage: Arc<dyn StorageSlot>,
}

impl ContainerAttributeProvider {
    pub fn new(storage: Arc<dyn StorageSlot>) -> Self {
        Self { storage }
    }

    /// One dictionary per input store, in input order. A store with no
    /// saved entry yields an empty dictionary. Read-only.
    pub fn get_attributes<'a>(
        &self,
        cookie_stores: impl IntoIterator<Item = &'a CookieStore>,
    ) -> Result<Vec<AttributeDictionary>> {
        let table = self.storage.read()?;
        Ok(cookie_stores
            .into_iter()
            .map(|store| table.get(store.id()).cloned().unwrap_or_default())
            .collect())
    }

    /// Overwrite or create the entry for each given store, in one
    /// read-modify-write of the whole table. All-or-nothing per call:
    /// batch every change meant for one write into a single call.
    pub fn save_attributes(
        &self,
        entries: impl IntoIterator<Item = (CookieStore, AttributeDictionary)>,
    ) -> Result<()> {
        let mut table = self.storage.read()?;
        for (store, dictionary) in entries {
            table.insert(store.id().to_string(), dictionary);
        }
        self.storage.write(&table)
    }

    /// Register the removal-cleanup listener on the factory's `on_removed`
    /// sink. This is the only automatic mutation path: each removal loads
    /// the table, drops the removed container's entry, and writes the
    /// table back. Cleanup failures are logged, never propagated into the
    /// dispatcher.
    pub fn attach(&self, factory: &ContextualIdentityFactory) {
        let storage = Arc::clone(&self.storage);
        factory.on_removed.add_listener(move |identity| {
            let id = identity.cookie_store.id();
            if let Err(err) = remove_entry(storage.as_ref(), id) {
                warn!(id, %err, "failed to drop attributes for removed container");
            } else {
                debug!(id, "dropped attributes for removed container");
            }
        });
    }
}

fn remove_entry(storage: &dyn StorageSlot, id: &str) -> Result<()> {
    let mut table = storage.read()?;
    table.remove(id);
    storage.write(&table)
}
