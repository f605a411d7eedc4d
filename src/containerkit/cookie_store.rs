//! Cookie store identifiers and the canonical codec between the opaque
//! string form and the structured [`ContainerKey`].
//!
//! Firefox-style identifiers come in three shapes:
//!
//! ```text
//! firefox-default          → { user_context_id: 0, is_private: false }
//! firefox-private          → { user_context_id: 0, is_private: true }
//! firefox-container-<n>    → { user_context_id: n, is_private: false }, n > 0
//! ```
//!
//! [`parse`] and [`build`] are pure functions. [`CookieStore::new`] never
//! fails: identifiers of unknown shape still flow through the system as
//! opaque handles, flagged with `parsed = false`.

use std::fmt;

use crate::error::{ContainerError, Result};

const DEFAULT_STORE: &str = "firefox-default";
const PRIVATE_STORE: &str = "firefox-private";
const CONTAINER_STORE_PREFIX: &str = "firefox-container-";

/// Structured identity of a container: numeric partition index plus the
/// private-browsing flag. Canonical and unique per live container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContainerKey {
    pub user_context_id: u32,
    pub is_private: bool,
}

impl ContainerKey {
    pub fn new(user_context_id: u32, is_private: bool) -> Self {
        Self {
            user_context_id,
            is_private,
        }
    }
}

/// Parse a cookie store id into its structured key.
///
/// Fails with [`ContainerError::InvalidStoreId`] if the string matches none
/// of the three recognized shapes, including a `firefox-container-` suffix
/// that does not parse as a `u32`.
pub fn parse(id: &str) -> Result<ContainerKey> {
    if id == DEFAULT_STORE {
        return Ok(ContainerKey::new(0, false));
    }
    if id == PRIVATE_STORE {
        return Ok(ContainerKey::new(0, true));
    }
    if let Some(digits) = id.strip_prefix(CONTAINER_STORE_PREFIX) {
        let user_context_id: u32 = digits
            .parse()
            .map_err(|_| ContainerError::InvalidStoreId(id.to_string()))?;
        return Ok(ContainerKey::new(user_context_id, false));
    }
    Err(ContainerError::InvalidStoreId(id.to_string()))
}

/// Build the canonical cookie store id for a key.
///
/// Private keys always map to the private sentinel; the partition index is
/// dropped in that case. The encoding has no representation for a private
/// container with a non-zero index — the host container model never
/// produces one, so the combination is treated as an unreachable
/// precondition rather than given an ad-hoc encoding.
pub fn build(key: &ContainerKey) -> String {
    if key.is_private {
        PRIVATE_STORE.to_string()
    } else if key.user_context_id == 0 {
        DEFAULT_STORE.to_string()
    } else {
        format!("{}{}", CONTAINER_STORE_PREFIX, key.user_context_id)
    }
}

/// A cookie store handle: the raw identifier plus its parsed key.
///
/// Equality and hashing are by raw identifier, so unparsed handles remain
/// distinct from each other and from the well-known stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CookieStore {
    id: String,
    key: ContainerKey,
    parsed: bool,
}

impl CookieStore {
    /// Wrap a raw identifier. Never fails: on parse failure the key is the
    /// zero key and [`CookieStore::is_parsed`] reports false.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        match parse(&id) {
            Ok(key) => Self {
                id,
                key,
                parsed: true,
            },
            Err(_) => Self {
                id,
                key: ContainerKey::default(),
                parsed: false,
            },
        }
    }

    /// The canonical store for a key.
    pub fn from_key(key: ContainerKey) -> Self {
        Self {
            id: build(&key),
            key: ContainerKey {
                // Collapses {n>0, private} to the private sentinel's key.
                user_context_id: if key.is_private { 0 } else { key.user_context_id },
                is_private: key.is_private,
            },
            parsed: true,
        }
    }

    /// The default (unmanaged) cookie store.
    pub fn default_store() -> Self {
        Self::new(DEFAULT_STORE)
    }

    /// The private browsing cookie store.
    pub fn private_store() -> Self {
        Self::new(PRIVATE_STORE)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> ContainerKey {
        self.key
    }

    /// Whether the identifier matched one of the recognized shapes.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn user_context_id(&self) -> u32 {
        self.key.user_context_id
    }

    pub fn is_private(&self) -> bool {
        self.key.is_private
    }
}

impl fmt::Display for CookieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
