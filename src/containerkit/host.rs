//! The host container API boundary.
//!
//! The browser's contextual-identities capability is an external
//! collaborator. It is modeled as the [`ContainerHost`] trait so the rest
//! of the crate can be driven by a real browser adapter in production and
//! a scripted fake in tests. The capability may be entirely absent; the
//! factory models that as `None` and fails imperative operations with
//! [`crate::error::ContainerError::CapabilityUnavailable`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw container record as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Parameters for creating a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerParams {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Partial update of a container's attributes. `None` fields are left
/// unchanged by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// A lifecycle notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Created(ContainerRecord),
    Updated(ContainerRecord),
    Removed(ContainerRecord),
}

/// Abstract interface to the host's container primitives.
///
/// `query` returns all managed containers; the default (unmanaged)
/// container is not part of the host's container model and is never
/// included.
pub trait ContainerHost: Send + Sync {
    /// Fetch a single container by cookie store id.
    fn get(&self, id: &str) -> Result<ContainerRecord>;

    /// List all managed containers.
    fn query(&self) -> Result<Vec<ContainerRecord>>;

    /// Create a container and return the host's record for it.
    fn create(&self, params: &ContainerParams) -> Result<ContainerRecord>;

    /// Apply a partial update and return the updated record.
    fn update(&self, id: &str, patch: &ContainerPatch) -> Result<ContainerRecord>;

    /// Destroy a container.
    fn remove(&self, id: &str) -> Result<()>;

    /// Register a lifecycle listener. The host calls it once per
    /// notification, synchronously from its own callback context.
    fn subscribe(&self, listener: Box<dyn Fn(&HostEvent) + Send + Sync>);
}
