//! # Containerkit Architecture
//!
//! Containerkit tracks browser **containers** (isolated cookie/storage
//! partitions) and keeps user-defined attributes associated with them as
//! containers are created, updated, and destroyed by the host browser. It
//! also defines the canonical, reversible encoding between a container's
//! opaque string identifier and its structured identity.
//!
//! The host browser is an external collaborator, not something this crate
//! embeds: the container API arrives as a [`host::ContainerHost`] trait
//! object and durable storage as a [`store::StorageSlot`] trait object, so
//! the whole crate runs against in-memory fakes in tests.
//!
//! ## Data flow
//!
//! ```text
//! host container events
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │ factory                      │  typed events, registration-ordered
//! │ ContextualIdentityFactory    │──────────────▶ application listeners
//! └──────────────────────────────┘
//!        │ on_removed
//!        ▼
//! ┌──────────────────────────────┐
//! │ attributes                   │  read-modify-write of the whole
//! │ ContainerAttributeProvider   │──────────────▶ store::StorageSlot
//! └──────────────────────────────┘
//! ```
//!
//! Application code reads and writes attributes in bulk through the
//! provider, keyed by the [`cookie_store::CookieStore`] identity produced
//! by the codec; the provider's removal listener is the only automatic
//! mutation path, so attribute entries never outlive their container.
//!
//! ## Module Overview
//!
//! - [`cookie_store`]: identifier codec and the infallible store handle
//! - [`identity`]: identity records and theme-driven rendering
//! - [`events`]: ordered multicast event sinks
//! - [`host`]: the host container API boundary
//! - [`factory`]: the lifecycle relay (typed events + CRUD)
//! - [`store`]: the durable slot holding the attribute table
//! - [`attributes`]: bulk attribute access and removal cleanup
//! - [`error`]: error types

pub mod attributes;
pub mod cookie_store;
pub mod error;
pub mod events;
pub mod factory;
pub mod host;
pub mod identity;
pub mod store;

pub use attributes::ContainerAttributeProvider;
pub use cookie_store::{ContainerKey, CookieStore};
pub use error::{ContainerError, Result};
pub use factory::ContextualIdentityFactory;
pub use host::{ContainerHost, ContainerParams, ContainerPatch, ContainerRecord, HostEvent};
pub use identity::{ContextualIdentity, DisplayedContainer, IdentityParams, ThemeCallback};
pub use store::{AttributeDictionary, AttributeTable, StorageSlot};
