//! The lifecycle relay between the host's container notifications and this
//! crate's typed event model, plus CRUD against the host.

use std::sync::Arc;

use tracing::debug;

use crate::cookie_store::CookieStore;
use crate::error::{ContainerError, Result};
use crate::events::EventSink;
use crate::host::{ContainerHost, ContainerParams, ContainerPatch, ContainerRecord, HostEvent};
use crate::identity::{ContextualIdentity, IdentityParams, ThemeCallback};

/// Relays host container events as typed [`ContextualIdentity`] events and
/// proxies imperative operations to the host.
///
/// When the host capability is absent the relay degrades: subscriptions
/// are skipped silently (the sinks simply never fire), but every
/// imperative operation fails fast with
/// [`ContainerError::CapabilityUnavailable`] so callers can detect the
/// missing capability.
pub struct ContextualIdentityFactory {
    host: Option<Arc<dyn ContainerHost>>,
    theme: Option<ThemeCallback>,
    pub on_created: Arc<EventSink<ContextualIdentity>>,
    pub on_updated: Arc<EventSink<ContextualIdentity>>,
    pub on_removed: Arc<EventSink<ContextualIdentity>>,
}

impl ContextualIdentityFactory {
    pub fn new(host: Option<Arc<dyn ContainerHost>>) -> Self {
        Self::with_theme(host, None)
    }

    pub fn with_theme(host: Option<Arc<dyn ContainerHost>>, theme: Option<ThemeCallback>) -> Self {
        let factory = Self {
            host,
            theme,
            on_created: Arc::new(EventSink::new()),
            on_updated: Arc::new(EventSink::new()),
            on_removed: Arc::new(EventSink::new()),
        };

        if let Some(host) = &factory.host {
            let on_created = Arc::clone(&factory.on_created);
            let on_updated = Arc::clone(&factory.on_updated);
            let on_removed = Arc::clone(&factory.on_removed);
            let theme = factory.theme.clone();
            host.subscribe(Box::new(move |event| {
                let (sink, kind, record) = match event {
                    HostEvent::Created(record) => (&on_created, "created", record),
                    HostEvent::Updated(record) => (&on_updated, "updated", record),
                    HostEvent::Removed(record) => (&on_removed, "removed", record),
                };
                debug!(id = %record.id, kind, "relaying container event");
                sink.dispatch(&hydrate(record, theme.as_ref()));
            }));
        }

        factory
    }

    fn host(&self) -> Result<&Arc<dyn ContainerHost>> {
        self.host.as_ref().ok_or(ContainerError::CapabilityUnavailable)
    }

    /// Hydrate a raw host record with this factory's theme callback.
    pub fn from_record(&self, record: &ContainerRecord) -> ContextualIdentity {
        hydrate(record, self.theme.as_ref())
    }

    /// Build an identity from a store handle and attributes, rendering
    /// with this factory's theme callback.
    pub fn construct(&self, cookie_store: CookieStore, params: IdentityParams) -> ContextualIdentity {
        ContextualIdentity::new(cookie_store, params, self.theme.as_ref())
    }

    pub fn get(&self, cookie_store_id: &str) -> Result<ContextualIdentity> {
        let record = self.host()?.get(cookie_store_id)?;
        Ok(self.from_record(&record))
    }

    /// All managed containers. The default cookie store is not a managed
    /// container and is never included; callers that need it use
    /// [`CookieStore::default_store`] directly.
    pub fn get_all(&self) -> Result<Vec<ContextualIdentity>> {
        let records = self.host()?.query()?;
        Ok(records.iter().map(|r| self.from_record(r)).collect())
    }

    pub fn create(&self, params: &ContainerParams) -> Result<ContextualIdentity> {
        let record = self.host()?.create(params)?;
        Ok(self.from_record(&record))
    }

    pub fn set_params(&self, cookie_store_id: &str, patch: &ContainerPatch) -> Result<ContextualIdentity> {
        let record = self.host()?.update(cookie_store_id, patch)?;
        Ok(self.from_record(&record))
    }

    pub fn remove(&self, cookie_store_id: &str) -> Result<()> {
        self.host()?.remove(cookie_store_id)
    }
}

fn hydrate(record: &ContainerRecord, theme: Option<&ThemeCallback>) -> ContextualIdentity {
    ContextualIdentity::new(
        CookieStore::new(record.id.clone()),
        IdentityParams {
            name: record.name.clone(),
            icon: record.icon.clone(),
            color: record.color.clone(),
        },
        theme,
    )
}
