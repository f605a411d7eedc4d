//! Contextual identities: a cookie store plus its user-visible attributes
//! and the rendering computed from them.
//!
//! Rendering is a pure function of `(name, icon, color)` and the theme
//! callback in effect — it is computed once at construction and never
//! changes afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::cookie_store::CookieStore;

/// User-visible container attributes as the host reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityParams {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// The rendering of an identity: resolved icon URL and color code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedParams {
    pub name: String,
    pub icon_url: String,
    pub color_code: String,
}

/// Pluggable mapping from raw attributes to their rendering.
pub type ThemeCallback = Arc<dyn Fn(&IdentityParams) -> DisplayedParams + Send + Sync>;

// TODO: allow theming, or consider syncing with the browser's theme
static COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("blue", "#37adff"),
        ("green", "#51cd00"),
        ("pink", "#ff4bda"),
        ("turquoise", "#00c79a"),
        ("yellow", "#ffcb00"),
        ("red", "#ff613d"),
        ("toolbar", "#7c7c7d"),
        ("orange", "#ff9f00"),
        ("purple", "#af51f5"),
    ])
});

const FALLBACK_COLOR: &str = "toolbar";

/// Resolve a named color to its hex code. Unknown names resolve via the
/// toolbar fallback; this never fails.
pub fn color_code(color: &str) -> &'static str {
    COLORS.get(color).copied().unwrap_or(COLORS[FALLBACK_COLOR])
}

/// The default theme: fixed resource path for icons, fixed color table
/// with the toolbar fallback for colors.
pub fn default_theme() -> ThemeCallback {
    Arc::new(|params: &IdentityParams| DisplayedParams {
        name: params.name.clone(),
        icon_url: format!("resource://usercontext-content/{}", params.icon),
        color_code: color_code(&params.color).to_string(),
    })
}

/// Read access to a container as displayed to the user.
pub trait DisplayedContainer {
    fn cookie_store(&self) -> &CookieStore;
    fn name(&self) -> &str;
    fn icon_url(&self) -> &str;
    fn color_code(&self) -> &str;
}

/// An immutable container identity: store handle, raw attributes, and the
/// rendering produced by the theme callback at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualIdentity {
    pub cookie_store: CookieStore,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub icon_url: String,
    pub color_code: String,
}

impl ContextualIdentity {
    /// Build an identity, rendering through `theme` (or the default theme
    /// when `None`).
    pub fn new(
        cookie_store: CookieStore,
        params: IdentityParams,
        theme: Option<&ThemeCallback>,
    ) -> Self {
        let default;
        let theme = match theme {
            Some(theme) => theme,
            None => {
                default = default_theme();
                &default
            }
        };
        let displayed = theme(&params);
        Self {
            cookie_store,
            name: params.name,
            icon: params.icon,
            color: params.color,
            icon_url: displayed.icon_url,
            color_code: displayed.color_code,
        }
    }
}

impl DisplayedContainer for ContextualIdentity {
    fn cookie_store(&self) -> &CookieStore {
        &self.cookie_store
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn icon_url(&self) -> &str {
        &self.icon_url
    }

    fn color_code(&self) -> &str {
        &self.color_code
    }
}
