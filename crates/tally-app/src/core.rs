//! Application core
//!
//! `AppCore` owns the reactive store, navigation state, and locale, and
//! holds the optional runtime bridge. Frontends share it as
//! `Arc<RwLock<AppCore>>` and pass that handle to workflows.

use crate::bridge::BoxedReportBridge;
use crate::locale::{Locale, LocaleTag};
use crate::navigation::{NavigationState, Screen};
use crate::store::ReportStore;

/// Application configuration
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// UI locale
    pub locale: LocaleTag,
    /// Screen shown when the navigation stack empties
    pub fallback_screen: Screen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: LocaleTag::default(),
            fallback_screen: Screen::ReportList,
        }
    }
}

/// The portable application core.
///
/// No runtime dependencies: attaching a bridge is optional, and everything
/// else is in-memory reactive state.
pub struct AppCore {
    store: ReportStore,
    navigation: NavigationState,
    locale: Locale,
    bridge: Option<BoxedReportBridge>,
}

impl AppCore {
    /// Create a core with no runtime bridge (offline mode).
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: ReportStore::new(),
            navigation: NavigationState::new(config.fallback_screen),
            locale: Locale::new(config.locale),
            bridge: None,
        }
    }

    /// Create a core with a runtime bridge attached.
    pub fn with_bridge(config: AppConfig, bridge: BoxedReportBridge) -> Self {
        Self {
            bridge: Some(bridge),
            ..Self::new(config)
        }
    }

    /// The reactive report store.
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// The navigation stack.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The runtime bridge, when one is attached.
    pub fn bridge(&self) -> Option<BoxedReportBridge> {
        self.bridge.clone()
    }
}
