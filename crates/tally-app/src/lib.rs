//! # Tally App
//!
//! Portable headless application core for Tally. Frontends (terminal,
//! mobile, web) render the view state exposed here; they own no business
//! logic of their own.
//!
//! ## Architecture
//!
//! - **store** — reactive key-value state, subscribe-by-key via
//!   `futures-signals`
//! - **views** — derived, FFI-safe view state recomputed on every change
//! - **workflows** — portable business logic taking `&Arc<RwLock<AppCore>>`
//! - **bridge** — async seam to the runtime/persistence layer
//! - **policies** — pure policy predicates kept out of view code
//! - **navigation** — screen stack with route parameters
//! - **locale** — phrase table lookup
//!
//! Workflows read snapshots from the store, issue bridge calls, update the
//! store optimistically, and let signal forwarding notify frontends.

pub mod bridge;
pub mod core;
pub mod locale;
pub mod navigation;
pub mod policies;
pub mod store;
pub mod views;
pub mod workflows;

pub use crate::core::{AppConfig, AppCore};
pub use bridge::{BoxedReportBridge, OfflineBridge, ReportBridge};
pub use locale::{Locale, LocaleTag};
pub use navigation::{NavigationState, Route, Screen};
pub use store::ReportStore;
