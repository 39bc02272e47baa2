//! # View State Module
//!
//! Derived, FFI-safe view state. Views are pure functions of store
//! snapshots: recomputed on every change, never persisted, and free of
//! side effects. Frontends subscribe to the view signals and render.

pub mod notification_settings;

pub use notification_settings::{
    screen_signal, NotificationSettingsView, PreferenceOption, SettingsScreenState,
};
