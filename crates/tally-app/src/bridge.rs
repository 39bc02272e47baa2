//! # ReportBridge: Abstract Runtime Operations
//!
//! The bridge abstracts operations that need system resources (networking,
//! durable storage) so the app core stays pure. Frontends construct an
//! `AppCore` with a real bridge from the runtime layer, or with
//! [`OfflineBridge`] for offline/demo/test use.

use async_trait::async_trait;
use std::sync::Arc;
use tally_core::{NotificationPreference, ReportId, TallyError};

/// Shared handle to a bridge implementation.
pub type BoxedReportBridge = Arc<dyn ReportBridge>;

/// Runtime operations on reports.
///
/// Calls are asynchronous and may fail; whether a caller awaits the result
/// is the caller's decision. The notification-preference workflow issues
/// its call fire-and-forget and relies on the runtime layer for retry and
/// reconciliation.
#[async_trait]
pub trait ReportBridge: Send + Sync {
    /// Persist a notification preference change.
    ///
    /// `previous` is the preference the user saw when choosing `next`; the
    /// runtime layer uses it to detect and resolve concurrent writes.
    async fn update_notification_preference(
        &self,
        report_id: ReportId,
        previous: NotificationPreference,
        next: NotificationPreference,
    ) -> Result<(), TallyError>;
}

/// Bridge that accepts every call and persists nothing.
///
/// Used when no runtime is attached (offline mode, demos, unit tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBridge;

impl OfflineBridge {
    /// Create an offline bridge.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportBridge for OfflineBridge {
    async fn update_notification_preference(
        &self,
        _report_id: ReportId,
        _previous: NotificationPreference,
        _next: NotificationPreference,
    ) -> Result<(), TallyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_bridge_accepts_calls() {
        let bridge = OfflineBridge::new();
        let result = bridge
            .update_notification_preference(
                ReportId::new(),
                NotificationPreference::Hidden,
                NotificationPreference::Always,
            )
            .await;
        assert!(result.is_ok());
    }
}
