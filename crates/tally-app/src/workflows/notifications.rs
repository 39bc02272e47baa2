//! Notification preference workflow
//!
//! Handles a selection gesture on the notification settings screen:
//! persist the chosen preference through the bridge (fire-and-forget),
//! update the local store optimistically, and navigate back.
//!
//! Per selection gesture the flow is `Idle → Submitting → navigated away`.
//! There is no retry or rollback here; the runtime layer behind the bridge
//! owns failure handling.

use crate::core::AppCore;
use crate::navigation::Screen;
use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tally_core::{NotificationPreference, ReportId, TallyError};

/// Single-execution guard for a selection gesture.
///
/// Radio-list rows can fire multiple selection events from rapid repeated
/// input. The gate admits the first and ignores the rest without blocking.
/// It stays latched until [`reset`](Self::reset), which the frontend calls
/// when the screen is entered again.
#[derive(Debug, Default)]
pub struct SelectionGate {
    engaged: AtomicBool,
}

impl SelectionGate {
    /// Create a disengaged gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim the gate. Returns true for the first caller only.
    pub fn try_engage(&self) -> bool {
        self.engaged
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether a selection is already in flight.
    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::Acquire)
    }

    /// Re-arm the gate for the next screen entry.
    pub fn reset(&self) {
        self.engaged.store(false, Ordering::Release);
    }
}

/// Update a report's notification preference and navigate back.
///
/// The bridge call is issued fire-and-forget: its completion is neither
/// awaited nor surfaced, and navigation is sequenced strictly after the
/// call is issued. The local store is updated optimistically so the UI
/// reflects the choice immediately.
///
/// Returns `NotFound` when the report is no longer in the store; the
/// screen's reactive derivation will already be showing the not-found
/// fallback in that case.
pub async fn update_notification_preference(
    app_core: &Arc<RwLock<AppCore>>,
    report_id: ReportId,
    next: NotificationPreference,
) -> Result<(), TallyError> {
    let core = app_core.read().await;

    let report = core
        .store()
        .report(&report_id)
        .ok_or_else(|| TallyError::not_found(format!("{report_id} is not in the store")))?;
    let previous = report.notification_preference();

    core.store().set_notification_preference(&report_id, next);

    if let Some(bridge) = core.bridge() {
        tokio::spawn(async move {
            if let Err(error) = bridge
                .update_notification_preference(report_id, previous, next)
                .await
            {
                tracing::warn!(%report_id, %error, "notification preference update failed");
            }
        });
    }

    tracing::debug!(%report_id, from = %previous, to = %next, "notification preference changed");

    core.navigation()
        .go_back(Some(Screen::ReportDetails(report_id)));

    Ok(())
}

/// Selection entry point for frontends.
///
/// Admits at most one gesture through the gate; duplicates are ignored.
/// A failed update re-arms the gate so the user can try again.
pub async fn select_notification_preference(
    app_core: &Arc<RwLock<AppCore>>,
    gate: &SelectionGate,
    report_id: ReportId,
    next: NotificationPreference,
) -> Result<(), TallyError> {
    if !gate.try_engage() {
        tracing::debug!(%report_id, "duplicate selection ignored");
        return Ok(());
    }

    let result = update_notification_preference(app_core, report_id, next).await;
    if result.is_err() {
        gate.reset();
    }
    result
}
