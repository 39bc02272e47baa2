//! Reactive report store
//!
//! Key-value state shared between workflows and frontends. Each collection
//! is a `MutableBTreeMap` keyed by `ReportId`; frontends subscribe to a
//! single key and re-render when that entry changes.
//!
//! The store owns snapshots only. Durable persistence happens behind the
//! `ReportBridge`; workflows write here optimistically and let the bridge
//! reconcile in the background.

use futures_signals::signal::Signal;
use futures_signals::signal_map::{MutableBTreeMap, SignalMapExt};
use tally_core::{ArchiveRecord, NotificationPreference, Report, ReportId};

/// Reactive state for reports and their archival metadata.
///
/// Archival records live in their own collection rather than on the report
/// snapshot: most reports never archive, and the two collections change on
/// different cadences.
pub struct ReportStore {
    reports: MutableBTreeMap<ReportId, Report>,
    archives: MutableBTreeMap<ReportId, ArchiveRecord>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            reports: MutableBTreeMap::new(),
            archives: MutableBTreeMap::new(),
        }
    }

    // =========================================================================
    // Snapshot reads
    // =========================================================================

    /// Get a report snapshot by ID.
    pub fn report(&self, id: &ReportId) -> Option<Report> {
        self.reports.lock_ref().get(id).cloned()
    }

    /// Get the archival record for a report, if it is archived.
    pub fn archive(&self, id: &ReportId) -> Option<ArchiveRecord> {
        self.archives.lock_ref().get(id).cloned()
    }

    /// Number of reports currently in the store.
    pub fn report_count(&self) -> usize {
        self.reports.lock_ref().len()
    }

    // =========================================================================
    // Subscribe-by-key
    // =========================================================================

    /// Signal for a single report entry.
    ///
    /// Emits the current snapshot immediately, then again on every
    /// insert/update/remove of that key. `None` means the report does not
    /// exist (deleted mid-flight included).
    pub fn report_signal(&self, id: ReportId) -> impl Signal<Item = Option<Report>> {
        self.reports.signal_map_cloned().key_cloned(id)
    }

    /// Signal for a single archival record.
    ///
    /// `None` is the normal "not archived" state.
    pub fn archive_signal(&self, id: ReportId) -> impl Signal<Item = Option<ArchiveRecord>> {
        self.archives.signal_map_cloned().key_cloned(id)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Insert or replace a report snapshot.
    pub fn upsert_report(&self, report: Report) {
        self.reports.lock_mut().insert_cloned(report.id, report);
    }

    /// Remove a report. Subscribers observe `None`.
    pub fn remove_report(&self, id: &ReportId) -> Option<Report> {
        self.reports.lock_mut().remove(id)
    }

    /// Mark a report archived.
    pub fn set_archive(&self, id: ReportId, record: ArchiveRecord) {
        self.archives.lock_mut().insert_cloned(id, record);
    }

    /// Clear a report's archival record.
    pub fn clear_archive(&self, id: &ReportId) -> Option<ArchiveRecord> {
        self.archives.lock_mut().remove(id)
    }

    /// Set the notification preference on a stored report.
    ///
    /// Returns false when the report is not in the store.
    pub fn set_notification_preference(
        &self,
        id: &ReportId,
        preference: NotificationPreference,
    ) -> bool {
        let mut lock = self.reports.lock_mut();
        let Some(mut report) = lock.get(id).cloned() else {
            return false;
        };
        report.notification_preference = Some(preference);
        lock.insert_cloned(*id, report);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use futures_signals::signal::SignalExt;
    use tally_core::ReportType;

    fn report(id: ReportId) -> Report {
        Report::new_chat(id, "general")
    }

    #[test]
    fn test_snapshot_reads() {
        let store = ReportStore::new();
        let id = ReportId::new();
        assert!(store.report(&id).is_none());

        store.upsert_report(report(id));
        assert_eq!(store.report(&id).unwrap().name, "general");
        assert_eq!(store.report_count(), 1);

        assert!(store.archive(&id).is_none());
        store.set_archive(id, ArchiveRecord::at(1));
        assert!(store.archive(&id).is_some());
        store.clear_archive(&id);
        assert!(store.archive(&id).is_none());
    }

    #[test]
    fn test_set_notification_preference() {
        let store = ReportStore::new();
        let id = ReportId::new();
        assert!(!store.set_notification_preference(&id, NotificationPreference::Mute));

        store.upsert_report(report(id));
        assert!(store.set_notification_preference(&id, NotificationPreference::Mute));
        assert_eq!(
            store.report(&id).unwrap().notification_preference(),
            NotificationPreference::Mute
        );
    }

    #[test]
    fn test_report_signal_emits_on_change() {
        let store = ReportStore::new();
        let id = ReportId::new();
        let mut stream = store.report_signal(id).to_stream();

        futures::executor::block_on(async {
            // Initial emission: key absent.
            assert_eq!(stream.next().await, Some(None));

            store.upsert_report(report(id));
            assert_eq!(
                stream.next().await.flatten().map(|r| r.name),
                Some("general".to_string())
            );

            store.remove_report(&id);
            assert_eq!(stream.next().await, Some(None));
        });
    }

    #[test]
    fn test_signal_ignores_other_keys() {
        let store = ReportStore::new();
        let id = ReportId::new();
        let other = ReportId::new();
        store.upsert_report(report(id));

        let mut stream = store.report_signal(id).to_stream();
        futures::executor::block_on(async {
            let first = stream.next().await.flatten().unwrap();
            assert_eq!(first.report_type, ReportType::Chat);

            // Changing an unrelated key must not change this key's value.
            store.upsert_report(report(other));
            store.set_notification_preference(&id, NotificationPreference::Daily);
            let next = stream.next().await.flatten().unwrap();
            assert_eq!(
                next.notification_preference(),
                NotificationPreference::Daily
            );
        });
    }
}
