//! Report snapshot types
//!
//! A `Report` is a snapshot of a conversation or transaction thread as read
//! from the reactive store. Snapshots are owned by the store; this crate
//! only defines their shape and the predicates derived from them.

use crate::identifiers::ReportId;
use crate::preference::NotificationPreference;
use serde::{Deserialize, Serialize};

/// What kind of report this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportType {
    /// Plain conversation thread
    #[default]
    Chat,
    /// Expense report (money request)
    Expense,
    /// IOU between individuals (money request)
    Iou,
    /// Invoice thread
    Invoice,
    /// Task thread
    Task,
}

/// Chat flavor for `ReportType::Chat` reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatType {
    /// Group conversation
    Group,
    /// Workspace room
    PolicyRoom,
    /// Announcement room
    Announce,
    /// A conversation with only the current user in it
    SelfDm,
}

/// Why a report was archived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ArchiveReason {
    /// Archived by an administrator or the report owner
    #[default]
    Manual,
    /// The owning workspace was deleted
    WorkspaceDeleted,
    /// An account involved in the report was closed
    AccountClosed,
}

/// Per-report archival metadata
///
/// Kept in its own store collection, separate from the report snapshot.
/// Presence of a record means the report is archived and read-only;
/// absence is the normal "not archived" state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    /// When the report was archived (ms since epoch)
    pub archived_at_ms: u64,
    /// Why the report was archived, when known
    #[serde(default)]
    pub reason: Option<ArchiveReason>,
}

impl ArchiveRecord {
    /// Create a record with no recorded reason
    pub fn at(archived_at_ms: u64) -> Self {
        Self {
            archived_at_ms,
            reason: None,
        }
    }

    /// Create a record with a reason
    pub fn with_reason(archived_at_ms: u64, reason: ArchiveReason) -> Self {
        Self {
            archived_at_ms,
            reason: Some(reason),
        }
    }
}

/// Snapshot of a report entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier
    pub id: ReportId,
    /// Report name shown in headers and lists
    pub name: String,
    /// Report kind
    pub report_type: ReportType,
    /// Chat flavor, for chat reports
    #[serde(default)]
    pub chat_type: Option<ChatType>,
    /// The current user's notification preference for this report.
    /// `None` means no preference was ever stored.
    #[serde(default)]
    pub notification_preference: Option<NotificationPreference>,
}

impl Report {
    /// Create a chat report with defaults
    pub fn new_chat(id: ReportId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            report_type: ReportType::Chat,
            chat_type: None,
            notification_preference: None,
        }
    }

    /// The current notification preference, defaulting to `Hidden` when
    /// none was ever stored.
    #[must_use]
    pub fn notification_preference(&self) -> NotificationPreference {
        self.notification_preference.unwrap_or_default()
    }

    /// Whether this report tracks money requests (expense or IOU)
    #[must_use]
    pub fn is_money_request_report(&self) -> bool {
        matches!(self.report_type, ReportType::Expense | ReportType::Iou)
    }

    /// Whether this is a conversation with only the current user in it
    #[must_use]
    pub fn is_self_dm(&self) -> bool {
        matches!(self.chat_type, Some(ChatType::SelfDm))
    }

    /// Whether this report is archived and is not a money-request report.
    ///
    /// Archived non-expense reports are read-only: settings on them are
    /// locked. Money-request reports stay editable after archival so that
    /// their threads remain usable.
    #[must_use]
    pub fn is_archived_non_expense_report(&self, archive: Option<&ArchiveRecord>) -> bool {
        archive.is_some() && !self.is_money_request_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(chat_type: Option<ChatType>) -> Report {
        Report {
            id: ReportId::new(),
            name: "general".to_string(),
            report_type: ReportType::Chat,
            chat_type,
            notification_preference: Some(NotificationPreference::Always),
        }
    }

    #[test]
    fn test_money_request_kinds() {
        let mut report = chat(None);
        assert!(!report.is_money_request_report());
        report.report_type = ReportType::Expense;
        assert!(report.is_money_request_report());
        report.report_type = ReportType::Iou;
        assert!(report.is_money_request_report());
        report.report_type = ReportType::Invoice;
        assert!(!report.is_money_request_report());
    }

    #[test]
    fn test_self_dm() {
        assert!(chat(Some(ChatType::SelfDm)).is_self_dm());
        assert!(!chat(Some(ChatType::Group)).is_self_dm());
        assert!(!chat(None).is_self_dm());
    }

    #[test]
    fn test_archived_non_expense() {
        let record = ArchiveRecord::at(1_700_000_000_000);
        let report = chat(None);
        assert!(report.is_archived_non_expense_report(Some(&record)));
        assert!(!report.is_archived_non_expense_report(None));

        let mut expense = chat(None);
        expense.report_type = ReportType::Expense;
        assert!(!expense.is_archived_non_expense_report(Some(&record)));
    }

    #[test]
    fn test_preference_defaults_to_hidden() {
        let report = Report::new_chat(ReportId::new(), "general");
        assert_eq!(
            report.notification_preference(),
            NotificationPreference::Hidden
        );
    }

    #[test]
    fn test_archive_record_serde_accepts_missing_reason() {
        let record = ArchiveRecord::at(42);
        let json = serde_json::to_string(&record).unwrap();
        let back: ArchiveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        // A record serialized without the reason field still parses.
        let legacy: ArchiveRecord = serde_json::from_str("{\"archived_at_ms\":42}").unwrap();
        assert_eq!(legacy, record);
    }
}
