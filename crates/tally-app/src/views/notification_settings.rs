//! # Notification Settings View State
//!
//! Derives everything the notification-preference screen needs from a
//! report snapshot, its archival record, and the locale: the ordered
//! option list with the current selection marked, and whether the control
//! is disabled.

use crate::locale::Locale;
use crate::policies;
use crate::store::ReportStore;
use futures_signals::map_ref;
use futures_signals::signal::Signal;
use serde::{Deserialize, Serialize};
use tally_core::{ArchiveRecord, NotificationPreference, Report, ReportId};

/// One selectable row in the preference list.
///
/// Transient: rebuilt on every recomputation, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOption {
    /// The preference this row selects
    pub value: NotificationPreference,
    /// Localized display text
    pub text: String,
    /// Stable list key for the row
    pub key_for_list: String,
    /// Whether this row is the current preference
    pub is_selected: bool,
}

/// View state for the notification settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettingsView {
    /// The report being configured
    pub report_id: ReportId,
    /// Localized header title
    pub title: String,
    /// The report's current preference
    pub current: NotificationPreference,
    /// Whether the preference control is locked.
    ///
    /// True when the report is an archived non-expense report, a self-DM,
    /// or a non-money-request report whose current preference is hidden
    /// from the user (no visible row would correspond to it).
    pub should_disable: bool,
    /// Selectable rows in canonical order, hidden kinds dropped.
    pub options: Vec<PreferenceOption>,
}

impl NotificationSettingsView {
    /// Build the view from snapshots. Pure and synchronous.
    pub fn build(report: &Report, archive: Option<&ArchiveRecord>, locale: &Locale) -> Self {
        let current = report.notification_preference();

        let should_disable = report.is_archived_non_expense_report(archive)
            || report.is_self_dm()
            || (!report.is_money_request_report()
                && policies::is_hidden_for_current_user(current));

        let options = policies::selectable_preferences()
            .map(|preference| PreferenceOption {
                value: preference,
                text: locale.preference_label(preference),
                key_for_list: preference.as_str().to_string(),
                is_selected: preference == current,
            })
            .collect();

        Self {
            report_id: report.id,
            title: locale.notification_settings_title(),
            current,
            should_disable,
            options,
        }
    }

    /// Key of the row that should receive initial focus, if any.
    ///
    /// `None` when the current preference is hidden (no row is selected).
    pub fn initially_focused_key(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.is_selected)
            .map(|option| option.key_for_list.as_str())
    }
}

/// What the settings screen should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsScreenState {
    /// The report exists; render the settings view.
    Ready(NotificationSettingsView),
    /// The report is gone (deleted mid-flight or never existed); render
    /// the not-found fallback.
    NotFound,
}

impl SettingsScreenState {
    /// Convenience accessor for the ready view.
    pub fn view(&self) -> Option<&NotificationSettingsView> {
        match self {
            Self::Ready(view) => Some(view),
            Self::NotFound => None,
        }
    }
}

/// Reactive derivation of the settings screen for one report.
///
/// Recomputes whenever the report snapshot or its archival record changes.
/// A missing report degrades to [`SettingsScreenState::NotFound`] instead
/// of failing.
pub fn screen_signal(
    store: &ReportStore,
    report_id: ReportId,
    locale: Locale,
) -> impl Signal<Item = SettingsScreenState> {
    map_ref! {
        let report = store.report_signal(report_id),
        let archive = store.archive_signal(report_id) =>
        match report {
            Some(report) => SettingsScreenState::Ready(NotificationSettingsView::build(
                report,
                archive.as_ref(),
                &locale,
            )),
            None => SettingsScreenState::NotFound,
        }
    }
}
