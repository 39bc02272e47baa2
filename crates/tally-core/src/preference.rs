//! Notification preference levels
//!
//! A closed set of verbosity levels controlling how a user is notified
//! about activity on a report. The set and its canonical order are fixed;
//! which members are user-selectable is a policy decision made in
//! `tally-app`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification verbosity for a report
///
/// Exactly one preference is current for a given report at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    /// Notify on every message
    Always,
    /// Batch notifications into a daily digest
    Daily,
    /// Never notify
    Mute,
    /// Legacy implicit state: the user has never been addressed on the
    /// report. Not user-selectable.
    Hidden,
}

impl NotificationPreference {
    /// All preference kinds in canonical display order.
    pub const ALL: [NotificationPreference; 4] =
        [Self::Always, Self::Daily, Self::Mute, Self::Hidden];

    /// Stable lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Daily => "daily",
            Self::Mute => "mute",
            Self::Hidden => "hidden",
        }
    }

    /// Whether this is the legacy implicit state
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for NotificationPreference {
    /// Reports with no stored preference behave as `Hidden`.
    fn default() -> Self {
        Self::Hidden
    }
}

impl fmt::Display for NotificationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_exhaustive() {
        // Every variant appears exactly once in ALL.
        for pref in NotificationPreference::ALL {
            assert_eq!(
                NotificationPreference::ALL
                    .iter()
                    .filter(|p| **p == pref)
                    .count(),
                1
            );
        }
        assert_eq!(NotificationPreference::ALL.len(), 4);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(NotificationPreference::Always.as_str(), "always");
        assert_eq!(NotificationPreference::Daily.as_str(), "daily");
        assert_eq!(NotificationPreference::Mute.as_str(), "mute");
        assert_eq!(NotificationPreference::Hidden.as_str(), "hidden");
    }

    #[test]
    fn test_serde_matches_as_str() {
        for pref in NotificationPreference::ALL {
            let json = serde_json::to_string(&pref).unwrap();
            assert_eq!(json, format!("\"{}\"", pref.as_str()));
            let back: NotificationPreference = serde_json::from_str(&json).unwrap();
            assert_eq!(back, pref);
        }
    }

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(
            NotificationPreference::default(),
            NotificationPreference::Hidden
        );
    }
}
