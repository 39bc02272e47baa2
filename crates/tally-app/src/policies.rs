//! Preference visibility policy
//!
//! Which notification preferences the current user may see and select is
//! policy, not view logic. Keeping the predicate here lets the view model
//! stay a pure derivation and keeps the policy testable on its own.

use tally_core::NotificationPreference;

/// Whether a preference is hidden from the current user.
///
/// `Hidden` is a legacy implicit state written by the system when a user
/// has never been addressed on a report; it has no selectable equivalent
/// and never appears in option lists.
#[must_use]
pub fn is_hidden_for_current_user(preference: NotificationPreference) -> bool {
    preference.is_hidden()
}

/// The preferences a user may choose from, in canonical order.
pub fn selectable_preferences() -> impl Iterator<Item = NotificationPreference> {
    NotificationPreference::ALL
        .into_iter()
        .filter(|pref| !is_hidden_for_current_user(*pref))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_is_the_only_hidden_kind() {
        assert!(is_hidden_for_current_user(NotificationPreference::Hidden));
        assert!(!is_hidden_for_current_user(NotificationPreference::Always));
        assert!(!is_hidden_for_current_user(NotificationPreference::Daily));
        assert!(!is_hidden_for_current_user(NotificationPreference::Mute));
    }

    #[test]
    fn test_selectable_preserves_canonical_order() {
        let selectable: Vec<_> = selectable_preferences().collect();
        assert_eq!(
            selectable,
            vec![
                NotificationPreference::Always,
                NotificationPreference::Daily,
                NotificationPreference::Mute,
            ]
        );
    }
}
