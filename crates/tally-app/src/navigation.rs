//! Navigation state
//!
//! A signal-backed screen stack shared by all frontends. Screens carry
//! their parameters; the optional `back_to` route parameter lets a screen
//! return to the place that opened it rather than its stack parent.

use futures_signals::signal::{Mutable, Signal, SignalExt};
use serde::{Deserialize, Serialize};
use tally_core::ReportId;

/// Screen identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Report list / inbox
    ReportList,
    /// A report's conversation thread
    Report(ReportId),
    /// A report's details page
    ReportDetails(ReportId),
    /// Notification preference settings for a report
    NotificationSettings(ReportId),
}

/// A screen plus its route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The screen to show
    pub screen: Screen,
    /// Where "back" should land, when the opener wants to override the
    /// stack parent. Absent means normal stack behavior.
    #[serde(default)]
    pub back_to: Option<Screen>,
}

impl Route {
    /// Route with default back behavior.
    pub fn to(screen: Screen) -> Self {
        Self {
            screen,
            back_to: None,
        }
    }

    /// Route that overrides where "back" lands.
    pub fn with_back_to(screen: Screen, back_to: Screen) -> Self {
        Self {
            screen,
            back_to: Some(back_to),
        }
    }
}

/// Signal-backed navigation stack.
///
/// Single-threaded UI semantics: mutations come from the event loop, and
/// frontends re-render from `current_signal`.
pub struct NavigationState {
    stack: Mutable<Vec<Route>>,
    fallback: Screen,
}

impl NavigationState {
    /// Create a stack showing the fallback screen.
    pub fn new(fallback: Screen) -> Self {
        Self {
            stack: Mutable::new(vec![Route::to(fallback)]),
            fallback,
        }
    }

    /// The route currently on top of the stack.
    pub fn current(&self) -> Route {
        self.stack
            .lock_ref()
            .last()
            .copied()
            .unwrap_or(Route::to(self.fallback))
    }

    /// Signal of the current route.
    pub fn current_signal(&self) -> impl Signal<Item = Route> {
        let fallback = self.fallback;
        self.stack
            .signal_cloned()
            .map(move |stack| stack.last().copied().unwrap_or(Route::to(fallback)))
    }

    /// Push a route onto the stack.
    pub fn push(&self, route: Route) {
        self.stack.lock_mut().push(route);
    }

    /// Leave the current screen.
    ///
    /// Resolution order: the current route's `back_to` override, then the
    /// caller-supplied fallback, then the stack parent, then the configured
    /// fallback screen.
    pub fn go_back(&self, fallback: Option<Screen>) {
        let mut stack = self.stack.lock_mut();
        let leaving = stack.pop();

        let target = leaving
            .and_then(|route| route.back_to)
            .or(fallback)
            .map(Route::to);

        match target {
            Some(route) => stack.push(route),
            None if stack.is_empty() => stack.push(Route::to(self.fallback)),
            None => {}
        }
    }

    /// How many routes are on the stack (primarily for tests).
    pub fn depth(&self) -> usize {
        self.stack.lock_ref().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (ReportId, ReportId) {
        (ReportId::new(), ReportId::new())
    }

    #[test]
    fn test_back_pops_to_stack_parent() {
        let (a, _) = ids();
        let nav = NavigationState::new(Screen::ReportList);
        nav.push(Route::to(Screen::ReportDetails(a)));
        nav.push(Route::to(Screen::NotificationSettings(a)));

        nav.go_back(None);
        assert_eq!(nav.current().screen, Screen::ReportDetails(a));
    }

    #[test]
    fn test_back_honors_back_to_param() {
        let (a, b) = ids();
        let nav = NavigationState::new(Screen::ReportList);
        nav.push(Route::to(Screen::ReportDetails(a)));
        nav.push(Route::with_back_to(
            Screen::NotificationSettings(a),
            Screen::Report(b),
        ));

        nav.go_back(None);
        assert_eq!(nav.current().screen, Screen::Report(b));
    }

    #[test]
    fn test_back_uses_caller_fallback_over_parent() {
        let (a, b) = ids();
        let nav = NavigationState::new(Screen::ReportList);
        nav.push(Route::to(Screen::NotificationSettings(a)));

        nav.go_back(Some(Screen::ReportDetails(b)));
        assert_eq!(nav.current().screen, Screen::ReportDetails(b));
    }

    #[test]
    fn test_back_on_empty_stack_lands_on_fallback() {
        let nav = NavigationState::new(Screen::ReportList);
        nav.go_back(None);
        nav.go_back(None);
        assert_eq!(nav.current().screen, Screen::ReportList);
        assert_eq!(nav.depth(), 1);
    }
}
