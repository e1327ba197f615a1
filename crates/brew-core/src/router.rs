//! Top-level view navigation state machine.

use std::str::FromStr;

/// The application's top-level views.
///
/// Navigation between views is unconditional: any view can be reached
/// from any other with no guards, and the router persists for the whole
/// session (there is no terminal state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Cafe discovery landing view (initial)
    #[default]
    Home,

    /// Booking and redemption history
    MyBookings,

    /// Subscription plan marketing content
    Plans,
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "bookings" | "mybookings" => Ok(View::MyBookings),
            "plans" => Ok(View::Plans),
            _ => Err(format!("Invalid view: {s}")),
        }
    }
}

impl View {
    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::MyBookings => "bookings",
            View::Plans => "plans",
        }
    }
}

/// In-page scroll targets on the Home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeAnchor {
    /// Top-of-page hero section (initial)
    #[default]
    Hero,

    /// The cafe discovery grid
    Cafes,
}

/// Navigation state for one application session.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: View,
    home_anchor: HomeAnchor,
}

impl ViewRouter {
    /// Create a router positioned at the Home view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view currently shown.
    pub fn current(&self) -> View {
        self.current
    }

    /// The active scroll anchor within the Home view.
    pub fn home_anchor(&self) -> HomeAnchor {
        self.home_anchor
    }

    /// Navigate to the given view. Always succeeds.
    pub fn navigate(&mut self, view: View) {
        self.current = view;
    }

    /// Smooth-scroll to an anchor within Home.
    ///
    /// This is not a view transition: the current view is untouched, only
    /// the scroll anchor moves.
    pub fn scroll_to(&mut self, anchor: HomeAnchor) {
        self.home_anchor = anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_home() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), View::Home);
        assert_eq!(router.home_anchor(), HomeAnchor::Hero);
    }

    #[test]
    fn test_fully_connected_navigation() {
        let views = [View::Home, View::MyBookings, View::Plans];
        for from in views {
            for to in views {
                let mut router = ViewRouter::new();
                router.navigate(from);
                router.navigate(to);
                assert_eq!(router.current(), to);
            }
        }
    }

    #[test]
    fn test_scroll_is_not_a_transition() {
        let mut router = ViewRouter::new();
        router.scroll_to(HomeAnchor::Cafes);
        assert_eq!(router.current(), View::Home);
        assert_eq!(router.home_anchor(), HomeAnchor::Cafes);

        router.navigate(View::Plans);
        router.scroll_to(HomeAnchor::Hero);
        assert_eq!(router.current(), View::Plans);
    }

    #[test]
    fn test_view_round_trip() {
        for view in [View::Home, View::MyBookings, View::Plans] {
            assert_eq!(view.as_str().parse::<View>().expect("parses"), view);
        }
        assert!("checkout".parse::<View>().is_err());
    }
}
