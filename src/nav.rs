//! Navigation state and the page registry.
//!
//! One signal holds the active [`View`]; everything that can trigger a page
//! change (the header buttons, the home-page calls to action) gets a copy of
//! the [`Navigator`] handle as a prop. Pages are resolved through a fixed
//! lookup table rather than a match so the unknown-name fallback is one
//! explicit, testable path.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::views::{About, Home, Join, Portfolio};

/// Identifier of one of the four static pages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    About,
    Join,
    Portfolio,
}

impl View {
    /// Every view, in the order the header lists them.
    pub const ALL: [View; 4] = [View::Home, View::About, View::Join, View::Portfolio];

    /// Label shown on the nav button for this view.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Join => "Join",
            View::Portfolio => "Portfolio",
        }
    }

    /// Exact-match parse of a view label. Only the string-keyed fallback path
    /// in [`resolve_name`] uses this.
    pub fn from_name(name: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.label() == name)
    }
}

/// Handle for reading and replacing the active view.
///
/// A copy of this is the only way any part of the app can navigate; the signal
/// itself never leaves the root component.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigator(Signal<View>);

impl Navigator {
    /// The currently active view. Reading through this subscribes the calling
    /// scope to navigation changes.
    pub fn current(&self) -> View {
        (self.0)()
    }

    /// Replace the active view. Navigating to the already-active view is a
    /// no-op apart from the re-render and scroll reset it schedules.
    pub fn go(&self, to: View) {
        debug!(?to, "navigate");
        let mut active = self.0;
        active.set(to);
    }
}

/// Creates the navigation state, starting on [`View::Home`].
pub fn use_navigation() -> Navigator {
    Navigator(use_signal(|| View::Home))
}

/// Runs `action` once on mount and once after each committed navigation,
/// after the new page has rendered. Renders not caused by a navigation do not
/// re-run it.
pub fn use_after_navigate(nav: Navigator, mut action: impl FnMut(View) + 'static) {
    use_effect(move || action(nav.current()));
}

/// One entry in the page registry. Labels come from [`View::label`] so the
/// name of a page lives in one place.
pub struct ViewEntry {
    pub view: View,
    pub render: fn(Navigator) -> Element,
}

/// The fixed page table, in header order. Home comes first so it doubles as
/// the fallback entry.
pub static REGISTRY: [ViewEntry; 4] = [
    ViewEntry { view: View::Home, render: render_home },
    ViewEntry { view: View::About, render: render_about },
    ViewEntry { view: View::Join, render: render_join },
    ViewEntry { view: View::Portfolio, render: render_portfolio },
];

/// Maps a view to its registry entry. Pure and deterministic; if the table
/// ever misses (it cannot for the closed enum) the Home entry is returned
/// rather than failing.
pub fn resolve(view: View) -> &'static ViewEntry {
    REGISTRY
        .iter()
        .find(|entry| entry.view == view)
        .unwrap_or(&REGISTRY[0])
}

/// String-keyed resolution. An unrecognized name is a recoverable anomaly:
/// it is logged and falls back to the Home entry, never surfaced to the user.
pub fn resolve_name(name: &str) -> &'static ViewEntry {
    match View::from_name(name) {
        Some(view) => resolve(view),
        None => {
            warn!(name, "unknown view name, falling back to Home");
            &REGISTRY[0]
        }
    }
}

fn render_home(nav: Navigator) -> Element {
    rsx! {
        Home { nav }
    }
}

fn render_about(_nav: Navigator) -> Element {
    rsx! {
        About {}
    }
}

fn render_join(_nav: Navigator) -> Element {
    rsx! {
        Join {}
    }
}

fn render_portfolio(_nav: Navigator) -> Element {
    rsx! {
        Portfolio {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_header_order() {
        let order: Vec<View> = REGISTRY.iter().map(|entry| entry.view).collect();
        assert_eq!(order, View::ALL);
        assert_eq!(View::ALL.map(View::label), ["Home", "About", "Join", "Portfolio"]);
    }

    #[test]
    fn labels_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_name(view.label()), Some(view));
        }
        assert_eq!(View::from_name("home"), None);
        assert_eq!(View::from_name("Settings"), None);
        assert_eq!(View::from_name(""), None);
    }

    #[test]
    fn resolve_is_total() {
        for view in View::ALL {
            assert_eq!(resolve(view).view, view);
            // Same input, same entry.
            assert!(std::ptr::eq(resolve(view), resolve(view)));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_home() {
        assert_eq!(resolve_name("Portfolio").view, View::Portfolio);
        assert_eq!(resolve_name("Blog").view, View::Home);
        assert_eq!(resolve_name("").view, View::Home);
    }
}
