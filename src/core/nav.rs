//! # Navigation state
//!
//! The back-stack behind the screen host. Exactly one owner (the TUI
//! event loop) ever mutates this; everything else observes.
//!
//! Two navigation policies exist:
//!
//! - [`NavigationState::navigate`] — plain push with launch-single-top:
//!   navigating to the route already on top is a no-op, so rapid repeated
//!   selections never create duplicate stack entries.
//! - [`NavigationState::navigate_top_level`] — the bottom-bar policy:
//!   launch-single-top plus pop-up-to-root. Switching tabs collapses the
//!   stack to exactly the new destination, so tab hopping never
//!   accumulates back-stack depth.
//!
//! Renderers subscribe via [`NavigationState::subscribe`] and receive the
//! new active route after every effective transition. The channel replaces
//! a framework-coupled "observe the back-stack as state" pattern; the
//! receiver side decides when to redraw.

use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

use crate::core::route::Route;

/// The active route plus the ordered history beneath it. Created when the
/// host mounts, dropped on teardown; never persisted.
pub struct NavigationState {
    root: Route,
    /// Entries pushed above the root, most recent last.
    rest: Vec<Route>,
    observers: Vec<Sender<Route>>,
}

impl NavigationState {
    pub fn new(start: Route) -> Self {
        Self {
            root: start,
            rest: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// The currently active route.
    pub fn current(&self) -> &Route {
        self.rest.last().unwrap_or(&self.root)
    }

    /// Back-stack depth, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.rest.len() + 1
    }

    /// Push `route` and make it active. No-op if `route` is already the
    /// active route (launch-single-top).
    pub fn navigate(&mut self, route: Route) {
        if *self.current() == route {
            debug!("navigate({route}) ignored: already active");
            return;
        }
        debug!("navigate({route})");
        self.rest.push(route);
        self.notify();
    }

    /// Bottom-bar navigation: clear everything and make `route` the sole
    /// entry. Re-selecting the active tab on an otherwise empty stack is
    /// a no-op.
    pub fn navigate_top_level(&mut self, route: Route) {
        if self.rest.is_empty() && self.root == route {
            debug!("navigate_top_level({route}) ignored: already active");
            return;
        }
        debug!("navigate_top_level({route})");
        self.rest.clear();
        self.root = route;
        self.notify();
    }

    /// Remove the active route and reactivate the previous entry.
    /// Silently does nothing when already at the root.
    pub fn pop_back(&mut self) {
        match self.rest.pop() {
            Some(popped) => {
                debug!("pop_back: left {popped}, now at {}", self.current());
                self.notify();
            }
            None => debug!("pop_back ignored: already at root"),
        }
    }

    /// Subscribe to route changes. The returned receiver gets the new
    /// active route after every effective transition. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<Route> {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        rx
    }

    fn notify(&mut self) {
        let current = self.current().clone();
        // Prune observers whose receiver side is gone.
        self.observers.retain(|tx| tx.send(current.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::Screen;

    fn host() -> NavigationState {
        NavigationState::new(Route::SessionList)
    }

    #[test]
    fn test_starts_at_start_destination() {
        let nav = host();
        assert_eq!(*nav.current(), Route::SessionList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_activates_route() {
        for screen in [Screen::SessionList, Screen::SpeakerList, Screen::RoomList] {
            let mut nav = host();
            let route = Route::top_level(screen).unwrap();
            nav.navigate_top_level(route.clone());
            assert_eq!(*nav.current(), route);
        }
    }

    #[test]
    fn test_navigate_to_active_route_is_idempotent() {
        let mut nav = host();
        nav.navigate(Route::SpeakerList);
        let depth = nav.depth();
        nav.navigate(Route::SpeakerList);
        nav.navigate(Route::SpeakerList);
        assert_eq!(nav.depth(), depth);
    }

    #[test]
    fn test_navigate_to_different_detail_param_is_a_transition() {
        let mut nav = host();
        nav.navigate(Route::session_details("42"));
        nav.navigate(Route::session_details("42"));
        assert_eq!(nav.depth(), 2);
        nav.navigate(Route::session_details("43"));
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_top_level_navigation_pops_to_root() {
        let mut nav = host();
        nav.navigate(Route::session_details("42"));
        nav.navigate(Route::SpeakerList);
        assert_eq!(nav.depth(), 3);

        nav.navigate_top_level(Route::RoomList);
        assert_eq!(*nav.current(), Route::RoomList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_tab_switching_never_accumulates_depth() {
        let mut nav = host();
        nav.navigate_top_level(Route::SpeakerList);
        nav.navigate_top_level(Route::SessionList);
        nav.navigate_top_level(Route::SpeakerList);
        nav.navigate_top_level(Route::SessionList);
        assert_eq!(nav.depth(), 1);
        assert_eq!(*nav.current(), Route::SessionList);
    }

    #[test]
    fn test_reselecting_active_tab_is_a_no_op() {
        let mut nav = host();
        let rx = nav.subscribe();
        nav.navigate_top_level(Route::SessionList);
        assert!(rx.try_recv().is_err());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_pop_back_returns_to_previous_entry() {
        let mut nav = host();
        nav.navigate(Route::session_details("42"));
        nav.pop_back();
        assert_eq!(*nav.current(), Route::SessionList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_pop_back_at_root_is_a_no_op() {
        let mut nav = host();
        nav.pop_back();
        assert_eq!(*nav.current(), Route::SessionList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_observers_see_every_effective_transition() {
        let mut nav = host();
        let rx = nav.subscribe();

        nav.navigate(Route::session_details("7"));
        nav.pop_back();
        nav.navigate_top_level(Route::RoomList);

        let seen: Vec<Route> = rx.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                Route::session_details("7"),
                Route::SessionList,
                Route::RoomList,
            ]
        );
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let mut nav = host();
        drop(nav.subscribe());
        nav.navigate(Route::SpeakerList);
        assert_eq!(nav.observers.len(), 0);
    }
}
