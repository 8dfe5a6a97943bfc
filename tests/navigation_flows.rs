//! End-to-end navigation scenarios against the public routing API:
//! back-stack policies, route string decomposition, and observer
//! notification, driven the way the TUI host drives them.

use confsched::core::nav::NavigationState;
use confsched::core::route::{Route, RouteError, Screen};

// ============================================================================
// Route table coverage
// ============================================================================

#[test]
fn navigating_to_each_top_level_route_activates_it() {
    for screen in [Screen::SessionList, Screen::SpeakerList, Screen::RoomList] {
        let mut nav = NavigationState::new(Route::SessionList);
        let route = Route::top_level(screen).expect("top-level screen");
        nav.navigate_top_level(route.clone());
        assert_eq!(*nav.current(), route);
    }
}

#[test]
fn detail_screen_is_not_a_top_level_destination() {
    assert_eq!(Route::top_level(Screen::SessionDetails), None);
}

// ============================================================================
// Back-stack policies
// ============================================================================

#[test]
fn navigating_to_active_route_is_idempotent() {
    let mut nav = NavigationState::new(Route::SessionList);
    nav.navigate(Route::RoomList);
    let depth = nav.depth();

    nav.navigate(Route::RoomList);
    assert_eq!(nav.depth(), depth);
}

#[test]
fn bottom_bar_navigation_from_nested_screen_collapses_to_depth_one() {
    let mut nav = NavigationState::new(Route::SessionList);
    nav.navigate(Route::session_details("42"));
    assert_eq!(nav.depth(), 2);

    nav.navigate_top_level(Route::SpeakerList);
    assert_eq!(nav.depth(), 1);
    assert_eq!(*nav.current(), Route::SpeakerList);
}

#[test]
fn pop_back_at_start_route_leaves_state_unchanged() {
    let mut nav = NavigationState::new(Route::SessionList);
    nav.pop_back();
    nav.pop_back();
    assert_eq!(*nav.current(), Route::SessionList);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn tab_round_trip_leaves_no_duplicate_entries() {
    // SessionList → tap Speaker List → tap Session List
    let mut nav = NavigationState::new(Route::SessionList);
    nav.navigate_top_level(Route::SpeakerList);
    nav.navigate_top_level(Route::SessionList);

    assert_eq!(nav.depth(), 1);
    assert_eq!(*nav.current(), Route::SessionList);
}

// ============================================================================
// Detail route scenarios
// ============================================================================

#[test]
fn detail_route_string_decomposes_to_screen_and_id() {
    let route = Route::parse("Session Details/42").unwrap();
    assert_eq!(route.screen(), Screen::SessionDetails);
    assert_eq!(route, Route::session_details("42"));
}

#[test]
fn open_detail_then_pop_back_returns_to_session_list() {
    let mut nav = NavigationState::new(Route::SessionList);
    nav.navigate(Route::parse("Session Details/42").unwrap());
    assert_eq!(*nav.current(), Route::session_details("42"));

    nav.pop_back();
    assert_eq!(*nav.current(), Route::SessionList);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn detail_route_without_id_is_malformed() {
    assert_eq!(
        Route::parse("Session Details"),
        Err(RouteError::MissingParam(Screen::SessionDetails))
    );
}

#[test]
fn unknown_route_identifier_is_rejected_loudly() {
    let err = Route::parse("Exhibition Hall").unwrap_err();
    assert!(matches!(err, RouteError::Unknown(_)));
    // The error message names the offending route.
    assert!(err.to_string().contains("Exhibition Hall"));
}

// ============================================================================
// Observation
// ============================================================================

#[test]
fn renderer_subscription_sees_transitions_in_order() {
    let mut nav = NavigationState::new(Route::SessionList);
    let rx = nav.subscribe();

    nav.navigate(Route::session_details("keynote"));
    nav.pop_back();
    nav.navigate_top_level(Route::RoomList);
    nav.navigate_top_level(Route::RoomList); // no-op, must not notify

    let seen: Vec<Route> = rx.try_iter().collect();
    assert_eq!(
        seen,
        vec![
            Route::session_details("keynote"),
            Route::SessionList,
            Route::RoomList,
        ]
    );
}

#[test]
fn custom_start_destination_is_honored() {
    let nav = NavigationState::new(Route::SpeakerList);
    assert_eq!(*nav.current(), Route::SpeakerList);
    assert_eq!(nav.depth(), 1);
}
