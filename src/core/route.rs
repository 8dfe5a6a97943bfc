//! # Routes
//!
//! The closed set of screens and the rule for addressing them.
//!
//! Every screen has a stable human-readable title that doubles as its
//! route identifier. The session detail screen is parameterized: its
//! composed route string is `"Session Details/<id>"`. Composition goes
//! through [`Route`]'s `Display` impl, decomposition through
//! [`Route::parse`]. A detail route without an id is a construction-time
//! error, never a silent default.

use std::fmt;

/// The screens reachable in the app. Closed set; titles are unique and
/// stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    SessionList,
    SessionDetails,
    SpeakerList,
    RoomList,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::SessionList,
        Screen::SessionDetails,
        Screen::SpeakerList,
        Screen::RoomList,
    ];

    /// Human-readable title, doubling as the route identifier.
    pub fn title(self) -> &'static str {
        match self {
            Screen::SessionList => "Session List",
            Screen::SessionDetails => "Session Details",
            Screen::SpeakerList => "Speaker List",
            Screen::RoomList => "Room List",
        }
    }
}

/// A concrete navigation target: a screen plus its path parameter, if the
/// screen takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SessionList,
    SessionDetails { id: String },
    SpeakerList,
    RoomList,
}

impl Route {
    pub fn session_details(id: impl Into<String>) -> Self {
        Route::SessionDetails { id: id.into() }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Route::SessionList => Screen::SessionList,
            Route::SessionDetails { .. } => Screen::SessionDetails,
            Route::SpeakerList => Screen::SpeakerList,
            Route::RoomList => Screen::RoomList,
        }
    }

    /// The parameterless route for a screen, or `None` when the screen
    /// needs a parameter and therefore cannot be a top-level destination.
    pub fn top_level(screen: Screen) -> Option<Route> {
        match screen {
            Screen::SessionList => Some(Route::SessionList),
            Screen::SpeakerList => Some(Route::SpeakerList),
            Screen::RoomList => Some(Route::RoomList),
            Screen::SessionDetails => None,
        }
    }

    /// Decompose a composed route string like `"Session Details/42"`.
    ///
    /// Splits on the first `/` only; the base must match one of the
    /// closed identifiers exactly. Missing or stray parameters are
    /// errors — the caller decides whether that is fatal.
    pub fn parse(raw: &str) -> Result<Route, RouteError> {
        let (base, param) = match raw.split_once('/') {
            Some((base, param)) => (base, Some(param)),
            None => (raw, None),
        };

        let screen = match base {
            "Session List" => Screen::SessionList,
            "Session Details" => Screen::SessionDetails,
            "Speaker List" => Screen::SpeakerList,
            "Room List" => Screen::RoomList,
            _ => return Err(RouteError::Unknown(raw.to_string())),
        };

        match (screen, param) {
            (Screen::SessionDetails, Some(id)) if !id.is_empty() => {
                Ok(Route::SessionDetails { id: id.to_string() })
            }
            (Screen::SessionDetails, _) => Err(RouteError::MissingParam(screen)),
            (_, Some(_)) => Err(RouteError::StrayParam(screen)),
            (Screen::SessionList, None) => Ok(Route::SessionList),
            (Screen::SpeakerList, None) => Ok(Route::SpeakerList),
            (Screen::RoomList, None) => Ok(Route::RoomList),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::SessionDetails { id } => {
                write!(f, "{}/{}", Screen::SessionDetails.title(), id)
            }
            other => f.write_str(other.screen().title()),
        }
    }
}

/// Errors from route construction. A malformed or unknown route indicates
/// a configuration mismatch and should be surfaced, not defaulted away.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The identifier does not name any screen.
    Unknown(String),
    /// A parameterized screen was addressed without its parameter.
    MissingParam(Screen),
    /// A parameterless screen was addressed with a parameter.
    StrayParam(Screen),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(raw) => write!(f, "unknown route: {raw:?}"),
            RouteError::MissingParam(screen) => {
                write!(f, "route {:?} requires a parameter", screen.title())
            }
            RouteError::StrayParam(screen) => {
                write!(f, "route {:?} does not take a parameter", screen.title())
            }
        }
    }
}

impl std::error::Error for RouteError {}
