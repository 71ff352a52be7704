//! Navigation error taxonomy and spoken user notices

use thiserror::Error;

/// Forced narration texts for user-reportable failures
pub mod notice {
    /// Spoken when no position fix is available for a tick.
    pub const ENABLE_LOCATION: &str = "Please turn on location";

    /// Spoken when the destination search fails or matches nothing.
    pub const DESTINATION_NOT_FOUND: &str = "Destination could not be found";

    /// Spoken when no walking route can be computed.
    pub const ROUTE_NOT_AVAILABLE: &str = "Route is not available";
}

/// Errors that can occur while coordinating a navigation session
///
/// Per-tick failures (`PositionUnavailable`, `SearchFailure`, `RoutingFailure`)
/// are recovered locally: the tick is skipped, the user hears a forced notice,
/// and the loop continues. Only `InitializationFailure` is fatal to the feature.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("location permission not granted")]
    PermissionDenied,

    #[error("current position unavailable")]
    PositionUnavailable,

    #[error("destination search failed: {reason}")]
    SearchFailure { reason: String },

    #[error("route computation failed: {reason}")]
    RoutingFailure { reason: String },

    #[error("navigation engine initialization failed: {0}")]
    InitializationFailure(String),

    #[error("a navigation session is already running")]
    SessionActive,
}

impl NavError {
    /// Check if this error aborts the whole feature rather than one tick
    pub fn is_fatal(&self) -> bool {
        matches!(self, NavError::InitializationFailure(_))
    }

    /// The forced narration text for user-reportable failures
    ///
    /// Control-surface errors (`PermissionDenied`, `SessionActive`,
    /// `InitializationFailure`) are surfaced to the caller, not spoken.
    pub fn spoken_notice(&self) -> Option<&'static str> {
        match self {
            NavError::PositionUnavailable => Some(notice::ENABLE_LOCATION),
            NavError::SearchFailure { .. } => Some(notice::DESTINATION_NOT_FOUND),
            NavError::RoutingFailure { .. } => Some(notice::ROUTE_NOT_AVAILABLE),
            _ => None,
        }
    }
}
