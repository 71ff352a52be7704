//! Geographic and route data model
//!
//! Everything here is tick-local: a `Route` or `Place` never survives past the
//! tick that produced it. The only state carried across ticks lives in the
//! session (destination query) and the permission gate.

use serde::{Deserialize, Serialize};

/// Default search radius around the current position, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 100_000;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Circular search area centered on a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCircle {
    pub center: GeoPosition,
    #[serde(rename = "radius-m")]
    pub radius_m: u32,
}

impl GeoCircle {
    pub fn new(center: GeoPosition, radius_m: u32) -> Self {
        Self { center, radius_m }
    }
}

/// Free-text destination plus the search radius to resolve it within
///
/// Supplied once per navigation session and immutable afterwards. The text is
/// re-resolved against the current position on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationQuery {
    pub text: String,

    #[serde(rename = "search-radius-m")]
    pub search_radius_m: u32,
}

impl DestinationQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
        }
    }

    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.search_radius_m = radius_m;
        self
    }
}

/// A ranked place-search result; only the top result is ever used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinates: GeoPosition,
}

impl Place {
    pub fn new(coordinates: GeoPosition) -> Self {
        Self { coordinates }
    }
}

/// Routing input point; exactly two per tick, start first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub coordinates: GeoPosition,
}

impl Waypoint {
    pub fn new(coordinates: GeoPosition) -> Self {
        Self { coordinates }
    }
}

/// Transport mode for route computation
///
/// Only pedestrian routing is supported; other modes are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Pedestrian,
}

/// Action classification of a maneuver
///
/// Available for diagnostics logging; never part of the narrated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManeuverAction {
    Depart,
    Arrive,
    LeftTurn,
    RightTurn,
    Continue,
}

/// A single routing instruction step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub text: String,
    pub action: ManeuverAction,
}

impl Maneuver {
    pub fn new(text: impl Into<String>, action: ManeuverAction) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// An ordered run of maneuvers within a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub maneuvers: Vec<Maneuver>,
}

impl Section {
    pub fn new(maneuvers: Vec<Maneuver>) -> Self {
        Self { maneuvers }
    }
}

/// A computed route as an ordered sequence of sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub sections: Vec<Section>,
}

impl Route {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Flatten the sections' maneuvers into one ordered sequence
    ///
    /// Section order is preserved, then intra-section maneuver order.
    pub fn maneuvers(&self) -> impl Iterator<Item = &Maneuver> {
        self.sections.iter().flat_map(|s| s.maneuvers.iter())
    }
}
