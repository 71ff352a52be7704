//! Simulated provider stack for the CLI binary
//!
//! Deterministic stand-ins for the platform collaborators so a full navigation
//! session can run on a desk: a walker that advances its fix every poll, a
//! geocoder that places the destination near the search area, a router that
//! fabricates a pedestrian route with distance-bearing maneuver texts, and a
//! console "voice" that prints instead of speaking.

use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use tracing::debug;

use super::{
    LocationProvider, NarrationSink, PermissionProvider, ProviderError, RoutingProvider,
    SearchProvider,
};
use crate::domain::{
    GeoCircle, GeoPosition, Maneuver, ManeuverAction, Place, Route, Section, TransportMode,
    Waypoint,
};

/// Meters per degree of latitude, good enough for simulated distances.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Location provider that walks a straight line
///
/// Each poll returns the current fix and advances it by a fixed step, so
/// consecutive ticks see the walker making progress.
pub struct SimLocationProvider {
    position: Mutex<GeoPosition>,
    step_lat: f64,
    step_lon: f64,
}

impl SimLocationProvider {
    pub fn new(start: GeoPosition, step_lat: f64, step_lon: f64) -> Self {
        Self {
            position: Mutex::new(start),
            step_lat,
            step_lon,
        }
    }

    /// A walker starting in lower Manhattan, heading roughly north-east
    pub fn manhattan_walker() -> Self {
        Self::new(GeoPosition::new(40.7000, -74.0000), 0.0005, 0.0002)
    }
}

#[async_trait]
impl LocationProvider for SimLocationProvider {
    async fn last_position(&self) -> Option<GeoPosition> {
        let mut position = self.position.lock().unwrap();
        let fix = *position;
        position.latitude += self.step_lat;
        position.longitude += self.step_lon;
        debug!(lat = fix.latitude, lon = fix.longitude, "sim location: fix");
        Some(fix)
    }
}

/// Geocoder that drops the destination a fixed offset from the area center
///
/// An empty query resolves to nothing, which exercises the search-failure
/// narration path end to end.
pub struct SimSearchProvider;

#[async_trait]
impl SearchProvider for SimSearchProvider {
    async fn search(
        &self,
        text: &str,
        area: &GeoCircle,
        max_results: usize,
        language: &str,
    ) -> Result<Vec<Place>, ProviderError> {
        debug!(%text, %max_results, %language, radius_m = area.radius_m, "sim search: called");
        if text.trim().is_empty() {
            return Ok(vec![]);
        }
        let destination = GeoPosition::new(
            area.center.latitude + 0.0180,
            area.center.longitude - 0.0125,
        );
        Ok(vec![Place::new(destination)].into_iter().take(max_results).collect())
    }
}

/// Router that fabricates one pedestrian route between the two waypoints
pub struct SimRoutingProvider;

impl SimRoutingProvider {
    /// Equirectangular distance approximation in meters
    fn distance_m(a: GeoPosition, b: GeoPosition) -> f64 {
        let mean_lat = ((a.latitude + b.latitude) / 2.0).to_radians();
        let dx = (b.longitude - a.longitude) * mean_lat.cos();
        let dy = b.latitude - a.latitude;
        (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE
    }

    fn leg_text(verb: &str, meters: f64) -> String {
        if meters >= 1_000.0 {
            format!("{} for {:.1}km", verb, meters / 1_000.0)
        } else {
            format!("{} for {}m", verb, meters.round() as u64)
        }
    }
}

#[async_trait]
impl RoutingProvider for SimRoutingProvider {
    async fn compute_route(
        &self,
        waypoints: &[Waypoint],
        mode: TransportMode,
    ) -> Result<Vec<Route>, ProviderError> {
        debug!(waypoint_count = waypoints.len(), ?mode, "sim routing: called");
        let [start, destination] = waypoints else {
            return Err(ProviderError::Backend(format!(
                "expected exactly 2 waypoints, got {}",
                waypoints.len()
            )));
        };

        let total = Self::distance_m(start.coordinates, destination.coordinates);

        // Three walking legs plus a final turn and arrival: more maneuvers than
        // the narration cap, so the demo shows truncation too.
        let leg = total / 3.0;
        let route = Route::new(vec![
            Section::new(vec![
                Maneuver::new(Self::leg_text("Head north", leg), ManeuverAction::Depart),
                Maneuver::new(Self::leg_text("Continue straight", leg), ManeuverAction::Continue),
            ]),
            Section::new(vec![
                Maneuver::new(Self::leg_text("Turn right and walk", leg), ManeuverAction::RightTurn),
                Maneuver::new("Turn left at the crossing".to_string(), ManeuverAction::LeftTurn),
                Maneuver::new("Arrive at your destination".to_string(), ManeuverAction::Arrive),
            ]),
        ]);

        Ok(vec![route])
    }
}

/// Narration sink that prints to the console instead of speaking
///
/// Queued directions print dimmed-cyan; forced notices print bold red so
/// interrupt-channel traffic stands out in a scrolling session.
pub struct ConsoleNarration;

#[async_trait]
impl NarrationSink for ConsoleNarration {
    async fn queue(&self, text: &str) {
        println!("  {} {}", "[voice]".cyan(), text.cyan());
    }

    async fn force_speak(&self, text: &str) {
        println!("  {} {}", "[voice!]".red().bold(), text.red().bold());
    }
}

/// Permission provider that is always authorized
pub struct SimPermissionProvider;

impl PermissionProvider for SimPermissionProvider {
    fn is_authorized(&self) -> bool {
        true
    }

    fn request_authorization(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
