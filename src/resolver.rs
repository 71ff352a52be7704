//! RouteResolver - destination search and route computation pipeline
//!
//! One resolve call is one tick's worth of work: search the destination text
//! near the current position, route to the top hit on foot, and reduce the
//! route to a bounded list of narration-ready instruction strings. Nothing is
//! cached between calls.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::NavConfig;
use crate::domain::{DestinationQuery, GeoCircle, GeoPosition, TransportMode, Waypoint};
use crate::error::NavError;
use crate::format::spoken_instruction;
use crate::providers::{RoutingProvider, SearchProvider};

/// Only the top-ranked place is ever used.
const MAX_SEARCH_RESULTS: usize = 1;

/// Resolves a destination query against a position into spoken directions
pub struct RouteResolver {
    search: Arc<dyn SearchProvider>,
    routing: Arc<dyn RoutingProvider>,
    language: String,
    max_instructions: usize,
}

impl RouteResolver {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        routing: Arc<dyn RoutingProvider>,
        config: &NavConfig,
    ) -> Self {
        debug!(language = %config.language, max_instructions = config.max_spoken_instructions, "RouteResolver::new: called");
        Self {
            search,
            routing,
            language: config.language.clone(),
            max_instructions: config.max_spoken_instructions,
        }
    }

    /// Resolve `query` near `position` into ordered narration strings
    ///
    /// Search strictly precedes routing; either step failing (or returning
    /// nothing) short-circuits with the matching `NavError` and no
    /// instructions are produced for this tick.
    pub async fn resolve(
        &self,
        position: GeoPosition,
        query: &DestinationQuery,
    ) -> Result<Vec<String>, NavError> {
        debug!(destination = %query.text, lat = position.latitude, lon = position.longitude, "resolve: called");

        let area = GeoCircle::new(position, query.search_radius_m);
        let places = self
            .search
            .search(&query.text, &area, MAX_SEARCH_RESULTS, &self.language)
            .await
            .map_err(|e| NavError::SearchFailure {
                reason: e.to_string(),
            })?;

        let Some(place) = places.first() else {
            debug!(destination = %query.text, "resolve: search returned no places");
            return Err(NavError::SearchFailure {
                reason: format!("no places match '{}'", query.text),
            });
        };
        debug!(lat = place.coordinates.latitude, lon = place.coordinates.longitude, "resolve: top place");

        // Exactly two waypoints, start first.
        let waypoints = [Waypoint::new(position), Waypoint::new(place.coordinates)];
        let routes = self
            .routing
            .compute_route(&waypoints, TransportMode::Pedestrian)
            .await
            .map_err(|e| NavError::RoutingFailure {
                reason: e.to_string(),
            })?;

        let Some(route) = routes.first() else {
            debug!(destination = %query.text, "resolve: routing returned no routes");
            return Err(NavError::RoutingFailure {
                reason: "no route between waypoints".to_string(),
            });
        };

        let mut instructions = Vec::with_capacity(self.max_instructions);
        for maneuver in route.maneuvers().take(self.max_instructions) {
            debug!(text = %maneuver.text, action = ?maneuver.action, "resolve: maneuver");
            instructions.push(spoken_instruction(&maneuver.text));
        }

        info!(destination = %query.text, count = instructions.len(), "Resolved route directions");
        Ok(instructions)
    }
}
