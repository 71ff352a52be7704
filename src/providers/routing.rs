//! RoutingProvider trait definition

use async_trait::async_trait;

use super::ProviderError;
use crate::domain::{Route, TransportMode, Waypoint};

/// Route computation over an ordered list of waypoints
///
/// The session always passes exactly two waypoints (start, destination) in
/// pedestrian mode. Returned routes are ranked best-first; only the first is
/// used. An empty list means no route exists between the waypoints.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Compute candidate routes through `waypoints` in order
    async fn compute_route(
        &self,
        waypoints: &[Waypoint],
        mode: TransportMode,
    ) -> Result<Vec<Route>, ProviderError>;
}
