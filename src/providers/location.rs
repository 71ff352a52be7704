//! LocationProvider trait definition

use async_trait::async_trait;

use crate::domain::GeoPosition;

/// Source of last-known position fixes
///
/// Single-shot per call: the session issues exactly one request per tick and
/// never overlaps them. `None` means no fix is available yet, which the session
/// reports to the user and retries on the next tick.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Fetch the last known position, if any
    async fn last_position(&self) -> Option<GeoPosition>;
}
