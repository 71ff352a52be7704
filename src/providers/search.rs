//! SearchProvider trait definition

use async_trait::async_trait;

use super::ProviderError;
use crate::domain::{GeoCircle, Place};

/// Free-text place search within a geographic area
///
/// Results are ranked best-first; the resolver requests at most one result and
/// uses only the top-ranked place.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Resolve a text query to ranked places inside `area`
    async fn search(
        &self,
        text: &str,
        area: &GeoCircle,
        max_results: usize,
        language: &str,
    ) -> Result<Vec<Place>, ProviderError>;
}
