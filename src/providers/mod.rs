//! Collaborator traits consumed by the navigation core
//!
//! The core never talks to a platform directly: position fixes, place search,
//! route computation, voice output, and the OS permission prompt all sit behind
//! these traits. Production code wires platform adapters; the `sim` module
//! provides a deterministic stack for the CLI binary and manual smoke tests.

use thiserror::Error;

pub mod location;
pub mod narration;
pub mod permission;
pub mod routing;
pub mod search;
pub mod sim;

pub use location::LocationProvider;
pub use narration::NarrationSink;
pub use permission::PermissionProvider;
pub use routing::RoutingProvider;
pub use search::SearchProvider;

/// Errors surfaced by collaborator implementations
///
/// The resolver and permission gate translate these into the user-facing
/// `NavError` taxonomy; providers never speak to the user themselves.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider backend error: {0}")]
    Backend(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("platform refused to show the permission prompt: {0}")]
    PromptRefused(String),
}
