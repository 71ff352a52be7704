//! PermissionProvider trait definition

use super::ProviderError;

/// OS-level location permission surface
///
/// The prompt result arrives out-of-band: `request_authorization` is
/// fire-and-forget and the core re-polls `is_authorized` rather than receiving
/// a callback. Both calls are synchronous permission-table lookups on the
/// platforms this abstracts, so the trait is not async.
pub trait PermissionProvider: Send + Sync {
    /// Check whether location access is currently authorized
    fn is_authorized(&self) -> bool;

    /// Trigger the asynchronous OS permission prompt
    ///
    /// `Err(ProviderError::PromptRefused)` means the platform cannot show the
    /// prompt at all (e.g. OS version too old); the gate stays unauthorized.
    fn request_authorization(&self) -> Result<(), ProviderError>;
}
