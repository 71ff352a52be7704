//! PermissionGate - location authorization gate

use std::sync::Arc;

use tracing::{debug, warn};

use crate::providers::PermissionProvider;

/// Gate deciding whether the navigation loop may run
///
/// Wraps the platform permission surface. The prompt result arrives
/// out-of-band, so callers re-poll `is_authorized` on their next attempt
/// instead of waiting on the prompt.
#[derive(Clone)]
pub struct PermissionGate {
    provider: Arc<dyn PermissionProvider>,
}

impl PermissionGate {
    pub fn new(provider: Arc<dyn PermissionProvider>) -> Self {
        Self { provider }
    }

    /// Check the current authorization state
    pub fn is_authorized(&self) -> bool {
        self.provider.is_authorized()
    }

    /// Check authorization, triggering the prompt if it is missing
    ///
    /// Returns `false` when unauthorized - the caller must not proceed this
    /// cycle. A platform that refuses to prompt leaves the gate unauthorized
    /// indefinitely; that is reported here, never fatal.
    pub fn ensure_authorized(&self) -> bool {
        if self.provider.is_authorized() {
            debug!("ensure_authorized: already authorized");
            return true;
        }

        debug!("ensure_authorized: not authorized, triggering prompt");
        if let Err(e) = self.provider.request_authorization() {
            warn!(error = %e, "Location permission prompt could not be shown");
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::permission::mock::MockPermissionProvider;

    #[test]
    fn test_authorized_gate_passes_without_prompting() {
        let provider = Arc::new(MockPermissionProvider::granted());
        let gate = PermissionGate::new(provider.clone());

        assert!(gate.is_authorized());
        assert!(gate.ensure_authorized());
        assert_eq!(provider.request_count(), 0);
    }

    #[test]
    fn test_unauthorized_gate_prompts_and_blocks_this_cycle() {
        let provider = Arc::new(MockPermissionProvider::denied());
        let gate = PermissionGate::new(provider.clone());

        assert!(!gate.ensure_authorized());
        assert_eq!(provider.request_count(), 1);

        // Still denied: each attempt re-triggers the prompt.
        assert!(!gate.ensure_authorized());
        assert_eq!(provider.request_count(), 2);
    }

    #[test]
    fn test_out_of_band_grant_observed_on_next_poll() {
        let provider = Arc::new(MockPermissionProvider::granted_after_prompt());
        let gate = PermissionGate::new(provider.clone());

        // First attempt triggers the prompt and must not proceed.
        assert!(!gate.ensure_authorized());
        assert_eq!(provider.request_count(), 1);

        // The grant arrived out-of-band; the re-poll sees it.
        assert!(gate.is_authorized());
        assert!(gate.ensure_authorized());
        assert_eq!(provider.request_count(), 1);
    }

    #[test]
    fn test_prompt_refusal_is_reported_not_fatal() {
        let provider = Arc::new(MockPermissionProvider::prompt_refused());
        let gate = PermissionGate::new(provider.clone());

        assert!(!gate.ensure_authorized());
        assert!(!gate.is_authorized());
        assert_eq!(provider.request_count(), 1);
    }
}
