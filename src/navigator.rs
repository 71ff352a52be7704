//! Navigator - the navigation coordinator and its control surface
//!
//! Owns the collaborator handles and at most one running session. `start` and
//! `stop` are non-blocking control signals; the session itself runs on its own
//! tokio task and checks for cancellation cooperatively.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::NavConfig;
use crate::domain::DestinationQuery;
use crate::error::NavError;
use crate::permission::PermissionGate;
use crate::providers::{LocationProvider, NarrationSink, RoutingProvider, SearchProvider};
use crate::resolver::RouteResolver;
use crate::session::NavigationSession;

/// Control handles for the one active session
struct SessionHandle {
    stop_tx: mpsc::Sender<()>,
    running: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

/// Turn-by-turn pedestrian navigation coordinator
///
/// At most one session is active at a time; a second `start_navigation`
/// without an intervening stop is rejected rather than superseding the
/// running one.
pub struct Navigator {
    location: Arc<dyn LocationProvider>,
    search: Arc<dyn SearchProvider>,
    routing: Arc<dyn RoutingProvider>,
    narration: Arc<dyn NarrationSink>,
    gate: PermissionGate,
    config: NavConfig,
    session: Option<SessionHandle>,
}

impl Navigator {
    /// Build a coordinator over the given collaborators
    ///
    /// Validates the configuration up front; a broken configuration is fatal
    /// to the whole feature, not something a later tick can recover from.
    pub fn new(
        location: Arc<dyn LocationProvider>,
        search: Arc<dyn SearchProvider>,
        routing: Arc<dyn RoutingProvider>,
        narration: Arc<dyn NarrationSink>,
        gate: PermissionGate,
        config: NavConfig,
    ) -> Result<Self, NavError> {
        debug!(tick_interval_ms = config.tick_interval_ms, "Navigator::new: called");
        config
            .validate()
            .map_err(|e| NavError::InitializationFailure(e.to_string()))?;

        Ok(Self {
            location,
            search,
            routing,
            narration,
            gate,
            config,
            session: None,
        })
    }

    /// Start navigating towards a free-text destination
    ///
    /// Non-blocking: spawns the background tick task and returns. Fails with
    /// `SessionActive` while a session is running or still winding down after
    /// a stop (the old task must clear its running flag before a new cycle
    /// may spawn), or `PermissionDenied` when
    /// location access is missing (the OS prompt is triggered as a side
    /// effect; a later call re-polls the grant).
    pub fn start_navigation(&mut self, destination: &str) -> Result<(), NavError> {
        debug!(%destination, "start_navigation: called");

        self.reap_finished_session();
        if self.session.is_some() {
            warn!("start_navigation: a session is already running");
            return Err(NavError::SessionActive);
        }

        if !self.gate.ensure_authorized() {
            warn!("start_navigation: location permission not granted, prompt triggered");
            return Err(NavError::PermissionDenied);
        }

        let query =
            DestinationQuery::new(destination).with_radius(self.config.search_radius_m);
        let resolver =
            RouteResolver::new(self.search.clone(), self.routing.clone(), &self.config);
        let (stop_tx, stop_rx) = mpsc::channel(1);
        let running = Arc::new(AtomicBool::new(true));

        let session = NavigationSession::new(
            query,
            self.location.clone(),
            resolver,
            self.narration.clone(),
            Duration::from_millis(self.config.tick_interval_ms),
            stop_rx,
            running.clone(),
        );
        let task = tokio::spawn(session.run());

        self.session = Some(SessionHandle {
            stop_tx,
            running,
            task,
        });

        info!(%destination, "Navigation started");
        Ok(())
    }

    /// Signal the running session to stop
    ///
    /// Non-blocking and a no-op when idle. The session observes the signal at
    /// its next checkpoint (tick head or inter-tick sleep); an in-flight tick
    /// completes first. The handle stays in place until the task clears its
    /// running flag, so a restart issued before the wind-down finishes is
    /// rejected instead of overlapping it.
    pub fn stop_navigation(&mut self) {
        debug!("stop_navigation: called");

        self.reap_finished_session();
        let Some(session) = &self.session else {
            debug!("stop_navigation: no session running, no-op");
            return;
        };

        // A full channel means a stop is already pending; the session will
        // observe it.
        if session.stop_tx.try_send(()).is_err() {
            debug!("stop_navigation: stop already signalled or session gone");
        }

        info!("Navigation stop requested");
    }

    /// Check whether a session is currently running
    pub fn is_running(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.running.load(Ordering::SeqCst))
    }

    /// Drop the session handle if its task has already wound down
    fn reap_finished_session(&mut self) {
        if let Some(session) = &self.session
            && !session.running.load(Ordering::SeqCst)
        {
            debug!("reap_finished_session: previous session finished, reaping");
            if let Some(session) = self.session.take() {
                session.task.abort();
            }
        }
    }
}
