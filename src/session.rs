//! NavigationSession - the background tick task
//!
//! One session owns one polling cycle: acquire a position fix, resolve the
//! destination into directions, hand them to the narration sink, sleep, repeat.
//! Cancellation is cooperative - the stop signal is observed at the top of each
//! tick and during the inter-tick sleep, never by aborting an in-flight tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::DestinationQuery;
use crate::error::notice;
use crate::providers::{LocationProvider, NarrationSink};
use crate::resolver::RouteResolver;

/// A running navigation session's tick loop
///
/// Constructed by the `Navigator` and consumed by `run` on a spawned task.
/// The only state shared with the owning coordinator is the stop channel and
/// the running flag; all route data is tick-local.
pub struct NavigationSession {
    query: DestinationQuery,
    location: Arc<dyn LocationProvider>,
    resolver: RouteResolver,
    narration: Arc<dyn NarrationSink>,
    tick_interval: Duration,
    stop_rx: mpsc::Receiver<()>,
    running: Arc<AtomicBool>,
}

impl NavigationSession {
    pub(crate) fn new(
        query: DestinationQuery,
        location: Arc<dyn LocationProvider>,
        resolver: RouteResolver,
        narration: Arc<dyn NarrationSink>,
        tick_interval: Duration,
        stop_rx: mpsc::Receiver<()>,
        running: Arc<AtomicBool>,
    ) -> Self {
        debug!(destination = %query.text, ?tick_interval, "NavigationSession::new: called");
        Self {
            query,
            location,
            resolver,
            narration,
            tick_interval,
            stop_rx,
            running,
        }
    }

    /// Run the tick cycle until a stop signal arrives
    ///
    /// The first tick starts immediately; each subsequent tick follows the
    /// fixed inter-tick sleep. A stop signal received during the sleep exits
    /// without starting another tick; one received mid-tick lets the tick
    /// complete first.
    pub async fn run(mut self) {
        info!(destination = %self.query.text, "Navigation session started");

        loop {
            // Observe a stop that arrived while the previous tick was in
            // flight, before issuing the next position request.
            match self.stop_rx.try_recv() {
                Ok(()) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    debug!("run: stop observed at tick head");
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            self.tick().await;

            tokio::select! {
                _ = self.stop_rx.recv() => {
                    debug!("run: stop observed during sleep");
                    break;
                }
                () = tokio::time::sleep(self.tick_interval) => {}
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!(destination = %self.query.text, "Navigation session stopped");
    }

    /// One resolve-and-narrate transaction
    ///
    /// Every failure here is recovered locally: the user hears a forced
    /// notice and the loop retries naturally on the next tick.
    async fn tick(&self) {
        debug!(destination = %self.query.text, "tick: called");

        // Position acquisition strictly precedes search and routing; a single
        // in-flight request per tick.
        let Some(position) = self.location.last_position().await else {
            warn!("tick: no position fix available");
            self.narration.force_speak(notice::ENABLE_LOCATION).await;
            return;
        };

        match self.resolver.resolve(position, &self.query).await {
            Ok(instructions) => {
                debug!(count = instructions.len(), "tick: queueing instructions");
                for text in &instructions {
                    self.narration.queue(text).await;
                }
            }
            Err(e) => {
                warn!(error = %e, "tick: resolve failed, skipping this tick");
                if let Some(text) = e.spoken_notice() {
                    self.narration.force_speak(text).await;
                }
            }
        }
    }
}
