//! Integration tests for Strider
//!
//! These tests drive the coordinator through its public API with the
//! simulated provider stack plus a local recording sink.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use strider::config::NavConfig;
use strider::error::NavError;
use strider::navigator::Navigator;
use strider::permission::PermissionGate;
use strider::providers::sim::{
    SimLocationProvider, SimPermissionProvider, SimRoutingProvider, SimSearchProvider,
};
use strider::providers::{LocationProvider, NarrationSink};
use strider::{GeoPosition, spoken_instruction};

/// Narration sink that records queued and forced texts separately
#[derive(Default)]
struct CapturingSink {
    queued: Mutex<Vec<String>>,
    forced: Mutex<Vec<String>>,
}

impl CapturingSink {
    fn queued(&self) -> Vec<String> {
        self.queued.lock().unwrap().clone()
    }

    fn forced(&self) -> Vec<String> {
        self.forced.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrationSink for CapturingSink {
    async fn queue(&self, text: &str) {
        self.queued.lock().unwrap().push(text.to_string());
    }

    async fn force_speak(&self, text: &str) {
        self.forced.lock().unwrap().push(text.to_string());
    }
}

/// Location provider that never has a fix
struct NoFixLocation;

/// Location provider with a slow fetch that tracks concurrent requests
///
/// The high-water mark exposes overlapping tick cycles: with one session at a
/// time it can never exceed one.
struct OverlapTrackingLocation {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl OverlapTrackingLocation {
    fn new() -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for OverlapTrackingLocation {
    async fn last_position(&self) -> Option<GeoPosition> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(40)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Some(GeoPosition::new(40.7, -74.0))
    }
}

#[async_trait]
impl LocationProvider for NoFixLocation {
    async fn last_position(&self) -> Option<GeoPosition> {
        None
    }
}

fn fast_config() -> NavConfig {
    NavConfig {
        tick_interval_ms: 50,
        ..NavConfig::default()
    }
}

fn navigator_with_sink(
    location: Arc<dyn LocationProvider>,
    sink: Arc<CapturingSink>,
) -> Navigator {
    Navigator::new(
        location,
        Arc::new(SimSearchProvider),
        Arc::new(SimRoutingProvider),
        sink,
        PermissionGate::new(Arc::new(SimPermissionProvider)),
        fast_config(),
    )
    .expect("navigator should build from a valid config")
}

// =============================================================================
// End-to-end session tests
// =============================================================================

#[tokio::test]
async fn test_session_narrates_capped_directions_each_tick() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(
        Arc::new(SimLocationProvider::manhattan_walker()),
        sink.clone(),
    );

    navigator.start_navigation("Central Park").unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let queued = sink.queued();
    // One tick: exactly the instruction cap, no forced traffic.
    assert_eq!(queued.len(), 3);
    assert!(sink.forced().is_empty());

    // The narrated texts are already in spoken form (no raw unit tokens).
    for text in &queued {
        assert_eq!(spoken_instruction(text), *text);
    }
}

#[tokio::test]
async fn test_session_repolls_until_stopped() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(
        Arc::new(SimLocationProvider::manhattan_walker()),
        sink.clone(),
    );

    navigator.start_navigation("Central Park").unwrap();
    tokio::time::sleep(Duration::from_millis(180)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // At least two 3-instruction ticks at a 50ms cadence in 180ms.
    assert!(sink.queued().len() >= 6);
    assert!(!navigator.is_running());
}

#[tokio::test]
async fn test_missing_fix_reports_through_forced_channel() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(Arc::new(NoFixLocation), sink.clone());

    navigator.start_navigation("Central Park").unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(sink.forced(), vec!["Please turn on location"]);
    assert!(sink.queued().is_empty());
}

#[tokio::test]
async fn test_unresolvable_destination_reports_not_found() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(
        Arc::new(SimLocationProvider::manhattan_walker()),
        sink.clone(),
    );

    // The simulated geocoder resolves nothing for an empty query.
    navigator.start_navigation("").unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(sink.forced(), vec!["Destination could not be found"]);
    assert!(sink.queued().is_empty());
}

// =============================================================================
// Control-surface tests
// =============================================================================

#[tokio::test]
async fn test_double_start_runs_exactly_one_cycle() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(
        Arc::new(SimLocationProvider::manhattan_walker()),
        sink.clone(),
    );

    navigator.start_navigation("Central Park").unwrap();
    let second = navigator.start_navigation("Times Square");
    assert!(matches!(second, Err(NavError::SessionActive)));

    tokio::time::sleep(Duration::from_millis(30)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // One tick cycle, one tick: the cap's worth of directions, not double.
    assert_eq!(sink.queued().len(), 3);
}

#[tokio::test]
async fn test_stop_then_restart() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(
        Arc::new(SimLocationProvider::manhattan_walker()),
        sink.clone(),
    );

    navigator.start_navigation("Central Park").unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!navigator.is_running());

    navigator.start_navigation("Times Square").unwrap();
    assert!(navigator.is_running());
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!navigator.is_running());
}

#[tokio::test]
async fn test_immediate_restart_never_overlaps_sessions() {
    let location = Arc::new(OverlapTrackingLocation::new());
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(location.clone(), sink.clone());

    navigator.start_navigation("Central Park").unwrap();

    // Stop while the first position fetch is still in flight, then restart
    // immediately - no intervening sleep. The restart is rejected until the
    // old task has wound down, then goes through.
    tokio::time::sleep(Duration::from_millis(10)).await;
    navigator.stop_navigation();
    loop {
        match navigator.start_navigation("Times Square") {
            Ok(()) => break,
            Err(NavError::SessionActive) => {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            Err(e) => panic!("unexpected start error: {}", e),
        }
    }

    // Let the new session run a couple of ticks alongside whatever the old
    // one might wrongly still be doing, then stop it.
    tokio::time::sleep(Duration::from_millis(120)).await;
    navigator.stop_navigation();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(
        location.max_in_flight(),
        1,
        "tick cycles overlapped: concurrent position requests"
    );
    assert!(!navigator.is_running());
}

#[tokio::test]
async fn test_stop_when_idle_is_noop() {
    let sink = Arc::new(CapturingSink::default());
    let mut navigator = navigator_with_sink(Arc::new(NoFixLocation), sink.clone());

    navigator.stop_navigation();
    navigator.stop_navigation();

    assert!(!navigator.is_running());
    assert!(sink.forced().is_empty());
}
