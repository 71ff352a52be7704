//! Strider - turn-by-turn pedestrian navigation narrator
//!
//! Given a free-text destination and a stream of position fixes, Strider
//! periodically resolves the destination to coordinates, computes a walking
//! route, and speaks a bounded sequence of directions through a narration
//! sink. The platform collaborators - location, search, routing, voice, and
//! the permission prompt - sit behind traits so the core is plain in-process
//! logic.
//!
//! # Core Concepts
//!
//! - **Stateless ticks**: every tick is an independent resolve-and-narrate
//!   transaction; no route or place survives past the tick that produced it
//! - **Cooperative cancellation**: stop is a signal observed at the tick head
//!   and during the inter-tick sleep, never a hard abort
//! - **One session**: the coordinator runs at most one tick cycle at a time
//! - **Recover locally**: a failed tick speaks a notice and the loop carries
//!   on; only initialization failures are fatal
//!
//! # Modules
//!
//! - [`navigator`] - coordinator and control surface (start/stop)
//! - [`session`] - the background tick task
//! - [`resolver`] - search-then-route pipeline per tick
//! - [`format`] - maneuver text to narration-ready text
//! - [`permission`] - location authorization gate
//! - [`providers`] - collaborator traits and the simulated stack
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod navigator;
pub mod permission;
pub mod providers;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use config::NavConfig;
pub use domain::{
    DestinationQuery, GeoCircle, GeoPosition, Maneuver, ManeuverAction, Place, Route, Section,
    TransportMode, Waypoint,
};
pub use error::{NavError, notice};
pub use format::spoken_instruction;
pub use navigator::Navigator;
pub use permission::PermissionGate;
pub use providers::{
    LocationProvider, NarrationSink, PermissionProvider, ProviderError, RoutingProvider,
    SearchProvider,
};
pub use resolver::RouteResolver;
pub use session::NavigationSession;
