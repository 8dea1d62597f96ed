//! Interactive playback of test samples through a regression tree.
//!
//! A precomputed tree is loaded from JSON, laid out in the plane, and a
//! tabular test set is replayed one sample at a time. Each sample is routed
//! from the root to a leaf, the path is highlighted, a marker travels along
//! it, and finished markers pile up under the leaf they reached.
//!
//! ## Architecture
//!
//! - [`tree`]: Model and feature metadata documents
//! - [`data`]: Ordered test set parsed from CSV
//! - [`predict`]: Deterministic root-to-leaf traversal
//! - [`layout`]: Node coordinates, edge list, fit-to-view
//! - [`playback`]: Play/pause/step/reset state machine and tick cadence
//! - [`animation`]: Marker flights along paths and per-leaf stacks
//! - [`session`]: Context object dispatching commands into updates
//! - [`render`]: SVG drawing of the current scene
//! - `runtime`: Event loop multiplexing commands, ticks and frames
#![allow(dead_code)]

pub mod animation;
pub mod data;
pub mod layout;
pub mod playback;
pub mod predict;
pub mod render;
pub mod session;
pub mod tree;

#[cfg(feature = "server")]
pub mod runtime;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Node identifier as written by the exporter.
pub type NodeId = usize;
/// Feature values, thresholds, leaf predictions and targets.
pub type Value = f64;
/// Screen-space distances in pixels.
pub type Pixels = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PLAYBACK CADENCE
// Speed slider in [SPEED_MIN, SPEED_MAX] maps linearly onto the tick interval.
// ============================================================================
/// Slowest slider position.
pub const SPEED_MIN: u8 = 0;
/// Fastest slider position.
pub const SPEED_MAX: u8 = 100;
/// Slider position on startup.
pub const SPEED_DEFAULT: u8 = 50;
/// Tick interval at SPEED_MIN (milliseconds).
pub const INTERVAL_SLOWEST: u64 = 1000;
/// Tick interval at SPEED_MAX (milliseconds).
pub const INTERVAL_FASTEST: u64 = 100;

// ============================================================================
// ANIMATION
// ============================================================================
/// Marker velocity along path edges (pixels per second).
pub const MARKER_VELOCITY: Pixels = 280.0;
/// Display refresh period for marker flights.
pub const FRAME_PERIOD: std::time::Duration = std::time::Duration::from_millis(16);
/// Markers per row in a leaf stack before wrapping.
pub const STACK_COLUMNS: usize = 10;
/// Grid pitch of a deposited marker (pixels).
pub const STACK_PITCH: Pixels = 7.0;
/// Vertical gap between a leaf and the first row of its stack (pixels).
pub const STACK_MARGIN: Pixels = 18.0;
/// Radius of a flying or deposited marker (pixels).
pub const MARKER_RADIUS: Pixels = 3.0;

// ============================================================================
// LAYOUT
// Uniform node spacing, like a tidy tree with fixed node size.
// ============================================================================
/// Horizontal distance between adjacent leaves (pixels).
pub const NODE_SPACING_X: Pixels = 90.0;
/// Vertical distance between depths (pixels).
pub const NODE_SPACING_Y: Pixels = 120.0;
/// Radius of a drawn node (pixels).
pub const NODE_RADIUS: Pixels = 8.0;
/// Zoom extent applied when fitting the tree to the viewport.
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 4.0;
/// Margin kept around the tree when fitting (pixels).
pub const FIT_PADDING: Pixels = 40.0;
/// Default viewport size (pixels).
pub const VIEWPORT_WIDTH: Pixels = 1200.0;
pub const VIEWPORT_HEIGHT: Pixels = 800.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory holding explorer session logs.
pub const LOG_DIR: &str = "logs";

/// Log file for a session started `secs` after the epoch.
pub fn logfile(secs: u64) -> std::path::PathBuf {
    std::path::Path::new(LOG_DIR).join(format!("explore-{}.log", secs))
}

/// Terminal logging at INFO plus a per-session DEBUG file under [`LOG_DIR`].
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all(LOG_DIR).expect("create log directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(logfile(secs)).expect("create session log"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Leaves the explorer on Ctrl+C, even mid-flight.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("explorer interrupted, markers in flight are dropped");
            std::process::exit(0);
        }
    });
}
