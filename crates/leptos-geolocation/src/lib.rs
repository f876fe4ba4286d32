//! Leptos Geolocation Utilities
//!
//! Browser position tracking for Leptos using `navigator.geolocation`.
//! Uses a distance threshold to tell real movement from GPS jitter.

mod coords;
mod distance;
mod watch;

pub use coords::{GeoError, LatLng};
pub use distance::{haversine_distance, DistanceGate, COMMIT_THRESHOLD_M, EARTH_RADIUS_M};
pub use watch::{current_position, use_watch_position, watch_position, GeoWatch};
