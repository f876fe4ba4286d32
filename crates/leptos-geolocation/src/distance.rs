//! Great-circle distance and the commit threshold built on it.

use crate::coords::LatLng;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Movement in meters a new fix must exceed before it is committed
pub const COMMIT_THRESHOLD_M: f64 = 10.0;

/// Haversine distance in meters from `from` to `to`.
///
/// An unknown starting point is infinitely far away, so the first fix always
/// passes any threshold.
pub fn haversine_distance(from: Option<LatLng>, to: LatLng) -> f64 {
    let Some(from) = from else {
        return f64::INFINITY;
    };

    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let d_phi = (to.lat - from.lat).to_radians();
    let d_lambda = (to.lng - from.lng).to_radians();

    // Rounding can push `a` just past 1 for near-antipodal points
    let a = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Suppresses fixes that did not move far enough from the last committed one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceGate {
    threshold_m: f64,
    committed: Option<LatLng>,
}

impl Default for DistanceGate {
    fn default() -> Self {
        Self::new(COMMIT_THRESHOLD_M)
    }
}

impl DistanceGate {
    pub fn new(threshold_m: f64) -> Self {
        Self {
            threshold_m,
            committed: None,
        }
    }

    /// Start from an already known position instead of "nowhere"
    pub fn with_committed(mut self, committed: Option<LatLng>) -> Self {
        self.committed = committed;
        self
    }

    pub fn committed(&self) -> Option<LatLng> {
        self.committed
    }

    /// Offer a new fix. Returns it if it was committed, `None` if discarded.
    pub fn offer(&mut self, next: LatLng) -> Option<LatLng> {
        if haversine_distance(self.committed, next) > self.threshold_m {
            self.committed = Some(next);
            Some(next)
        } else {
            None
        }
    }
}
