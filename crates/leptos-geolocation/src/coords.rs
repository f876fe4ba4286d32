//! Coordinates and geolocation errors.

use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
///
/// Serialized as `{ "lat": .., "lng": .. }`, the shape map SDKs and the pin
/// store use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Build a position, rejecting anything outside lat [-90, 90] / lng [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::OutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

/// Errors from the position source or from registering with it
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// No `navigator.geolocation` in this environment
    Unsupported,
    /// `watchPosition` / `getCurrentPosition` threw
    Registration(String),
    /// The source reported coordinates outside the valid ranges
    OutOfRange { lat: f64, lng: f64 },
    PermissionDenied(String),
    PositionUnavailable(String),
    Timeout(String),
    Unknown { code: u16, message: String },
}

impl GeoError {
    /// Map a `PositionError` code (1..=3) onto a variant.
    pub fn from_position_error(code: u16, message: String) -> Self {
        match code {
            1 => GeoError::PermissionDenied(message),
            2 => GeoError::PositionUnavailable(message),
            3 => GeoError::Timeout(message),
            code => GeoError::Unknown { code, message },
        }
    }
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::Unsupported => write!(f, "Geolocation is not available"),
            GeoError::Registration(msg) => write!(f, "Failed to start geolocation: {}", msg),
            GeoError::OutOfRange { lat, lng } => {
                write!(f, "Coordinates out of bounds: {}, {}", lat, lng)
            }
            GeoError::PermissionDenied(msg) => write!(f, "Location permission denied: {}", msg),
            GeoError::PositionUnavailable(msg) => write!(f, "Position unavailable: {}", msg),
            GeoError::Timeout(msg) => write!(f, "Location request timed out: {}", msg),
            GeoError::Unknown { code, message } => {
                write!(f, "Geolocation error {}: {}", code, message)
            }
        }
    }
}

impl std::error::Error for GeoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_accepts_bounds() {
        assert!(LatLng::new(90.0, 180.0).is_ok());
        assert!(LatLng::new(-90.0, -180.0).is_ok());
        assert!(LatLng::new(37.5665, 126.978).is_ok());
    }

    #[test]
    fn test_latlng_rejects_out_of_range() {
        assert_eq!(
            LatLng::new(90.5, 0.0),
            Err(GeoError::OutOfRange { lat: 90.5, lng: 0.0 })
        );
        assert!(LatLng::new(0.0, -180.01).is_err());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_position_error_codes() {
        assert!(matches!(
            GeoError::from_position_error(1, "denied".into()),
            GeoError::PermissionDenied(_)
        ));
        assert!(matches!(
            GeoError::from_position_error(2, String::new()),
            GeoError::PositionUnavailable(_)
        ));
        assert!(matches!(
            GeoError::from_position_error(3, String::new()),
            GeoError::Timeout(_)
        ));
        assert_eq!(
            GeoError::from_position_error(7, "odd".into()),
            GeoError::Unknown { code: 7, message: "odd".into() }
        );
    }

    #[test]
    fn test_latlng_wire_shape() {
        let json = serde_json::to_string(&LatLng { lat: 37.5, lng: 127.0 }).unwrap();
        assert_eq!(json, r#"{"lat":37.5,"lng":127.0}"#);
    }
}
