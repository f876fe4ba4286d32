//! Frontend Models
//!
//! Data structures for pins and host responses.

use serde::{Deserialize, Serialize};

pub use leptos_geolocation::LatLng;

/// A track dropped at a location (pin store record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// ISRC of the track, used as an opaque identifier
    pub isrc: String,
    pub latlng: LatLng,
}

impl Pin {
    /// Build a pin; the identifier is trimmed, upper-cased and must not be empty.
    pub fn new(isrc: impl Into<String>, latlng: LatLng) -> Result<Self, PinError> {
        let isrc = isrc.into().trim().to_uppercase();
        if isrc.is_empty() {
            return Err(PinError::EmptyIdentifier);
        }
        Ok(Self { isrc, latlng })
    }

    /// Key for rendered markers. Led by the identifier so co-located pins
    /// coexist; includes the position so a moved pin is rendered afresh.
    pub fn key(&self) -> (String, u64, u64) {
        (self.isrc.clone(), self.latlng.lat.to_bits(), self.latlng.lng.to_bits())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PinError {
    EmptyIdentifier,
}

impl std::fmt::Display for PinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PinError::EmptyIdentifier => write!(f, "Track code must not be empty"),
        }
    }
}

impl std::error::Error for PinError {}

/// Music service token issued by the host (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> LatLng {
        LatLng::new(37.5665, 126.978).unwrap()
    }

    #[test]
    fn test_pin_normalizes_identifier() {
        let pin = Pin::new("  usum71703861 ", seoul()).unwrap();
        assert_eq!(pin.isrc, "USUM71703861");
        assert_eq!(pin.key().0, "USUM71703861");
    }

    #[test]
    fn test_pin_rejects_blank_identifier() {
        assert_eq!(Pin::new("   ", seoul()), Err(PinError::EmptyIdentifier));
        assert_eq!(Pin::new("", seoul()), Err(PinError::EmptyIdentifier));
    }

    #[test]
    fn test_colocated_pins_have_distinct_keys() {
        let a = Pin::new("KRA381234567", seoul()).unwrap();
        let b = Pin::new("GBAYE0601498", seoul()).unwrap();
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_moved_pin_gets_new_key() {
        let before = Pin::new("KRA381234567", LatLng::new(37.5, 127.0).unwrap()).unwrap();
        let after = Pin::new("KRA381234567", LatLng::new(35.1, 129.0).unwrap()).unwrap();
        assert_ne!(before.key(), after.key());
        assert_eq!(before.key(), before.clone().key());
    }
}
