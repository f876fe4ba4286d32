//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{LatLng, Pin};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All pins submitted by users
    pub pins: Vec<Pin>,
    /// Last committed user location (None until the first fix)
    pub location: Option<LatLng>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Insert a pin, replacing any pin with the same identifier
pub fn upsert_pin(pins: &mut Vec<Pin>, pin: Pin) {
    match pins.iter_mut().find(|p| p.isrc == pin.isrc) {
        Some(existing) => *existing = pin,
        None => pins.push(pin),
    }
}

/// Add a pin to the store (the only write path for pins)
pub fn store_add_pin(store: &AppStore, pin: Pin) {
    upsert_pin(&mut store.pins().write(), pin);
}

/// Commit the user's current location
pub fn store_set_location(store: &AppStore, location: LatLng) {
    *store.location().write() = Some(location);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(isrc: &str, lat: f64, lng: f64) -> Pin {
        Pin::new(isrc, LatLng::new(lat, lng).unwrap()).unwrap()
    }

    #[test]
    fn test_upsert_appends_new_pins_in_order() {
        let mut pins = Vec::new();
        upsert_pin(&mut pins, pin("AAA000000001", 37.5, 127.0));
        upsert_pin(&mut pins, pin("AAA000000002", 37.5, 127.0));
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].isrc, "AAA000000001");
        assert_eq!(pins[1].isrc, "AAA000000002");
    }

    #[test]
    fn test_upsert_replaces_same_identifier() {
        let mut pins = vec![pin("AAA000000001", 37.5, 127.0), pin("AAA000000002", 35.0, 129.0)];
        upsert_pin(&mut pins, pin("AAA000000001", 36.0, 128.0));
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].latlng, LatLng::new(36.0, 128.0).unwrap());
        assert_eq!(pins[1].isrc, "AAA000000002");
    }

    #[test]
    fn test_upsert_move_changes_marker_key() {
        let mut pins = vec![pin("KRA381234567", 37.5, 127.0)];
        let before = pins[0].key();
        upsert_pin(&mut pins, pin("KRA381234567", 35.1, 129.0));
        assert_eq!(pins.len(), 1);
        assert_ne!(pins[0].key(), before);
        assert_eq!(pins[0].latlng, LatLng::new(35.1, 129.0).unwrap());
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(state.pins.is_empty());
        assert!(state.location.is_none());
    }
}
