//! Marker Overlay State
//!
//! Which pins have their track overlay open, and whether the pin form is
//! shown. Flags are independent: toggling one never touches another.

use std::collections::HashSet;

use crate::models::{LatLng, Pin};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayController {
    /// Identifiers of pins whose overlay is open
    open: HashSet<String>,
    input_form_open: bool,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a pin's overlay. Returns where the view should re-center.
    pub fn toggle_pin(&mut self, pin: &Pin) -> LatLng {
        if !self.open.remove(&pin.isrc) {
            self.open.insert(pin.isrc.clone());
        }
        pin.latlng
    }

    pub fn is_open(&self, isrc: &str) -> bool {
        self.open.contains(isrc)
    }

    /// Current-location marker click
    pub fn toggle_input_form(&mut self) {
        self.input_form_open = !self.input_form_open;
    }

    pub fn close_input_form(&mut self) {
        self.input_form_open = false;
    }

    pub fn input_form_open(&self) -> bool {
        self.input_form_open
    }

    /// Forget flags of pins that are no longer rendered
    pub fn retain_pins(&mut self, pins: &[Pin]) {
        self.open.retain(|isrc| pins.iter().any(|p| &p.isrc == isrc));
    }
}
