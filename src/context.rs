//! Map Context
//!
//! Shared map state provided via Leptos Context API.

use leptos::prelude::*;

use crate::kakao;
use crate::models::{LatLng, Pin, TokenGrant};
use crate::overlay::OverlayController;

/// Map-wide signals provided via context
#[derive(Clone, Copy)]
pub struct MapContext {
    /// Where the map is focused (None = default center)
    pub center: RwSignal<Option<LatLng>>,
    /// Per-pin overlay flags and the pin-form flag
    pub overlays: RwSignal<OverlayController>,
    /// SDK map instance, set once the SDK has loaded
    pub map: RwSignal<Option<kakao::Map>, LocalStorage>,
    /// Last geolocation error shown under the map
    pub geo_error: RwSignal<Option<String>>,
    /// Outcome of the token request (None while pending)
    pub token: ReadSignal<Option<Result<TokenGrant, String>>>,
}

impl MapContext {
    pub fn new(
        initial_center: Option<LatLng>,
        token: ReadSignal<Option<Result<TokenGrant, String>>>,
    ) -> Self {
        Self {
            center: RwSignal::new(initial_center),
            overlays: RwSignal::new(OverlayController::new()),
            map: RwSignal::new_local(None),
            geo_error: RwSignal::new(None),
            token,
        }
    }

    /// Pin marker click: toggle its overlay and focus the map on it
    pub fn toggle_pin(&self, pin: &Pin) {
        if let Some(focus) = self.overlays.try_update(|o| o.toggle_pin(pin)) {
            self.center.set(Some(focus));
        }
    }

    /// Current-location marker click
    pub fn toggle_input_form(&self) {
        self.overlays.update(|o| o.toggle_input_form());
    }

    pub fn close_input_form(&self) {
        self.overlays.update(|o| o.close_input_form());
    }

    pub fn input_form_open(&self) -> bool {
        self.overlays.with(|o| o.input_form_open())
    }

    pub fn is_overlay_open(&self, isrc: &str) -> bool {
        self.overlays.with(|o| o.is_open(isrc))
    }

    /// Focus the map on a newly committed location
    pub fn recenter(&self, location: LatLng) {
        self.center.set(Some(location));
    }
}

/// Get the map context
pub fn use_map_context() -> MapContext {
    expect_context::<MapContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(isrc: &str, lat: f64, lng: f64) -> Pin {
        Pin::new(isrc, LatLng::new(lat, lng).unwrap()).unwrap()
    }

    fn context() -> MapContext {
        let (token, _) = signal(None);
        MapContext::new(None, token)
    }

    #[test]
    fn test_pin_click_focuses_pin_and_opens_only_it() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let a = pin("KRA381234567", 37.5, 127.0);
            let b = pin("GBAYE0601498", 35.1, 129.0);

            ctx.toggle_pin(&a);
            assert_eq!(ctx.center.get_untracked(), Some(a.latlng));
            assert!(ctx.is_overlay_open(&a.isrc));
            assert!(!ctx.is_overlay_open(&b.isrc));
            assert!(!ctx.input_form_open());
        });
    }

    #[test]
    fn test_closing_click_still_focuses_pin() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let a = pin("KRA381234567", 37.5, 127.0);
            ctx.toggle_pin(&a);
            ctx.recenter(LatLng::new(36.0, 128.0).unwrap());

            ctx.toggle_pin(&a);
            assert_eq!(ctx.center.get_untracked(), Some(a.latlng));
            assert!(!ctx.is_overlay_open(&a.isrc));
        });
    }

    #[test]
    fn test_location_click_leaves_center_and_pins() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let a = pin("KRA381234567", 37.5, 127.0);
            ctx.toggle_pin(&a);

            ctx.toggle_input_form();
            assert!(ctx.input_form_open());
            assert!(ctx.is_overlay_open(&a.isrc));
            assert_eq!(ctx.center.get_untracked(), Some(a.latlng));

            ctx.close_input_form();
            assert!(!ctx.input_form_open());
        });
    }
}
