//! Pin Layer Component
//!
//! One SDK marker per pin in the store, keyed by track identifier and position.

use leptos::prelude::*;

use crate::components::track_card::track_card;
use crate::console::{log_error, log_info, PIN};
use crate::context::use_map_context;
use crate::kakao::{self, MarkerHandle, OverlayHandle};
use crate::models::Pin;
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders every pin in the store as a clickable marker
#[component]
pub fn PinLayer() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_map_context();

    // Forget overlay flags of pins that left the store
    Effect::new(move |_| {
        let pins = store.pins().get();
        ctx.overlays.update(|o| o.retain_pins(&pins));
    });

    view! {
        <For
            each=move || store.pins().get()
            key=|pin| pin.key()
            children=move |pin| view! { <PinMarker pin=pin /> }
        />
    }
}

/// A single pin: star marker plus a track overlay while open
#[component]
fn PinMarker(pin: Pin) -> impl IntoView {
    let ctx = use_map_context();
    let marker = StoredValue::new_local(None::<MarkerHandle>);
    let overlay = StoredValue::new_local(None::<OverlayHandle>);

    // Marker
    let clicked = pin.clone();
    Effect::new(move |_| {
        let Some(map) = ctx.map.get() else { return };
        let position = clicked.latlng;
        let target = clicked.clone();
        let placed = MarkerHandle::attach(
            &map,
            &position,
            Some(&kakao::pin_marker_image()),
            move || {
                log_info(PIN, &format!("marker clicked: {}", target.isrc));
                ctx.toggle_pin(&target);
            },
        );
        match placed {
            Ok(handle) => marker.set_value(Some(handle)),
            Err(e) => log_error(PIN, &format!("failed to place marker {}: {:?}", clicked.isrc, e)),
        }
    });

    // Overlay
    let isrc = pin.isrc.clone();
    let is_open = Memo::new(move |_| ctx.is_overlay_open(&isrc));
    Effect::new(move |_| {
        let map = ctx.map.get();
        let open = is_open.get();
        overlay.set_value(None);
        let (true, Some(map)) = (open, map) else { return };
        let attached = track_card(&pin.isrc)
            .and_then(|card| OverlayHandle::attach(&map, &pin.latlng, &card));
        match attached {
            Ok(handle) => overlay.set_value(Some(handle)),
            Err(e) => log_error(PIN, &format!("failed to open overlay {}: {:?}", pin.isrc, e)),
        }
    });

    on_cleanup(move || {
        overlay.try_update_value(|h| *h = None);
        marker.try_update_value(|h| *h = None);
    });
}
