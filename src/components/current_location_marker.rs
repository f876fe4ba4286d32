//! Current Location Marker Component
//!
//! Default SDK marker at the committed location. Clicking it toggles the
//! pin form.

use leptos::prelude::*;

use crate::console::{log_error, log_info, MAP};
use crate::context::use_map_context;
use crate::kakao::MarkerHandle;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CurrentLocationMarker() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_map_context();
    let marker = StoredValue::new_local(None::<MarkerHandle>);

    Effect::new(move |_| {
        let map = ctx.map.get();
        let location = store.location().get();
        let (Some(map), Some(location)) = (map, location) else {
            marker.set_value(None);
            return;
        };

        // Move the existing marker rather than re-creating it on every fix
        let moved = marker.with_value(|m| m.as_ref().map(|m| m.move_to(&location)).is_some());
        if moved {
            return;
        }

        let placed = MarkerHandle::attach(&map, &location, None, move || {
            log_info(MAP, "current location clicked");
            ctx.toggle_input_form();
        });
        match placed {
            Ok(handle) => marker.set_value(Some(handle)),
            Err(e) => log_error(MAP, &format!("failed to place location marker: {:?}", e)),
        }
    });

    on_cleanup(move || {
        marker.try_update_value(|h| *h = None);
    });
}
