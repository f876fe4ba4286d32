//! Kakao Map Component
//!
//! The map widget: loads the SDK, tracks the user, renders pins and
//! overlays, and requests a music service token once per mount.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CurrentLocationMarker, PinForm, PinLayer};
use crate::config::{map_container_style, DEFAULT_CENTER, KAKAO_APP_KEY, MAP_LEVEL};
use crate::console::{log_error, log_info, MAP};
use crate::context::MapContext;
use crate::kakao;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::token::bootstrap_token;
use crate::tracker::use_location_tracker;

#[component]
pub fn KakaoMap() -> impl IntoView {
    let store = use_app_store();

    let token = bootstrap_token();
    let ctx = MapContext::new(store.location().get_untracked(), token);
    provide_context(ctx);

    use_location_tracker(ctx, store);

    let map_ref = NodeRef::<Div>::new();
    let (sdk_error, set_sdk_error) = signal(None::<String>);

    // Load the SDK and create the map once the container is mounted
    Effect::new(move |_| {
        let Some(container) = map_ref.get() else { return };
        if ctx.map.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = kakao::load_sdk(KAKAO_APP_KEY).await {
                let msg = format!("Map failed to load: {:?}", e);
                log_error(MAP, &msg);
                let _ = set_sdk_error.try_set(Some(msg));
                return;
            }
            let center = ctx.center.try_get_untracked().flatten().unwrap_or(DEFAULT_CENTER);
            match kakao::Map::create(&container, &center, MAP_LEVEL) {
                Ok(map) => {
                    log_info(MAP, "map ready");
                    let _ = ctx.map.try_set(Some(map));
                }
                Err(e) => {
                    let msg = format!("Map failed to start: {:?}", e);
                    log_error(MAP, &msg);
                    let _ = set_sdk_error.try_set(Some(msg));
                }
            }
        });
    });

    // Keep the SDK view on the current center
    Effect::new(move |_| {
        let center = ctx.center.get().unwrap_or(DEFAULT_CENTER);
        if let Some(map) = ctx.map.get() {
            map.focus(&center);
        }
    });

    let status = move || sdk_error.get().or_else(|| ctx.geo_error.get());
    let token_label = move || match ctx.token.get() {
        None => "Connecting to music service...",
        Some(Ok(_)) => "Music service ready",
        Some(Err(_)) => "Music service unavailable",
    };

    view! {
        <section class="kakao-map-widget">
            <Show when=move || ctx.input_form_open()>
                <PinForm />
            </Show>
            <div node_ref=map_ref class="kakao-map" style=map_container_style()></div>
            <CurrentLocationMarker />
            <PinLayer />
            {move || status().map(|msg| view! { <p class="map-status">{msg}</p> })}
            <p class="token-status">{token_label}</p>
        </section>
    }
}
