//! Music Pin Map Frontend App
//!
//! Provides the pin store and mounts the map widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::KakaoMap;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    view! {
        <main class="app-layout">
            <h1>"Music Pins"</h1>
            <KakaoMap />
            <p class="pin-count">{move || format!("{} pins nearby", store.pins().read().len())}</p>
        </main>
    }
}
