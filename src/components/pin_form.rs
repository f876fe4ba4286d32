//! Pin Form Component
//!
//! Drops a track pin at the user's current location.

use leptos::prelude::*;

use crate::console::{log_info, PIN};
use crate::context::use_map_context;
use crate::models::Pin;
use crate::store::{store_add_pin, use_app_store, AppStateStoreFields};

/// Form for adding a pin (shown from the current-location marker)
#[component]
pub fn PinForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_map_context();

    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(location) = store.location().get_untracked() else {
            set_error.set(Some("Waiting for your location...".to_string()));
            return;
        };
        match Pin::new(code.get_untracked(), location) {
            Ok(pin) => {
                log_info(PIN, &format!("pin added: {}", pin.isrc));
                store_add_pin(&store, pin);
                set_code.set(String::new());
                set_error.set(None);
                ctx.close_input_form();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="pin-form" on:submit=on_submit>
            <div class="pin-form-row">
                <input
                    type="text"
                    placeholder="ISRC (e.g. USUM71703861)"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
                <button type="submit">"Drop pin here"</button>
            </div>
            {move || error.get().map(|msg| view! { <p class="pin-form-error">{msg}</p> })}
        </form>
    }
}
