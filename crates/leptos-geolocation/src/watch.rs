//! Browser position subscriptions.
//!
//! `watch_position` returns a [`GeoWatch`] guard; dropping it clears the
//! watch. `use_watch_position` ties that guard to the current reactive owner.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::coords::{GeoError, LatLng};

fn geolocation() -> Result<web_sys::Geolocation, GeoError> {
    let win = web_sys::window().ok_or(GeoError::Unsupported)?;
    win.navigator().geolocation().map_err(|_| GeoError::Unsupported)
}

fn to_latlng(pos: &web_sys::Position) -> Result<LatLng, GeoError> {
    let coords = pos.coords();
    LatLng::new(coords.latitude(), coords.longitude())
}

fn to_geo_error(err: &web_sys::PositionError) -> GeoError {
    GeoError::from_position_error(err.code(), err.message())
}

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Active `watchPosition` subscription. Cleared on drop.
pub struct GeoWatch {
    geolocation: web_sys::Geolocation,
    watch_id: i32,
    _on_position: Closure<dyn FnMut(web_sys::Position)>,
    _on_error: Closure<dyn FnMut(web_sys::PositionError)>,
}

impl GeoWatch {
    pub fn id(&self) -> i32 {
        self.watch_id
    }
}

impl Drop for GeoWatch {
    fn drop(&mut self) {
        self.geolocation.clear_watch(self.watch_id);
    }
}

/// Subscribe to continuous position updates.
///
/// Source errors go to `on_error` and the watch stays registered; the
/// browser keeps delivering fixes when it can.
pub fn watch_position<F, E>(on_position: F, on_error: E) -> Result<GeoWatch, GeoError>
where
    F: Fn(LatLng) + 'static,
    E: Fn(GeoError) + Clone + 'static,
{
    let geolocation = geolocation()?;

    let on_bad_fix = on_error.clone();
    let on_position = Closure::<dyn FnMut(web_sys::Position)>::new(
        move |pos: web_sys::Position| match to_latlng(&pos) {
            Ok(latlng) => on_position(latlng),
            Err(e) => on_bad_fix(e),
        },
    );
    let on_error = Closure::<dyn FnMut(web_sys::PositionError)>::new(
        move |err: web_sys::PositionError| on_error(to_geo_error(&err)),
    );

    let watch_id = geolocation
        .watch_position_with_error_callback(
            on_position.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|e| GeoError::Registration(js_message(&e)))?;

    Ok(GeoWatch {
        geolocation,
        watch_id,
        _on_position: on_position,
        _on_error: on_error,
    })
}

/// Request a single fix.
///
/// Exactly one of the two callbacks fires; the other closure is never
/// called and stays allocated.
pub fn current_position<F, E>(on_position: F, on_error: E) -> Result<(), GeoError>
where
    F: FnOnce(LatLng) + 'static,
    E: Fn(GeoError) + Clone + 'static,
{
    let geolocation = geolocation()?;

    let on_bad_fix = on_error.clone();
    let on_position = Closure::once_into_js(move |pos: web_sys::Position| {
        match to_latlng(&pos) {
            Ok(latlng) => on_position(latlng),
            Err(e) => on_bad_fix(e),
        }
    });
    let on_error = Closure::once_into_js(move |err: web_sys::PositionError| {
        on_error(to_geo_error(&err))
    });

    geolocation
        .get_current_position_with_error_callback(
            on_position.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        )
        .map_err(|e| GeoError::Registration(js_message(&e)))
}

/// Watch position for as long as the current reactive owner lives.
///
/// The subscription is released in `on_cleanup`, so unmounting the calling
/// component always clears the browser watch. Returns the watch id.
pub fn use_watch_position<F, E>(on_position: F, on_error: E) -> Result<i32, GeoError>
where
    F: Fn(LatLng) + 'static,
    E: Fn(GeoError) + Clone + 'static,
{
    let watch = watch_position(on_position, on_error)?;
    let id = watch.id();
    let watch = SendWrapper::new(watch);
    on_cleanup(move || drop(watch));
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callbacks_take_position_types() {
        // Browser callbacks receive `Position` / `PositionError`
        let _: fn(&web_sys::Position) -> Result<LatLng, GeoError> = to_latlng;
        let _: fn(&web_sys::PositionError) -> GeoError = to_geo_error;
    }
}
