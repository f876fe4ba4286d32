//! UI Components
//!
//! Leptos components of the map widget.

mod kakao_map;
mod pin_layer;
mod current_location_marker;
mod pin_form;
mod track_card;

pub use kakao_map::KakaoMap;
pub use pin_layer::PinLayer;
pub use current_location_marker::CurrentLocationMarker;
pub use pin_form::PinForm;
