//! Map Configuration
//!
//! Fixed map surface settings and the build-time SDK key.

use crate::models::LatLng;

/// Kakao Maps JavaScript key, read from the build environment
pub const KAKAO_APP_KEY: &str = match option_env!("KAKAO_APP_KEY_JS") {
    Some(key) => key,
    None => "",
};

/// SDK script location; `autoload=false` so we decide when `kakao.maps.load` runs
pub const KAKAO_SDK_URL: &str = "https://dapi.kakao.com/v2/maps/sdk.js";

/// Zoom level passed to the SDK (lower is closer)
pub const MAP_LEVEL: u32 = 3;

/// Map container size in pixels
pub const MAP_WIDTH_PX: u32 = 500;
pub const MAP_HEIGHT_PX: u32 = 400;

/// Image used for pin markers
pub const PIN_MARKER_IMAGE: &str =
    "https://t1.daumcdn.net/localimg/localimages/07/mapapidoc/markerStar.png";
pub const PIN_MARKER_SIZE: (f64, f64) = (24.0, 35.0);

/// Where the map looks before the first location fix (Seoul City Hall)
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 37.5665,
    lng: 126.9780,
};

/// Inline style for the map container
pub fn map_container_style() -> String {
    format!("width: {}px; height: {}px;", MAP_WIDTH_PX, MAP_HEIGHT_PX)
}
