//! Kakao Maps SDK Bindings
//!
//! Minimal `kakao.maps` surface used by the map widget, plus RAII handles
//! that take markers and overlays off the map when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::{KAKAO_SDK_URL, PIN_MARKER_IMAGE, PIN_MARKER_SIZE};
use crate::models;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = load)]
    fn sdk_load(callback: &js_sys::Function);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type Size;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(width: f64, height: f64) -> Size;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type MarkerImage;

    #[wasm_bindgen(constructor, js_namespace = ["kakao", "maps"])]
    pub fn new(src: &str, size: &Size) -> MarkerImage;

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type Map;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(container: &web_sys::HtmlElement, options: &js_sys::Object) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, latlng: &LatLng);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(options: &js_sys::Object) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(method, js_name = setPosition)]
    fn set_position(this: &Marker, latlng: &LatLng);

    #[wasm_bindgen(js_namespace = ["kakao", "maps"])]
    #[derive(Clone, Debug)]
    pub type CustomOverlay;

    #[wasm_bindgen(constructor, catch, js_namespace = ["kakao", "maps"])]
    fn new(options: &js_sys::Object) -> Result<CustomOverlay, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &CustomOverlay, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["kakao", "maps", "event"], js_name = addListener)]
    fn add_listener(target: &JsValue, kind: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_namespace = ["kakao", "maps", "event"], js_name = removeListener)]
    fn remove_listener(target: &JsValue, kind: &str, handler: &js_sys::Function);
}

impl From<&models::LatLng> for LatLng {
    fn from(p: &models::LatLng) -> Self {
        LatLng::new(p.lat, p.lng)
    }
}

/// Build a plain JS options object
fn options(entries: &[(&str, &JsValue)]) -> Result<js_sys::Object, JsValue> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj)
}

/// Script URL for a given app key
pub fn sdk_script_url(app_key: &str) -> String {
    let key = percent_encoding::utf8_percent_encode(app_key, percent_encoding::NON_ALPHANUMERIC);
    format!("{}?appkey={}&autoload=false", KAKAO_SDK_URL, key)
}

fn sdk_present() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("kakao")).ok())
        .map(|kakao| !kakao.is_undefined())
        .unwrap_or(false)
}

/// Inject the SDK script (once) and wait for `kakao.maps.load`
pub async fn load_sdk(app_key: &str) -> Result<(), JsValue> {
    if !sdk_present() {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let script = document
            .create_element("script")?
            .dyn_into::<web_sys::HtmlScriptElement>()?;
        script.set_src(&sdk_script_url(app_key));

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&script)?;
        JsFuture::from(loaded)
            .await
            .map_err(|_| JsValue::from_str("failed to load the Kakao Maps SDK script"))?;
    }

    let ready = js_sys::Promise::new(&mut |resolve, _reject| sdk_load(&resolve));
    JsFuture::from(ready).await?;
    Ok(())
}

impl Map {
    pub fn create(
        container: &web_sys::HtmlElement,
        center: &models::LatLng,
        level: u32,
    ) -> Result<Map, JsValue> {
        let center = LatLng::from(center);
        let opts = options(&[("center", center.as_ref()), ("level", &JsValue::from(level))])?;
        Map::new(container, &opts)
    }

    pub fn focus(&self, center: &models::LatLng) {
        self.set_center(&LatLng::from(center));
    }
}

/// Star image shared by pin markers
pub fn pin_marker_image() -> MarkerImage {
    let (width, height) = PIN_MARKER_SIZE;
    MarkerImage::new(PIN_MARKER_IMAGE, &Size::new(width, height))
}

/// A marker placed on a map. Removed from the map on drop.
pub struct MarkerHandle {
    marker: Marker,
    on_click: Closure<dyn FnMut()>,
}

impl MarkerHandle {
    pub fn attach<F>(
        map: &Map,
        position: &models::LatLng,
        image: Option<&MarkerImage>,
        on_click: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let position = LatLng::from(position);
        let clickable = JsValue::TRUE;
        let marker = match image {
            Some(image) => Marker::new(&options(&[
                ("position", position.as_ref()),
                ("image", image.as_ref()),
                ("clickable", &clickable),
            ])?)?,
            None => Marker::new(&options(&[
                ("position", position.as_ref()),
                ("clickable", &clickable),
            ])?)?,
        };
        marker.set_map(map.as_ref());

        let on_click = Closure::<dyn FnMut()>::new(on_click);
        add_listener(marker.as_ref(), "click", on_click.as_ref().unchecked_ref());

        Ok(Self { marker, on_click })
    }

    pub fn move_to(&self, position: &models::LatLng) {
        self.marker.set_position(&LatLng::from(position));
    }
}

impl Drop for MarkerHandle {
    fn drop(&mut self) {
        remove_listener(self.marker.as_ref(), "click", self.on_click.as_ref().unchecked_ref());
        self.marker.set_map(&JsValue::NULL);
    }
}

/// A custom overlay anchored at a position. Removed from the map on drop.
pub struct OverlayHandle {
    overlay: CustomOverlay,
}

impl OverlayHandle {
    pub fn attach(
        map: &Map,
        position: &models::LatLng,
        content: &web_sys::Element,
    ) -> Result<Self, JsValue> {
        let position = LatLng::from(position);
        let overlay = CustomOverlay::new(&options(&[
            ("position", position.as_ref()),
            ("content", content.as_ref()),
        ])?)?;
        overlay.set_map(map.as_ref());
        Ok(Self { overlay })
    }
}

impl Drop for OverlayHandle {
    fn drop(&mut self) {
        self.overlay.set_map(&JsValue::NULL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_script_url() {
        assert_eq!(
            sdk_script_url("abc123"),
            "https://dapi.kakao.com/v2/maps/sdk.js?appkey=abc123&autoload=false"
        );
    }

    #[test]
    fn test_sdk_script_url_encodes_key() {
        assert_eq!(
            sdk_script_url("a&b"),
            "https://dapi.kakao.com/v2/maps/sdk.js?appkey=a%26b&autoload=false"
        );
    }

    #[test]
    fn test_sdk_script_url_empty_key() {
        assert!(sdk_script_url("").contains("appkey=&"));
    }
}
