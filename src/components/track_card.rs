//! Track Card
//!
//! Overlay content shown above an opened pin. Built as a detached DOM node
//! because the SDK owns where overlays live in the document.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsValue;

/// Spotify search link for a track code
pub fn spotify_search_url(isrc: &str) -> String {
    let query = format!("isrc:{}", isrc);
    format!(
        "https://open.spotify.com/search/{}",
        utf8_percent_encode(&query, NON_ALPHANUMERIC)
    )
}

/// Card element for a pin's overlay
pub fn track_card(isrc: &str) -> Result<web_sys::Element, JsValue> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let card = document.create_element("div")?;
    card.set_class_name("track-card");

    let code = document.create_element("span")?;
    code.set_class_name("track-isrc");
    code.set_text_content(Some(isrc));
    card.append_child(&code)?;

    let link = document.create_element("a")?;
    link.set_class_name("track-link");
    link.set_attribute("href", &spotify_search_url(isrc))?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener noreferrer")?;
    link.set_text_content(Some("Open in Spotify"));
    card.append_child(&link)?;

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotify_search_url() {
        assert_eq!(
            spotify_search_url("USUM71703861"),
            "https://open.spotify.com/search/isrc%3AUSUM71703861"
        );
    }
}
