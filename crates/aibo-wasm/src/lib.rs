//! Aibo WASM - WebAssembly bindings for the Aibo video widget
//!
//! Mounts the widget into a page element and wires it to the browser:
//! - URL form with validation feedback
//! - Bilibili embed frames and an external player for everything else
//! - Zoom controls and fullscreen via the browser fullscreen API
//!
//! ## Usage
//!
//! ```javascript
//! import init, { AiboPlayer } from '@aibo/wasm';
//!
//! await init();
//! const player = new AiboPlayer(
//!   document.getElementById('aibo'),
//!   { zoom: { max_tenths: 15 } },
//!   (mount, props, onError) => renderReactPlayer(mount, props, onError),
//! );
//! player.submit('https://www.bilibili.com/video/BV1PoF3eeEtF');
//! ```

use wasm_bindgen::prelude::*;

mod dom;
mod fullscreen;
mod player;
mod widget;

pub use widget::AiboPlayer;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    aibo_core::init();
    web_sys::console::log_1(&"[Aibo WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    aibo_core::VERSION.to_string()
}

/// Check a URL the way the widget's form does
#[wasm_bindgen]
pub fn validate_url(url: &str) -> bool {
    aibo_core::validate(url)
}

/// Name of the adapter that would render `url`: "bilibili", "youtube" or "default"
#[wasm_bindgen]
pub fn platform_name(url: &str) -> String {
    aibo_core::select_adapter(url).name().to_string()
}

/// URL the adapter for `url` would load
#[wasm_bindgen]
pub fn embed_url(url: &str) -> String {
    aibo_core::select_adapter(url).embed_url(url).into_owned()
}

/// Stylesheet injected by the widget, for hosts that render server-side
#[wasm_bindgen]
pub fn widget_css() -> String {
    aibo_core::WidgetTheme::default().to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name() {
        assert_eq!(platform_name("https://www.bilibili.com/video/BV1234567"), "bilibili");
        assert_eq!(platform_name("https://youtu.be/abc"), "youtube");
        assert_eq!(platform_name("https://cdn.example.com/a.m3u8"), "default");
    }

    #[test]
    fn test_embed_url() {
        assert!(embed_url("https://www.bilibili.com/video/BV1234567").starts_with("//player.bilibili.com/"));
        assert_eq!(embed_url("https://youtu.be/abc"), "https://youtu.be/abc");
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://youtu.be/abc"));
        assert!(!validate_url("not a url"));
    }
}
