//! Player bridge - mounts adapter output into the video box
//!
//! Embed frames and the native `<video>` fallback are created directly. When
//! the host page supplies a player factory it is called as
//! `factory(mountElement, props, onError)` and owns everything inside the
//! mount element.

use aibo_core::{CssStyle, EmbedFrame, ExternalPlayer, Rendered};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Replace the contents of `slot` with `rendered`
pub fn mount(
    document: &Document,
    slot: &Element,
    rendered: &Rendered,
    factory: Option<&Function>,
    on_error: &Function,
) -> Result<Element, JsValue> {
    slot.set_inner_html("");

    let element = match (rendered, factory) {
        (Rendered::Frame(frame), _) => embed_frame(document, frame)?,
        (Rendered::Player(player), Some(factory)) => {
            let mount = document.create_element("div")?;
            mount.set_attribute("style", &CssStyle::fill_parent().to_css_text())?;
            slot.append_child(&mount)?;

            // Style maps must arrive as plain objects
            let props = player.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
            factory.call3(&JsValue::NULL, &mount, &props, on_error)?;
            return Ok(mount);
        }
        (Rendered::Player(player), None) => native_video(document, player)?,
    };

    element.add_event_listener_with_callback("error", on_error)?;
    slot.append_child(&element)?;
    Ok(element)
}

fn embed_frame(document: &Document, frame: &EmbedFrame) -> Result<Element, JsValue> {
    let iframe = document.create_element("iframe")?;
    iframe.set_attribute("src", &frame.src)?;
    iframe.set_attribute("width", frame.width)?;
    iframe.set_attribute("height", frame.height)?;
    iframe.set_attribute("frameborder", frame.frame_border)?;
    if frame.allow_fullscreen {
        iframe.set_attribute("allowfullscreen", "")?;
    }
    iframe.set_attribute("allow", frame.allow)?;
    iframe.set_attribute("sandbox", frame.sandbox)?;
    iframe.set_attribute("style", &frame.style.to_css_text())?;
    Ok(iframe)
}

fn native_video(document: &Document, player: &ExternalPlayer) -> Result<Element, JsValue> {
    let video = document.create_element("video")?;
    video.set_attribute("src", &player.url)?;
    video.set_attribute("width", player.width)?;
    video.set_attribute("height", player.height)?;
    if player.controls {
        video.set_attribute("controls", "")?;
    }
    video.set_attribute("style", &player.style.to_css_text())?;
    Ok(video)
}
