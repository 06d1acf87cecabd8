//! Browser fullscreen host for the viewport container

use aibo_core::{Error, FullscreenHost, Result};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{console, Document, Element};

/// Fullscreen API bound to one container element
pub struct DomFullscreen {
    document: Document,
    container: Element,
}

impl DomFullscreen {
    pub fn new(document: Document, container: Element) -> Self {
        Self { document, container }
    }

    /// Call a zero-argument method by name, keeping its return value.
    ///
    /// `web-sys` binds `requestFullscreen`/`exitFullscreen` without their
    /// promise, so they are looked up reflectively.
    fn call(target: &JsValue, method: &str) -> Result<JsValue> {
        let function = Reflect::get(target, &JsValue::from_str(method))
            .map_err(|e| Error::fullscreen(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| Error::fullscreen(format!("{method} is not supported")))?;

        function
            .call0(target)
            .map_err(|e| Error::fullscreen(describe(&e)))
    }

    /// Log a rejection of the returned promise; the result is otherwise ignored
    fn log_rejection(pending: JsValue, method: &'static str) {
        let Ok(promise) = pending.dyn_into::<Promise>() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console::error_2(&format!("[Aibo] {method} failed:").into(), &err);
            }
        });
    }
}

impl FullscreenHost for DomFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        let pending = Self::call(self.container.as_ref(), "requestFullscreen")?;
        Self::log_rejection(pending, "requestFullscreen");
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        let pending = Self::call(self.document.as_ref(), "exitFullscreen")?;
        Self::log_rejection(pending, "exitFullscreen");
        Ok(())
    }
}

/// Readable text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
