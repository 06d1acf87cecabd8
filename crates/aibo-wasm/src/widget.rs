//! Aibo Player - the mounted widget handle exported to JavaScript

use crate::{
    dom::{EventListener, WidgetDom},
    fullscreen::{describe, DomFullscreen},
    player,
};
use aibo_core::{Rendered, WidgetConfig, WidgetSession};
use js_sys::Function;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Element};

/// Widget state shared with DOM callbacks
struct Inner {
    session: WidgetSession,
    dom: WidgetDom,
    fullscreen: DomFullscreen,
    /// Host-supplied external player, `factory(mount, props, onError)`
    factory: Option<Function>,
    /// Load count and content currently mounted in the video box
    mounted: Option<(u64, Rendered)>,
    /// Bumped on every remount; error callbacks from older mounts are ignored
    generation: u64,
}

impl Inner {
    fn render(&mut self, weak: &Weak<RefCell<Inner>>) -> Result<(), JsValue> {
        let view = self.session.view();
        self.dom.update(&view)?;

        let content = view.viewport.content;
        let load = self.session.load_count();
        let current = self.mounted.as_ref().map(|(l, c)| (*l, c));
        if current != Some((load, &content)) {
            self.generation += 1;
            let on_error = error_callback(weak.clone(), self.generation);
            player::mount(
                &self.dom.document,
                &self.dom.video_box,
                &content,
                self.factory.as_ref(),
                &on_error,
            )?;
            console::log_1(
                &format!("[Aibo] Mounted {} player: {}", view.viewport.platform, content.source()).into(),
            );
            self.mounted = Some((load, content));
        }
        Ok(())
    }
}

/// Player error callback handed to the mounted content.
///
/// The failure is applied on a later task so a player that reports errors
/// while being mounted does not re-enter the widget state.
fn error_callback(weak: Weak<RefCell<Inner>>, generation: u64) -> Function {
    Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        console::error_2(&"[Aibo] Video failed to load:".into(), &err);
        let weak = weak.clone();
        spawn_local(async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            if inner.generation != generation {
                return;
            }
            inner.session.report_playback_failure(&describe(&err));
            if let Err(e) = inner.render(&weak) {
                console::error_2(&"[Aibo] Render failed:".into(), &e);
            }
        });
    })
    .into_js_value()
    .unchecked_into()
}

/// Run `f` against the widget and redraw
fn update<R>(weak: &Weak<RefCell<Inner>>, f: impl FnOnce(&mut Inner) -> R) -> Option<R> {
    let inner = weak.upgrade()?;
    let mut inner = inner.borrow_mut();
    let result = f(&mut inner);
    if let Err(e) = inner.render(weak) {
        console::error_2(&"[Aibo] Render failed:".into(), &e);
    }
    Some(result)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Video widget mounted into a host element
#[wasm_bindgen]
pub struct AiboPlayer {
    inner: Rc<RefCell<Inner>>,
    _listeners: Vec<EventListener>,
}

impl AiboPlayer {
    fn weak(&self) -> Weak<RefCell<Inner>> {
        Rc::downgrade(&self.inner)
    }
}

#[wasm_bindgen]
impl AiboPlayer {
    /// Mount the widget into `root`.
    ///
    /// `config` is an optional object in the `WidgetConfig` shape; missing
    /// fields take their defaults. `player_factory` renders non-embed videos;
    /// without it a native `<video controls>` element is used.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root: Element,
        config: JsValue,
        player_factory: Option<Function>,
    ) -> Result<AiboPlayer, JsValue> {
        let config: WidgetConfig = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let session = WidgetSession::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let document = root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("root element is not attached to a document"))?;
        let dom = WidgetDom::build(document.clone(), root, &session.view())?;
        let fullscreen = DomFullscreen::new(document.clone(), dom.container.clone());

        let inner = Rc::new(RefCell::new(Inner {
            session,
            dom,
            fullscreen,
            factory: player_factory,
            mounted: None,
            generation: 0,
        }));
        let weak = Rc::downgrade(&inner);
        inner.borrow_mut().render(&weak)?;

        let listeners = {
            let state = inner.borrow();
            let dom = &state.dom;
            let mut listeners = Vec::with_capacity(6);

            let w = weak.clone();
            let input = dom.input.clone();
            listeners.push(EventListener::new(&dom.input, "input", move |_| {
                let value = input.value();
                update(&w, |inner| inner.session.set_input(value));
            })?);

            let w = weak.clone();
            listeners.push(EventListener::new(&dom.submit, "click", move |_| {
                update(&w, |inner| inner.session.submit_input());
            })?);

            let w = weak.clone();
            listeners.push(EventListener::new(&dom.zoom_in, "click", move |_| {
                update(&w, |inner| inner.session.zoom_in());
            })?);

            let w = weak.clone();
            listeners.push(EventListener::new(&dom.zoom_out, "click", move |_| {
                update(&w, |inner| inner.session.zoom_out());
            })?);

            let w = weak.clone();
            listeners.push(EventListener::new(&dom.fullscreen, "click", move |_| {
                update(&w, |inner| {
                    let Inner { session, fullscreen, .. } = inner;
                    session.toggle_fullscreen(fullscreen)
                });
            })?);

            let w = weak.clone();
            let doc = document.clone();
            listeners.push(EventListener::new(&document, "fullscreenchange", move |_| {
                let active = doc.fullscreen_element().is_some();
                update(&w, |inner| inner.session.on_fullscreen_change(active));
            })?);

            listeners
        };

        console::log_1(&format!("[Aibo] Widget mounted, session {}", inner.borrow().session.id()).into());

        Ok(AiboPlayer {
            inner,
            _listeners: listeners,
        })
    }

    /// Put `url` in the field and submit it. Returns "ignored", "loaded" or "rejected".
    #[wasm_bindgen]
    pub fn submit(&self, url: String) -> String {
        update(&self.weak(), |inner| {
            inner.session.set_input(url);
            inner.session.submit_input()
        })
        .map(|outcome| format!("{outcome:?}").to_lowercase())
        .unwrap_or_default()
    }

    /// Zoom in one step; false at the upper bound
    #[wasm_bindgen]
    pub fn zoom_in(&self) -> bool {
        update(&self.weak(), |inner| inner.session.zoom_in()).unwrap_or(false)
    }

    /// Zoom out one step; false at the lower bound
    #[wasm_bindgen]
    pub fn zoom_out(&self) -> bool {
        update(&self.weak(), |inner| inner.session.zoom_out()).unwrap_or(false)
    }

    /// Request entering or leaving fullscreen. Returns "enter" or "exit".
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&self) -> String {
        update(&self.weak(), |inner| {
            let Inner { session, fullscreen, .. } = inner;
            session.toggle_fullscreen(fullscreen)
        })
        .map(|request| format!("{request:?}").to_lowercase())
        .unwrap_or_default()
    }

    /// Show `message` in the viewport banner
    #[wasm_bindgen]
    pub fn report_error(&self, message: String) {
        update(&self.weak(), |inner| inner.session.report_error(message));
    }

    /// Viewport snapshot: `{ scale, isFullscreen, errorMessage }`
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().session.viewport().state())
    }

    /// The video currently displayed: `{ id, url, title }`
    #[wasm_bindgen]
    pub fn current_video(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.borrow().session.current_video())
    }

    /// Complete view model
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().session.view())
    }

    /// Session id used in log lines
    #[wasm_bindgen]
    pub fn session_id(&self) -> String {
        self.inner.borrow().session.id().to_string()
    }

    /// Remove the widget from the page
    #[wasm_bindgen]
    pub fn destroy(self) {
        let inner = self.inner.borrow();
        inner.dom.root.set_inner_html("");
        inner.dom.root.set_class_name("");
    }
}
