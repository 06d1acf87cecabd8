//! Widget markup and event listener plumbing

use aibo_core::{WidgetTheme, WidgetView};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, Document, Element, Event, EventTarget, HtmlButtonElement, HtmlInputElement};

/// Event listener that unregisters itself when dropped
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            console::error_2(&format!("[Aibo] Failed to remove {} listener:", self.event).into(), &e);
        }
    }
}

/// References to every node the widget updates
pub struct WidgetDom {
    pub document: Document,
    pub root: Element,
    pub input: HtmlInputElement,
    pub submit: HtmlButtonElement,
    pub field_error: Element,
    /// Viewport card, the fullscreen target
    pub container: Element,
    pub banner: Element,
    pub video_box: Element,
    pub controls: Element,
    pub title: Element,
    pub zoom_out: HtmlButtonElement,
    pub zoom_in: HtmlButtonElement,
    pub fullscreen: HtmlButtonElement,
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn button(document: &Document, class: &str, test_id: &str) -> Result<HtmlButtonElement, JsValue> {
    let el = element(document, "button", class)?;
    el.set_attribute("type", "button")?;
    el.set_attribute("data-testid", test_id)?;
    el.dyn_into::<HtmlButtonElement>().map_err(JsValue::from)
}

impl WidgetDom {
    /// Build the widget under `root`, replacing its contents
    pub fn build(document: Document, root: Element, view: &WidgetView) -> Result<Self, JsValue> {
        root.set_inner_html("");
        root.set_class_name("aibo");

        let style = document.create_element("style")?;
        style.set_text_content(Some(&WidgetTheme::default().to_css()));
        root.append_child(&style)?;

        let heading = element(&document, "h1", "aibo__heading")?;
        heading.set_text_content(Some(&view.heading));
        root.append_child(&heading)?;

        // URL form
        let form = element(&document, "div", "aibo__form")?;
        let input = element(&document, "input", "aibo__input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        input.set_attribute("type", "url")?;
        input.set_attribute("aria-label", &view.input_label)?;
        input.set_attribute("placeholder", &view.input_placeholder)?;
        form.append_child(&input)?;

        let submit = button(&document, "aibo__submit", "submit-button")?;
        submit.set_text_content(Some(&view.submit_label));
        form.append_child(&submit)?;
        root.append_child(&form)?;

        let field_error = element(&document, "div", "aibo__alert")?;
        field_error.set_attribute("role", "alert")?;
        root.append_child(&field_error)?;

        // Viewport card
        let container = element(&document, "div", "aibo__container")?;
        container.set_attribute("data-testid", "player-container")?;

        let banner = element(&document, "div", "aibo__alert")?;
        banner.set_attribute("role", "alert")?;
        container.append_child(&banner)?;

        let video_box = element(&document, "div", "aibo__video-box")?;
        video_box.set_attribute("data-testid", "video-container")?;
        container.append_child(&video_box)?;

        let controls = element(&document, "div", "aibo__controls")?;
        let title = element(&document, "h6", "aibo__title")?;
        title.set_text_content(Some(&view.viewport.title));
        controls.append_child(&title)?;
        let spacer = element(&document, "div", "aibo__spacer")?;
        controls.append_child(&spacer)?;

        let zoom_out = button(&document, "aibo__button", "zoom-out-button")?;
        zoom_out.set_text_content(Some("−"));
        zoom_out.set_attribute("aria-label", "zoom out")?;
        controls.append_child(&zoom_out)?;

        let zoom_in = button(&document, "aibo__button", "zoom-in-button")?;
        zoom_in.set_text_content(Some("+"));
        zoom_in.set_attribute("aria-label", "zoom in")?;
        controls.append_child(&zoom_in)?;

        let fullscreen = button(&document, "aibo__button", "fullscreen-button")?;
        controls.append_child(&fullscreen)?;

        container.append_child(&controls)?;
        root.append_child(&container)?;

        let dom = Self {
            document,
            root,
            input,
            submit,
            field_error,
            container,
            banner,
            video_box,
            controls,
            title,
            zoom_out,
            zoom_in,
            fullscreen,
        };
        dom.update(view)?;
        Ok(dom)
    }

    /// Apply `view` to the existing nodes. The player itself is mounted separately.
    pub fn update(&self, view: &WidgetView) -> Result<(), JsValue> {
        if self.input.value() != view.input {
            self.input.set_value(&view.input);
        }
        self.input.set_class_name(if view.url_error.is_some() {
            "aibo__input aibo__input--error"
        } else {
            "aibo__input"
        });
        show_message(&self.field_error, view.url_error.as_deref())?;

        let viewport = &view.viewport;
        self.container
            .set_attribute("style", &viewport.container_style.to_css_text())?;
        show_message(&self.banner, viewport.banner.as_deref())?;
        self.video_box
            .set_attribute("style", &viewport.video_box_style.to_css_text())?;
        self.controls
            .set_attribute("style", &viewport.controls_style.to_css_text())?;

        let controls = &viewport.controls;
        self.title
            .set_attribute("style", &format!("color: {};", controls.foreground))?;

        let button_style = format!(
            "color: {}; background-color: {};",
            controls.foreground, controls.button_background
        );
        for (button, enabled) in [
            (&self.zoom_out, controls.zoom_out_enabled),
            (&self.zoom_in, controls.zoom_in_enabled),
            (&self.fullscreen, true),
        ] {
            button.set_disabled(!enabled);
            button.set_attribute("style", &button_style)?;
        }

        self.fullscreen
            .set_text_content(Some(controls.fullscreen_icon.glyph()));
        self.fullscreen.set_attribute(
            "aria-label",
            if viewport.is_fullscreen {
                "exit fullscreen"
            } else {
                "fullscreen"
            },
        )?;

        Ok(())
    }
}

fn show_message(el: &Element, message: Option<&str>) -> Result<(), JsValue> {
    match message {
        Some(text) => {
            el.set_text_content(Some(text));
            el.remove_attribute("hidden")
        }
        None => {
            el.set_text_content(None);
            el.set_attribute("hidden", "")
        }
    }
}
