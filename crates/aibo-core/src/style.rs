//! Aibo styling - inline style declarations and the widget stylesheet
//!
//! Inline styles are carried as ordered declaration lists so the WASM layer
//! can apply them to DOM nodes and the external player can receive them as
//! a plain JS object.
//!
//! # Usage
//!
//! ```rust
//! use aibo_core::style::{CssStyle, WidgetTheme};
//!
//! let style = CssStyle::new().with("position", "absolute").with("top", "0");
//! assert_eq!(style.to_css_text(), "position: absolute; top: 0;");
//!
//! let css = WidgetTheme::default().to_css();
//! assert!(css.contains("--aibo-primary"));
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered list of CSS declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyle {
    declarations: Vec<(&'static str, String)>,
}

impl CssStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a declaration
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Add or replace a declaration in place
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Look up a declaration value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as an inline `style` attribute value
    pub fn to_css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Style that stretches an element over its positioned parent
    pub fn fill_parent() -> Self {
        Self::new()
            .with("position", "absolute")
            .with("top", "0")
            .with("left", "0")
            .with("width", "100%")
            .with("height", "100%")
    }
}

impl Serialize for CssStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// Widget color palette
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ThemeColors {
    /// Primary accent used by the submit button
    pub primary: &'static str,
    /// Page background
    pub background: &'static str,
    /// Surface of the player card
    pub surface: &'static str,
    pub text: &'static str,
    /// Error color for the field message and banner
    pub error: &'static str,
    /// Soft red background of error alerts
    pub error_background: &'static str,
    /// Control bar background while fullscreen
    pub overlay: &'static str,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            background: "#ffffff",
            surface: "#ffffff",
            text: "rgba(0, 0, 0, 0.87)",
            error: "#d32f2f",
            error_background: "#fdeded",
            overlay: "rgba(0, 0, 0, 0.5)",
        }
    }
}

/// Complete widget theme
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WidgetTheme {
    pub colors: ThemeColors,
    /// Border radius for cards and buttons (px)
    pub border_radius: u8,
    /// Duration of zoom and layout transitions (seconds)
    pub transition_secs: f32,
}

impl Default for WidgetTheme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            border_radius: 4,
            transition_secs: 0.3,
        }
    }
}

impl WidgetTheme {
    /// Generate CSS custom properties for the theme
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        format!(
            r#":root {{
  --aibo-primary: {};
  --aibo-background: {};
  --aibo-surface: {};
  --aibo-text: {};
  --aibo-error: {};
  --aibo-error-background: {};
  --aibo-overlay: {};
  --aibo-radius: {}px;
  --aibo-transition: {}s ease;
}}"#,
            c.primary,
            c.background,
            c.surface,
            c.text,
            c.error,
            c.error_background,
            c.overlay,
            self.border_radius,
            self.transition_secs,
        )
    }

    /// Class-based rules for the widget markup
    pub fn widget_css() -> &'static str {
        r#"
.aibo {
  max-width: 1200px;
  margin: 0 auto;
  padding: 32px 16px;
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--aibo-text);
}

.aibo__heading {
  text-align: center;
  font-size: 3rem;
  font-weight: 400;
  margin: 0 0 0.35em;
}

.aibo__form {
  display: flex;
  gap: 16px;
  margin-bottom: 16px;
}

.aibo__input {
  flex: 1;
  padding: 16px 14px;
  font-size: 1rem;
  border: 1px solid rgba(0, 0, 0, 0.23);
  border-radius: var(--aibo-radius);
}

.aibo__input--error {
  border-color: var(--aibo-error);
}

.aibo__submit {
  min-width: 120px;
  background: var(--aibo-primary);
  color: #fff;
  border: none;
  border-radius: var(--aibo-radius);
  cursor: pointer;
}

.aibo__alert {
  padding: 6px 16px;
  margin-bottom: 16px;
  border-radius: var(--aibo-radius);
  color: var(--aibo-error);
  background: var(--aibo-error-background);
}

.aibo__container {
  background: var(--aibo-surface);
  box-shadow: 0 3px 6px rgba(0, 0, 0, 0.16);
  border-radius: var(--aibo-radius);
  transition: all var(--aibo-transition);
}

.aibo__video-box {
  transform-origin: center center;
  transition: transform var(--aibo-transition);
}

.aibo__title {
  font-size: 1.25rem;
  font-weight: 500;
  margin: 0;
}

.aibo__spacer {
  flex-grow: 1;
}

.aibo__button {
  border: none;
  border-radius: 50%;
  padding: 8px;
  margin: 0 4px;
  cursor: pointer;
  font-size: 28px;
  line-height: 1;
  transition: all var(--aibo-transition);
}

.aibo__button:disabled {
  cursor: default;
  opacity: 0.3;
}
"#
    }

    /// Generate a complete stylesheet
    pub fn to_css(&self) -> String {
        format!("{}\n{}", self.css_variables(), Self::widget_css())
    }
}
