use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::TextMeasurer;

/// Measures text by rendering it into an invisible `span` that copies the
/// font of `container`, then reading its `offsetWidth`.
///
/// Gives up (falling back to an estimate) whenever there is no document, e.g.
/// during server-side rendering.
#[derive(Debug, Clone, Default)]
pub struct DomMeasurer {
    container: Option<HtmlElement>,
}

const COPIED_PROPERTIES: [&str; 3] = ["font", "letter-spacing", "word-spacing"];

const HIDDEN_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("visibility", "hidden"),
    ("white-space", "pre"),
    ("left", "-9999px"),
    ("top", "-9999px"),
];

impl DomMeasurer {
    #[must_use]
    pub fn new(container: Option<HtmlElement>) -> Self { Self { container } }
}

impl TextMeasurer for DomMeasurer {
    fn measure(&self, text: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;

        let span: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
        let style = span.style();
        for (property, value) in HIDDEN_STYLE {
            style.set_property(property, value).ok()?;
        }

        if let Some(container) = &self.container {
            let computed = window.get_computed_style(container).ok()??;
            for property in COPIED_PROPERTIES {
                let value = computed.get_property_value(property).ok()?;
                style.set_property(property, &value).ok()?;
            }
        }

        span.set_text_content(Some(text));
        body.append_child(&span).ok()?;
        let width = span.offset_width();
        span.remove();

        Some(f64::from(width))
    }
}
