//! Expose the `text-transition` crate's functionality to WebAssembly.
//!
//! Structured results are returned as JSON strings.
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::{
    BuiltinTokenizer, FallbackMeasurer, IdGenerator, TextTransition, TransitionConfig,
};

pub mod dom_measurer;

pub use dom_measurer::DomMeasurer;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// Split `text` into tokens, returned as a JSON array.
///
/// # Errors
///
/// If serializing the tokens fails.
#[wasm_bindgen]
pub fn tokenize(text: &str, tokenizer: BuiltinTokenizer) -> Result<String, JsValue> {
    set_panic_hook();

    to_json(&(*tokenizer)(text, &mut IdGenerator::new()))
}

/// The edit script between two texts as a JSON array of operations.
///
/// # Errors
///
/// If serializing the operations fails.
#[wasm_bindgen(js_name = diffTokens)]
pub fn diff_tokens(old: &str, new: &str, tokenizer: BuiltinTokenizer) -> Result<String, JsValue> {
    set_panic_hook();

    let mut ids = IdGenerator::new();
    let old = (*tokenizer)(old, &mut ids);
    let new = (*tokenizer)(new, &mut ids);

    to_json(&crate::diff_tokens(&old, &new))
}

/// Plan a transition without a document to measure in, spacer widths are
/// estimated from their character count.
///
/// # Errors
///
/// If `duration_ms` is not a positive number or serializing the plan fails.
#[wasm_bindgen(js_name = planTransition)]
pub fn plan_transition(from: &str, to: &str, duration_ms: f64) -> Result<String, JsValue> {
    set_panic_hook();

    let config = TransitionConfig::default().with_duration_ms(duration_ms);
    config.validate().map_err(to_js_error)?;

    let mut ids = IdGenerator::new();
    let from = (*config.tokenizer)(from, &mut ids);
    let to = (*config.tokenizer)(to, &mut ids);

    to_json(&crate::plan_transition(
        &from,
        &to,
        &FallbackMeasurer,
        &config,
        &mut ids,
    ))
}

/// WASM wrapper around `TextTransition`, measuring widths in the DOM.
#[wasm_bindgen]
#[derive(Debug)]
pub struct TextTransitionHandle {
    inner: TextTransition<DomMeasurer>,
}

#[wasm_bindgen]
impl TextTransitionHandle {
    /// `texts_json` is a JSON array of the texts to cycle through.
    ///
    /// # Errors
    ///
    /// If the texts are not a JSON array of strings or the durations are
    /// invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(
        texts_json: &str,
        container: Option<HtmlElement>,
        duration_ms: f64,
        interval_ms: f64,
        tokenizer: BuiltinTokenizer,
        now_ms: f64,
    ) -> Result<TextTransitionHandle, JsValue> {
        set_panic_hook();

        let config = TransitionConfig {
            interval_ms,
            tokenizer,
            ..TransitionConfig::default().with_duration_ms(duration_ms)
        };

        Ok(Self {
            inner: TextTransition::from_texts(
                parse_texts(texts_json)?,
                config,
                DomMeasurer::new(container),
                now_ms,
            )
            .map_err(to_js_error)?,
        })
    }

    /// Returns the timeline of the started transition as JSON.
    ///
    /// # Errors
    ///
    /// If serializing the timeline fails.
    #[wasm_bindgen(js_name = transitionTo)]
    pub fn transition_to(&mut self, to: &str, now_ms: f64) -> Result<String, JsValue> {
        to_json(self.inner.transition_to(to, now_ms))
    }

    /// Returns the events that happened as a JSON array.
    ///
    /// # Errors
    ///
    /// If serializing the events fails.
    pub fn poll(&mut self, now_ms: f64) -> Result<String, JsValue> {
        to_json(&self.inner.poll(now_ms))
    }

    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self, now_ms: f64) { self.inner.on_resize(now_ms); }

    /// # Errors
    ///
    /// If the texts are not a JSON array of strings.
    #[wasm_bindgen(js_name = setTexts)]
    pub fn set_texts(&mut self, texts_json: &str, now_ms: f64) -> Result<(), JsValue> {
        self.inner.set_texts(parse_texts(texts_json)?, now_ms);
        Ok(())
    }

    /// The playing timeline as JSON, if any.
    ///
    /// # Errors
    ///
    /// If serializing the timeline fails.
    pub fn timeline(&self) -> Result<Option<String>, JsValue> {
        self.inner.timeline().map(to_json).transpose()
    }

    #[must_use]
    pub fn text(&self) -> String { self.inner.text().to_owned() }

    #[wasm_bindgen(js_name = targetText)]
    #[must_use]
    pub fn target_text(&self) -> String { self.inner.target_text().to_owned() }

    #[wasm_bindgen(js_name = isAnimating)]
    #[must_use]
    pub fn is_animating(&self) -> bool { self.inner.phase() == crate::Phase::Animating }

    #[wasm_bindgen(js_name = startedAt)]
    #[must_use]
    pub fn started_at(&self) -> Option<f64> { self.inner.started_at_ms() }

    #[wasm_bindgen(js_name = nextDeadline)]
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> { self.inner.next_deadline() }
}

fn parse_texts(texts_json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(texts_json)
        .map_err(|error| JsValue::from_str(&format!("Invalid texts: {error}")))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|error| JsValue::from_str(&format!("JSON serialization failed: {error}")))
}

fn to_js_error(error: crate::ConfigError) -> JsValue { JsValue::from_str(&error.to_string()) }

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
