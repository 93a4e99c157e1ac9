/// Something that can tell how wide a piece of text renders, in pixels.
///
/// Returning `None` means the measurement is unavailable (e.g. there is no
/// document to render into), in which case a per-character estimate is used.
///
/// Closures implement the trait, which is handy for tests:
///
/// ```
/// use text_transition::TextMeasurer;
///
/// let measurer = |text: &str| Some(text.len() as f64 * 8.0);
/// assert_eq!(measurer.measure("abc"), Some(24.0));
/// ```
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Option<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn measure(&self, text: &str) -> Option<f64> { self(text) }
}

/// Every character is `char_width` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub char_width: f64,
}

impl MonospaceMeasurer {
    #[must_use]
    pub fn new(char_width: f64) -> Self { Self { char_width } }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> Option<f64> {
        Some(text.chars().count() as f64 * self.char_width)
    }
}

/// Never measures anything, for environments without a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackMeasurer;

impl TextMeasurer for FallbackMeasurer {
    fn measure(&self, _text: &str) -> Option<f64> { None }
}

/// Width of `text`, falling back to `chars × fallback_char_width` when the
/// measurer gives up or returns garbage. Never negative, 0 for empty text.
pub fn measure_width<M>(measurer: &M, text: &str, fallback_char_width: f64) -> f64
where
    M: TextMeasurer + ?Sized,
{
    if text.is_empty() {
        return 0.0;
    }

    measurer
        .measure(text)
        .filter(|width| width.is_finite())
        .unwrap_or_else(|| text.chars().count() as f64 * fallback_char_width)
        .max(0.0)
}
