//! Inline SVG placeholder images.
//!
//! Placeholders stand in for photography so the page never loads images from
//! another origin. Output is a `data:` URI that can be used directly as an
//! `img` source.

use base64::Engine as _;
use maud::html;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Default background fill
pub const DEFAULT_BACKGROUND: &str = "#e2e8f0";
/// Default label colour
pub const DEFAULT_FOREGROUND: &str = "#475569";

/// Label font size is the smaller image dimension divided by this.
pub const FONT_DIVISOR: u32 = 8;

const FONT_FAMILY: &str = "system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

/// How the SVG document is packed into the data URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Percent-encode every non-alphanumeric byte
    #[default]
    Percent,
    Base64,
}

/// A labelled placeholder image.
///
/// ```
/// use carepage::placeholder::Placeholder;
///
/// let uri = Placeholder::new("Hero", 1400, 900).background("#7133a0").to_data_uri();
/// assert!(uri.starts_with("data:image/svg+xml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    label: String,
    width: u32,
    height: u32,
    background: String,
    foreground: String,
    encoding: Encoding,
}

impl Placeholder {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            encoding: Encoding::default(),
        }
    }

    pub fn background(mut self, colour: impl Into<String>) -> Self {
        self.background = colour.into();
        self
    }

    pub fn foreground(mut self, colour: impl Into<String>) -> Self {
        self.foreground = colour.into();
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn font_size(&self) -> u32 {
        (self.width.min(self.height) / FONT_DIVISOR).max(1)
    }

    /// The SVG document. The label and colours are XML-escaped.
    pub fn to_svg(&self) -> String {
        let view_box = format!("0 0 {} {}", self.width, self.height);
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width=(self.width) height=(self.height) viewBox=(view_box) {
                rect width="100%" height="100%" fill=(self.background) {}
                text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle"
                    font-family=(FONT_FAMILY) font-size=(self.font_size()) fill=(self.foreground) {
                    (self.label)
                }
            }
        }
        .into_string()
    }

    pub fn to_data_uri(&self) -> String {
        let svg = self.to_svg();
        match self.encoding {
            Encoding::Percent => format!(
                "data:image/svg+xml;charset=utf-8,{}",
                utf8_percent_encode(&svg, NON_ALPHANUMERIC)
            ),
            Encoding::Base64 => format!(
                "data:image/svg+xml;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
            ),
        }
    }
}

/// Placeholder with the default colours, percent-encoded.
pub fn placeholder_data_uri(label: &str, width: u32, height: u32) -> String {
    Placeholder::new(label, width, height).to_data_uri()
}
