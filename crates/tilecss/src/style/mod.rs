//! Layered background styles and their text form.
//!
//! Generators build a [`PatternStyle`]: a solid background color plus an
//! ordered stack of [`Layer`]s. Each layer owns its image, tile size and
//! position, so rendering always emits exactly one size and one position per
//! image:
//!
//! ```text
//! background-color: #1f2937;
//! background-image: <layer 1 image>, <layer 2 image>;
//! background-size: <layer 1 size>, <layer 2 size>;
//! background-position: <layer 1 position>, <layer 2 position>;
//! ```
//!
//! The first layer paints on top.
//!
//! ## Submodules
//!
//! - [`declarations`]: parse style text back into declarations
//! - [`encode`]: percent-encode generated SVG into a `url(...)` image

pub mod declarations;
pub mod encode;

/// Formats a number with at most two decimals and no trailing zeros.
///
/// ```
/// use tilecss::style::num;
///
/// assert_eq!(num(2.0), "2");
/// assert_eq!(num(2.5), "2.5");
/// assert_eq!(num(69.282032), "69.28");
/// assert_eq!(num(-0.001), "0");
/// ```
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Also folds -0.0.
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// A pixel length; zero is written unitless.
pub fn px(value: f64) -> String {
    let n = num(value);
    if n == "0" { n } else { format!("{n}px") }
}

pub fn pct(value: f64) -> String {
    format!("{}%", num(value))
}

pub fn deg(value: f64) -> String {
    format!("{}deg", num(value))
}

/// One background layer: an image with its tile size and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub image: String,
    pub size: String,
    pub position: String,
}

impl Layer {
    /// A layer tiled at `width` x `height` pixels, anchored at `0 0`.
    pub fn tiled(image: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            image: image.into(),
            size: format!("{} {}", px(width), px(height)),
            position: "0 0".to_string(),
        }
    }

    /// A layer whose image repeats on its own (repeating gradients).
    pub fn repeating(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            size: "auto".to_string(),
            position: "0 0".to_string(),
        }
    }

    /// A single image stretched over the whole box.
    pub fn cover(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            size: "100% 100%".to_string(),
            position: "center".to_string(),
        }
    }

    /// Moves the layer's anchor to (`x`, `y`) pixels.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = format!("{} {}", px(x), px(y));
        self
    }
}

/// A complete generated background: solid color plus layers.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternStyle {
    background: String,
    layers: Vec<Layer>,
}

impl PatternStyle {
    /// An empty style over `background`, which goes through
    /// [`css_color`](crate::color::css_color).
    pub fn new(background: &str) -> Self {
        Self {
            background: crate::color::css_color(background).into_owned(),
            layers: Vec::new(),
        }
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Renders the declarations, one per line.
    pub fn render(&self) -> String {
        let mut out = format!("background-color: {};", self.background);
        if self.layers.is_empty() {
            return out;
        }

        let join = |part: fn(&Layer) -> &str| {
            self.layers.iter().map(part).collect::<Vec<_>>().join(", ")
        };
        out.push_str(&format!("\nbackground-image: {};", join(|l| l.image.as_str())));
        out.push_str(&format!("\nbackground-size: {};", join(|l| l.size.as_str())));
        out.push_str(&format!("\nbackground-position: {};", join(|l| l.position.as_str())));
        out
    }
}
