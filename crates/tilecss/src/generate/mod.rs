//! Generator dispatch.
//!
//! [`generate`] resolves `settings.pattern_type` against the registry, looks up
//! the generator bound to that id in [`GENERATORS`] and renders its
//! [`PatternStyle`]. It is total: unknown ids, unbound descriptors, generator
//! errors and generator panics all end up as fallback text of the form
//!
//! ```text
//! /* tilecss-error: <message> */
//! background-color: <background_color>;
//! ```
//!
//! Callers that need to know whether the fallback was used can call
//! [`generate_checked`]; [`try_generate`] hands back the raw error instead.
//!
//! ## Generator families
//!
//! - [`basic`]: dots, polka, grid, graph paper, blueprint, checkerboard
//! - [`lines`]: stripes, pinstripes, zigzags and waves
//! - [`geometric`]: diamonds, argyle, hexagons, scales, bricks, ...
//! - [`dimensional`]: isometric, cubes, steps, pyramids
//! - [`textures`]: noise, carbon fibre, plaid, weave

pub mod basic;
pub mod dimensional;
pub mod geometric;
pub mod lines;
pub mod textures;

use std::panic::{self, AssertUnwindSafe};

use phf::phf_map;

use crate::PatternError;
use crate::clamp::clamp_opacity;
use crate::color::{css_color, with_alpha};
use crate::registry;
use crate::settings::PatternSettings;
use crate::style::PatternStyle;

/// Signature shared by every generator.
pub type GeneratorFn = fn(&PatternSettings) -> Result<PatternStyle, PatternError>;

/// Smallest tile edge any generator works with, in pixels.
pub const MIN_TILE: f64 = 4.0;

/// Pattern id to generator.
pub static GENERATORS: phf::Map<&'static str, GeneratorFn> = phf_map! {
    // Basic
    "dots" => basic::dots as GeneratorFn,
    "polka" => basic::polka as GeneratorFn,
    "grid" => basic::grid as GeneratorFn,
    "graph-paper" => basic::graph_paper as GeneratorFn,
    "blueprint" => basic::blueprint as GeneratorFn,
    "checkerboard" => basic::checkerboard as GeneratorFn,
    // Lines & waves
    "stripes" => lines::stripes as GeneratorFn,
    "diagonal-stripes" => lines::diagonal_stripes as GeneratorFn,
    "crosshatch" => lines::crosshatch as GeneratorFn,
    "pinstripe" => lines::pinstripe as GeneratorFn,
    "zigzag" => lines::zigzag as GeneratorFn,
    "chevron" => lines::chevron as GeneratorFn,
    "waves" => lines::waves as GeneratorFn,
    // Geometric
    "diamonds" => geometric::diamonds as GeneratorFn,
    "argyle" => geometric::argyle as GeneratorFn,
    "triangles" => geometric::triangles as GeneratorFn,
    "honeycomb" => geometric::honeycomb as GeneratorFn,
    "scales" => geometric::scales as GeneratorFn,
    "circles" => geometric::circles as GeneratorFn,
    "sunburst" => geometric::sunburst as GeneratorFn,
    "herringbone" => geometric::herringbone as GeneratorFn,
    "bricks" => geometric::bricks as GeneratorFn,
    // 3D
    "isometric" => dimensional::isometric as GeneratorFn,
    "cubes" => dimensional::cubes as GeneratorFn,
    "steps" => dimensional::steps as GeneratorFn,
    "pyramids" => dimensional::pyramids as GeneratorFn,
    // Textures
    "noise" => textures::noise as GeneratorFn,
    "carbon" => textures::carbon as GeneratorFn,
    "plaid" => textures::plaid as GeneratorFn,
    "weave" => textures::weave as GeneratorFn,
};

/// Output of [`generate_checked`].
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Style text; the fallback text when `error` is set.
    pub css: String,
    pub error: Option<PatternError>,
}

impl Generated {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Produces style text for `settings`. Never fails.
pub fn generate(settings: &PatternSettings) -> String {
    generate_checked(settings).css
}

/// Like [`generate`], but also reports whether the fallback was used.
pub fn generate_checked(settings: &PatternSettings) -> Generated {
    match try_generate(settings) {
        Ok(css) => Generated { css, error: None },
        Err(err) => {
            if err.is_registry_error() {
                log::error!(target: "tilecss::registry", "{err}");
            } else {
                log::error!(target: "tilecss::generate", "{err}");
            }
            Generated {
                css: fallback_css(&err, &settings.background_color),
                error: Some(err),
            }
        }
    }
}

/// Runs the bound generator and returns its text, or the error that
/// [`generate`] would have turned into fallback text.
pub fn try_generate(settings: &PatternSettings) -> Result<String, PatternError> {
    let id = settings.pattern_type.as_str();
    let descriptor =
        registry::find(id).ok_or_else(|| PatternError::UnknownPattern(id.to_string()))?;
    let generator = GENERATORS
        .get(descriptor.id)
        .ok_or_else(|| PatternError::MissingGenerator(descriptor.id.to_string()))?;

    run_guarded(descriptor.id, *generator, settings).map(|style| style.render())
}

/// Invokes `generator`, turning both errors and panics into
/// [`PatternError::Generator`].
fn run_guarded(
    id: &str,
    generator: GeneratorFn,
    settings: &PatternSettings,
) -> Result<PatternStyle, PatternError> {
    let wrap = |message: String| PatternError::Generator {
        id: id.to_string(),
        message,
    };

    match panic::catch_unwind(AssertUnwindSafe(|| generator(settings))) {
        Ok(Ok(style)) => Ok(style),
        Ok(Err(err)) => Err(wrap(err.to_string())),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "generator panicked".to_string());
            Err(wrap(message))
        }
    }
}

fn fallback_css(err: &PatternError, background: &str) -> String {
    let message = err.to_string().replace("*/", "* /");
    format!(
        "/* tilecss-error: {message} */\nbackground-color: {};",
        css_color(background)
    )
}

// Helpers shared by the generator families.

/// The tile edge: `pattern_size`, but never below [`MIN_TILE`].
pub(crate) fn tile_size(settings: &PatternSettings) -> f64 {
    (settings.pattern_size as f64).max(MIN_TILE)
}

/// Opacity in `0.0..=1.0`; NaN reads as opaque.
pub(crate) fn opacity(settings: &PatternSettings) -> f64 {
    clamp_opacity(settings.opacity)
}

/// The pattern color at the configured opacity.
pub(crate) fn foreground(settings: &PatternSettings) -> String {
    with_alpha(&settings.pattern_color, opacity(settings))
}

/// The secondary color at the configured opacity.
pub(crate) fn accent(settings: &PatternSettings) -> String {
    with_alpha(&settings.secondary_color, opacity(settings))
}

/// A stroke width clamped to `[1, tile]`.
pub(crate) fn stroke(width: u32, tile: f64) -> f64 {
    (width as f64).clamp(1.0, tile.max(1.0))
}

/// Rotation in degrees, reduced to `0..360`.
pub(crate) fn rotation(settings: &PatternSettings) -> f64 {
    (settings.rotation % 360) as f64
}

/// Rejects NaN, infinite, zero and negative lengths.
pub(crate) fn positive(value: f64, what: &'static str) -> Result<f64, PatternError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PatternError::InvalidGeometry { what, value })
    }
}

/// Four conic quadrants alternating `a`/`b` at fixed quarter boundaries.
pub(crate) fn quadrant_conic(from: f64, a: &str, b: &str) -> String {
    format!(
        "conic-gradient(from {}, {a} 0% 25%, {b} 25% 50%, {a} 50% 75%, {b} 75% 100%)",
        crate::style::deg(from)
    )
}
