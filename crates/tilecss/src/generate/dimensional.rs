//! Shaded figures that read as three-dimensional.
//!
//! Each generator derives its face shades from the pattern color:
//! `lighting` is the lightness shift, in percent, between the lit and the
//! shaded faces.

use super::{foreground, opacity, positive, stroke, tile_size};
use crate::PatternError;
use crate::color::{adjust_lightness, with_alpha};
use crate::settings::PatternSettings;
use crate::style::{Layer, PatternStyle, pct};

/// Height of one cube row relative to the tile width.
const CUBE_ROW: f64 = 1.75;

fn shade(settings: &PatternSettings, percent: f64) -> String {
    with_alpha(
        &adjust_lightness(&settings.pattern_color, percent),
        opacity(settings),
    )
}

/// Triangular lattice of 30/150 degree lines; rows are `s * sqrt(3)` high.
pub fn isometric(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let h = positive(s * 3f64.sqrt(), "row height")?;
    let lw = stroke(settings.line_width, s);
    let fg = foreground(settings);

    // Edge thickness as a percentage of the gradient line.
    let e = (lw / s * 50.0).clamp(0.5, 25.0);
    let edge = |angle: u32| {
        format!(
            "linear-gradient({angle}deg, {fg} {}, transparent {}, transparent {}, {fg} {}, {fg})",
            pct(e),
            pct(e + 0.5),
            pct(100.0 - e - 0.5),
            pct(100.0 - e)
        )
    };

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(edge(30), s, h))
        .with_layer(Layer::tiled(edge(150), s, h))
        .with_layer(Layer::tiled(edge(30), s, h).at(s / 2.0, h / 2.0))
        .with_layer(Layer::tiled(edge(150), s, h).at(s / 2.0, h / 2.0)))
}

pub fn cubes(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let h = positive(s * CUBE_ROW, "row height")?;
    let lighting = settings.lighting as f64;
    let dark = shade(settings, -lighting);
    let light = shade(settings, lighting);

    let edge = |angle: u32| {
        format!(
            "linear-gradient({angle}deg, {dark} 12%, transparent 12.5%, transparent 87%, {dark} 87.5%, {dark})"
        )
    };
    let face =
        format!("linear-gradient(60deg, {light} 25%, transparent 25.5%, transparent 75%, {light} 75%, {light})");

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(edge(30), s, h))
        .with_layer(Layer::tiled(edge(150), s, h))
        .with_layer(Layer::tiled(edge(30), s, h).at(s / 2.0, h / 2.0))
        .with_layer(Layer::tiled(edge(150), s, h).at(s / 2.0, h / 2.0))
        .with_layer(Layer::tiled(&face, s, h))
        .with_layer(Layer::tiled(face, s, h).at(s / 2.0, h / 2.0)))
}

/// A staircase: lit treads shifted right by `depth`, risers in the pattern
/// color.
pub fn steps(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let h = positive(s * 3.0, "tile height")?;
    let depth = (settings.depth as f64).clamp(1.0, s / 2.0);
    let tread = shade(settings, settings.lighting as f64);
    let riser = foreground(settings);

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(
            Layer::tiled(format!("linear-gradient(63deg, {tread} 23%, transparent 23%)"), s, h)
                .at(depth, 0.0),
        )
        .with_layer(Layer::tiled(
            format!("linear-gradient(63deg, transparent 74%, {riser} 78%)"),
            s,
            h,
        ))
        .with_layer(Layer::tiled(
            format!("linear-gradient(63deg, transparent 34%, {riser} 38%, {riser} 58%, transparent 62%)"),
            s,
            h,
        )))
}

/// Square pyramids seen from above: four faces lit from the top.
pub fn pyramids(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lighting = settings.lighting as f64;

    let image = format!(
        "conic-gradient(from -45deg, {top} 0% 25%, {right} 25% 50%, {bottom} 50% 75%, {left} 75% 100%)",
        top = shade(settings, lighting),
        right = foreground(settings),
        bottom = shade(settings, -lighting),
        left = shade(settings, -lighting / 2.0),
    );
    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::tiled(image, s, s)))
}
