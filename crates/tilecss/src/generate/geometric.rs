//! Tessellations and radial figures.

use std::f64::consts::FRAC_1_SQRT_2;

use super::{accent, foreground, opacity, positive, quadrant_conic, rotation, stroke, tile_size};
use crate::PatternError;
use crate::color::{adjust_lightness, with_alpha};
use crate::settings::PatternSettings;
use crate::style::{Layer, PatternStyle, deg, px};

/// Rays at density 0; density 100 adds [`MAX_EXTRA_RAYS`].
const MIN_RAYS: u32 = 4;
const MAX_EXTRA_RAYS: u32 = 32;

/// The pattern color shifted by `percent`, at the configured opacity.
fn shaded(settings: &PatternSettings, percent: f64) -> String {
    with_alpha(
        &adjust_lightness(&settings.pattern_color, percent),
        opacity(settings),
    )
}

pub fn diamonds(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);

    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::tiled(
        quadrant_conic(45.0, &foreground(settings), "transparent"),
        s,
        s,
    )))
}

/// Diamonds overlaid with two diagonal stitch lines in the secondary color.
/// The stitch period is the tile diagonal halved, so stitches meet the
/// diamond corners.
pub fn argyle(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let period = positive(s * FRAC_1_SQRT_2, "stitch period")?;
    let lw = stroke(settings.line_width, s).min(period / 2.0);
    let stitch_color = accent(settings);

    let stitch = |angle: f64| {
        format!(
            "repeating-linear-gradient({}, {stitch_color} 0 {w}, transparent {w} {p})",
            deg(angle),
            w = px(lw),
            p = px(period)
        )
    };

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(stitch(45.0), s, s))
        .with_layer(Layer::tiled(stitch(135.0), s, s))
        .with_layer(Layer::tiled(
            quadrant_conic(45.0, &foreground(settings), "transparent"),
            s,
            s,
        )))
}

pub fn triangles(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let half = positive(s / 2.0, "half tile")?;

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(
            format!("linear-gradient(to top right, {} 50%, transparent 50%)", foreground(settings)),
            s,
            s,
        ))
        .with_layer(
            Layer::tiled(
                format!("linear-gradient(to bottom left, {} 50%, transparent 50%)", accent(settings)),
                half,
                half,
            )
            .at(half, 0.0),
        ))
}

/// Hexagon lattice on an `s` x `1.5s` tile. Cell edges use the pattern color
/// darkened by `lighting` percent.
pub fn honeycomb(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let h = positive(s * 1.5, "row height")?;
    let fill = foreground(settings);
    let edge = shaded(settings, -(settings.lighting as f64));

    let side = |angle: u32| {
        format!(
            "linear-gradient({angle}deg, transparent 24%, {edge} 0, {edge} 26%, transparent 0, \
             transparent 74%, {edge} 0, {edge} 76%, transparent 0)"
        )
    };

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(
            Layer::tiled(
                format!("radial-gradient(circle farthest-side at 0% 50%, {fill} 23.5%, transparent 0)"),
                s,
                h,
            )
            .at(s * 0.525, h / 2.0),
        )
        .with_layer(
            Layer::tiled(
                format!("radial-gradient(circle farthest-side at 0% 50%, {edge} 24%, transparent 0)"),
                s,
                h,
            )
            .at(s * 0.475, h / 2.0),
        )
        .with_layer(Layer::tiled(
            format!("linear-gradient({fill} 14%, transparent 0, transparent 85%, {fill} 0)"),
            s,
            h,
        ))
        .with_layer(Layer::tiled(side(150), s, h))
        .with_layer(Layer::tiled(side(30), s, h))
        .with_layer(Layer::tiled(
            format!("linear-gradient(90deg, {edge} 2%, {fill} 0, {fill} 98%, {edge} 0%)"),
            s,
            h,
        )))
}

/// Overlapping half rings anchored at the bottom edge, every other row
/// shifted by half a tile.
pub fn scales(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let outer = positive(s / 2.0, "scale radius")?;
    let lw = stroke(settings.line_width, s).min(outer - 0.5);
    let inner = outer - lw;

    let ring = format!(
        "radial-gradient(circle at 50% 100%, transparent {i}, {fg} {i} {o}, transparent {o})",
        fg = foreground(settings),
        i = px(inner),
        o = px(outer)
    );

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(&ring, s, outer))
        .with_layer(Layer::tiled(ring, s, outer).at(outer, outer / 2.0)))
}

pub fn circles(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let gap = (settings.spacing as f64).max(1.0);

    let image = format!(
        "repeating-radial-gradient(circle at center, {fg} 0 {w}, transparent {w} {p})",
        fg = foreground(settings),
        w = px(lw),
        p = px(lw + gap)
    );
    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::tiled(image, s, s)))
}

fn ray_count(density: u32) -> u32 {
    MIN_RAYS + density.min(100) * MAX_EXTRA_RAYS / 100
}

/// Alternating rays from the center. Density sets the ray count.
pub fn sunburst(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let arc = positive(360.0 / ray_count(settings.density) as f64, "ray arc")?;
    let half = arc / 2.0;

    let image = format!(
        "repeating-conic-gradient(from {} at 50% 50%, {} 0deg {}, transparent {} {})",
        deg(rotation(settings)),
        foreground(settings),
        deg(half),
        deg(half),
        deg(arc)
    );
    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::cover(image)))
}

/// Zig-zag planks on an `s` x `2s` tile; the second layer runs the other way
/// and is shifted down one tile.
pub fn herringbone(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let h = positive(s * 2.0, "tile height")?;
    let plank = accent(settings);
    let seam = foreground(settings);
    let at = |sixty_fourths: f64| px(s * sixty_fourths / 64.0);

    let board = |angle: f64| {
        format!(
            "linear-gradient({}, transparent {a}, {seam} {a} {b}, {plank} {b} {c}, {seam} {c} {d}, transparent {d})",
            deg(angle),
            a = at(22.0),
            b = at(24.0),
            c = at(67.0),
            d = at(69.0)
        )
    };

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(board(135.0), s, h))
        .with_layer(Layer::tiled(board(225.0), s, h).at(0.0, s)))
}

/// Running bond brickwork: four offset half-bricks per tile, alternating a
/// base and a lighter shade.
pub fn bricks(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let unit = s / 58.0;
    let length = px(unit * 23.0);
    let dark = foreground(settings);
    let light = shaded(settings, settings.lighting as f64);

    let brick = |angle: f64, color: &str| {
        format!("linear-gradient({}, {color} {length}, transparent {length})", deg(angle))
    };

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(brick(335.0, &dark), s, s).at(0.0, unit * 2.0))
        .with_layer(Layer::tiled(brick(155.0, &light), s, s).at(unit * 4.0, unit * 35.0))
        .with_layer(Layer::tiled(brick(335.0, &dark), s, s).at(unit * 29.0, unit * 31.0))
        .with_layer(Layer::tiled(brick(155.0, &light), s, s).at(unit * 34.0, unit * 6.0)))
}
