//! Dots, grids and checks.

use super::{accent, foreground, opacity, positive, quadrant_conic, stroke, tile_size};
use crate::PatternError;
use crate::color::with_alpha;
use crate::settings::PatternSettings;
use crate::style::{Layer, PatternStyle, px};

fn dot(color: &str, radius: f64) -> String {
    format!(
        "radial-gradient(circle at center, {color} {}, transparent {})",
        px(radius),
        px(radius + 0.5)
    )
}

fn line(side: &str, color: &str, width: f64) -> String {
    format!("linear-gradient(to {side}, {color} {w}, transparent {w})", w = px(width))
}

/// Pushes a vertical and a horizontal line layer tiled at `tile`.
fn lines(style: &mut PatternStyle, color: &str, width: f64, tile: f64) {
    style.push(Layer::tiled(line("right", color, width), tile, tile));
    style.push(Layer::tiled(line("bottom", color, width), tile, tile));
}

pub fn dots(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let radius = positive(stroke(settings.dot_size, s) / 2.0, "dot radius")?;
    let image = dot(&foreground(settings), radius);

    let mut style =
        PatternStyle::new(&settings.background_color).with_layer(Layer::tiled(&image, s, s));
    if settings.stagger {
        style.push(Layer::tiled(image, s, s).at(s / 2.0, s / 2.0));
    }
    Ok(style)
}

pub fn polka(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let radius = positive(stroke(settings.dot_size, s) / 2.0, "dot radius")?;

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(dot(&foreground(settings), radius), s, s))
        .with_layer(Layer::tiled(dot(&accent(settings), radius), s, s).at(s / 2.0, s / 2.0)))
}

pub fn grid(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);

    let mut style = PatternStyle::new(&settings.background_color);
    lines(&mut style, &foreground(settings), lw, s);
    Ok(style)
}

/// Major lines every tile, minor lines every quarter tile. Higher contrast
/// fades the minor lines further.
pub fn graph_paper(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let minor_tile = positive(s / 4.0, "minor tile")?;
    let minor_width = (lw / 2.0).max(1.0);

    let fade = 1.0 - (settings.contrast.min(100) as f64) / 100.0;
    let minor_alpha = (opacity(settings) * fade).clamp(0.1, 0.9);
    let minor = with_alpha(&settings.pattern_color, minor_alpha);

    let mut style = PatternStyle::new(&settings.background_color);
    lines(&mut style, &foreground(settings), lw, s);
    lines(&mut style, &minor, minor_width, minor_tile);
    Ok(style)
}

pub fn blueprint(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let minor_tile = positive(s / 5.0, "minor tile")?;
    let minor = with_alpha(&settings.secondary_color, opacity(settings) * 0.5);

    let mut style = PatternStyle::new(&settings.background_color);
    lines(&mut style, &foreground(settings), lw, s);
    lines(&mut style, &minor, 1.0, minor_tile);
    Ok(style)
}

pub fn checkerboard(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);

    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::tiled(
        quadrant_conic(0.0, &foreground(settings), &accent(settings)),
        s,
        s,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(id: &str) -> PatternSettings {
        PatternSettings {
            pattern_type: id.into(),
            ..PatternSettings::default()
        }
    }

    #[test]
    fn test_dots_default_scenario() {
        let settings = PatternSettings {
            pattern_size: 32,
            dot_size: 4,
            opacity: 0.8,
            ..base("dots")
        };
        insta::assert_snapshot!(dots(&settings).unwrap().render(), @r"
        background-color: #1f2937;
        background-image: radial-gradient(circle at center, #3b82f6cc 2px, transparent 2.5px);
        background-size: 32px 32px;
        background-position: 0 0;
        ");
    }

    #[test]
    fn test_dots_stagger_adds_offset_layer() {
        let settings = PatternSettings { stagger: true, ..base("dots") };
        let style = dots(&settings).unwrap();
        assert_eq!(style.layers().len(), 2);
        assert_eq!(style.layers()[1].position, "16px 16px");
    }

    #[test]
    fn test_polka_uses_secondary_color() {
        let style = polka(&base("polka")).unwrap();
        assert!(style.layers()[1].image.contains("#f59e0b"));
    }

    #[test]
    fn test_grid_line_width_never_zero() {
        let settings = PatternSettings { line_width: 0, ..base("grid") };
        let style = grid(&settings).unwrap();
        assert!(style.layers()[0].image.contains("1px"));
    }

    #[test]
    fn test_graph_paper_minor_lines() {
        let settings = PatternSettings {
            pattern_size: 80,
            line_width: 2,
            contrast: 60,
            ..base("graph-paper")
        };
        let style = graph_paper(&settings).unwrap();
        assert_eq!(style.layers().len(), 4);
        assert_eq!(style.layers()[2].size, "20px 20px");
        // opacity 1.0 * (1 - 0.6) = 0.4 -> 0x66
        assert!(style.layers()[2].image.contains("#3b82f666"));
    }

    #[test]
    fn test_blueprint_minor_grid() {
        let settings = PatternSettings { pattern_size: 100, ..base("blueprint") };
        let style = blueprint(&settings).unwrap();
        assert_eq!(style.layers()[3].size, "20px 20px");
        assert!(style.layers()[3].image.contains("#f59e0b80"));
    }

    #[test]
    fn test_checkerboard_quadrants() {
        let style = checkerboard(&base("checkerboard")).unwrap();
        assert_eq!(
            style.layers()[0].image,
            "conic-gradient(from 0deg, #3b82f6 0% 25%, #f59e0b 25% 50%, #3b82f6 50% 75%, #f59e0b 75% 100%)"
        );
    }
}
