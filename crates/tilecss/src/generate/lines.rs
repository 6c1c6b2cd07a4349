//! Stripes, zigzags and waves.

use std::fmt::Write as _;

use super::{foreground, opacity, positive, rotation, stroke, tile_size};
use crate::PatternError;
use crate::color::css_color;
use crate::settings::PatternSettings;
use crate::style::encode::svg_data_uri;
use crate::style::{Layer, PatternStyle, deg, num, px};

/// Upper bound on wave periods per tile.
const MAX_WAVE_PERIODS: u32 = 8;

fn stripe(angle: f64, color: &str, width: f64, period: f64) -> String {
    format!(
        "repeating-linear-gradient({}, {color} 0 {w}, transparent {w} {p})",
        deg(angle),
        w = px(width),
        p = px(period)
    )
}

pub fn stripes(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let angle = settings.direction.gradient_angle();

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::repeating(stripe(angle, &foreground(settings), lw, s))))
}

pub fn diagonal_stripes(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let angle = (45.0 + rotation(settings)) % 360.0;

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::repeating(stripe(angle, &foreground(settings), lw, s))))
}

pub fn crosshatch(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let fg = foreground(settings);
    let rot = rotation(settings);

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::repeating(stripe((45.0 + rot) % 360.0, &fg, lw, s)))
        .with_layer(Layer::repeating(stripe((135.0 + rot) % 360.0, &fg, lw, s))))
}

/// Two lines of width `lw` separated by `spacing`, repeating every
/// `max(s, 2 * lw + spacing)`.
pub fn pinstripe(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let gap = settings.spacing as f64;
    let pair = 2.0 * lw + gap;
    let period = s.max(pair);
    let fg = foreground(settings);

    let image = format!(
        "repeating-linear-gradient({}, {fg} 0 {a}, transparent {a} {b}, {fg} {b} {c}, transparent {c} {p})",
        deg(settings.direction.gradient_angle()),
        a = px(lw),
        b = px(lw + gap),
        c = px(pair),
        p = px(period)
    );
    Ok(PatternStyle::new(&settings.background_color).with_layer(Layer::repeating(image)))
}

/// Four 25% corner triangles. The first two are shifted right by `offset`.
fn zigzag_layers(style: &mut PatternStyle, fg: &str, s: f64, offset: f64) {
    let corner = |angle: f64| format!("linear-gradient({}, {fg} 25%, transparent 25%)", deg(angle));

    style.push(Layer::tiled(corner(135.0), s, s).at(offset, 0.0));
    style.push(Layer::tiled(corner(225.0), s, s).at(offset, 0.0));
    style.push(Layer::tiled(corner(315.0), s, s));
    style.push(Layer::tiled(corner(45.0), s, s));
}

pub fn zigzag(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);

    let mut style = PatternStyle::new(&settings.background_color);
    zigzag_layers(&mut style, &foreground(settings), s, s / 2.0);
    Ok(style)
}

/// Zigzag whose half-row shift follows the amplitude: larger amplitudes give
/// sharper chevrons.
pub fn chevron(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let amplitude = (settings.amplitude as f64).clamp(1.0, s / 2.0);

    let mut style = PatternStyle::new(&settings.background_color);
    zigzag_layers(&mut style, &foreground(settings), s, s - amplitude);
    Ok(style)
}

/// A stroked quadratic wave, `frequency` periods across one tile.
pub fn waves(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let lw = stroke(settings.line_width, s);
    let periods = settings.frequency.clamp(1, MAX_WAVE_PERIODS);
    let segment = positive(s / (2 * periods) as f64, "wave segment")?;
    let amplitude = (settings.amplitude as f64).clamp(1.0, s / 2.0);
    let mid = s / 2.0;

    // The control point sits at twice the amplitude so the curve peaks at it.
    let mut path = format!(
        "M0 {} Q{} {} {} {}",
        num(mid),
        num(segment / 2.0),
        num(mid - 2.0 * amplitude),
        num(segment),
        num(mid)
    );
    for i in 2..=2 * periods {
        let _ = write!(path, " T{} {}", num(segment * i as f64), num(mid));
    }

    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{w}'>\
         <path d='{path}' fill='none' stroke='{color}' stroke-opacity='{alpha}' \
         stroke-width='{lw}' stroke-linecap='round'/></svg>",
        w = num(s),
        color = css_color(&settings.pattern_color),
        alpha = num(opacity(settings)),
        lw = num(lw),
    );

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(svg_data_uri(&svg), s, s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Direction;

    fn base(id: &str) -> PatternSettings {
        PatternSettings {
            pattern_type: id.into(),
            ..PatternSettings::default()
        }
    }

    #[test]
    fn test_stripes_follow_direction() {
        let settings = PatternSettings {
            pattern_size: 24,
            line_width: 8,
            direction: Direction::Vertical,
            ..base("stripes")
        };
        let style = stripes(&settings).unwrap();
        assert_eq!(
            style.layers()[0].image,
            "repeating-linear-gradient(90deg, #3b82f6 0 8px, transparent 8px 24px)"
        );
        assert_eq!(style.layers()[0].size, "auto");
    }

    #[test]
    fn test_diagonal_rotation_wraps() {
        let settings = PatternSettings { rotation: 330, ..base("diagonal-stripes") };
        let style = diagonal_stripes(&settings).unwrap();
        assert!(style.layers()[0].image.starts_with("repeating-linear-gradient(15deg,"));
    }

    #[test]
    fn test_crosshatch_has_two_perpendicular_layers() {
        let settings = PatternSettings { rotation: 10, ..base("crosshatch") };
        let style = crosshatch(&settings).unwrap();
        assert!(style.layers()[0].image.contains("(55deg,"));
        assert!(style.layers()[1].image.contains("(145deg,"));
    }

    #[test]
    fn test_pinstripe_period_grows_with_spacing() {
        let settings = PatternSettings {
            pattern_size: 10,
            line_width: 4,
            spacing: 6,
            ..base("pinstripe")
        };
        let style = pinstripe(&settings).unwrap();
        assert!(style.layers()[0].image.ends_with("transparent 14px 14px)"));
    }

    #[test]
    fn test_zigzag_offsets() {
        let style = zigzag(&PatternSettings { pattern_size: 40, ..base("zigzag") }).unwrap();
        let positions: Vec<_> = style.layers().iter().map(|l| l.position.as_str()).collect();
        assert_eq!(positions, ["20px 0", "20px 0", "0 0", "0 0"]);
    }

    #[test]
    fn test_chevron_amplitude_sets_offset() {
        let settings = PatternSettings { pattern_size: 48, amplitude: 12, ..base("chevron") };
        let style = chevron(&settings).unwrap();
        assert_eq!(style.layers()[0].position, "36px 0");
    }

    #[test]
    fn test_waves_embed_svg() {
        let settings = PatternSettings {
            pattern_size: 60,
            amplitude: 10,
            frequency: 2,
            line_width: 3,
            ..base("waves")
        };
        let style = waves(&settings).unwrap();
        let image = &style.layers()[0].image;
        assert!(image.starts_with("url(\"data:image/svg+xml,%3Csvg"));
        assert!(!image.contains('#'));
        // 4 segments: one Q and three T commands
        assert_eq!(image.matches("%20T").count(), 3);
    }

    #[test]
    fn test_waves_quoted_color_cannot_leave_attribute() {
        let settings = PatternSettings {
            pattern_color: "red' onload='x".into(),
            ..base("waves")
        };
        let image = waves(&settings).unwrap().layers()[0].image.clone();
        let svg = urlencoding::decode(&image).unwrap();
        assert!(svg.contains("stroke='transparent'"), "{svg}");
        assert!(!svg.contains("onload"));
    }

    #[test]
    fn test_waves_frequency_is_bounded() {
        let settings = PatternSettings { frequency: u32::MAX, ..base("waves") };
        let style = waves(&settings).unwrap();
        assert_eq!(style.layers()[0].image.matches("%20T").count(), 15);
    }
}
