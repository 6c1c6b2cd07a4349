//! Surface textures: fractal noise, carbon fibre, plaid and basket weave.

use super::{accent, foreground, opacity, positive, stroke, tile_size};
use crate::PatternError;
use crate::color::{Rgb, adjust_lightness, with_alpha};
use crate::settings::PatternSettings;
use crate::style::encode::svg_data_uri;
use crate::style::{Layer, PatternStyle, num, px};

/// Turbulence frequency at density 0.
const BASE_FREQUENCY: f64 = 0.2;

/// Fractal noise tinted with the pattern color.
///
/// Density raises the turbulence frequency (finer grain); contrast scales the
/// alpha of the noise, with 50 leaving it at the configured opacity.
pub fn noise(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let tint = Rgb::parse_hex(&settings.pattern_color).unwrap_or_else(|| {
        log::warn!(
            "noise: cannot decode color {:?}, tinting with black",
            settings.pattern_color
        );
        Rgb::BLACK
    });

    let frequency = BASE_FREQUENCY + settings.density.min(100) as f64 / 100.0;
    let alpha = settings.contrast.min(100) as f64 / 50.0 * opacity(settings);
    let channel = |c: u8| num(c as f64 / 255.0);

    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{w}'>\
         <filter id='n'>\
         <feTurbulence type='fractalNoise' baseFrequency='{frequency}' numOctaves='3' stitchTiles='stitch'/>\
         <feColorMatrix type='matrix' values='0 0 0 0 {r} 0 0 0 0 {g} 0 0 0 0 {b} 0 0 0 {alpha} 0'/>\
         </filter>\
         <rect width='100%' height='100%' filter='url(#n)'/></svg>",
        w = num(s),
        frequency = num(frequency),
        r = channel(tint.r),
        g = channel(tint.g),
        b = channel(tint.b),
        alpha = num(alpha),
    );

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(svg_data_uri(&svg), s, s)))
}

/// Woven fibre dots in two offset rows, each with a small highlight below it.
pub fn carbon(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let half = s / 2.0;
    let lift = positive(s / 16.0, "highlight offset")?;

    let fibre = format!("radial-gradient({} 15%, transparent 16%)", foreground(settings));
    let highlight = with_alpha(
        &adjust_lightness(&settings.pattern_color, settings.contrast as f64),
        opacity(settings) * 0.35,
    );
    let sheen = format!("radial-gradient({highlight} 15%, transparent 20%)");

    Ok(PatternStyle::new(&settings.background_color)
        .with_layer(Layer::tiled(&fibre, s, s))
        .with_layer(Layer::tiled(fibre, s, s).at(half, half))
        .with_layer(Layer::tiled(&sheen, s, s).at(0.0, lift))
        .with_layer(Layer::tiled(sheen, s, s).at(half, half + lift)))
}

/// Translucent crossing bands with a secondary-color thread centered in the
/// gap between them. `weave` adds a fine twill on top.
pub fn plaid(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let band_width = (s / 3.0).max(1.0);
    let thread_width = stroke(settings.line_width, s).min(band_width);
    let thread_start = band_width + (s - band_width - thread_width) / 2.0;
    let thread_end = thread_start + thread_width;

    let band_color = with_alpha(&settings.pattern_color, opacity(settings) * 0.5);
    let thread_color = accent(settings);

    let band = |angle: u32| {
        format!(
            "linear-gradient({angle}deg, {band_color} {w}, transparent {w})",
            w = px(band_width)
        )
    };
    let thread = |angle: u32| {
        format!(
            "linear-gradient({angle}deg, transparent {a}, {thread_color} {a} {b}, transparent {b})",
            a = px(thread_start),
            b = px(thread_end)
        )
    };

    let mut style = PatternStyle::new(&settings.background_color);
    if settings.weave {
        let twill = with_alpha(&settings.pattern_color, opacity(settings) * 0.2);
        style.push(Layer::repeating(format!(
            "repeating-linear-gradient(45deg, transparent 0 2px, {twill} 2px 3px)"
        )));
    }
    style.push(Layer::tiled(thread(90), s, s));
    style.push(Layer::tiled(thread(0), s, s));
    style.push(Layer::tiled(band(90), s, s));
    style.push(Layer::tiled(band(0), s, s));
    Ok(style)
}

/// Basket weave: two crossing strands in the pattern and secondary colors.
/// `weave` adds a shadow where the strands pass under each other.
pub fn weave(settings: &PatternSettings) -> Result<PatternStyle, PatternError> {
    let s = tile_size(settings);
    let c1 = foreground(settings);
    let c2 = accent(settings);

    let mut style = PatternStyle::new(&settings.background_color);
    if settings.weave {
        let shadow = with_alpha(
            &adjust_lightness(&settings.secondary_color, -30.0),
            opacity(settings) * 0.35,
        );
        style.push(Layer::tiled(
            format!("linear-gradient(135deg, {shadow} 12%, transparent 0, transparent 88%, {shadow} 0)"),
            s,
            s,
        ));
    }
    style.push(Layer::tiled(
        format!("linear-gradient(45deg, {c1} 12%, transparent 0, transparent 88%, {c1} 0)"),
        s,
        s,
    ));
    style.push(Layer::tiled(
        format!("linear-gradient(135deg, transparent 37%, {c2} 0, {c2} 63%, transparent 0)"),
        s,
        s,
    ));
    style.push(Layer::tiled(
        format!("linear-gradient(45deg, transparent 37%, {c1} 0, {c1} 63%, transparent 0)"),
        s,
        s,
    ));
    Ok(style)
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

    fn decoded(image: &str) -> String {
        let body = image
            .strip_prefix("url(\"data:image/svg+xml,")
            .and_then(|rest| rest.strip_suffix("\")"))
            .unwrap();
        urlencoding::decode(body).unwrap().into_owned()
    }

    #[test]
    fn test_noise_filter_parameters() {
        let settings = PatternSettings {
            pattern_color: "#ff0000".into(),
            pattern_size: 120,
            density: 60,
            contrast: 50,
            opacity: 0.6,
            ..base("noise")
        };
        let style = noise(&settings).unwrap();
        let svg = decoded(&style.layers()[0].image);

        assert!(svg.contains("baseFrequency='0.8'"));
        assert!(svg.contains("values='0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 0 0 0.6 0'"));
        assert_eq!(style.layers()[0].size, "120px 120px");
    }

    #[test]
    fn test_noise_undecodable_color_tints_black() {
        let settings = PatternSettings { pattern_color: "tomato".into(), ..base("noise") };
        let svg = decoded(&noise(&settings).unwrap().layers()[0].image);
        assert!(svg.contains("values='0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 "));
    }

    #[test]
    fn test_carbon_offsets() {
        let style = carbon(&PatternSettings { pattern_size: 16, ..base("carbon") }).unwrap();
        let positions: Vec<_> = style.layers().iter().map(|l| l.position.as_str()).collect();
        assert_eq!(positions, ["0 0", "8px 8px", "0 1px", "8px 9px"]);
    }

    #[test]
    fn test_plaid_thread_centered_in_gap() {
        let settings = PatternSettings {
            pattern_size: 60,
            line_width: 4,
            weave: false,
            ..base("plaid")
        };
        let style = plaid(&settings).unwrap();
        assert_eq!(style.layers().len(), 4);
        // band 20px, gap 40px, thread 4px -> 38px..42px
        assert!(style.layers()[0].image.contains("#f59e0b 38px 42px"));
    }

    #[test]
    fn test_plaid_weave_adds_twill() {
        let style = plaid(&PatternSettings { weave: true, ..base("plaid") }).unwrap();
        assert_eq!(style.layers().len(), 5);
        assert_eq!(style.layers()[0].size, "auto");
    }

    #[test]
    fn test_weave_shadow_layer() {
        let plain = weave(&PatternSettings { weave: false, ..base("weave") }).unwrap();
        let shaded = weave(&PatternSettings { weave: true, ..base("weave") }).unwrap();
        assert_eq!(plain.layers().len(), 3);
        assert_eq!(shaded.layers().len(), 4);
        assert_eq!(&shaded.layers()[1..], plain.layers());
    }
}
