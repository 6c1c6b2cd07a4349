//! Random but consistent settings.
//!
//! A [`Randomizer`] owns its RNG, so seeded instances give reproducible
//! draws. Only the fields a pattern declares through its
//! [`Capabilities`] are drawn; everything else keeps the pattern's defaults.
//! Every result goes through [`clamp_settings`] before it is returned.
//!
//! ```
//! use tilecss::clamp::is_consistent;
//! use tilecss::randomize::Randomizer;
//!
//! let mut randomizer = Randomizer::with_seed(7);
//! let settings = randomizer.randomize_all();
//! assert!(is_consistent(&settings));
//! assert!(tilecss::registry::find(&settings.pattern_type).is_some());
//! ```

use std::ops::RangeInclusive;

use crate::clamp::clamp_settings;
use crate::color::{Rgb, random_hex};
use crate::registry::{self, Capabilities, PatternDescriptor};
use crate::settings::{Direction, PatternSettings, SettingsPatch};

/// Minimum luminance gap between pattern and background in
/// [`Randomizer::shuffle_colors`].
const MIN_LUMINANCE_GAP: f64 = 0.2;

/// Redraws allowed while looking for a readable pattern color.
const MAX_COLOR_ATTEMPTS: usize = 8;

/// Inclusive ranges for every randomized field.
///
/// Opacity is drawn in hundredths and rotation in multiples of
/// `rotation_step` degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomRanges {
    pub pattern_size: RangeInclusive<u32>,
    pub dot_size: RangeInclusive<u32>,
    pub line_width: RangeInclusive<u32>,
    pub amplitude: RangeInclusive<u32>,
    pub frequency: RangeInclusive<u32>,
    pub depth: RangeInclusive<u32>,
    pub rotation_step: u32,
    pub opacity_percent: RangeInclusive<u32>,
    pub spacing: RangeInclusive<u32>,
    pub contrast: RangeInclusive<u32>,
    pub lighting: RangeInclusive<u32>,
    pub density: RangeInclusive<u32>,
}

impl Default for RandomRanges {
    fn default() -> Self {
        Self {
            pattern_size: 10..=120,
            dot_size: 2..=40,
            line_width: 1..=12,
            amplitude: 2..=40,
            frequency: 1..=4,
            depth: 2..=40,
            rotation_step: 5,
            opacity_percent: 30..=100,
            spacing: 0..=40,
            contrast: 10..=100,
            lighting: 5..=60,
            density: 10..=100,
        }
    }
}

impl RandomRanges {
    pub fn with_pattern_size(mut self, range: RangeInclusive<u32>) -> Self {
        self.pattern_size = range;
        self
    }

    pub fn with_dot_size(mut self, range: RangeInclusive<u32>) -> Self {
        self.dot_size = range;
        self
    }

    pub fn with_line_width(mut self, range: RangeInclusive<u32>) -> Self {
        self.line_width = range;
        self
    }

    pub fn with_amplitude(mut self, range: RangeInclusive<u32>) -> Self {
        self.amplitude = range;
        self
    }

    pub fn with_frequency(mut self, range: RangeInclusive<u32>) -> Self {
        self.frequency = range;
        self
    }

    pub fn with_depth(mut self, range: RangeInclusive<u32>) -> Self {
        self.depth = range;
        self
    }

    /// Rotation is drawn from `0, step, 2 * step, ...` below 360. A zero step
    /// disables rotation.
    pub fn with_rotation_step(mut self, step: u32) -> Self {
        self.rotation_step = step;
        self
    }

    /// Opacity range in percent; values above 100 are capped.
    pub fn with_opacity_percent(mut self, range: RangeInclusive<u32>) -> Self {
        self.opacity_percent = range;
        self
    }

    pub fn with_spacing(mut self, range: RangeInclusive<u32>) -> Self {
        self.spacing = range;
        self
    }

    pub fn with_contrast(mut self, range: RangeInclusive<u32>) -> Self {
        self.contrast = range;
        self
    }

    pub fn with_lighting(mut self, range: RangeInclusive<u32>) -> Self {
        self.lighting = range;
        self
    }

    pub fn with_density(mut self, range: RangeInclusive<u32>) -> Self {
        self.density = range;
        self
    }
}

/// Draws random settings and colors.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: fastrand::Rng,
    ranges: RandomRanges,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    /// A randomizer seeded from the environment.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            ranges: RandomRanges::default(),
        }
    }

    /// A randomizer whose draws are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            ranges: RandomRanges::default(),
        }
    }

    pub fn with_ranges(mut self, ranges: RandomRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn ranges(&self) -> &RandomRanges {
        &self.ranges
    }

    /// Picks a pattern uniformly and randomizes it.
    pub fn randomize_all(&mut self) -> PatternSettings {
        let descriptors = registry::all();
        let descriptor = &descriptors[self.rng.usize(..descriptors.len())];
        self.randomize_pattern(descriptor)
    }

    /// Random colors plus one draw per capability of `descriptor`, on top of
    /// its defaults.
    pub fn randomize_pattern(&mut self, descriptor: &PatternDescriptor) -> PatternSettings {
        let mut settings = PatternSettings::defaults_for(descriptor);
        settings.pattern_color = random_hex(&mut self.rng);
        settings.background_color = random_hex(&mut self.rng);
        settings.secondary_color = random_hex(&mut self.rng);

        let caps = descriptor.capabilities;
        let ranges = self.ranges.clone();
        let rng = &mut self.rng;
        let mut draw = |range: &RangeInclusive<u32>| draw_u32(rng, range);

        if caps.contains(Capabilities::SIZE) {
            settings.pattern_size = draw(&ranges.pattern_size);
        }
        if caps.contains(Capabilities::DOT_SIZE) {
            settings.dot_size = draw(&ranges.dot_size);
        }
        if caps.contains(Capabilities::LINE_WIDTH) {
            settings.line_width = draw(&ranges.line_width);
        }
        if caps.contains(Capabilities::AMPLITUDE) {
            settings.amplitude = draw(&ranges.amplitude);
        }
        if caps.contains(Capabilities::FREQUENCY) {
            settings.frequency = draw(&ranges.frequency);
        }
        if caps.contains(Capabilities::DEPTH) {
            settings.depth = draw(&ranges.depth);
        }
        if caps.contains(Capabilities::SPACING) {
            settings.spacing = draw(&ranges.spacing);
        }
        if caps.contains(Capabilities::CONTRAST) {
            settings.contrast = draw(&ranges.contrast);
        }
        if caps.contains(Capabilities::LIGHTING) {
            settings.lighting = draw(&ranges.lighting);
        }
        if caps.contains(Capabilities::DENSITY) {
            settings.density = draw(&ranges.density);
        }
        if caps.contains(Capabilities::OPACITY) {
            settings.opacity = draw(&ranges.opacity_percent).min(100) as f64 / 100.0;
        }
        if caps.contains(Capabilities::ROTATION) {
            settings.rotation = match ranges.rotation_step {
                0 => 0,
                step => self.rng.u32(..360u32.div_ceil(step)) * step,
            };
        }
        if caps.contains(Capabilities::DIRECTION) {
            settings.direction = Direction::ALL[self.rng.usize(..Direction::ALL.len())];
        }
        if caps.contains(Capabilities::STAGGER) {
            settings.stagger = self.rng.bool();
        }
        if caps.contains(Capabilities::WEAVE) {
            settings.weave = self.rng.bool();
        }

        clamp_settings(&mut settings);
        log::debug!("randomized {}: {settings:?}", descriptor.id);
        settings
    }

    /// New colors for `descriptor`, leaving every other field alone.
    ///
    /// The pattern color is redrawn a bounded number of times to keep it
    /// readable against the background. The secondary color is only drawn
    /// for patterns that use it.
    pub fn shuffle_colors(&mut self, descriptor: &PatternDescriptor) -> SettingsPatch {
        let background = random_hex(&mut self.rng);
        let background_luminance = luminance_of(&background);

        let mut pattern = random_hex(&mut self.rng);
        for _ in 1..MAX_COLOR_ATTEMPTS {
            if (luminance_of(&pattern) - background_luminance).abs() >= MIN_LUMINANCE_GAP {
                break;
            }
            pattern = random_hex(&mut self.rng);
        }

        let uses_secondary = descriptor
            .capabilities
            .intersects(Capabilities::COLOR_ALT | Capabilities::LIGHTING);
        let secondary = uses_secondary.then(|| random_hex(&mut self.rng));

        log::debug!(
            "shuffled colors for {}: pattern {pattern}, background {background}, secondary {secondary:?}",
            descriptor.id
        );

        SettingsPatch {
            pattern_color: Some(pattern),
            background_color: Some(background),
            secondary_color: secondary,
            ..SettingsPatch::default()
        }
    }
}

fn draw_u32(rng: &mut fastrand::Rng, range: &RangeInclusive<u32>) -> u32 {
    if range.is_empty() {
        *range.start()
    } else {
        rng.u32(range.clone())
    }
}

fn luminance_of(hex: &str) -> f64 {
    Rgb::parse_hex(hex).map(|rgb| rgb.luminance()).unwrap_or(0.0)
}
