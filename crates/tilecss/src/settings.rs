//! The settings record consumed by every generator.
//!
//! [`PatternSettings`] is deliberately flat: it carries the union of every
//! tunable field so that switching patterns never needs a different type.
//! Fields a pattern does not declare in its
//! [`Capabilities`](crate::registry::Capabilities) are simply ignored by its
//! generator.
//!
//! Partial data comes in two shapes:
//!
//! - [`SettingsOverride`]: `const`-constructible tuning defaults stored in the
//!   static pattern catalog
//! - [`SettingsPatch`]: the changed fields produced by an edit, a color
//!   shuffle or the clamping layer

use crate::clamp::clamp_settings;
use crate::registry::PatternDescriptor;

/// Orientation for line-based patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Lines run left to right.
    #[default]
    Horizontal,
    /// Lines run top to bottom.
    Vertical,
    /// Lines rise to the right.
    DiagonalRight,
    /// Lines rise to the left.
    DiagonalLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    /// The CSS gradient angle (degrees) that paints lines in this direction.
    pub fn gradient_angle(self) -> f64 {
        match self {
            Direction::Horizontal => 0.0,
            Direction::Vertical => 90.0,
            Direction::DiagonalRight => 45.0,
            Direction::DiagonalLeft => 135.0,
        }
    }

    /// Parse a direction keyword (`horizontal`, `vertical`, `diagonal-right`,
    /// `diagonal-left`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Some(Direction::Horizontal),
            "vertical" => Some(Direction::Vertical),
            "diagonal-right" | "diagonal" => Some(Direction::DiagonalRight),
            "diagonal-left" => Some(Direction::DiagonalLeft),
            _ => None,
        }
    }
}

/// The full parameter record for one generator invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSettings {
    /// Registry id of the active pattern.
    pub pattern_type: String,

    // Colors
    pub pattern_color: String,
    pub background_color: String,
    pub secondary_color: String,

    // Geometry (pixels unless noted)
    pub pattern_size: u32,
    pub dot_size: u32,
    pub line_width: u32,
    pub direction: Direction,
    pub amplitude: u32,
    /// Wave periods per tile.
    pub frequency: u32,
    pub depth: u32,
    /// Degrees, `0..360`.
    pub rotation: u32,
    pub spacing: u32,

    // Appearance
    /// Foreground opacity, `0.0..=1.0`.
    pub opacity: f64,
    pub stagger: bool,
    /// Percent.
    pub contrast: u32,
    /// Percent of lightness shift between shaded faces.
    pub lighting: u32,
    /// Percent.
    pub density: u32,
    pub weave: bool,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            pattern_type: "dots".to_string(),
            pattern_color: "#3b82f6".to_string(),
            background_color: "#1f2937".to_string(),
            secondary_color: "#f59e0b".to_string(),
            pattern_size: 32,
            dot_size: 4,
            line_width: 2,
            direction: Direction::Horizontal,
            amplitude: 8,
            frequency: 2,
            depth: 8,
            rotation: 0,
            spacing: 8,
            opacity: 1.0,
            stagger: false,
            contrast: 50,
            lighting: 20,
            density: 50,
            weave: false,
        }
    }
}

impl PatternSettings {
    /// Builds the settings for switching to `descriptor`.
    ///
    /// Colors persist from `previous`; every tuning field is reset to the
    /// descriptor's defaults layered over the base defaults, then clamped.
    pub fn for_pattern(descriptor: &PatternDescriptor, previous: &PatternSettings) -> Self {
        let mut settings = Self {
            pattern_type: descriptor.id.to_string(),
            pattern_color: previous.pattern_color.clone(),
            background_color: previous.background_color.clone(),
            secondary_color: previous.secondary_color.clone(),
            ..Self::default()
        };
        descriptor.defaults.apply_to(&mut settings);
        clamp_settings(&mut settings);
        settings
    }

    /// Base defaults plus `descriptor`'s overrides, with the base colors.
    pub fn defaults_for(descriptor: &PatternDescriptor) -> Self {
        Self::for_pattern(descriptor, &Self::default())
    }

    /// Applies a patch in place.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        patch.apply_to(self);
    }
}

/// Per-pattern tuning defaults.
///
/// Colors are not part of an override: they always survive a pattern switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SettingsOverride {
    pub pattern_size: Option<u32>,
    pub dot_size: Option<u32>,
    pub line_width: Option<u32>,
    pub direction: Option<Direction>,
    pub amplitude: Option<u32>,
    pub frequency: Option<u32>,
    pub depth: Option<u32>,
    pub rotation: Option<u32>,
    pub spacing: Option<u32>,
    pub opacity: Option<f64>,
    pub stagger: Option<bool>,
    pub contrast: Option<u32>,
    pub lighting: Option<u32>,
    pub density: Option<u32>,
    pub weave: Option<bool>,
}

impl SettingsOverride {
    /// An override that changes nothing. Usable in `const` context.
    pub const NONE: Self = Self {
        pattern_size: None,
        dot_size: None,
        line_width: None,
        direction: None,
        amplitude: None,
        frequency: None,
        depth: None,
        rotation: None,
        spacing: None,
        opacity: None,
        stagger: None,
        contrast: None,
        lighting: None,
        density: None,
        weave: None,
    };

    pub fn apply_to(&self, settings: &mut PatternSettings) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    settings.$field = value;
                })*
            };
        }
        take!(
            pattern_size, dot_size, line_width, direction, amplitude, frequency, depth,
            rotation, spacing, opacity, stagger, contrast, lighting, density, weave,
        );
    }
}

/// Identifies one editable field of [`PatternSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    PatternColor,
    BackgroundColor,
    SecondaryColor,
    PatternSize,
    DotSize,
    LineWidth,
    Direction,
    Amplitude,
    Frequency,
    Depth,
    Rotation,
    Spacing,
    Opacity,
    Stagger,
    Contrast,
    Lighting,
    Density,
    Weave,
}

/// A single-field edit coming from a control surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingEdit {
    PatternColor(String),
    BackgroundColor(String),
    SecondaryColor(String),
    PatternSize(u32),
    DotSize(u32),
    LineWidth(u32),
    Direction(Direction),
    Amplitude(u32),
    Frequency(u32),
    Depth(u32),
    Rotation(u32),
    Spacing(u32),
    Opacity(f64),
    Stagger(bool),
    Contrast(u32),
    Lighting(u32),
    Density(u32),
    Weave(bool),
}

impl SettingEdit {
    /// The field this edit targets.
    pub fn field(&self) -> SettingField {
        match self {
            SettingEdit::PatternColor(_) => SettingField::PatternColor,
            SettingEdit::BackgroundColor(_) => SettingField::BackgroundColor,
            SettingEdit::SecondaryColor(_) => SettingField::SecondaryColor,
            SettingEdit::PatternSize(_) => SettingField::PatternSize,
            SettingEdit::DotSize(_) => SettingField::DotSize,
            SettingEdit::LineWidth(_) => SettingField::LineWidth,
            SettingEdit::Direction(_) => SettingField::Direction,
            SettingEdit::Amplitude(_) => SettingField::Amplitude,
            SettingEdit::Frequency(_) => SettingField::Frequency,
            SettingEdit::Depth(_) => SettingField::Depth,
            SettingEdit::Rotation(_) => SettingField::Rotation,
            SettingEdit::Spacing(_) => SettingField::Spacing,
            SettingEdit::Opacity(_) => SettingField::Opacity,
            SettingEdit::Stagger(_) => SettingField::Stagger,
            SettingEdit::Contrast(_) => SettingField::Contrast,
            SettingEdit::Lighting(_) => SettingField::Lighting,
            SettingEdit::Density(_) => SettingField::Density,
            SettingEdit::Weave(_) => SettingField::Weave,
        }
    }
}

/// The fields changed by an edit. `None` means "leave as is".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsPatch {
    pub pattern_color: Option<String>,
    pub background_color: Option<String>,
    pub secondary_color: Option<String>,
    pub pattern_size: Option<u32>,
    pub dot_size: Option<u32>,
    pub line_width: Option<u32>,
    pub direction: Option<Direction>,
    pub amplitude: Option<u32>,
    pub frequency: Option<u32>,
    pub depth: Option<u32>,
    pub rotation: Option<u32>,
    pub spacing: Option<u32>,
    pub opacity: Option<f64>,
    pub stagger: Option<bool>,
    pub contrast: Option<u32>,
    pub lighting: Option<u32>,
    pub density: Option<u32>,
    pub weave: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, settings: &mut PatternSettings) {
        macro_rules! take_copy {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    settings.$field = value;
                })*
            };
        }
        macro_rules! take_clone {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = &self.$field {
                    settings.$field = value.clone();
                })*
            };
        }
        take_clone!(pattern_color, background_color, secondary_color);
        take_copy!(
            pattern_size, dot_size, line_width, direction, amplitude, frequency, depth,
            rotation, spacing, opacity, stagger, contrast, lighting, density, weave,
        );
    }
}
