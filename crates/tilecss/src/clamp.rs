//! Cross-field invariants for [`PatternSettings`].
//!
//! Generators trust their input; this module is where the numeric
//! relationships between fields are enforced:
//!
//! | Field        | Bound                         |
//! |--------------|-------------------------------|
//! | `dot_size`   | `<= pattern_size`             |
//! | `line_width` | `<= pattern_size`             |
//! | `amplitude`  | `<= floor(pattern_size / 2)`  |
//! | `depth`      | `<= floor(pattern_size / 2)`  |
//! | `spacing`    | `<= pattern_size`             |
//! | `opacity`    | `0.0..=1.0` (NaN becomes 1.0) |
//! | `rotation`   | `0..360`                      |
//!
//! Raw settings are clamped first; generators derive continuous geometry
//! (row heights, half sizes) from the clamped values afterwards.

use crate::settings::{PatternSettings, SettingEdit, SettingsPatch};

pub(crate) fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

fn half(size: u32) -> u32 {
    size / 2
}

/// Enforces every invariant in place.
pub fn clamp_settings(settings: &mut PatternSettings) {
    let size = settings.pattern_size;

    settings.dot_size = settings.dot_size.min(size);
    settings.line_width = settings.line_width.min(size);
    settings.amplitude = settings.amplitude.min(half(size));
    settings.depth = settings.depth.min(half(size));
    settings.spacing = settings.spacing.min(size);
    settings.opacity = clamp_opacity(settings.opacity);
    settings.rotation %= 360;
}

/// Returns `true` when `settings` already satisfies every invariant.
pub fn is_consistent(settings: &PatternSettings) -> bool {
    let size = settings.pattern_size;
    settings.dot_size <= size
        && settings.line_width <= size
        && settings.amplitude <= half(size)
        && settings.depth <= half(size)
        && settings.spacing <= size
        && (0.0..=1.0).contains(&settings.opacity)
        && settings.rotation < 360
}

/// Resolves a single-field edit against `current`.
///
/// The returned patch always contains the edited field (clamped to its
/// bound) plus any dependent fields that the edit pushed out of range.
/// Fields that stay valid are left out.
///
/// ```
/// use tilecss::clamp::on_field_edit;
/// use tilecss::{PatternSettings, SettingEdit};
///
/// let current = PatternSettings { pattern_size: 64, dot_size: 40, ..PatternSettings::default() };
/// let patch = on_field_edit(SettingEdit::PatternSize(10), &current);
/// assert_eq!(patch.pattern_size, Some(10));
/// assert_eq!(patch.dot_size, Some(10));
/// ```
pub fn on_field_edit(edit: SettingEdit, current: &PatternSettings) -> SettingsPatch {
    let size = current.pattern_size;
    let mut patch = SettingsPatch::default();

    match edit {
        SettingEdit::PatternSize(new_size) => {
            patch.pattern_size = Some(new_size);
            let shrink = |value: u32, bound: u32| (value > bound).then_some(bound);
            patch.dot_size = shrink(current.dot_size, new_size);
            patch.line_width = shrink(current.line_width, new_size);
            patch.amplitude = shrink(current.amplitude, half(new_size));
            patch.depth = shrink(current.depth, half(new_size));
            patch.spacing = shrink(current.spacing, new_size);
        }
        SettingEdit::DotSize(value) => patch.dot_size = Some(value.min(size)),
        SettingEdit::LineWidth(value) => patch.line_width = Some(value.min(size)),
        SettingEdit::Amplitude(value) => patch.amplitude = Some(value.min(half(size))),
        SettingEdit::Depth(value) => patch.depth = Some(value.min(half(size))),
        SettingEdit::Spacing(value) => patch.spacing = Some(value.min(size)),
        SettingEdit::Opacity(value) => patch.opacity = Some(clamp_opacity(value)),
        SettingEdit::Rotation(value) => patch.rotation = Some(value % 360),
        SettingEdit::PatternColor(color) => patch.pattern_color = Some(color),
        SettingEdit::BackgroundColor(color) => patch.background_color = Some(color),
        SettingEdit::SecondaryColor(color) => patch.secondary_color = Some(color),
        SettingEdit::Direction(direction) => patch.direction = Some(direction),
        SettingEdit::Frequency(value) => patch.frequency = Some(value),
        SettingEdit::Stagger(value) => patch.stagger = Some(value),
        SettingEdit::Contrast(value) => patch.contrast = Some(value),
        SettingEdit::Lighting(value) => patch.lighting = Some(value),
        SettingEdit::Density(value) => patch.density = Some(value),
        SettingEdit::Weave(value) => patch.weave = Some(value),
    }

    patch
}
