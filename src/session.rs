//! The caller-owned edit pipeline.
//!
//! A [`PatternSession`] holds the current settings, a randomizer and the
//! preset list, and keeps the settings consistent across every change:
//! pattern switches merge defaults, single-field edits go through the
//! clamping layer and randomization always ends in a clamp pass.
//!
//! ```
//! use tessera::{PatternSession, SettingEdit};
//!
//! let mut session = PatternSession::with_seed(1);
//! session.select_pattern("waves").unwrap();
//! let patch = session.edit(SettingEdit::Amplitude(500));
//! assert_eq!(patch.amplitude, Some(session.settings().pattern_size / 2));
//! assert!(session.css().contains("data:image/svg+xml"));
//! ```

use tilecss::clamp::on_field_edit;
use tilecss::randomize::Randomizer;
use tilecss::registry::{self, PatternDescriptor};
use tilecss::{Generated, PatternError, PatternSettings, SettingEdit, SettingsPatch};

use crate::presets::PresetList;
use crate::{Result, TesseraError, export};

#[derive(Debug, Clone)]
pub struct PatternSession {
    settings: PatternSettings,
    randomizer: Randomizer,
    presets: PresetList,
}

impl Default for PatternSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSession {
    /// A session on the default pattern with an entropy-seeded randomizer.
    pub fn new() -> Self {
        Self::from_parts(Randomizer::new())
    }

    /// A session whose random draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Randomizer::with_seed(seed))
    }

    fn from_parts(randomizer: Randomizer) -> Self {
        let defaults = PatternSettings::default();
        let settings = match registry::find(&defaults.pattern_type) {
            Some(descriptor) => PatternSettings::defaults_for(descriptor),
            None => defaults,
        };
        Self {
            settings,
            randomizer,
            presets: PresetList::new(),
        }
    }

    pub fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    /// The descriptor of the active pattern, if it is registered.
    pub fn descriptor(&self) -> Option<&'static PatternDescriptor> {
        registry::find(&self.settings.pattern_type)
    }

    /// Style text for the current settings. Never fails.
    pub fn css(&self) -> String {
        tilecss::generate(&self.settings)
    }

    /// Style text plus the fallback diagnostic, if any.
    pub fn generated(&self) -> Generated {
        tilecss::generate_checked(&self.settings)
    }

    /// Switches to pattern `id`, keeping the colors and resetting every
    /// tuning field to that pattern's defaults.
    pub fn select_pattern(&mut self, id: &str) -> Result<()> {
        let descriptor =
            registry::find(id).ok_or_else(|| PatternError::UnknownPattern(id.to_string()))?;
        self.settings = PatternSettings::for_pattern(descriptor, &self.settings);
        log::debug!("selected pattern {id}");
        Ok(())
    }

    /// Applies a single-field edit and returns the fields it changed,
    /// including dependents that had to be clamped.
    pub fn edit(&mut self, edit: SettingEdit) -> SettingsPatch {
        let patch = on_field_edit(edit, &self.settings);
        self.settings.apply(&patch);
        patch
    }

    /// Replaces the settings with a random pattern and random values.
    pub fn randomize(&mut self) -> &PatternSettings {
        self.settings = self.randomizer.randomize_all();
        &self.settings
    }

    /// Draws new colors for the active pattern. Returns `None` when the
    /// active pattern is not registered.
    pub fn shuffle_colors(&mut self) -> Option<SettingsPatch> {
        let descriptor = self.descriptor()?;
        let patch = self.randomizer.shuffle_colors(descriptor);
        self.settings.apply(&patch);
        Some(patch)
    }

    pub fn save_preset(&mut self, name: impl Into<String>) {
        self.presets.save(name, self.settings.clone());
    }

    pub fn load_preset(&mut self, name: &str) -> Result<()> {
        let settings = self
            .presets
            .get(name)
            .ok_or_else(|| TesseraError::UnknownPreset(name.to_string()))?;
        self.settings = settings.clone();
        Ok(())
    }

    pub fn presets(&self) -> &PresetList {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetList {
        &mut self.presets
    }

    /// The current style text wrapped in a rule for `selector`.
    pub fn export_rule(&self, selector: &str) -> Result<String> {
        export::to_rule_block(selector, &self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecss::clamp::is_consistent;

    #[test]
    fn test_new_session_is_on_default_dots() {
        let session = PatternSession::with_seed(0);
        assert_eq!(session.settings().pattern_type, "dots");
        assert_eq!(session.descriptor().map(|d| d.id), Some("dots"));
        assert!(session.generated().error.is_none());
    }

    #[test]
    fn test_select_pattern_keeps_colors() {
        let mut session = PatternSession::with_seed(0);
        session.edit(SettingEdit::PatternColor("#111111".into()));
        session.edit(SettingEdit::BackgroundColor("#eeeeee".into()));
        session.select_pattern("stripes").unwrap();

        let settings = session.settings();
        assert_eq!(settings.pattern_type, "stripes");
        assert_eq!(settings.pattern_color, "#111111");
        assert_eq!(settings.background_color, "#eeeeee");
    }

    #[test]
    fn test_select_unknown_pattern_leaves_settings_alone() {
        let mut session = PatternSession::with_seed(0);
        let before = session.settings().clone();
        let err = session.select_pattern("nope").unwrap_err();
        assert!(matches!(err, TesseraError::Pattern(PatternError::UnknownPattern(_))));
        assert_eq!(session.settings(), &before);
    }

    #[test]
    fn test_size_edit_clamps_dot_size() {
        let mut session = PatternSession::with_seed(0);
        session.edit(SettingEdit::PatternSize(64));
        session.edit(SettingEdit::DotSize(40));

        let patch = session.edit(SettingEdit::PatternSize(10));
        assert_eq!(patch.dot_size, Some(10));
        assert_eq!(session.settings().dot_size, 10);
    }

    #[test]
    fn test_randomize_and_shuffle_stay_consistent() {
        let mut session = PatternSession::with_seed(99);
        for _ in 0..20 {
            session.randomize();
            assert!(is_consistent(session.settings()));
            let patch = session.shuffle_colors().unwrap();
            assert_eq!(patch.pattern_color.as_deref(), Some(session.settings().pattern_color.as_str()));
            assert!(session.generated().error.is_none());
        }
    }

    #[test]
    fn test_presets_round_trip() {
        let mut session = PatternSession::with_seed(0);
        session.select_pattern("honeycomb").unwrap();
        session.save_preset("hex");
        session.select_pattern("grid").unwrap();

        session.load_preset("hex").unwrap();
        assert_eq!(session.settings().pattern_type, "honeycomb");
        assert_eq!(session.presets().names(), ["hex"]);

        let err = session.load_preset("missing").unwrap_err();
        assert!(matches!(err, TesseraError::UnknownPreset(name) if name == "missing"));
    }

    #[test]
    fn test_export_rule() {
        let session = PatternSession::with_seed(0);
        let rule = session.export_rule(".bg").unwrap();
        assert!(rule.starts_with(".bg {\n  background-color: "));
        assert!(rule.ends_with("}\n"));
    }
}
