//! Named snapshots of settings, kept in memory.

use tilecss::PatternSettings;

/// An ordered list of named presets. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetList {
    entries: Vec<(String, PatternSettings)>,
}

impl PresetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `settings` under `name`. An existing preset with the same name
    /// is replaced in place, keeping its position.
    pub fn save(&mut self, name: impl Into<String>, settings: PatternSettings) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = settings,
            None => self.entries.push((name, settings)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PatternSettings> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, settings)| settings)
    }

    /// Removes and returns the preset named `name`.
    pub fn remove(&mut self, name: &str) -> Option<PatternSettings> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Preset names in save order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size: u32) -> PatternSettings {
        PatternSettings {
            pattern_size: size,
            ..PatternSettings::default()
        }
    }

    #[test]
    fn test_save_and_get() {
        let mut presets = PresetList::new();
        assert!(presets.is_empty());

        presets.save("small", sized(10));
        presets.save("large", sized(100));

        assert_eq!(presets.len(), 2);
        assert_eq!(presets.get("small").map(|s| s.pattern_size), Some(10));
        assert_eq!(presets.get("missing"), None);
    }

    #[test]
    fn test_save_replaces_in_place() {
        let mut presets = PresetList::new();
        presets.save("a", sized(1));
        presets.save("b", sized(2));
        presets.save("a", sized(3));

        assert_eq!(presets.names(), ["a", "b"]);
        assert_eq!(presets.get("a").map(|s| s.pattern_size), Some(3));
    }

    #[test]
    fn test_remove() {
        let mut presets = PresetList::new();
        presets.save("a", sized(1));
        assert_eq!(presets.remove("a").map(|s| s.pattern_size), Some(1));
        assert_eq!(presets.remove("a"), None);
        assert!(presets.is_empty());
    }
}
