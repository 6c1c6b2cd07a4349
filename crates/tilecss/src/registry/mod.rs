//! Static catalog of pattern descriptors.
//!
//! Each [`PatternDescriptor`] names a pattern family, groups it under a
//! [`Category`], declares which settings fields it reads through its
//! [`Capabilities`] and carries partial tuning defaults.
//!
//! Lookups are total: an unknown id is a `None`, never a panic.
//!
//! ```
//! use tilecss::registry::{self, Capabilities, Category};
//!
//! let waves = registry::find("waves").unwrap();
//! assert_eq!(waves.category, Category::Lines);
//! assert!(waves.capabilities.contains(Capabilities::AMPLITUDE));
//! assert!(registry::find("missing").is_none());
//! ```

mod catalog;

use std::collections::HashMap;

use bitflags::bitflags;
use once_cell::sync::Lazy;

use crate::settings::{SettingField, SettingsOverride};

pub use catalog::DESCRIPTORS;

bitflags! {
    /// The settings fields a pattern reads.
    ///
    /// Flags drive the clamping and randomization layers and tell a control
    /// surface which inputs to show. Generators never consult them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Capabilities: u32 {
        const SIZE       = 1 << 0;
        const DOT_SIZE   = 1 << 1;
        const LINE_WIDTH = 1 << 2;
        const DIRECTION  = 1 << 3;
        const AMPLITUDE  = 1 << 4;
        const FREQUENCY  = 1 << 5;
        const DEPTH      = 1 << 6;
        const ROTATION   = 1 << 7;
        const OPACITY    = 1 << 8;
        const STAGGER    = 1 << 9;
        const SPACING    = 1 << 10;
        const CONTRAST   = 1 << 11;
        /// Uses `secondary_color`.
        const COLOR_ALT  = 1 << 12;
        const LIGHTING   = 1 << 13;
        const DENSITY    = 1 << 14;
        const WEAVE      = 1 << 15;
    }
}

impl Capabilities {
    /// `const` union of a flag list, for use in the static catalog.
    pub const fn of(flags: &[Capabilities]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < flags.len() {
            bits |= flags[i].bits();
            i += 1;
        }
        Self::from_bits_truncate(bits)
    }

    /// The flag that makes `field` meaningful, or `None` for the two colors
    /// every pattern uses.
    pub fn for_field(field: SettingField) -> Option<Self> {
        let flag = match field {
            SettingField::PatternColor | SettingField::BackgroundColor => return None,
            SettingField::SecondaryColor => Self::COLOR_ALT,
            SettingField::PatternSize => Self::SIZE,
            SettingField::DotSize => Self::DOT_SIZE,
            SettingField::LineWidth => Self::LINE_WIDTH,
            SettingField::Direction => Self::DIRECTION,
            SettingField::Amplitude => Self::AMPLITUDE,
            SettingField::Frequency => Self::FREQUENCY,
            SettingField::Depth => Self::DEPTH,
            SettingField::Rotation => Self::ROTATION,
            SettingField::Spacing => Self::SPACING,
            SettingField::Opacity => Self::OPACITY,
            SettingField::Stagger => Self::STAGGER,
            SettingField::Contrast => Self::CONTRAST,
            SettingField::Lighting => Self::LIGHTING,
            SettingField::Density => Self::DENSITY,
            SettingField::Weave => Self::WEAVE,
        };
        Some(flag)
    }
}

/// Grouping tag for the pattern picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Lines,
    Geometric,
    Dimensional,
    Textures,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Basic,
        Category::Lines,
        Category::Geometric,
        Category::Dimensional,
        Category::Textures,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Lines => "Lines & Waves",
            Category::Geometric => "Geometric",
            Category::Dimensional => "3D",
            Category::Textures => "Textures",
        }
    }
}

/// Immutable metadata for one pattern family.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub capabilities: Capabilities,
    pub defaults: SettingsOverride,
}

/// Fields every pattern exposes regardless of capabilities.
const ALWAYS_EXPOSED: [SettingField; 2] = [SettingField::PatternColor, SettingField::BackgroundColor];

/// Every field in control-panel order.
const FIELD_ORDER: [SettingField; 16] = [
    SettingField::SecondaryColor,
    SettingField::PatternSize,
    SettingField::DotSize,
    SettingField::LineWidth,
    SettingField::Direction,
    SettingField::Amplitude,
    SettingField::Frequency,
    SettingField::Depth,
    SettingField::Rotation,
    SettingField::Spacing,
    SettingField::Opacity,
    SettingField::Stagger,
    SettingField::Contrast,
    SettingField::Lighting,
    SettingField::Density,
    SettingField::Weave,
];

impl PatternDescriptor {
    /// Whether `field` is meaningful for this pattern.
    pub fn supports(&self, field: SettingField) -> bool {
        Capabilities::for_field(field).is_none_or(|flag| self.capabilities.contains(flag))
    }

    /// The fields a control surface should expose, in panel order.
    pub fn exposed_fields(&self) -> Vec<SettingField> {
        ALWAYS_EXPOSED
            .into_iter()
            .chain(FIELD_ORDER.into_iter().filter(|field| self.supports(*field)))
            .collect()
    }
}

static INDEX: Lazy<HashMap<&'static str, &'static PatternDescriptor>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(DESCRIPTORS.len());
    for descriptor in DESCRIPTORS {
        if index.insert(descriptor.id, descriptor).is_some() {
            log::error!(
                target: "tilecss::registry",
                "duplicate pattern id \"{}\"; keeping the later declaration",
                descriptor.id
            );
        }
    }
    index
});

/// Looks up a descriptor by id.
pub fn find(id: &str) -> Option<&'static PatternDescriptor> {
    INDEX.get(id).copied()
}

/// All descriptors in declaration order.
pub fn all() -> &'static [PatternDescriptor] {
    DESCRIPTORS
}

/// Descriptors in `category`, in declaration order.
pub fn list_by_category(category: Category) -> Vec<&'static PatternDescriptor> {
    DESCRIPTORS.iter().filter(|d| d.category == category).collect()
}

/// Categories that contain at least one pattern, in display order.
pub fn list_categories() -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| DESCRIPTORS.iter().any(|d| d.category == *category))
        .collect()
}
