//! # tilecss - procedural background patterns as CSS
//!
//! Turns an abstract description of a texture (a pattern family plus numeric
//! and color parameters) into deterministic CSS background declarations:
//! layered gradients, repeating tiles and embedded SVG images.
//!
//! - **Registry**: a static catalog of [`PatternDescriptor`]s with capability flags
//! - **Settings**: the flat [`PatternSettings`] record every generator consumes
//! - **Generation**: [`generate`] dispatches to one of 30 generators and never fails
//! - **Clamping / randomization**: keep interdependent fields consistent
//!
//! ## Quick Start
//!
//! ```rust
//! use tilecss::{generate, PatternSettings};
//!
//! let settings = PatternSettings {
//!     pattern_type: "dots".into(),
//!     pattern_size: 32,
//!     dot_size: 4,
//!     opacity: 0.8,
//!     ..PatternSettings::default()
//! };
//!
//! let css = generate(&settings);
//! assert!(css.contains("radial-gradient"));
//! assert!(css.contains("background-size: 32px 32px;"));
//! ```
//!
//! ## Modules
//!
//! - [`color`]: hex color helpers (`with_alpha`, `adjust_lightness`)
//! - [`registry`]: pattern descriptors, categories and capability flags
//! - [`settings`]: the settings record, partial overrides and edit patches
//! - [`clamp`]: cross-field invariants and single-field edit handling
//! - [`randomize`]: random but consistent settings
//! - [`style`]: layered style model, declaration parser and SVG encoding
//! - [`generate`]: the dispatcher and the per-pattern generators
//! - [`error`]: error types

pub mod clamp;
pub mod color;
pub mod error;
pub mod generate;
pub mod randomize;
pub mod registry;
pub mod settings;
pub mod style;

pub use error::PatternError;
pub use generate::{Generated, generate, generate_checked};
pub use registry::{Capabilities, Category, PatternDescriptor};
pub use settings::{Direction, PatternSettings, SettingEdit, SettingField, SettingsPatch};
