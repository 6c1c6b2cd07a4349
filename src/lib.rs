//! # tessera - procedural background patterns
//!
//! A thin, stateful layer over the [`tilecss`] engine: an edit session that
//! keeps settings consistent, in-memory presets, stylesheet export and a file
//! logger for diagnostics.
//!
//! ```
//! use tessera::PatternSession;
//!
//! let mut session = PatternSession::with_seed(42);
//! session.select_pattern("checkerboard")?;
//! let sheet = tessera::export::to_stylesheet("board", session.settings())?;
//! assert!(sheet.contains(".board {"));
//! # Ok::<(), tessera::TesseraError>(())
//! ```

pub mod error;
pub mod export;
pub mod log_init;
pub mod presets;
pub mod session;

pub use error::{Result, TesseraError};
pub use presets::PresetList;
pub use session::PatternSession;

pub use tilecss::{
    Capabilities, Category, Direction, Generated, PatternDescriptor, PatternError,
    PatternSettings, SettingEdit, SettingField, SettingsPatch, generate, generate_checked,
};
