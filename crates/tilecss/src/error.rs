//! Error types for pattern generation and style-text processing.
//!
//! Generation never surfaces these to the caller of
//! [`generate`](crate::generate::generate): the dispatcher converts them into
//! fallback text. They are still public so callers can inspect the
//! side-channel diagnostic returned by
//! [`generate_checked`](crate::generate::generate_checked).

use thiserror::Error;

/// Errors that can occur while generating or parsing pattern style text.
///
/// # Examples
///
/// ```rust
/// use tilecss::generate::try_generate;
/// use tilecss::settings::PatternSettings;
/// use tilecss::PatternError;
///
/// let settings = PatternSettings {
///     pattern_type: "no-such-pattern".into(),
///     ..PatternSettings::default()
/// };
/// let err = try_generate(&settings).unwrap_err();
/// assert!(matches!(err, PatternError::UnknownPattern(_)));
/// assert!(err.is_registry_error());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The settings name a pattern id that is not in the registry.
    #[error("unknown pattern \"{0}\"")]
    UnknownPattern(String),

    /// A descriptor exists but no generator is bound to its id.
    #[error("no generator bound to pattern \"{0}\"")]
    MissingGenerator(String),

    /// A generator failed (returned an error or panicked) while composing.
    #[error("generator \"{id}\" failed: {message}")]
    Generator {
        /// The pattern id whose generator failed.
        id: String,
        /// What went wrong.
        message: String,
    },

    /// A derived length was NaN, infinite, zero or negative.
    #[error("invalid {what}: {value}")]
    InvalidGeometry {
        /// Name of the derived quantity.
        what: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Style text could not be parsed into declarations.
    #[error("style syntax error: {0}")]
    InvalidStyle(String),
}

impl PatternError {
    /// Returns `true` for registry-consistency errors (unknown id, unbound
    /// generator), as opposed to failures raised while a generator ran.
    pub fn is_registry_error(&self) -> bool {
        matches!(self, Self::UnknownPattern(_) | Self::MissingGenerator(_))
    }
}
