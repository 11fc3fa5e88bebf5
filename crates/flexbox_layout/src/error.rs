//! Configuration errors raised before any layout work starts.

use thiserror::Error;

/// Which physical axis a size constraint belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

/// Invalid container or item configuration.
///
/// Every variant is detected by `validate()` on the container or item (or by the
/// layout entry points, which validate all inputs first). Layout itself never fails
/// once inputs pass validation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// `flex_grow` was negative or not finite.
    #[error("item {index}: flex-grow must be a finite non-negative number, got {value}")]
    InvalidFlexGrow { index: usize, value: f32 },
    /// `flex_shrink` was negative or not finite.
    #[error("item {index}: flex-shrink must be a finite non-negative number, got {value}")]
    InvalidFlexShrink { index: usize, value: f32 },
    /// A natural or minimum size was negative or not finite.
    #[error("item {index}: {field} {dimension:?} must be finite and non-negative, got {value}")]
    InvalidSize {
        index: usize,
        field: &'static str,
        dimension: Dimension,
        value: f32,
    },
    /// A maximum size was negative or NaN (infinity means "no maximum").
    #[error("item {index}: max {dimension:?} must be non-negative, got {value}")]
    InvalidMaxSize {
        index: usize,
        dimension: Dimension,
        value: f32,
    },
    /// The minimum exceeds the maximum on one axis.
    #[error("item {index}: min {dimension:?} {min} exceeds max {max}")]
    MinExceedsMax {
        index: usize,
        dimension: Dimension,
        min: f32,
        max: f32,
    },
    /// A margin was not finite.
    #[error("item {index}: margins must be finite")]
    InvalidMargin { index: usize },
    /// A baseline offset was negative or not finite.
    #[error("item {index}: baseline must be finite and non-negative, got {value}")]
    InvalidBaseline { index: usize, value: f32 },
    /// A container available extent was negative or not finite.
    #[error("container: available {dimension:?} must be finite and non-negative, got {value}")]
    InvalidAvailableSpace { dimension: Dimension, value: f32 },
    /// Container padding was negative or not finite.
    #[error("container: padding must be finite and non-negative")]
    InvalidPadding,
    /// The host measurement collaborator returned an unusable size.
    #[error("item {index}: measurement returned invalid {dimension:?} {value}")]
    InvalidMeasurement {
        index: usize,
        dimension: Dimension,
        value: f32,
    },
}
