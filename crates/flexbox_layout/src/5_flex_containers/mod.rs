//! Flex Containers — container properties, enums and available space
//! See <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Dimension};

/// See <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// See <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

/// Main-axis distribution of leftover space within a line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

/// Container-level cross-axis alignment, used by items whose `align_self` is `Auto`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    #[default]
    Stretch,
}

/// Cross-axis distribution of leftover space across lines.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    #[default]
    Stretch,
}

/// How much room the host offers along one physical axis.
///
/// Values are border-box extents: container padding is carved out of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailableSpace {
    /// The container is exactly this large.
    Exact(f32),
    /// The container may be at most this large and shrinks to its content otherwise.
    AtMost(f32),
    /// No constraint; the container takes its content size.
    #[default]
    Unbounded,
}

impl AvailableSpace {
    /// The upper bound, if any.
    #[inline]
    pub const fn bound(self) -> Option<f32> {
        match self {
            Self::Exact(value) | Self::AtMost(value) => Some(value),
            Self::Unbounded => None,
        }
    }

    /// True when the extent is definite.
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Subtract an inset from the bound, keeping the mode.
    #[inline]
    pub fn deflate(self, inset: f32) -> Self {
        match self {
            Self::Exact(value) => Self::Exact((value - inset).max(0.0)),
            Self::AtMost(value) => Self::AtMost((value - inset).max(0.0)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Resolve the used outer size for content of `content` px plus `inset` px of padding.
    #[inline]
    pub fn resolve(self, content: f32, inset: f32) -> f32 {
        match self {
            Self::Exact(value) => value,
            Self::AtMost(value) => (content + inset).min(value),
            Self::Unbounded => content + inset,
        }
    }

    fn validate(self, dimension: Dimension) -> Result<(), ConfigurationError> {
        match self.bound() {
            Some(value) if !value.is_finite() || value < 0.0 => {
                Err(ConfigurationError::InvalidAvailableSpace { dimension, value })
            }
            _ => Ok(()),
        }
    }
}

/// Edge insets in px, used for container padding and item margins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    /// The same inset on all four edges.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Sum of the left and right insets.
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    pub(crate) fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

/// Flex container configuration. Read-only to the layout algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexContainer {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Horizontal room offered by the host (border-box).
    pub width: AvailableSpace,
    /// Vertical room offered by the host (border-box).
    pub height: AvailableSpace,
    pub padding: Insets,
}

impl FlexContainer {
    #[inline]
    pub const fn new(width: AvailableSpace, height: AvailableSpace) -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: FlexWrap::Nowrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            width,
            height,
            padding: Insets {
                left: 0.0,
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
            },
        }
    }

    #[inline]
    pub const fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub const fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    #[inline]
    pub const fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    #[inline]
    pub const fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    #[inline]
    pub const fn with_align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self
    }

    #[inline]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Check available extents and padding.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for negative or non-finite extents or padding.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.width.validate(Dimension::Width)?;
        self.height.validate(Dimension::Height)?;
        let padding = self.padding;
        if !padding.is_finite()
            || padding.left < 0.0
            || padding.top < 0.0
            || padding.right < 0.0
            || padding.bottom < 0.0
        {
            return Err(ConfigurationError::InvalidPadding);
        }
        Ok(())
    }
}
