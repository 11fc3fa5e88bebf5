//! Flex Items — per-item properties and measured sizes
//! See <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use serde::{Deserialize, Serialize};

use crate::chapter5::{AlignItems, Insets};
use crate::error::{ConfigurationError, Dimension};

/// Default `order` value assigned by the host toolkit.
pub const ORDER_DEFAULT: i32 = 1;
/// Default `flex-shrink` factor.
pub const FLEX_SHRINK_DEFAULT: f32 = 1.0;

/// A width/height pair in px.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
    /// No upper limit on either axis.
    pub const UNBOUNDED: Self = Self {
        width: f32::INFINITY,
        height: f32::INFINITY,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-item override of the container's `align-items`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl AlignSelf {
    /// The alignment actually used for an item in a container aligning with `align_items`.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// A single flex item: layout properties plus the natural size supplied by the host's
/// measurement pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexItem {
    /// Reordering key; ties keep original index order.
    pub order: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub align_self: AlignSelf,
    /// Natural (measured) border-box size.
    pub natural_size: Size,
    pub min_size: Size,
    /// Upper size limits; `f32::INFINITY` means none.
    pub max_size: Size,
    pub margin: Insets,
    /// Distance from the top edge to the first baseline, when the item has one.
    pub baseline: Option<f32>,
    /// The width was set explicitly and must not be stretched.
    pub fixed_width: bool,
    /// The height was set explicitly and must not be stretched.
    pub fixed_height: bool,
    /// Gone from layout (`display: none`): takes no space, keeps its order slot.
    pub hidden: bool,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl FlexItem {
    /// An item with the given natural size and default flex properties.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            order: ORDER_DEFAULT,
            flex_grow: 0.0,
            flex_shrink: FLEX_SHRINK_DEFAULT,
            align_self: AlignSelf::Auto,
            natural_size: Size::new(width, height),
            min_size: Size::ZERO,
            max_size: Size::UNBOUNDED,
            margin: Insets {
                left: 0.0,
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
            },
            baseline: None,
            fixed_width: false,
            fixed_height: false,
            hidden: false,
        }
    }

    #[inline]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub const fn with_flex_grow(mut self, flex_grow: f32) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    #[inline]
    pub const fn with_flex_shrink(mut self, flex_shrink: f32) -> Self {
        self.flex_shrink = flex_shrink;
        self
    }

    #[inline]
    pub const fn with_align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }

    #[inline]
    pub const fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    #[inline]
    pub const fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    #[inline]
    pub const fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    #[inline]
    pub const fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    #[inline]
    pub const fn with_fixed_width(mut self) -> Self {
        self.fixed_width = true;
        self
    }

    #[inline]
    pub const fn with_fixed_height(mut self) -> Self {
        self.fixed_height = true;
        self
    }

    #[inline]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Check the item's invariants. `index` is reported back in the error.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for negative flex factors, negative or non-finite
    /// sizes, a min above its max, non-finite margins or an invalid baseline.
    pub fn validate(&self, index: usize) -> Result<(), ConfigurationError> {
        if !self.flex_grow.is_finite() || self.flex_grow < 0.0 {
            return Err(ConfigurationError::InvalidFlexGrow {
                index,
                value: self.flex_grow,
            });
        }
        if !self.flex_shrink.is_finite() || self.flex_shrink < 0.0 {
            return Err(ConfigurationError::InvalidFlexShrink {
                index,
                value: self.flex_shrink,
            });
        }
        for (dimension, natural, min, max) in [
            (
                Dimension::Width,
                self.natural_size.width,
                self.min_size.width,
                self.max_size.width,
            ),
            (
                Dimension::Height,
                self.natural_size.height,
                self.min_size.height,
                self.max_size.height,
            ),
        ] {
            check_size(index, "natural", dimension, natural)?;
            check_size(index, "min", dimension, min)?;
            if max.is_nan() || max < 0.0 {
                return Err(ConfigurationError::InvalidMaxSize {
                    index,
                    dimension,
                    value: max,
                });
            }
            if min > max {
                return Err(ConfigurationError::MinExceedsMax {
                    index,
                    dimension,
                    min,
                    max,
                });
            }
        }
        if !self.margin.is_finite() {
            return Err(ConfigurationError::InvalidMargin { index });
        }
        if let Some(value) = self.baseline
            && (!value.is_finite() || value < 0.0)
        {
            return Err(ConfigurationError::InvalidBaseline { index, value });
        }
        Ok(())
    }
}

fn check_size(
    index: usize,
    field: &'static str,
    dimension: Dimension,
    value: f32,
) -> Result<(), ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidSize {
            index,
            field,
            dimension,
            value,
        })
    }
}

/// Validate a whole item list, reporting the first offending index.
///
/// # Errors
/// Returns the first item's [`ConfigurationError`].
pub fn validate_items(items: &[FlexItem]) -> Result<(), ConfigurationError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate(index))
}

/// Indices (into `items`) of the in-flow items, in the given traversal order.
///
/// Hidden items are skipped; they still occupy their slot in the resolved order.
#[inline]
pub fn collect_flex_items(items: &[FlexItem], order: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(order.len());
    for &index in order {
        if items.get(index).is_some_and(is_flex_item) {
            out.push(index);
        }
    }
    out
}

/// Returns true when the item takes part in layout.
#[inline]
pub const fn is_flex_item(item: &FlexItem) -> bool {
    !item.hidden
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if hidden items are not filtered out of the traversal.
    fn collects_only_visible_items_in_order() {
        let items = [
            FlexItem::new(10.0, 10.0),
            FlexItem::new(10.0, 10.0).with_hidden(true),
            FlexItem::new(10.0, 10.0),
            FlexItem::new(10.0, 10.0),
        ];
        assert_eq!(collect_flex_items(&items, &[3, 1, 0, 2]), vec![3, 0, 2]);
    }

    #[test]
    /// # Panics
    /// Panics if `align-self: auto` does not defer to the container.
    fn align_self_resolution() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(
            AlignSelf::Stretch.resolve(AlignItems::FlexStart),
            AlignItems::Stretch
        );
        assert_eq!(
            AlignSelf::Baseline.resolve(AlignItems::Stretch),
            AlignItems::Baseline
        );
    }

    #[test]
    /// # Panics
    /// Panics if negative flex factors are accepted.
    fn rejects_negative_flex_factors() {
        assert_eq!(
            FlexItem::new(1.0, 1.0).with_flex_grow(-1.0).validate(4),
            Err(ConfigurationError::InvalidFlexGrow {
                index: 4,
                value: -1.0
            })
        );
        assert_eq!(
            FlexItem::new(1.0, 1.0).with_flex_shrink(-0.5).validate(0),
            Err(ConfigurationError::InvalidFlexShrink {
                index: 0,
                value: -0.5
            })
        );
    }

    #[test]
    /// # Panics
    /// Panics if bad sizes or baselines pass validation.
    fn rejects_bad_sizes() {
        assert!(matches!(
            FlexItem::new(-3.0, 1.0).validate(1),
            Err(ConfigurationError::InvalidSize {
                index: 1,
                field: "natural",
                dimension: Dimension::Width,
                ..
            })
        ));
        assert!(matches!(
            FlexItem::new(1.0, 1.0)
                .with_min_size(Size::new(0.0, 30.0))
                .with_max_size(Size::new(f32::INFINITY, 20.0))
                .validate(2),
            Err(ConfigurationError::MinExceedsMax {
                dimension: Dimension::Height,
                ..
            })
        ));
        assert!(matches!(
            FlexItem::new(1.0, 1.0).with_baseline(f32::NAN).validate(0),
            Err(ConfigurationError::InvalidBaseline { .. })
        ));
        let items = [FlexItem::new(1.0, 1.0), FlexItem::new(1.0, f32::NAN)];
        assert!(matches!(
            validate_items(&items),
            Err(ConfigurationError::InvalidSize { index: 1, .. })
        ));
        assert_eq!(FlexItem::default().validate(0), Ok(()));
    }
}
