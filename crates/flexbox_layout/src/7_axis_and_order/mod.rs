//! Axis resolution and ordering utilities
//! See <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! See <https://www.w3.org/TR/css-flexbox-1/#order-property>

use crate::chapter5::{FlexDirection, FlexWrap, Insets};
use crate::chapter6::{FlexItem, ORDER_DEFAULT, Size};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal (row directions).
    pub main_is_horizontal: bool,
    /// True when main-axis placement runs from the end edge (row-reverse, column-reverse).
    pub main_reverse: bool,
    /// True when lines stack from the far cross edge (wrap-reverse).
    pub cross_reverse: bool,
}

/// Resolve main/cross axes from `flex-direction` and `flex-wrap`.
pub const fn resolve_axes(direction: FlexDirection, wrap: FlexWrap) -> Axes {
    let cross_reverse = matches!(wrap, FlexWrap::WrapReverse);
    match direction {
        FlexDirection::Row => Axes {
            main_is_horizontal: true,
            main_reverse: false,
            cross_reverse,
        },
        FlexDirection::RowReverse => Axes {
            main_is_horizontal: true,
            main_reverse: true,
            cross_reverse,
        },
        FlexDirection::Column => Axes {
            main_is_horizontal: false,
            main_reverse: false,
            cross_reverse,
        },
        FlexDirection::ColumnReverse => Axes {
            main_is_horizontal: false,
            main_reverse: true,
            cross_reverse,
        },
    }
}

impl Axes {
    /// Main-axis component of a physical size.
    #[inline]
    pub const fn main(self, size: Size) -> f32 {
        if self.main_is_horizontal {
            size.width
        } else {
            size.height
        }
    }

    /// Cross-axis component of a physical size.
    #[inline]
    pub const fn cross(self, size: Size) -> f32 {
        if self.main_is_horizontal {
            size.height
        } else {
            size.width
        }
    }

    /// Build a physical size from main/cross components.
    #[inline]
    pub const fn to_physical(self, main: f32, cross: f32) -> Size {
        if self.main_is_horizontal {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Margins at the logical main start and main end of an item.
    #[inline]
    pub const fn main_margins(self, margin: Insets) -> (f32, f32) {
        match (self.main_is_horizontal, self.main_reverse) {
            (true, false) => (margin.left, margin.right),
            (true, true) => (margin.right, margin.left),
            (false, false) => (margin.top, margin.bottom),
            (false, true) => (margin.bottom, margin.top),
        }
    }

    /// Margins at the logical cross start and cross end of an item.
    #[inline]
    pub const fn cross_margins(self, margin: Insets) -> (f32, f32) {
        match (self.main_is_horizontal, self.cross_reverse) {
            (true, false) => (margin.top, margin.bottom),
            (true, true) => (margin.bottom, margin.top),
            (false, false) => (margin.left, margin.right),
            (false, true) => (margin.right, margin.left),
        }
    }

    /// Whether an item stretched along the cross axis keeps its size.
    #[inline]
    pub const fn cross_is_fixed(self, item: &FlexItem) -> bool {
        if self.main_is_horizontal {
            item.fixed_height
        } else {
            item.fixed_width
        }
    }
}

/// Stable ordering key for a flex item: `(order, original_index)`.
///
/// Sorting by this key keeps original order for ties.
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Stable sort of item indices by `order`, preserving original order for ties.
///
/// Hidden items keep their slot: the result is a permutation of `0..items.len()`.
pub fn resolved_order(items: &[FlexItem]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&index| {
        order_key(
            items.get(index).map_or(ORDER_DEFAULT, |item| item.order),
            index,
        )
    });
    indices
}

/// True when the resolved order is the identity permutation, i.e. no `order` value
/// changes the traversal.
pub fn is_identity_order(order: &[usize]) -> bool {
    order
        .iter()
        .enumerate()
        .all(|(position, &index)| position == index)
}
