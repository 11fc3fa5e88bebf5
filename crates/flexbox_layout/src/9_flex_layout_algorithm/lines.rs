//! Line breaking for multi-line flex containers.
//! See <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::FlexChild;
use super::cross_axis::line_cross::line_cross_size;
use crate::chapter5::{AvailableSpace, FlexWrap};

/// One flex line: handles into the item arena, in resolved order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    /// Indices into the caller's item slice.
    pub items: Vec<usize>,
    /// Sum of the items' hypothetical outer main sizes.
    pub main_size_sum: f32,
    /// Largest outer cross size among the items, before any distribution.
    pub cross_size: f32,
    pub item_count: usize,
}

impl FlexLine {
    fn close(items: Vec<usize>, main_size_sum: f32, children: &[FlexChild]) -> Self {
        let cross_size = line_cross_size(&items, children);
        Self {
            item_count: items.len(),
            items,
            main_size_sum,
            cross_size,
        }
    }

    /// Recompute the natural cross size after items were re-measured.
    pub fn refresh_cross_size(&mut self, children: &[FlexChild]) {
        self.cross_size = line_cross_size(&self.items, children);
    }
}

/// Break in-flow items into lines.
///
/// Items are taken in the order given. A new line starts when the next item's outer
/// hypothetical main size would push the running sum past the bound and the current line
/// already holds an item; an oversize item alone still forms its own line. `Nowrap` and
/// unbounded extents produce a single line.
pub fn break_into_lines(
    in_flow: &[usize],
    children: &[FlexChild],
    main_space: AvailableSpace,
    wrap: FlexWrap,
) -> Vec<FlexLine> {
    let bound = match wrap {
        FlexWrap::Nowrap => None,
        FlexWrap::Wrap | FlexWrap::WrapReverse => main_space.bound(),
    };
    let mut lines: Vec<FlexLine> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut cursor = 0.0f32;
    for &index in in_flow {
        let Some(child) = children.get(index) else {
            continue;
        };
        let size = child.outer_base_main();
        if let Some(limit) = bound
            && !current.is_empty()
            && cursor + size > limit
        {
            debug!(
                target: "flexbox::lines",
                "[FLEX-LINES] break before item {index}: cursor={cursor:.3} size={size:.3} limit={limit:.3}"
            );
            lines.push(FlexLine::close(
                std::mem::take(&mut current),
                cursor,
                children,
            ));
            cursor = 0.0;
        }
        current.push(index);
        cursor += size;
    }
    if !current.is_empty() {
        lines.push(FlexLine::close(current, cursor, children));
    }
    debug!(
        target: "flexbox::lines",
        "[FLEX-LINES] items={} lines={} bound={:?}",
        in_flow.len(),
        lines.len(),
        bound
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter5::AlignItems;
    use crate::chapter6::FlexItem;
    use crate::chapter7::resolve_axes;
    use crate::{FlexDirection, Insets};

    fn children(widths: &[f32]) -> Vec<FlexChild> {
        let axes = resolve_axes(FlexDirection::Row, FlexWrap::Wrap);
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                FlexChild::resolve(
                    index,
                    &FlexItem::new(width, 20.0),
                    axes,
                    AlignItems::FlexStart,
                )
            })
            .collect()
    }

    fn line_items(lines: &[FlexLine]) -> Vec<Vec<usize>> {
        lines.iter().map(|line| line.items.clone()).collect()
    }

    #[test]
    /// # Panics
    /// Panics if the third item does not move to a second line.
    fn wraps_when_bound_exceeded() {
        let kids = children(&[100.0, 100.0, 100.0]);
        let lines =
            break_into_lines(&[0, 1, 2], &kids, AvailableSpace::Exact(250.0), FlexWrap::Wrap);
        assert_eq!(line_items(&lines), vec![vec![0, 1], vec![2]]);
        assert_eq!(lines.first().map(|line| line.item_count), Some(2));
        assert!(lines.first().is_some_and(|line| (line.main_size_sum - 200.0).abs() < 0.001));
        assert!(lines.get(1).is_some_and(|line| (line.cross_size - 20.0).abs() < 0.001));
    }

    #[test]
    /// # Panics
    /// Panics if an exact fit is broken or an oversize item is split from an empty line.
    fn exact_fit_and_oversize_items() {
        let kids = children(&[100.0, 100.0, 400.0, 50.0]);
        let lines =
            break_into_lines(&[0, 1, 2, 3], &kids, AvailableSpace::AtMost(200.0), FlexWrap::Wrap);
        assert_eq!(line_items(&lines), vec![vec![0, 1], vec![2], vec![3]]);
    }

    #[test]
    /// # Panics
    /// Panics if nowrap or unbounded extents produce more than one line.
    fn nowrap_and_unbounded_keep_one_line() {
        let kids = children(&[100.0, 100.0, 100.0]);
        let nowrap =
            break_into_lines(&[0, 1, 2], &kids, AvailableSpace::Exact(150.0), FlexWrap::Nowrap);
        assert_eq!(line_items(&nowrap), vec![vec![0, 1, 2]]);
        let unbounded = break_into_lines(
            &[0, 1, 2],
            &kids,
            AvailableSpace::Unbounded,
            FlexWrap::WrapReverse,
        );
        assert_eq!(line_items(&unbounded), vec![vec![0, 1, 2]]);
        assert!(
            break_into_lines(&[], &kids, AvailableSpace::Exact(10.0), FlexWrap::Wrap).is_empty()
        );
    }

    #[test]
    /// # Panics
    /// Panics if margins are not counted toward the line's main size.
    fn margins_count_toward_breaking() {
        let axes = resolve_axes(FlexDirection::Row, FlexWrap::Wrap);
        let item = FlexItem::new(80.0, 10.0).with_margin(Insets {
            left: 10.0,
            right: 10.0,
            ..Insets::default()
        });
        let kids: Vec<FlexChild> = (0..2)
            .map(|index| FlexChild::resolve(index, &item, axes, AlignItems::FlexStart))
            .collect();
        let lines = break_into_lines(&[0, 1], &kids, AvailableSpace::Exact(190.0), FlexWrap::Wrap);
        assert_eq!(line_items(&lines), vec![vec![0], vec![1]]);
        let fits = break_into_lines(&[0, 1], &kids, AvailableSpace::Exact(200.0), FlexWrap::Wrap);
        assert_eq!(line_items(&fits), vec![vec![0, 1]]);
    }
}
