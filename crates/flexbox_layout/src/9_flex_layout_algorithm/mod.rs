//! Flex layout algorithm: line breaking, main-axis distribution, cross-axis distribution and
//! result assembly.
//! See <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use log::debug;

use crate::chapter5::{AlignItems, AvailableSpace, FlexContainer};
use crate::chapter6::{FlexItem, collect_flex_items, validate_items};
use crate::chapter7::{Axes, is_identity_order, resolve_axes, resolved_order};
use crate::error::ConfigurationError;

pub mod assemble;
pub mod cross_axis;
pub mod lines;
pub mod main_axis;
pub mod measure;

#[cfg(test)]
mod tests;

use assemble::{FlexLayout, assemble};
use cross_axis::distribute_cross;
use lines::{FlexLine, break_into_lines};
use main_axis::{LineMainLayout, layout_line_main};

/// Per-pass view of one item, resolved against the container's axes.
///
/// Built once per layout pass from the caller's [`FlexItem`]; all later stages read
/// only this record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    /// Index of the item in the caller's slice.
    pub index: usize,
    /// Hypothetical main size: natural main size clamped by min/max.
    pub base_main: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    pub margin_main_start: f32,
    pub margin_main_end: f32,
    /// Natural cross size clamped by min/max.
    pub cross_size: f32,
    pub min_cross: f32,
    pub max_cross: f32,
    pub margin_cross_start: f32,
    pub margin_cross_end: f32,
    /// Effective alignment (`align-self` resolved against `align-items`).
    pub align: AlignItems,
    /// Distance from the border-box cross-start edge to the baseline; set only for
    /// baseline-aligned items.
    pub baseline: Option<f32>,
    /// The cross size is fixed and must not be stretched.
    pub cross_fixed: bool,
}

impl FlexChild {
    /// Resolve `item` against the container axes and default alignment.
    pub fn resolve(index: usize, item: &FlexItem, axes: Axes, align_items: AlignItems) -> Self {
        let min_main = axes.main(item.min_size);
        let max_main = axes.main(item.max_size).max(min_main);
        let min_cross = axes.cross(item.min_size);
        let max_cross = axes.cross(item.max_size).max(min_cross);
        let (margin_main_start, margin_main_end) = axes.main_margins(item.margin);
        let (margin_cross_start, margin_cross_end) = axes.cross_margins(item.margin);
        let cross_size = clamp(axes.cross(item.natural_size), min_cross, max_cross);
        let mut align = item.align_self.resolve(align_items);
        let baseline = resolve_baseline(align, axes, item.baseline, cross_size);
        if align == AlignItems::Baseline && baseline.is_none() {
            align = AlignItems::FlexStart;
        }
        Self {
            index,
            base_main: clamp(axes.main(item.natural_size), min_main, max_main),
            flex_grow: item.flex_grow,
            flex_shrink: item.flex_shrink,
            min_main,
            max_main,
            margin_main_start,
            margin_main_end,
            cross_size,
            min_cross,
            max_cross,
            margin_cross_start,
            margin_cross_end,
            align,
            baseline,
            cross_fixed: axes.cross_is_fixed(item),
        }
    }

    /// Hypothetical outer main size (margins included).
    #[inline]
    pub fn outer_base_main(&self) -> f32 {
        self.base_main + self.margin_main_start + self.margin_main_end
    }

    /// Outer cross size before stretching.
    #[inline]
    pub fn outer_cross(&self) -> f32 {
        self.cross_size + self.margin_cross_start + self.margin_cross_end
    }

    /// Sum of the main-axis margins.
    #[inline]
    pub fn main_margins(&self) -> f32 {
        self.margin_main_start + self.margin_main_end
    }
}

/// Baselines only exist along a vertical cross axis; under wrap-reverse the distance is
/// measured from the bottom edge.
fn resolve_baseline(
    align: AlignItems,
    axes: Axes,
    baseline: Option<f32>,
    cross_size: f32,
) -> Option<f32> {
    if align != AlignItems::Baseline || !axes.main_is_horizontal {
        return None;
    }
    let from_top = baseline?.min(cross_size);
    Some(if axes.cross_reverse {
        cross_size - from_top
    } else {
        from_top
    })
}

/// Clamp a value between min and max inclusive.
#[inline]
pub const fn clamp(value: f32, min_v: f32, max_v: f32) -> f32 {
    value.max(min_v).min(max_v)
}

/// Output of the main-axis stages, reused when only the cross axis is recomputed.
#[derive(Clone, Debug)]
pub(crate) struct MainPass {
    pub lines: Vec<FlexLine>,
    pub per_line: Vec<LineMainLayout>,
}

/// Compute a full layout for `items` inside `container`.
///
/// All inputs are validated first; once they pass, layout always succeeds.
///
/// # Errors
/// Returns [`ConfigurationError`] when the container or any item is malformed.
pub fn compute_layout(
    container: &FlexContainer,
    items: &[FlexItem],
) -> Result<FlexLayout, ConfigurationError> {
    container.validate()?;
    validate_items(items)?;
    Ok(layout_validated(container, items))
}

/// Layout for inputs that already passed validation.
pub(crate) fn layout_validated(container: &FlexContainer, items: &[FlexItem]) -> FlexLayout {
    let axes = resolve_axes(container.direction, container.wrap);
    let order = resolved_order(items);
    let children = resolve_children(container, items, axes);
    let main = run_main_pass(container, axes, items, &order, &children);
    finish(container, axes, order, &children, &main)
}

/// Resolve every item into a [`FlexChild`], indexed like `items`.
pub(crate) fn resolve_children(
    container: &FlexContainer,
    items: &[FlexItem],
    axes: Axes,
) -> Vec<FlexChild> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| FlexChild::resolve(index, item, axes, container.align_items))
        .collect()
}

/// Order → lines → per-line main-axis sizes and offsets.
pub(crate) fn run_main_pass(
    container: &FlexContainer,
    axes: Axes,
    items: &[FlexItem],
    order: &[usize],
    children: &[FlexChild],
) -> MainPass {
    let in_flow = collect_flex_items(items, order);
    debug!(
        target: "flexbox::layout",
        "[FLEX-LAYOUT] items={} in_flow={} reordered={} direction={:?} wrap={:?}",
        items.len(),
        in_flow.len(),
        !is_identity_order(order),
        container.direction,
        container.wrap
    );
    let space = main_space(container, axes);
    let lines = break_into_lines(&in_flow, children, space, container.wrap);
    let per_line = lines
        .iter()
        .map(|line| layout_line_main(line, children, space, container.justify_content))
        .collect();
    MainPass { lines, per_line }
}

/// Cross-axis distribution and result assembly over a finished main pass.
pub(crate) fn finish(
    container: &FlexContainer,
    axes: Axes,
    order: Vec<usize>,
    children: &[FlexChild],
    main: &MainPass,
) -> FlexLayout {
    let cross = distribute_cross(container, axes, &main.lines, children);
    assemble(container, axes, order, children.len(), main, &cross)
}

/// The container's content-box room along the main axis.
pub(crate) fn main_space(container: &FlexContainer, axes: Axes) -> AvailableSpace {
    if axes.main_is_horizontal {
        container.width.deflate(container.padding.horizontal())
    } else {
        container.height.deflate(container.padding.vertical())
    }
}

/// The container's content-box room along the cross axis.
pub(crate) fn cross_space(container: &FlexContainer, axes: Axes) -> AvailableSpace {
    if axes.main_is_horizontal {
        container.height.deflate(container.padding.vertical())
    } else {
        container.width.deflate(container.padding.horizontal())
    }
}
