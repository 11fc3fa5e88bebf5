//! Result assembly: logical main/cross placements to physical frames.

use log::debug;
use serde::Serialize;

use super::MainPass;
use super::cross_axis::CrossPass;
use crate::chapter5::FlexContainer;
use crate::chapter6::Size;
use crate::chapter7::Axes;

/// Quantize a layout value to the 1/64 px layout unit.
#[inline]
pub fn quantize_layout(value: f32) -> f32 {
    (value * 64.0).round() / 64.0
}

/// Border-box frame of one item, relative to the container's border-box origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutFrame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutFrame {
    /// Build a frame whose edges are snapped to the layout unit.
    ///
    /// Width and height come from the snapped edges so neighbours sharing an edge
    /// stay flush.
    pub fn snapped(left: f32, top: f32, width: f32, height: f32) -> Self {
        let snapped_left = quantize_layout(left);
        let snapped_top = quantize_layout(top);
        Self {
            left: snapped_left,
            top: snapped_top,
            width: quantize_layout(left + width) - snapped_left,
            height: quantize_layout(top + height) - snapped_top,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Per-line summary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineMetrics {
    pub item_count: usize,
    /// Sum of the items' outer main sizes after flexing.
    pub main_size: f32,
    /// Final cross size (after align-content stretch).
    pub cross_size: f32,
    /// Offset of the line from the content box's top (row) or left (column) edge.
    pub cross_offset: f32,
}

/// Complete output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlexLayout {
    /// Measured border-box size of the container.
    pub size: Size,
    /// One frame per input item, in original index order.
    pub frames: Vec<LayoutFrame>,
    /// One entry per flex line, from the cross-start edge.
    pub lines: Vec<LineMetrics>,
    /// Original indices in layout order.
    pub order: Vec<usize>,
}

impl FlexLayout {
    /// Frame of the item at original index `index`.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<&LayoutFrame> {
        self.frames.get(index)
    }

    /// Original index of the `position`-th item in layout order.
    #[inline]
    pub fn reordered_child_at(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Combine the main and cross passes into physical frames and a measured size.
pub(crate) fn assemble(
    container: &FlexContainer,
    axes: Axes,
    order: Vec<usize>,
    item_count: usize,
    main: &MainPass,
    cross: &CrossPass,
) -> FlexLayout {
    let padding = container.padding;
    let (main_extent, cross_extent, main_inset, cross_inset) = if axes.main_is_horizontal {
        (
            container.width,
            container.height,
            padding.horizontal(),
            padding.vertical(),
        )
    } else {
        (
            container.height,
            container.width,
            padding.vertical(),
            padding.horizontal(),
        )
    };
    let content_main = main
        .per_line
        .iter()
        .map(|line| line.outer_sum)
        .fold(0.0f32, f32::max);
    let measured_main = main_extent.resolve(content_main, main_inset);
    let measured_cross = cross_extent.resolve(cross.content_cross, cross_inset);
    let inner_main = (measured_main - main_inset).max(0.0);
    let inner_cross = (measured_cross - cross_inset).max(0.0);

    let origin = LayoutFrame::snapped(padding.left, padding.top, 0.0, 0.0);
    let mut frames = vec![origin; item_count];
    for (line, line_main) in main.lines.iter().zip(&main.per_line) {
        for ((&index, &main_size), &main_offset) in line
            .items
            .iter()
            .zip(&line_main.sizes)
            .zip(&line_main.offsets)
        {
            let (Some(placement), Some(slot)) = (cross.placements.get(index), frames.get_mut(index))
            else {
                continue;
            };
            let main_pos = if axes.main_reverse {
                inner_main - main_offset - main_size
            } else {
                main_offset
            };
            let cross_pos = if axes.cross_reverse {
                inner_cross - placement.cross_offset - placement.cross_size
            } else {
                placement.cross_offset
            };
            *slot = if axes.main_is_horizontal {
                LayoutFrame::snapped(
                    padding.left + main_pos,
                    padding.top + cross_pos,
                    main_size,
                    placement.cross_size,
                )
            } else {
                LayoutFrame::snapped(
                    padding.left + cross_pos,
                    padding.top + main_pos,
                    placement.cross_size,
                    main_size,
                )
            };
        }
    }

    let lines = main
        .lines
        .iter()
        .zip(&main.per_line)
        .zip(cross.line_sizes.iter().zip(&cross.line_offsets))
        .map(|((line, line_main), (&cross_size, &offset))| LineMetrics {
            item_count: line.item_count,
            main_size: line_main.outer_sum,
            cross_size,
            cross_offset: if axes.cross_reverse {
                inner_cross - offset - cross_size
            } else {
                offset
            },
        })
        .collect();

    let size = axes.to_physical(quantize_layout(measured_main), quantize_layout(measured_cross));
    debug!(
        target: "flexbox::layout",
        "[FLEX-ASSEMBLE] size=({:.3}, {:.3}) items={item_count} lines={}",
        size.width,
        size.height,
        main.lines.len()
    );
    FlexLayout {
        size,
        frames,
        lines,
        order,
    }
}
