//! Cross-axis distribution: line sizing, align-content, and per-item alignment.
//! See <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

pub mod align_content;
pub mod alignment;
pub mod baseline;
pub mod line_cross;

use log::debug;

use super::lines::FlexLine;
use super::{FlexChild, cross_space};
use crate::chapter5::{AlignContent, AvailableSpace, FlexContainer, FlexWrap};
use crate::chapter7::Axes;
pub use align_content::{align_content_params, pack_lines, stretch_line_crosses};
pub use alignment::align_in_line;
pub use baseline::line_baseline;

/// Cross-axis size and offset for an item.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CrossPlacement {
    /// Border-box cross size.
    pub cross_size: f32,
    /// Border-box offset from the logical cross-start edge.
    pub cross_offset: f32,
}

/// Cross-axis result for every line and item, in logical coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossPass {
    /// Indexed like the caller's items; hidden items keep the default placement.
    pub placements: Vec<CrossPlacement>,
    /// Final cross size of each line.
    pub line_sizes: Vec<f32>,
    /// Offset of each line from the content box's logical cross-start edge.
    pub line_offsets: Vec<f32>,
    /// Cross extent occupied by the lines.
    pub content_cross: f32,
}

/// Size lines, distribute free cross space between them and align every item.
pub fn distribute_cross(
    container: &FlexContainer,
    axes: Axes,
    lines: &[FlexLine],
    children: &[FlexChild],
) -> CrossPass {
    let natural: Vec<f32> = lines.iter().map(|line| line.cross_size).collect();
    let (line_sizes, line_offsets) = match cross_space(container, axes) {
        AvailableSpace::Exact(inner) if container.wrap == FlexWrap::Nowrap && lines.len() == 1 => {
            (vec![inner], vec![0.0])
        }
        AvailableSpace::Exact(inner) => {
            let sizes = if container.align_content == AlignContent::Stretch {
                stretch_line_crosses(inner, &natural)
            } else {
                natural
            };
            let total: f32 = sizes.iter().sum();
            let (start, between) =
                align_content_params(container.align_content, inner, total, sizes.len());
            debug!(
                target: "flexbox::cross_axis",
                "[ALIGN-CONTENT] mode={:?} container_cross={inner:.3} lines_total={total:.3} line_count={} start={start:.3} between={between:.3}",
                container.align_content,
                sizes.len()
            );
            let offsets = pack_lines(&sizes, start, between);
            (sizes, offsets)
        }
        AvailableSpace::AtMost(_) | AvailableSpace::Unbounded => {
            let offsets = pack_lines(&natural, 0.0, 0.0);
            (natural, offsets)
        }
    };

    let mut placements = vec![CrossPlacement::default(); children.len()];
    for ((line, &line_size), &line_offset) in lines.iter().zip(&line_sizes).zip(&line_offsets) {
        let baseline = line_baseline(&line.items, children);
        for &index in &line.items {
            let (Some(child), Some(slot)) = (children.get(index), placements.get_mut(index)) else {
                continue;
            };
            let placed = align_in_line(child, line_size, baseline);
            *slot = CrossPlacement {
                cross_size: placed.cross_size,
                cross_offset: line_offset + placed.cross_offset,
            };
        }
    }
    let content_cross = line_sizes
        .iter()
        .zip(&line_offsets)
        .map(|(size, offset)| offset + size)
        .fold(0.0f32, f32::max);
    debug!(
        target: "flexbox::cross_axis",
        "[CROSS-PASS] lines={} content_cross={content_cross:.3}",
        line_sizes.len()
    );
    CrossPass {
        placements,
        line_sizes,
        line_offsets,
        content_cross,
    }
}
