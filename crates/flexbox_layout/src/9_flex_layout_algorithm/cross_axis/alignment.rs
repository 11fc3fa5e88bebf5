//! Cross-axis alignment and sizing of items inside their line.
//! See <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use super::super::{FlexChild, clamp};
use super::CrossPlacement;
use super::baseline::LineBaseline;
use crate::chapter5::AlignItems;

/// Place `child` inside a line of `line_cross` px.
///
/// The offset is the border-box cross-start position relative to the line's
/// cross-start edge. Overflowing items are not pushed back inside the line.
pub fn align_in_line(
    child: &FlexChild,
    line_cross: f32,
    baseline: Option<LineBaseline>,
) -> CrossPlacement {
    let margins = child.margin_cross_start + child.margin_cross_end;
    match child.align {
        AlignItems::Stretch if !child.cross_fixed => CrossPlacement {
            cross_size: clamp(line_cross - margins, child.min_cross, child.max_cross),
            cross_offset: child.margin_cross_start,
        },
        AlignItems::FlexEnd => CrossPlacement {
            cross_size: child.cross_size,
            cross_offset: line_cross - child.margin_cross_end - child.cross_size,
        },
        AlignItems::Center => CrossPlacement {
            cross_size: child.cross_size,
            cross_offset: child.margin_cross_start
                + (line_cross - margins - child.cross_size) * 0.5,
        },
        AlignItems::Baseline => {
            let offset = match (baseline, child.baseline) {
                (Some(line), Some(own)) => line.ascent - own,
                _ => child.margin_cross_start,
            };
            CrossPlacement {
                cross_size: child.cross_size,
                cross_offset: offset,
            }
        }
        AlignItems::FlexStart | AlignItems::Stretch => CrossPlacement {
            cross_size: child.cross_size,
            cross_offset: child.margin_cross_start,
        },
    }
}
