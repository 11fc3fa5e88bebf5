//! Main-axis justification and positioning.

use super::super::FlexChild;
use crate::chapter5::JustifyContent;

/// Compute the justify-content leading offset and the extra spacing between adjacent items.
///
/// Negative remaining space is not distributed.
pub fn justify_params(justify: JustifyContent, remaining: f32, item_count: usize) -> (f32, f32) {
    let remaining = remaining.max(0.0);
    match (justify, item_count) {
        (JustifyContent::FlexEnd, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        // FlexStart, and SpaceBetween with a single item
        _ => (0.0, 0.0),
    }
}

/// Parameters for accumulating main-axis offsets along one line.
#[derive(Copy, Clone, Debug)]
pub struct MainOffsetPlan {
    /// Offset of the first item's margin box from main-start.
    pub start_offset: f32,
    /// Extra spacing between adjacent margin boxes.
    pub between_spacing: f32,
}

/// Compute each item's border-box offset from the line's main-start edge.
///
/// Offsets are logical: reverse directions are flipped later by the assembler.
pub fn accumulate_main_offsets(
    plan: MainOffsetPlan,
    items: &[FlexChild],
    sizes: &[f32],
) -> Vec<f32> {
    let mut cursor = plan.start_offset;
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut iter = items.iter().zip(sizes.iter()).peekable();
    while let Some((child, size)) = iter.next() {
        cursor += child.margin_main_start;
        offsets.push(cursor);
        cursor += *size + child.margin_main_end;
        if iter.peek().is_some() {
            cursor += plan.between_spacing;
        }
    }
    offsets
}
