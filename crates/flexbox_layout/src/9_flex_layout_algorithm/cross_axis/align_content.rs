//! Align-content packing logic for multi-line flex containers.
//! See <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use crate::chapter5::AlignContent;

/// Compute align-content start offset and between-spacing for lines.
///
/// Start/End/Center pack the block of lines; SpaceBetween/SpaceAround spread the
/// remaining space like justify-content does along the main axis. Stretch packs from
/// the start here: line growth happens in [`stretch_line_crosses`].
pub fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    content_total: f32,
    line_count: usize,
) -> (f32, f32) {
    let remaining = (container_cross - content_total).max(0.0);
    match (align, line_count) {
        (AlignContent::FlexEnd, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        _ => (0.0, 0.0),
    }
}

/// Grow every line by an equal share of the positive free cross space.
pub fn stretch_line_crosses(container_cross: f32, line_crosses: &[f32]) -> Vec<f32> {
    let mut stretched = line_crosses.to_vec();
    let lines_total: f32 = stretched.iter().sum();
    let free = container_cross - lines_total;
    if free > 0.0 && !stretched.is_empty() {
        let add_each = free / stretched.len() as f32;
        debug!(
            target: "flexbox::cross_axis",
            "[ALIGN-CONTENT] stretch: free={free:.3} add_each={add_each:.3}"
        );
        for value in &mut stretched {
            *value += add_each;
        }
    }
    stretched
}

/// Cross-start offset of each line when packed from `start` with `between` extra
/// spacing between neighbours.
pub fn pack_lines(line_crosses: &[f32], start: f32, between: f32) -> Vec<f32> {
    let mut cursor = start;
    line_crosses
        .iter()
        .map(|size| {
            let offset = cursor;
            cursor += size + between;
            offset
        })
        .collect()
}
