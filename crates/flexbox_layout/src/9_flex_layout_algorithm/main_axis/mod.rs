//! Main-axis distribution for a single line: flexing, then justification.
//! See <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

pub mod flex_algorithm;
pub mod justify;

use log::debug;

use super::FlexChild;
use super::lines::FlexLine;
use crate::chapter5::{AvailableSpace, JustifyContent};
pub use flex_algorithm::{distribute_grow, distribute_shrink};
pub use justify::{MainOffsetPlan, accumulate_main_offsets, justify_params};

/// Main-axis result for one line, in the line's item order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineMainLayout {
    /// Border-box main size of each item after flexing.
    pub sizes: Vec<f32>,
    /// Logical border-box offset of each item from the line's main-start edge.
    pub offsets: Vec<f32>,
    /// Sum of outer main sizes after flexing.
    pub outer_sum: f32,
    /// Main extent the line was distributed into.
    pub extent: f32,
    /// Space left after flexing (negative when the line overflows).
    pub remaining_free_space: f32,
}

/// Flex and justify the items of `line`.
///
/// Only an exact main extent produces free space: bounded and unbounded containers size
/// each line to its own content, so nothing grows or shrinks and justification is a no-op.
pub fn layout_line_main(
    line: &FlexLine,
    children: &[FlexChild],
    main_space: AvailableSpace,
    justify_content: JustifyContent,
) -> LineMainLayout {
    let items: Vec<FlexChild> = line
        .items
        .iter()
        .filter_map(|&index| children.get(index).copied())
        .collect();
    let mut sizes: Vec<f32> = items.iter().map(|child| child.base_main).collect();
    let extent = match main_space {
        AvailableSpace::Exact(value) => value,
        AvailableSpace::AtMost(_) | AvailableSpace::Unbounded => line.main_size_sum,
    };
    let free_space = extent - line.main_size_sum;
    if free_space > 0.0 {
        let leftover = distribute_grow(free_space, &items, &mut sizes);
        debug!(
            target: "flexbox::main_axis",
            "[FLEX-GROW] free_space={free_space:.3} leftover={leftover:.3}"
        );
    } else if free_space < 0.0 {
        let deficit = distribute_shrink(free_space, &items, &mut sizes);
        debug!(
            target: "flexbox::main_axis",
            "[FLEX-SHRINK] free_space={free_space:.3} deficit={deficit:.3}"
        );
    }
    let outer_sum: f32 = items
        .iter()
        .zip(sizes.iter())
        .map(|(child, size)| *size + child.main_margins())
        .sum();
    let remaining_free_space = extent - outer_sum;
    let (start_offset, between_spacing) =
        justify_params(justify_content, remaining_free_space, items.len());
    debug!(
        target: "flexbox::main_axis",
        "[FLEX-JUSTIFY] justify={justify_content:?} extent={extent:.3} outer_sum={outer_sum:.3} start_offset={start_offset:.3} between_spacing={between_spacing:.3}"
    );
    let offsets = accumulate_main_offsets(
        MainOffsetPlan {
            start_offset,
            between_spacing,
        },
        &items,
        &sizes,
    );
    LineMainLayout {
        sizes,
        offsets,
        outer_sum,
        extent,
        remaining_free_space,
    }
}
