//! Baseline alignment support for flex items.

use super::super::FlexChild;
use crate::chapter5::AlignItems;

/// Shared baseline of one line, measured from the line's cross-start edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineBaseline {
    /// Largest distance from the line's cross-start edge to an item baseline (margins included).
    pub ascent: f32,
    /// Largest distance from an item baseline to its outer cross-end edge.
    pub descent: f32,
}

impl LineBaseline {
    /// Cross extent needed to fit every baseline-aligned item.
    #[inline]
    pub fn extent(self) -> f32 {
        self.ascent + self.descent
    }
}

/// Compute the reference baseline for a line, or `None` when no item aligns by baseline.
pub fn line_baseline(items: &[usize], children: &[FlexChild]) -> Option<LineBaseline> {
    let mut reference: Option<LineBaseline> = None;
    for child in items.iter().filter_map(|&index| children.get(index)) {
        if child.align != AlignItems::Baseline {
            continue;
        }
        let Some(baseline) = child.baseline else {
            continue;
        };
        let ascent = child.margin_cross_start + baseline;
        let descent = child.cross_size - baseline + child.margin_cross_end;
        let current = reference.get_or_insert(LineBaseline {
            ascent,
            descent,
        });
        current.ascent = current.ascent.max(ascent);
        current.descent = current.descent.max(descent);
    }
    reference
}
