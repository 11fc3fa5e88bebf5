//! Natural cross size of a flex line.
//! See <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>

use super::super::FlexChild;
use super::baseline::line_baseline;

/// Largest outer cross size among `items`, widened to fit the shared baseline of
/// baseline-aligned items. Stretching plays no part here.
pub fn line_cross_size(items: &[usize], children: &[FlexChild]) -> f32 {
    let tallest = items
        .iter()
        .filter_map(|&index| children.get(index))
        .map(FlexChild::outer_cross)
        .fold(0.0f32, f32::max);
    line_baseline(items, children).map_or(tallest, |baseline| tallest.max(baseline.extent()))
}
