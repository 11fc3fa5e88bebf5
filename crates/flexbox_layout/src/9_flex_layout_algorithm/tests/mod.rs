//! Tests for the flex layout algorithm.

use super::*;
use crate::chapter5::{AlignContent, FlexDirection, FlexWrap, Insets, JustifyContent};
use crate::chapter6::{AlignSelf, Size};
use crate::chapter9::assemble::LayoutFrame;

mod baseline_tests;
mod justify_tests;

/// Tolerance for comparing quantized layout values.
pub const EPSILON: f32 = 0.02;

/// Row container with exact extents.
#[inline]
pub fn exact_container(width: f32, height: f32) -> FlexContainer {
    FlexContainer::new(AvailableSpace::Exact(width), AvailableSpace::Exact(height))
}

/// `count` items of the same natural size.
#[inline]
pub fn uniform_items(count: usize, width: f32, height: f32) -> Vec<FlexItem> {
    vec![FlexItem::new(width, height); count]
}

/// Run layout, falling back to an empty result so assertions report the mismatch.
#[inline]
pub fn run(container: &FlexContainer, items: &[FlexItem]) -> FlexLayout {
    compute_layout(container, items).unwrap_or_default()
}

/// Frame of item `index`, or an empty frame when missing.
#[inline]
pub fn frame_at(layout: &FlexLayout, index: usize) -> LayoutFrame {
    layout.frame(index).copied().unwrap_or_default()
}

#[inline]
pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < EPSILON
}

/// Left edges of all frames in original order.
#[inline]
pub fn lefts(layout: &FlexLayout) -> Vec<f32> {
    layout.frames.iter().map(|frame| frame.left).collect()
}

/// Top edges of all frames in original order.
#[inline]
pub fn tops(layout: &FlexLayout) -> Vec<f32> {
    layout.frames.iter().map(|frame| frame.top).collect()
}

#[inline]
pub fn all_approx(actual: &[f32], expected: &[f32]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(&value, &target)| approx(value, target))
}
