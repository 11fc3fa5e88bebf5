//! Flex grow and shrink distribution.
//!
//! Both loops freeze items that hit a min/max limit and hand the space they could not
//! take to the items still flexible. Each pass freezes at least one item or ends the
//! loop, so there are at most `items.len()` passes. Items are visited in line order.

use log::trace;

use super::super::FlexChild;

/// Distribute positive free space using flex-grow factors, capped by `max_main`.
///
/// Returns the space left undistributed (all factors zero, or every grower capped).
pub fn distribute_grow(free_space: f32, items: &[FlexChild], sizes: &mut [f32]) -> f32 {
    debug_assert!(free_space >= 0.0, "grow called with negative free space");
    let mut remaining = free_space;
    let mut frozen: Vec<bool> = items
        .iter()
        .zip(sizes.iter())
        .map(|(child, size)| child.flex_grow <= 0.0 || *size >= child.max_main)
        .collect();
    for pass in 0..items.len() {
        let sum_grow: f32 = items
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(child, _)| child.flex_grow)
            .sum();
        if sum_grow <= 0.0 || remaining <= 0.0 {
            break;
        }
        let unit = remaining / sum_grow;
        let mut any_frozen = false;
        let mut applied_total = 0.0f32;
        for ((size_ref, child), frozen_ref) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let target = *size_ref + child.flex_grow * unit;
            let grown = if target >= child.max_main {
                *frozen_ref = true;
                any_frozen = true;
                child.max_main
            } else {
                target
            };
            applied_total += grown - *size_ref;
            *size_ref = grown;
        }
        remaining -= applied_total;
        trace!(
            target: "flexbox::main_axis",
            "[FLEX-GROW] pass={pass} unit={unit:.3} applied={applied_total:.3} remaining={remaining:.3}"
        );
        if !any_frozen {
            break;
        }
    }
    remaining.max(0.0)
}

/// Distribute negative free space using `flex_shrink × base_main` weights, floored by
/// `min_main`.
///
/// Returns the deficit that could not be absorbed (as a positive number).
pub fn distribute_shrink(free_space: f32, items: &[FlexChild], sizes: &mut [f32]) -> f32 {
    debug_assert!(free_space <= 0.0, "shrink called with positive free space");
    let mut remaining = -free_space;
    let weights: Vec<f32> = items
        .iter()
        .map(|child| child.flex_shrink * child.base_main.max(0.0))
        .collect();
    let mut frozen: Vec<bool> = weights
        .iter()
        .zip(items.iter().zip(sizes.iter()))
        .map(|(weight, (child, size))| *weight <= 0.0 || *size <= child.min_main)
        .collect();
    for pass in 0..items.len() {
        let sum_weight: f32 = weights
            .iter()
            .zip(frozen.iter())
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(weight, _)| *weight)
            .sum();
        if sum_weight <= 0.0 || remaining <= 0.0 {
            break;
        }
        let mut any_frozen = false;
        let mut applied_total = 0.0f32;
        for (((size_ref, child), frozen_ref), weight) in sizes
            .iter_mut()
            .zip(items)
            .zip(frozen.iter_mut())
            .zip(weights.iter())
        {
            if *frozen_ref {
                continue;
            }
            let target = *size_ref - remaining * (*weight / sum_weight);
            let shrunk = if target <= child.min_main {
                *frozen_ref = true;
                any_frozen = true;
                child.min_main
            } else {
                target
            };
            applied_total += *size_ref - shrunk;
            *size_ref = shrunk;
        }
        remaining -= applied_total;
        trace!(
            target: "flexbox::main_axis",
            "[FLEX-SHRINK] pass={pass} applied={applied_total:.3} remaining={remaining:.3}"
        );
        if !any_frozen {
            break;
        }
    }
    remaining.max(0.0)
}
