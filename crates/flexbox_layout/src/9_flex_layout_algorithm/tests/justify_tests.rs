//! Tests for justify-content.

use super::*;
use crate::chapter9::main_axis::justify_params;

fn justified(justify: JustifyContent) -> FlexLayout {
    let container = exact_container(300.0, 50.0).with_justify_content(justify);
    run(&container, &uniform_items(3, 50.0, 10.0))
}

#[test]
/// # Panics
/// Panics if the start offset or spacing is wrong for any mode.
fn params_per_mode() {
    let (start, between) = justify_params(JustifyContent::SpaceAround, 60.0, 3);
    assert!(approx(start, 10.0) && approx(between, 20.0));
    let (start_single, between_single) = justify_params(JustifyContent::SpaceBetween, 60.0, 1);
    assert!(approx(start_single, 0.0) && approx(between_single, 0.0));
    let (start_center, _) = justify_params(JustifyContent::Center, 40.0, 2);
    assert!(approx(start_center, 20.0));
    let (start_end, _) = justify_params(JustifyContent::FlexEnd, -25.0, 2);
    assert!(approx(start_end, 0.0));
}

#[test]
/// # Panics
/// Panics if items are not packed against the expected edge.
fn start_end_center() {
    assert!(all_approx(&lefts(&justified(JustifyContent::FlexStart)), &[0.0, 50.0, 100.0]));
    assert!(all_approx(&lefts(&justified(JustifyContent::FlexEnd)), &[150.0, 200.0, 250.0]));
    assert!(all_approx(&lefts(&justified(JustifyContent::Center)), &[75.0, 125.0, 175.0]));
}

#[test]
/// Space-between leaves no leading or trailing gap.
///
/// # Panics
/// Panics if the outer items are not flush with the container edges.
fn space_between() {
    let layout = justified(JustifyContent::SpaceBetween);
    assert!(all_approx(&lefts(&layout), &[0.0, 125.0, 250.0]));
    assert!(approx(frame_at(&layout, 2).right(), 300.0));
}

#[test]
/// Space-around gives the outer edges half of an inner gap.
///
/// # Panics
/// Panics if the edge gaps are not half the inner gaps.
fn space_around() {
    let layout = justified(JustifyContent::SpaceAround);
    // remaining 150: edges 25, inner gaps 50
    assert!(all_approx(&lefts(&layout), &[25.0, 125.0, 225.0]));
}

#[test]
/// Main-axis margins are part of the packed outer size.
///
/// # Panics
/// Panics if margins are ignored when packing.
fn margins_offset_items() {
    let container = exact_container(300.0, 50.0).with_justify_content(JustifyContent::FlexEnd);
    let item = FlexItem::new(50.0, 10.0).with_margin(Insets {
        left: 10.0,
        right: 10.0,
        ..Insets::default()
    });
    let layout = run(&container, &[item, item]);
    // outer sum 140, start 160
    assert!(all_approx(&lefts(&layout), &[170.0, 240.0]));
}

#[test]
/// Overflowing lines are not justified backwards.
///
/// # Panics
/// Panics if a centered overflowing line starts before the content edge.
fn overflow_is_not_distributed() {
    let container = exact_container(100.0, 50.0).with_justify_content(JustifyContent::Center);
    let items = uniform_items(2, 80.0, 10.0)
        .into_iter()
        .map(|item| item.with_flex_shrink(0.0))
        .collect::<Vec<_>>();
    let layout = run(&container, &items);
    assert!(all_approx(&lefts(&layout), &[0.0, 80.0]));
}
