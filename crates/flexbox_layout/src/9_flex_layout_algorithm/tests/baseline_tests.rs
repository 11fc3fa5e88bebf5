//! Tests for baseline alignment.

use super::*;

fn baseline_items() -> Vec<FlexItem> {
    vec![
        FlexItem::new(50.0, 30.0).with_baseline(10.0),
        FlexItem::new(50.0, 50.0).with_baseline(40.0),
    ]
}

#[test]
/// Items share the line's baseline and the line grows to fit ascent plus descent.
///
/// # Panics
/// Panics if baselines do not line up or the line is too short.
fn baselines_line_up() {
    let _ = env_logger::builder().is_test(true).try_init();
    let container = FlexContainer::new(AvailableSpace::Exact(300.0), AvailableSpace::Unbounded)
        .with_align_items(AlignItems::Baseline);
    let layout = run(&container, &baseline_items());
    let first = frame_at(&layout, 0);
    let second = frame_at(&layout, 1);
    assert!(approx(first.top, 30.0) && approx(second.top, 0.0));
    assert!(approx(first.top + 10.0, second.top + 40.0));
    // ascent 40 + descent 20
    assert!(approx(layout.size.height, 60.0));
    assert!(layout.lines.first().is_some_and(|line| approx(line.cross_size, 60.0)));
}

#[test]
/// Items without a baseline fall back to flex-start.
///
/// # Panics
/// Panics if an item without a baseline is moved off the cross-start edge.
fn missing_baseline_falls_back_to_start() {
    let container = FlexContainer::new(AvailableSpace::Exact(300.0), AvailableSpace::Unbounded)
        .with_align_items(AlignItems::Baseline);
    let items = vec![
        FlexItem::new(50.0, 30.0).with_baseline(25.0),
        FlexItem::new(50.0, 20.0).with_margin(Insets {
            top: 4.0,
            ..Insets::default()
        }),
    ];
    let layout = run(&container, &items);
    assert!(approx(frame_at(&layout, 0).top, 0.0));
    assert!(approx(frame_at(&layout, 1).top, 4.0));
}

#[test]
/// Baselines only apply along a horizontal main axis.
///
/// # Panics
/// Panics if column items are offset by their baselines.
fn column_ignores_baseline() {
    let container = FlexContainer::new(AvailableSpace::Unbounded, AvailableSpace::Exact(300.0))
        .with_direction(FlexDirection::Column)
        .with_align_items(AlignItems::Baseline);
    let layout = run(&container, &baseline_items());
    assert!(all_approx(&lefts(&layout), &[0.0, 0.0]));
    assert!(all_approx(&tops(&layout), &[0.0, 30.0]));
}

#[test]
/// Under wrap-reverse the shared baseline is measured from the bottom edge.
///
/// # Panics
/// Panics if the bottom-relative baselines do not line up.
fn wrap_reverse_aligns_from_bottom() {
    let container = FlexContainer::new(AvailableSpace::Exact(300.0), AvailableSpace::Unbounded)
        .with_wrap(FlexWrap::WrapReverse)
        .with_align_items(AlignItems::Baseline);
    let layout = run(&container, &baseline_items());
    let first = frame_at(&layout, 0);
    let second = frame_at(&layout, 1);
    // 20 px below the first baseline, 10 px below the second
    assert!(approx(first.bottom() - 20.0, second.bottom() - 10.0));
    assert!(approx(second.top, 0.0));
    assert!(approx(layout.size.height, 60.0));
}

#[test]
/// # Panics
/// Panics if the line baseline reference ignores margins.
fn line_baseline_reference() {
    let axes = resolve_axes(FlexDirection::Row, FlexWrap::Nowrap);
    let children: Vec<FlexChild> = [
        FlexItem::new(50.0, 30.0).with_baseline(10.0).with_margin(Insets {
            top: 6.0,
            ..Insets::default()
        }),
        FlexItem::new(50.0, 30.0).with_baseline(12.0),
    ]
    .iter()
    .enumerate()
    .map(|(index, item)| FlexChild::resolve(index, item, axes, AlignItems::Baseline))
    .collect();
    let reference = cross_axis::line_baseline(&[0, 1], &children);
    assert!(reference.is_some_and(|line| approx(line.ascent, 16.0) && approx(line.descent, 20.0)));
    assert!(cross_axis::line_baseline(&[], &children).is_none());
}
