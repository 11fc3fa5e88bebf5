//! Two-pass layout over a host measurement collaborator.
//!
//! The first pass probes every item under the container's bounds and runs line breaking
//! and main-axis distribution on the result. Items whose flexed main size differs from
//! the probe are measured again with that exact main size; only the cross axis and the
//! result assembly run a second time.

use log::debug;

use super::assemble::FlexLayout;
use super::{cross_space, finish, main_space, resolve_children, run_main_pass};
use crate::chapter5::{AvailableSpace, FlexContainer};
use crate::chapter6::{FlexItem, Size, validate_items};
use crate::chapter7::{Axes, resolve_axes, resolved_order};
use crate::error::{ConfigurationError, Dimension};

/// Main sizes closer than this to the probe are not re-measured.
const REMEASURE_EPSILON: f32 = 1.0 / 64.0;

/// One measurement request for an item.
#[derive(Copy, Clone, Debug)]
pub struct MeasureRequest<'item> {
    /// Index of the item in the caller's slice.
    pub index: usize,
    pub item: &'item FlexItem,
    pub width: AvailableSpace,
    pub height: AvailableSpace,
}

/// The host's answer to a [`MeasureRequest`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Natural border-box size.
    pub size: Size,
    /// Distance from the top edge to the first baseline, if the item has one.
    pub baseline: Option<f32>,
}

impl Measurement {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            baseline: None,
        }
    }

    #[inline]
    pub const fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    fn validate(self, index: usize) -> Result<Self, ConfigurationError> {
        for (dimension, value) in [
            (Dimension::Width, self.size.width),
            (Dimension::Height, self.size.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidMeasurement {
                    index,
                    dimension,
                    value,
                });
            }
        }
        if let Some(value) = self.baseline
            && (!value.is_finite() || value < 0.0)
        {
            return Err(ConfigurationError::InvalidBaseline { index, value });
        }
        Ok(self)
    }
}

/// Host-supplied measurement of item content.
pub trait Measure {
    fn measure(&mut self, request: MeasureRequest<'_>) -> Measurement;
}

impl<F> Measure for F
where
    F: FnMut(MeasureRequest<'_>) -> Measurement,
{
    #[inline]
    fn measure(&mut self, request: MeasureRequest<'_>) -> Measurement {
        self(request)
    }
}

/// Probe extents: the container's content-box bound as an upper limit.
fn probe_space(space: AvailableSpace) -> AvailableSpace {
    space.bound().map_or(AvailableSpace::Unbounded, AvailableSpace::AtMost)
}

fn request<'item>(
    index: usize,
    item: &'item FlexItem,
    axes: Axes,
    main: AvailableSpace,
    cross: AvailableSpace,
) -> MeasureRequest<'item> {
    let (width, height) = if axes.main_is_horizontal {
        (main, cross)
    } else {
        (cross, main)
    };
    MeasureRequest {
        index,
        item,
        width,
        height,
    }
}

/// Compute a layout whose item sizes come from `measure` instead of
/// [`FlexItem::natural_size`].
///
/// Hidden items are never measured. A measured baseline replaces the item's own.
///
/// # Errors
/// Returns [`ConfigurationError`] when the container or an item is malformed, or when
/// `measure` reports a negative or non-finite size or baseline.
pub fn compute_layout_with_measure<M>(
    container: &FlexContainer,
    items: &[FlexItem],
    measure: &mut M,
) -> Result<FlexLayout, ConfigurationError>
where
    M: Measure + ?Sized,
{
    container.validate()?;
    validate_items(items)?;
    let axes = resolve_axes(container.direction, container.wrap);
    let main_probe = probe_space(main_space(container, axes));
    let cross_probe = probe_space(cross_space(container, axes));

    let mut measured: Vec<FlexItem> = items.to_vec();
    for (index, item) in measured.iter_mut().enumerate() {
        if item.hidden {
            continue;
        }
        let result = measure
            .measure(request(index, item, axes, main_probe, cross_probe))
            .validate(index)?;
        item.natural_size = result.size;
        item.baseline = result.baseline.or(item.baseline);
    }
    validate_items(&measured)?;
    let probe_main: Vec<f32> = measured
        .iter()
        .map(|item| axes.main(item.natural_size))
        .collect();

    let order = resolved_order(&measured);
    let mut children = resolve_children(container, &measured, axes);
    let mut main = run_main_pass(container, axes, &measured, &order, &children);

    let mut remeasured = 0usize;
    for (line, line_main) in main.lines.iter().zip(&main.per_line) {
        for (&index, &final_main) in line.items.iter().zip(&line_main.sizes) {
            let (Some(item), Some(child), Some(&probed)) = (
                measured.get_mut(index),
                children.get_mut(index),
                probe_main.get(index),
            ) else {
                continue;
            };
            // compare against what the host reported, not the clamped base size
            if (final_main - probed).abs() < REMEASURE_EPSILON {
                continue;
            }
            let result = measure
                .measure(request(
                    index,
                    item,
                    axes,
                    AvailableSpace::Exact(final_main),
                    cross_probe,
                ))
                .validate(index)?;
            debug!(
                target: "flexbox::measure",
                "[FLEX-MEASURE] item {index}: probe_main={probed:.3} final_main={final_main:.3} cross {:.3} -> {:.3}",
                axes.cross(item.natural_size),
                axes.cross(result.size)
            );
            item.natural_size = if axes.main_is_horizontal {
                Size::new(final_main, result.size.height)
            } else {
                Size::new(result.size.width, final_main)
            };
            item.baseline = result.baseline.or(item.baseline);
            item.validate(index)?;
            let mut refreshed = super::FlexChild::resolve(index, item, axes, container.align_items);
            refreshed.base_main = child.base_main;
            *child = refreshed;
            remeasured += 1;
        }
    }
    debug!(
        target: "flexbox::measure",
        "[FLEX-MEASURE] probed={} remeasured={remeasured}",
        items.iter().filter(|item| !item.hidden).count()
    );
    if remeasured > 0 {
        for line in &mut main.lines {
            line.refresh_cross_size(&children);
        }
    }
    Ok(finish(container, axes, order, &children, &main))
}
