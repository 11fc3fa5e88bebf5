//! CSS Flexible Box Layout Module Level 1 — a standalone, stateless flex layout engine.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Hosts describe a container and its items in px, optionally supply a measurement
//! collaborator, and receive one frame per item plus the container's measured size.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §5 — Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §9 — Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
/// Line breaking, main/cross distribution and result assembly (§9)
mod chapter9;

pub mod error;

pub use chapter5::{
    AlignContent, AlignItems, AvailableSpace, FlexContainer, FlexDirection, FlexWrap, Insets,
    JustifyContent,
};
pub use chapter6::{AlignSelf, FLEX_SHRINK_DEFAULT, FlexItem, ORDER_DEFAULT, Size};
pub use chapter7::{Axes, order_key, resolve_axes, resolved_order};
pub use chapter9::assemble::{FlexLayout, LayoutFrame, LineMetrics, quantize_layout};
pub use chapter9::{FlexChild, compute_layout};
pub use chapter9::measure::{Measure, MeasureRequest, Measurement, compute_layout_with_measure};
pub use error::{ConfigurationError, Dimension};
