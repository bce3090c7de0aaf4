//! Shared layout and physics calculations used by both front ends.
//!
//! Everything here is a pure function of its inputs (plus, for the modal
//! controller, its current state). Front ends call into this module and
//! translate the results into their own primitives; no threshold or formula
//! is repeated elsewhere.

pub mod component_layout;
pub mod drag_physics;
pub mod geometry;
pub mod modal;
pub mod modal_visuals;
pub mod orientation;
pub mod range_math;
pub mod style;
pub mod text_metrics;

pub use component_layout::{
    ActionLayout, BarLayout, ButtonLayout, CountdownLayout, RingLayout, SheetLayout,
    SliderLayout, TextBlockLayout,
};
pub use drag_physics::{
    DismissDecision, DismissEdge, DragPhysics, DragPolicy, DragSample, damped_offset,
    rubber_band, should_commit_dismiss,
};
pub use geometry::{ContentBox, Rect};
pub use modal::{
    AnimationKind, AnimationToken, ModalController, ModalEffect, ModalEvent, ModalSettings,
    ModalState,
};
pub use modal_visuals::ModalVisuals;
pub use orientation::{Orientation, action_frames, choose_orientation};
pub use range_math::{RangeValue, progress, validate_range};
pub use style::{ActionStyle, ProgressStyle, SurfaceStyle, TextStyle};
pub use text_metrics::{
    MonospaceMetrics, RowBounds, TextMeasurer, fitted_height, fitted_rows, line_count,
    preferred_height, preferred_width,
};
