//! Drag-to-dismiss physics: rubber-band damping and the commit decision.
//!
//! All values are measured along the dismiss axis, where a positive
//! translation moves the content toward dismissal. Use
//! [`DismissEdge::project`] to turn raw gesture deltas into that frame.

use serde::{Deserialize, Serialize};

use crate::error::{Sanitized, non_negative, positive};

/// Distance the rubber band asymptotically approaches.
pub const DEFAULT_DAMPING_DISTANCE: f32 = 20.0;

/// Resistance coefficient of the rubber band.
pub const DEFAULT_DAMPING_COEFFICIENT: f32 = 0.2;

/// Release velocity (points per second) above which a drag always commits.
pub const DEFAULT_COMMIT_VELOCITY: f32 = 250.0;

/// Fraction of the content extent a drag must exceed to commit.
pub const DEFAULT_COMMIT_FRACTION: f32 = 0.5;

/// Edge a sheet leaves through when dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DismissEdge {
    #[default]
    Bottom,
    Top,
}

impl DismissEdge {
    /// Projects a raw vertical delta onto the dismiss axis.
    pub fn project(self, raw: f32) -> f32 {
        match self {
            DismissEdge::Bottom => raw,
            DismissEdge::Top => -raw,
        }
    }

    /// Converts a dismiss-axis offset back into a screen-space delta.
    pub fn unproject(self, offset: f32) -> f32 {
        // The projection is its own inverse.
        self.project(offset)
    }
}

/// One gesture update, already projected onto the dismiss axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    pub translation: f32,
    pub velocity: f32,
}

impl DragSample {
    pub fn new(translation: f32, velocity: f32) -> Self {
        Self {
            translation,
            velocity,
        }
    }

    pub fn is_dismiss_direction(&self) -> bool {
        self.translation >= 0.0
    }
}

/// Which drags a modal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPolicy {
    /// Content follows the finger toward the dismiss edge and may commit.
    pub dismiss_on_drag: bool,
    /// Content gives a damped response to drags it would otherwise ignore.
    pub free_drag: bool,
}

impl Default for DragPolicy {
    fn default() -> Self {
        Self {
            dismiss_on_drag: true,
            free_drag: true,
        }
    }
}

/// Outcome of a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissDecision {
    Commit,
    Cancel,
}

/// Tunable drag constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPhysics {
    pub damping_distance: f32,
    pub damping_coefficient: f32,
    pub commit_velocity: f32,
    pub commit_fraction: f32,
}

impl Default for DragPhysics {
    fn default() -> Self {
        Self {
            damping_distance: DEFAULT_DAMPING_DISTANCE,
            damping_coefficient: DEFAULT_DAMPING_COEFFICIENT,
            commit_velocity: DEFAULT_COMMIT_VELOCITY,
            commit_fraction: DEFAULT_COMMIT_FRACTION,
        }
    }
}

impl DragPhysics {
    /// Sub-linear response approaching `damping_distance` as `t` grows.
    ///
    /// `(1 - 1 / (t * coefficient / distance + 1)) * distance`. Negative
    /// input is treated as zero; non-positive constants yield zero.
    ///
    /// Strictly increasing only while `t * coefficient / distance` is small
    /// enough for `f32` to resolve the reciprocal, about `t < 1e6` with the
    /// defaults. Past that the result saturates at `distance`.
    pub fn rubber_band(&self, t: f32) -> f32 {
        let d = self.damping_distance;
        let c = self.damping_coefficient;
        if !(d > 0.0) || !(c > 0.0) {
            return 0.0;
        }
        let t = t.max(0.0);
        (1.0 - 1.0 / ((t * c / d) + 1.0)) * d
    }

    /// Repairs constants that would make the physics produce NaN or flip
    /// sign. Damping constants must be positive and fall back to their
    /// defaults; commit thresholds clamp to zero.
    pub fn sanitize(&self) -> Sanitized<DragPhysics> {
        let mut errors = Vec::new();
        let value = DragPhysics {
            damping_distance: positive(
                "damping_distance",
                self.damping_distance,
                DEFAULT_DAMPING_DISTANCE,
                &mut errors,
            ),
            damping_coefficient: positive(
                "damping_coefficient",
                self.damping_coefficient,
                DEFAULT_DAMPING_COEFFICIENT,
                &mut errors,
            ),
            commit_velocity: non_negative("commit_velocity", self.commit_velocity, &mut errors),
            commit_fraction: non_negative("commit_fraction", self.commit_fraction, &mut errors),
        };
        Sanitized { value, errors }
    }

    /// Converts a raw translation into the visual offset of the content.
    ///
    /// Toward the dismiss edge the content follows 1:1 when dismiss-on-drag
    /// is enabled and rubber-bands when only free drag is. Away from it the
    /// content rubber-bands backwards under free drag and stays put
    /// otherwise.
    pub fn damped_offset(
        &self,
        translation: f32,
        is_dismiss_direction: bool,
        policy: DragPolicy,
    ) -> f32 {
        if is_dismiss_direction {
            if policy.dismiss_on_drag {
                translation
            } else if policy.free_drag {
                self.rubber_band(translation.abs())
            } else {
                0.0
            }
        } else if policy.free_drag {
            -self.rubber_band(translation.abs())
        } else {
            0.0
        }
    }

    /// [`Self::damped_offset`] for a sample whose sign gives the direction.
    pub fn offset_for(&self, sample: DragSample, policy: DragPolicy) -> f32 {
        self.damped_offset(sample.translation, sample.is_dismiss_direction(), policy)
    }

    /// Whether a released drag turns into a dismissal.
    ///
    /// A displacement beyond `commit_fraction` of the content extent or a
    /// flick faster than `commit_velocity` commits; either suffices.
    pub fn should_commit_dismiss(
        &self,
        offset: f32,
        content_extent: f32,
        velocity: f32,
        dismiss_on_drag: bool,
    ) -> bool {
        if !dismiss_on_drag {
            return false;
        }
        offset.abs() > content_extent * self.commit_fraction || velocity > self.commit_velocity
    }

    pub fn decide(
        &self,
        offset: f32,
        content_extent: f32,
        velocity: f32,
        dismiss_on_drag: bool,
    ) -> DismissDecision {
        if self.should_commit_dismiss(offset, content_extent, velocity, dismiss_on_drag) {
            DismissDecision::Commit
        } else {
            DismissDecision::Cancel
        }
    }
}

/// [`DragPhysics::rubber_band`] with the default constants.
pub fn rubber_band(t: f32) -> f32 {
    DragPhysics::default().rubber_band(t)
}

/// [`DragPhysics::damped_offset`] with the default constants.
pub fn damped_offset(translation: f32, is_dismiss_direction: bool, policy: DragPolicy) -> f32 {
    DragPhysics::default().damped_offset(translation, is_dismiss_direction, policy)
}

/// [`DragPhysics::should_commit_dismiss`] with the default constants.
pub fn should_commit_dismiss(
    offset: f32,
    content_extent: f32,
    velocity: f32,
    dismiss_on_drag: bool,
) -> bool {
    DragPhysics::default().should_commit_dismiss(offset, content_extent, velocity, dismiss_on_drag)
}
