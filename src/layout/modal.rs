//! Modal presentation state machine.
//!
//! One controller per modal instance. It owns the [`ModalState`]; the
//! rendering layer reads the state, runs the animations the controller asks
//! for, and reports their completion with the [`AnimationToken`] it was
//! handed. Issuing any new animation invalidates the previous token, so a
//! completion that arrives late is ignored instead of resurrecting an old
//! transition.

use std::time::Duration;

use crate::error::Sanitized;

use super::drag_physics::{DismissEdge, DragPhysics, DragPolicy, DragSample};
use super::geometry::ContentBox;

/// Presentation state of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Idle,
    Presenting,
    Presented,
    /// Following a drag; `offset` is along the dismiss axis.
    DraggingToDismiss {
        offset: f32,
    },
    Dismissing,
    Dismissed,
}

impl ModalState {
    /// Current drag offset along the dismiss axis (0 outside a drag).
    pub fn offset(&self) -> f32 {
        match self {
            ModalState::DraggingToDismiss { offset } => *offset,
            _ => 0.0,
        }
    }

    /// True while any part of the modal is on screen.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Idle | ModalState::Dismissed)
    }
}

/// Ticket identifying one in-flight entrance or exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Entrance,
    Exit,
}

/// What the rendering layer should do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalEffect {
    /// Nothing changed.
    None,
    /// Run an animation, then call [`ModalController::animation_finished`]
    /// with `token`.
    Animate {
        kind: AnimationKind,
        token: AnimationToken,
        duration: Duration,
        from_offset: f32,
    },
    /// Move the content to this dismiss-axis offset immediately.
    Offset(f32),
    /// Spring the content back to rest. Needs no completion report.
    SnapBack { from_offset: f32, duration: Duration },
}

/// Events accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalEvent {
    Show,
    Hide,
    /// Raw screen-space drag delta and velocity.
    DragTick(DragSample),
    DragRelease(DragSample),
    OverlayTapped,
    AnimationFinished(AnimationToken),
}

/// Validated behaviour of one modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalSettings {
    pub entrance_duration: Duration,
    pub exit_duration: Duration,
    pub snap_back_duration: Duration,
    pub policy: DragPolicy,
    pub overlay_tap_dismisses: bool,
    pub dismiss_edge: DismissEdge,
    pub physics: DragPhysics,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            entrance_duration: Duration::from_millis(300),
            exit_duration: Duration::from_millis(250),
            snap_back_duration: Duration::from_millis(200),
            policy: DragPolicy::default(),
            overlay_tap_dismisses: true,
            dismiss_edge: DismissEdge::default(),
            physics: DragPhysics::default(),
        }
    }
}

impl ModalSettings {
    /// Repairs the drag constants. Durations are valid by construction.
    pub fn sanitize(&self) -> Sanitized<ModalSettings> {
        self.physics.sanitize().map(|physics| ModalSettings {
            physics,
            ..*self
        })
    }
}

#[derive(Debug, Clone)]
pub struct ModalController {
    settings: ModalSettings,
    state: ModalState,
    content: ContentBox,
    issued: u64,
    pending: Option<(AnimationToken, AnimationKind)>,
}

impl ModalController {
    /// Creates an idle controller. Invalid drag constants are logged and
    /// replaced before any drag is processed.
    pub fn new(settings: ModalSettings) -> Self {
        Self {
            settings: settings.sanitize().report("modal settings"),
            state: ModalState::Idle,
            content: ContentBox::ZERO,
            issued: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn settings(&self) -> &ModalSettings {
        &self.settings
    }

    /// Extent of the content along the dismiss axis.
    pub fn content_extent(&self) -> f32 {
        self.content.height.max(0.0)
    }

    /// The animation whose completion is currently awaited, if any.
    pub fn pending_animation(&self) -> Option<(AnimationToken, AnimationKind)> {
        self.pending
    }

    /// Records the latest measured content size. A zero box is accepted.
    pub fn update_layout(&mut self, content: ContentBox) {
        self.content = content;
    }

    pub fn handle(&mut self, event: ModalEvent) -> ModalEffect {
        match event {
            ModalEvent::Show => self.show(),
            ModalEvent::Hide => self.hide(),
            ModalEvent::DragTick(s) => self.drag_tick(s.translation, s.velocity),
            ModalEvent::DragRelease(s) => self.drag_release(s.translation, s.velocity),
            ModalEvent::OverlayTapped => self.overlay_tapped(),
            ModalEvent::AnimationFinished(token) => self.animation_finished(token),
        }
    }

    /// Starts presenting. No-op while already on screen.
    pub fn show(&mut self) -> ModalEffect {
        match self.state {
            ModalState::Idle | ModalState::Dismissed | ModalState::Dismissing => {
                self.transition(ModalState::Presenting);
                let token = self.issue(AnimationKind::Entrance);
                ModalEffect::Animate {
                    kind: AnimationKind::Entrance,
                    token,
                    duration: self.settings.entrance_duration,
                    from_offset: 0.0,
                }
            }
            ModalState::Presenting
            | ModalState::Presented
            | ModalState::DraggingToDismiss { .. } => ModalEffect::None,
        }
    }

    /// Starts dismissing. No-op while hidden or already leaving.
    pub fn hide(&mut self) -> ModalEffect {
        match self.state {
            ModalState::Presenting
            | ModalState::Presented
            | ModalState::DraggingToDismiss { .. } => self.begin_dismiss(),
            ModalState::Idle | ModalState::Dismissed | ModalState::Dismissing => {
                ModalEffect::None
            }
        }
    }

    pub fn overlay_tapped(&mut self) -> ModalEffect {
        if !self.settings.overlay_tap_dismisses {
            return ModalEffect::None;
        }
        self.hide()
    }

    /// Feeds one drag update. Only a fully presented modal follows drags.
    pub fn drag_tick(&mut self, translation: f32, velocity: f32) -> ModalEffect {
        match self.state {
            ModalState::Presented | ModalState::DraggingToDismiss { .. } => {
                let offset = self.offset_for(translation, velocity);
                self.state = ModalState::DraggingToDismiss { offset };
                ModalEffect::Offset(offset)
            }
            _ => ModalEffect::None,
        }
    }

    /// Ends a drag: commits to dismissal or snaps back to rest.
    pub fn drag_release(&mut self, translation: f32, velocity: f32) -> ModalEffect {
        if !matches!(
            self.state,
            ModalState::Presented | ModalState::DraggingToDismiss { .. }
        ) {
            return ModalEffect::None;
        }

        let offset = self.offset_for(translation, velocity);
        let velocity = self.settings.dismiss_edge.project(velocity);
        let commit = self.settings.physics.should_commit_dismiss(
            offset,
            self.content_extent(),
            velocity,
            self.settings.policy.dismiss_on_drag,
        );

        if commit {
            self.state = ModalState::DraggingToDismiss { offset };
            return self.begin_dismiss();
        }

        let was_dragging = self.state != ModalState::Presented;
        self.transition(ModalState::Presented);
        if was_dragging || offset != 0.0 {
            ModalEffect::SnapBack {
                from_offset: offset,
                duration: self.settings.snap_back_duration,
            }
        } else {
            ModalEffect::None
        }
    }

    /// Completion report from the rendering layer. Stale tokens are ignored.
    pub fn animation_finished(&mut self, token: AnimationToken) -> ModalEffect {
        let Some((current, kind)) = self.pending else {
            log::trace!("[twinframe] ignoring completion {token:?}: nothing pending");
            return ModalEffect::None;
        };
        if current != token {
            log::trace!("[twinframe] ignoring stale completion {token:?} (awaiting {current:?})");
            return ModalEffect::None;
        }
        self.pending = None;
        match (kind, self.state) {
            (AnimationKind::Entrance, ModalState::Presenting) => {
                self.transition(ModalState::Presented)
            }
            (AnimationKind::Exit, ModalState::Dismissing) => self.transition(ModalState::Dismissed),
            _ => {}
        }
        ModalEffect::None
    }

    fn begin_dismiss(&mut self) -> ModalEffect {
        let from_offset = self.state.offset();
        self.transition(ModalState::Dismissing);
        let token = self.issue(AnimationKind::Exit);
        ModalEffect::Animate {
            kind: AnimationKind::Exit,
            token,
            duration: self.settings.exit_duration,
            from_offset,
        }
    }

    fn offset_for(&self, translation: f32, velocity: f32) -> f32 {
        let edge = self.settings.dismiss_edge;
        let sample = DragSample::new(edge.project(translation), edge.project(velocity));
        self.settings.physics.offset_for(sample, self.settings.policy)
    }

    fn issue(&mut self, kind: AnimationKind) -> AnimationToken {
        self.issued += 1;
        let token = AnimationToken(self.issued);
        self.pending = Some((token, kind));
        token
    }

    fn transition(&mut self, to: ModalState) {
        log::debug!("[twinframe] modal {:?} -> {:?}", self.state, to);
        self.state = to;
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(ModalSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout_modal.rs"]
mod tests;
