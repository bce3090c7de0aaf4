//! Visual targets derived from a [`ModalState`].

use super::drag_physics::DismissEdge;
use super::geometry::Rect;
use super::modal::ModalState;

/// Where the overlay and content should be (or be animating to).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalVisuals {
    pub overlay_opacity: f32,
    /// Screen-space vertical offset of the content from its rest position.
    pub content_offset: f32,
    pub visible: bool,
    /// Whether the content accepts input.
    pub interactive: bool,
}

impl ModalVisuals {
    /// Derives visuals for `state`.
    ///
    /// Hidden and leaving content is parked one `content_extent` past its
    /// dismiss edge. While dragging toward that edge the overlay fades
    /// linearly with the covered fraction of the extent.
    pub fn derive(state: ModalState, content_extent: f32, edge: DismissEdge) -> Self {
        let extent = content_extent.max(0.0);
        let parked = edge.unproject(extent);
        match state {
            ModalState::Idle | ModalState::Dismissed => ModalVisuals {
                overlay_opacity: 0.0,
                content_offset: parked,
                visible: false,
                interactive: false,
            },
            ModalState::Presenting => ModalVisuals {
                overlay_opacity: 1.0,
                content_offset: 0.0,
                visible: true,
                interactive: false,
            },
            ModalState::Presented => ModalVisuals {
                overlay_opacity: 1.0,
                content_offset: 0.0,
                visible: true,
                interactive: true,
            },
            ModalState::DraggingToDismiss { offset } => ModalVisuals {
                overlay_opacity: drag_overlay_opacity(offset, extent),
                content_offset: edge.unproject(offset),
                visible: true,
                interactive: true,
            },
            ModalState::Dismissing => ModalVisuals {
                overlay_opacity: 0.0,
                content_offset: parked,
                visible: true,
                interactive: false,
            },
        }
    }
}

impl ModalVisuals {
    /// Frame of the content inside `viewport`, including the current offset.
    ///
    /// At rest the content is anchored to its dismiss edge.
    pub fn content_frame(&self, viewport: Rect, content_height: f32, edge: DismissEdge) -> Rect {
        let h = content_height.clamp(0.0, viewport.h.max(0.0));
        let rest_y = match edge {
            DismissEdge::Bottom => viewport.bottom() - h,
            DismissEdge::Top => viewport.y,
        };
        Rect::new(viewport.x, rest_y, viewport.w, h).translated(0.0, self.content_offset)
    }
}

fn drag_overlay_opacity(offset: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 1.0;
    }
    1.0 - (offset.max(0.0) / extent).min(1.0)
}
