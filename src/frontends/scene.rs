//! Backend-neutral draw commands emitted by the front ends.
//!
//! Colors are deliberately absent: each command carries a [`Role`] and the
//! host's theme decides how that role is painted.

use crate::layout::Rect;

/// Semantic part of a component a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Track,
    Fill,
    Thumb,
    Ring,
    RingFill,
    Button,
    ButtonLabel,
    Field,
    Label,
    Digit,
    Overlay,
    Surface,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        radius: f32,
        role: Role,
        opacity: f32,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        role: Role,
    },
    /// Angles in degrees, 0 at three o'clock, clockwise.
    Arc {
        center: (f32, f32),
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
        role: Role,
    },
    Text {
        origin: (f32, f32),
        text: String,
        role: Role,
    },
}

/// Ordered draw list for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, role: Role, opacity: f32) {
        self.push(DrawCommand::RoundedRect {
            rect,
            radius,
            role,
            opacity,
        });
    }

    pub fn push_circle(&mut self, center: (f32, f32), radius: f32, role: Role) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            role,
        });
    }

    pub fn push_arc(
        &mut self,
        center: (f32, f32),
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
        role: Role,
    ) {
        self.push(DrawCommand::Arc {
            center,
            radius,
            start_degrees,
            sweep_degrees,
            role,
        });
    }

    pub fn push_text(&mut self, origin: (f32, f32), text: impl Into<String>, role: Role) {
        self.push(DrawCommand::Text {
            origin,
            text: text.into(),
            role,
        });
    }

    /// Commands belonging to `role`, in draw order.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.role() == role)
    }
}

impl DrawCommand {
    pub fn role(&self) -> Role {
        match self {
            DrawCommand::RoundedRect { role, .. }
            | DrawCommand::Circle { role, .. }
            | DrawCommand::Arc { role, .. }
            | DrawCommand::Text { role, .. } => *role,
        }
    }
}
