//! The two front-end adapters and what they share.
//!
//! Both turn the same [`Component`] models into a [`Scene`] using only the
//! geometry in [`crate::layout`]. They differ in how they hold state: the
//! retained front end keeps persistent nodes and mutates them, the reactive
//! one rebuilds an element tree from the models on every render.

pub mod components;
pub mod reactive;
pub mod retained;
pub mod scene;

pub use components::{
    ActionPair, CircularProgress, Component, Countdown, ProgressBar, Sheet, Slider, TextBlock,
};
pub use reactive::{Element, ReactiveFrontend};
pub use retained::{NodeId, RetainedFrontend};
pub use scene::{DrawCommand, Role, Scene};

use crate::config::Settings;

/// Selects which front end renders a set of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendKind {
    Retained,
    Reactive,
}

/// Interface shared by both front ends.
pub trait Frontend {
    fn kind(&self) -> FrontendKind;

    /// Renders `components` in order into one scene.
    fn render(&mut self, components: &[Component]) -> Scene;
}

/// Enum-dispatch front end.
pub enum FrontendBackend {
    Retained(Box<RetainedFrontend>),
    Reactive(Box<ReactiveFrontend>),
}

impl FrontendBackend {
    pub fn new(kind: FrontendKind, settings: Settings) -> Self {
        log::debug!("[twinframe] using {kind:?} front end");
        match kind {
            FrontendKind::Retained => {
                FrontendBackend::Retained(Box::new(RetainedFrontend::new(settings)))
            }
            FrontendKind::Reactive => {
                FrontendBackend::Reactive(Box::new(ReactiveFrontend::new(settings)))
            }
        }
    }

    fn as_frontend(&self) -> &dyn Frontend {
        match self {
            FrontendBackend::Retained(f) => f.as_ref(),
            FrontendBackend::Reactive(f) => f.as_ref(),
        }
    }

    fn as_frontend_mut(&mut self) -> &mut dyn Frontend {
        match self {
            FrontendBackend::Retained(f) => f.as_mut(),
            FrontendBackend::Reactive(f) => f.as_mut(),
        }
    }

    pub fn kind(&self) -> FrontendKind {
        self.as_frontend().kind()
    }

    pub fn render(&mut self, components: &[Component]) -> Scene {
        self.as_frontend_mut().render(components)
    }
}


#[cfg(test)]
#[path = "../../tests/unit/frontends_parity.rs"]
mod parity;
