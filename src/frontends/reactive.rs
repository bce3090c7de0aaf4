//! Reactive front end: an element tree rebuilt from the models each render.
//!
//! Nothing is cached between renders. `view` describes the whole tree as a
//! value and `lower` flattens it into a [`Scene`].

use crate::config::Settings;
use crate::layout::Rect;
use crate::layout::component_layout::{self, BarLayout};

use super::components::Component;
use super::scene::{Role, Scene};
use super::{Frontend, FrontendKind};

/// Declarative description of what to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Group(Vec<Element>),
    Box {
        rect: Rect,
        radius: f32,
        role: Role,
        opacity: f32,
    },
    Dot {
        center: (f32, f32),
        radius: f32,
        role: Role,
    },
    Sweep {
        center: (f32, f32),
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
        role: Role,
    },
    Label {
        origin: (f32, f32),
        text: String,
        role: Role,
    },
    Empty,
}

impl Element {
    fn solid(rect: Rect, radius: f32, role: Role) -> Element {
        Element::Box {
            rect,
            radius,
            role,
            opacity: 1.0,
        }
    }

    fn label(origin: (f32, f32), text: impl Into<String>, role: Role) -> Element {
        Element::Label {
            origin,
            text: text.into(),
            role,
        }
    }

    /// Flattens the tree depth-first into `scene`.
    pub fn lower(&self, scene: &mut Scene) {
        match self {
            Element::Group(children) => {
                for child in children {
                    child.lower(scene);
                }
            }
            Element::Box {
                rect,
                radius,
                role,
                opacity,
            } => scene.push_rounded_rect(*rect, *radius, *role, *opacity),
            Element::Dot {
                center,
                radius,
                role,
            } => scene.push_circle(*center, *radius, *role),
            Element::Sweep {
                center,
                radius,
                start_degrees,
                sweep_degrees,
                role,
            } => scene.push_arc(*center, *radius, *start_degrees, *sweep_degrees, *role),
            Element::Label { origin, text, role } => scene.push_text(*origin, text.as_str(), *role),
            Element::Empty => {}
        }
    }
}

pub struct ReactiveFrontend {
    settings: Settings,
}

impl ReactiveFrontend {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self, components: &[Component]) -> Element {
        Element::Group(components.iter().map(|c| self.body(c)).collect())
    }

    /// Element tree for one component.
    pub fn body(&self, component: &Component) -> Element {
        let s = &self.settings;
        match component {
            Component::ProgressBar(bar) => {
                bar_body(&component_layout::bar_layout(bar.range, bar.frame, &s.progress))
            }
            Component::CircularProgress(ring) => {
                let ring = component_layout::ring_layout(ring.range, ring.center, &s.progress);
                Element::Group(vec![
                    Element::Dot {
                        center: ring.center,
                        radius: ring.radius,
                        role: Role::Ring,
                    },
                    Element::Sweep {
                        center: ring.center,
                        radius: ring.radius,
                        start_degrees: ring.start_degrees,
                        sweep_degrees: ring.sweep_degrees,
                        role: Role::RingFill,
                    },
                ])
            }
            Component::Slider(slider) => {
                let layout = component_layout::slider_layout(
                    slider.range,
                    slider.step,
                    slider.frame,
                    &s.progress,
                );
                Element::Group(vec![
                    bar_body(&layout.bar),
                    Element::Dot {
                        center: layout.thumb_center,
                        radius: layout.thumb_radius,
                        role: Role::Thumb,
                    },
                ])
            }
            Component::ActionPair(pair) => {
                let layout = component_layout::action_layout(
                    &pair.primary,
                    pair.secondary.as_deref(),
                    pair.origin,
                    pair.available_width,
                    &s.actions,
                    &s.text.metrics,
                );
                Element::Group(
                    layout
                        .buttons
                        .into_iter()
                        .map(|b| {
                            Element::Group(vec![
                                Element::solid(b.frame, b.radius, Role::Button),
                                Element::label(b.label_origin, b.label, Role::ButtonLabel),
                            ])
                        })
                        .collect(),
                )
            }
            Component::TextBlock(block) => {
                let layout = component_layout::text_block_layout(
                    &block.text,
                    block.origin,
                    block.width,
                    &s.text,
                    &s.surface,
                );
                let mut children = vec![Element::solid(layout.frame, layout.radius, Role::Field)];
                children.extend(
                    layout
                        .lines
                        .into_iter()
                        .map(|(origin, line)| Element::label(origin, line, Role::Label)),
                );
                Element::Group(children)
            }
            Component::Countdown(countdown) => {
                let layout = component_layout::countdown_layout(countdown.origin, &s.text.metrics);
                let (minutes, seconds) = countdown.digits();
                Element::Group(vec![
                    Element::label(layout.minutes_origin, minutes, Role::Digit),
                    Element::label(layout.colon_origin, ":", Role::Digit),
                    Element::label(layout.seconds_origin, seconds, Role::Digit),
                ])
            }
            Component::Sheet(sheet) => match component_layout::sheet_layout(
                sheet.viewport,
                sheet.content_height,
                sheet.state,
                s.modal.dismiss_edge,
                &s.surface,
            ) {
                Some(layout) => Element::Group(vec![
                    Element::Box {
                        rect: layout.overlay,
                        radius: 0.0,
                        role: Role::Overlay,
                        opacity: layout.overlay_opacity,
                    },
                    Element::solid(layout.content, layout.radius, Role::Surface),
                ]),
                None => Element::Empty,
            },
        }
    }
}

fn bar_body(bar: &BarLayout) -> Element {
    Element::Group(vec![
        Element::solid(bar.track, bar.radius, Role::Track),
        Element::solid(bar.fill, bar.radius, Role::Fill),
    ])
}

impl Frontend for ReactiveFrontend {
    fn kind(&self) -> FrontendKind {
        FrontendKind::Reactive
    }

    fn render(&mut self, components: &[Component]) -> Scene {
        let mut scene = Scene::new();
        self.view(components).lower(&mut scene);
        scene
    }
}
