//! Retained-mode front end: persistent nodes mutated in place.
//!
//! Each node keeps its model and the layout computed from it. Setters change
//! the model and relayout only that node; [`RetainedFrontend::draw`] walks the
//! cached layouts without recomputing anything.

use crate::config::Settings;
use crate::layout::component_layout::{
    self, ActionLayout, BarLayout, CountdownLayout, RingLayout, SheetLayout, SliderLayout,
    TextBlockLayout,
};
use crate::layout::{ModalState, RangeValue};

use super::components::Component;
use super::scene::{Role, Scene};
use super::{Frontend, FrontendKind};

/// Handle to a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
enum NodeLayout {
    Bar(BarLayout),
    Ring(RingLayout),
    Slider(SliderLayout),
    Actions(ActionLayout),
    Text(TextBlockLayout),
    Countdown {
        layout: CountdownLayout,
        minutes: String,
        seconds: String,
    },
    Sheet(Option<SheetLayout>),
}

#[derive(Debug, Clone)]
struct Node {
    model: Component,
    layout: NodeLayout,
}

pub struct RetainedFrontend {
    settings: Settings,
    nodes: Vec<Node>,
    relayouts: usize,
}

impl RetainedFrontend {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            nodes: Vec::new(),
            relayouts: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// How many times any node has been laid out since creation.
    pub fn relayout_count(&self) -> usize {
        self.relayouts
    }

    pub fn mount(&mut self, model: Component) -> NodeId {
        let layout = self.layout(&model);
        self.nodes.push(Node { model, layout });
        NodeId(self.nodes.len() - 1)
    }

    /// Replaces the model of `id`, relaying it out only if it changed.
    ///
    /// Returns `false` for an unknown node.
    pub fn update(&mut self, id: NodeId, model: &Component) -> bool {
        let Some(node) = self.nodes.get(id.0) else {
            return false;
        };
        if node.model == *model {
            return true;
        }
        let layout = self.layout(model);
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.model = model.clone();
            node.layout = layout;
        }
        true
    }

    /// Drops every node from `len` onwards.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    pub fn model(&self, id: NodeId) -> Option<&Component> {
        self.nodes.get(id.0).map(|n| &n.model)
    }

    /// Sets the value of a progress bar, ring or slider.
    pub fn set_range(&mut self, id: NodeId, range: RangeValue) -> bool {
        self.edit(id, |model| match model {
            Component::ProgressBar(bar) => {
                bar.range = range;
                true
            }
            Component::CircularProgress(ring) => {
                ring.range = range;
                true
            }
            Component::Slider(slider) => {
                slider.range = range;
                true
            }
            _ => false,
        })
    }

    pub fn set_modal_state(&mut self, id: NodeId, state: ModalState) -> bool {
        self.edit(id, |model| match model {
            Component::Sheet(sheet) => {
                sheet.state = state;
                true
            }
            _ => false,
        })
    }

    /// Sets the text of a text block or the remaining time of a countdown
    /// (parsed as whole seconds).
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        self.edit(id, |model| match model {
            Component::TextBlock(block) => {
                block.text = text.to_string();
                true
            }
            Component::Countdown(countdown) => match text.trim().parse() {
                Ok(secs) => {
                    countdown.remaining_secs = secs;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        })
    }

    fn edit(&mut self, id: NodeId, apply: impl FnOnce(&mut Component) -> bool) -> bool {
        let Some(node) = self.nodes.get(id.0) else {
            log::trace!("[twinframe] edit of unknown node {id:?}");
            return false;
        };
        let mut model = node.model.clone();
        if !apply(&mut model) {
            log::trace!("[twinframe] edit does not apply to node {id:?}");
            return false;
        }
        self.update(id, &model)
    }

    fn layout(&mut self, model: &Component) -> NodeLayout {
        self.relayouts += 1;
        let s = &self.settings;
        match model {
            Component::ProgressBar(bar) => {
                NodeLayout::Bar(component_layout::bar_layout(bar.range, bar.frame, &s.progress))
            }
            Component::CircularProgress(ring) => NodeLayout::Ring(component_layout::ring_layout(
                ring.range,
                ring.center,
                &s.progress,
            )),
            Component::Slider(slider) => NodeLayout::Slider(component_layout::slider_layout(
                slider.range,
                slider.step,
                slider.frame,
                &s.progress,
            )),
            Component::ActionPair(pair) => NodeLayout::Actions(component_layout::action_layout(
                &pair.primary,
                pair.secondary.as_deref(),
                pair.origin,
                pair.available_width,
                &s.actions,
                &s.text.metrics,
            )),
            Component::TextBlock(block) => NodeLayout::Text(component_layout::text_block_layout(
                &block.text,
                block.origin,
                block.width,
                &s.text,
                &s.surface,
            )),
            Component::Countdown(countdown) => {
                let (minutes, seconds) = countdown.digits();
                NodeLayout::Countdown {
                    layout: component_layout::countdown_layout(countdown.origin, &s.text.metrics),
                    minutes,
                    seconds,
                }
            }
            Component::Sheet(sheet) => NodeLayout::Sheet(component_layout::sheet_layout(
                sheet.viewport,
                sheet.content_height,
                sheet.state,
                s.modal.dismiss_edge,
                &s.surface,
            )),
        }
    }

    /// Draws every mounted node in mount order.
    pub fn draw(&self) -> Scene {
        let mut scene = Scene::new();
        for node in &self.nodes {
            draw_node(&node.layout, &mut scene);
        }
        scene
    }
}

fn draw_node(layout: &NodeLayout, scene: &mut Scene) {
    match layout {
        NodeLayout::Bar(bar) => draw_bar(bar, scene),
        NodeLayout::Ring(ring) => {
            scene.push_circle(ring.center, ring.radius, Role::Ring);
            scene.push_arc(
                ring.center,
                ring.radius,
                ring.start_degrees,
                ring.sweep_degrees,
                Role::RingFill,
            );
        }
        NodeLayout::Slider(slider) => {
            draw_bar(&slider.bar, scene);
            scene.push_circle(slider.thumb_center, slider.thumb_radius, Role::Thumb);
        }
        NodeLayout::Actions(actions) => {
            for button in &actions.buttons {
                scene.push_rounded_rect(button.frame, button.radius, Role::Button, 1.0);
                scene.push_text(button.label_origin, button.label.as_str(), Role::ButtonLabel);
            }
        }
        NodeLayout::Text(block) => {
            scene.push_rounded_rect(block.frame, block.radius, Role::Field, 1.0);
            for (origin, line) in &block.lines {
                scene.push_text(*origin, line.as_str(), Role::Label);
            }
        }
        NodeLayout::Countdown {
            layout,
            minutes,
            seconds,
        } => {
            scene.push_text(layout.minutes_origin, minutes.as_str(), Role::Digit);
            scene.push_text(layout.colon_origin, ":", Role::Digit);
            scene.push_text(layout.seconds_origin, seconds.as_str(), Role::Digit);
        }
        NodeLayout::Sheet(Some(sheet)) => {
            scene.push_rounded_rect(sheet.overlay, 0.0, Role::Overlay, sheet.overlay_opacity);
            scene.push_rounded_rect(sheet.content, sheet.radius, Role::Surface, 1.0);
        }
        NodeLayout::Sheet(None) => {}
    }
}

fn draw_bar(bar: &BarLayout, scene: &mut Scene) {
    scene.push_rounded_rect(bar.track, bar.radius, Role::Track, 1.0);
    scene.push_rounded_rect(bar.fill, bar.radius, Role::Fill, 1.0);
}

impl Frontend for RetainedFrontend {
    fn kind(&self) -> FrontendKind {
        FrontendKind::Retained
    }

    /// Reconciles nodes with `components` by position, then draws.
    fn render(&mut self, components: &[Component]) -> Scene {
        for (i, model) in components.iter().enumerate() {
            if i < self.nodes.len() {
                self.update(NodeId(i), model);
            } else {
                self.mount(model.clone());
            }
        }
        self.truncate(components.len());
        self.draw()
    }
}
