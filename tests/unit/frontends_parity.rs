use super::*;
use crate::config::LibraryConfig;
use crate::layout::{ModalController, ModalState, RangeValue, Rect};
use proptest::prelude::*;

fn render_both(settings: &Settings, components: &[Component]) -> (Scene, Scene) {
    let mut retained = FrontendBackend::new(FrontendKind::Retained, settings.clone());
    let mut reactive = FrontendBackend::new(FrontendKind::Reactive, settings.clone());
    (retained.render(components), reactive.render(components))
}

fn gallery() -> Vec<Component> {
    vec![
        Component::ProgressBar(ProgressBar {
            range: RangeValue::new(0.0, 100.0, 42.0),
            frame: Rect::new(16.0, 16.0, 300.0, 12.0),
        }),
        Component::CircularProgress(CircularProgress {
            range: RangeValue::new(0.0, 1.0, 0.75),
            center: (60.0, 80.0),
        }),
        Component::Slider(Slider {
            range: RangeValue::new(0.0, 10.0, 3.4),
            step: 1.0,
            frame: Rect::new(16.0, 120.0, 300.0, 24.0),
        }),
        Component::ActionPair(ActionPair {
            primary: "Save".to_string(),
            secondary: Some("Discard".to_string()),
            origin: (0.0, 160.0),
            available_width: 360.0,
        }),
        Component::ActionPair(ActionPair {
            primary: "Permanently delete all of these items".to_string(),
            secondary: Some("Keep".to_string()),
            origin: (0.0, 220.0),
            available_width: 360.0,
        }),
        Component::TextBlock(TextBlock {
            text: "The quick brown fox jumps over the lazy dog, twice.".to_string(),
            origin: (16.0, 340.0),
            width: 200.0,
        }),
        Component::Countdown(Countdown {
            remaining_secs: 754,
            origin: (16.0, 460.0),
        }),
        Component::Sheet(Sheet {
            viewport: Rect::new(0.0, 0.0, 390.0, 844.0),
            content_height: 320.0,
            state: ModalState::DraggingToDismiss { offset: 80.0 },
        }),
    ]
}

#[test]
fn gallery_renders_identically() {
    let (retained, reactive) = render_both(&Settings::default(), &gallery());
    assert!(!retained.is_empty());
    assert_eq!(retained, reactive);
}

#[test]
fn parity_holds_with_custom_config() {
    let config: LibraryConfig = ron::from_str(
        "(modal: (dismiss_edge: Top), text: (max_rows: Some(2), glyph_advance: 7.0), \
         actions: (spacing: 12.0), surface: (sheet_corner_radius: 20.0))",
    )
    .expect("config");
    let (retained, reactive) = render_both(&config.settings(), &gallery());
    assert_eq!(retained, reactive);
}

#[test]
fn parity_holds_across_updates() {
    let settings = Settings::default();
    let mut retained = FrontendBackend::new(FrontendKind::Retained, settings.clone());
    let mut reactive = FrontendBackend::new(FrontendKind::Reactive, settings);
    let mut components = gallery();
    assert_eq!(retained.render(&components), reactive.render(&components));

    components.truncate(3);
    if let Component::ProgressBar(bar) = &mut components[0] {
        bar.range.current = 90.0;
    }
    assert_eq!(retained.render(&components), reactive.render(&components));
}

#[test]
fn sheet_follows_controller_in_both() {
    let settings = Settings::default();
    let mut controller = ModalController::new(settings.modal);
    let viewport = Rect::new(0.0, 0.0, 390.0, 844.0);
    let mut retained = RetainedFrontend::new(settings.clone());
    let sheet = retained.mount(Component::Sheet(Sheet {
        viewport,
        content_height: 300.0,
        state: controller.state(),
    }));
    let mut reactive = ReactiveFrontend::new(settings);

    controller.update_layout(crate::layout::ContentBox::new(390.0, 300.0));
    controller.show();
    let (token, _) = controller.pending_animation().expect("entrance");
    controller.animation_finished(token);
    assert_eq!(controller.state(), ModalState::Presented);
    controller.drag_tick(120.0, 0.0);
    retained.set_modal_state(sheet, controller.state());

    let model = [Component::Sheet(Sheet {
        viewport,
        content_height: 300.0,
        state: controller.state(),
    })];
    assert_eq!(retained.draw(), reactive.render(&model));
}

fn range_strategy() -> impl Strategy<Value = RangeValue> {
    (-1000.0f32..1000.0, 0.0f32..1000.0, -2000.0f32..2000.0)
        .prop_map(|(min, span, current)| RangeValue::new(min, min + span, current))
}

proptest! {
    #[test]
    fn progress_components_always_match(range in range_strategy(), step in 0.0f32..50.0) {
        let components = vec![
            Component::ProgressBar(ProgressBar {
                range,
                frame: Rect::new(0.0, 0.0, 240.0, 8.0),
            }),
            Component::CircularProgress(CircularProgress {
                range,
                center: (30.0, 30.0),
            }),
            Component::Slider(Slider {
                range,
                step,
                frame: Rect::new(0.0, 40.0, 240.0, 24.0),
            }),
        ];
        let (retained, reactive) = render_both(&Settings::default(), &components);
        prop_assert_eq!(retained, reactive);
    }

    #[test]
    fn text_blocks_always_match(text in "[a-z ]{0,120}", width in 40.0f32..400.0) {
        let components = vec![Component::TextBlock(TextBlock {
            text,
            origin: (0.0, 0.0),
            width,
        })];
        let (retained, reactive) = render_both(&Settings::default(), &components);
        prop_assert_eq!(retained, reactive);
    }
}
