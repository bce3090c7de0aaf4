use super::*;

fn presented(settings: ModalSettings) -> ModalController {
    let mut modal = ModalController::new(settings);
    modal.update_layout(ContentBox::new(320.0, 100.0));
    let token = entrance_token(modal.show());
    modal.animation_finished(token);
    assert_eq!(modal.state(), ModalState::Presented);
    modal
}

fn entrance_token(effect: ModalEffect) -> AnimationToken {
    match effect {
        ModalEffect::Animate {
            kind: AnimationKind::Entrance,
            token,
            ..
        } => token,
        other => panic!("expected entrance animation, got {other:?}"),
    }
}

fn exit_token(effect: ModalEffect) -> AnimationToken {
    match effect {
        ModalEffect::Animate {
            kind: AnimationKind::Exit,
            token,
            ..
        } => token,
        other => panic!("expected exit animation, got {other:?}"),
    }
}

#[test]
fn starts_idle() {
    let modal = ModalController::default();
    assert_eq!(modal.state(), ModalState::Idle);
    assert!(modal.pending_animation().is_none());
}

#[test]
fn show_runs_entrance_then_presents() {
    let mut modal = ModalController::default();
    let effect = modal.show();
    assert_eq!(modal.state(), ModalState::Presenting);
    match effect {
        ModalEffect::Animate { duration, .. } => {
            assert_eq!(duration, Duration::from_millis(300));
        }
        other => panic!("unexpected effect {other:?}"),
    }
    modal.animation_finished(entrance_token(effect));
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn double_show_issues_one_entrance() {
    let mut modal = ModalController::default();
    let token = entrance_token(modal.show());
    assert_eq!(modal.show(), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Presenting);
    assert_eq!(
        modal.pending_animation(),
        Some((token, AnimationKind::Entrance))
    );
    modal.animation_finished(token);
    assert_eq!(modal.state(), ModalState::Presented);
    assert_eq!(modal.show(), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn hide_from_idle_is_noop() {
    let mut modal = ModalController::default();
    assert_eq!(modal.hide(), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Idle);
}

#[test]
fn hide_while_dismissing_is_noop() {
    let mut modal = presented(ModalSettings::default());
    let token = exit_token(modal.hide());
    assert_eq!(modal.hide(), ModalEffect::None);
    modal.animation_finished(token);
    assert_eq!(modal.state(), ModalState::Dismissed);
    assert_eq!(modal.hide(), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Dismissed);
}

#[test]
fn hide_mid_entrance_discards_stale_completion() {
    let mut modal = ModalController::default();
    let entrance = entrance_token(modal.show());
    let exit = exit_token(modal.hide());
    assert_eq!(modal.state(), ModalState::Dismissing);

    modal.animation_finished(entrance);
    assert_eq!(modal.state(), ModalState::Dismissing);

    modal.animation_finished(exit);
    assert_eq!(modal.state(), ModalState::Dismissed);
}

#[test]
fn controller_is_reusable_after_dismissal() {
    let mut modal = presented(ModalSettings::default());
    let exit = exit_token(modal.hide());
    modal.animation_finished(exit);
    assert_eq!(modal.state(), ModalState::Dismissed);

    let again = entrance_token(modal.show());
    assert_ne!(again, exit);
    modal.animation_finished(again);
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn show_while_dismissing_reverses() {
    let mut modal = presented(ModalSettings::default());
    let exit = exit_token(modal.hide());
    let entrance = entrance_token(modal.show());
    assert_eq!(modal.state(), ModalState::Presenting);
    modal.animation_finished(exit);
    assert_eq!(modal.state(), ModalState::Presenting);
    modal.animation_finished(entrance);
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn drag_ticks_update_offset() {
    let mut modal = presented(ModalSettings::default());
    assert_eq!(modal.drag_tick(10.0, 0.0), ModalEffect::Offset(10.0));
    assert_eq!(modal.state(), ModalState::DraggingToDismiss { offset: 10.0 });
    assert_eq!(modal.drag_tick(25.0, 0.0), ModalEffect::Offset(25.0));
    assert_eq!(modal.state().offset(), 25.0);
}

#[test]
fn upward_drag_rubber_bands() {
    let mut modal = presented(ModalSettings::default());
    modal.drag_tick(-100.0, 0.0);
    assert!((modal.state().offset() + 10.0).abs() < 1e-4);
}

#[test]
fn drag_before_presented_is_ignored() {
    let mut modal = ModalController::default();
    assert_eq!(modal.drag_tick(30.0, 0.0), ModalEffect::None);
    modal.show();
    assert_eq!(modal.drag_tick(30.0, 0.0), ModalEffect::None);
    assert_eq!(modal.drag_release(30.0, 900.0), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Presenting);
}

#[test]
fn non_committing_drag_round_trips_to_presented() {
    let mut modal = presented(ModalSettings::default());
    for t in [5.0, 12.0, 20.0, 30.0] {
        modal.drag_tick(t, 40.0);
    }
    let effect = modal.drag_release(30.0, 40.0);
    assert!(matches!(
        effect,
        ModalEffect::SnapBack {
            from_offset,
            ..
        } if from_offset == 30.0
    ));
    assert_eq!(modal.state(), ModalState::Presented);
    assert_eq!(modal.state().offset(), 0.0);
}

#[test]
fn far_drag_commits() {
    let mut modal = presented(ModalSettings::default());
    modal.drag_tick(60.0, 0.0);
    let effect = modal.drag_release(60.0, 0.0);
    match effect {
        ModalEffect::Animate {
            kind: AnimationKind::Exit,
            from_offset,
            ..
        } => assert_eq!(from_offset, 60.0),
        other => panic!("expected exit, got {other:?}"),
    }
    assert_eq!(modal.state(), ModalState::Dismissing);
}

#[test]
fn fast_flick_commits_without_ticks() {
    let mut modal = presented(ModalSettings::default());
    let token = exit_token(modal.drag_release(10.0, 300.0));
    modal.animation_finished(token);
    assert_eq!(modal.state(), ModalState::Dismissed);
}

#[test]
fn drag_disabled_never_commits() {
    let settings = ModalSettings {
        policy: DragPolicy {
            dismiss_on_drag: false,
            free_drag: true,
        },
        ..ModalSettings::default()
    };
    let mut modal = presented(settings);
    modal.drag_tick(400.0, 0.0);
    // Rubber band keeps the sheet within the damping distance.
    assert!(modal.state().offset() < 20.0);
    assert!(matches!(
        modal.drag_release(400.0, 5000.0),
        ModalEffect::SnapBack { .. }
    ));
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn overlay_tap_dismisses_when_enabled() {
    let mut modal = presented(ModalSettings::default());
    exit_token(modal.overlay_tapped());
    assert_eq!(modal.state(), ModalState::Dismissing);
}

#[test]
fn overlay_tap_ignored_when_disabled() {
    let settings = ModalSettings {
        overlay_tap_dismisses: false,
        ..ModalSettings::default()
    };
    let mut modal = presented(settings);
    assert_eq!(modal.overlay_tapped(), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn overlay_tap_during_drag_dismisses_from_offset() {
    let mut modal = presented(ModalSettings::default());
    modal.drag_tick(15.0, 0.0);
    match modal.overlay_tapped() {
        ModalEffect::Animate { from_offset, .. } => assert_eq!(from_offset, 15.0),
        other => panic!("expected exit, got {other:?}"),
    }
}

#[test]
fn top_edge_projects_gesture() {
    let settings = ModalSettings {
        dismiss_edge: DismissEdge::Top,
        ..ModalSettings::default()
    };
    let mut modal = presented(settings);
    // Dragging up moves a top sheet toward its dismiss edge.
    assert_eq!(modal.drag_tick(-30.0, 0.0), ModalEffect::Offset(30.0));
    // An upward flick commits.
    exit_token(modal.drag_release(-30.0, -400.0));
}

#[test]
fn unmeasured_content_commits_on_any_dismiss_drag() {
    let mut modal = ModalController::default();
    let token = entrance_token(modal.show());
    modal.animation_finished(token);
    assert_eq!(modal.content_extent(), 0.0);
    exit_token(modal.drag_release(1.0, 0.0));
}

#[test]
fn handle_dispatches_events() {
    let mut modal = ModalController::default();
    modal.update_layout(ContentBox::new(100.0, 100.0));
    let token = entrance_token(modal.handle(ModalEvent::Show));
    modal.handle(ModalEvent::AnimationFinished(token));
    modal.handle(ModalEvent::DragTick(DragSample::new(5.0, 0.0)));
    assert_eq!(modal.state(), ModalState::DraggingToDismiss { offset: 5.0 });
    modal.handle(ModalEvent::DragRelease(DragSample::new(5.0, 0.0)));
    assert_eq!(modal.state(), ModalState::Presented);
    modal.handle(ModalEvent::OverlayTapped);
    assert_eq!(modal.state(), ModalState::Dismissing);
    modal.handle(ModalEvent::Hide);
    assert_eq!(modal.state(), ModalState::Dismissing);
}

#[test]
fn completion_with_nothing_pending_is_ignored() {
    let mut modal = presented(ModalSettings::default());
    let token = AnimationToken(99);
    assert_eq!(modal.animation_finished(token), ModalEffect::None);
    assert_eq!(modal.state(), ModalState::Presented);
}

#[test]
fn invalid_physics_is_repaired_at_construction() {
    let settings = ModalSettings {
        policy: DragPolicy {
            dismiss_on_drag: false,
            free_drag: true,
        },
        physics: DragPhysics {
            damping_distance: 0.0,
            ..DragPhysics::default()
        },
        ..ModalSettings::default()
    };
    assert!(!settings.sanitize().is_clean());

    let mut modal = ModalController::new(settings);
    assert_eq!(modal.settings().physics.damping_distance, 20.0);
    modal.update_layout(ContentBox::new(100.0, 100.0));
    let token = entrance_token(modal.show());
    modal.animation_finished(token);
    assert_eq!(modal.drag_tick(0.0, 0.0), ModalEffect::Offset(0.0));
    assert_eq!(modal.state(), ModalState::DraggingToDismiss { offset: 0.0 });
    let ModalEffect::Offset(offset) = modal.drag_tick(40.0, 0.0) else {
        panic!("expected an offset");
    };
    assert!(offset.is_finite() && offset > 0.0);
}
