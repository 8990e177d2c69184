use std::time::{Duration, Instant};

use trailhead::{
    InteractionController, Level, MOBILE_BREAKPOINT_PX, NodeSpec, PresentationMode,
    ResizeDebouncer, ViewportClass,
};

fn node(id: &str) -> NodeSpec {
    NodeSpec {
        id: id.to_string(),
        label: format!("Step {id}"),
        description: String::new(),
        link: None,
        level: Level::Fundamentals,
    }
}

#[test]
fn narrow_viewports_present_a_modal() {
    let mut controller = InteractionController::new();
    let state = controller.on_node_activated(&node("a"), 500.0);

    assert_eq!(state.presentation, PresentationMode::Modal);
    assert_eq!(state.selected.as_ref().unwrap().id, "a");
}

#[test]
fn wide_viewports_present_a_side_panel() {
    let mut controller = InteractionController::new();
    let state = controller.on_node_activated(&node("a"), 1280.0);

    assert_eq!(state.presentation, PresentationMode::SidePanel);
    assert_eq!(state.selected.as_ref().unwrap().id, "a");
}

#[test]
fn breakpoint_width_itself_is_wide() {
    assert_eq!(ViewportClass::classify(MOBILE_BREAKPOINT_PX), ViewportClass::Wide);
    assert_eq!(ViewportClass::classify(767.9), ViewportClass::Narrow);

    let mut controller = InteractionController::new();
    let state = controller.on_node_activated(&node("a"), MOBILE_BREAKPOINT_PX);
    assert_eq!(state.presentation, PresentationMode::SidePanel);
}

#[test]
fn dismissing_the_modal_keeps_the_selection() {
    let mut controller = InteractionController::new();
    controller.on_node_activated(&node("a"), 400.0);
    let state = controller.dismiss_modal();

    assert_eq!(state.presentation, PresentationMode::SidePanel);
    assert_eq!(
        state.selected.as_ref().map(|n| n.id.as_str()),
        Some("a"),
        "dismissal hides the modal, it does not deselect"
    );
}

#[test]
fn resizing_re_derives_the_presentation() {
    let mut controller = InteractionController::new();
    controller.on_node_activated(&node("a"), 1280.0);
    assert_eq!(controller.state().presentation, PresentationMode::SidePanel);

    let narrowed = controller.on_viewport_resized(600.0);
    assert_eq!(narrowed.presentation, PresentationMode::Modal);

    let widened = controller.on_viewport_resized(900.0);
    assert_eq!(widened.presentation, PresentationMode::SidePanel);
    assert_eq!(widened.selected.as_ref().unwrap().id, "a");
}

#[test]
fn resize_with_nothing_selected_is_inert() {
    let mut controller = InteractionController::new();
    let state = controller.on_viewport_resized(500.0);

    assert!(state.selected.is_none());
    assert_eq!(state.presentation, PresentationMode::SidePanel);
}

#[test]
fn clearing_the_selection_resets_the_state() {
    let mut controller = InteractionController::new();
    controller.on_node_activated(&node("a"), 500.0);
    let state = controller.clear_selection();

    assert!(state.selected.is_none());
    assert_eq!(state.presentation, PresentationMode::SidePanel);
}

#[test]
fn activating_another_node_replaces_the_selection() {
    let mut controller = InteractionController::new();
    controller.on_node_activated(&node("a"), 1280.0);
    let state = controller.on_node_activated(&node("b"), 1280.0);

    assert_eq!(state.selected.as_ref().unwrap().id, "b");
}

#[test]
fn debouncer_absorbs_bursts() {
    let mut debouncer = ResizeDebouncer::new(Duration::from_millis(100));
    let t0 = Instant::now();

    let fired: Vec<bool> = [0u64, 30, 90, 150, 200]
        .into_iter()
        .map(|ms| debouncer.should_fire(t0 + Duration::from_millis(ms)))
        .collect();

    // 150 is the first event at least 100ms after the accepted one at 0;
    // 200 is only 50ms after 150 and is absorbed again.
    assert_eq!(fired, vec![true, false, false, true, false]);
}

#[test]
fn debouncer_first_event_always_fires() {
    let mut debouncer = ResizeDebouncer::new(Duration::from_millis(250));
    assert!(debouncer.should_fire(Instant::now()));
}
