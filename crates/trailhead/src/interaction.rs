//! Selection and presentation state for a rendered roadmap.
//!
//! The rules mirror a responsive UI: activating a node opens its detail in a
//! side panel on wide viewports and a modal on narrow ones, and resizing
//! re-derives the presentation from the viewport class alone. Nothing here
//! renders; the controller is a state machine the render surface observes.

use std::time::{Duration, Instant};

use trailhead_core::NodeSpec;

/// Viewports narrower than this are classified [`ViewportClass::Narrow`].
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width; exactly [`MOBILE_BREAKPOINT_PX`] is
    /// `Wide`.
    pub fn classify(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// How a selected node's detail is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    SidePanel,
    Modal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// The node whose detail is open, if any.
    pub selected: Option<NodeSpec>,
    pub presentation: PresentationMode,
}

/// State machine for node selection and detail presentation.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: SelectionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selects `node` and derives the presentation from the viewport width.
    pub fn on_node_activated(
        &mut self,
        node: &NodeSpec,
        viewport_width_px: f64,
    ) -> &SelectionState {
        self.state.selected = Some(node.clone());
        self.state.presentation = presentation_for(viewport_width_px);
        &self.state
    }

    /// Re-derives the presentation after a viewport resize.
    ///
    /// The selection itself is never touched here; with nothing selected
    /// there is no detail to present and the state is left alone.
    pub fn on_viewport_resized(&mut self, width_px: f64) -> &SelectionState {
        if self.state.selected.is_some() {
            self.state.presentation = presentation_for(width_px);
        }
        &self.state
    }

    /// Closes a modal while keeping the node selected, so widening the
    /// viewport afterwards still shows the detail in the side panel.
    pub fn dismiss_modal(&mut self) -> &SelectionState {
        self.state.presentation = PresentationMode::SidePanel;
        &self.state
    }

    /// Clears the selection entirely.
    pub fn clear_selection(&mut self) -> &SelectionState {
        self.state = SelectionState::default();
        &self.state
    }
}

fn presentation_for(width_px: f64) -> PresentationMode {
    match ViewportClass::classify(width_px) {
        ViewportClass::Narrow => PresentationMode::Modal,
        ViewportClass::Wide => PresentationMode::SidePanel,
    }
}

/// Leading-edge coalescer for resize-driven re-layout.
///
/// The first event fires immediately; events within `window` of the last
/// accepted one are absorbed. Purely an optimization: a skipped event only
/// costs a redundant re-layout, never a different result.
#[derive(Debug)]
pub struct ResizeDebouncer {
    window: Duration,
    last_fired: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns whether the event at `now` should trigger a re-layout.
    pub fn should_fire(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(prev) if now.duration_since(prev) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}
