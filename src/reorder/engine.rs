// reorder/engine.rs

use super::geometry::{EdgeZone, ViewportGeometry};
use super::movement::relocate;
use super::session::DragSession;

/// Auto-scroll tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScrollPolicy {
    /// Distance from a viewport edge that triggers scrolling
    pub edge_margin: f32,
    /// Scroll distance per frame
    pub scroll_step: f32,
}

impl Default for AutoScrollPolicy {
    fn default() -> Self {
        Self {
            edge_margin: 100.0,
            scroll_step: 20.0,
        }
    }
}

/// A single-element move performed during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub from: usize,
    pub to: usize,
}

/// What one recompute did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutcome {
    /// Absolute offset the viewport should jump to (non-animated)
    pub scroll_to: Option<f32>,
    pub relocation: Option<Relocation>,
    /// The session's dragged index changed this frame
    pub index_changed: bool,
}

/// Per-frame recompute for an active drag.
///
/// The scroll request is computed first, but the index mapping still uses
/// `geometry.scroll_offset` as given: the new offset only shows up once the
/// viewport reports it back on a later frame.
pub fn recompute_frame<T>(
    session: &mut DragSession,
    geometry: &ViewportGeometry,
    items: &mut [T],
    policy: &AutoScrollPolicy,
) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();
    if !session.is_active() {
        return outcome;
    }

    let pointer_y = session.pointer_y();

    if geometry.viewport_height > 0.0 {
        outcome.scroll_to = match geometry.edge_zone(pointer_y, policy.edge_margin) {
            Some(EdgeZone::Bottom) => Some(geometry.scroll_offset + policy.scroll_step),
            Some(EdgeZone::Top) => Some((geometry.scroll_offset - policy.scroll_step).max(0.0)),
            None => None,
        };
    }

    // Empty list or no measured row: nothing to reorder
    let Some(target) = geometry.y_to_index(pointer_y, items.len()) else {
        return outcome;
    };

    let Some(current) = session.dragged_index() else {
        // Session began before rows were measured: adopt the mapped index
        session.set_dragged_index(target);
        outcome.index_changed = true;
        return outcome;
    };

    // The list may have shrunk underneath the session
    let current = current.min(items.len() - 1);

    if relocate(items, current, target) {
        log::debug!("drag moved row {} -> {}", current, target);
        outcome.relocation = Some(Relocation {
            from: current,
            to: target,
        });
    }

    if session.dragged_index() != Some(target) {
        session.set_dragged_index(target);
        outcome.index_changed = true;
    }

    outcome
}
