// reorder/session.rs

use super::geometry::ViewportGeometry;
use bevy::prelude::Resource;

/// Binary drag state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// The in-progress reorder gesture.
///
/// Exists (is active) only while a pointer is down on a drag handle. Pointer
/// moves only update `pointer_y`; the list itself is mutated by the per-frame
/// recompute in [`super::engine`].
#[derive(Debug, Clone, Default, Resource)]
pub struct DragSession {
    active: bool,
    /// List position currently being relocated
    dragged_index: Option<usize>,
    /// Latest absolute pointer y (last write wins)
    pointer_y: f32,
    /// Pointer that owns the session (0 = mouse, >0 = touch id)
    pointer_id: Option<u64>,
}

impl DragSession {
    // === Query Methods ===

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> DragPhase {
        if self.active {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn pointer_y(&self) -> f32 {
        self.pointer_y
    }

    /// Does this pointer own the running session?
    pub fn owns(&self, pointer_id: u64) -> bool {
        self.active && self.pointer_id == Some(pointer_id)
    }

    /// Whether the host may take over the pointer (e.g. to scroll the list).
    /// Refused for as long as a drag is running.
    pub fn grant_termination(&self) -> bool {
        !self.active
    }

    /// Top edge of the floating row: centred on the pointer
    pub fn floating_top(&self, geometry: &ViewportGeometry) -> Option<f32> {
        self.active.then(|| self.pointer_y - geometry.row_height * 0.5)
    }

    // === Mutation Methods ===

    /// Start a session at `initial_y`. Always succeeds; the dragged index is
    /// `None` when the geometry cannot map `initial_y` yet.
    pub fn begin(
        &mut self,
        pointer_id: u64,
        initial_y: f32,
        geometry: &ViewportGeometry,
        len: usize,
    ) -> Option<usize> {
        self.active = true;
        self.pointer_id = Some(pointer_id);
        self.pointer_y = initial_y;
        self.dragged_index = geometry.y_to_index(initial_y, len);
        self.dragged_index
    }

    /// Record the latest pointer position. Ignored for foreign pointers and
    /// once the session has ended.
    pub fn update(&mut self, pointer_id: u64, current_y: f32) -> bool {
        if !self.owns(pointer_id) {
            return false;
        }
        self.pointer_y = current_y;
        true
    }

    /// Clear the session (pointer up or cancel)
    pub fn end(&mut self) {
        *self = DragSession::default();
    }

    pub(super) fn set_dragged_index(&mut self, index: usize) {
        self.dragged_index = Some(index);
    }
}
