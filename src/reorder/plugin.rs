use bevy::prelude::*;

use crate::input::PointerSystems;
use crate::items::ItemOrder;
use crate::reorder::{
    DragSession, ViewportGeometry,
    systems::{AutoScrollRequest, drag_active, recompute_drag_frame, track_drag_gesture},
};

/// Gesture tracking and reordering; runs between measurement and rendering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReorderSystems;

pub struct ReorderPlugin;

impl Plugin for ReorderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragSession>()
            .init_resource::<ViewportGeometry>()
            .init_resource::<ItemOrder>()
            .add_message::<AutoScrollRequest>()
            .configure_sets(Update, ReorderSystems.after(PointerSystems))
            .add_systems(
                Update,
                (
                    track_drag_gesture,
                    // Stops being scheduled as soon as the session ends
                    recompute_drag_frame.run_if(drag_active),
                )
                    .chain()
                    .in_set(ReorderSystems),
            );
    }
}
