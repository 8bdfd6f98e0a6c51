use bevy::prelude::*;

use crate::list::{
    layout::{measure_rows, measure_viewport},
    palette::RowPalette,
    render::{sync_floating_row, sync_rows},
    scroll::{apply_auto_scroll, wheel_scroll},
    setup::{setup_items, spawn_list},
};
use crate::reorder::ReorderSystems;

/// Presentation for the reorderable list: layout measurement before the
/// reorder systems, scrolling and row updates after them
pub struct ListPlugin;

impl Plugin for ListPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RowPalette>()
            .add_systems(Startup, (setup_items, spawn_list).chain())
            .add_systems(
                Update,
                (measure_viewport, measure_rows)
                    .chain()
                    .before(ReorderSystems),
            )
            .add_systems(
                Update,
                (
                    apply_auto_scroll,
                    wheel_scroll,
                    // Visual updates
                    sync_rows,
                    sync_floating_row,
                )
                    .chain()
                    .after(ReorderSystems),
            );
    }
}
