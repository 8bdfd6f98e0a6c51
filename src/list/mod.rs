pub mod layout;
pub mod palette;
pub mod plugin;
pub mod render;
pub mod scroll;
pub mod setup;

use bevy::prelude::*;

pub use plugin::ListPlugin;

/// The scrolling container that holds every row
#[derive(Component, Debug)]
pub struct ListViewport;

/// One slot in the list; shows whatever item currently sits at `position`
#[derive(Component, Debug, Clone, Copy)]
pub struct ListRow {
    pub position: usize,
}

/// Text of the row at `position`
#[derive(Component, Debug, Clone, Copy)]
pub struct RowLabel {
    pub position: usize,
}

/// The dragged item drawn outside the normal layout
#[derive(Component, Debug)]
pub struct FloatingRow;

#[derive(Component, Debug)]
pub struct FloatingLabel;
