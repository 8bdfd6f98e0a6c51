use bevy::prelude::*;

mod camera;
mod config;
mod input;
mod items;
mod list;
mod reorder;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use config::ConfigPlugin;
use input::InputPlugin;
use list::ListPlugin;
use reorder::ReorderPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Drag Reorder".into(),
            resolution: WindowResolution::new(540, 960),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ConfigPlugin)
    .add_plugins(ReorderPlugin)
    .add_plugins(ListPlugin);

    app.run();
}
