use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// The list is pure UI, so a 2D camera is all that renders it
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera, Name::new("Main Camera")));
}
