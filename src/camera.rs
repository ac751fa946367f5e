//! Fixed camera for the planetary simulator.
//!
//! The whole scene fits a fixed orthographic view centred on the star;
//! there is no zoom or pan.

use bevy::{prelude::*, render::camera::ScalingMode};

/// Viewport height in display units. With the 250-units-per-AU render
/// scale this shows a bit beyond the orbit of Mars.
pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the fixed orthographic camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            near: -10000.0,
            far: 10000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, 1000.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}
