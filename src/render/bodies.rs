//! Celestial body rendering and spawning.
//!
//! Each preset body gets one sphere whose transform follows the physics
//! state. The `R` key swaps between a flat-color look and a textured one.

use bevy::prelude::*;

use crate::render::z_layers;
use crate::scenarios::{PlanetId, SOLAR_SYSTEM};
use crate::simulation::{Simulation, Viewport};

/// Component marking an entity as the visual for one simulated body.
#[derive(Component)]
pub struct BodyVisual {
    /// Index into the simulation's body list.
    pub index: usize,
    /// Preset identity, for colors and labels.
    pub id: PlanetId,
}

/// Settings for the body look.
#[derive(Resource)]
pub struct BodyStyleSettings {
    /// Textured spheres when true, flat preset colors when false.
    pub textured: bool,
}

impl Default for BodyStyleSettings {
    fn default() -> Self {
        Self { textured: true }
    }
}

/// Material handles per body index, so the style toggle is a handle swap.
#[derive(Resource, Default)]
pub struct BodyMaterials {
    flat: Vec<Handle<StandardMaterial>>,
    textured: Vec<Option<Handle<StandardMaterial>>>,
}

/// Plugin providing body spawning and per-frame transform sync.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyStyleSettings>()
            .init_resource::<BodyMaterials>()
            .add_systems(Startup, spawn_bodies)
            .add_systems(Update, (sync_body_transforms, apply_body_style));
    }
}

/// Get the visual color for a preset body.
fn body_color(id: PlanetId) -> Color {
    match id {
        PlanetId::Sun => Color::srgb_u8(255, 255, 0),
        PlanetId::Mercury => Color::srgb_u8(80, 78, 81),
        PlanetId::Venus => Color::srgb_u8(255, 255, 255),
        PlanetId::Earth => Color::srgb_u8(100, 149, 237),
        PlanetId::Mars => Color::srgb_u8(188, 39, 50),
    }
}

/// Spawn one sphere per preset body.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut body_materials: ResMut<BodyMaterials>,
    asset_server: Res<AssetServer>,
    simulation: Res<Simulation>,
) {
    for (index, preset) in SOLAR_SYSTEM.iter().enumerate() {
        let color = body_color(preset.id);
        let mesh = meshes.add(Sphere::new(preset.radius as f32));

        // Unlit flat discs against black, the scene has no lights
        let flat = materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        });

        let textured = preset.sprite.map(|path| {
            materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(path)),
                unlit: true,
                ..default()
            })
        });

        let start = simulation
            .render_state_of(index, Viewport::default())
            .map(|state| state.screen_position)
            .unwrap_or_default();

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(flat.clone()),
            Transform::from_xyz(start.x as f32, start.y as f32, z_layers::BODY),
            BodyVisual {
                index,
                id: preset.id,
            },
        ));

        body_materials.flat.push(flat);
        body_materials.textured.push(textured);
    }

    info!("Spawned {} bodies", SOLAR_SYSTEM.len());
}

/// Follow the physics: position from the screen projection, spin as a
/// rotation about the view axis.
fn sync_body_transforms(
    simulation: Res<Simulation>,
    mut bodies: Query<(&BodyVisual, &mut Transform)>,
) {
    for (visual, mut transform) in bodies.iter_mut() {
        let Some(state) = simulation.render_state_of(visual.index, Viewport::default()) else {
            continue;
        };

        transform.translation.x = state.screen_position.x as f32;
        transform.translation.y = state.screen_position.y as f32;
        transform.rotation = Quat::from_rotation_z((state.rotation_degrees as f32).to_radians());
    }
}

/// Swap materials when the style toggle changes.
///
/// Bodies without a texture keep the flat look in both modes.
fn apply_body_style(
    settings: Res<BodyStyleSettings>,
    body_materials: Res<BodyMaterials>,
    mut bodies: Query<(&BodyVisual, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !settings.is_changed() {
        return;
    }

    for (visual, mut material) in bodies.iter_mut() {
        let handle = if settings.textured {
            body_materials.textured[visual.index]
                .clone()
                .unwrap_or_else(|| body_materials.flat[visual.index].clone())
        } else {
            body_materials.flat[visual.index].clone()
        };
        material.0 = handle;
    }
}
