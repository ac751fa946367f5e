//! Orbit trail rendering using Bevy Gizmos.
//!
//! Draws each body's accumulated position history as a polyline, the
//! traced path rather than an idealized ellipse.

use bevy::prelude::*;

use crate::render::z_layers;
use crate::scenarios::{PlanetId, SOLAR_SYSTEM};
use crate::simulation::{Simulation, Viewport};

/// Settings for trail rendering.
#[derive(Resource)]
pub struct TrailSettings {
    /// Whether to show orbit trails.
    pub visible: bool,
    /// Minimum history length before a trail is drawn.
    pub min_points: usize,
    /// Alpha value for trail color.
    pub alpha: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            visible: true,
            min_points: 3,
            alpha: 0.6,
        }
    }
}

/// Plugin providing orbit trail visualization.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSettings>()
            .add_systems(Update, draw_trails);
    }
}

/// Get a dim trail color matching the body color.
fn trail_color(id: PlanetId, alpha: f32) -> Color {
    match id {
        PlanetId::Sun => Color::srgba(1.0, 1.0, 0.0, alpha),
        PlanetId::Mercury => Color::srgba(0.31, 0.31, 0.32, alpha),
        PlanetId::Venus => Color::srgba(1.0, 1.0, 1.0, alpha),
        PlanetId::Earth => Color::srgba(0.39, 0.58, 0.93, alpha),
        PlanetId::Mars => Color::srgba(0.74, 0.15, 0.2, alpha),
    }
}

/// Draw every body's orbit history as line segments.
fn draw_trails(mut gizmos: Gizmos, simulation: Res<Simulation>, settings: Res<TrailSettings>) {
    if !settings.visible {
        return;
    }

    for (index, preset) in SOLAR_SYSTEM.iter().enumerate() {
        let Some(state) = simulation.render_state_of(index, Viewport::default()) else {
            continue;
        };

        if state.orbit_points.len() < settings.min_points {
            continue;
        }

        let color = trail_color(preset.id, settings.alpha);
        let mut prev: Option<Vec3> = None;

        for point in &state.orbit_points {
            let pt = Vec3::new(point.x as f32, point.y as f32, z_layers::TRAIL);
            if let Some(p0) = prev {
                gizmos.line(p0, pt, color);
            }
            prev = Some(pt);
        }
    }
}
