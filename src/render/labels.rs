//! Distance labels using egui for text rendering.
//!
//! Renders each planet's current distance to the star, centred on the
//! body.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::camera::MainCamera;
use crate::render::bodies::BodyVisual;
use crate::simulation::{Simulation, Viewport};

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Label font size in points.
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 11.0,
        }
    }
}

/// Plugin providing distance label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_distance_labels);
    }
}

/// Draw the star distance over every non-star body.
fn draw_distance_labels(
    mut egui_ctx: EguiContexts,
    simulation: Res<Simulation>,
    bodies: Query<(&BodyVisual, &Transform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("distance_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (visual, transform) in bodies.iter() {
                let Some(state) = simulation.render_state_of(visual.index, Viewport::default())
                else {
                    continue;
                };

                if state.is_star {
                    continue;
                }

                // Project world position to screen
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, transform.translation)
                else {
                    continue;
                };

                let text = format!("{:.1}km", state.distance_to_star / 1000.0);
                let font = egui::FontId::proportional(settings.font_size);
                let label_pos = egui::pos2(screen_pos.x, screen_pos.y);

                // Shadow pass for readability against the trails
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_CENTER,
                    &text,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );
                painter.text(
                    label_pos,
                    egui::Align2::CENTER_CENTER,
                    &text,
                    font,
                    egui::Color32::WHITE,
                );
            }
        });
}
