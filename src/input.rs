//! Keyboard handling for pause and render toggles.
//!
//! The toggles only change what the render layer draws; the physics core
//! never sees them.

use bevy::prelude::*;

use crate::render::{BodyStyleSettings, LabelSettings, TrailSettings};
use crate::types::SimulationControl;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts for simulation control.
///
/// Space toggles pause, `E` the orbit trails, `T` the distance labels,
/// `R` the textured/flat body look, Escape quits.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut control: ResMut<SimulationControl>,
    mut trails: ResMut<TrailSettings>,
    mut labels: ResMut<LabelSettings>,
    mut styles: ResMut<BodyStyleSettings>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Space) {
        control.paused = !control.paused;
        info!(
            "Simulation {}",
            if control.paused { "paused" } else { "running" }
        );
    }

    if keys.just_pressed(KeyCode::KeyE) {
        trails.visible = !trails.visible;
    }

    if keys.just_pressed(KeyCode::KeyT) {
        labels.visible = !labels.visible;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        styles.textured = !styles.textured;
    }

    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
