//! Orrery - Planetary Motion Simulator
//!
//! A desktop application simulating the inner solar system under mutual
//! Newtonian gravitation, with orbit trails and distance readouts.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::scenarios;
use orrery::time::TimePlugin;
use orrery::types::SimulationControl;

fn main() {
    // Configuration problems in the preset are fatal; surface them before
    // any window exists.
    let simulation = match scenarios::solar_system() {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("invalid solar system preset: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: (800.0, 800.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(simulation)
        .init_resource::<SimulationControl>()
        .add_plugins((CameraPlugin, TimePlugin, InputPlugin, RenderPlugin))
        .run();
}
