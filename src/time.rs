//! Fixed-rate advancement of the physics simulation.
//!
//! One `Simulation::step` per `FixedUpdate` tick keeps the simulated
//! timestep constant regardless of the render framerate.

use bevy::prelude::*;

use crate::scenarios::TICK_RATE;
use crate::simulation::Simulation;
use crate::types::SimulationControl;

/// Plugin driving the physics at the fixed tick rate.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
            .add_systems(FixedUpdate, advance_simulation);
    }
}

/// Advance all bodies by exactly one timestep, unless paused.
fn advance_simulation(mut simulation: ResMut<Simulation>, control: Res<SimulationControl>) {
    if control.paused {
        return;
    }

    simulation.step();
}
