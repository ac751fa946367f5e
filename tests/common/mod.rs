//! Common test utilities for integration tests.

use bevy::math::DVec2;
use orrery::body::BodySpec;
use orrery::simulation::Simulation;
use orrery::types::{AU_TO_METERS, G};

/// Tick rate used throughout the integration tests, Hz.
pub const TICK_RATE: f64 = 60.0;

/// Simulated days per real second used throughout the integration tests.
pub const DAYS_PER_REAL_SECOND: f64 = 10.0;

/// Star mass for the two-body scenario, kilograms.
pub const STAR_MASS: f64 = 1.989e30;

/// Planet mass for the two-body scenario (Earth), kilograms.
pub const PLANET_MASS: f64 = 5.9742e24;

/// A star at the origin and an Earth-like planet at (-1 AU, 0) with its
/// mean orbital velocity.
pub fn star_and_planet() -> Vec<BodySpec> {
    vec![
        BodySpec::new(DVec2::ZERO, DVec2::ZERO, STAR_MASS, 30.0, true),
        BodySpec::new(
            DVec2::new(-AU_TO_METERS, 0.0),
            DVec2::new(0.0, 29_783.0),
            PLANET_MASS,
            16.0,
            false,
        ),
    ]
}

/// Build the two-body simulation with the standard rates.
pub fn two_body_simulation() -> Simulation {
    Simulation::new(&star_and_planet(), TICK_RATE, DAYS_PER_REAL_SECOND)
        .expect("two-body fixture must be valid")
}

/// Advance a simulation by `steps` ticks.
pub fn run(simulation: &mut Simulation, steps: usize) {
    for _ in 0..steps {
        simulation.step();
    }
}

/// Orbital period around the fixture star, Kepler's third law.
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / (G * STAR_MASS)).sqrt()
}

/// Number of whole ticks covering one orbit at the standard rates.
pub fn steps_per_orbit(semi_major_axis: f64) -> usize {
    let dt = DAYS_PER_REAL_SECOND * 86400.0 / TICK_RATE;
    (orbital_period(semi_major_axis) / dt).round() as usize
}
