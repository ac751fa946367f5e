//! Test utilities for the gravity simulation tests.
//!
//! Provides fixtures for building small systems and assertions for the
//! orbital invariants the tests lean on.

use bevy::math::DVec2;

use crate::types::{AU_TO_METERS, G};

/// Star mass used by the two-body fixtures, kilograms.
pub const STAR_MASS: f64 = 1.989e30;

/// Planet mass used by the two-body fixtures (Earth), kilograms.
pub const PLANET_MASS: f64 = 5.9742e24;

/// Fixtures for creating test systems.
pub mod fixtures {
    use super::*;
    use crate::body::BodySpec;
    use crate::scenarios::{PlanetPreset, SOLAR_SYSTEM};

    /// A star at the origin and an Earth-like planet at (-1 AU, 0) moving
    /// at its mean orbital speed.
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

    /// The full five-body preset, as construction specs.
    pub fn solar_system_like() -> Vec<BodySpec> {
        SOLAR_SYSTEM.iter().map(PlanetPreset::body_spec).collect()
    }

    /// Circular-orbit speed at the given distance from the fixture star.
    pub fn circular_speed(distance: f64) -> f64 {
        (G * STAR_MASS / distance).sqrt()
    }
}

/// Assertions for verifying orbital invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy around the fixture star.
    ///
    /// E = v²/2 - GM/r; negative for bound orbits.
    pub fn orbital_energy(pos: DVec2, vel: DVec2) -> f64 {
        let r = pos.length();
        let v = vel.length();
        0.5 * v * v - G * STAR_MASS / r
    }

    /// Specific angular momentum (2D scalar).
    pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
        pos.x * vel.y - pos.y * vel.x
    }

    /// Orbital period from Kepler's third law: T = 2π√(a³/GM).
    pub fn orbital_period(semi_major_axis: f64) -> f64 {
        use std::f64::consts::TAU;
        TAU * (semi_major_axis.powi(3) / (G * STAR_MASS)).sqrt()
    }
}
