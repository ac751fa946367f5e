//! Preset body definitions for the inner solar system.
//!
//! Masses and mean orbital velocities are the usual textbook values; each
//! planet starts on an axis at its mean distance from the Sun.

use bevy::math::DVec2;

use super::{PlanetId, PlanetPreset};

/// Host tick rate driving the fixed physics step, in Hz.
pub const TICK_RATE: f64 = 60.0;

/// Simulated days covered per real second of wall-clock time.
pub const DAYS_PER_REAL_SECOND: f64 = 10.0;

/// All bodies of the built-in scenario, in force-summation order.
pub static SOLAR_SYSTEM: &[PlanetPreset] = &[SUN, MERCURY, VENUS, EARTH, MARS];

/// The Sun. The one star of the system; every other body reports its
/// distance to it.
pub static SUN: PlanetPreset = PlanetPreset {
    id: PlanetId::Sun,
    position_au: DVec2::new(0.0, 0.0),
    velocity: DVec2::new(0.0, 0.0),
    mass: 1.98892e30,
    radius: 30.0,
    is_star: true,
    rotation_cycle_days: None,
    initial_rotation_degrees: 0.0,
    sprite: Some("sprites/sun.png"),
};

/// Mercury, retrograde start on the positive x-axis. The only body with a
/// spin animation (88-day cycle, matching its orbital period).
pub static MERCURY: PlanetPreset = PlanetPreset {
    id: PlanetId::Mercury,
    position_au: DVec2::new(0.387, 0.0),
    velocity: DVec2::new(0.0, -47_400.0),
    mass: 3.3e23,
    radius: 5.0,
    is_star: false,
    rotation_cycle_days: Some(88.0),
    initial_rotation_degrees: 180.0,
    sprite: Some("sprites/mercury.png"),
};

/// Venus, retrograde start on the positive x-axis.
pub static VENUS: PlanetPreset = PlanetPreset {
    id: PlanetId::Venus,
    position_au: DVec2::new(0.723, 0.0),
    velocity: DVec2::new(0.0, -35_020.0),
    mass: 4.8685e24,
    radius: 12.0,
    is_star: false,
    rotation_cycle_days: None,
    initial_rotation_degrees: 0.0,
    sprite: Some("sprites/venus.png"),
};

/// Earth, prograde start on the negative x-axis.
pub static EARTH: PlanetPreset = PlanetPreset {
    id: PlanetId::Earth,
    position_au: DVec2::new(-1.0, 0.0),
    velocity: DVec2::new(0.0, 29_783.0),
    mass: 5.9742e24,
    radius: 16.0,
    is_star: false,
    rotation_cycle_days: None,
    initial_rotation_degrees: 0.0,
    sprite: Some("sprites/earth.png"),
};

/// Mars, prograde start on the negative x-axis.
pub static MARS: PlanetPreset = PlanetPreset {
    id: PlanetId::Mars,
    position_au: DVec2::new(-1.524, 0.0),
    velocity: DVec2::new(0.0, 24_077.0),
    mass: 6.39e23,
    radius: 8.0,
    is_star: false,
    rotation_cycle_days: None,
    initial_rotation_degrees: 0.0,
    sprite: Some("sprites/mars.png"),
};
