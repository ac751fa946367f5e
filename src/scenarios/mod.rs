//! Preset planetary systems.
//!
//! The built-in scenario is the classic inner solar system: the Sun plus
//! Mercury, Venus, Earth, and Mars on their mean orbits.

pub mod presets;

use bevy::math::DVec2;

use crate::body::BodySpec;
use crate::simulation::{Simulation, SimulationError};
use crate::types::AU_TO_METERS;

pub use presets::{DAYS_PER_REAL_SECOND, SOLAR_SYSTEM, TICK_RATE};

/// Identifier for the bodies of the built-in solar system preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
}

impl PlanetId {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Sun => "Sun",
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
        }
    }
}

/// One entry in a preset system: the physics spec plus display attributes
/// the render layer needs (sprite path, display radius).
#[derive(Clone, Copy, Debug)]
pub struct PlanetPreset {
    pub id: PlanetId,
    /// Initial position in astronomical units.
    pub position_au: DVec2,
    /// Initial velocity in meters per second.
    pub velocity: DVec2,
    /// Mass in kilograms.
    pub mass: f64,
    /// Display radius in screen units.
    pub radius: f64,
    pub is_star: bool,
    /// Self-rotation period in days, if animated.
    pub rotation_cycle_days: Option<f64>,
    pub initial_rotation_degrees: f64,
    /// Texture for the sprite-style look, relative to the assets directory.
    pub sprite: Option<&'static str>,
}

impl PlanetPreset {
    /// Convert to the physics-core construction spec.
    pub fn body_spec(&self) -> BodySpec {
        BodySpec {
            position: self.position_au * AU_TO_METERS,
            velocity: self.velocity,
            mass: self.mass,
            radius: self.radius,
            is_star: self.is_star,
            rotation_cycle_days: self.rotation_cycle_days,
            initial_rotation_degrees: self.initial_rotation_degrees,
        }
    }
}

/// Build the default five-body solar system simulation.
pub fn solar_system() -> Result<Simulation, SimulationError> {
    let specs: Vec<BodySpec> = SOLAR_SYSTEM.iter().map(PlanetPreset::body_spec).collect();
    Simulation::new(&specs, TICK_RATE, DAYS_PER_REAL_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_preset_has_exactly_one_star() {
        let stars = SOLAR_SYSTEM.iter().filter(|preset| preset.is_star).count();
        assert_eq!(stars, 1);
        assert_eq!(SOLAR_SYSTEM[0].id, PlanetId::Sun);
    }

    #[test]
    fn test_solar_system_constructs() {
        let sim = solar_system().expect("preset must pass validation");
        assert_eq!(sim.len(), 5);
        // 10 simulated days per real second at the 60 Hz tick rate
        assert_relative_eq!(sim.dt(), 14400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_earth_preset_matches_mean_orbit() {
        let earth = SOLAR_SYSTEM
            .iter()
            .find(|preset| preset.id == PlanetId::Earth)
            .unwrap();
        let spec = earth.body_spec();
        assert_relative_eq!(spec.position.x, -AU_TO_METERS, max_relative = 1e-12);
        assert_relative_eq!(spec.velocity.y, 29_783.0, epsilon = 1e-9);
    }

    #[test]
    fn test_only_mercury_spins() {
        for preset in SOLAR_SYSTEM {
            match preset.id {
                PlanetId::Mercury => {
                    assert_eq!(preset.rotation_cycle_days, Some(88.0));
                    assert_eq!(preset.initial_rotation_degrees, 180.0);
                }
                _ => assert!(preset.rotation_cycle_days.is_none()),
            }
        }
    }
}
