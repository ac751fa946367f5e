//! Core physics constants and host-side control state.

use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters (mean Earth-Sun distance)
pub const AU_TO_METERS: f64 = 149.6e9;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Display units per astronomical unit.
pub const PIXELS_PER_AU: f64 = 250.0;

/// Render scale: display units per meter. 1 AU = 250 display units,
/// so the inner solar system fits an 800-unit viewport.
pub const RENDER_SCALE: f64 = PIXELS_PER_AU / AU_TO_METERS;

/// Host-side control state for the simulation loop.
///
/// Pausing is a caller decision to skip stepping; the physics core has
/// no pause state of its own.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationControl {
    /// Whether the simulation is paused
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        // 1 AU should convert to correct meters
        let one_au_meters = 1.0 * AU_TO_METERS;
        assert!((one_au_meters - 149.6e9).abs() < 1.0);

        // Round trip
        let au = one_au_meters * METERS_TO_AU;
        assert!((au - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_render_scale_maps_one_au_to_250_pixels() {
        assert!((AU_TO_METERS * RENDER_SCALE - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_control_default_runs() {
        let control = SimulationControl::default();
        assert!(!control.paused);
    }
}
