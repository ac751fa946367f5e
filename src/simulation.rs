//! Simulation container: owns the bodies and advances them in lockstep.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::body::{Body, BodySpec};
use crate::types::{RENDER_SCALE, SECONDS_PER_DAY};

/// Configuration errors detected when constructing a simulation.
///
/// All of these would surface later as a division by zero or a meaningless
/// trajectory, so construction rejects them up front.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("simulation requires at least one body")]
    NoBodies,

    #[error("exactly one body must be the star, found {0}")]
    StarCount(usize),

    #[error("body {index} has non-positive mass {mass} kg")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("bodies {first} and {second} occupy the same position")]
    CoincidentBodies { first: usize, second: usize },

    #[error("invalid tick rate {0} (must be positive)")]
    InvalidTickRate(f64),

    #[error("invalid time scale {0} sim-days per second (must be positive)")]
    InvalidTimeScale(f64),

    #[error("body {index} has non-positive rotation cycle of {days} days")]
    InvalidRotationCycle { index: usize, days: f64 },
}

/// Screen-space mapping for render-state queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
    /// Offset added after scaling, in display units. The default camera is
    /// centred on the origin.
    pub center_offset: DVec2,
}

/// Read-only projection of one body for the render layer.
#[derive(Clone, Debug)]
pub struct RenderState {
    /// Body position mapped to display units.
    pub screen_position: DVec2,
    /// Orbit trail mapped to display units, oldest point first.
    pub orbit_points: Vec<DVec2>,
    /// Spin phase in degrees, [0, 360).
    pub rotation_degrees: f64,
    /// Distance to the star in meters as of the most recent step.
    pub distance_to_star: f64,
    /// Whether this body is the star.
    pub is_star: bool,
    /// Display radius in screen units.
    pub radius: f64,
}

/// The physics core: a fixed set of mutually gravitating bodies advanced
/// by a constant timestep.
///
/// The render layer reads state strictly between `step` calls; queries are
/// pure and never touch the physics.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    dt: f64,
    steps: u64,
}

impl Simulation {
    /// Validate the body specs and build the simulation.
    ///
    /// `ticks_per_second` is the host tick rate driving `step`;
    /// `days_per_real_second` is the simulated time that one real second
    /// should cover. Together they fix the per-step timestep:
    /// `dt = days_per_real_second * 86400 / ticks_per_second`.
    pub fn new(
        specs: &[BodySpec],
        ticks_per_second: f64,
        days_per_real_second: f64,
    ) -> Result<Self, SimulationError> {
        if specs.is_empty() {
            return Err(SimulationError::NoBodies);
        }
        if !(ticks_per_second > 0.0) {
            return Err(SimulationError::InvalidTickRate(ticks_per_second));
        }
        if !(days_per_real_second > 0.0) {
            return Err(SimulationError::InvalidTimeScale(days_per_real_second));
        }

        let stars = specs.iter().filter(|spec| spec.is_star).count();
        if stars != 1 {
            return Err(SimulationError::StarCount(stars));
        }

        for (index, spec) in specs.iter().enumerate() {
            if !(spec.mass > 0.0) {
                return Err(SimulationError::NonPositiveMass {
                    index,
                    mass: spec.mass,
                });
            }
            if let Some(days) = spec.rotation_cycle_days
                && !(days > 0.0)
            {
                return Err(SimulationError::InvalidRotationCycle { index, days });
            }
        }

        for first in 0..specs.len() {
            for second in (first + 1)..specs.len() {
                if specs[first].position == specs[second].position {
                    return Err(SimulationError::CoincidentBodies { first, second });
                }
            }
        }

        let dt = days_per_real_second * SECONDS_PER_DAY / ticks_per_second;

        Ok(Self {
            bodies: specs.iter().map(Body::from_spec).collect(),
            dt,
            steps: 0,
        })
    }

    /// Seconds of simulated time covered by one step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds elapsed since construction.
    pub fn elapsed_seconds(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// The bodies, in force-summation order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance every body by exactly one timestep.
    ///
    /// Bodies are swept in insertion order against the live collection:
    /// a body later in the order sums forces from the already-advanced
    /// positions of earlier bodies within the same step. The distance to
    /// the star is recorded from the same sweep, so it reflects the most
    /// recent force evaluation.
    pub fn step(&mut self) {
        for i in 0..self.bodies.len() {
            let body = &self.bodies[i];
            let mut net_force = DVec2::ZERO;
            let mut star_distance = None;

            for (j, other) in self.bodies.iter().enumerate() {
                if j == i {
                    continue;
                }
                net_force += body.attraction(other);
                if other.is_star {
                    star_distance = Some(body.position.distance(other.position));
                }
            }

            let body = &mut self.bodies[i];
            if let Some(distance) = star_distance {
                body.distance_to_star = distance;
            }
            body.advance(net_force, self.dt);
        }
        self.steps += 1;
    }

    /// Project one body into screen space for drawing.
    ///
    /// Pure: safe to call any number of times between steps. Returns `None`
    /// for an out-of-range index.
    pub fn render_state_of(&self, index: usize, viewport: Viewport) -> Option<RenderState> {
        let body = self.bodies.get(index)?;
        let project = |point: DVec2| point * RENDER_SCALE + viewport.center_offset;

        Some(RenderState {
            screen_position: project(body.position),
            orbit_points: body.orbit_history.iter().copied().map(project).collect(),
            rotation_degrees: body.rotation_degrees,
            distance_to_star: body.distance_to_star,
            is_star: body.is_star,
            radius: body.radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use crate::types::AU_TO_METERS;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_specs_rejected() {
        let err = Simulation::new(&[], 60.0, 10.0).unwrap_err();
        assert_eq!(err, SimulationError::NoBodies);
    }

    #[test]
    fn test_star_count_enforced() {
        let mut specs = fixtures::star_and_planet();
        specs[1].is_star = true;
        assert_eq!(
            Simulation::new(&specs, 60.0, 10.0).unwrap_err(),
            SimulationError::StarCount(2)
        );

        specs[0].is_star = false;
        specs[1].is_star = false;
        assert_eq!(
            Simulation::new(&specs, 60.0, 10.0).unwrap_err(),
            SimulationError::StarCount(0)
        );
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let mut specs = fixtures::star_and_planet();
        specs[1].mass = 0.0;
        assert_eq!(
            Simulation::new(&specs, 60.0, 10.0).unwrap_err(),
            SimulationError::NonPositiveMass {
                index: 1,
                mass: 0.0
            }
        );
    }

    #[test]
    fn test_coincident_bodies_rejected() {
        let mut specs = fixtures::star_and_planet();
        specs[1].position = specs[0].position;
        assert_eq!(
            Simulation::new(&specs, 60.0, 10.0).unwrap_err(),
            SimulationError::CoincidentBodies {
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let specs = fixtures::star_and_planet();
        assert_eq!(
            Simulation::new(&specs, 0.0, 10.0).unwrap_err(),
            SimulationError::InvalidTickRate(0.0)
        );
        assert_eq!(
            Simulation::new(&specs, 60.0, -1.0).unwrap_err(),
            SimulationError::InvalidTimeScale(-1.0)
        );
    }

    #[test]
    fn test_invalid_rotation_cycle_rejected() {
        let mut specs = fixtures::star_and_planet();
        specs[1].rotation_cycle_days = Some(0.0);
        assert_eq!(
            Simulation::new(&specs, 60.0, 10.0).unwrap_err(),
            SimulationError::InvalidRotationCycle {
                index: 1,
                days: 0.0
            }
        );
    }

    #[test]
    fn test_timestep_derivation() {
        let sim = Simulation::new(&fixtures::star_and_planet(), 60.0, 10.0).unwrap();
        // 10 simulated days per real second at 60 ticks/s
        assert_relative_eq!(sim.dt(), 14400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_body_never_accelerates() {
        let star = fixtures::star_and_planet()[0].clone();
        let mut sim = Simulation::new(&[star], 60.0, 10.0).unwrap();

        for _ in 0..100 {
            sim.step();
        }

        let body = &sim.bodies()[0];
        assert_eq!(body.velocity, DVec2::ZERO);
        assert_eq!(body.position, DVec2::ZERO);
    }

    #[test]
    fn test_step_updates_distance_to_star() {
        let mut sim = Simulation::new(&fixtures::star_and_planet(), 60.0, 10.0).unwrap();
        assert_eq!(sim.bodies()[1].distance_to_star, 0.0);

        sim.step();

        let planet = &sim.bodies()[1];
        // Distance was sampled before the planet moved this step
        assert_relative_eq!(planet.distance_to_star, AU_TO_METERS, max_relative = 1e-12);
        // The star itself never reports a distance
        assert_eq!(sim.bodies()[0].distance_to_star, 0.0);
    }

    #[test]
    fn test_steps_counted_in_lockstep_with_trails() {
        let mut sim = Simulation::new(&fixtures::star_and_planet(), 60.0, 10.0).unwrap();
        for _ in 0..17 {
            sim.step();
        }
        assert_eq!(sim.steps(), 17);
        for body in sim.bodies() {
            assert_eq!(body.orbit_history.len(), 17);
        }
        assert_relative_eq!(sim.elapsed_seconds(), 17.0 * 14400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unstepped_simulation_matches_construction() {
        let specs = fixtures::star_and_planet();
        let sim = Simulation::new(&specs, 60.0, 10.0).unwrap();

        for (body, spec) in sim.bodies().iter().zip(&specs) {
            assert_eq!(body.position, spec.position);
            assert_eq!(body.velocity, spec.velocity);
            assert_eq!(body.distance_to_star, 0.0);
            assert!(body.orbit_history.is_empty());
        }
        assert_eq!(sim.steps(), 0);
    }

    #[test]
    fn test_identical_systems_stay_bit_identical() {
        let specs = fixtures::solar_system_like();
        let mut a = Simulation::new(&specs, 60.0, 10.0).unwrap();
        let mut b = Simulation::new(&specs, 60.0, 10.0).unwrap();

        for _ in 0..500 {
            a.step();
            b.step();
        }

        for (left, right) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(left.position, right.position);
            assert_eq!(left.velocity, right.velocity);
            assert_eq!(left.distance_to_star, right.distance_to_star);
        }
    }

    #[test]
    fn test_render_state_screen_mapping() {
        let mut sim = Simulation::new(&fixtures::star_and_planet(), 60.0, 10.0).unwrap();
        sim.step();

        let viewport = Viewport {
            center_offset: DVec2::new(400.0, 400.0),
        };
        let state = sim.render_state_of(1, viewport).unwrap();
        let body = &sim.bodies()[1];

        let expected = body.position * crate::types::RENDER_SCALE + viewport.center_offset;
        assert_eq!(state.screen_position, expected);

        assert_eq!(state.orbit_points.len(), body.orbit_history.len());
        for (point, raw) in state.orbit_points.iter().zip(&body.orbit_history) {
            assert_eq!(
                *point,
                *raw * crate::types::RENDER_SCALE + viewport.center_offset
            );
        }
        assert!(!state.is_star);
    }

    #[test]
    fn test_render_state_out_of_range() {
        let sim = Simulation::new(&fixtures::star_and_planet(), 60.0, 10.0).unwrap();
        assert!(sim.render_state_of(2, Viewport::default()).is_none());
    }
}
