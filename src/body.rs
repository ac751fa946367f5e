//! Celestial body state, pairwise gravity, and the per-step integration.

use bevy::math::DVec2;

use crate::types::{G, SECONDS_PER_DAY};

/// Initial parameters for one body, consumed by `Simulation::new`.
#[derive(Clone, Debug)]
pub struct BodySpec {
    /// Initial position in meters.
    pub position: DVec2,
    /// Initial velocity in meters per second.
    pub velocity: DVec2,
    /// Mass in kilograms.
    pub mass: f64,
    /// Display radius in screen units. Not used by the physics.
    pub radius: f64,
    /// Whether this body is the star other bodies report distance to.
    pub is_star: bool,
    /// Self-rotation period in days, if the body has a spin animation.
    pub rotation_cycle_days: Option<f64>,
    /// Initial spin phase in degrees.
    pub initial_rotation_degrees: f64,
}

impl BodySpec {
    /// Create a spec with no spin animation.
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, radius: f64, is_star: bool) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            is_star,
            rotation_cycle_days: None,
            initial_rotation_degrees: 0.0,
        }
    }
}

/// Physical state of a body in the simulation.
/// Uses f64 (DVec2) for physics accuracy over solar-system scales.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Position in meters, star-centred frame.
    pub position: DVec2,
    /// Velocity in meters per second.
    pub velocity: DVec2,
    /// Mass in kilograms.
    pub mass: f64,
    /// Display radius in screen units.
    pub radius: f64,
    /// Whether this body is the star.
    pub is_star: bool,
    /// Distance to the star as of the most recent force evaluation, meters.
    /// Zero until the first step, and always zero for the star itself.
    pub distance_to_star: f64,
    /// Every position this body has occupied, one sample per step.
    pub orbit_history: Vec<DVec2>,
    /// Self-rotation period in days, if any.
    pub rotation_cycle_days: Option<f64>,
    /// Current spin phase in degrees, always in [0, 360).
    pub rotation_degrees: f64,
}

impl Body {
    /// Build the initial body state from its spec.
    pub fn from_spec(spec: &BodySpec) -> Self {
        Self {
            position: spec.position,
            velocity: spec.velocity,
            mass: spec.mass,
            radius: spec.radius,
            is_star: spec.is_star,
            distance_to_star: 0.0,
            orbit_history: Vec::new(),
            rotation_cycle_days: spec.rotation_cycle_days,
            rotation_degrees: spec.initial_rotation_degrees.rem_euclid(360.0),
        }
    }

    /// Gravitational force exerted on this body by `other`, in newtons.
    ///
    /// Magnitude is `G·m₁·m₂/d²`; the direction is the angle from this body
    /// toward `other`, decomposed into components. The two bodies must be at
    /// distinct positions.
    pub fn attraction(&self, other: &Body) -> DVec2 {
        let delta = other.position - self.position;
        let distance = delta.length();

        let force = G * self.mass * other.mass / (distance * distance);
        let theta = delta.y.atan2(delta.x);
        DVec2::new(theta.cos() * force, theta.sin() * force)
    }

    /// Advance one timestep of `dt` seconds under `net_force`.
    ///
    /// Semi-implicit Euler: the velocity absorbs this step's acceleration
    /// first, and the position then moves with the updated velocity. The new
    /// position is appended to the orbit history every step.
    pub fn advance(&mut self, net_force: DVec2, dt: f64) {
        self.velocity += net_force / self.mass * dt;
        self.position += self.velocity * dt;
        self.orbit_history.push(self.position);

        if let Some(cycle_days) = self.rotation_cycle_days {
            let step_degrees = 360.0 * (dt / (SECONDS_PER_DAY * cycle_days));
            self.rotation_degrees = (self.rotation_degrees + step_degrees).rem_euclid(360.0);
        }
    }
}
