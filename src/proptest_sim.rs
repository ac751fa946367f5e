//! Property-based tests for the gravity core using proptest.
//!
//! These verify the pairwise-force and stepping invariants across a wide
//! range of body placements and masses.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::body::{Body, BodySpec};
use crate::simulation::Simulation;
use crate::types::AU_TO_METERS;

fn body_at(pos: DVec2, mass: f64) -> Body {
    Body::from_spec(&BodySpec::new(pos, DVec2::ZERO, mass, 1.0, false))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: the force on A from B is equal and opposite to
    /// the force on B from A, for any separated pair.
    #[test]
    fn prop_force_symmetry(
        ax in -10.0f64..10.0,
        ay in -10.0f64..10.0,
        bx in -10.0f64..10.0,
        by in -10.0f64..10.0,
        mass_a in 1e20f64..1e31,
        mass_b in 1e20f64..1e31,
    ) {
        let a_pos = DVec2::new(ax, ay) * AU_TO_METERS;
        let b_pos = DVec2::new(bx, by) * AU_TO_METERS;
        // Keep the pair separated by at least a hundredth of an AU
        prop_assume!(a_pos.distance(b_pos) > 0.01 * AU_TO_METERS);

        let a = body_at(a_pos, mass_a);
        let b = body_at(b_pos, mass_b);

        let f_ab = a.attraction(&b);
        let f_ba = b.attraction(&a);

        let scale = f_ab.length().max(f_ba.length());
        prop_assert!((f_ab + f_ba).length() <= scale * 1e-12,
            "Forces not opposite: {:?} vs {:?}", f_ab, f_ba);

        // And gravity attracts: the force on A points at B
        prop_assert!(f_ab.dot(b_pos - a_pos) > 0.0);
    }

    /// The spin phase never leaves [0, 360), whatever the cycle length and
    /// however many steps are taken.
    #[test]
    fn prop_rotation_phase_in_range(
        cycle_days in 0.1f64..1000.0,
        initial_degrees in -1000.0f64..1000.0,
        steps in 1usize..200,
        dt in 60.0f64..1e6,
    ) {
        let mut body = Body::from_spec(&BodySpec {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            mass: 1e24,
            radius: 1.0,
            is_star: false,
            rotation_cycle_days: Some(cycle_days),
            initial_rotation_degrees: initial_degrees,
        });

        for _ in 0..steps {
            body.advance(DVec2::ZERO, dt);
            prop_assert!((0.0..360.0).contains(&body.rotation_degrees));
        }
    }

    /// One trail point per step, unconditionally, for every body.
    #[test]
    fn prop_trail_length_equals_steps(steps in 0usize..300) {
        let mut sim = Simulation::new(
            &crate::test_utils::fixtures::star_and_planet(),
            60.0,
            10.0,
        ).unwrap();

        for _ in 0..steps {
            sim.step();
        }

        for body in sim.bodies() {
            prop_assert_eq!(body.orbit_history.len(), steps);
        }
    }

    /// Two simulations built from the same specs stay bit-identical.
    #[test]
    fn prop_step_determinism(steps in 1usize..200) {
        let specs = crate::test_utils::fixtures::solar_system_like();
        let mut a = Simulation::new(&specs, 60.0, 10.0).unwrap();
        let mut b = Simulation::new(&specs, 60.0, 10.0).unwrap();

        for _ in 0..steps {
            a.step();
            b.step();
        }

        for (left, right) in a.bodies().iter().zip(b.bodies()) {
            prop_assert_eq!(left.position, right.position);
            prop_assert_eq!(left.velocity, right.velocity);
        }
    }
}
