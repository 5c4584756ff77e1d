// Closed-form double pendulum dynamics and the sub-step integrator.
//
// https://en.wikipedia.org/wiki/Double_pendulum

use std::f64::consts::PI;

use crate::pendulum::Pendulum;

pub const G: f64 = 9.81;

/// Angular accelerations of both rods from the current angles and rates.
///
/// The shared denominator vanishes on a measure-zero set of angle
/// configurations; the result is non-finite there. That singularity is a
/// property of the system itself and is left unguarded.
#[allow(clippy::too_many_arguments)]
pub fn angular_accelerations(
    angle1: f64,
    angle2: f64,
    vel1: f64,
    vel2: f64,
    mass1: f64,
    mass2: f64,
    length1: f64,
    length2: f64,
) -> (f64, f64) {
    let delta = angle1 - angle2;
    let denom = length2 * (2.0 * mass1 + mass2 - mass2 * (2.0 * angle1 - 2.0 * angle2).cos());

    let accel1 = (-G * (2.0 * mass1 + mass2) * angle1.sin()
        - mass2 * G * (angle1 - 2.0 * angle2).sin()
        - 2.0
            * delta.sin()
            * mass2
            * (vel2 * vel2 * length2 + vel1 * vel1 * length1 * delta.cos()))
        / denom;

    let accel2 = (2.0
        * delta.sin()
        * (vel1 * vel1 * length1 * (mass1 + mass2)
            + G * (mass1 + mass2) * angle1.cos()
            + vel2 * vel2 * length2 * mass2 * delta.cos()))
        / denom;

    (accel1, accel2)
}

/// One velocity-first Euler update over `dt` (the sub-step size, not the
/// frame delta). The computed accelerations are stored back on the instance.
pub fn step_substep(p: &mut Pendulum, dt: f64) {
    let (accel1, accel2) = angular_accelerations(
        p.angle1, p.angle2, p.vel1, p.vel2, p.mass1, p.mass2, p.length1, p.length2,
    );

    p.accel1 = accel1;
    p.accel2 = accel2;
    p.vel1 += accel1 * dt;
    p.vel2 += accel2 * dt;
    p.angle1 += p.vel1 * dt;
    p.angle2 += p.vel2 * dt;
}

/// Wraps an angle into (-PI, PI].
///
/// A single 2*PI correction is enough: a frame never advances an angle by
/// more than one revolution at realistic frame rates.
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > PI {
        angle - 2.0 * PI
    } else if angle <= -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Total mechanical energy (kinetic + potential, pivot as reference height).
/// Diagnostic only, never called while stepping.
#[allow(dead_code)]
pub fn mechanical_energy(p: &Pendulum) -> f64 {
    let v1_sq = p.length1 * p.length1 * p.vel1 * p.vel1;
    let v2_sq = v1_sq
        + p.length2 * p.length2 * p.vel2 * p.vel2
        + 2.0 * p.length1 * p.length2 * p.vel1 * p.vel2 * (p.angle1 - p.angle2).cos();

    let kinetic = 0.5 * p.mass1 * v1_sq + 0.5 * p.mass2 * v2_sq;

    let y1 = -p.length1 * p.angle1.cos();
    let y2 = y1 - p.length2 * p.angle2.cos();
    let potential = p.mass1 * G * y1 + p.mass2 * G * y2;

    kinetic + potential
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_pendulum(angle: f64) -> Pendulum {
        Pendulum::new(angle, angle, 2.0, 2.0, 1.0, 1.0)
    }

    #[test]
    fn accelerations_at_rest_release() {
        // Both rods at 2*PI/3 with zero velocity: the lower equation's
        // leading sin(a1 - a2) factor is exactly zero, and the upper one
        // reduces to -g * sin(2*PI/3).
        let angle = PI / 1.5;
        let (a1, a2) = angular_accelerations(angle, angle, 0.0, 0.0, 2.0, 2.0, 1.0, 1.0);

        assert_relative_eq!(a1, -8.495709211125343, epsilon = 1e-9);
        assert_eq!(a2, 0.0);
    }

    #[test]
    fn accelerations_zero_at_equilibrium() {
        let (a1, a2) = angular_accelerations(0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 1.0, 1.0);
        assert_eq!(a1, 0.0);
        assert_eq!(a2, 0.0);
    }

    #[test]
    fn equilibrium_stays_at_rest() {
        let mut p = test_pendulum(0.0);
        for _ in 0..10_000 {
            step_substep(&mut p, 1.0 / 6000.0);
        }
        assert_eq!(p.angle1, 0.0);
        assert_eq!(p.angle2, 0.0);
        assert_eq!(p.vel1, 0.0);
        assert_eq!(p.vel2, 0.0);
    }

    #[test]
    fn wrap_angle_keeps_canonical_range() {
        for &angle in &[0.0, 1.0, -1.0, PI, -PI, PI + 0.5, -PI - 0.5, 3.1, -3.1] {
            let wrapped = wrap_angle(angle);
            assert!(wrapped > -PI && wrapped <= PI, "angle {} -> {}", angle, wrapped);
        }
    }

    #[test]
    fn wrap_angle_is_idempotent() {
        for &angle in &[0.0, PI, -PI, PI + 1.0, -PI - 1.0, 2.5, -2.5] {
            let once = wrap_angle(angle);
            assert_eq!(wrap_angle(once), once);
        }
    }

    #[test]
    fn wrap_angle_passes_in_range_values_through() {
        assert_eq!(wrap_angle(0.3), 0.3);
        assert_eq!(wrap_angle(-3.0), -3.0);
        assert_eq!(wrap_angle(PI), PI);
    }

    #[test]
    fn wrap_angle_negative_pi_maps_to_positive() {
        assert_eq!(wrap_angle(-PI), PI);
    }

    #[test]
    fn energy_stays_bounded_over_one_second() {
        // Released from rest at 60 degrees, integrated for one simulated
        // second at the sub-step size a 60 fps frame with 100 sub-steps
        // produces. First-order integration drifts, but anything past a few
        // percent would mean the formulas are wrong.
        let mut p = test_pendulum(PI / 3.0);
        let e0 = mechanical_energy(&p);

        let dt = (1.0 / 60.0) / 100.0;
        for _ in 0..6000 {
            step_substep(&mut p, dt);
        }

        let e1 = mechanical_energy(&p);
        let drift = ((e1 - e0) / e0).abs();
        assert!(drift < 0.05, "energy drifted by {}", drift);
        assert!(p.is_finite());
    }

    #[test]
    fn energy_of_hanging_pendulum() {
        let p = test_pendulum(0.0);
        // Hanging straight down: no kinetic term, potential is
        // -(m1 + m2) * g * l1 - m2 * g * l2.
        assert_relative_eq!(mechanical_energy(&p), -(4.0 * G + 2.0 * G), epsilon = 1e-12);
    }
}
