use std::f64::consts::TAU;

use macroquad::prelude::DVec2;

use crate::config::SimConfig;

/// State of one double pendulum. Angles are measured from vertical, in
/// radians, kept in (-PI, PI] between frames. `joint` and `end` are derived
/// positions of the two masses relative to `origin`, in world metres.
#[derive(Clone, Debug)]
pub struct Pendulum {
    pub angle1: f64,
    pub angle2: f64,
    pub vel1: f64,
    pub vel2: f64,
    pub accel1: f64,
    pub accel2: f64,
    pub mass1: f64,
    pub mass2: f64,
    pub length1: f64,
    pub length2: f64,
    pub origin: DVec2,
    pub color: (u8, u8, u8),
    pub joint: DVec2,
    pub end: DVec2,
}

impl Pendulum {
    pub fn new(
        angle1: f64,
        angle2: f64,
        mass1: f64,
        mass2: f64,
        length1: f64,
        length2: f64,
    ) -> Pendulum {
        let mut p = Pendulum {
            angle1,
            angle2,
            vel1: 0.0,
            vel2: 0.0,
            accel1: 0.0,
            accel2: 0.0,
            mass1,
            mass2,
            length1,
            length2,
            origin: DVec2::ZERO,
            color: (255, 255, 255),
            joint: DVec2::ZERO,
            end: DVec2::ZERO,
        };
        p.update_endpoints();
        p
    }

    /// Recomputes the two mass positions from the current angles.
    pub fn update_endpoints(&mut self) {
        self.joint = DVec2::new(
            self.length1 * self.angle1.sin(),
            -self.length1 * self.angle1.cos(),
        );
        self.end = self.joint
            + DVec2::new(
                self.length2 * self.angle2.sin(),
                -self.length2 * self.angle2.cos(),
            );
    }

    /// True while every dynamic quantity is still a finite number. The
    /// acceleration formula has a singular set of configurations, so a run
    /// can in principle blow up; this is the probe for it.
    pub fn is_finite(&self) -> bool {
        self.angle1.is_finite()
            && self.angle2.is_finite()
            && self.vel1.is_finite()
            && self.vel2.is_finite()
            && self.accel1.is_finite()
            && self.accel2.is_finite()
    }
}

/// Builds the whole population hanging at the release angle with zero
/// velocity. Each instance gets a vanishingly small extra angle offset per
/// index so the visually coincident trajectories diverge over time, and a
/// color from the sine palette.
pub fn spawn_population(cfg: &SimConfig, origin: DVec2) -> Vec<Pendulum> {
    (0..cfg.population)
        .map(|i| {
            let angle = cfg.release_angle + i as f64 * cfg.angle_offset;
            let mut p = Pendulum::new(
                angle,
                angle,
                cfg.mass1,
                cfg.mass2,
                cfg.length1,
                cfg.length2,
            );
            p.origin = origin;
            p.color = palette_color(i, cfg.population);
            p
        })
        .collect()
}

// Three incommensurate frequencies over the population index give every
// instance its own hue without any shared lookup table.
fn palette_color(index: usize, population: usize) -> (u8, u8, u8) {
    let freq_r = 5.0 * TAU / population as f64;
    let freq_g = 7.0 * TAU / population as f64;
    let freq_b = 11.0 * TAU / population as f64;
    let i = index as f64;

    let r = ((freq_r * i).sin() + 1.0) * 127.5;
    let g = ((freq_g * i).sin() + 1.0) * 127.5;
    let b = ((freq_b * i).cos() + 1.0) * 127.5;

    (r as u8, g as u8, b as u8)
}
