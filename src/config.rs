use std::f64::consts::PI;

/// Everything the simulation is allowed to know at start-up. There is no
/// runtime surface for any of these; a restart rebuilds the scene from the
/// same values.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub population: usize,
    pub mass1: f64,
    pub mass2: f64,
    pub length1: f64,
    pub length2: f64,
    /// Integration sub-steps per frame. More sub-steps trade compute for
    /// fidelity without changing the algorithm.
    pub substeps: u32,
    pub timescale: f64,
    /// Physics is withheld this many wall-clock seconds after launch so the
    /// window loop settles before motion begins.
    pub warmup_secs: f64,
    /// Frames whose delta exceeds this are skipped entirely; a dragged or
    /// suspended window must not inject one giant step.
    pub max_frame_delta: f64,
    /// Angle both rods are released from, measured from vertical.
    pub release_angle: f64,
    /// Extra release angle per population index. Small enough that the
    /// instances start visually on top of each other, large enough that
    /// chaos pulls the trajectories apart within a minute.
    pub angle_offset: f64,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            population: 100,
            mass1: 2.0,
            mass2: 2.0,
            length1: 1.0,
            length2: 1.0,
            substeps: 100,
            timescale: 1.0,
            warmup_secs: 2.0,
            max_frame_delta: 0.1,
            release_angle: PI / 1.5,
            angle_offset: 1e-11,
        }
    }
}
