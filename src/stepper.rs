use crate::dynamics;
use crate::pendulum::Pendulum;

/// Per-frame stepping context, passed explicitly so nothing in the physics
/// path reads ambient state.
#[derive(Clone, Copy, Debug)]
pub struct StepContext {
    pub frame_delta: f64,
    pub timescale: f64,
    pub substeps: u32,
}

impl StepContext {
    pub fn substep_dt(&self) -> f64 {
        self.frame_delta * self.timescale / self.substeps as f64
    }
}

/// Advances every pendulum by one frame.
///
/// Instances never read each other, so the population is split into one
/// contiguous chunk per pool thread and stepped in a fork/join scope. The
/// scope does not return until every chunk is done, which is the barrier the
/// renderer relies on before it reads derived positions.
pub fn advance(population: &mut [Pendulum], ctx: &StepContext) {
    if population.is_empty() {
        return;
    }

    let workers = rayon::current_num_threads();
    let chunk = (population.len() + workers - 1) / workers;

    rayon::scope(|s| {
        for slice in population.chunks_mut(chunk) {
            s.spawn(move |_| {
                for p in slice {
                    step_instance(p, ctx);
                }
            });
        }
    });
}

// The whole per-frame treatment of a single instance: sub-step the
// integrator, wrap both angles once, derive the mass positions.
fn step_instance(p: &mut Pendulum, ctx: &StepContext) {
    let dt = ctx.substep_dt();
    for _ in 0..ctx.substeps {
        dynamics::step_substep(p, dt);
    }

    p.angle1 = dynamics::wrap_angle(p.angle1);
    p.angle2 = dynamics::wrap_angle(p.angle2);
    p.update_endpoints();
}
