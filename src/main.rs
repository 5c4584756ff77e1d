// hides console on release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod clock;
mod config;
mod dynamics;
mod pendulum;
mod render;
mod stepper;

use macroquad::prelude::*;
use macroquad::rand::ChooseRandom;

use clock::{Fps, FrameClock};
use config::SimConfig;
use pendulum::spawn_population;
use stepper::{advance, StepContext};

enum RunOutcome {
    Restart,
    Quit,
}

async fn run(cfg: &SimConfig) -> RunOutcome {
    let mut population = spawn_population(cfg, render::world_center());

    // Draw order is its own shuffled permutation; the physics Vec stays in
    // index order so the per-index offsets and colors line up across
    // restarts.
    let mut draw_order: Vec<usize> = (0..population.len()).collect();
    draw_order.shuffle();

    let mut clock = FrameClock::new(cfg.warmup_secs);
    let mut fps = Fps::new(64);

    loop {
        let frame_delta = clock.tick();
        fps.update();

        if is_key_pressed(KeyCode::Escape) {
            return RunOutcome::Quit;
        }
        if is_key_pressed(KeyCode::R) {
            return RunOutcome::Restart;
        }

        // Physics waits out the warm-up window and sits out any frame whose
        // delta is too large to integrate through.
        if clock.physics_live() && frame_delta <= cfg.max_frame_delta {
            let ctx = StepContext {
                frame_delta,
                timescale: cfg.timescale,
                substeps: cfg.substeps,
            };
            advance(&mut population, &ctx);
        }

        render::clear();

        // All rods first, then all markers, so no rod crosses a marker.
        for &i in &draw_order {
            render::draw_rods(&population[i]);
        }
        for &i in &draw_order {
            render::draw_markers(&population[i]);
        }

        draw_text(&format!("FPS: {}", fps.fps()), 10.0, 20.0, 20.0, BLACK);
        draw_text("R to restart", 10.0, 40.0, 20.0, BLACK);
        if !clock.physics_live() {
            let remaining = (cfg.warmup_secs - clock.elapsed()).max(0.0);
            draw_text(
                &format!("starting in {:.1}", remaining),
                10.0,
                60.0,
                20.0,
                BLACK,
            );
        }

        if fps.frame() % 120 == 0 {
            info!("FPS: {}", fps.fps());

            // A near-singular configuration can push an instance to
            // non-finite values; say so instead of rendering garbage
            // silently.
            let broken = population.iter().filter(|p| !p.is_finite()).count();
            if broken > 0 {
                warn!("{} of {} pendulums in a non-finite state", broken, population.len());
            }
        }

        next_frame().await
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Double Pendulum Swarm".to_owned(),
        window_width: render::SCREEN_WIDTH as i32,
        window_height: render::SCREEN_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let cfg = SimConfig::default();
    loop {
        if let RunOutcome::Quit = run(&cfg).await {
            break;
        }
    }
}
