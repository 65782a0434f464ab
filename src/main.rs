//! Gatefall entry point
//!
//! Headless demo driver: runs the simulation at a fixed timestep with a
//! small autopilot supplying activations, and logs the event stream a
//! presentation layer would consume.

use std::time::{SystemTime, UNIX_EPOCH};

use gatefall::GameConfig;
use gatefall::consts::{MAX_SUBSTEPS, SIM_DT};
use gatefall::sim::{Category, Game, GameEvent, GamePhase, TickInput, tick};

/// Simulated wall-clock budget for the demo.
const DEMO_SECONDS: f32 = 90.0;
/// Stop early once this many runs have finished.
const MAX_RUNS: u32 = 3;

/// Session stats, printed as JSON at exit.
#[derive(serde::Serialize)]
struct DemoSummary {
    seed: u64,
    runs_finished: u32,
    best_score: u32,
    sim_seconds: f32,
}

fn main() {
    env_logger::init();
    log::info!("Gatefall (headless demo) starting...");

    let config = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(config, seed);

    let mut summary = DemoSummary {
        seed,
        runs_finished: 0,
        best_score: 0,
        sim_seconds: 0.0,
    };

    // Fixed timestep with an accumulator, the way a windowed frontend would
    // drive it. Headless frames arrive at a steady 60 Hz.
    let frame_dt = 1.0 / 60.0;
    let total_frames = (DEMO_SECONDS / frame_dt) as u32;
    let mut accumulator = 0.0f32;

    'demo: for _ in 0..total_frames {
        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // Each tick gets a fresh one-shot decision from the autopilot.
            let input = autopilot(&game);
            for event in tick(&mut game, &input, SIM_DT) {
                report(&event);
                if let GameEvent::GameOver { score } = event {
                    summary.runs_finished += 1;
                    summary.best_score = summary.best_score.max(score);
                    if summary.runs_finished >= MAX_RUNS {
                        break 'demo;
                    }
                }
            }
            accumulator -= SIM_DT;
            substeps += 1;
            summary.sim_seconds += SIM_DT;
        }
    }

    // A run cut off by the time budget still counts toward the best score.
    let final_run = game.run_state();
    summary.best_score = summary.best_score.max(final_run.score);
    log::info!(
        "demo finished: {:?} at score {}, speed factor {:.0}",
        final_run.phase,
        final_run.score,
        final_run.speed_factor
    );

    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{json}");
    }
}

/// Optional JSON config override via the GATEFALL_CONFIG env var.
fn load_config() -> GameConfig {
    let Ok(path) = std::env::var("GATEFALL_CONFIG") else {
        return GameConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Bad config in {}: {}; using defaults", path, err);
                GameConfig::default()
            }
        },
        Err(err) => {
            log::warn!("Cannot read {}: {}; using defaults", path, err);
            GameConfig::default()
        }
    }
}

/// Flap when sinking below the next gap, restart when the run is over.
fn autopilot(game: &Game) -> TickInput {
    match game.phase() {
        GamePhase::GameOver => TickInput { activate: true },
        GamePhase::Playing => {
            let player = game.world().player();
            let target = next_gap_center(game).unwrap_or(game.config().mid_y());
            TickInput {
                activate: player.vel.y < 0.0 && player.pos.y < target,
            }
        }
    }
}

/// Vertical center of the nearest gap still ahead of the player.
fn next_gap_center(game: &Game) -> Option<f32> {
    let player_x = game.world().player().pos.x;
    let half_width = game.config().pipe_width / 2.0;
    game.world()
        .bodies()
        .iter()
        .filter(|body| body.category == Category::Gate)
        .filter(|body| body.pos.x + half_width > player_x)
        .min_by(|a, b| {
            a.pos
                .x
                .partial_cmp(&b.pos.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|body| body.pos.y)
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::ScoreChanged { score } => log::info!("score {}", score),
        GameEvent::UrgencyReached { speed_factor } => {
            log::info!("urgency up, speed factor {:.0}", speed_factor)
        }
        GameEvent::MilestoneReached => log::info!("milestone"),
        GameEvent::GameOver { score } => log::info!("game over at {}", score),
        GameEvent::Activated => log::trace!("flap"),
        GameEvent::Restarted => log::info!("new run"),
    }
}
