//! Fixed timestep game tick
//!
//! One `tick` is the whole per-frame contract: handle the activation input,
//! step physics, feed classified contacts to the run state, then give the
//! spawner its slice of time. A tick always runs to completion before the
//! host reads anything back.

use glam::Vec2;

use super::classify::{ContactClass, classify};
use super::spawn::Spawner;
use super::state::{GameEvent, GamePhase, RunState};
use super::world::PhysicsWorld;
use crate::config::GameConfig;
use crate::consts::THRUST_SPEED;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// One-shot activation (tap/click/key). The driver sets this when an
    /// activation arrived since the last tick and clears it afterward;
    /// rapid repeats are independent activations.
    pub activate: bool,
}

/// A complete game: physics world, run state, and obstacle source.
///
/// The run state is private on purpose. Only the tick path writes it, so
/// score and phase cannot drift out of sync with the world.
pub struct Game {
    config: GameConfig,
    world: PhysicsWorld,
    run: RunState,
    spawner: Spawner,
}

impl Game {
    /// Build a fresh game from a validated config.
    ///
    /// # Panics
    ///
    /// On an invalid config. Malformed dimensions are a startup bug, not a
    /// runtime condition.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {err}");
        }
        log::info!(
            "new game: {}x{} play area, seed {}",
            config.width,
            config.height,
            seed
        );
        Self {
            world: PhysicsWorld::new(&config),
            run: RunState::new(),
            spawner: Spawner::new(seed),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn phase(&self) -> GamePhase {
        self.run.phase
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn speed_factor(&self) -> f32 {
        self.run.speed_factor
    }
}

/// Advance the game by one fixed timestep.
///
/// Events come back in occurrence order: activation outcomes first, then
/// whatever this step's contacts produced.
pub fn tick(game: &mut Game, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.activate {
        events.push(GameEvent::Activated);
        match game.run.phase {
            GamePhase::Playing => {
                let player = game.world.player_id();
                game.world
                    .apply_impulse(player, Vec2::new(0.0, THRUST_SPEED));
            }
            GamePhase::GameOver => restart(game, &mut events),
        }
    }

    // The spawner shares the world clock, so its dt scales the same way.
    let spawner_dt = dt * game.world.speed_multiplier();

    let contacts = game.world.step(dt);
    for contact in &contacts {
        match classify(contact) {
            ContactClass::Scoring => game.run.on_scoring(&mut events),
            ContactClass::Lethal => {
                if game.run.on_lethal(&mut events) {
                    game.world.set_speed_multiplier(0.0);
                    log::info!("run over at score {}", game.run.score);
                }
            }
        }
    }

    // Spawning comes last: new units join contact detection next tick.
    if game.run.phase == GamePhase::Playing {
        game.spawner
            .advance(&mut game.world, &game.config, spawner_dt);
    }

    events
}

fn restart(game: &mut Game, events: &mut Vec<GameEvent>) {
    if !game.run.on_restart(events) {
        return;
    }
    game.world.clear_units();
    game.world.reset_player(game.config.player_spawn());
    game.world.set_speed_multiplier(1.0);
    game.spawner.rearm();
    log::info!("run restarted");
}
