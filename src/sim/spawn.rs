//! Obstacle generation
//!
//! A spawned unit is two solid columns plus the gate spanning the vertical
//! gap between them. The gap offset is drawn once per unit and shared by all
//! three bodies; everything scrolls left at constant speed and is culled two
//! play widths later.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, Category, Shape};
use super::world::PhysicsWorld;
use crate::config::GameConfig;
use crate::consts::{GATE_LEAD, SCROLL_SPEED, SPAWN_INTERVAL};

/// Periodic obstacle source.
///
/// Advances only while a run is in progress. The RNG stream is seeded once
/// per game; restarting a run re-arms the clock but keeps the stream, so a
/// second run sees fresh offsets.
#[derive(Debug, Clone)]
pub struct Spawner {
    clock: f32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            clock: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the interval clock by `dt`, spawning one unit per elapsed
    /// period. Returns how many units were spawned.
    pub fn advance(&mut self, world: &mut PhysicsWorld, config: &GameConfig, dt: f32) -> u32 {
        self.clock += dt;
        let mut spawned = 0;
        while self.clock >= SPAWN_INTERVAL {
            self.clock -= SPAWN_INTERVAL;
            spawn_unit(world, config, &mut self.rng);
            spawned += 1;
        }
        spawned
    }

    /// Reset the clock for a fresh run, leaving the RNG stream alone.
    pub fn rearm(&mut self) {
        self.clock = 0.0;
    }
}

/// Vertical offset of a unit's gap center from the play-area midline.
///
/// Drawn as a whole number of pixels in `[0, height/2)`, then shifted down
/// by a quarter height, so the gap center lands within a quarter height of
/// the midline on either side.
pub fn draw_pipe_offset(rng: &mut Pcg32, height: f32) -> f32 {
    let span = (height / 2.0) as u32;
    let offset_raw = rng.random_range(0..span.max(1));
    offset_raw as f32 - height / 4.0
}

/// Create one obstacle unit just past the right edge of the play area.
pub fn spawn_unit(world: &mut PhysicsWorld, config: &GameConfig, rng: &mut Pcg32) {
    let pipe_offset = draw_pipe_offset(rng, config.height);
    spawn_unit_with_offset(world, config, pipe_offset);
}

/// Create one obstacle unit with a fixed gap offset.
pub fn spawn_unit_with_offset(world: &mut PhysicsWorld, config: &GameConfig, pipe_offset: f32) {
    let gap_height = config.gap_height();
    let pipe_height = config.pipe_height();
    let spawn_x = config.mid_x() + config.width;
    let despawn_x = spawn_x - 2.0 * config.width;
    let vel = Vec2::new(-SCROLL_SPEED, 0.0);
    let gap_center_y = config.mid_y() + pipe_offset;

    let unit = world.next_unit_id();

    let upper = world.next_body_id();
    world.add(Body {
        id: upper,
        category: Category::Solid,
        shape: Shape::rect(config.pipe_width, pipe_height),
        pos: Vec2::new(
            spawn_x,
            gap_center_y + gap_height / 2.0 + pipe_height / 2.0,
        ),
        vel,
        dynamic: false,
        unit: Some(unit),
        despawn_x: Some(despawn_x),
    });

    let lower = world.next_body_id();
    world.add(Body {
        id: lower,
        category: Category::Solid,
        shape: Shape::rect(config.pipe_width, pipe_height),
        pos: Vec2::new(
            spawn_x,
            gap_center_y - gap_height / 2.0 - pipe_height / 2.0,
        ),
        vel,
        dynamic: false,
        unit: Some(unit),
        despawn_x: Some(despawn_x),
    });

    // The gate leads its columns slightly so a pass registers as the player
    // clears the pair, not at first entry.
    let gate = world.next_body_id();
    world.add(Body {
        id: gate,
        category: Category::Gate,
        shape: Shape::rect(config.pipe_width, gap_height),
        pos: Vec2::new(spawn_x + GATE_LEAD, gap_center_y),
        vel,
        dynamic: false,
        unit: Some(unit),
        despawn_x: Some(despawn_x),
    });

    log::info!(
        "spawned unit {}: gap center {:.1} (offset {:+.1})",
        unit,
        gap_center_y,
        pipe_offset
    );
}
