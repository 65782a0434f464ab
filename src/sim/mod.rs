//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by body ID)
//! - No rendering, audio, or platform dependencies

pub mod body;
pub mod classify;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use body::{Body, Category, Shape, blocks, reported};
pub use classify::{ContactClass, classify};
pub use collision::{
    ContactGeometry, circle_rect_contact, circles_overlap, rects_overlap, shapes_overlap,
};
pub use spawn::{Spawner, draw_pipe_offset, spawn_unit, spawn_unit_with_offset};
pub use state::{GameEvent, GamePhase, RunState};
pub use tick::{Game, TickInput, tick};
pub use world::{Contact, PhysicsWorld};
