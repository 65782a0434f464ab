//! Physics world
//!
//! Owns every body, integrates motion, and reports contacts. Single
//! threaded: one `step` runs to completion before anything else reads the
//! world, and bodies iterate in id order so results are reproducible.

use glam::Vec2;

use super::body::{Body, Category, Shape, blocks, reported};
use super::collision::{circle_rect_contact, shapes_overlap};
use crate::config::GameConfig;
use crate::consts::{GRAVITY_Y, GROUND_HALF_THICKNESS};

/// A contact that began during one step.
///
/// A pair in continuous overlap is reported once, on the step the overlap
/// starts; it becomes reportable again only after the pair separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: u32,
    pub b: u32,
    pub a_category: Category,
    pub b_category: Category,
}

/// All simulated bodies plus the integration and contact machinery.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    gravity: Vec2,
    /// Sorted by id ascending.
    bodies: Vec<Body>,
    /// Pairs overlapping at the end of the previous step, ids ascending.
    touching: Vec<(u32, u32)>,
    next_id: u32,
    next_unit: u32,
    /// Scales the effective dt of every body. 0 freezes the world.
    speed_multiplier: f32,
    player: u32,
}

impl PhysicsWorld {
    /// Build a world holding the player at its spawn point and the ground
    /// slab along the bottom edge.
    pub fn new(config: &GameConfig) -> Self {
        let mut world = Self {
            gravity: Vec2::new(0.0, GRAVITY_Y),
            bodies: Vec::new(),
            touching: Vec::new(),
            next_id: 0,
            next_unit: 0,
            speed_multiplier: 1.0,
            player: 0,
        };

        let player = world.next_body_id();
        world.add(Body {
            id: player,
            category: Category::Player,
            shape: Shape::circle(config.player_radius),
            pos: config.player_spawn(),
            vel: Vec2::ZERO,
            dynamic: true,
            unit: None,
            despawn_x: None,
        });
        world.player = player;

        let ground = world.next_body_id();
        world.add(Body {
            id: ground,
            category: Category::Solid,
            shape: Shape::rect(config.width, 2.0 * GROUND_HALF_THICKNESS),
            pos: Vec2::new(config.mid_x(), 0.0),
            vel: Vec2::ZERO,
            dynamic: false,
            unit: None,
            despawn_x: None,
        });

        world
    }

    /// Allocate a fresh body id. Ids are never reused.
    pub fn next_body_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Allocate a fresh obstacle-unit id.
    pub fn next_unit_id(&mut self) -> u32 {
        let id = self.next_unit;
        self.next_unit += 1;
        id
    }

    /// Insert a body built around a fresh [`next_body_id`](Self::next_body_id).
    pub fn add(&mut self, body: Body) -> u32 {
        debug_assert!(
            body.shape.is_well_formed(),
            "malformed shape for body {}",
            body.id
        );
        debug_assert!(
            self.bodies.last().is_none_or(|last| last.id < body.id),
            "bodies must be inserted in id order"
        );
        let id = body.id;
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    /// All bodies, id ascending.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn player_id(&self) -> u32 {
        self.player
    }

    /// The player body. Exactly one exists for the lifetime of the world.
    pub fn player(&self) -> &Body {
        self.body(self.player).expect("player body is never removed")
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    /// Replace a dynamic body's velocity outright. Impulses are absolute:
    /// prior velocity never bleeds into the result, so rapid repeats are
    /// independent.
    pub fn apply_impulse(&mut self, id: u32, impulse: Vec2) {
        if let Some(body) = self.body_mut(id) {
            if body.dynamic {
                body.vel = impulse;
            }
        }
    }

    /// Put the player back at the spawn point, motionless.
    pub fn reset_player(&mut self, spawn: Vec2) {
        let id = self.player;
        if let Some(player) = self.body_mut(id) {
            player.pos = spawn;
            player.vel = Vec2::ZERO;
        }
    }

    /// Number of distinct obstacle units currently alive.
    pub fn unit_count(&self) -> usize {
        let mut units: Vec<u32> = self.bodies.iter().filter_map(|body| body.unit).collect();
        units.sort_unstable();
        units.dedup();
        units.len()
    }

    /// Remove every obstacle body. Player and ground stay.
    pub fn clear_units(&mut self) {
        let before = self.bodies.len();
        self.bodies.retain(|body| body.unit.is_none());
        log::debug!("cleared {} obstacle bodies", before - self.bodies.len());
    }

    /// Advance the world by `dt` (scaled by the speed multiplier) and return
    /// the contacts that began this step.
    ///
    /// Order within a step: integrate, cull scrolled-out bodies, detect
    /// contacts, then push the player out of any solid it overlaps.
    pub fn step(&mut self, dt: f32) -> Vec<Contact> {
        let dt = dt * self.speed_multiplier;
        if dt <= 0.0 {
            return Vec::new();
        }

        for body in &mut self.bodies {
            if body.dynamic {
                body.vel += self.gravity * dt;
            }
            body.pos += body.vel * dt;
        }

        self.bodies.retain(|body| match body.despawn_x {
            Some(cutoff) => body.pos.x > cutoff,
            None => true,
        });

        let contacts = self.detect_contacts();
        self.resolve_blocking();
        contacts
    }

    fn detect_contacts(&mut self) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let mut touching = Vec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let a = &self.bodies[i];
                let b = &self.bodies[j];
                if !reported(a.category, b.category) {
                    continue;
                }
                if !shapes_overlap(&a.shape, a.pos, &b.shape, b.pos) {
                    continue;
                }
                touching.push((a.id, b.id));
                if self.touching.contains(&(a.id, b.id)) {
                    // Still the same overlap as last step, already reported.
                    continue;
                }
                contacts.push(Contact {
                    a: a.id,
                    b: b.id,
                    a_category: a.category,
                    b_category: b.category,
                });
            }
        }
        self.touching = touching;
        contacts
    }

    /// Positional correction for blocking pairs: push the player out along
    /// the contact normal and drop the velocity component driving it in.
    /// Runs on every overlapping pair, not just fresh contacts, so resting
    /// on a surface stays resolved step after step.
    fn resolve_blocking(&mut self) {
        let pairs = self.touching.clone();
        for (a_id, b_id) in pairs {
            let (Some(a), Some(b)) = (self.body(a_id), self.body(b_id)) else {
                continue;
            };
            if !blocks(a.category, b.category) {
                continue;
            }
            let (player_id, solid_id) = if a.category == Category::Player {
                (a_id, b_id)
            } else {
                (b_id, a_id)
            };
            let Some(solid) = self.body(solid_id) else {
                continue;
            };
            let Shape::Rect { half_extents } = solid.shape else {
                continue;
            };
            let solid_pos = solid.pos;
            let Some(player) = self.body_mut(player_id) else {
                continue;
            };
            let Shape::Circle { radius } = player.shape else {
                continue;
            };
            let geometry = circle_rect_contact(player.pos, radius, solid_pos, half_extents);
            if !geometry.hit {
                continue;
            }
            player.pos += geometry.normal * geometry.penetration;
            let into = player.vel.dot(geometry.normal);
            if into < 0.0 {
                player.vel -= geometry.normal * into;
            }
        }
    }
}
