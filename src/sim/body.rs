//! Bodies and the collision policy
//!
//! A body is a shape at a position with a velocity and a category. The
//! category pair decides how two bodies interact, via the policy functions
//! below; there are no per-body bitmasks to keep in sync.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision category of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// The one gravity-driven body.
    Player,
    /// Lethal surfaces: obstacle columns and the ground.
    Solid,
    /// Scoring sensor spanning the gap of an obstacle unit.
    Gate,
}

/// Collision shape, centered on the body position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned rectangle.
    Rect { half_extents: Vec2 },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    /// Rectangle from full extents.
    pub fn rect(width: f32, height: f32) -> Self {
        Self::Rect {
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Degenerate shapes are a caller bug, checked once at insertion.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Self::Circle { radius } => radius.is_finite() && radius > 0.0,
            Self::Rect { half_extents } => {
                half_extents.is_finite() && half_extents.x > 0.0 && half_extents.y > 0.0
            }
        }
    }
}

/// One simulated object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub category: Category,
    pub shape: Shape,
    /// Shape center.
    pub pos: Vec2,
    pub vel: Vec2,
    /// Dynamic bodies take gravity and impulses; everything else translates
    /// kinematically at its velocity.
    pub dynamic: bool,
    /// Obstacle unit this body belongs to. Player and ground carry `None`.
    pub unit: Option<u32>,
    /// Cull threshold: the body is removed once its center x falls to or
    /// below this value.
    pub despawn_x: Option<f32>,
}

/// Whether a contact between these categories is reported for gameplay.
///
/// | pair          | blocks | reported |
/// |---------------|--------|----------|
/// | Player, Solid | yes    | yes      |
/// | Player, Gate  | no     | yes      |
/// | anything else | no     | no       |
pub fn reported(a: Category, b: Category) -> bool {
    use Category::*;
    matches!(
        (a, b),
        (Player, Solid) | (Solid, Player) | (Player, Gate) | (Gate, Player)
    )
}

/// Whether these categories physically block each other.
pub fn blocks(a: Category, b: Category) -> bool {
    use Category::*;
    matches!((a, b), (Player, Solid) | (Solid, Player))
}
