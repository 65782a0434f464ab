//! Shape overlap and contact geometry
//!
//! Pure geometry on circles and axis-aligned rectangles. Which pairs get
//! tested at all is the world's job (see the category policy in `body`).

use glam::Vec2;

use super::body::Shape;

/// Result of a circle vs rectangle contact test
#[derive(Debug, Clone, Copy)]
pub struct ContactGeometry {
    /// Whether the shapes touch
    pub hit: bool,
    /// Contact normal pointing from the rectangle toward the circle
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl ContactGeometry {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}

pub fn rects_overlap(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    let delta = (a_pos - b_pos).abs();
    delta.x <= a_half.x + b_half.x && delta.y <= a_half.y + b_half.y
}

/// Check contact between a circle and an axis-aligned rectangle
///
/// Returns contact info if the shapes overlap, including the surface normal
/// for pushing the circle back out.
pub fn circle_rect_contact(
    circle_pos: Vec2,
    radius: f32,
    rect_pos: Vec2,
    rect_half: Vec2,
) -> ContactGeometry {
    let closest = circle_pos.clamp(rect_pos - rect_half, rect_pos + rect_half);
    let delta = circle_pos - closest;
    let dist_sq = delta.length_squared();
    if dist_sq > radius * radius {
        return ContactGeometry::miss();
    }

    if dist_sq > 1e-12 {
        let dist = dist_sq.sqrt();
        ContactGeometry {
            hit: true,
            normal: delta / dist,
            penetration: radius - dist,
        }
    } else {
        // Center inside the rectangle: exit along the axis of least overlap.
        let offset = circle_pos - rect_pos;
        let overlap = rect_half - offset.abs();
        if overlap.x < overlap.y {
            ContactGeometry {
                hit: true,
                normal: Vec2::new(offset.x.signum(), 0.0),
                penetration: radius + overlap.x,
            }
        } else {
            ContactGeometry {
                hit: true,
                normal: Vec2::new(0.0, offset.y.signum()),
                penetration: radius + overlap.y,
            }
        }
    }
}

/// Overlap test for any shape pair
pub fn shapes_overlap(a: &Shape, a_pos: Vec2, b: &Shape, b_pos: Vec2) -> bool {
    match (*a, *b) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circles_overlap(a_pos, ra, b_pos, rb)
        }
        (Shape::Circle { radius }, Shape::Rect { half_extents }) => {
            circle_rect_contact(a_pos, radius, b_pos, half_extents).hit
        }
        (Shape::Rect { half_extents }, Shape::Circle { radius }) => {
            circle_rect_contact(b_pos, radius, a_pos, half_extents).hit
        }
        (Shape::Rect { half_extents: ha }, Shape::Rect { half_extents: hb }) => {
            rects_overlap(a_pos, ha, b_pos, hb)
        }
    }
}
