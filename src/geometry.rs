/// Axis-aligned boxes, compass directions and the bounds/aiming helpers the
/// simulation is built on. Screen convention: +x right, +y down.

use glam::Vec2;

use crate::config::{FIELD_HEIGHT, FIELD_WIDTH};

// ── Rect ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// The whole playing field.
    pub fn field() -> Self {
        Self::from_center(
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        )
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Strict overlap: boxes that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Bounding box of a `size` box after rotating it by `angle_deg` degrees.
pub fn rotated_bounds(size: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(
        (size.x * cos).abs() + (size.y * sin).abs(),
        (size.x * sin).abs() + (size.y * cos).abs(),
    )
}

// ── Bounds & aiming ──────────────────────────────────────────────────────────

/// `(horizontal_ok, vertical_ok)`: whether the rect's extents on each axis lie
/// inside the field.
pub fn in_bounds(rect: &Rect) -> (bool, bool) {
    let horizontal = rect.left() >= 0.0 && rect.right() <= FIELD_WIDTH;
    let vertical = rect.top() >= 0.0 && rect.bottom() <= FIELD_HEIGHT;
    (horizontal, vertical)
}

pub fn fully_in_bounds(rect: &Rect) -> bool {
    in_bounds(rect) == (true, true)
}

/// Unit vector from `from`'s centre towards `to`'s centre, or `None` when the
/// centres coincide.
pub fn direction_vector(from: &Rect, to: &Rect) -> Option<Vec2> {
    (to.center - from.center).try_normalize()
}

// ── Direction ────────────────────────────────────────────────────────────────

/// The eight compass facings, counter-clockwise from east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Maps a net movement delta (each axis in -1..=1) to a facing.
    /// Returns `None` for no movement.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, -1),
            Direction::Up => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (-1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Position in `Direction::ALL`, used to index per-facing lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Screen angle in degrees, measured counter-clockwise from east
    /// (so `Up` is 90).
    pub fn angle_degrees(self) -> f32 {
        let (dx, dy) = self.delta();
        (-dy as f32).atan2(dx as f32).to_degrees()
    }
}

/// Unit velocity for a screen angle in degrees (counter-clockwise from east).
pub fn heading(angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(cos, -sin)
}
