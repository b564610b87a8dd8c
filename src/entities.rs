/// All game entity types — pure data, no game logic.

use glam::Vec2;

use crate::geometry::{Direction, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub facing: Direction,
    /// Speed used for the most recent movement step.
    pub speed: f32,
    /// Oriented glyphs, indexed by `Direction::index`. Filled once at construction.
    pub images: [&'static str; 8],
    /// Glyph currently shown.
    pub image: &'static str,
    /// Invulnerable to bombs while set.
    pub overdrive: bool,
    /// Frames of overdrive remaining; overdrive ends once this drops below zero.
    pub overdrive_life: i32,
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnemyState {
    Descending,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub descent_speed: f32,
    /// Once the centre passes this y the enemy halts for good.
    pub stop_altitude: f32,
    pub state: EnemyState,
    /// Frames between bomb drops while stopped. `None` once jammed by an EMP.
    pub drop_interval: Option<u64>,
    /// Index into the enemy glyph table.
    pub variant: usize,
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// A bomb dropped by a stopped enemy.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub rect: Rect,
    /// Unit vector fixed at spawn, pointing at where the player was.
    pub direction: Vec2,
    pub speed: f32,
    pub color: (u8, u8, u8),
    /// Set by an EMP: half speed, and no explosion when shot down.
    pub neutralized: bool,
}

#[derive(Clone, Debug)]
pub struct Beam {
    pub rect: Rect,
    /// Unit velocity.
    pub direction: Vec2,
    pub speed: f32,
    /// Absolute heading in degrees.
    pub angle: f32,
    /// Offset from the firer's facing, in degrees.
    pub offset: f32,
}

// ── Effects ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Shield {
    pub rect: Rect,
    /// Frames remaining; removed when it reaches zero.
    pub life: u32,
}

/// Full-field zone that destroys every enemy and bomb it touches.
#[derive(Clone, Debug)]
pub struct GravityField {
    pub rect: Rect,
    /// Removed once this drops below zero.
    pub life: i32,
}

/// Purely visual; anchored where something was destroyed.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub center: Vec2,
    pub life: i32,
    /// Which of the two explosion glyphs is showing.
    pub image: usize,
}

// ── Score ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    /// Deducts `cost` only if the whole amount is available.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        match self.value.checked_sub(cost) {
            Some(rest) => {
                self.value = rest;
                true
            }
            None => false,
        }
    }

    pub fn display(&self) -> String {
        format!("Score: {}", self.value)
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation. Cloneable so pure update functions can return a
/// fresh copy without touching the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub beams: Vec<Beam>,
    pub shields: Vec<Shield>,
    pub gravity_fields: Vec<GravityField>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub status: GameStatus,
    pub frame: u64,
    /// Frames left of the EMP screen flash.
    pub emp_flash: u32,
}
