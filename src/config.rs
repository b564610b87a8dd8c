/// Tuning constants. All distances and speeds are in logical field units;
/// all lifetimes are in frames.

use std::time::Duration;

// ── Field & pacing ───────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 1100.0;
pub const FIELD_HEIGHT: f32 = 650.0;

pub const TARGET_FPS: u32 = 50;

/// How long the defeated player stays on screen before the session ends.
pub const DEATH_PAUSE: Duration = Duration::from_secs(2);

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START: (f32, f32) = (900.0, 400.0);
pub const PLAYER_SIZE: (f32, f32) = (70.0, 70.0);
pub const PLAYER_SPEED: f32 = 10.0;
pub const PLAYER_BOOST_SPEED: f32 = 20.0;

/// Oriented player glyphs, in `Direction::ALL` order.
pub const PLAYER_FACING_GLYPHS: [&str; 8] = [
    "(→)", "(↗)", "(↑)", "(↖)", "(←)", "(↙)", "(↓)", "(↘)",
];
pub const PLAYER_HAPPY_GLYPH: &str = "(^)";
pub const PLAYER_DEFEATED_GLYPH: &str = "(x)";

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SPAWN_INTERVAL: u64 = 200;
pub const ENEMY_SIZE: (f32, f32) = (70.0, 60.0);
pub const ENEMY_DESCENT_SPEED: f32 = 6.0;
pub const ENEMY_STOP_MIN: i32 = 50;
pub const ENEMY_STOP_MAX: i32 = (FIELD_HEIGHT as i32) / 2;
pub const ENEMY_DROP_MIN: u64 = 50;
pub const ENEMY_DROP_MAX: u64 = 300;
pub const ENEMY_GLYPHS: [&str; 3] = ["<O>", "{@}", "[#]"];

// ── Projectiles (enemy bombs) ────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 6.0;
pub const PROJECTILE_RADIUS_MIN: i32 = 10;
pub const PROJECTILE_RADIUS_MAX: i32 = 50;
pub const PROJECTILE_COLORS: [(u8, u8, u8); 6] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
];

// ── Beams ────────────────────────────────────────────────────────────────────

pub const BEAM_SPEED: f32 = 10.0;
pub const BEAM_SIZE: (f32, f32) = (40.0, 12.0);
pub const SPREAD_COUNT: usize = 5;
/// Total angular width of a spread volley, in degrees.
pub const SPREAD_ARC: f32 = 100.0;

// ── Abilities ────────────────────────────────────────────────────────────────

pub const SHIELD_COST: u32 = 50;
pub const SHIELD_LIFE: u32 = 400;
pub const SHIELD_THICKNESS: f32 = 20.0;

pub const GRAVITY_COST: u32 = 200;
pub const GRAVITY_LIFE: i32 = 400;

pub const EMP_COST: u32 = 20;
pub const EMP_FLASH_FRAMES: u32 = 3;

pub const OVERDRIVE_COST: u32 = 100;
pub const OVERDRIVE_LIFE: i32 = 500;

// ── Scoring & effects ────────────────────────────────────────────────────────

pub const ENEMY_SCORE: u32 = 10;
pub const PROJECTILE_SCORE: u32 = 1;

pub const ENEMY_EXPLOSION_LIFE: i32 = 100;
pub const PROJECTILE_EXPLOSION_LIFE: i32 = 50;
/// Bombs swept by a gravity field burn as long as enemies do.
pub const GRAVITY_EXPLOSION_LIFE: i32 = 100;
pub const EXPLOSION_GLYPHS: [&str; 2] = ["*", "+"];
