#![allow(dead_code)]

use arcade_shooter::compute::init_state;
use arcade_shooter::config::{ENEMY_DESCENT_SPEED, ENEMY_SIZE, PROJECTILE_SPEED};
use arcade_shooter::entities::{Beam, Enemy, EnemyState, GameState, Projectile};
use arcade_shooter::geometry::Rect;
use arcade_shooter::input::KeyState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fresh state one frame in, so the next tick does not spawn an enemy.
pub fn make_state() -> GameState {
    let mut s = init_state();
    s.frame = 1;
    s
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn no_keys() -> KeyState {
    KeyState::default()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// A stopped, jammed enemy: it never moves and never drops anything.
pub fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::from(ENEMY_SIZE)),
        descent_speed: ENEMY_DESCENT_SPEED,
        stop_altitude: 50.0,
        state: EnemyState::Stopped,
        drop_interval: None,
        variant: 0,
    }
}

/// A small bomb falling straight down.
pub fn bomb_at(x: f32, y: f32) -> Projectile {
    Projectile {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::splat(20.0)),
        direction: Vec2::Y,
        speed: PROJECTILE_SPEED,
        color: (255, 0, 0),
        neutralized: false,
    }
}

/// A beam heading right.
pub fn beam_at(x: f32, y: f32) -> Beam {
    Beam {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(40.0, 12.0)),
        direction: Vec2::X,
        speed: 10.0,
        angle: 0.0,
        offset: 0.0,
    }
}
