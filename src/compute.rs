/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus held keys or an RNG handle where needed) and returns a
/// brand-new `GameState`. Side effects are limited to the injected RNG.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::abilities;
use crate::collision::{consume_pairs, take_overlapping};
use crate::config::{
    BEAM_SIZE, BEAM_SPEED, ENEMY_DESCENT_SPEED, ENEMY_DROP_MAX, ENEMY_DROP_MIN,
    ENEMY_EXPLOSION_LIFE, ENEMY_GLYPHS, ENEMY_SCORE, ENEMY_SIZE, ENEMY_SPAWN_INTERVAL,
    ENEMY_STOP_MAX, ENEMY_STOP_MIN, FIELD_WIDTH, GRAVITY_EXPLOSION_LIFE, PLAYER_BOOST_SPEED,
    PLAYER_DEFEATED_GLYPH,
    PLAYER_FACING_GLYPHS, PLAYER_HAPPY_GLYPH, PLAYER_SIZE, PLAYER_SPEED, PLAYER_START,
    PROJECTILE_COLORS, PROJECTILE_EXPLOSION_LIFE, PROJECTILE_RADIUS_MAX, PROJECTILE_RADIUS_MIN,
    PROJECTILE_SCORE, PROJECTILE_SPEED, SPREAD_ARC, SPREAD_COUNT,
};
use crate::entities::{
    Beam, Enemy, EnemyState, Explosion, GameState, GameStatus, Player, Projectile, Score,
};
use crate::geometry::{
    direction_vector, fully_in_bounds, heading, rotated_bounds, Direction, Rect,
};
use crate::input::{Command, KeyState};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh player facing right, with its facing glyph table filled in.
pub fn new_player(center: Vec2) -> Player {
    let images = PLAYER_FACING_GLYPHS;
    let facing = Direction::Right;
    Player {
        rect: Rect::from_center(center, Vec2::from(PLAYER_SIZE)),
        facing,
        speed: PLAYER_SPEED,
        images,
        image: images[facing.index()],
        overdrive: false,
        overdrive_life: 0,
    }
}

/// Build the initial game state: just the player, nothing else on the field.
pub fn init_state() -> GameState {
    GameState {
        player: new_player(Vec2::from(PLAYER_START)),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        beams: Vec::new(),
        shields: Vec::new(),
        gravity_fields: Vec::new(),
        explosions: Vec::new(),
        score: Score::default(),
        status: GameStatus::Playing,
        frame: 0,
        emp_flash: 0,
    }
}

/// A new enemy at a random column on the top edge.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let x = rng.gen_range(0..=FIELD_WIDTH as i32) as f32;
    Enemy {
        rect: Rect::from_center(Vec2::new(x, 0.0), Vec2::from(ENEMY_SIZE)),
        descent_speed: ENEMY_DESCENT_SPEED,
        stop_altitude: rng.gen_range(ENEMY_STOP_MIN..=ENEMY_STOP_MAX) as f32,
        state: EnemyState::Descending,
        drop_interval: Some(rng.gen_range(ENEMY_DROP_MIN..=ENEMY_DROP_MAX)),
        variant: rng.gen_range(0..ENEMY_GLYPHS.len()),
    }
}

/// A bomb released just below `enemy`, aimed at where `player` is now.
/// If the two centres coincide the bomb falls straight down.
pub fn drop_projectile(enemy: &Enemy, player: &Player, rng: &mut impl Rng) -> Projectile {
    let radius = rng.gen_range(PROJECTILE_RADIUS_MIN..=PROJECTILE_RADIUS_MAX) as f32;
    let color = PROJECTILE_COLORS[rng.gen_range(0..PROJECTILE_COLORS.len())];
    let center = Vec2::new(
        enemy.rect.center.x,
        enemy.rect.center.y + enemy.rect.size.y / 2.0,
    );
    Projectile {
        rect: Rect::from_center(center, Vec2::splat(radius * 2.0)),
        direction: direction_vector(&enemy.rect, &player.rect).unwrap_or(Vec2::Y),
        speed: PROJECTILE_SPEED,
        color,
        neutralized: false,
    }
}

/// A beam leaving the player's nose, `offset` degrees off its facing.
pub fn new_beam(player: &Player, offset: f32) -> Beam {
    let angle = player.facing.angle_degrees() + offset;
    let direction = heading(angle);
    Beam {
        rect: Rect::from_center(
            player.rect.center + player.rect.size * direction,
            rotated_bounds(Vec2::from(BEAM_SIZE), angle),
        ),
        direction,
        speed: BEAM_SPEED,
        angle,
        offset,
    }
}

/// Angular offsets for a spread volley of `count` beams, evenly dividing the
/// spread arc and centred on the facing.
pub fn spread_offsets(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = SPREAD_ARC / (count - 1) as f32;
            (0..count)
                .map(|i| -SPREAD_ARC / 2.0 + i as f32 * step)
                .collect()
        }
    }
}

fn explosion_at(center: Vec2, life: i32) -> Explosion {
    Explosion {
        center,
        life,
        image: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn fire_beam(state: &GameState) -> GameState {
    let mut beams = state.beams.clone();
    beams.push(new_beam(&state.player, 0.0));
    GameState {
        beams,
        ..state.clone()
    }
}

pub fn fire_spread(state: &GameState, count: usize) -> GameState {
    let mut beams = state.beams.clone();
    beams.extend(
        spread_offsets(count)
            .into_iter()
            .map(|offset| new_beam(&state.player, offset)),
    );
    GameState {
        beams,
        ..state.clone()
    }
}

/// Apply one edge-triggered command. `Quit` is the caller's business and
/// leaves the state untouched, as does anything after game over.
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    match command {
        Command::Fire => fire_beam(state),
        Command::SpreadFire => fire_spread(state, SPREAD_COUNT),
        Command::Activate(ability) => abilities::activate(state, ability),
        Command::Quit => state.clone(),
    }
}

/// Move the player by the held keys. A step that would leave the field is
/// undone rather than clamped. Facing (and the facing glyph) only changes on
/// nonzero net movement.
pub fn move_player(player: &Player, keys: &KeyState) -> Player {
    let mut player = player.clone();
    player.speed = if keys.boost {
        PLAYER_BOOST_SPEED
    } else {
        PLAYER_SPEED
    };

    let (dx, dy) = keys.net_delta();
    let step = Vec2::new(dx as f32, dy as f32) * player.speed;
    player.rect.translate(step);

    if player.overdrive {
        player.overdrive_life -= 1;
        if player.overdrive_life < 0 {
            player.overdrive = false;
            player.image = player.images[player.facing.index()];
        }
    }

    if !fully_in_bounds(&player.rect) {
        player.rect.translate(-step);
    }
    if let Some(facing) = Direction::from_delta(dx, dy) {
        player.facing = facing;
        player.image = player.images[facing.index()];
    }
    player
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. Commands for this frame must already
/// have been applied with `apply_command`.
pub fn tick(state: &GameState, keys: &KeyState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let frame = state.frame;
    let mut next = state.clone();

    // ── 1. Spawn a new enemy ─────────────────────────────────────────────────
    if frame % ENEMY_SPAWN_INTERVAL == 0 {
        let enemy = spawn_enemy(rng);
        debug!(
            x = enemy.rect.center.x,
            stop_altitude = enemy.stop_altitude,
            drop_interval = ?enemy.drop_interval,
            "enemy spawned"
        );
        next.enemies.push(enemy);
    }

    // ── 2. Stopped enemies drop bombs on their interval ──────────────────────
    let drops: Vec<Projectile> = next
        .enemies
        .iter()
        .filter(|e| e.state == EnemyState::Stopped)
        .filter(|e| e.drop_interval.is_some_and(|n| n > 0 && frame % n == 0))
        .map(|e| drop_projectile(e, &next.player, &mut *rng))
        .collect();
    if !drops.is_empty() {
        trace!(count = drops.len(), frame, "bombs dropped");
    }
    next.projectiles.extend(drops);

    // ── 3. Collision: beams ↔ enemies ────────────────────────────────────────
    for enemy in consume_pairs(&mut next.enemies, &mut next.beams) {
        next.explosions
            .push(explosion_at(enemy.rect.center, ENEMY_EXPLOSION_LIFE));
        next.score.add(ENEMY_SCORE);
        next.player.image = PLAYER_HAPPY_GLYPH;
    }

    // ── 4. Collision: beams ↔ bombs ──────────────────────────────────────────
    for bomb in consume_pairs(&mut next.projectiles, &mut next.beams) {
        // A jammed bomb just fizzles.
        if !bomb.neutralized {
            next.explosions
                .push(explosion_at(bomb.rect.center, PROJECTILE_EXPLOSION_LIFE));
        }
        next.score.add(PROJECTILE_SCORE);
    }

    // ── 5. Collision: bombs ↔ player ─────────────────────────────────────────
    // Neutralized bombs pass through the player harmlessly.
    let (hits, rest): (Vec<Projectile>, Vec<Projectile>) = std::mem::take(&mut next.projectiles)
        .into_iter()
        .partition(|p| !p.neutralized && p.rect.intersects(&next.player.rect));
    next.projectiles = rest;
    if !hits.is_empty() {
        if next.player.overdrive {
            for bomb in hits {
                next.explosions
                    .push(explosion_at(bomb.rect.center, PROJECTILE_EXPLOSION_LIFE));
                next.score.add(PROJECTILE_SCORE);
            }
        } else {
            next.projectiles.extend(hits);
            next.player.image = PLAYER_DEFEATED_GLYPH;
            next.status = GameStatus::GameOver;
            info!(score = next.score.value, frame, "player destroyed");
            return next;
        }
    }

    // ── 6. Collision: bombs ↔ shields ────────────────────────────────────────
    for bomb in take_overlapping(&mut next.projectiles, &next.shields) {
        next.explosions
            .push(explosion_at(bomb.rect.center, PROJECTILE_EXPLOSION_LIFE));
        next.score.add(PROJECTILE_SCORE);
    }

    // ── 7. Gravity fields sweep everything they touch ────────────────────────
    if !next.gravity_fields.is_empty() {
        for enemy in take_overlapping(&mut next.enemies, &next.gravity_fields) {
            next.explosions
                .push(explosion_at(enemy.rect.center, ENEMY_EXPLOSION_LIFE));
            next.score.add(ENEMY_SCORE);
            next.player.image = PLAYER_HAPPY_GLYPH;
        }
        for bomb in take_overlapping(&mut next.projectiles, &next.gravity_fields) {
            next.explosions
                .push(explosion_at(bomb.rect.center, GRAVITY_EXPLOSION_LIFE));
            next.score.add(PROJECTILE_SCORE);
            next.player.image = PLAYER_HAPPY_GLYPH;
        }
    }
    for field in &mut next.gravity_fields {
        field.life -= 1;
    }
    next.gravity_fields.retain(|f| f.life >= 0);

    // ── 8. Move everything ───────────────────────────────────────────────────
    for enemy in &mut next.enemies {
        advance_enemy(enemy);
    }

    next.player = move_player(&next.player, keys);

    for beam in &mut next.beams {
        beam.rect.translate(beam.direction * beam.speed);
    }
    next.beams.retain(|b| fully_in_bounds(&b.rect));

    for bomb in &mut next.projectiles {
        bomb.rect.translate(bomb.direction * bomb.speed);
    }
    next.projectiles.retain(|p| fully_in_bounds(&p.rect));

    // ── 9. Age timed effects ─────────────────────────────────────────────────
    for shield in &mut next.shields {
        shield.life = shield.life.saturating_sub(1);
    }
    next.shields.retain(|s| s.life > 0);

    for explosion in &mut next.explosions {
        explosion.life -= 1;
        if explosion.life >= 0 {
            explosion.image = ((explosion.life / 10) % 2) as usize;
        }
    }
    next.explosions.retain(|e| e.life >= 0);

    next.emp_flash = next.emp_flash.saturating_sub(1);
    next.frame = frame + 1;
    next
}

/// Descend until the centre passes the stop altitude, then stay put for good.
fn advance_enemy(enemy: &mut Enemy) {
    if enemy.rect.center.y > enemy.stop_altitude {
        enemy.state = EnemyState::Stopped;
    }
    if enemy.state == EnemyState::Descending {
        enemy.rect.translate(Vec2::new(0.0, enemy.descent_speed));
    }
}
