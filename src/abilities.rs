/// Score-gated special abilities.
///
/// Every activation checks the score first and pays the full cost together
/// with the effect. Without enough score nothing changes at all.

use glam::Vec2;
use tracing::{debug, info};

use crate::config::{
    EMP_COST, EMP_FLASH_FRAMES, GRAVITY_COST, GRAVITY_LIFE, OVERDRIVE_COST, OVERDRIVE_LIFE,
    SHIELD_COST, SHIELD_LIFE, SHIELD_THICKNESS,
};
use crate::entities::{GameState, GameStatus, GravityField, Player, Shield};
use crate::geometry::{rotated_bounds, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ability {
    /// Bar in front of the player that blocks bombs.
    Shield,
    /// Full-field zone destroying every enemy and bomb for its lifetime.
    Gravity,
    /// Jams every live enemy and slows every live bomb. One-shot.
    Emp,
    /// Temporary invulnerability to bombs.
    Overdrive,
}

impl Ability {
    pub fn cost(self) -> u32 {
        match self {
            Ability::Shield => SHIELD_COST,
            Ability::Gravity => GRAVITY_COST,
            Ability::Emp => EMP_COST,
            Ability::Overdrive => OVERDRIVE_COST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ability::Shield => "shield",
            Ability::Gravity => "gravity",
            Ability::Emp => "emp",
            Ability::Overdrive => "overdrive",
        }
    }
}

/// Activate `ability` if the score covers its cost. Activations stack: each
/// one pays again.
pub fn activate(state: &GameState, ability: Ability) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let mut next = state.clone();
    if !next.score.try_spend(ability.cost()) {
        debug!(
            ability = ability.name(),
            score = state.score.value,
            cost = ability.cost(),
            "not enough score"
        );
        return state.clone();
    }

    match ability {
        Ability::Shield => {
            let shield = shield_for(&next.player);
            next.shields.push(shield);
        }
        Ability::Gravity => next.gravity_fields.push(GravityField {
            rect: Rect::field(),
            life: GRAVITY_LIFE,
        }),
        Ability::Emp => electromagnetic_pulse(&mut next),
        Ability::Overdrive => {
            next.player.overdrive = true;
            next.player.overdrive_life = OVERDRIVE_LIFE;
        }
    }

    info!(
        ability = ability.name(),
        score = next.score.value,
        frame = next.frame,
        "ability activated"
    );
    next
}

/// A bar across the player's facing, one player-extent ahead of it.
pub fn shield_for(player: &Player) -> Shield {
    let angle = player.facing.angle_degrees();
    let bar = Vec2::new(SHIELD_THICKNESS, player.rect.size.y * 2.0);
    let (dx, dy) = player.facing.delta();
    let center = player.rect.center + Vec2::new(dx as f32, dy as f32) * player.rect.size;
    Shield {
        rect: Rect::from_center(center, rotated_bounds(bar, angle)),
        life: SHIELD_LIFE,
    }
}

/// Only entities alive right now are affected. A bomb is never slowed twice.
fn electromagnetic_pulse(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.drop_interval = None;
    }
    for bomb in state.projectiles.iter_mut().filter(|p| !p.neutralized) {
        bomb.speed *= 0.5;
        bomb.neutralized = true;
    }
    state.emp_flash = EMP_FLASH_FRAMES;
}
