mod support;

use arcade_shooter::collision::*;
use arcade_shooter::entities::{GravityField, Shield};
use arcade_shooter::geometry::Rect;
use glam::Vec2;

use support::{beam_at, bomb_at, enemy_at};

#[test]
fn one_beam_consumes_one_target() {
    // Two overlapping enemies, a single beam: only the first enemy goes.
    let mut enemies = vec![enemy_at(100.0, 100.0), enemy_at(110.0, 100.0)];
    let mut beams = vec![beam_at(105.0, 100.0)];
    let removed = consume_pairs(&mut enemies, &mut beams);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].rect.center.x, 100.0);
    assert_eq!(enemies.len(), 1);
    assert!(beams.is_empty());
}

#[test]
fn each_target_takes_at_most_one_beam() {
    let mut enemies = vec![enemy_at(100.0, 100.0)];
    let mut beams = vec![beam_at(100.0, 100.0), beam_at(102.0, 100.0)];
    let removed = consume_pairs(&mut enemies, &mut beams);
    assert_eq!(removed.len(), 1);
    assert!(enemies.is_empty());
    assert_eq!(beams.len(), 1); // no piercing, but no waste either
}

#[test]
fn misses_leave_both_collections_alone() {
    let mut bombs = vec![bomb_at(100.0, 100.0)];
    let mut beams = vec![beam_at(500.0, 100.0)];
    assert!(consume_pairs(&mut bombs, &mut beams).is_empty());
    assert_eq!(bombs.len(), 1);
    assert_eq!(beams.len(), 1);
}

#[test]
fn take_overlapping_leaves_zones_untouched() {
    let mut bombs = vec![bomb_at(100.0, 100.0), bomb_at(600.0, 100.0)];
    let shields = vec![Shield {
        rect: Rect::from_center(Vec2::new(105.0, 100.0), Vec2::new(20.0, 140.0)),
        life: 10,
    }];
    let removed = take_overlapping(&mut bombs, &shields);
    assert_eq!(removed.len(), 1);
    assert_eq!(bombs.len(), 1);
    assert_eq!(bombs[0].rect.center.x, 600.0);
    assert_eq!(shields.len(), 1);
}

#[test]
fn full_field_zone_catches_everything_on_screen() {
    let mut enemies = vec![enemy_at(0.0, 0.0), enemy_at(550.0, 300.0)];
    let zone = [GravityField {
        rect: Rect::field(),
        life: 1,
    }];
    let removed = take_overlapping(&mut enemies, &zone);
    assert_eq!(removed.len(), 2);
    assert!(enemies.is_empty());
}

#[test]
fn take_overlapping_with_no_zones_is_a_no_op() {
    let mut bombs = vec![bomb_at(100.0, 100.0)];
    let zones: Vec<Shield> = Vec::new();
    assert!(take_overlapping(&mut bombs, &zones).is_empty());
    assert_eq!(bombs.len(), 1);
}
