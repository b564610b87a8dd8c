/// Broad-phase collision between entity collections: naive pairwise AABB
/// tests, which is plenty at arcade entity counts.

use crate::entities::{Beam, Enemy, GravityField, Player, Projectile, Shield};
use crate::geometry::Rect;

/// Anything with an axis-aligned hit box.
pub trait Body {
    fn rect(&self) -> &Rect;
}

macro_rules! impl_body {
    ($($ty:ty),*) => {
        $(impl Body for $ty {
            fn rect(&self) -> &Rect {
                &self.rect
            }
        })*
    };
}

impl_body!(Player, Enemy, Projectile, Beam, Shield, GravityField);

/// Matches each target with the first unused hitter that overlaps it and
/// removes both. One hitter consumes exactly one target.
/// Returns the removed targets in their original order.
pub fn consume_pairs<T: Body, H: Body>(targets: &mut Vec<T>, hitters: &mut Vec<H>) -> Vec<T> {
    let mut hit_targets = vec![false; targets.len()];
    let mut used_hitters = vec![false; hitters.len()];

    for (ti, target) in targets.iter().enumerate() {
        let found = hitters
            .iter()
            .enumerate()
            .find(|(hi, h)| !used_hitters[*hi] && target.rect().intersects(h.rect()))
            .map(|(hi, _)| hi);
        if let Some(hi) = found {
            hit_targets[ti] = true;
            used_hitters[hi] = true;
        }
    }

    split_off_flagged(hitters, &used_hitters);
    split_off_flagged(targets, &hit_targets)
}

/// Removes and returns every item overlapping any of `zones`.
pub fn take_overlapping<T: Body, Z: Body>(items: &mut Vec<T>, zones: &[Z]) -> Vec<T> {
    let flags: Vec<bool> = items
        .iter()
        .map(|item| zones.iter().any(|z| item.rect().intersects(z.rect())))
        .collect();
    split_off_flagged(items, &flags)
}

fn split_off_flagged<T>(items: &mut Vec<T>, flags: &[bool]) -> Vec<T> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for (item, &flag) in std::mem::take(items).into_iter().zip(flags) {
        if flag {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

