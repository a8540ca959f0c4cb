//! Target queries. Read-only; never modifies the world.

use std::collections::HashSet;

use tankwars_core::components::Target;
use tankwars_core::constants::{BALL_RADIUS, BLOCK_RADIUS, DIAGONAL_TOLERANCE};
use tankwars_core::owners;
use tankwars_core::types::{distance, relative_angle, TankId};

use crate::engine::World;

/// Every other tank in weapon range, closest first.
///
/// Tanks whose owner starts with one of the non-empty `filters` are skipped.
/// Unknown or weaponless tanks see nothing.
pub fn close_targets(world: &World, id: TankId, filters: &[String]) -> Vec<Target> {
    let Some(index) = world.tank_index(id) else {
        return Vec::new();
    };
    let me = &world.tanks[index];
    let Some(weapon) = &me.weapon else {
        return Vec::new();
    };
    let reach = (weapon.range + BLOCK_RADIUS) as f64;

    let mut list: Vec<Target> = world
        .tanks
        .iter()
        .enumerate()
        .filter(|(i, other)| *i != index && !owners::matches_any(&other.owner, filters))
        .filter_map(|(_, other)| {
            let dist = distance(me.position, other.position);
            (dist < reach).then(|| Target {
                tank: other.id,
                owner: other.owner.clone(),
                position: other.position,
                distance: dist as i32,
                relative_angle: relative_angle(me.position, other.position),
            })
        })
        .collect();

    list.sort_by_key(|t| t.distance);
    list
}

/// Targets the weapon can actually hit, best first.
///
/// Any-angle weapons can hit everything in range. Fixed-angle weapons only
/// hit along the eight headings: targets in the firer's row or column band
/// come first, then those on a diagonal. The result is ordered by how well
/// the target lines up with the current hull angle.
pub fn possible_targets(world: &World, id: TankId, filters: &[String]) -> Vec<Target> {
    let in_range = close_targets(world, id, filters);
    let Some(me) = world.tank(id) else {
        return in_range;
    };
    let any_angle = me.weapon.as_ref().is_some_and(|w| w.any_fire_angle);
    if any_angle || in_range.is_empty() {
        return in_range;
    }

    let (mx, my) = (me.position.x, me.position.y);
    let band = BLOCK_RADIUS - 1;
    let ball = BALL_RADIUS - 1;

    let straight = in_range.iter().filter(|t| {
        let (ox, oy) = (t.position.x, t.position.y);
        let in_column = ox + band > mx - ball && ox - band < mx + ball;
        let in_row = oy + band > my - ball && oy - band < my + ball;
        in_column || in_row
    });
    let diagonal = in_range.iter().filter(|t| {
        let dx = (t.position.x - mx).abs() as f64;
        let dy = (t.position.y - my).abs() as f64;
        (dx - dy).abs() < DIAGONAL_TOLERANCE
    });

    let mut seen = HashSet::new();
    let mut list = Vec::with_capacity(in_range.len());
    for target in straight.chain(diagonal) {
        // Only hand-edited records lack an id; `add_tank` assigns one to
        // every tank it accepts.
        if !target.tank.is_assigned() {
            tracing::warn!(owner = %target.owner, "dropping target without id");
            continue;
        }
        if seen.insert(target.tank) {
            list.push(target.clone());
        }
    }

    // Aligned targets first; stable, so ties keep their distance order.
    let angle = me.angle;
    list.sort_by_key(|t| std::cmp::Reverse(alignment(t.relative_angle, angle)));
    list
}

/// 180 when the target is dead ahead, 0 when it is straight behind.
fn alignment(relative_angle: i32, angle: i32) -> i32 {
    ((relative_angle + 360 - angle).rem_euclid(360) - 180).abs()
}
