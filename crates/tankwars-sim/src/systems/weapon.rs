//! Weapon readiness and firing.
//!
//! No countdowns are stored. Readiness is recomputed from absolute tick
//! deltas on every call.

use tankwars_core::components::{Projectile, Weapon};
use tankwars_core::enums::Status;
use tankwars_core::errors::ActionRejected;
use tankwars_core::types::{calc_pos_from_angle, Position, ProjectileId};

/// Where the weapon sits when it fires.
#[derive(Debug, Clone, Copy)]
pub struct Mount {
    pub position: Position,
    pub angle: i32,
    pub moving: bool,
}

/// Current readiness. Reloading beats Moving beats Preparing.
pub fn status(weapon: &Weapon, tick: u64, parent_moving: bool) -> Status {
    if weapon.last_fire + weapon.reload_time > tick {
        Status::Reloading
    } else if parent_moving {
        Status::Moving
    } else if weapon.last_move + weapon.prep_time > tick {
        Status::Preparing
    } else {
        Status::Ready
    }
}

/// Restart the preparation timer if the parent is moving.
pub fn update(weapon: &mut Weapon, is_moving: bool, tick: u64) {
    if is_moving {
        weapon.last_move = tick;
    }
}

/// Fire a projectile if the weapon is ready.
///
/// The returned projectile has no id or parent yet; the world registers it.
pub fn fire(
    weapon: &mut Weapon,
    mount: Mount,
    tick: u64,
    fire_angle: i32,
    distance: i32,
) -> Result<Projectile, ActionRejected> {
    let current = status(weapon, tick, mount.moving);
    if !current.is_ready() {
        return Err(ActionRejected(current));
    }

    let distance = if weapon.projectile_collision {
        weapon.range
    } else {
        distance.min(weapon.range)
    };
    let angle = if weapon.any_fire_angle {
        fire_angle
    } else {
        mount.angle
    };

    weapon.last_fire = tick;

    Ok(Projectile {
        id: ProjectileId::default(),
        parent: None,
        position: mount.position,
        start_position: mount.position,
        end_position: calc_pos_from_angle(mount.position, angle, distance),
        angle,
        distance,
        speed: weapon.projectile_speed,
        damage: weapon.damage,
        aoe_radius: weapon.aoe_radius,
        collision: weapon.projectile_collision,
        exploded: 0,
    })
}
