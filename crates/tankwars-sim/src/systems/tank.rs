//! Tank movement, combat and commands.

use tankwars_core::components::Tank;
use tankwars_core::constants::{BLOCK_RADIUS, HEALTH_REMOVED, TANK_ROTATION_DELAY};
use tankwars_core::enums::{command, Status};
use tankwars_core::errors::{ActionRejected, ActionResult};
use tankwars_core::events::SoundEvent;
use tankwars_core::types::{
    check_borders, distance, is_collided, normalize_angle, relative_angle, Position, TankId,
};

use crate::engine::World;
use crate::systems::weapon::{self, Mount};

/// One tick for one tank: movement with collision, then its behavior.
pub fn update(world: &mut World, id: TankId) {
    let Some(index) = world.tank_index(id) else {
        return;
    };
    let tick = world.iteration;
    let screen = world.screen_dimensions();

    if let Some(next) = plan_move(&mut world.tanks[index], tick) {
        let blocked = is_blocked(&world.tanks, Some(index), next, screen);
        settle(&mut world.tanks[index], next, blocked);
    }

    world.run_behavior(id);
}

/// Same movement rules for a tank that is not in `tanks` yet.
/// Returns false if the tank got blocked.
pub(crate) fn trial_step(tanks: &[Tank], screen: (i32, i32), tank: &mut Tank, tick: u64) -> bool {
    if let Some(next) = plan_move(tank, tick) {
        let blocked = is_blocked(tanks, None, next, screen);
        settle(tank, next, blocked);
    }
    !tank.blocked
}

/// Refresh the weapon lock and compute the next position if moving.
fn plan_move(tank: &mut Tank, tick: u64) -> Option<Position> {
    let moving = tank.moving();
    if let Some(w) = tank.weapon.as_mut() {
        weapon::update(w, moving, tick);
    }
    if !moving {
        return None;
    }

    let mut next = tank.position;
    next.update(tank.angle, tank.speed * tank.command);
    Some(next)
}

fn is_blocked(tanks: &[Tank], skip: Option<usize>, next: Position, screen: (i32, i32)) -> bool {
    let (width, height) = screen;
    if check_borders(next, BLOCK_RADIUS, width, height) {
        return true;
    }
    tanks
        .iter()
        .enumerate()
        .any(|(i, other)| Some(i) != skip && is_collided(next, BLOCK_RADIUS, other.position, BLOCK_RADIUS))
}

fn settle(tank: &mut Tank, next: Position, blocked: bool) {
    if blocked {
        tank.command = command::STOP;
        tank.blocked = true;
    } else {
        tank.position = next;
    }
}

/// Apply damage reduced by armor (always at least 1). Dead tanks leave the world.
pub fn hit(world: &mut World, id: TankId, damage: i32) {
    let Some(tank) = world.tank_mut(id) else {
        return;
    };
    tank.health -= (damage - tank.armor).max(1);

    if !tank.alive() {
        tracing::debug!(tank = %id, owner = %tank.owner, "tank destroyed");
        world.remove_tank(id, HEALTH_REMOVED);
    }
}

pub fn forward(tank: &mut Tank, tick: u64) {
    drive(tank, command::FORWARD, tick);
}

pub fn backward(tank: &mut Tank, tick: u64) {
    drive(tank, command::BACKWARD, tick);
}

fn drive(tank: &mut Tank, direction: i32, tick: u64) {
    if let Some(w) = tank.weapon.as_mut() {
        weapon::update(w, true, tick);
    }
    tank.command = direction;
    tank.blocked = false;
}

pub fn stop(tank: &mut Tank) {
    tank.command = command::STOP;
}

/// Turn by `step` degrees, at most once per rotation delay.
pub fn rotate(tank: &mut Tank, step: i32, tick: u64) -> ActionResult {
    if tank.last_rotate + TANK_ROTATION_DELAY > tick {
        return Err(ActionRejected(Status::Preparing));
    }

    tank.angle = normalize_angle(tank.angle + step);
    tank.last_rotate = tick;

    // A rotation counts as a move.
    if let Some(w) = tank.weapon.as_mut() {
        weapon::update(w, true, tick);
    }
    Ok(())
}

/// Weapon status, or NoWeapon for weaponless or dead tanks.
pub fn status(tank: &Tank, tick: u64) -> Status {
    match &tank.weapon {
        Some(w) if tank.alive() => weapon::status(w, tick, tank.moving()),
        _ => Status::NoWeapon,
    }
}

pub fn fire(world: &mut World, id: TankId, fire_angle: i32, distance: i32) -> ActionResult {
    let tick = world.iteration;
    let Some(tank) = world.tank_mut(id) else {
        return Err(ActionRejected(Status::NoWeapon));
    };
    if !tank.alive() {
        return Err(ActionRejected(Status::NoWeapon));
    }

    let mount = Mount {
        position: tank.position,
        angle: tank.angle,
        moving: tank.moving(),
    };
    let Some(w) = tank.weapon.as_mut() else {
        return Err(ActionRejected(Status::NoWeapon));
    };

    let mut projectile = weapon::fire(w, mount, tick, fire_angle, distance)?;
    projectile.parent = Some(id);
    world.spawn_projectile(projectile);
    world.sound_events.push(SoundEvent::Fire {
        tick,
        position: mount.position,
    });
    Ok(())
}

/// Fire toward a point, at its (truncated) distance.
pub fn fire_at(world: &mut World, id: TankId, target: Position) -> ActionResult {
    let Some(me) = world.tank(id).map(|t| t.position) else {
        return Err(ActionRejected(Status::NoWeapon));
    };
    fire(world, id, relative_angle(me, target), distance(me, target) as i32)
}
