//! The five built-in macros.
//!
//! Pure functions of the control surface, called once per tick. Rejected
//! actions are simply retried on a later tick.

use rand::Rng;

use tankwars_core::constants::{BLOCK_RADIUS, ROTATION_STEP};
use tankwars_core::enums::Status;
use tankwars_core::types::{distance, relative_angle, Position};

use crate::controls::TankControls;

/// Distance passed with "fire as far as you can" shots; capped by the weapon.
const FULL_RANGE: i32 = 99_999;

/// Half width of the fire wall cone, in degrees.
const FIRE_WALL_SPREAD: i32 = 35;

fn armed<T: TankControls + ?Sized>(t: &T) -> bool {
    t.weapon().is_some()
}

/// Number of 45° steps from `angle` to `relative_angle`.
/// Negative means turn left, positive means turn right.
pub fn rotations_to_target(angle: i32, relative_angle: i32) -> i32 {
    let ra = -((angle + 180 - relative_angle + 360).rem_euclid(360) - 180);
    (ra as f64 / ROTATION_STEP as f64).round() as i32
}

/// Hold position and attack anything that comes in reach.
/// Fixed-angle weapons turn toward the best target first.
pub fn guard_mode<T: TankControls + ?Sized>(t: &mut T, filters: &[String]) {
    if !armed(t) {
        return;
    }

    let targets = t.possible_targets(filters);
    let Some(best) = targets.first() else {
        return;
    };

    let any_angle = t.weapon().is_some_and(|w| w.any_fire_angle);
    if any_angle {
        let _ = t.fire_at(best.position);
        return;
    }

    let steps = rotations_to_target(t.angle(), best.relative_angle);
    if steps < 0 {
        let _ = t.left();
    } else if steps > 0 {
        let _ = t.right();
    } else {
        let _ = t.fire_at(best.position);
    }
}

/// Advance along the hull angle; stop and fight whenever a target is in reach.
/// A blocked tank turns a random way before pushing on.
pub fn attack_move<T: TankControls + ?Sized>(t: &mut T, filters: &[String]) {
    if !armed(t) {
        return;
    }

    if !t.possible_targets(filters).is_empty() {
        t.stop();
        guard_mode(t, filters);
        return;
    }

    if t.blocked() {
        if t.rng().gen_range(0..2) == 1 {
            let _ = t.left();
        } else {
            let _ = t.right();
        }
    }
    t.forward();
}

/// Fire when loaded, drive while reloading, stop to prepare.
pub fn fire_and_maneuver<T: TankControls + ?Sized>(t: &mut T) {
    if !armed(t) {
        return;
    }

    match t.status() {
        Status::Ready => {
            let angle = t.angle();
            let _ = t.fire(angle, FULL_RANGE);
        }
        Status::Reloading => t.forward(),
        Status::Moving => t.stop(),
        Status::Preparing | Status::NoWeapon => {}
    }
}

/// Fire at random spots in front of the tank, ignoring targets.
pub fn fire_wall<T: TankControls + ?Sized>(t: &mut T) {
    if !armed(t) {
        return;
    }

    let spread = t.rng().gen_range(0..2 * FIRE_WALL_SPREAD) - FIRE_WALL_SPREAD;
    let angle = t.angle() + spread;
    let _ = t.fire(angle, 9_999);
}

/// Drive to `to` and stop there.
///
/// Once the tank is blocked the macro stays put until someone calls
/// `forward` explicitly.
pub fn move_to<T: TankControls + ?Sized>(t: &mut T, to: Position) {
    let me = t.position();

    if distance(me, to) > BLOCK_RADIUS as f64 {
        if !t.moving() && !t.blocked() {
            t.forward();
        }
    } else if t.moving() {
        t.stop();
        return;
    }

    let steps = rotations_to_target(t.angle(), relative_angle(me, to));
    if steps < 0 {
        let _ = t.left();
    }
    if steps > 0 {
        let _ = t.right();
    }
}
