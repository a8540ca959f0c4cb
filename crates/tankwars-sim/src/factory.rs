//! Tank and weapon factories.
//!
//! A tank splits a fixed point budget between armor, damage and speed. The
//! weapon type then turns the invested damage into its own parameters.

use tankwars_core::components::{Tank, Weapon};
use tankwars_core::constants::*;
use tankwars_core::enums::WeaponType;
use tankwars_core::errors::ConstructionError;
use tankwars_core::types::{Position, TankId};

/// Validate a budget split and return the resulting speed including bonus.
pub fn tank_speed(armor: i32, damage: i32) -> Result<i32, ConstructionError> {
    let speed = TANK_BUDGET - armor - damage;

    if speed < TANK_MIN_SPEED {
        return Err(ConstructionError::SpeedTooLow { speed });
    }
    if !(TANK_MIN_ARMOR..=TANK_MAX_ARMOR).contains(&armor) {
        return Err(ConstructionError::ArmorOutOfRange { armor });
    }
    if !(TANK_MIN_DAMAGE..=TANK_MAX_DAMAGE).contains(&damage) {
        return Err(ConstructionError::DamageOutOfRange { damage });
    }

    let bonus = ((speed - TANK_MIN_SPEED) as f64).powi(6) * TANK_SPEED_BONUS_FACTOR;
    Ok(speed + bonus as i32)
}

/// Build an unregistered tank facing South at the origin.
///
/// `tick` is the current iteration; the weapon counts it as its last move.
pub fn build_tank(
    owner: &str,
    armor: i32,
    damage: i32,
    weapon: WeaponType,
    tick: u64,
) -> Result<Tank, ConstructionError> {
    let speed = tank_speed(armor, damage)?;

    Ok(Tank {
        id: TankId::UNASSIGNED,
        owner: owner.to_string(),
        weapon: build_weapon(weapon, damage, tick),
        health: TANK_START_HEALTH,
        armor,
        speed,
        position: Position::default(),
        command: 0,
        angle: SOUTH,
        blocked: false,
        last_rotate: 0,
    })
}

/// Weapon of the given type, or `None` for `WeaponType::None`.
pub fn build_weapon(weapon: WeaponType, damage: i32, tick: u64) -> Option<Weapon> {
    match weapon {
        WeaponType::None => None,
        WeaponType::Cannon => Some(cannon(damage, tick)),
        WeaponType::Artillery => Some(artillery(damage, tick)),
        WeaponType::Rockets => Some(rockets(damage, tick)),
    }
}

pub fn cannon(damage: i32, tick: u64) -> Weapon {
    Weapon {
        weapon_type: WeaponType::Cannon,
        range: CANNON_RANGE,
        prep_time: CANNON_PREP_TIME,
        reload_time: CANNON_RELOAD_TIME,
        projectile_speed: CANNON_PROJECTILE_SPEED,
        damage: (damage as f64 * CANNON_DAMAGE_FACTOR).round() as i32,
        aoe_radius: 0,
        projectile_collision: true,
        any_fire_angle: false,
        last_move: tick,
        last_fire: 0,
    }
}

pub fn artillery(damage: i32, tick: u64) -> Weapon {
    Weapon {
        weapon_type: WeaponType::Artillery,
        range: ARTILLERY_RANGE,
        prep_time: ARTILLERY_PREP_TIME,
        reload_time: ARTILLERY_RELOAD_TIME,
        projectile_speed: ARTILLERY_PROJECTILE_SPEED,
        damage: (damage as f64 * ARTILLERY_DAMAGE_FACTOR).round() as i32,
        aoe_radius: ARTILLERY_AOE_RADIUS,
        projectile_collision: false,
        any_fire_angle: true,
        last_move: tick,
        last_fire: 0,
    }
}

/// Rocket launcher. Invested damage buys a shorter reload, the rockets
/// themselves stay weak.
pub fn rockets(damage: i32, tick: u64) -> Weapon {
    Weapon {
        weapon_type: WeaponType::Rockets,
        range: ROCKETS_RANGE,
        prep_time: ROCKETS_PREP_TIME,
        reload_time: rockets_reload_time(damage),
        projectile_speed: ROCKETS_PROJECTILE_SPEED,
        damage: (damage as f64 / TANK_MAX_DAMAGE as f64 * ROCKETS_MAX_DAMAGE as f64) as i32,
        aoe_radius: ROCKETS_AOE_RADIUS,
        projectile_collision: false,
        any_fire_angle: true,
        last_move: tick,
        last_fire: 0,
    }
}

/// Integer arithmetic throughout: ms step per damage point, then ticks.
fn rockets_reload_time(damage: i32) -> u64 {
    let step = (ROCKETS_MAX_RELOAD_MS - ROCKETS_MIN_RELOAD_MS) / (TANK_MAX_DAMAGE - TANK_MIN_DAMAGE);
    let ms = ROCKETS_MAX_RELOAD_MS - step * (damage - TANK_MIN_DAMAGE);
    ms.max(0) as u64 * GAME_SPEED / 1000
}
