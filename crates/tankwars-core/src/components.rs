//! Entity records owned by the world.
//!
//! Records are plain data structs. Game logic lives in the engine's
//! systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;
use crate::types::{Position, ProjectileId, TankId};

/// A tank, or any other destructible object (rock, base).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Unique within its world.
    pub id: TankId,
    /// Player tag or structure category tag (see `owners`).
    pub owner: String,
    pub weapon: Option<Weapon>,

    /// > 0 alive, <= 0 dead, -1 once taken out of the world.
    pub health: i32,
    /// Subtracted from every hit.
    pub armor: i32,
    /// Derived from the unused budget, plus bonus.
    pub speed: i32,

    pub position: Position,
    /// 1 forward, 0 stop, -1 backward.
    pub command: i32,
    /// 0 is North, 45 Northeast, 90 East, ...
    pub angle: i32,
    /// Last move ended because the path was blocked. Cleared only by
    /// forward/backward.
    pub blocked: bool,
    /// Tick of the last successful rotation.
    pub last_rotate: u64,
}

impl Tank {
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    pub fn moving(&self) -> bool {
        self.command != 0
    }
}

/// Weapon parameters and timers. Parameters are fixed per type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub weapon_type: WeaponType,
    pub range: i32,
    /// Ticks needed after movement before firing.
    pub prep_time: u64,
    /// Ticks needed after firing before firing again.
    pub reload_time: u64,
    pub projectile_speed: i32,
    pub damage: i32,
    pub aoe_radius: i32,
    /// true: stopped by the first tank in its path, vanishes at max range.
    /// false: flies through everything and explodes at max range.
    pub projectile_collision: bool,
    /// false: always fires along the hull angle.
    pub any_fire_angle: bool,

    pub last_move: u64,
    pub last_fire: u64,
}

/// A flying (or exploding) projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    /// Firing tank. Never hit by its own collision check.
    pub parent: Option<TankId>,

    pub position: Position,
    pub start_position: Position,
    /// Planned end; a collision can stop it earlier.
    pub end_position: Position,
    pub angle: i32,
    /// Maximum flight distance.
    pub distance: i32,
    pub speed: i32,
    pub damage: i32,
    pub aoe_radius: i32,
    pub collision: bool,

    /// 0 while flying, then the number of updates since detonation.
    pub exploded: u32,
}

impl Projectile {
    pub fn is_exploded(&self) -> bool {
        self.exploded > 0
    }
}

/// A tank in weapon range, as seen from the firer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub tank: TankId,
    pub owner: String,
    pub position: Position,
    /// Truncated center distance.
    pub distance: i32,
    pub relative_angle: i32,
}
