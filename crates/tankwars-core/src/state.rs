//! World state snapshot: the complete visible state after a tick.
//!
//! Wire and presentation layers consume this instead of the live world.

use serde::{Deserialize, Serialize};

use crate::components::{Projectile, Tank, Weapon};
use crate::enums::Status;
use crate::types::{Position, ProjectileId, TankId};

/// Everything a collaborator can read from a world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Dimensions in blocks.
    pub width: i32,
    pub height: i32,
    /// Dimensions in pixels.
    pub screen_width: i32,
    pub screen_height: i32,
    pub iteration: u64,
    pub frozen: bool,
    pub cash: CashView,
    pub units: UnitCountView,
    pub tanks: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashView {
    pub red: i32,
    pub blue: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCountView {
    pub red: usize,
    pub blue: usize,
}

/// A tank as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub id: TankId,
    pub owner: String,
    pub weapon: Option<Weapon>,
    pub health: i32,
    pub armor: i32,
    pub speed: i32,
    pub position: Position,
    pub command: i32,
    pub angle: i32,
    pub alive: bool,
    pub moving: bool,
    pub blocked: bool,
    pub last_rotate: u64,
    pub active_macro: bool,
    pub status: Status,
}

impl TankView {
    pub fn new(tank: &Tank, active_macro: bool, status: Status) -> Self {
        Self {
            id: tank.id,
            owner: tank.owner.clone(),
            weapon: tank.weapon.clone(),
            health: tank.health,
            armor: tank.armor,
            speed: tank.speed,
            position: tank.position,
            command: tank.command,
            angle: tank.angle,
            alive: tank.alive(),
            moving: tank.moving(),
            blocked: tank.blocked,
            last_rotate: tank.last_rotate,
            active_macro,
            status,
        }
    }
}

/// A projectile as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub parent: Option<TankId>,
    pub position: Position,
    pub start_position: Position,
    pub end_position: Position,
    pub angle: i32,
    pub distance: i32,
    pub speed: i32,
    pub damage: i32,
    pub aoe_radius: i32,
    pub collision: bool,
    pub exploded: bool,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            parent: p.parent,
            position: p.position,
            start_position: p.start_position,
            end_position: p.end_position,
            angle: p.angle,
            distance: p.distance,
            speed: p.speed,
            damage: p.damage,
            aoe_radius: p.aoe_radius,
            collision: p.collision,
            exploded: p.is_exploded(),
        }
    }
}
