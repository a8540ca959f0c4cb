//! Typed failures. None of them is fatal: the simulation always continues.

use thiserror::Error;

use crate::constants::*;
use crate::enums::Status;

/// Invalid stat budget or weapon. Nothing is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("with armor and weapons the speed would be {speed} but min. is {}", TANK_MIN_SPEED)]
    SpeedTooLow { speed: i32 },

    #[error("the armor must be between {} and {}, got {armor}", TANK_MIN_ARMOR, TANK_MAX_ARMOR)]
    ArmorOutOfRange { armor: i32 },

    #[error("the damage must be between {} and {}, got {damage}", TANK_MIN_DAMAGE, TANK_MAX_DAMAGE)]
    DamageOutOfRange { damage: i32 },

    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),
}

/// A fire or rotate command was refused. Carries the blocking status.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("action rejected: {0}")]
pub struct ActionRejected(pub Status);

impl ActionRejected {
    pub fn status(&self) -> Status {
        self.0
    }
}

/// A purchase failed. The candidate tank is never left in the world.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomicError {
    #[error("not enough tank budget for {owner}: {cash:.2} < {}", TANK_PRICE)]
    InsufficientFunds { owner: String, cash: f64 },

    #[error("unknown owner: {0}")]
    UnknownOwner(String),

    #[error("home base not found: {0}")]
    BaseNotFound(String),

    #[error("not enough space to spawn")]
    NoSpawnSpace,
}

/// Result of a tank action: success means the status was `Ready`.
pub type ActionResult = std::result::Result<(), ActionRejected>;
