//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConstructionError;

/// Weapon mounted on a tank. `None` builds a structure (rock, base).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Neutral objects carry no weapon.
    #[default]
    None,
    /// Battle tank gun: direct fire, fixed to the hull angle.
    Cannon,
    /// Indirect fire with a large blast.
    Artillery,
    /// Indirect fire; invested damage shortens the reload.
    Rockets,
}

impl WeaponType {
    /// Name used on the wire and by the presentation layer.
    pub fn name(&self) -> &'static str {
        match self {
            WeaponType::None => "None",
            WeaponType::Cannon => "Tank",
            WeaponType::Artillery => "Artillery",
            WeaponType::Rockets => "RocketLauncher",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeaponType {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(WeaponType::None),
            "Tank" => Ok(WeaponType::Cannon),
            "Artillery" => Ok(WeaponType::Artillery),
            "RocketLauncher" => Ok(WeaponType::Rockets),
            other => Err(ConstructionError::UnknownWeapon(other.to_string())),
        }
    }
}

/// Weapon readiness as seen from the tank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The tank is moving and can't fire.
    Moving,
    /// Building up after a move or rotation (see prep time).
    Preparing,
    /// Ready to fire.
    #[default]
    Ready,
    /// Reloading after a shot (see reload time).
    Reloading,
    /// No weapon, or the tank is dead.
    NoWeapon,
}

impl Status {
    pub fn is_ready(&self) -> bool {
        *self == Status::Ready
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Moving => "Moving",
            Status::Preparing => "Preparing",
            Status::Ready => "Ready",
            Status::Reloading => "Reloading",
            Status::NoWeapon => "NoWeapon",
        };
        f.write_str(s)
    }
}

/// Movement command: forward, stop or backward.
pub mod command {
    pub const FORWARD: i32 = 1;
    pub const STOP: i32 = 0;
    pub const BACKWARD: i32 = -1;
}
