//! Systems that operate on the world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! queries). They do not own state; all state lives in the world.

pub mod economy;
pub mod projectile;
pub mod snapshot;
pub mod tank;
pub mod targeting;
pub mod weapon;
