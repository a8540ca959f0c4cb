//! Behavior macros for TankWars.
//!
//! Small per-tick decision functions that steer a tank using nothing but
//! its public control surface. No engine dependency: the engine implements
//! [`TankControls`] and calls these once per tick.

pub mod controls;
pub mod macros;

pub use controls::TankControls;
pub use tankwars_core as core;
