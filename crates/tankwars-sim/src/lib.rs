//! Simulation engine for TankWars.
//!
//! Owns the tank and projectile lists, runs the per-entity systems once per
//! tick and produces `WorldSnapshot`s for wire and presentation layers.

pub mod behavior;
pub mod control;
pub mod engine;
pub mod factory;
pub mod systems;

pub use behavior::Behavior;
pub use control::TankControl;
pub use engine::{SimConfig, World};
pub use tankwars_core as core;
pub use tankwars_macro::{macros, TankControls};
