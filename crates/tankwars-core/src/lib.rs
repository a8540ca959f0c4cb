//! Core types and definitions for the TankWars simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions and geometry, entity records, errors, events, snapshots and
//! constants. It has no dependency on the engine or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod owners;
pub mod state;
pub mod types;
