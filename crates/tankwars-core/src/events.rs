//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Sound cues for the presentation layer. The engine only queues them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SoundEvent {
    /// A weapon launched a projectile.
    Fire { tick: u64, position: Position },
    /// A projectile detonated.
    Explosion { tick: u64, position: Position },
}
