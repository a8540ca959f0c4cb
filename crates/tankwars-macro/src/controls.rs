//! The control surface a macro sees: the same calls a human controller makes.

use rand::RngCore;

use tankwars_core::components::{Target, Weapon};
use tankwars_core::enums::Status;
use tankwars_core::errors::ActionResult;
use tankwars_core::types::Position;

/// Read and command access to one tank, plus targeting queries.
pub trait TankControls {
    fn weapon(&self) -> Option<&Weapon>;
    fn status(&self) -> Status;
    fn position(&self) -> Position;
    fn angle(&self) -> i32;
    fn moving(&self) -> bool;
    fn blocked(&self) -> bool;

    fn forward(&mut self);
    fn backward(&mut self);
    fn stop(&mut self);
    fn left(&mut self) -> ActionResult;
    fn right(&mut self) -> ActionResult;
    fn fire(&mut self, fire_angle: i32, distance: i32) -> ActionResult;
    fn fire_at(&mut self, position: Position) -> ActionResult;

    /// Targets that can actually be attacked, best first.
    fn possible_targets(&self, filters: &[String]) -> Vec<Target>;

    /// Source for random decisions. Seeded by the engine.
    fn rng(&mut self) -> &mut dyn RngCore;
}
