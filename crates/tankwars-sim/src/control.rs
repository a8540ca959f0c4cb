//! `TankControl`: the command surface of one tank inside a world.
//!
//! Behaviors and external controllers go through the same handle. Once the
//! tank has left the world, reads return neutral values and commands do
//! nothing.

use rand::RngCore;

use tankwars_core::components::{Tank, Target, Weapon};
use tankwars_core::constants::{HEALTH_REMOVED, ROTATION_STEP};
use tankwars_core::enums::Status;
use tankwars_core::errors::{ActionRejected, ActionResult};
use tankwars_core::types::{Position, TankId};
use tankwars_macro::TankControls;

use crate::behavior::Behavior;
use crate::engine::World;
use crate::systems::{tank, targeting};

pub struct TankControl<'w> {
    world: &'w mut World,
    id: TankId,
}

impl<'w> TankControl<'w> {
    pub(crate) fn new(world: &'w mut World, id: TankId) -> Self {
        Self { world, id }
    }

    pub fn id(&self) -> TankId {
        self.id
    }

    /// The tank, while it is still in the world.
    pub fn tank(&self) -> Option<&Tank> {
        self.world.tank(self.id)
    }

    pub fn world(&self) -> &World {
        &*self.world
    }

    pub fn health(&self) -> i32 {
        self.tank().map_or(HEALTH_REMOVED, |t| t.health)
    }

    pub fn alive(&self) -> bool {
        self.tank().is_some_and(Tank::alive)
    }

    pub fn active_macro(&self) -> bool {
        self.world.active_macro(self.id)
    }

    /// Apply `damage` reduced by armor.
    pub fn hit(&mut self, damage: i32) {
        tank::hit(self.world, self.id, damage);
    }

    /// Take the tank out of the world.
    pub fn remove(&mut self) {
        self.world.remove_tank(self.id, HEALTH_REMOVED);
    }

    /// Teleport without any collision check.
    pub fn set_position(&mut self, position: Position, angle: i32) {
        if let Some(t) = self.world.tank_mut(self.id) {
            t.position = position;
            t.angle = angle;
        }
    }

    pub fn set_macro(&mut self, behavior: Option<Behavior>) {
        self.world.set_macro(self.id, behavior);
    }

    /// All other tanks in weapon range, closest first.
    pub fn close_targets(&self, filters: &[String]) -> Vec<Target> {
        targeting::close_targets(self.world(), self.id, filters)
    }

    fn with_tank(&mut self, f: impl FnOnce(&mut Tank, u64)) {
        let tick = self.world.iteration;
        if let Some(t) = self.world.tank_mut(self.id) {
            f(t, tick);
        }
    }

    fn rotate(&mut self, step: i32) -> ActionResult {
        let tick = self.world.iteration;
        match self.world.tank_mut(self.id) {
            Some(t) => tank::rotate(t, step, tick),
            None => Err(ActionRejected(Status::NoWeapon)),
        }
    }
}

impl TankControls for TankControl<'_> {
    fn weapon(&self) -> Option<&Weapon> {
        self.tank().and_then(|t| t.weapon.as_ref())
    }

    fn status(&self) -> Status {
        match self.tank() {
            Some(t) => tank::status(t, self.world.iteration),
            None => Status::NoWeapon,
        }
    }

    fn position(&self) -> Position {
        self.tank().map(|t| t.position).unwrap_or_default()
    }

    fn angle(&self) -> i32 {
        self.tank().map_or(0, |t| t.angle)
    }

    fn moving(&self) -> bool {
        self.tank().is_some_and(Tank::moving)
    }

    fn blocked(&self) -> bool {
        self.tank().is_some_and(|t| t.blocked)
    }

    fn forward(&mut self) {
        self.with_tank(tank::forward);
    }

    fn backward(&mut self) {
        self.with_tank(tank::backward);
    }

    fn stop(&mut self) {
        self.with_tank(|t, _| tank::stop(t));
    }

    fn left(&mut self) -> ActionResult {
        self.rotate(-ROTATION_STEP)
    }

    fn right(&mut self) -> ActionResult {
        self.rotate(ROTATION_STEP)
    }

    fn fire(&mut self, fire_angle: i32, distance: i32) -> ActionResult {
        tank::fire(self.world, self.id, fire_angle, distance)
    }

    fn fire_at(&mut self, position: Position) -> ActionResult {
        tank::fire_at(self.world, self.id, position)
    }

    fn possible_targets(&self, filters: &[String]) -> Vec<Target> {
        targeting::possible_targets(self.world(), self.id, filters)
    }

    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.world.rng
    }
}
