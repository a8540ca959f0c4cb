//! The world, the core of the game.
//!
//! `World` owns every tank and projectile, runs the per-entity systems once
//! per `update` and produces `WorldSnapshot`s. Completely headless, so two
//! worlds built from the same config and fed the same calls stay identical.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use tankwars_core::components::{Projectile, Tank};
use tankwars_core::constants::*;
use tankwars_core::enums::WeaponType;
use tankwars_core::errors::{ConstructionError, EconomicError};
use tankwars_core::events::SoundEvent;
use tankwars_core::state::WorldSnapshot;
use tankwars_core::types::{Position, ProjectileId, TankId};

use crate::behavior::{self, Behavior};
use crate::control::TankControl;
use crate::factory;
use crate::systems;

/// Configuration for a new world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Width in blocks.
    pub width: i32,
    /// Height in blocks.
    pub height: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: WORLD_X_WIDTH,
            height: WORLD_Y_HEIGHT,
        }
    }
}

/// The simulation world. Owns all tanks, projectiles and sim state.
pub struct World {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) iteration: u64,
    pub(crate) freeze: bool,

    pub(crate) tanks: Vec<Tank>,
    pub(crate) projectiles: Vec<Projectile>,

    pub(crate) cash_red: f64,
    pub(crate) cash_blue: f64,

    pub(crate) rng: ChaCha8Rng,
    next_tank_id: u64,
    next_projectile_id: u64,

    pub(crate) sound_events: Vec<SoundEvent>,
    pub(crate) casualties: Vec<Tank>,

    pub(crate) behaviors: HashMap<TankId, Behavior>,
    /// Tank whose behavior is currently executing, if any.
    pub(crate) running_behavior: Option<TankId>,
    /// Set when the running tank's behavior was replaced or cleared mid-run.
    pub(crate) behavior_replaced: bool,
}

impl World {
    /// Create a world of `width` x `height` blocks with the default seed.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(SimConfig {
            width,
            height,
            ..Default::default()
        })
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            iteration: 0,
            freeze: false,
            tanks: Vec::new(),
            projectiles: Vec::new(),
            cash_red: 0.0,
            cash_blue: 0.0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_tank_id: FIRST_TANK_ID,
            next_projectile_id: 1,
            sound_events: Vec::new(),
            casualties: Vec::new(),
            behaviors: HashMap::new(),
            running_behavior: None,
            behavior_replaced: false,
        }
    }

    // ---- Tick ----

    /// Advance the simulation by one tick. Does nothing while frozen.
    ///
    /// Sound events and casualties not drained since the previous tick are
    /// dropped here, so both queues hold at most one tick's worth.
    pub fn update(&mut self) {
        if self.freeze {
            return;
        }
        self.sound_events.clear();
        self.casualties.clear();

        // Tanks removed earlier in this tick are skipped.
        let tank_ids: Vec<TankId> = self.tanks.iter().map(|t| t.id).collect();
        for id in tank_ids {
            systems::tank::update(self, id);
        }

        let projectile_ids: Vec<ProjectileId> = self.projectiles.iter().map(|p| p.id).collect();
        for id in projectile_ids {
            systems::projectile::update(self, id);
        }

        systems::economy::accrue_cash(self);

        self.iteration += 1;
    }

    /// Call `update` `n` times.
    pub fn update_n(&mut self, n: u64) {
        for _ in 0..n {
            self.update();
        }
    }

    // ---- Read surface ----

    /// Dimensions in blocks.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Dimensions in pixels.
    pub fn screen_dimensions(&self) -> (i32, i32) {
        (self.width * BLOCK_SIZE, self.height * BLOCK_SIZE)
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn tank(&self, id: TankId) -> Option<&Tank> {
        self.tanks.iter().find(|t| t.id == id)
    }

    /// Cash of both players, truncated.
    pub fn cash_stat(&self) -> (i32, i32) {
        systems::economy::cash_stat(self)
    }

    /// Units counted for the victory condition: (red, blue).
    pub fn unit_count(&self) -> (usize, usize) {
        systems::economy::unit_count(self)
    }

    /// True if a behavior is attached to the tank, including one that is
    /// running right now.
    pub fn active_macro(&self, id: TankId) -> bool {
        self.behaviors.contains_key(&id)
            || (self.running_behavior == Some(id) && !self.behavior_replaced)
    }

    /// Complete visible state.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(self)
    }

    /// Sound events of the last tick, plus any from commands issued since.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sound_events)
    }

    /// Tanks taken out during the last tick, plus any removed since.
    pub fn drain_casualties(&mut self) -> Vec<Tank> {
        std::mem::take(&mut self.casualties)
    }

    // ---- Mutation ----

    pub fn freeze(&mut self, status: bool) {
        self.freeze = status;
    }

    /// Overwrite the cash of both players.
    pub fn set_cash(&mut self, red: i32, blue: i32) {
        self.cash_red = red as f64;
        self.cash_blue = blue as f64;
    }

    /// Build a tank for this world. Nothing is added yet.
    pub fn construct_tank(
        &mut self,
        owner: &str,
        armor: i32,
        damage: i32,
        weapon: WeaponType,
    ) -> Result<Tank, ConstructionError> {
        let mut tank = factory::build_tank(owner, armor, damage, weapon, self.iteration)?;
        tank.id = self.allocate_tank_id();
        Ok(tank)
    }

    /// Construct a tank, place it and add it in one go.
    pub fn spawn_tank(
        &mut self,
        owner: &str,
        armor: i32,
        damage: i32,
        weapon: WeaponType,
        position: Position,
        angle: i32,
    ) -> Result<TankId, ConstructionError> {
        let mut tank = self.construct_tank(owner, armor, damage, weapon)?;
        tank.position = position;
        tank.angle = angle;
        Ok(self.add_tank(tank))
    }

    /// Append a tank. Use its position as is; no collision check.
    ///
    /// A tank without an id, or with one already taken in this world, gets
    /// a fresh id.
    pub fn add_tank(&mut self, mut tank: Tank) -> TankId {
        if !tank.id.is_assigned() || self.tank_index(tank.id).is_some() {
            tank.id = self.allocate_tank_id();
        } else {
            self.next_tank_id = self.next_tank_id.max(tank.id.0 + 1);
        }
        let id = tank.id;
        self.tanks.push(tank);
        id
    }

    /// Buy a tank for its owner and place it near the owner's base.
    pub fn buy_tank(&mut self, tank: Tank) -> Result<TankId, EconomicError> {
        systems::economy::buy_tank(self, tank)
    }

    /// Remove all tanks whose owner starts with `prefix`; "" removes all.
    pub fn clear(&mut self, prefix: &str) {
        let (cleared, kept): (Vec<Tank>, Vec<Tank>) = std::mem::take(&mut self.tanks)
            .into_iter()
            .partition(|t| t.owner.starts_with(prefix));
        self.tanks = kept;

        for mut tank in cleared {
            self.behaviors.remove(&tank.id);
            tank.health = 0;
            self.casualties.push(tank);
        }
    }

    /// Attach (or with `None`, detach) a behavior.
    pub fn set_macro(&mut self, id: TankId, behavior: Option<Behavior>) {
        if self.running_behavior == Some(id) {
            self.behavior_replaced = true;
        }
        match behavior {
            Some(b) => {
                self.behaviors.insert(id, b);
            }
            None => {
                self.behaviors.remove(&id);
            }
        }
    }

    /// Control handle for one tank, or `None` if it is not in this world.
    pub fn control(&mut self, id: TankId) -> Option<TankControl<'_>> {
        self.tank_index(id)?;
        Some(TankControl::new(self, id))
    }

    // ---- Crate internals ----

    pub(crate) fn tank_index(&self, id: TankId) -> Option<usize> {
        self.tanks.iter().position(|t| t.id == id)
    }

    pub(crate) fn tank_mut(&mut self, id: TankId) -> Option<&mut Tank> {
        self.tanks.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn projectile_index(&self, id: ProjectileId) -> Option<usize> {
        self.projectiles.iter().position(|p| p.id == id)
    }

    /// Take a tank out of the world with the given final health.
    pub(crate) fn remove_tank(&mut self, id: TankId, health: i32) -> bool {
        let Some(index) = self.tank_index(id) else {
            return false;
        };
        let mut tank = self.tanks.remove(index);
        tank.health = health;
        self.behaviors.remove(&id);
        self.casualties.push(tank);
        true
    }

    pub(crate) fn spawn_projectile(&mut self, mut projectile: Projectile) -> ProjectileId {
        projectile.id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;
        let id = projectile.id;
        self.projectiles.push(projectile);
        id
    }

    pub(crate) fn run_behavior(&mut self, id: TankId) {
        behavior::dispatch(self, id);
    }

    fn allocate_tank_id(&mut self) -> TankId {
        let id = TankId(self.next_tank_id);
        self.next_tank_id += 1;
        id
    }
}
