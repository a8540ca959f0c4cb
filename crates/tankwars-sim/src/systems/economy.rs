//! Cash income, unit counting and buying tanks.

use rand::Rng;

use tankwars_core::components::Tank;
use tankwars_core::constants::{CASH_PER_TICK, SOUTH, SPAWN_ATTEMPTS, SPAWN_HALF_EXTENT, TANK_PRICE};
use tankwars_core::errors::EconomicError;
use tankwars_core::owners;
use tankwars_core::types::{Position, TankId};

use crate::engine::World;
use crate::systems::tank;

/// Every base generates a trickle of cash for its player.
pub fn accrue_cash(world: &mut World) {
    for t in &world.tanks {
        match t.owner.as_str() {
            owners::RED_BASE => world.cash_red += CASH_PER_TICK,
            owners::BLUE_BASE => world.cash_blue += CASH_PER_TICK,
            _ => {}
        }
    }
}

pub fn cash_stat(world: &World) -> (i32, i32) {
    (world.cash_red as i32, world.cash_blue as i32)
}

/// Tanks and bases per player. Rocks and everything else do not count.
pub fn unit_count(world: &World) -> (usize, usize) {
    world
        .tanks
        .iter()
        .fold((0, 0), |(red, blue), t| match t.owner.as_str() {
            owners::RED_TANK | owners::RED_BASE => (red + 1, blue),
            owners::BLUE_TANK | owners::BLUE_BASE => (red, blue + 1),
            _ => (red, blue),
        })
}

/// Pay for `tank` and spawn it at a free spot near its home base.
///
/// The price is paid before the spot is searched and is not refunded if
/// no spot is found.
pub fn buy_tank(world: &mut World, mut tank: Tank) -> Result<TankId, EconomicError> {
    let Some(base) = owners::base_of(&tank.owner) else {
        tracing::debug!(owner = %tank.owner, "buy rejected: unknown owner");
        return Err(EconomicError::UnknownOwner(tank.owner));
    };
    let cash = if base == owners::RED_BASE {
        &mut world.cash_red
    } else {
        &mut world.cash_blue
    };
    if *cash < TANK_PRICE {
        tracing::debug!(owner = %tank.owner, cash = *cash, "buy rejected: not enough cash");
        return Err(EconomicError::InsufficientFunds {
            owner: tank.owner,
            cash: *cash,
        });
    }
    *cash -= TANK_PRICE;

    let Some(anchor) = world.tanks.iter().find(|t| t.owner == base).map(|t| t.position) else {
        tracing::debug!(owner = %tank.owner, "buy failed: home base not found");
        return Err(EconomicError::BaseNotFound(base.to_string()));
    };

    let tick = world.iteration;
    let screen = world.screen_dimensions();
    for _ in 0..SPAWN_ATTEMPTS {
        let x = anchor.x + world.rng.gen_range(0..2 * SPAWN_HALF_EXTENT) - SPAWN_HALF_EXTENT;
        let y = anchor.y + world.rng.gen_range(0..2 * SPAWN_HALF_EXTENT) - SPAWN_HALF_EXTENT;

        tank.position = Position::new(x, y);
        tank.angle = SOUTH;
        tank::forward(&mut tank, tick);
        if tank::trial_step(&world.tanks, screen, &mut tank, tick) {
            tank::stop(&mut tank);
            return Ok(world.add_tank(tank));
        }
    }

    tracing::debug!(owner = %tank.owner, "buy failed: no space to spawn");
    Err(EconomicError::NoSpawnSpace)
}
