//! Snapshot system: reads the world and builds a complete WorldSnapshot.
//!
//! This system is read-only; it never modifies the world.

use tankwars_core::state::{CashView, ProjectileView, TankView, UnitCountView, WorldSnapshot};

use crate::engine::World;
use crate::systems::{economy, tank};

pub fn build_snapshot(world: &World) -> WorldSnapshot {
    let (screen_width, screen_height) = world.screen_dimensions();
    let (cash_red, cash_blue) = economy::cash_stat(world);
    let (units_red, units_blue) = economy::unit_count(world);

    WorldSnapshot {
        width: world.width,
        height: world.height,
        screen_width,
        screen_height,
        iteration: world.iteration,
        frozen: world.freeze,
        cash: CashView {
            red: cash_red,
            blue: cash_blue,
        },
        units: UnitCountView {
            red: units_red,
            blue: units_blue,
        },
        tanks: world
            .tanks
            .iter()
            .map(|t| TankView::new(t, world.active_macro(t.id), tank::status(t, world.iteration)))
            .collect(),
        projectiles: world.projectiles.iter().map(ProjectileView::from).collect(),
    }
}
