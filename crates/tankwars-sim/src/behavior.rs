//! Behaviors attached to tanks and run once per tick after movement.

use std::fmt;

use tankwars_core::types::{Position, TankId};
use tankwars_macro::macros;

use crate::control::TankControl;
use crate::engine::World;

/// User supplied per-tick routine.
pub type MacroFn = Box<dyn FnMut(&mut TankControl<'_>) + Send>;

/// What a tank does on its own every tick.
pub enum Behavior {
    GuardMode { filters: Vec<String> },
    AttackMove { filters: Vec<String> },
    FireAndManeuver,
    FireWall,
    MoveTo(Position),
    Custom(MacroFn),
}

impl Behavior {
    pub fn guard_mode<S: Into<String>>(filters: impl IntoIterator<Item = S>) -> Self {
        Behavior::GuardMode {
            filters: filters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn attack_move<S: Into<String>>(filters: impl IntoIterator<Item = S>) -> Self {
        Behavior::AttackMove {
            filters: filters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn custom(f: impl FnMut(&mut TankControl<'_>) + Send + 'static) -> Self {
        Behavior::Custom(Box::new(f))
    }

    fn run(&mut self, control: &mut TankControl<'_>) {
        match self {
            Behavior::GuardMode { filters } => macros::guard_mode(control, filters),
            Behavior::AttackMove { filters } => macros::attack_move(control, filters),
            Behavior::FireAndManeuver => macros::fire_and_maneuver(control),
            Behavior::FireWall => macros::fire_wall(control),
            Behavior::MoveTo(to) => macros::move_to(control, *to),
            Behavior::Custom(f) => f(control),
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::GuardMode { filters } => {
                f.debug_struct("GuardMode").field("filters", filters).finish()
            }
            Behavior::AttackMove { filters } => {
                f.debug_struct("AttackMove").field("filters", filters).finish()
            }
            Behavior::FireAndManeuver => f.write_str("FireAndManeuver"),
            Behavior::FireWall => f.write_str("FireWall"),
            Behavior::MoveTo(to) => f.debug_tuple("MoveTo").field(to).finish(),
            Behavior::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Run the tank's behavior, if any.
///
/// The behavior is taken out of the world while it runs and put back only
/// if the tank survived and nobody replaced or cleared it in the meantime.
pub(crate) fn dispatch(world: &mut World, id: TankId) {
    let Some(mut behavior) = world.behaviors.remove(&id) else {
        return;
    };

    world.running_behavior = Some(id);
    world.behavior_replaced = false;
    {
        let mut control = TankControl::new(world, id);
        behavior.run(&mut control);
    }
    let replaced = world.behavior_replaced;
    world.running_behavior = None;
    world.behavior_replaced = false;

    if !replaced && world.tank_index(id).is_some() {
        world.behaviors.insert(id, behavior);
    }
}
