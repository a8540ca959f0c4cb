//! Projectile flight and detonation.

use tankwars_core::constants::{BALL_RADIUS, BLOCK_RADIUS, SHOW_EXPLOSION_ITERATIONS};
use tankwars_core::events::SoundEvent;
use tankwars_core::types::{distance, is_collided, ProjectileId, TankId};

use crate::engine::World;
use crate::systems::tank;

/// Advance one projectile by one tick.
pub fn update(world: &mut World, id: ProjectileId) {
    let Some(index) = world.projectile_index(id) else {
        return;
    };

    let p = &mut world.projectiles[index];
    if p.is_exploded() {
        p.exploded += 1;
        if p.exploded > SHOW_EXPLOSION_ITERATIONS {
            world.projectiles.remove(index);
        }
        return;
    }

    p.position.update(p.angle, p.speed);
    let (position, parent) = (p.position, p.parent);

    if p.collision {
        let contact = world.tanks.iter().any(|t| {
            Some(t.id) != parent && is_collided(position, BALL_RADIUS, t.position, BLOCK_RADIUS)
        });
        if contact {
            explode(world, index);
            return;
        }
    }

    let p = &world.projectiles[index];
    if distance(p.start_position, p.position) >= p.distance as f64 {
        if p.collision {
            // Direct fire that missed.
            world.projectiles.remove(index);
        } else {
            explode(world, index);
        }
    }
}

/// Damage every tank in the blast, then start the explosion counter.
fn explode(world: &mut World, index: usize) {
    let tick = world.iteration;
    let p = &world.projectiles[index];
    let radius = p.aoe_radius.max(BALL_RADIUS);
    let (position, damage) = (p.position, p.damage);

    let victims: Vec<TankId> = world
        .tanks
        .iter()
        .filter(|t| is_collided(position, radius, t.position, BLOCK_RADIUS))
        .map(|t| t.id)
        .collect();
    tracing::trace!(projectile = p.id.0, victims = victims.len(), "projectile exploded");

    for victim in victims {
        tank::hit(world, victim, damage);
    }

    world.projectiles[index].exploded = 1;
    world.sound_events.push(SoundEvent::Explosion { tick, position });
}
