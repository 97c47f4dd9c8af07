//! Movement system - advances actors with a Movement component.

use hecs::World;

use scenewalk_logic::{step_towards, NavMesh, Vec2, ARRIVE_EPSILON};

use crate::components::{Facing, FacingDir, Movement, Position};

/// Horizontal displacement below this does not change facing. Prevents
/// sprite flicker during near-vertical motion.
pub const FACING_DEADBAND: f64 = 0.05;

/// Step every moving actor toward its destination through the collision
/// stepper. Arrival removes the Movement component; a blocked step (no
/// progress while still short of the destination) also removes it, so a
/// blocked vector cancels the active destination.
pub fn movement_system(world: &mut World, mesh: &NavMesh, delta_seconds: f64, max_substep: f64) {
    // Collect updates (can't mutate while iterating)
    let mut updates: Vec<(hecs::Entity, Vec2, f64, bool)> = Vec::with_capacity(64);

    for (entity, (pos, movement)) in world.query::<(&Position, &Movement)>().iter() {
        let max_step = movement.speed * delta_seconds;
        if max_step <= 0.0 {
            // Stalled frame, not a blocked vector; keep the destination.
            continue;
        }
        let next = step_towards(pos.world, movement.destination, max_step, mesh, max_substep);

        let progressed = next.distance(&pos.world) > ARRIVE_EPSILON;
        let arrived = next.distance(&movement.destination) <= ARRIVE_EPSILON;

        if !progressed && !arrived {
            log::debug!(
                "movement blocked at ({:.2}, {:.2}) toward ({:.2}, {:.2})",
                pos.world.x,
                pos.world.y,
                movement.destination.x,
                movement.destination.y
            );
        }

        let dx = next.x - pos.world.x;
        updates.push((entity, next, dx, arrived || !progressed));
    }

    // Apply updates
    for (entity, new_pos, dx, done) in updates {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.world = new_pos;
        }

        if dx.abs() > FACING_DEADBAND {
            if let Ok(mut facing) = world.get::<&mut Facing>(entity) {
                facing.dir = if dx > 0.0 {
                    FacingDir::Right
                } else {
                    FacingDir::Left
                };
            }
        }

        if done {
            let _ = world.remove_one::<Movement>(entity);
        }
    }
}
