//! Wandering system - autonomous destination sampling for idle NPCs.
//!
//! Per-NPC state machine: Idle-Paused → Seeking → Walking → Idle-Paused.
//! Seeking is transient within one tick: sample up to `max_tries` candidate
//! points around the spawn anchor, walk to the first walkable one, or back
//! off and stay paused.

use hecs::World;
use rand::Rng;

use scenewalk_logic::{is_walkable, NavMesh, Vec2};

use crate::components::{Movement, Position, Wander, WanderParams, WanderState};

enum WanderChange {
    StartWalking { dest: Vec2, speed: f64 },
    Pause { until_ms: f64 },
}

/// Advance every wanderer's state machine by one tick.
pub fn wandering_system(
    world: &mut World,
    mesh: &NavMesh,
    now_ms: f64,
    rng: &mut impl Rng,
) {
    let mut changes: Vec<(hecs::Entity, WanderChange)> = Vec::new();

    for (entity, (pos, wander)) in world.query::<(&Position, &Wander)>().iter() {
        match wander.state {
            WanderState::Paused { until_ms } => {
                if now_ms < until_ms {
                    continue;
                }
                match sample_destination(wander.anchor, &wander.params, mesh, rng) {
                    Some(dest) => changes.push((
                        entity,
                        WanderChange::StartWalking {
                            dest,
                            speed: wander.params.speed,
                        },
                    )),
                    None => changes.push((
                        entity,
                        WanderChange::Pause {
                            until_ms: now_ms + wander.params.retry_backoff_ms,
                        },
                    )),
                }
            }
            WanderState::Walking { dest } => {
                let arrived = pos.world.distance(&dest) <= wander.params.stop_distance;
                // Movement gone means the collision stepper cancelled it.
                let moving = world.get::<&Movement>(entity).is_ok();
                if arrived || !moving {
                    let pause = wander.params.base_pause_ms
                        + rng.gen::<f64>() * wander.params.pause_jitter_ms;
                    changes.push((
                        entity,
                        WanderChange::Pause {
                            until_ms: now_ms + pause,
                        },
                    ));
                }
            }
        }
    }

    for (entity, change) in changes {
        match change {
            WanderChange::StartWalking { dest, speed } => {
                if let Ok(mut wander) = world.get::<&mut Wander>(entity) {
                    wander.state = WanderState::Walking { dest };
                }
                let _ = world.insert_one(entity, Movement::new(dest, speed));
            }
            WanderChange::Pause { until_ms } => {
                if let Ok(mut wander) = world.get::<&mut Wander>(entity) {
                    wander.state = WanderState::Paused { until_ms };
                }
                let _ = world.remove_one::<Movement>(entity);
            }
        }
    }
}

/// Sample a walkable point around `anchor`: uniform angle in `[0, 2π)`,
/// uniform radius in `[min_step, max_radius]`, up to `max_tries` attempts.
fn sample_destination(
    anchor: Vec2,
    params: &WanderParams,
    mesh: &NavMesh,
    rng: &mut impl Rng,
) -> Option<Vec2> {
    let hi = params.max_radius.max(params.min_step);
    for _ in 0..params.max_tries {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius = rng.gen_range(params.min_step..=hi);
        let candidate = anchor + Vec2::new(angle.cos(), angle.sin()) * radius;
        if is_walkable(candidate, mesh) {
            return Some(candidate);
        }
    }
    None
}
