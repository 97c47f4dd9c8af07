//! Zone system - runs every actor's zone tracker and collects enter events.

use hecs::World;

use scenewalk_logic::NavMesh;

use crate::components::{Position, ZoneState};

/// A scene-transition request produced when an actor enters a zone.
///
/// The engine only queues these; the host performs the actual transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneChange {
    pub entity: hecs::Entity,
    pub zone_id: String,
    pub target_scene: String,
}

/// Test every zone-tracking actor against the mesh's zones and push any
/// fired events into `events`.
pub fn zone_system(
    world: &mut World,
    mesh: &NavMesh,
    now_ms: f64,
    cooldown_ms: f64,
    events: &mut Vec<SceneChange>,
) {
    for (entity, (pos, zone_state)) in world.query_mut::<(&Position, &mut ZoneState)>() {
        if let Some(fire) = zone_state
            .tracker
            .tick(pos.world, &mesh.zones, now_ms, cooldown_ms)
        {
            log::debug!(
                "zone fired: {} -> scene {} at ({:.2}, {:.2})",
                fire.zone_id,
                fire.target_scene,
                pos.world.x,
                pos.world.y
            );
            events.push(SceneChange {
                entity,
                zone_id: fire.zone_id,
                target_scene: fire.target_scene,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenewalk_logic::{Polygon, Vec2, Zone};

    fn zone_mesh() -> NavMesh {
        NavMesh {
            zones: vec![Zone {
                id: "exit".into(),
                name: "exit".into(),
                boundary: Polygon::new(
                    "exit",
                    "exit",
                    vec![
                        Vec2::new(0.0, 0.0),
                        Vec2::new(50.0, 0.0),
                        Vec2::new(50.0, 50.0),
                        Vec2::new(0.0, 50.0),
                    ],
                ),
                target_scene: "X".into(),
            }],
            ..NavMesh::empty()
        }
    }

    #[test]
    fn test_zone_system_collects_one_event_per_entry() {
        let mesh = zone_mesh();
        let mut world = World::new();
        let inside = world.spawn((Position::new(Vec2::new(25.0, 25.0)), ZoneState::default()));
        let _outside = world.spawn((Position::new(Vec2::new(500.0, 500.0)), ZoneState::default()));
        let mut events = Vec::new();

        zone_system(&mut world, &mesh, 0.0, 800.0, &mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity, inside);
        assert_eq!(events[0].target_scene, "X");

        // Second tick inside the same zone: nothing new.
        zone_system(&mut world, &mesh, 100.0, 800.0, &mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_actors_track_zones_independently() {
        let mesh = zone_mesh();
        let mut world = World::new();
        let a = world.spawn((Position::new(Vec2::new(25.0, 25.0)), ZoneState::default()));
        let b = world.spawn((Position::new(Vec2::new(10.0, 10.0)), ZoneState::default()));
        let mut events = Vec::new();

        zone_system(&mut world, &mesh, 0.0, 800.0, &mut events);

        // Both actors entered: each fires on its own tracker.
        assert_eq!(events.len(), 2);
        let entities: Vec<_> = events.iter().map(|e| e.entity).collect();
        assert!(entities.contains(&a));
        assert!(entities.contains(&b));
    }
}
