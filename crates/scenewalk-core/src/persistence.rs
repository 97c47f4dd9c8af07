//! Save/Load functionality for persisting mid-scene actor state
//!
//! Uses bincode for compact binary serialization. Actor components are
//! serialized individually and respawned on load; the mesh itself is not
//! persisted — the host reloads it from the scene payload.

use hecs::World;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::components::*;

/// Version number for snapshot format (increment when format changes)
const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of one scene's actor state.
#[derive(Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Simulation clock, ms.
    pub sim_time_ms: f64,
    pub actors: Vec<ActorRecord>,
}

/// All possible components for one actor, serialized as optionals.
#[derive(Serialize, Deserialize, Default)]
pub struct ActorRecord {
    pub position: Option<Position>,
    pub movement: Option<Movement>,
    pub facing: Option<Facing>,
    pub wander: Option<Wander>,
    pub zone_state: Option<ZoneState>,
    pub player: bool,
}

/// Errors from snapshot save/load.
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Snapshot version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}

/// Write the actor state of a world to a writer.
pub fn save_scene<W: Write>(writer: W, world: &World, sim_time_ms: f64) -> Result<(), SaveError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        sim_time_ms,
        actors: collect_actors(world),
    };
    bincode::serialize_into(writer, &snapshot)?;
    Ok(())
}

/// Read a snapshot and respawn its actors into a fresh world.
pub fn load_scene<R: Read>(reader: R) -> Result<(World, f64), SaveError> {
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SNAPSHOT_VERSION,
            found: snapshot.version,
        });
    }

    let mut world = World::new();
    for record in snapshot.actors {
        spawn_record(&mut world, record);
    }
    Ok((world, snapshot.sim_time_ms))
}

fn collect_actors(world: &World) -> Vec<ActorRecord> {
    let mut actors = Vec::new();
    for (entity, pos) in world.query::<&Position>().iter() {
        actors.push(ActorRecord {
            position: Some(*pos),
            movement: world.get::<&Movement>(entity).ok().map(|m| *m),
            facing: world.get::<&Facing>(entity).ok().map(|f| *f),
            wander: world.get::<&Wander>(entity).ok().map(|w| (*w).clone()),
            zone_state: world.get::<&ZoneState>(entity).ok().map(|z| (*z).clone()),
            player: world.get::<&Player>(entity).is_ok(),
        });
    }
    actors
}

fn spawn_record(world: &mut World, record: ActorRecord) {
    let entity = world.spawn((record.position.unwrap_or_default(),));
    if let Some(movement) = record.movement {
        let _ = world.insert_one(entity, movement);
    }
    if let Some(facing) = record.facing {
        let _ = world.insert_one(entity, facing);
    }
    if let Some(wander) = record.wander {
        let _ = world.insert_one(entity, wander);
    }
    if let Some(zone_state) = record.zone_state {
        let _ = world.insert_one(entity, zone_state);
    }
    if record.player {
        let _ = world.insert_one(entity, Player);
    }
}
