//! Components attached to scene actors.

use serde::{Deserialize, Serialize};

use scenewalk_logic::{Vec2, ZoneTracker};

/// World-space position, mutated once per simulation tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub world: Vec2,
}

impl Position {
    pub fn new(world: Vec2) -> Self {
        Self { world }
    }
}

/// Movement component - present only while the actor is moving.
///
/// Its presence is the "is moving" boolean downstream animation logic uses
/// to pick walking vs. standing frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Movement {
    /// World-space destination.
    pub destination: Vec2,
    /// Speed in world pixels per second.
    pub speed: f64,
}

impl Movement {
    pub fn new(destination: Vec2, speed: f64) -> Self {
        Self { destination, speed }
    }
}

/// Horizontal facing, for sprite flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDir {
    Left,
    Right,
}

/// Updated only when per-tick horizontal displacement exceeds a deadband,
/// so near-vertical motion does not flicker the sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Facing {
    pub dir: FacingDir,
}

impl Default for Facing {
    fn default() -> Self {
        Self {
            dir: FacingDir::Right,
        }
    }
}

/// Marker for the player-controlled actor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// Per-actor zone debounce state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneState {
    pub tracker: ZoneTracker,
}

/// Tuning knobs for a wandering NPC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WanderParams {
    /// Minimum sampled hop distance from the anchor, world px.
    pub min_step: f64,
    /// Maximum sampled radius around the anchor, world px.
    pub max_radius: f64,
    /// Destination sampling attempts before giving up this cycle.
    pub max_tries: u32,
    /// Arrival threshold, world px.
    pub stop_distance: f64,
    /// Walking speed, world px per second.
    pub speed: f64,
    /// Base pause between walks, ms.
    pub base_pause_ms: f64,
    /// Uniform jitter added to the base pause, ms.
    pub pause_jitter_ms: f64,
    /// Fixed pause after a failed sampling cycle, ms.
    pub retry_backoff_ms: f64,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self {
            min_step: 20.0,
            max_radius: 120.0,
            max_tries: 8,
            stop_distance: 2.0,
            speed: 60.0,
            base_pause_ms: 1500.0,
            pause_jitter_ms: 2500.0,
            retry_backoff_ms: 500.0,
        }
    }
}

/// Wander state machine phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum WanderState {
    /// Holding still until the deadline passes.
    Paused { until_ms: f64 },
    /// Walking toward a sampled destination.
    Walking { dest: Vec2 },
}

/// Autonomous wandering behavior for an NPC.
///
/// Destinations are sampled around the fixed `anchor` (the spawn point, not
/// the current position), so wandering never drifts permanently away from
/// its origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wander {
    pub anchor: Vec2,
    pub state: WanderState,
    pub params: WanderParams,
}

impl Wander {
    /// New wanderer, eligible to seek a destination on the first tick.
    pub fn new(anchor: Vec2, params: WanderParams) -> Self {
        Self {
            anchor,
            state: WanderState::Paused { until_ms: 0.0 },
            params,
        }
    }
}
