//! Scene engine - main entry point for running one scene's simulation.
//!
//! Single-threaded and tick-driven: one `update` per rendered frame. All
//! geometry queries and position updates complete synchronously within the
//! tick; the mesh is immutable between [`SceneEngine::swap_mesh`] calls,
//! which the host makes only at scene boundaries, never mid-tick.

use hecs::World;
use rand::Rng;

use scenewalk_logic::transform::design_to_world;
use scenewalk_logic::{NavMesh, Vec2};

use crate::components::*;
use crate::systems::*;

/// Per-scene engine configuration.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Authored design-space width in pixels.
    pub design_width: f64,
    /// Authored design-space height in pixels.
    pub design_height: f64,
    /// Upper clamp on a single frame delta, seconds. Prevents one velocity
    /// spike after a stall (e.g. a backgrounded tab).
    pub max_frame_delta: f64,
    /// Zone re-fire cooldown, ms, shared across all zones per actor.
    pub zone_cooldown_ms: f64,
    /// Longest collision sub-step, world px.
    pub max_substep: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            design_width: 1920.0,
            design_height: 1080.0,
            max_frame_delta: 0.25,
            zone_cooldown_ms: 800.0,
            max_substep: 4.0,
        }
    }
}

/// Main scene simulation engine.
pub struct SceneEngine {
    /// ECS world containing all actors
    pub world: World,
    mesh: NavMesh,
    config: SceneConfig,
    sim_time_ms: f64,
    scene_changes: Vec<SceneChange>,
}

impl SceneEngine {
    /// Create an engine with no navigation data: everywhere walkable, no
    /// zones. The documented fallback for scenes authored before any mesh
    /// exists.
    pub fn new(config: SceneConfig) -> Self {
        Self::with_mesh(config, NavMesh::empty())
    }

    /// Create an engine over a world-space mesh.
    pub fn with_mesh(config: SceneConfig, mesh: NavMesh) -> Self {
        Self {
            world: World::new(),
            mesh,
            config,
            sim_time_ms: 0.0,
            scene_changes: Vec::new(),
        }
    }

    /// Replace the active mesh. Authoring edits produce a new mesh that is
    /// swapped in here, atomically, at a scene boundary.
    pub fn swap_mesh(&mut self, mesh: NavMesh) {
        log::debug!(
            "mesh swap: {} walkables, {} colliders, {} zones",
            mesh.walkables.len(),
            mesh.colliders.len(),
            mesh.zones.len()
        );
        self.mesh = mesh;
    }

    pub fn mesh(&self) -> &NavMesh {
        &self.mesh
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Monotonic simulation clock, ms since engine creation.
    pub fn sim_time_ms(&self) -> f64 {
        self.sim_time_ms
    }

    // ── Actor lifecycle ─────────────────────────────────────────────────

    /// Spawn the player avatar at a design-space point.
    pub fn spawn_player(&mut self, design_pos: Vec2) -> hecs::Entity {
        let world_pos = self.to_world_pos(design_pos);
        self.world.spawn((
            Player,
            Position::new(world_pos),
            Facing::default(),
            ZoneState::default(),
        ))
    }

    /// Spawn a wandering NPC anchored at a design-space point.
    pub fn spawn_wanderer(&mut self, design_pos: Vec2, params: WanderParams) -> hecs::Entity {
        let anchor = self.to_world_pos(design_pos);
        self.world.spawn((
            Position::new(anchor),
            Facing::default(),
            Wander::new(anchor, params),
        ))
    }

    /// Remove an actor and all its components.
    pub fn despawn(&mut self, entity: hecs::Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    // ── Commands & queries ──────────────────────────────────────────────

    /// Send an actor walking toward a world-space destination.
    ///
    /// Handing over an unwalkable destination is a contract violation; it is
    /// only detected reactively, when the first sub-step fails and the
    /// destination is cancelled.
    pub fn command_move(&mut self, entity: hecs::Entity, dest: Vec2, speed: f64) {
        let _ = self.world.insert_one(entity, Movement::new(dest, speed));
    }

    /// Clear an actor's active destination, if any.
    pub fn cancel_move(&mut self, entity: hecs::Entity) {
        let _ = self.world.remove_one::<Movement>(entity);
    }

    /// True while the actor has an active destination. Downstream animation
    /// uses this to pick walking vs. standing frames.
    pub fn is_moving(&self, entity: hecs::Entity) -> bool {
        self.world.get::<&Movement>(entity).is_ok()
    }

    /// Current world-space position, read once per frame by rendering.
    pub fn position(&self, entity: hecs::Entity) -> Option<Vec2> {
        self.world.get::<&Position>(entity).map(|p| p.world).ok()
    }

    /// Current horizontal facing for sprite flipping.
    pub fn facing(&self, entity: hecs::Entity) -> Option<FacingDir> {
        self.world.get::<&Facing>(entity).map(|f| f.dir).ok()
    }

    /// Count all actors with a position.
    pub fn actor_count(&self) -> usize {
        self.world.query::<&Position>().iter().count()
    }

    // ── Tick ────────────────────────────────────────────────────────────

    /// Advance the simulation by one frame.
    pub fn update(&mut self, delta_seconds: f64) {
        self.update_with_rng(delta_seconds, &mut rand::thread_rng());
    }

    /// [`SceneEngine::update`] with an explicit RNG, for deterministic runs.
    pub fn update_with_rng(&mut self, delta_seconds: f64, rng: &mut impl Rng) {
        // Clock is sampled once per tick and clamped before scaling any
        // movement; anomalous deltas never become unbounded displacement.
        let dt = delta_seconds.clamp(0.0, self.config.max_frame_delta);
        self.sim_time_ms += dt * 1000.0;
        let now_ms = self.sim_time_ms;

        movement_system(&mut self.world, &self.mesh, dt, self.config.max_substep);
        wandering_system(&mut self.world, &self.mesh, now_ms, rng);
        zone_system(
            &mut self.world,
            &self.mesh,
            now_ms,
            self.config.zone_cooldown_ms,
            &mut self.scene_changes,
        );
    }

    /// Take all scene-change events fired since the last drain.
    pub fn drain_scene_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.scene_changes)
    }

    fn to_world_pos(&self, design_pos: Vec2) -> Vec2 {
        design_to_world(design_pos, self.config.design_width, self.config.design_height)
    }
}

impl Default for SceneEngine {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
