//! Scenewalk Core - 2D Scene Navigation Engine
//!
//! A tick-driven simulation of on-screen actors constrained by authored
//! polygon meshes: walkable regions gate where actors may move, trigger
//! zones fire scene-change events on entry, and idle NPCs wander around
//! their spawn anchors.
//!
//! # Architecture
//!
//! Actors live in an Entity Component System (ECS) world via `hecs`:
//! - **Entities**: the player avatar and autonomous NPCs
//! - **Components**: pure data (Position, Movement, Wander, ZoneState, ...)
//! - **Systems**: per-tick logic that queries and updates components
//!
//! All geometry queries go through `scenewalk-logic`; this crate owns the
//! tick loop, actor state, and the immutable per-scene mesh.
//!
//! # Example
//!
//! ```rust,no_run
//! use scenewalk_core::prelude::*;
//! use scenewalk_logic::Vec2;
//!
//! let mut engine = SceneEngine::new(SceneConfig::default());
//! let _player = engine.spawn_player(Vec2::new(400.0, 300.0));
//!
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//!     for change in engine.drain_scene_changes() {
//!         // hand off to scene-transition logic
//!         let _ = (change.target_scene, change.zone_id);
//!     }
//! }
//! ```

pub mod components;
pub mod engine;
pub mod loader;
pub mod persistence;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{SceneConfig, SceneEngine};
    pub use crate::systems::SceneChange;
}
