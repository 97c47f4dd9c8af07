//! Pure navigation and collision logic for Scenewalk.
//!
//! This crate contains all geometry and navigation logic that is independent
//! of any ECS, engine, or runtime. Functions take plain data and return
//! results, making them unit-testable and portable across the scene engine,
//! headless validation tools, and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`geometry`] | `Vec2` math, polygons, degeneracy rules |
//! | [`transform`] | Design-space ↔ world-space frame conversion, viewport unprojection |
//! | [`walkable`] | Even-odd point-in-polygon containment, walkable/collider oracle |
//! | [`stepper`] | Sub-stepped collision-aware movement toward a destination |
//! | [`zones`] | Scene-change trigger zones with debounced enter detection |
//! | [`navmesh`] | Per-scene navigation mesh container |

pub mod geometry;
pub mod navmesh;
pub mod stepper;
pub mod transform;
pub mod walkable;
pub mod zones;

pub use geometry::{Polygon, Vec2};
pub use navmesh::NavMesh;
pub use stepper::{step_towards, ARRIVE_EPSILON};
pub use walkable::{is_walkable, point_in_polygon};
pub use zones::{Zone, ZoneFire, ZoneTracker};
