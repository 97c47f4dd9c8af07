//! Per-scene navigation mesh.
//!
//! A mesh is loaded once per scene activation, converted once from design
//! space into world space, and stays immutable for the rest of gameplay.
//! Authoring edits produce a new mesh that the host swaps in atomically at a
//! scene boundary, never mid-tick.

use serde::{Deserialize, Serialize};

use crate::geometry::{Polygon, Vec2};
use crate::transform::design_to_world;
use crate::zones::Zone;

/// The walkable region is (union of `walkables`) minus (union of `colliders`).
///
/// An empty `walkables` set is a documented fallback meaning "everywhere
/// walkable" — scenes authored before any mesh exists must not trap actors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavMesh {
    pub walkables: Vec<Polygon>,
    pub colliders: Vec<Polygon>,
    pub zones: Vec<Zone>,
    pub marker_points: Vec<Vec2>,
}

impl NavMesh {
    /// Mesh with no geometry at all: everywhere walkable, no zones.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert every authored design-space point into world space.
    ///
    /// Applied exactly once at load; queries never convert.
    pub fn to_world(&self, design_w: f64, design_h: f64) -> NavMesh {
        let conv = |p: &Vec2| design_to_world(*p, design_w, design_h);
        let conv_poly = |poly: &Polygon| Polygon {
            id: poly.id.clone(),
            name: poly.name.clone(),
            points: poly.points.iter().map(conv).collect(),
        };

        NavMesh {
            walkables: self.walkables.iter().map(conv_poly).collect(),
            colliders: self.colliders.iter().map(conv_poly).collect(),
            zones: self
                .zones
                .iter()
                .map(|z| Zone {
                    id: z.id.clone(),
                    name: z.name.clone(),
                    boundary: conv_poly(&z.boundary),
                    target_scene: z.target_scene.clone(),
                })
                .collect(),
            marker_points: self.marker_points.iter().map(conv).collect(),
        }
    }
}
