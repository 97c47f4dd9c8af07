//! Point-containment queries over the navigation mesh.
//!
//! This is the single containment predicate the whole engine shares — the
//! player avatar, wandering NPCs, and zone triggers all go through it, so
//! there is exactly one copy of the ray-cast to drift out of sync with.
//!
//! Cost is O(vertices) per call with no spatial index; this is invoked once
//! per sub-step of every moving entity per tick. Fine at authored-scene
//! polygon counts, a known scaling limit beyond that.

use crate::geometry::{Polygon, Vec2};
use crate::navmesh::NavMesh;

/// Guard against near-horizontal edge divisions. Numerical stability only,
/// not geometric precision.
const EDGE_EPSILON: f64 = 1e-12;

/// Even-odd ray-cast containment test.
///
/// Degenerate polygons (fewer than three points) never contain anything.
pub fn point_in_polygon(p: Vec2, poly: &Polygon) -> bool {
    if poly.is_degenerate() {
        return false;
    }

    let pts = &poly.points;
    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[j];
        if (a.y > p.y) != (b.y > p.y) {
            let dy = b.y - a.y;
            if dy.abs() > EDGE_EPSILON {
                let x_cross = (b.x - a.x) * (p.y - a.y) / dy + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        j = i;
    }
    inside
}

/// True iff `p` lies inside at least one walkable polygon and inside no
/// collider polygon.
///
/// A mesh with an empty walkable set treats the whole world as walkable
/// (colliders still apply) — the fallback for scenes with no navigation data.
pub fn is_walkable(p: Vec2, mesh: &NavMesh) -> bool {
    let inside_walkable =
        mesh.walkables.is_empty() || mesh.walkables.iter().any(|poly| point_in_polygon(p, poly));
    if !inside_walkable {
        return false;
    }
    !mesh.colliders.iter().any(|poly| point_in_polygon(p, poly))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: &str, x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(
            id,
            id,
            vec![
                Vec2::new(x, y),
                Vec2::new(x + size, y),
                Vec2::new(x + size, y + size),
                Vec2::new(x, y + size),
            ],
        )
    }

    #[test]
    fn test_point_in_square() {
        let poly = square("w", 0.0, 0.0, 100.0);
        assert!(point_in_polygon(Vec2::new(50.0, 50.0), &poly));
        assert!(!point_in_polygon(Vec2::new(150.0, 50.0), &poly));
        assert!(!point_in_polygon(Vec2::new(-1.0, 50.0), &poly));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // L-shape: the notch at the top-right is outside.
        let poly = Polygon::new(
            "l",
            "l",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 5.0),
                Vec2::new(5.0, 5.0),
                Vec2::new(5.0, 10.0),
                Vec2::new(0.0, 10.0),
            ],
        );
        assert!(point_in_polygon(Vec2::new(2.0, 8.0), &poly));
        assert!(point_in_polygon(Vec2::new(8.0, 2.0), &poly));
        assert!(!point_in_polygon(Vec2::new(8.0, 8.0), &poly));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let mut poly = square("w", 0.0, 0.0, 100.0);
        poly.points.truncate(2);
        assert!(!point_in_polygon(Vec2::new(50.0, 50.0), &poly));
    }

    #[test]
    fn test_horizontal_edges_are_stable() {
        // Axis-aligned rectangle has two fully horizontal edges; probing at
        // their exact height must not blow up or misclassify.
        let poly = square("w", 0.0, 0.0, 10.0);
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &poly));
        assert!(!point_in_polygon(Vec2::new(20.0, 0.0), &poly));
    }

    #[test]
    fn test_walkable_square_scenario() {
        let mesh = NavMesh {
            walkables: vec![square("w", 0.0, 0.0, 100.0)],
            ..NavMesh::empty()
        };
        assert!(is_walkable(Vec2::new(50.0, 50.0), &mesh));
        assert!(!is_walkable(Vec2::new(150.0, 50.0), &mesh));
    }

    #[test]
    fn test_collider_overrides_walkable() {
        let mesh = NavMesh {
            walkables: vec![square("w", 0.0, 0.0, 100.0)],
            colliders: vec![square("c", 40.0, 40.0, 20.0)],
            ..NavMesh::empty()
        };
        assert!(is_walkable(Vec2::new(10.0, 10.0), &mesh));
        assert!(!is_walkable(Vec2::new(50.0, 50.0), &mesh));
    }

    #[test]
    fn test_empty_walkables_means_everywhere_walkable() {
        let mesh = NavMesh::empty();
        assert!(is_walkable(Vec2::new(1e6, -1e6), &mesh));

        // Colliders still carve holes out of the fallback.
        let mesh = NavMesh {
            colliders: vec![square("c", 0.0, 0.0, 10.0)],
            ..NavMesh::empty()
        };
        assert!(!is_walkable(Vec2::new(5.0, 5.0), &mesh));
        assert!(is_walkable(Vec2::new(50.0, 50.0), &mesh));
    }

    #[test]
    fn test_degenerate_walkable_excluded_not_error() {
        let mut broken = square("w", 0.0, 0.0, 100.0);
        broken.points.truncate(2);
        let mesh = NavMesh {
            walkables: vec![broken, square("w2", 200.0, 0.0, 100.0)],
            ..NavMesh::empty()
        };
        // The broken polygon contributes nothing; the valid one still works.
        assert!(!is_walkable(Vec2::new(50.0, 50.0), &mesh));
        assert!(is_walkable(Vec2::new(250.0, 50.0), &mesh));
    }
}
