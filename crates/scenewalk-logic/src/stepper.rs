//! Sub-stepped collision-aware movement.
//!
//! Algorithm: "clamp then sub-step"
//! 1. Degenerate movement (closer than [`ARRIVE_EPSILON`]) is a no-op
//! 2. Clamp total displacement to `min(max_step, distance(from, dest))`
//! 3. Subdivide so no single sub-step exceeds `max_substep` (prevents
//!    tunneling through colliders thinner than one full step)
//! 4. Advance sub-step by sub-step; the first unwalkable candidate halts
//!    motion completely — no sliding, no partial-axis resolution
//! 5. A fully blocked first sub-step returns `from` unchanged; callers treat
//!    "no progress" as "movement blocked" and cancel the destination

use crate::geometry::Vec2;
use crate::navmesh::NavMesh;
use crate::walkable::is_walkable;

/// Distances below this are treated as "already there".
pub const ARRIVE_EPSILON: f64 = 1e-6;

/// Move from `from` toward `dest` by at most `max_step`, stopping at the
/// last confirmed-walkable sub-step position.
pub fn step_towards(
    from: Vec2,
    dest: Vec2,
    max_step: f64,
    mesh: &NavMesh,
    max_substep: f64,
) -> Vec2 {
    let total = from.distance(&dest);
    if total < ARRIVE_EPSILON {
        return from;
    }

    let clamped = max_step.min(total);
    if clamped <= 0.0 {
        return from;
    }

    let substeps = if max_substep > 0.0 {
        (clamped / max_substep).ceil().max(1.0) as u32
    } else {
        1
    };
    let substep_len = clamped / f64::from(substeps);
    let dir = (dest - from).normalize();

    let mut confirmed = from;
    for i in 1..=substeps {
        let candidate = from + dir * (substep_len * f64::from(i));
        if !is_walkable(candidate, mesh) {
            break;
        }
        confirmed = candidate;
    }
    confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn rect(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(
            id,
            id,
            vec![
                Vec2::new(x0, y0),
                Vec2::new(x1, y0),
                Vec2::new(x1, y1),
                Vec2::new(x0, y1),
            ],
        )
    }

    fn open_mesh() -> NavMesh {
        NavMesh::empty()
    }

    #[test]
    fn test_noop_when_already_at_destination() {
        let from = Vec2::new(3.0, 4.0);
        let dest = Vec2::new(3.0, 4.0 + 1e-9);
        assert_eq!(step_towards(from, dest, 10.0, &open_mesh(), 4.0), from);
    }

    #[test]
    fn test_advances_clamped_distance_along_axis() {
        // dest 1000 away, max_step 10, sub-steps of ≤4: exactly 10 units of
        // progress along +x over three sub-steps.
        let result = step_towards(
            Vec2::ZERO,
            Vec2::new(1000.0, 0.0),
            10.0,
            &open_mesh(),
            4.0,
        );
        assert!((result.x - 10.0).abs() < 1e-9, "x={}", result.x);
        assert!(result.y.abs() < 1e-9);
    }

    #[test]
    fn test_never_overshoots_destination() {
        let dest = Vec2::new(3.0, 0.0);
        let result = step_towards(Vec2::ZERO, dest, 10.0, &open_mesh(), 4.0);
        assert!((result.x - 3.0).abs() < 1e-9);
        assert!(result.distance(&Vec2::ZERO) <= 3.0 + 1e-9);
    }

    #[test]
    fn test_halts_at_collider_without_sliding() {
        // Wall across the path: x in [10, 12].
        let mesh = NavMesh {
            colliders: vec![rect("wall", 10.0, -50.0, 12.0, 50.0)],
            ..NavMesh::empty()
        };
        let result = step_towards(Vec2::ZERO, Vec2::new(30.0, 0.0), 30.0, &mesh, 1.0);
        // Stops on the near side of the wall, never inside or past it.
        assert!(result.x < 10.0, "x={}", result.x);
        assert!(is_walkable(result, &mesh));
        // A blocked vector halts completely: no sideways drift.
        assert!(result.y.abs() < 1e-9);
    }

    #[test]
    fn test_substeps_prevent_tunneling() {
        // Thin wall (1 unit) inside a single 8-unit step. With sub-steps of
        // ≤0.5 the wall is detected; the result stays on the near side.
        let mesh = NavMesh {
            colliders: vec![rect("thin", 4.0, -10.0, 5.0, 10.0)],
            ..NavMesh::empty()
        };
        let result = step_towards(Vec2::ZERO, Vec2::new(8.0, 0.0), 8.0, &mesh, 0.5);
        assert!(result.x < 4.0, "tunneled: x={}", result.x);
        assert!(is_walkable(result, &mesh));
    }

    #[test]
    fn test_blocked_first_substep_returns_from() {
        let mesh = NavMesh {
            colliders: vec![rect("wall", 0.5, -10.0, 20.0, 10.0)],
            ..NavMesh::empty()
        };
        let from = Vec2::ZERO;
        let result = step_towards(from, Vec2::new(10.0, 0.0), 5.0, &mesh, 2.0);
        assert_eq!(result, from);
    }

    #[test]
    fn test_result_is_always_walkable_within_mesh() {
        let mesh = NavMesh {
            walkables: vec![rect("floor", 0.0, 0.0, 100.0, 100.0)],
            colliders: vec![rect("pit", 40.0, 40.0, 60.0, 60.0)],
            ..NavMesh::empty()
        };
        let from = Vec2::new(10.0, 50.0);
        for (dest, max_step) in [
            (Vec2::new(90.0, 50.0), 200.0),
            (Vec2::new(50.0, 50.0), 100.0),
            (Vec2::new(10.0, 200.0), 500.0),
        ] {
            let result = step_towards(from, dest, max_step, &mesh, 2.0);
            assert!(is_walkable(result, &mesh), "dest={dest:?} result={result:?}");
            assert!(result.distance(&from) <= max_step.min(from.distance(&dest)) + 1e-9);
        }
    }

    #[test]
    fn test_zero_max_step_is_noop() {
        let from = Vec2::new(1.0, 1.0);
        assert_eq!(
            step_towards(from, Vec2::new(10.0, 10.0), 0.0, &open_mesh(), 4.0),
            from
        );
    }
}
