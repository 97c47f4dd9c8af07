//! Coordinate frame conversion.
//!
//! Two canonical frames exist:
//! - **design space**: the fixed-size authored frame, top-left origin, Y down
//! - **world space**: the runtime frame, center origin, Y up
//!
//! Conversion happens once at scene load, not per query, so there is no
//! accumulated drift. Screen/NDC handling is a viewport concern; only the
//! final unprojection into world space lives here.

use crate::geometry::Vec2;

/// Convert an authored design-space point into world space.
///
/// Flips the origin from top-left to center and inverts Y.
pub fn design_to_world(p: Vec2, design_w: f64, design_h: f64) -> Vec2 {
    Vec2::new(p.x - design_w / 2.0, design_h / 2.0 - p.y)
}

/// Exact inverse of [`design_to_world`].
pub fn world_to_design(p: Vec2, design_w: f64, design_h: f64) -> Vec2 {
    Vec2::new(p.x + design_w / 2.0, design_h / 2.0 - p.y)
}

/// "Contain" zoom factor: the largest uniform scale at which the full design
/// frame fits inside the viewport.
pub fn contain_zoom(viewport_w: f64, viewport_h: f64, design_w: f64, design_h: f64) -> f64 {
    (viewport_w / design_w).min(viewport_h / design_h)
}

/// Unproject a normalized-device-coordinate point (`[-1, 1]` on both axes)
/// into world space through the inverse of an orthographic projection whose
/// frustum covers the viewport scaled by the contain zoom.
pub fn ndc_to_world(
    ndc: Vec2,
    viewport_w: f64,
    viewport_h: f64,
    design_w: f64,
    design_h: f64,
) -> Vec2 {
    let zoom = contain_zoom(viewport_w, viewport_h, design_w, design_h);
    let half_w = viewport_w / (2.0 * zoom);
    let half_h = viewport_h / (2.0 * zoom);
    Vec2::new(ndc.x * half_w, ndc.y * half_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESIGN_W: f64 = 1920.0;
    const DESIGN_H: f64 = 1080.0;

    #[test]
    fn test_design_to_world_known_points() {
        // Top-left corner of the design frame maps to the world's upper-left.
        let tl = design_to_world(Vec2::ZERO, DESIGN_W, DESIGN_H);
        assert_eq!(tl, Vec2::new(-960.0, 540.0));

        // Design center maps to the world origin.
        let center = design_to_world(Vec2::new(960.0, 540.0), DESIGN_W, DESIGN_H);
        assert_eq!(center, Vec2::ZERO);
    }

    #[test]
    fn test_round_trip_identity() {
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(123.4, 567.8),
            Vec2::new(1920.0, 1080.0),
            Vec2::new(-50.0, 2000.0),
        ];
        for p in samples {
            let back = world_to_design(design_to_world(p, DESIGN_W, DESIGN_H), DESIGN_W, DESIGN_H);
            assert!((back.x - p.x).abs() < 1e-9, "x round trip for {p:?}");
            assert!((back.y - p.y).abs() < 1e-9, "y round trip for {p:?}");
        }
    }

    #[test]
    fn test_contain_zoom_picks_limiting_axis() {
        // Wide viewport: height is limiting.
        let z = contain_zoom(3840.0, 1080.0, DESIGN_W, DESIGN_H);
        assert!((z - 1.0).abs() < 1e-12);

        // Half-size viewport in both axes.
        let z = contain_zoom(960.0, 540.0, DESIGN_W, DESIGN_H);
        assert!((z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ndc_unprojection() {
        // Viewport exactly matching the design frame: NDC corners land on the
        // world-space design corners.
        let corner = ndc_to_world(Vec2::new(1.0, 1.0), DESIGN_W, DESIGN_H, DESIGN_W, DESIGN_H);
        assert_eq!(corner, Vec2::new(960.0, 540.0));

        let origin = ndc_to_world(Vec2::ZERO, DESIGN_W, DESIGN_H, DESIGN_W, DESIGN_H);
        assert_eq!(origin, Vec2::ZERO);

        // Doubling the viewport does not change what the contain zoom shows.
        let corner2 = ndc_to_world(
            Vec2::new(1.0, 1.0),
            2.0 * DESIGN_W,
            2.0 * DESIGN_H,
            DESIGN_W,
            DESIGN_H,
        );
        assert_eq!(corner2, corner);
    }
}
