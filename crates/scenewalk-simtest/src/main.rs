//! Scenewalk Headless Validation Harness
//!
//! Validates navigation logic and the scene engine without a renderer.
//! Runs entirely in-process — no windowing, no assets, no host engine.
//!
//! Usage:
//!   cargo run -p scenewalk-simtest
//!   cargo run -p scenewalk-simtest -- --verbose

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use scenewalk_core::loader::load_mesh;
use scenewalk_core::prelude::*;
use scenewalk_logic::transform::{contain_zoom, design_to_world, ndc_to_world, world_to_design};
use scenewalk_logic::{is_walkable, step_towards, NavMesh, Polygon, Vec2, Zone, ZoneTracker};

// ── Scene fixture (same JSON shape the authoring tool exports) ──────────
const SCENE_JSON: &str = r#"{
    "version": 1,
    "walkables": [
        {
            "id": "floor",
            "name": "Floor",
            "points": [
                {"x": 0.0, "y": 0.0},
                {"x": 400.0, "y": 0.0},
                {"x": 400.0, "y": 300.0},
                {"x": 0.0, "y": 300.0}
            ]
        }
    ],
    "colliders": [
        {
            "id": "crate",
            "name": "Crate",
            "points": [
                {"x": 180.0, "y": 120.0},
                {"x": 220.0, "y": 120.0},
                {"x": 220.0, "y": 180.0},
                {"x": 180.0, "y": 180.0}
            ]
        }
    ],
    "collisionPoints": [],
    "sceneChangeZones": [
        {
            "id": "exit",
            "name": "Exit",
            "points": [
                {"x": 0.0, "y": 0.0},
                {"x": 50.0, "y": 0.0},
                {"x": 50.0, "y": 50.0},
                {"x": 0.0, "y": 50.0}
            ],
            "targetSceneId": "X"
        }
    ]
}"#;

// Raw shape check, independent of the loader's own types.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct RawScene {
    version: u32,
    walkables: Vec<RawPolygon>,
    colliders: Vec<RawPolygon>,
    scene_change_zones: Vec<RawZone>,
}

#[derive(Debug, Deserialize)]
struct RawPolygon {
    id: String,
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct RawZone {
    id: String,
    points: Vec<RawPoint>,
    target_scene_id: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawPoint {
    x: f64,
    y: f64,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Scenewalk Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Coordinate transforms
    results.extend(validate_transforms(verbose));

    // 2. Containment & walkability
    results.extend(validate_walkability(verbose));

    // 3. Sub-stepped collision movement
    results.extend(validate_stepper(verbose));

    // 4. Zone debounce timeline
    results.extend(validate_zone_debounce(verbose));

    // 5. Payload loading
    results.extend(validate_payload(verbose));

    // 6. Engine soak: wandering NPCs on a real scene
    results.extend(validate_engine_soak(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Coordinate transforms ────────────────────────────────────────────

fn validate_transforms(_verbose: bool) -> Vec<TestResult> {
    println!("--- Coordinate Transforms ---");
    let mut results = Vec::new();

    let (dw, dh) = (1920.0, 1080.0);

    let samples = [
        Vec2::new(0.0, 0.0),
        Vec2::new(960.0, 540.0),
        Vec2::new(1920.0, 1080.0),
        Vec2::new(13.7, 1019.2),
    ];
    let max_err = samples
        .iter()
        .map(|&p| {
            let back = world_to_design(design_to_world(p, dw, dh), dw, dh);
            (back.x - p.x).abs().max((back.y - p.y).abs())
        })
        .fold(0.0_f64, f64::max);
    results.push(TestResult {
        name: "transform_round_trip".into(),
        passed: max_err < 1e-9,
        detail: format!("max round-trip error {max_err:.2e}"),
    });

    let center = design_to_world(Vec2::new(960.0, 540.0), dw, dh);
    results.push(TestResult {
        name: "transform_center_is_origin".into(),
        passed: center == Vec2::ZERO,
        detail: format!("design center maps to ({}, {})", center.x, center.y),
    });

    let zoom = contain_zoom(960.0, 540.0, dw, dh);
    let corner = ndc_to_world(Vec2::new(1.0, 1.0), 960.0, 540.0, dw, dh);
    results.push(TestResult {
        name: "transform_contain_unproject".into(),
        passed: (zoom - 0.5).abs() < 1e-12 && corner == Vec2::new(960.0, 540.0),
        detail: format!("zoom={zoom}, NDC corner → ({}, {})", corner.x, corner.y),
    });

    results
}

// ── 2. Containment & walkability ────────────────────────────────────────

fn validate_walkability(_verbose: bool) -> Vec<TestResult> {
    println!("--- Walkability ---");
    let mut results = Vec::new();

    let square = Polygon::new(
        "w",
        "w",
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ],
    );
    let mesh = NavMesh {
        walkables: vec![square],
        ..NavMesh::empty()
    };

    results.push(TestResult {
        name: "walkable_square_interior".into(),
        passed: is_walkable(Vec2::new(50.0, 50.0), &mesh),
        detail: "(50,50) inside [(0,0)..(100,100)]".into(),
    });
    results.push(TestResult {
        name: "walkable_square_exterior".into(),
        passed: !is_walkable(Vec2::new(150.0, 50.0), &mesh),
        detail: "(150,50) outside".into(),
    });

    results.push(TestResult {
        name: "walkable_empty_mesh_fallback".into(),
        passed: is_walkable(Vec2::new(1e6, -1e6), &NavMesh::empty()),
        detail: "no walkables ⇒ everywhere walkable".into(),
    });

    results
}

// ── 3. Sub-stepped collision movement ───────────────────────────────────

fn validate_stepper(_verbose: bool) -> Vec<TestResult> {
    println!("--- Collision Stepper ---");
    let mut results = Vec::new();

    // Long straight run: advances exactly max_step along +x.
    let result = step_towards(Vec2::ZERO, Vec2::new(1000.0, 0.0), 10.0, &NavMesh::empty(), 4.0);
    results.push(TestResult {
        name: "stepper_clamps_to_max_step".into(),
        passed: (result.x - 10.0).abs() < 1e-9 && result.y.abs() < 1e-9,
        detail: format!("advanced to ({:.3}, {:.3})", result.x, result.y),
    });

    // Degenerate move is a no-op.
    let from = Vec2::new(3.0, 4.0);
    let noop = step_towards(from, Vec2::new(3.0, 4.0 + 1e-9), 10.0, &NavMesh::empty(), 4.0);
    results.push(TestResult {
        name: "stepper_noop_below_epsilon".into(),
        passed: noop == from,
        detail: "sub-epsilon distance returns from unchanged".into(),
    });

    // Thin wall cannot be tunneled through.
    let mesh = NavMesh {
        colliders: vec![Polygon::new(
            "thin",
            "thin",
            vec![
                Vec2::new(4.0, -10.0),
                Vec2::new(5.0, -10.0),
                Vec2::new(5.0, 10.0),
                Vec2::new(4.0, 10.0),
            ],
        )],
        ..NavMesh::empty()
    };
    let stopped = step_towards(Vec2::ZERO, Vec2::new(8.0, 0.0), 8.0, &mesh, 0.5);
    results.push(TestResult {
        name: "stepper_no_tunneling".into(),
        passed: stopped.x < 4.0 && is_walkable(stopped, &mesh),
        detail: format!("halted at x={:.3} before wall at x=4", stopped.x),
    });

    results
}

// ── 4. Zone debounce ────────────────────────────────────────────────────

fn validate_zone_debounce(_verbose: bool) -> Vec<TestResult> {
    println!("--- Zone Debounce ---");
    let mut results = Vec::new();

    let zones = vec![Zone {
        id: "door".into(),
        name: "door".into(),
        boundary: Polygon::new(
            "door",
            "door",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(50.0, 0.0),
                Vec2::new(50.0, 50.0),
                Vec2::new(0.0, 50.0),
            ],
        ),
        target_scene: "X".into(),
    }];

    let inside = Vec2::new(25.0, 25.0);
    let mut tracker = ZoneTracker::new();

    // Two ticks 100ms apart fire once; a third tick 1000ms later, still
    // inside without having left, does not re-fire.
    let t0 = tracker.tick(inside, &zones, 0.0, 800.0);
    let t1 = tracker.tick(inside, &zones, 100.0, 800.0);
    let t2 = tracker.tick(inside, &zones, 1100.0, 800.0);
    results.push(TestResult {
        name: "zone_fires_once_while_inside".into(),
        passed: t0.is_some() && t1.is_none() && t2.is_none(),
        detail: format!(
            "tick0 fired={}, tick1 fired={}, tick2 fired={}",
            t0.is_some(),
            t1.is_some(),
            t2.is_some()
        ),
    });

    // Exit then fresh entry after cooldown re-fires.
    let outside = Vec2::new(500.0, 500.0);
    let _ = tracker.tick(outside, &zones, 1200.0, 800.0);
    let refire = tracker.tick(inside, &zones, 2000.0, 800.0);
    results.push(TestResult {
        name: "zone_refires_after_exit".into(),
        passed: refire.is_some(),
        detail: "fresh entry after cooldown fires again".into(),
    });

    results
}

// ── 5. Payload loading ──────────────────────────────────────────────────

fn validate_payload(_verbose: bool) -> Vec<TestResult> {
    println!("--- Mesh Payload ---");
    let mut results = Vec::new();

    // Raw parse first: the authored shape must hold before the loader runs.
    let raw: RawScene = match serde_json::from_str(SCENE_JSON) {
        Ok(r) => r,
        Err(e) => {
            results.push(TestResult {
                name: "payload_raw_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };
    let all_polys_valid = raw
        .walkables
        .iter()
        .chain(raw.colliders.iter())
        .all(|p| p.points.len() >= 3 && !p.id.is_empty());
    results.push(TestResult {
        name: "payload_raw_shape".into(),
        passed: raw.version == 1 && all_polys_valid,
        detail: format!(
            "version {}, {} walkables, {} colliders, {} zones",
            raw.version,
            raw.walkables.len(),
            raw.colliders.len(),
            raw.scene_change_zones.len()
        ),
    });

    let mesh = match load_mesh(SCENE_JSON, 400.0, 300.0) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "payload_parse".into(),
                passed: false,
                detail: format!("load error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "payload_layers_loaded".into(),
        passed: mesh.walkables.len() == 1 && mesh.colliders.len() == 1 && mesh.zones.len() == 1,
        detail: format!(
            "{} walkables, {} colliders, {} zones",
            mesh.walkables.len(),
            mesh.colliders.len(),
            mesh.zones.len()
        ),
    });

    // Design-space probe points, converted the same way the mesh was.
    let probe = |p: Vec2| is_walkable(design_to_world(p, 400.0, 300.0), &mesh);
    results.push(TestResult {
        name: "payload_world_space_queries".into(),
        passed: probe(Vec2::new(100.0, 100.0)) && !probe(Vec2::new(200.0, 150.0)),
        detail: "floor walkable, crate interior not".into(),
    });

    results
}

// ── 6. Engine soak ──────────────────────────────────────────────────────

fn validate_engine_soak(verbose: bool) -> Vec<TestResult> {
    println!("--- Engine Soak ---");
    let mut results = Vec::new();

    let mesh = match load_mesh(SCENE_JSON, 400.0, 300.0) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "soak_setup".into(),
                passed: false,
                detail: format!("load error: {}", e),
            });
            return results;
        }
    };

    let config = SceneConfig {
        design_width: 400.0,
        design_height: 300.0,
        ..SceneConfig::default()
    };
    let mut engine = SceneEngine::with_mesh(config, mesh);
    let mut rng = StdRng::seed_from_u64(99);

    let player = engine.spawn_player(Vec2::new(100.0, 50.0));
    let npc_a = engine.spawn_wanderer(Vec2::new(100.0, 100.0), WanderParams::default());
    let npc_b = engine.spawn_wanderer(Vec2::new(300.0, 100.0), WanderParams::default());

    // Send the player into the exit zone.
    let dest = design_to_world(Vec2::new(25.0, 25.0), 400.0, 300.0);
    engine.command_move(player, dest, 150.0);

    let mut off_mesh = 0usize;
    let mut fired = Vec::new();
    for _ in 0..3600 {
        engine.update_with_rng(1.0 / 60.0, &mut rng);
        fired.extend(engine.drain_scene_changes());
        for entity in [player, npc_a, npc_b] {
            if let Some(pos) = engine.position(entity) {
                if !is_walkable(pos, engine.mesh()) {
                    off_mesh += 1;
                }
            }
        }
    }

    results.push(TestResult {
        name: "soak_actors_stay_on_mesh".into(),
        passed: off_mesh == 0,
        detail: format!("{off_mesh} off-mesh samples over 3600 ticks"),
    });

    results.push(TestResult {
        name: "soak_player_reaches_exit_zone".into(),
        passed: fired.iter().any(|f: &SceneChange| f.zone_id == "exit"),
        detail: format!("{} scene-change events", fired.len()),
    });

    results.push(TestResult {
        name: "soak_zone_fires_exactly_once".into(),
        passed: fired.iter().filter(|f| f.entity == player).count() == 1,
        detail: "player stayed inside; no re-fire without exit".into(),
    });

    if verbose {
        for f in &fired {
            println!("  scene change: {} -> {}", f.zone_id, f.target_scene);
        }
    }

    results
}
