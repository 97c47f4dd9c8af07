//! Navigation mesh loading from the authored JSON payload.
//!
//! The authoring tool exports a versioned camelCase payload per scene:
//! `version`, `walkables[]`, `colliders[]`, `collisionPoints[]`,
//! `sceneChangeZones[]`. Points arrive in design space; the one design→world
//! conversion happens here, at load, and never again per query.

use serde::{Deserialize, Serialize};

use scenewalk_logic::{NavMesh, Polygon, Vec2, Zone};

/// Payload format version this build understands (increment when the
/// authoring format changes).
pub const MESH_FORMAT_VERSION: u32 = 1;

/// A design-space point as authored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointPayload {
    pub x: f64,
    pub y: f64,
}

/// An authored polygon with a stable id and name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonPayload {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<PointPayload>,
}

/// An authored scene-change zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePayload {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<PointPayload>,
    pub target_scene_id: String,
}

/// The versioned per-scene mesh payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshPayload {
    pub version: u32,
    #[serde(default)]
    pub walkables: Vec<PolygonPayload>,
    #[serde(default)]
    pub colliders: Vec<PolygonPayload>,
    #[serde(default)]
    pub collision_points: Vec<PointPayload>,
    #[serde(default)]
    pub scene_change_zones: Vec<ZonePayload>,
}

/// Errors from mesh loading. Malformed *geometry* is not an error — polygons
/// with too few points load fine and are skipped at query time — but an
/// unreadable or wrong-version payload is.
#[derive(Debug)]
pub enum MeshError {
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<serde_json::Error> for MeshError {
    fn from(e: serde_json::Error) -> Self {
        MeshError::Json(e)
    }
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::Json(e) => write!(f, "Mesh payload parse error: {}", e),
            MeshError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Mesh payload version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// Parse a payload and convert it into a world-space [`NavMesh`] for the
/// given design dimensions.
pub fn load_mesh(json: &str, design_w: f64, design_h: f64) -> Result<NavMesh, MeshError> {
    let payload: MeshPayload = serde_json::from_str(json)?;
    if payload.version != MESH_FORMAT_VERSION {
        return Err(MeshError::VersionMismatch {
            expected: MESH_FORMAT_VERSION,
            found: payload.version,
        });
    }
    log::debug!(
        "mesh loaded: {} walkables, {} colliders, {} zones, {} markers",
        payload.walkables.len(),
        payload.colliders.len(),
        payload.scene_change_zones.len(),
        payload.collision_points.len()
    );
    Ok(mesh_from_payload(&payload).to_world(design_w, design_h))
}

/// Build a design-space mesh from a parsed payload.
pub fn mesh_from_payload(payload: &MeshPayload) -> NavMesh {
    NavMesh {
        walkables: payload.walkables.iter().map(polygon_from).collect(),
        colliders: payload.colliders.iter().map(polygon_from).collect(),
        zones: payload
            .scene_change_zones
            .iter()
            .map(|z| Zone {
                id: z.id.clone(),
                name: z.name.clone(),
                boundary: Polygon::new(
                    z.id.clone(),
                    z.name.clone(),
                    z.points.iter().map(point_from).collect(),
                ),
                target_scene: z.target_scene_id.clone(),
            })
            .collect(),
        marker_points: payload.collision_points.iter().map(point_from).collect(),
    }
}

fn point_from(p: &PointPayload) -> Vec2 {
    Vec2::new(p.x, p.y)
}

fn polygon_from(p: &PolygonPayload) -> Polygon {
    Polygon::new(
        p.id.clone(),
        p.name.clone(),
        p.points.iter().map(point_from).collect(),
    )
}
