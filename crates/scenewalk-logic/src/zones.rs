//! Scene-change trigger zones with debounced enter detection.
//!
//! A zone fires only when all three hold:
//! 1. the actor is inside it now
//! 2. the previously-recorded current zone differs (including "none")
//! 3. the cooldown has elapsed since the last firing of *any* zone
//!
//! Remaining inside a zone still refreshes the recorded current zone even
//! when firing is suppressed, so a later exit-then-re-entry reads as fresh.
//! Leaving all zones clears the current zone immediately; only firing is
//! cooldown-gated, never the clear.

use serde::{Deserialize, Serialize};

use crate::geometry::{Polygon, Vec2};
use crate::walkable::point_in_polygon;

/// A scene-transition trigger region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub boundary: Polygon,
    pub target_scene: String,
}

/// A zone-enter event. The tracker never mutates scene state itself; the
/// host consumes these and performs the transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFire {
    pub zone_id: String,
    pub target_scene: String,
}

/// Per-actor debounce state for zone detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneTracker {
    current_zone: Option<String>,
    last_fired_at_ms: Option<f64>,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone the actor was inside on the most recent tick, if any.
    pub fn current_zone(&self) -> Option<&str> {
        self.current_zone.as_deref()
    }

    /// Test `pos` against every zone and apply the debounce rules.
    ///
    /// Zones with degenerate boundaries are skipped. When several zones
    /// overlap, the first containing zone in authoring order wins.
    pub fn tick(
        &mut self,
        pos: Vec2,
        zones: &[Zone],
        now_ms: f64,
        cooldown_ms: f64,
    ) -> Option<ZoneFire> {
        let hit = zones.iter().find(|z| point_in_polygon(pos, &z.boundary));

        let Some(zone) = hit else {
            self.current_zone = None;
            return None;
        };

        let differs = self.current_zone.as_deref() != Some(zone.id.as_str());
        let cooled = self
            .last_fired_at_ms
            .map_or(true, |t| now_ms - t >= cooldown_ms);
        self.current_zone = Some(zone.id.clone());

        if differs && cooled {
            self.last_fired_at_ms = Some(now_ms);
            Some(ZoneFire {
                zone_id: zone.id.clone(),
                target_scene: zone.target_scene.clone(),
            })
        } else {
            None
        }
    }
}
