//! JSON-Persistenzformat des geplanten Pfads.
//!
//! Flaches, JSON-serialisierbares Export-Record: Start-Pose, Wegpunkte,
//! Geschwindigkeit, Toleranz und Tag-Liste (Tags flach mit Wegpunkt-Index).
//! Export → Import reproduziert die `{x, y, h}`-Sequenz bitgleich modulo
//! Gleitkomma sowie alle Tag-Daten.

mod parser;
mod writer;

pub use parser::parse_path_json;
pub use writer::write_path_json;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{PathModel, Pose, Tag, Waypoint};

/// Pose im Export-Record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// x in Zoll
    pub x: f64,
    /// y in Zoll
    pub y: f64,
    /// Heading in Grad
    pub h: f64,
}

/// Wegpunkt im Export-Record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointRecord {
    /// x in Zoll
    pub x: f64,
    /// y in Zoll
    pub y: f64,
    /// Heading in Grad
    pub h: f64,
    /// Heading-Pfeil anzeigen
    #[serde(default = "default_show_heading")]
    pub show_heading: bool,
}

/// Tag im Export-Record, flach mit Wegpunkt-Index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Index des zugehörigen Wegpunkts
    pub index: usize,
    /// Aktions-Name
    pub name: String,
    /// Aktions-Parameter
    pub value: String,
}

/// Das vollständige Export-Record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFile {
    /// Start-Pose
    pub start: PoseRecord,
    /// Wegpunkte in Pfad-Reihenfolge
    pub points: Vec<WaypointRecord>,
    /// Geschwindigkeit in Zoll pro Sekunde
    pub velocity: f64,
    /// Positionstoleranz in Zoll
    pub tolerance: f64,
    /// Tags, flach mit Wegpunkt-Index
    #[serde(default)]
    pub tags: Vec<TagRecord>,
}

/// Default für fehlende `showHeading`-Felder älterer Dateien.
fn default_show_heading() -> bool {
    true
}

impl PathFile {
    /// Baut das Export-Record aus einem Pfad-Modell.
    pub fn from_model(path: &PathModel) -> Self {
        let mut tags = Vec::new();
        for (index, wp) in path.points.iter().enumerate() {
            for tag in &wp.tags {
                tags.push(TagRecord {
                    index,
                    name: tag.name.clone(),
                    value: tag.value.clone(),
                });
            }
        }
        Self {
            start: PoseRecord {
                x: path.start.pos.x,
                y: path.start.pos.y,
                h: path.start.heading,
            },
            points: path
                .points
                .iter()
                .map(|wp| WaypointRecord {
                    x: wp.pos.x,
                    y: wp.pos.y,
                    h: wp.heading,
                    show_heading: wp.show_heading,
                })
                .collect(),
            velocity: path.velocity,
            tolerance: path.tolerance,
            tags,
        }
    }

    /// Baut das Pfad-Modell aus dem Export-Record.
    ///
    /// Tags werden über ihren Index wieder angeheftet; Indizes außerhalb
    /// der Punktliste werden mit Warnung übersprungen.
    pub fn into_model(self) -> PathModel {
        let mut points: Vec<Waypoint> = self
            .points
            .into_iter()
            .map(|record| {
                let mut wp = Waypoint::new(DVec2::new(record.x, record.y), record.h);
                wp.show_heading = record.show_heading;
                wp
            })
            .collect();

        for tag in self.tags {
            match points.get_mut(tag.index) {
                Some(wp) => wp.tags.push(Tag {
                    name: tag.name,
                    value: tag.value,
                }),
                None => log::warn!(
                    "Tag '{}' zeigt auf Wegpunkt {} außerhalb der Liste — übersprungen",
                    tag.name,
                    tag.index
                ),
            }
        }

        PathModel {
            start: Pose::new(DVec2::new(self.start.x, self.start.y), self.start.h),
            points,
            velocity: self.velocity,
            tolerance: self.tolerance,
        }
    }
}
