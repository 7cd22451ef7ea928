//! Pfad-Modell: Start-Pose plus geordnete Wegpunkt-Liste.

use glam::DVec2;

use crate::core::{Pose, Waypoint};
use crate::shared::curve_geometry::polyline_length;
use crate::shared::EditorOptions;

/// Der geplante Pfad einer Editier-Sitzung.
///
/// Eine einzelne geordnete Sequenz beliebiger Länge ≥ 0. Tools erzeugen
/// reine Daten (`ToolResult`); die Mutation läuft zentral über die
/// Use-Cases, damit jede Operation aus einem expliziten Schnappschuss
/// plus Eingabe besteht.
#[derive(Debug, Clone, PartialEq)]
pub struct PathModel {
    /// Start-Pose des Roboters (Anker des ersten Segments)
    pub start: Pose,
    /// Geordnete Wegpunkte, jüngster zuletzt
    pub points: Vec<Waypoint>,
    /// Abspiel-/Fahr-Geschwindigkeit in Zoll pro Sekunde
    pub velocity: f64,
    /// Positionstoleranz in Zoll (wird mit exportiert)
    pub tolerance: f64,
}

impl PathModel {
    /// Erstellt einen leeren Pfad mit Defaults aus den Optionen.
    pub fn new(start: Pose, options: &EditorOptions) -> Self {
        Self {
            start,
            points: Vec::new(),
            velocity: options.default_velocity,
            tolerance: options.default_tolerance,
        }
    }

    /// Anker für das nächste Segment: letzter Wegpunkt oder Start-Pose.
    pub fn anchor_pose(&self) -> Pose {
        self.points
            .last()
            .map(Waypoint::pose)
            .unwrap_or(self.start)
    }

    /// Hängt Wegpunkte ans Ende an und gibt die Anzahl zurück.
    pub fn append_points(&mut self, new_points: Vec<Waypoint>) -> usize {
        let count = new_points.len();
        self.points.extend(new_points);
        count
    }

    /// Entfernt die `count` zuletzt angehängten Wegpunkte.
    pub fn truncate_last(&mut self, count: usize) {
        let keep = self.points.len().saturating_sub(count);
        self.points.truncate(keep);
    }

    /// Leert die Wegpunkt-Liste.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Polyline des Pfads inklusive Start-Position.
    pub fn polyline(&self) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.push(self.start.pos);
        points.extend(self.points.iter().map(|wp| wp.pos));
        points
    }

    /// Gesamtlänge der Polyline in Zoll.
    pub fn total_length(&self) -> f64 {
        polyline_length(&self.polyline())
    }
}
