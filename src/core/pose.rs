//! Posen und Wegpunkte des geplanten Pfads.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shared::angles::norm_deg;

/// Position plus Heading in Feld-Koordinaten.
///
/// Heading in Grad, normalisiert auf (-180, 180]. 0° zeigt entlang +x
/// (vorwärts), 90° entlang +y (links), positiv gegen den Uhrzeigersinn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in Zoll, Ursprung in der Feldmitte
    pub pos: DVec2,
    /// Heading in Grad, (-180, 180]
    pub heading: f64,
}

impl Pose {
    /// Erstellt eine Pose; das Heading wird normalisiert.
    pub fn new(pos: DVec2, heading: f64) -> Self {
        Self {
            pos,
            heading: norm_deg(heading),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 0.0)
    }
}

/// An einen Wegpunkt geheftete Aktion (für den Engine-Kern opak).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Aktions-Name
    pub name: String,
    /// Aktions-Parameter (unausgewertet)
    pub value: String,
}

/// Persistierter Punkt des geplanten Pfads.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Position in Zoll
    pub pos: DVec2,
    /// Finales Heading in Grad, (-180, 180]
    pub heading: f64,
    /// Geordnete Aktionen, die an diesem Punkt ausgeführt werden
    pub tags: Vec<Tag>,
    /// Heading-Pfeil im Viewport anzeigen
    pub show_heading: bool,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt ohne Tags; das Heading wird normalisiert.
    pub fn new(pos: DVec2, heading: f64) -> Self {
        Self {
            pos,
            heading: norm_deg(heading),
            tags: Vec::new(),
            show_heading: true,
        }
    }

    /// Pose-Sicht auf den Wegpunkt.
    pub fn pose(&self) -> Pose {
        Pose {
            pos: self.pos,
            heading: self.heading,
        }
    }
}

/// Momentaufnahme der Live-Pose des realen Roboters.
///
/// Wird vom (außerhalb liegenden) Hub-Bridge geliefert; der Kern behandelt
/// sie pro Render-Frame als unveränderlichen Schnappschuss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivePose {
    /// Position in Feld-Koordinaten (Zoll)
    pub pos: DVec2,
    /// Heading in Grad
    pub heading: f64,
    /// Zeitstempel der Messung in Sekunden (Quelle: Hub)
    pub t: f64,
}
