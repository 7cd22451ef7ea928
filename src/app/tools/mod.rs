//! Trait-basiertes Segment-Tool-System für erweiterbare Zeichen-Werkzeuge.
//!
//! Jedes Segment-Tool implementiert den `PathTool`-Trait und wird beim
//! `ToolManager` registriert. Tools erzeugen reine Daten (`ToolResult`),
//! die Mutation erfolgt zentral in `apply_tool_result`.

/// Kreisbogen-Tool (Anker → Zwischenpunkt → Ende).
pub mod arc;
/// Quadratisches Bézier-Tool (Anker → Kontrollpunkt → Ende).
pub mod bezier;
/// Gemeinsame Heading- und Aufbau-Logik.
pub mod common;
/// Freihand-Tool: Stroke zeichnen, bestes Modell fitten.
pub mod freehand;
/// Gerade-Linie-Tool (Einzelklick).
pub mod line;
/// PathTool-Trait — Schnittstelle für alle Segment-Tools.
mod path_tool;

pub use path_tool::PathTool;

use glam::DVec2;

use crate::core::{PathModel, Pose, Waypoint};
use crate::shared::EditorOptions;
use common::builder::HeadingSpec;
use common::HeadingMode;

// ── Typen ────────────────────────────────────────────────────────

/// Typ eines erzeugten Segments (auch Schlüssel der Undo-Einträge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Gerade Strecke
    Line,
    /// Quadratische Bézier-Kurve
    Bezier,
    /// Kreisbogen durch drei Punkte
    Arc,
    /// Freihand-Stroke (gefittet auf Linie/Bogen/Bézier)
    Freehand,
}

impl SegmentKind {
    /// Anzeigename für Status-Log und Undo-Beschriftung.
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Line => "Linie",
            SegmentKind::Bezier => "Bézier",
            SegmentKind::Arc => "Bogen",
            SegmentKind::Freehand => "Freihand",
        }
    }
}

/// Rückgabe von `on_click`/`on_drag_end` — steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Alle nötigen Punkte gesetzt — bereit zur Ausführung
    ReadyToExecute,
    /// Vorschau aktualisiert — Eingabe ändert nur Parameter
    UpdatePreview,
}

/// Preview-Geometrie für das Rendering (halbtransparent im Viewport).
#[derive(Debug, Clone, Default)]
pub struct ToolPreview {
    /// Vorschau-Polyline in Feld-Koordinaten
    pub polyline: Vec<DVec2>,
    /// Eingabe-Marker (Kontroll-/Zwischenpunkte)
    pub markers: Vec<DVec2>,
}

/// Ergebnis eines Segment-Tools — reine Daten, keine Mutation.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Segment-Typ (bestimmt den Undo-Eintrag)
    pub kind: SegmentKind,
    /// Anzuhängende Wegpunkte in Pfad-Reihenfolge
    pub new_points: Vec<Waypoint>,
}

/// Schnappschuss-Kontext, den die Sitzung jedem Tool-Aufruf mitgibt.
///
/// Tools halten keinen Verweis auf den Pfad; jede Operation ist eine reine
/// Funktion aus (Schnappschuss, Eingabe).
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    /// Aktueller Pfad-Schnappschuss
    pub path: &'a PathModel,
    /// Editor-Optionen
    pub options: &'a EditorOptions,
    /// Aktive Heading-Policy
    pub heading_mode: HeadingMode,
    /// Gewünschtes Ziel-Heading im Straight-Modus
    pub end_heading: f64,
    /// Exaktes End-Heading erzwingen (z.B. Zahleneingabe im Panel)
    pub end_heading_override: Option<f64>,
}

impl<'a> ToolContext<'a> {
    /// Anker des nächsten Segments: letzter Wegpunkt oder Start-Pose.
    pub fn anchor(&self) -> Pose {
        self.path.anchor_pose()
    }

    /// Heading-Parameter für den Segment-Aufbau.
    pub fn heading_spec(&self) -> HeadingSpec {
        HeadingSpec {
            mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        }
    }
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Segment-Tools und den aktiven Tool-Index.
pub struct ToolManager {
    tools: Vec<Box<dyn PathTool>>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen neuen ToolManager mit vorregistrierten Standard-Tools.
    pub fn new() -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        // Standard-Tools registrieren
        manager.register(Box::new(line::LineTool::new()));
        manager.register(Box::new(bezier::BezierTool::new()));
        manager.register(Box::new(arc::ArcTool::new()));
        manager.register(Box::new(freehand::FreehandTool::new()));
        manager
    }

    /// Registriert ein neues Segment-Tool.
    pub fn register(&mut self, tool: Box<dyn PathTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Setzt das aktive Segment-Tool per Index.
    pub fn set_active(&mut self, index: usize) {
        if index < self.tools.len() {
            // Altes Tool zurücksetzen
            if let Some(old) = self.active_index {
                if old != index {
                    self.tools[old].reset();
                }
            }
            self.active_index = Some(index);
        }
    }

    /// Gibt den Index des aktiven Tools zurück.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn PathTool> {
        self.active_index.map(|i| self.tools[i].as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Tool zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut dyn PathTool> {
        let i = self.active_index?;
        Some(self.tools[i].as_mut())
    }

    /// Setzt alle Tools zurück und deaktiviert das aktive Tool.
    pub fn reset(&mut self) {
        if let Some(i) = self.active_index {
            self.tools[i].reset();
        }
        self.active_index = None;
    }
}
