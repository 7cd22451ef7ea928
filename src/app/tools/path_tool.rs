//! PathTool-Trait — Schnittstelle für alle Segment-Tools.

use glam::DVec2;

use super::{ToolAction, ToolContext, ToolPreview, ToolResult};

/// Schnittstelle für alle Segment-Tools (Linie, Bézier, Bogen, Freihand).
///
/// Tools sind zustandsbehaftet (Klick-Phasen als explizite Zustands-Enums)
/// und erzeugen Preview-Geometrie sowie ein `ToolResult` mit neuen Wegpunkten.
pub trait PathTool {
    /// Anzeigename für die Toolbar
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Statustext für das Properties-Panel (z.B. "Endpunkt wählen")
    fn status_text(&self) -> &str;

    /// Viewport-Klick verarbeiten. Gibt die nächste Aktion zurück.
    /// `pos` ist bereits in Feld-Koordinaten und gesnappt.
    fn on_click(&mut self, pos: DVec2, ctx: &ToolContext) -> ToolAction;

    /// Preview-Geometrie für die aktuelle Cursor-Position berechnen.
    fn preview(&self, cursor: DVec2, ctx: &ToolContext) -> ToolPreview;

    /// Ergebnis erzeugen (Wegpunkte als reine Daten).
    ///
    /// `None` bei degenerierter Eingabe (z.B. Mikro-Segment, unfittbarer
    /// Stroke) — der Aufrufer verwirft die Geste kommentarlos.
    fn execute(&self, ctx: &ToolContext) -> Option<ToolResult>;

    /// Tool-Zustand zurücksetzen (Escape / Tool-Wechsel).
    fn reset(&mut self);

    /// Ist das Tool bereit zur Ausführung?
    fn is_ready(&self) -> bool;

    /// Hat das Tool angefangene Eingaben (Punkte gesetzt, aber noch nicht ausgeführt)?
    ///
    /// Wird für die stufenweise Escape-Logik benötigt.
    fn has_pending_input(&self) -> bool {
        false
    }

    /// Startet einen Zeichen-Drag (nur Freihand-Tool).
    ///
    /// Gibt `true` zurück wenn das Tool den Drag konsumiert.
    fn on_drag_start(&mut self, _pos: DVec2, _ctx: &ToolContext) -> bool {
        false
    }

    /// Fügt dem laufenden Drag einen Sample-Punkt hinzu.
    fn on_drag_update(&mut self, _pos: DVec2, _ctx: &ToolContext) {}

    /// Beendet den Drag. Gibt die nächste Aktion zurück.
    fn on_drag_end(&mut self, _ctx: &ToolContext) -> ToolAction {
        ToolAction::Continue
    }
}
