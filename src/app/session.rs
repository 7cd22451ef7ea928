//! Editor-Sitzung: hält Pfad, Optionen, Tools und Playback zusammen und
//! bildet die diskrete Ereignis-Schnittstelle für die (außen liegende) UI.
//!
//! Pointer-Ereignisse kommen in Canvas-Koordinaten an, werden hier in
//! Feld-Koordinaten transformiert und gesnappt und dann an das aktive
//! Tool weitergereicht. Mutation läuft ausschließlich über die Use-Cases.

use glam::DVec2;

use crate::app::history::UndoStack;
use crate::app::playback::{interpolate_heading, segment_progress, PlaybackClock};
use crate::app::tools::common::HeadingMode;
use crate::app::tools::{ToolAction, ToolContext, ToolManager, ToolPreview};
use crate::app::use_cases::{apply_tool_result, clear_path, undo_last};
use crate::core::{snap_to_field, FieldTransform, PathModel, Pose};
use crate::shared::EditorOptions;

/// Zustand einer Editier-Sitzung.
pub struct EditorSession {
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Der geplante Pfad
    pub path: PathModel,
    /// Undo-Stack über Anhäng-Schritte
    pub history: UndoStack,
    /// Registrierte Segment-Tools
    pub tools: ToolManager,
    /// Aktive Heading-Policy (gilt zum Erzeugungs-Zeitpunkt)
    pub heading_mode: HeadingMode,
    /// Ziel-Heading für den Straight-Modus
    pub end_heading: f64,
    /// Exaktes End-Heading erzwingen (Zahleneingabe im Panel)
    pub end_heading_override: Option<f64>,
    /// Playback-Uhr der Pfad-Animation
    pub playback: PlaybackClock,
}

impl EditorSession {
    /// Erstellt eine Sitzung mit leerem Pfad.
    pub fn new(start: Pose, options: EditorOptions) -> Self {
        let path = PathModel::new(start, &options);
        let history = UndoStack::new_with_capacity(options.undo_max_depth);
        Self {
            options,
            path,
            history,
            tools: ToolManager::new(),
            heading_mode: HeadingMode::default(),
            end_heading: 0.0,
            end_heading_override: None,
            playback: PlaybackClock::new(),
        }
    }

    /// Canvas-Position → gesnappte Feld-Position.
    pub fn world_pos(&self, canvas_pos: DVec2, tf: &FieldTransform) -> DVec2 {
        snap_to_field(
            tf.canvas_to_world(canvas_pos),
            self.options.snap_step_in,
            self.options.field_size_in,
        )
    }

    /// Wählt das aktive Tool per Index.
    pub fn select_tool(&mut self, index: usize) {
        self.tools.set_active(index);
    }

    /// Viewport-Klick. Führt das Tool bei `ReadyToExecute` direkt aus.
    pub fn pointer_click(&mut self, canvas_pos: DVec2, tf: &FieldTransform) -> ToolAction {
        let pos = self.world_pos(canvas_pos, tf);
        let ctx = ToolContext {
            path: &self.path,
            options: &self.options,
            heading_mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        };
        let Some(tool) = self.tools.active_tool_mut() else {
            return ToolAction::Continue;
        };

        let action = tool.on_click(pos, &ctx);
        if action == ToolAction::ReadyToExecute {
            let result = tool.execute(&ctx);
            tool.reset();
            if let Some(result) = result {
                apply_tool_result(&mut self.path, &mut self.history, result);
            }
        }
        action
    }

    /// Beginn eines Zeichen-Drags (Freihand). `true` wenn konsumiert.
    pub fn pointer_drag_start(&mut self, canvas_pos: DVec2, tf: &FieldTransform) -> bool {
        let pos = self.world_pos(canvas_pos, tf);
        let ctx = ToolContext {
            path: &self.path,
            options: &self.options,
            heading_mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        };
        match self.tools.active_tool_mut() {
            Some(tool) => tool.on_drag_start(pos, &ctx),
            None => false,
        }
    }

    /// Pointer-Bewegung während eines Zeichen-Drags.
    pub fn pointer_drag_move(&mut self, canvas_pos: DVec2, tf: &FieldTransform) {
        let pos = self.world_pos(canvas_pos, tf);
        let ctx = ToolContext {
            path: &self.path,
            options: &self.options,
            heading_mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        };
        if let Some(tool) = self.tools.active_tool_mut() {
            tool.on_drag_update(pos, &ctx);
        }
    }

    /// Ende eines Zeichen-Drags. Wendet einen fittbaren Stroke direkt an.
    pub fn pointer_drag_end(&mut self) -> ToolAction {
        let ctx = ToolContext {
            path: &self.path,
            options: &self.options,
            heading_mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        };
        let Some(tool) = self.tools.active_tool_mut() else {
            return ToolAction::Continue;
        };

        let action = tool.on_drag_end(&ctx);
        if action == ToolAction::ReadyToExecute {
            let result = tool.execute(&ctx);
            tool.reset();
            if let Some(result) = result {
                apply_tool_result(&mut self.path, &mut self.history, result);
            }
        }
        action
    }

    /// Preview-Geometrie des aktiven Tools für die Cursor-Position.
    pub fn preview(&self, cursor_canvas: DVec2, tf: &FieldTransform) -> ToolPreview {
        let cursor = self.world_pos(cursor_canvas, tf);
        let ctx = ToolContext {
            path: &self.path,
            options: &self.options,
            heading_mode: self.heading_mode,
            end_heading: self.end_heading,
            end_heading_override: self.end_heading_override,
        };
        match self.tools.active_tool() {
            Some(tool) => tool.preview(cursor, &ctx),
            None => ToolPreview::default(),
        }
    }

    /// Stufenweises Escape: erst angefangene Tool-Eingabe abbrechen.
    ///
    /// Gibt `true` zurück wenn eine Eingabe verworfen wurde.
    pub fn cancel(&mut self) -> bool {
        if let Some(tool) = self.tools.active_tool_mut() {
            if tool.has_pending_input() {
                tool.reset();
                return true;
            }
        }
        false
    }

    /// Macht den jüngsten Anhäng-Schritt rückgängig.
    pub fn undo(&mut self) -> usize {
        undo_last(&mut self.path, &mut self.history)
    }

    /// Leert Pfad und Undo-Stack.
    pub fn clear(&mut self) {
        clear_path(&mut self.path, &mut self.history);
    }

    /// Frame-Callback der Playback-Animation.
    pub fn tick_playback(&mut self, now_s: f64) -> f64 {
        let total = self.path.total_length();
        self.playback.tick(now_s, self.path.velocity, total)
    }

    /// Roboter-Pose an der aktuellen Playback-Distanz.
    ///
    /// `None` bei leerem oder längenlosem Pfad; der Aufrufer zeichnet dann
    /// keinen Playback-Footprint.
    pub fn playback_pose(&self) -> Option<Pose> {
        let polyline = self.path.polyline();
        let progress = segment_progress(&polyline, self.playback.distance)?;
        let heading = interpolate_heading(
            progress.index,
            progress.t,
            &self.path.start,
            &self.path.points,
        );
        Some(Pose::new(progress.position, heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Identitäts-nahe Transformation: Feldmitte bei (288, 288), 4 px/Zoll.
    fn tf() -> FieldTransform {
        FieldTransform::new(DVec2::new(288.0, 288.0), 4.0)
    }

    fn session() -> EditorSession {
        EditorSession::new(Pose::default(), EditorOptions::default())
    }

    fn canvas_of(tf: &FieldTransform, world: DVec2) -> DVec2 {
        tf.world_to_canvas(world)
    }

    #[test]
    fn linien_klick_haengt_wegpunkt_mit_tangenten_heading_an() {
        let mut session = session();
        let tf = tf();
        session.select_tool(0); // Linie

        let action = session.pointer_click(canvas_of(&tf, DVec2::new(24.0, 0.0)), &tf);
        assert_eq!(action, ToolAction::ReadyToExecute);
        assert_eq!(session.path.points.len(), 1);
        assert_relative_eq!(session.path.points[0].pos.x, 24.0);
        assert_relative_eq!(session.path.points[0].heading, 0.0);

        // Zweiter Punkt: Fahrt nach +y → Heading 90
        session.pointer_click(canvas_of(&tf, DVec2::new(24.0, 24.0)), &tf);
        assert_eq!(session.path.points.len(), 2);
        assert_relative_eq!(session.path.points[1].heading, 90.0);
    }

    #[test]
    fn undo_entfernt_den_letzten_schritt() {
        let mut session = session();
        let tf = tf();
        session.select_tool(0);
        session.pointer_click(canvas_of(&tf, DVec2::new(24.0, 0.0)), &tf);
        session.pointer_click(canvas_of(&tf, DVec2::new(48.0, 0.0)), &tf);
        assert_eq!(session.path.points.len(), 2);

        assert_eq!(session.undo(), 1);
        assert_eq!(session.path.points.len(), 1);
        assert_relative_eq!(session.path.points[0].pos.x, 24.0);
    }

    #[test]
    fn klick_wird_auf_das_raster_gesnappt() {
        let mut session = session();
        let tf = tf();
        session.select_tool(0);

        // 24.1 Zoll → Raster 1 Zoll → 24.0
        session.pointer_click(canvas_of(&tf, DVec2::new(24.1, 0.2)), &tf);
        assert_relative_eq!(session.path.points[0].pos.x, 24.0);
        assert_relative_eq!(session.path.points[0].pos.y, 0.0);
    }

    #[test]
    fn cancel_verwirft_angefangene_eingabe() {
        let mut session = session();
        let tf = tf();
        session.select_tool(1); // Bézier
        session.pointer_click(canvas_of(&tf, DVec2::new(12.0, 12.0)), &tf);
        assert!(session.cancel());
        assert!(!session.cancel());
        assert!(session.path.points.is_empty());
    }

    #[test]
    fn playback_pose_folgt_dem_pfad() {
        let mut session = session();
        let tf = tf();
        session.select_tool(0);
        session.pointer_click(canvas_of(&tf, DVec2::new(24.0, 0.0)), &tf);

        session.playback.play();
        session.tick_playback(0.0);
        // 0.4 s bei 30 Zoll/s → 12 Zoll
        session.tick_playback(0.4);
        let pose = session.playback_pose().expect("pose");
        assert_relative_eq!(pose.pos.x, 12.0, epsilon = 1e-9);
        assert_relative_eq!(pose.heading, 0.0);
    }

    #[test]
    fn playback_auf_leerem_pfad_liefert_keine_pose() {
        let session = session();
        assert!(session.playback_pose().is_none());
    }
}
