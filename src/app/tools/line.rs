//! Gerade-Linie-Tool: ein Klick setzt den nächsten Wegpunkt.

use glam::DVec2;

use super::common::builder::build_line_segment;
use super::{PathTool, ToolAction, ToolContext, ToolPreview, ToolResult};

/// Klick-Phase des Linien-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum LinePhase {
    /// Wartet auf den Endpunkt-Klick
    #[default]
    Idle,
    /// Endpunkt gesetzt, bereit zur Ausführung
    Ready { end: DVec2 },
}

/// Gerade-Linie-Tool.
#[derive(Debug, Default)]
pub struct LineTool {
    phase: LinePhase,
}

impl LineTool {
    /// Erstellt ein neues Linien-Tool.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathTool for LineTool {
    fn name(&self) -> &str {
        "Linie"
    }

    fn description(&self) -> &str {
        "Gerade Strecke vom Anker zum geklickten Punkt"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            LinePhase::Idle => "Endpunkt wählen",
            LinePhase::Ready { .. } => "Bereit — Klick setzt neuen Endpunkt",
        }
    }

    fn on_click(&mut self, pos: DVec2, _ctx: &ToolContext) -> ToolAction {
        self.phase = LinePhase::Ready { end: pos };
        ToolAction::ReadyToExecute
    }

    fn preview(&self, cursor: DVec2, ctx: &ToolContext) -> ToolPreview {
        let end = match self.phase {
            LinePhase::Ready { end } => end,
            LinePhase::Idle => cursor,
        };
        ToolPreview {
            polyline: vec![ctx.anchor().pos, end],
            markers: vec![end],
        }
    }

    fn execute(&self, ctx: &ToolContext) -> Option<ToolResult> {
        let LinePhase::Ready { end } = self.phase else {
            return None;
        };
        let anchor = ctx.anchor();
        // Mikro-Segmente verwerfen
        if anchor.pos.distance(end) < ctx.options.min_segment_length_in {
            return None;
        }
        let record = build_line_segment(anchor, end, &ctx.heading_spec());
        Some(ToolResult {
            kind: record.kind,
            new_points: record.samples,
        })
    }

    fn reset(&mut self) {
        self.phase = LinePhase::Idle;
    }

    fn is_ready(&self) -> bool {
        matches!(self.phase, LinePhase::Ready { .. })
    }

    fn has_pending_input(&self) -> bool {
        self.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::common::HeadingMode;
    use crate::core::{PathModel, Pose};
    use crate::shared::EditorOptions;
    use approx::assert_relative_eq;

    fn ctx<'a>(path: &'a PathModel, options: &'a EditorOptions) -> ToolContext<'a> {
        ToolContext {
            path,
            options,
            heading_mode: HeadingMode::Tangent,
            end_heading: 0.0,
            end_heading_override: None,
        }
    }

    #[test]
    fn klick_und_execute_erzeugen_einen_wegpunkt() {
        let options = EditorOptions::default();
        let path = PathModel::new(Pose::default(), &options);
        let ctx = ctx(&path, &options);

        let mut tool = LineTool::new();
        assert!(!tool.is_ready());
        assert_eq!(tool.on_click(DVec2::new(24.0, 0.0), &ctx), ToolAction::ReadyToExecute);

        let result = tool.execute(&ctx).expect("ergebnis");
        assert_eq!(result.new_points.len(), 1);
        assert_relative_eq!(result.new_points[0].pos.x, 24.0);
        assert_relative_eq!(result.new_points[0].heading, 0.0);
    }

    #[test]
    fn mikro_segment_liefert_kein_ergebnis() {
        let options = EditorOptions::default();
        let path = PathModel::new(Pose::default(), &options);
        let ctx = ctx(&path, &options);

        let mut tool = LineTool::new();
        tool.on_click(DVec2::new(0.2, 0.0), &ctx);
        assert!(tool.execute(&ctx).is_none());
    }
}
