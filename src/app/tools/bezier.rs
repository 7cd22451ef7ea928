//! Quadratisches Bézier-Tool mit sequentieller Punkt-Platzierung.
//!
//! Erster Klick setzt den Kontrollpunkt, zweiter Klick den Endpunkt.
//! Der Anker ist immer der letzte committete Wegpunkt (bzw. die Start-Pose).

use glam::DVec2;

use super::common::builder::build_bezier_segment;
use super::{PathTool, ToolAction, ToolContext, ToolPreview, ToolResult};
use crate::shared::curve_geometry::sample_quadratic_bezier;

/// Klick-Phase des Bézier-Tools als expliziter Zustandsautomat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum BezierPhase {
    /// Wartet auf den Kontrollpunkt-Klick
    #[default]
    Idle,
    /// Kontrollpunkt gesetzt, wartet auf den Endpunkt
    AwaitingEnd { control: DVec2 },
    /// Beide Punkte gesetzt, bereit zur Ausführung
    Ready { control: DVec2, end: DVec2 },
}

/// Quadratisches Bézier-Tool.
#[derive(Debug, Default)]
pub struct BezierTool {
    phase: BezierPhase,
}

impl BezierTool {
    /// Erstellt ein neues Bézier-Tool.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathTool for BezierTool {
    fn name(&self) -> &str {
        "Bézier"
    }

    fn description(&self) -> &str {
        "Quadratische Bézier-Kurve: Kontrollpunkt, dann Endpunkt klicken"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            BezierPhase::Idle => "Kontrollpunkt wählen",
            BezierPhase::AwaitingEnd { .. } => "Endpunkt wählen",
            BezierPhase::Ready { .. } => "Bereit — Klick setzt neuen Endpunkt",
        }
    }

    fn on_click(&mut self, pos: DVec2, _ctx: &ToolContext) -> ToolAction {
        match self.phase {
            BezierPhase::Idle => {
                self.phase = BezierPhase::AwaitingEnd { control: pos };
                ToolAction::Continue
            }
            BezierPhase::AwaitingEnd { control } | BezierPhase::Ready { control, .. } => {
                self.phase = BezierPhase::Ready { control, end: pos };
                ToolAction::ReadyToExecute
            }
        }
    }

    fn preview(&self, cursor: DVec2, ctx: &ToolContext) -> ToolPreview {
        let anchor = ctx.anchor().pos;
        let (control, end) = match self.phase {
            // Noch kein Kontrollpunkt: Cursor als Kontrollpunkt andeuten
            BezierPhase::Idle => {
                return ToolPreview {
                    polyline: vec![anchor, cursor],
                    markers: vec![cursor],
                };
            }
            BezierPhase::AwaitingEnd { control } => (control, cursor),
            BezierPhase::Ready { control, end } => (control, end),
        };

        let samples = sample_quadratic_bezier(
            anchor,
            control,
            end,
            ctx.options.sample_step_in,
            ctx.options.curve_min_samples,
            ctx.options.bezier_max_samples,
        );
        let mut polyline = Vec::with_capacity(samples.len() + 1);
        polyline.push(anchor);
        polyline.extend(samples.iter().map(|s| s.pos));

        ToolPreview {
            polyline,
            markers: vec![control, end],
        }
    }

    fn execute(&self, ctx: &ToolContext) -> Option<ToolResult> {
        let BezierPhase::Ready { control, end } = self.phase else {
            return None;
        };
        let anchor = ctx.anchor();
        if anchor.pos.distance(end) < ctx.options.min_segment_length_in {
            return None;
        }
        let record = build_bezier_segment(anchor, control, end, &ctx.heading_spec(), ctx.options);
        // Atomare Tools übernehmen nur das letzte Sample als Wegpunkt
        let last = record.samples.last()?.clone();
        Some(ToolResult {
            kind: record.kind,
            new_points: vec![last],
        })
    }

    fn reset(&mut self) {
        self.phase = BezierPhase::Idle;
    }

    fn is_ready(&self) -> bool {
        matches!(self.phase, BezierPhase::Ready { .. })
    }

    fn has_pending_input(&self) -> bool {
        self.phase != BezierPhase::Idle
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
    fn zwei_klicks_bis_ready() {
        let options = EditorOptions::default();
        let path = PathModel::new(Pose::default(), &options);
        let ctx = ctx(&path, &options);

        let mut tool = BezierTool::new();
        assert_eq!(tool.on_click(DVec2::new(12.0, 12.0), &ctx), ToolAction::Continue);
        assert!(tool.has_pending_input());
        assert!(!tool.is_ready());

        assert_eq!(tool.on_click(DVec2::new(24.0, 0.0), &ctx), ToolAction::ReadyToExecute);
        assert!(tool.is_ready());
    }

    #[test]
    fn execute_haengt_nur_den_endpunkt_an() {
        let options = EditorOptions::default();
        let path = PathModel::new(Pose::default(), &options);
        let ctx = ctx(&path, &options);

        let mut tool = BezierTool::new();
        tool.on_click(DVec2::new(12.0, 12.0), &ctx);
        tool.on_click(DVec2::new(24.0, 0.0), &ctx);

        let result = tool.execute(&ctx).expect("ergebnis");
        assert_eq!(result.new_points.len(), 1);
        assert_relative_eq!(result.new_points[0].pos.x, 24.0, epsilon = 1e-9);
        assert_relative_eq!(result.new_points[0].pos.y, 0.0, epsilon = 1e-9);
        // Tangente am Ende zeigt von (12,12) nach (24,0) → -45°
        assert_relative_eq!(result.new_points[0].heading, -45.0, epsilon = 1e-9);
    }

    #[test]
    fn reset_kehrt_zu_idle_zurueck() {
        let options = EditorOptions::default();
        let path = PathModel::new(Pose::default(), &options);
        let ctx = ctx(&path, &options);

        let mut tool = BezierTool::new();
        tool.on_click(DVec2::new(12.0, 12.0), &ctx);
        tool.reset();
        assert!(!tool.has_pending_input());
        assert!(tool.execute(&ctx).is_none());
    }
}
