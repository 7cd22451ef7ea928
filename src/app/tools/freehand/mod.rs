//! Freihand-Tool: Stroke zeichnen und auf das beste Modell fitten.
//!
//! Während des Drags werden Pointer-Samples mit Mindestabstand gesammelt;
//! beim Loslassen wird der Gewinner-Kandidat (Linie/Bogen/Bézier) in
//! Wegpunkte umgesetzt. Anders als die atomaren Tools hängt Freihand alle
//! Kurven-Samples als Wegpunkte an (Mehrpunkt-Commit).

pub mod fit;

use glam::DVec2;

use self::fit::{compute_best_fit, FitCandidate};
use super::common::builder::{
    build_arc_segment, build_bezier_segment, build_sampled_line_segment, SegmentRecord,
};
use super::{PathTool, SegmentKind, ToolAction, ToolContext, ToolPreview, ToolResult};

/// Freihand-Tool.
#[derive(Debug, Default)]
pub struct FreehandTool {
    /// Roh-Samples des laufenden bzw. letzten Strokes
    stroke: Vec<DVec2>,
    /// Drag läuft gerade
    drawing: bool,
}

impl FreehandTool {
    /// Erstellt ein neues Freihand-Tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Gewinner-Kandidaten in einen SegmentRecord um.
    ///
    /// Linie, Bogen und Bézier laufen durch denselben Sampler- und
    /// Heading-Pfad wie die atomaren Tools.
    fn record_for(candidate: &FitCandidate, ctx: &ToolContext) -> Option<SegmentRecord> {
        let anchor = ctx.anchor();
        let spec = ctx.heading_spec();
        match candidate.kind {
            SegmentKind::Line => Some(build_sampled_line_segment(
                anchor,
                candidate.end,
                &spec,
                ctx.options,
            )),
            SegmentKind::Bezier => {
                let control = candidate.control?;
                Some(build_bezier_segment(
                    anchor,
                    control,
                    candidate.end,
                    &spec,
                    ctx.options,
                ))
            }
            SegmentKind::Arc => {
                let arc = candidate.arc?;
                Some(build_arc_segment(
                    anchor,
                    arc.mid,
                    candidate.end,
                    &spec,
                    ctx.options,
                ))
            }
            SegmentKind::Freehand => None,
        }
    }
}

impl PathTool for FreehandTool {
    fn name(&self) -> &str {
        "Freihand"
    }

    fn description(&self) -> &str {
        "Kurve zeichnen; die beste Linie/Bogen/Bézier-Form wird übernommen"
    }

    fn status_text(&self) -> &str {
        if self.drawing {
            "Zeichnen — loslassen übernimmt die gefittete Form"
        } else if self.stroke.is_empty() {
            "Vom Anker aus ziehen"
        } else {
            "Stroke bereit"
        }
    }

    fn on_click(&mut self, _pos: DVec2, _ctx: &ToolContext) -> ToolAction {
        // Freihand arbeitet über Drag, Einzelklicks ändern nichts
        ToolAction::UpdatePreview
    }

    fn preview(&self, cursor: DVec2, ctx: &ToolContext) -> ToolPreview {
        let anchor = ctx.anchor().pos;
        if self.stroke.is_empty() {
            return ToolPreview {
                polyline: vec![anchor, cursor],
                markers: Vec::new(),
            };
        }

        // Live-Fit: die Vorschau zeigt schon während des Zeichnens die Form,
        // die beim Loslassen übernommen würde
        match compute_best_fit(anchor, &self.stroke, ctx.options)
            .as_ref()
            .and_then(|candidate| Self::record_for(candidate, ctx))
        {
            Some(record) => {
                let mut polyline = Vec::with_capacity(record.samples.len() + 1);
                polyline.push(anchor);
                polyline.extend(record.samples.iter().map(|wp| wp.pos));
                let markers = record.control.into_iter().chain(record.mid).collect();
                ToolPreview { polyline, markers }
            }
            // Noch kein legaler Fit: Roh-Stroke anzeigen
            None => {
                let mut polyline = Vec::with_capacity(self.stroke.len() + 1);
                polyline.push(anchor);
                polyline.extend_from_slice(&self.stroke);
                ToolPreview {
                    polyline,
                    markers: Vec::new(),
                }
            }
        }
    }

    fn execute(&self, ctx: &ToolContext) -> Option<ToolResult> {
        let anchor = ctx.anchor();
        let candidate = compute_best_fit(anchor.pos, &self.stroke, ctx.options)?;
        let record = Self::record_for(&candidate, ctx)?;
        Some(ToolResult {
            kind: SegmentKind::Freehand,
            new_points: record.samples,
        })
    }

    fn reset(&mut self) {
        self.stroke.clear();
        self.drawing = false;
    }

    fn is_ready(&self) -> bool {
        !self.drawing && !self.stroke.is_empty()
    }

    fn has_pending_input(&self) -> bool {
        !self.stroke.is_empty()
    }

    fn on_drag_start(&mut self, pos: DVec2, _ctx: &ToolContext) -> bool {
        self.stroke.clear();
        self.stroke.push(pos);
        self.drawing = true;
        true
    }

    fn on_drag_update(&mut self, pos: DVec2, ctx: &ToolContext) {
        if !self.drawing {
            return;
        }
        // Mindestabstand zum letzten Sample erzwingen
        match self.stroke.last() {
            Some(last) if last.distance(pos) < ctx.options.stroke_dedupe_dist_in => {}
            _ => self.stroke.push(pos),
        }
    }

    fn on_drag_end(&mut self, ctx: &ToolContext) -> ToolAction {
        self.drawing = false;
        if compute_best_fit(ctx.anchor().pos, &self.stroke, ctx.options).is_some() {
            ToolAction::ReadyToExecute
        } else {
            // Unfittbare Geste verwerfen
            self.stroke.clear();
            ToolAction::Continue
        }
    }
}
