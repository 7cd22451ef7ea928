//! Kreisbogen-Tool: Bogen durch Anker, Zwischenpunkt und Endpunkt.
//!
//! Der Zwischenpunkt legt eindeutig fest, welcher der beiden möglichen
//! Bögen durch Anker und Ende gemeint ist (Sweep-Richtung).

use glam::DVec2;

use super::common::builder::build_arc_segment;
use super::{PathTool, ToolAction, ToolContext, ToolPreview, ToolResult};
use crate::shared::curve_geometry::sample_arc_through;

/// Klick-Phase des Bogen-Tools als expliziter Zustandsautomat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum ArcPhase {
    /// Wartet auf den Zwischenpunkt-Klick
    #[default]
    Idle,
    /// Zwischenpunkt gesetzt, wartet auf den Endpunkt
    AwaitingEnd { mid: DVec2 },
    /// Beide Punkte gesetzt, bereit zur Ausführung
    Ready { mid: DVec2, end: DVec2 },
}

/// Kreisbogen-Tool.
#[derive(Debug, Default)]
pub struct ArcTool {
    phase: ArcPhase,
}

impl ArcTool {
    /// Erstellt ein neues Bogen-Tool.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathTool for ArcTool {
    fn name(&self) -> &str {
        "Bogen"
    }

    fn description(&self) -> &str {
        "Kreisbogen: Zwischenpunkt auf dem Bogen, dann Endpunkt klicken"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            ArcPhase::Idle => "Zwischenpunkt wählen",
            ArcPhase::AwaitingEnd { .. } => "Endpunkt wählen",
            ArcPhase::Ready { .. } => "Bereit — Klick setzt neuen Endpunkt",
        }
    }

    fn on_click(&mut self, pos: DVec2, _ctx: &ToolContext) -> ToolAction {
        match self.phase {
            ArcPhase::Idle => {
                self.phase = ArcPhase::AwaitingEnd { mid: pos };
                ToolAction::Continue
            }
            ArcPhase::AwaitingEnd { mid } | ArcPhase::Ready { mid, .. } => {
                self.phase = ArcPhase::Ready { mid, end: pos };
                ToolAction::ReadyToExecute
            }
        }
    }

    fn preview(&self, cursor: DVec2, ctx: &ToolContext) -> ToolPreview {
        let anchor = ctx.anchor().pos;
        let (mid, end) = match self.phase {
            ArcPhase::Idle => {
                return ToolPreview {
                    polyline: vec![anchor, cursor],
                    markers: vec![cursor],
                };
            }
            ArcPhase::AwaitingEnd { mid } => (mid, cursor),
            ArcPhase::Ready { mid, end } => (mid, end),
        };

        let samples = sample_arc_through(
            anchor,
            mid,
            end,
            ctx.options.sample_step_in,
            ctx.options.curve_min_samples,
            ctx.options.arc_max_samples,
        );
        let mut polyline = Vec::with_capacity(samples.len() + 1);
        polyline.push(anchor);
        polyline.extend(samples.iter().map(|s| s.pos));

        ToolPreview {
            polyline,
            markers: vec![mid, end],
        }
    }

    fn execute(&self, ctx: &ToolContext) -> Option<ToolResult> {
        let ArcPhase::Ready { mid, end } = self.phase else {
            return None;
        };
        let anchor = ctx.anchor();
        if anchor.pos.distance(end) < ctx.options.min_segment_length_in {
            return None;
        }
        let record = build_arc_segment(anchor, mid, end, &ctx.heading_spec(), ctx.options);
        // Atomare Tools übernehmen nur das letzte Sample als Wegpunkt
        let last = record.samples.last()?.clone();
        Some(ToolResult {
            kind: record.kind,
            new_points: vec![last],
        })
    }

    fn reset(&mut self) {
        self.phase = ArcPhase::Idle;
    }

    fn is_ready(&self) -> bool {
        matches!(self.phase, ArcPhase::Ready { .. })
    }

    fn has_pending_input(&self) -> bool {
        self.phase != ArcPhase::Idle
    }
}
