//! Gemeinsamer Segment-Aufbau aus Sampler-Ausgaben und Heading-Policy.

use glam::DVec2;

use super::super::SegmentKind;
use super::heading::{resolve_heading, sweep_headings, HeadingMode};
use crate::core::{Pose, Waypoint};
use crate::shared::angles::norm_deg;
use crate::shared::curve_geometry::{
    sample_arc_through, sample_line, sample_quadratic_bezier, CurveSample,
};
use crate::shared::EditorOptions;

/// Heading-Parameter eines Segment-Aufbaus.
#[derive(Debug, Clone, Copy)]
pub struct HeadingSpec {
    /// Aktive Heading-Policy der Sitzung
    pub mode: HeadingMode,
    /// Gewünschtes Ziel-Heading (nur im Straight-Modus relevant)
    pub end_heading: f64,
    /// Erzwingt das exakte Heading des letzten Samples (überstimmt die Policy)
    pub end_heading_override: Option<f64>,
}

/// Vollständiges Segment: Eingabe-Punkte plus gesampelte Wegpunkte.
///
/// Transient; nur die angehängten Samples werden zu persistenten Wegpunkten.
#[derive(Debug, Clone)]
pub struct SegmentRecord {
    /// Segment-Typ
    pub kind: SegmentKind,
    /// Anker (letzter committeter Punkt bzw. Start-Pose)
    pub anchor: Pose,
    /// Bézier-Kontrollpunkt
    pub control: Option<DVec2>,
    /// Bogen-Zwischenpunkt
    pub mid: Option<DVec2>,
    /// Pose des letzten Samples
    pub end: Pose,
    /// Geordnete Samples mit zugewiesenen Headings
    pub samples: Vec<Waypoint>,
}

/// Weist jedem Sample ein Heading zu.
///
/// Straight-Modus: Übergangs-Sweep vom Anker-Heading zum Ziel über den
/// Sample-Index. Alle anderen Modi: Auflösung pro Sample, wobei das zuvor
/// zugewiesene Heading als Fallback für degenerierte Tangenten dient.
fn assign_headings(samples: &[CurveSample], anchor: &Pose, spec: &HeadingSpec) -> Vec<Waypoint> {
    let mut points: Vec<Waypoint> = if spec.mode == HeadingMode::Straight {
        let headings = sweep_headings(anchor.heading, spec.end_heading, samples.len());
        samples
            .iter()
            .zip(headings)
            .map(|(s, h)| Waypoint::new(s.pos, h))
            .collect()
    } else {
        let mut fallback = anchor.heading;
        samples
            .iter()
            .map(|s| {
                let h = resolve_heading(spec.mode, s.tangent, fallback, spec.end_heading);
                fallback = h;
                Waypoint::new(s.pos, h)
            })
            .collect()
    };

    if let Some(forced) = spec.end_heading_override {
        if forced.is_finite() {
            if let Some(last) = points.last_mut() {
                last.heading = norm_deg(forced);
            }
        }
    }

    points
}

/// Baut den SegmentRecord aus fertigen Samples.
fn record_from_samples(
    kind: SegmentKind,
    anchor: Pose,
    control: Option<DVec2>,
    mid: Option<DVec2>,
    samples: &[CurveSample],
    spec: &HeadingSpec,
) -> SegmentRecord {
    let points = assign_headings(samples, &anchor, spec);
    let end = points.last().map(Waypoint::pose).unwrap_or(anchor);
    SegmentRecord {
        kind,
        anchor,
        control,
        mid,
        end,
        samples: points,
    }
}

/// Gerades Segment: ein einzelnes Sample am Endpunkt.
pub fn build_line_segment(anchor: Pose, end: DVec2, spec: &HeadingSpec) -> SegmentRecord {
    let sample = CurveSample {
        pos: end,
        tangent: end - anchor.pos,
    };
    record_from_samples(SegmentKind::Line, anchor, None, None, &[sample], spec)
}

/// Quadratisches Bézier-Segment vom Anker über `control` nach `end`.
pub fn build_bezier_segment(
    anchor: Pose,
    control: DVec2,
    end: DVec2,
    spec: &HeadingSpec,
    options: &EditorOptions,
) -> SegmentRecord {
    let samples = sample_quadratic_bezier(
        anchor.pos,
        control,
        end,
        options.sample_step_in,
        options.curve_min_samples,
        options.bezier_max_samples,
    );
    record_from_samples(SegmentKind::Bezier, anchor, Some(control), None, &samples, spec)
}

/// Kreisbogen-Segment vom Anker durch `mid` nach `end`.
pub fn build_arc_segment(
    anchor: Pose,
    mid: DVec2,
    end: DVec2,
    spec: &HeadingSpec,
    options: &EditorOptions,
) -> SegmentRecord {
    let samples = sample_arc_through(
        anchor.pos,
        mid,
        end,
        options.sample_step_in,
        options.curve_min_samples,
        options.arc_max_samples,
    );
    record_from_samples(SegmentKind::Arc, anchor, None, Some(mid), &samples, spec)
}

/// Gerades Segment mit Zwischen-Samples (für Freihand-Mehrpunkt-Commits).
pub fn build_sampled_line_segment(
    anchor: Pose,
    end: DVec2,
    spec: &HeadingSpec,
    options: &EditorOptions,
) -> SegmentRecord {
    let samples = sample_line(
        anchor.pos,
        end,
        options.sample_step_in,
        options.curve_min_samples,
        options.bezier_max_samples,
    );
    record_from_samples(SegmentKind::Line, anchor, None, None, &samples, spec)
}
