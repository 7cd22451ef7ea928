//! Kleinste-Quadrate-Fit eines Freihand-Strokes auf Linie, Kreisbogen
//! oder quadratische Bézier-Kurve mit Modellauswahl per Score.
//!
//! Bewusst getrennt vom exakten Drei-Punkt-Umkreis des Bogen-Tools:
//! deliberate 3-Klick-Bögen bekommen den exakten Solver, verrauschte
//! Freihand-Strokes die rausch-robuste Regression.

use glam::DVec2;

use crate::app::tools::SegmentKind;
use crate::shared::curve_geometry::{polyline_length, quadratic_bezier};
use crate::shared::options::{ARC_MAX_RADIUS_IN, ARC_MIN_SWEEP_RAD, BEZIER_CONTROL_MIN_OFFSET_IN};
use crate::shared::EditorOptions;

/// Basis-Funktion 2(1-t)t unterhalb dieser Schwelle: Sample trägt keine
/// verwertbare Information über den Kontrollpunkt und wird übersprungen.
const WEIGHT_EPS: f64 = 1e-3;

/// Schwelle für eine singuläre Normalen-Matrix beim Kreis-Fit.
const SINGULAR_EPS: f64 = 1e-9;

/// Parameter eines gefitteten Kreisbogens.
#[derive(Debug, Clone, Copy)]
pub struct ArcFit {
    /// Kreis-Mittelpunkt
    pub center: DVec2,
    /// Kreis-Radius in Zoll
    pub radius: f64,
    /// Vorzeichenbehafteter Sweep Start → Ende in Radiant
    pub sweep: f64,
    /// Punkt auf halbem Sweep (legt beim Re-Sampling die Bogen-Richtung fest)
    pub mid: DVec2,
}

/// Ein Fit-Kandidat des Freihand-Strokes.
///
/// Invariante: `score = error + Typ-Malus`; der Gewinner ist das Minimum
/// der legal gefitteten Kandidaten.
#[derive(Debug, Clone)]
pub struct FitCandidate {
    /// Gefittetes Modell
    pub kind: SegmentKind,
    /// Endpunkt des Segments
    pub end: DVec2,
    /// RMS-Residuum des Fits in Zoll
    pub error: f64,
    /// Näherung der Segmentlänge in Zoll
    pub length: f64,
    /// error plus Typ-Malus, kleiner gewinnt
    pub score: f64,
    /// Kontrollpunkt (nur Bézier)
    pub control: Option<DVec2>,
    /// Bogen-Parameter (nur Bogen)
    pub arc: Option<ArcFit>,
}

/// Entfernt aufeinanderfolgende Samples, die näher als `min_dist` beieinander liegen.
pub fn dedupe_stroke(raw: &[DVec2], min_dist: f64) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = Vec::with_capacity(raw.len());
    for &p in raw {
        match out.last() {
            Some(last) if last.distance(p) < min_dist => {}
            _ => out.push(p),
        }
    }
    out
}

/// Wickelt einen Winkel auf (-π, π].
fn wrap_rad(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(std::f64::consts::TAU);
    if wrapped > std::f64::consts::PI {
        wrapped - std::f64::consts::TAU
    } else {
        wrapped
    }
}

/// Linien-Kandidat: RMS-Lotabstand aller Samples zur Sehne Anker–Ende.
fn fit_line(pts: &[DVec2], options: &EditorOptions) -> Option<FitCandidate> {
    let anchor = *pts.first()?;
    let end = *pts.last()?;
    let chord = end - anchor;
    let length = chord.length();
    if length < options.min_segment_length_in {
        return None;
    }

    let dir = chord / length;
    let sum_sq: f64 = pts
        .iter()
        .map(|p| {
            let rel = *p - anchor;
            let perp = rel.x * dir.y - rel.y * dir.x;
            perp * perp
        })
        .sum();
    let error = (sum_sq / pts.len() as f64).sqrt();

    Some(FitCandidate {
        kind: SegmentKind::Line,
        end,
        error,
        length,
        score: error + options.fit_penalty_line,
        control: None,
        arc: None,
    })
}

/// Bogen-Kandidat: algebraischer Kleinste-Quadrate-Kreis (Kasa) plus
/// Wicklungs-Richtung aus den summierten Winkel-Inkrementen.
fn fit_arc(pts: &[DVec2], options: &EditorOptions) -> Option<FitCandidate> {
    let n = pts.len();
    if n < 3 {
        return None;
    }

    // Zentrieren stabilisiert die Momente
    let mean = pts.iter().copied().sum::<DVec2>() / n as f64;
    let mut suu = 0.0;
    let mut suv = 0.0;
    let mut svv = 0.0;
    let mut suuu = 0.0;
    let mut svvv = 0.0;
    let mut suvv = 0.0;
    let mut svuu = 0.0;
    for p in pts {
        let u = p.x - mean.x;
        let v = p.y - mean.y;
        suu += u * u;
        suv += u * v;
        svv += v * v;
        suuu += u * u * u;
        svvv += v * v * v;
        suvv += u * v * v;
        svuu += v * u * u;
    }

    // Lineares 2×2-System in (uc, vc) aus der Minimierung von Σ(|p-c|² - r²)²
    let det = suu * svv - suv * suv;
    if det.abs() < SINGULAR_EPS {
        return None;
    }
    let rhs_u = (suuu + suvv) / 2.0;
    let rhs_v = (svvv + svuu) / 2.0;
    let uc = (rhs_u * svv - rhs_v * suv) / det;
    let vc = (rhs_v * suu - rhs_u * suv) / det;

    let center = mean + DVec2::new(uc, vc);
    let radius = (uc * uc + vc * vc + (suu + svv) / n as f64).sqrt();
    if !radius.is_finite() || radius < options.min_segment_length_in / 2.0 {
        return None;
    }
    if radius > ARC_MAX_RADIUS_IN {
        return None;
    }

    // Netto-Wicklung des Strokes um das gefittete Zentrum; robust gegen
    // Rauschen, anders als ein naiver Start/End-Winkelvergleich
    let angle_of = |p: DVec2| (p - center).y.atan2((p - center).x);
    let winding: f64 = pts
        .windows(2)
        .map(|w| wrap_rad(angle_of(w[1]) - angle_of(w[0])))
        .sum();

    // Start→End-Delta auf das Wicklungs-Vorzeichen bringen (±2π)
    let mut sweep = wrap_rad(angle_of(pts[n - 1]) - angle_of(pts[0]));
    if winding > 0.0 && sweep < 0.0 {
        sweep += std::f64::consts::TAU;
    } else if winding < 0.0 && sweep > 0.0 {
        sweep -= std::f64::consts::TAU;
    }
    if sweep.abs() < ARC_MIN_SWEEP_RAD {
        return None;
    }

    let sum_sq: f64 = pts
        .iter()
        .map(|p| {
            let residual = p.distance(center) - radius;
            residual * residual
        })
        .sum();
    let error = (sum_sq / n as f64).sqrt();

    let ang_mid = angle_of(pts[0]) + sweep / 2.0;
    let mid = center + radius * DVec2::new(ang_mid.cos(), ang_mid.sin());

    Some(FitCandidate {
        kind: SegmentKind::Arc,
        end: pts[n - 1],
        error,
        length: (radius * sweep).abs(),
        score: error + options.fit_penalty_arc,
        control: None,
        arc: Some(ArcFit {
            center,
            radius,
            sweep,
            mid,
        }),
    })
}

/// Bézier-Kandidat: Kontrollpunkt per gewichteter Kleinste-Quadrate-Regression.
///
/// Samples werden per kumulativem Sehnenlängen-Anteil parametrisiert; das
/// Gewicht (2(1-t)t)² lässt Punkte nahe den Kurven-Enden weniger zur
/// Kontrollpunkt-Schätzung beitragen.
fn fit_bezier(pts: &[DVec2], options: &EditorOptions) -> Option<FitCandidate> {
    let n = pts.len();
    if n < 3 {
        return None;
    }
    let total = polyline_length(pts);
    if total < options.min_segment_length_in {
        return None;
    }

    let a = pts[0];
    let b = pts[n - 1];

    // Parametrisierung per kumulativem Sehnenlängen-Anteil
    let mut ts = Vec::with_capacity(n);
    let mut cumulative = 0.0;
    ts.push(0.0);
    for w in pts.windows(2) {
        cumulative += w[0].distance(w[1]);
        ts.push(cumulative / total);
    }

    let mut num = DVec2::ZERO;
    let mut den = 0.0;
    for (p, &t) in pts.iter().zip(&ts) {
        let b1 = 2.0 * (1.0 - t) * t;
        if b1.abs() < WEIGHT_EPS {
            continue;
        }
        let inv = 1.0 - t;
        let q = *p - inv * inv * a - t * t * b;
        num += b1 * q;
        den += b1 * b1;
    }
    if den < WEIGHT_EPS {
        return None;
    }
    let control = num / den;

    // Zur Sehne degenerierter Kontrollpunkt: das Modell ist die Linie,
    // der Kandidat wird verworfen statt den Linien-Malus zu unterlaufen
    let chord = b - a;
    let chord_len = chord.length();
    if chord_len > f64::EPSILON {
        let dir = chord / chord_len;
        let rel = control - a;
        let offset = (rel.x * dir.y - rel.y * dir.x).abs();
        if offset < BEZIER_CONTROL_MIN_OFFSET_IN {
            return None;
        }
    }

    let sum_sq: f64 = pts
        .iter()
        .zip(&ts)
        .map(|(p, &t)| p.distance_squared(quadratic_bezier(a, control, b, t)))
        .sum();
    let error = (sum_sq / n as f64).sqrt();

    Some(FitCandidate {
        kind: SegmentKind::Bezier,
        end: b,
        error,
        length: a.distance(control) + control.distance(b),
        score: error + options.fit_penalty_bezier,
        control: Some(control),
        arc: None,
    })
}

/// Fittet alle drei Modelle und wählt das mit dem kleinsten Score.
///
/// `None` wenn kein Modell legal fittet (Stroke zu kurz oder degeneriert);
/// der Aufrufer verwirft die Geste.
pub fn compute_best_fit(
    anchor: DVec2,
    stroke: &[DVec2],
    options: &EditorOptions,
) -> Option<FitCandidate> {
    let mut raw = Vec::with_capacity(stroke.len() + 1);
    raw.push(anchor);
    raw.extend_from_slice(stroke);
    let pts = dedupe_stroke(&raw, options.stroke_dedupe_dist_in);
    if pts.len() < 2 {
        return None;
    }

    let mut best: Option<FitCandidate> = None;
    for candidate in [
        fit_line(&pts, options),
        fit_arc(&pts, options),
        fit_bezier(&pts, options),
    ]
    .into_iter()
    .flatten()
    {
        best = match best {
            Some(current) if current.score <= candidate.score => Some(current),
            _ => Some(candidate),
        };
    }
    best
}
