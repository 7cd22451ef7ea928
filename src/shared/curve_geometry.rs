//! Reine Kurven-Geometrie: Sampling von quadratischen Bézier-Kurven und
//! Drei-Punkt-Kreisbögen.
//!
//! Layer-neutral: kann von `tools`, `use_cases` und anderen Layer-übergreifenden
//! Modulen importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.
//! Jedes Sample trägt Position und momentane Tangente (für Heading-Ableitung).

use glam::DVec2;

use super::options::COLLINEAR_EPS;

/// Ein Punkt entlang einer parametrischen Kurve mit momentaner Tangente.
#[derive(Debug, Clone, Copy)]
pub struct CurveSample {
    /// Position in Feld-Koordinaten (Zoll)
    pub pos: DVec2,
    /// Tangente in Fahrtrichtung (nicht normalisiert)
    pub tangent: DVec2,
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1-P0) + 2t·(P2-P1)
pub fn quadratic_bezier_deriv(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Leitet die Sample-Anzahl aus einer Längen-Näherung ab, geklemmt auf [min, max].
fn sample_count(approx_length: f64, step_in: f64, min_samples: usize, max_samples: usize) -> usize {
    let floor = min_samples.max(1);
    let ceil = max_samples.max(floor);
    let step = step_in.max(f64::EPSILON);
    ((approx_length / step).ceil() as usize).clamp(floor, ceil)
}

/// Sampelt eine quadratische Bézier-Kurve A → B mit Kontrollpunkt C.
///
/// Längen-Näherung ist die Kontrollpolygon-Länge |C-A| + |B-C| (obere Schranke,
/// bewusst grob). Samples liegen bei t = i/count für i in 1..=count,
/// t = 0 wird ausgelassen (der Anker ist bereits Teil des Pfads).
pub fn sample_quadratic_bezier(
    a: DVec2,
    c: DVec2,
    b: DVec2,
    step_in: f64,
    min_samples: usize,
    max_samples: usize,
) -> Vec<CurveSample> {
    let approx = a.distance(c) + c.distance(b);
    let count = sample_count(approx, step_in, min_samples, max_samples);

    (1..=count)
        .map(|i| {
            let t = i as f64 / count as f64;
            CurveSample {
                pos: quadratic_bezier(a, c, b, t),
                tangent: quadratic_bezier_deriv(a, c, b, t),
            }
        })
        .collect()
}

/// Sampelt die Strecke A → B mit konstanter Tangente B-A.
///
/// Degenerierter Fall des Bogen-Samplers (kollineare Punkte) und Basis
/// der Linien-Preview.
pub fn sample_line(
    a: DVec2,
    b: DVec2,
    step_in: f64,
    min_samples: usize,
    max_samples: usize,
) -> Vec<CurveSample> {
    let count = sample_count(a.distance(b), step_in, min_samples, max_samples);
    let tangent = b - a;

    (1..=count)
        .map(|i| {
            let t = i as f64 / count as f64;
            CurveSample {
                pos: a.lerp(b, t),
                tangent,
            }
        })
        .collect()
}

/// Umkreis-Mittelpunkt und Radius durch drei Punkte.
///
/// Gibt `None` zurück wenn die Punkte kollinear sind (|d| < Epsilon).
pub fn circumcenter_through(a: DVec2, m: DVec2, b: DVec2) -> Option<(DVec2, f64)> {
    let d = 2.0 * (a.x * (m.y - b.y) + m.x * (b.y - a.y) + b.x * (a.y - m.y));
    if d.abs() < COLLINEAR_EPS {
        return None;
    }

    let a2 = a.length_squared();
    let m2 = m.length_squared();
    let b2 = b.length_squared();

    let ux = (a2 * (m.y - b.y) + m2 * (b.y - a.y) + b2 * (a.y - m.y)) / d;
    let uy = (a2 * (b.x - m.x) + m2 * (a.x - b.x) + b2 * (m.x - a.x)) / d;
    let center = DVec2::new(ux, uy);

    Some((center, center.distance(a)))
}

/// Vorzeichenbehafteter Winkel-Sweep von A nach B um `center`, so dass der
/// Bogen durch M läuft.
///
/// Liegt Ms CCW-Offset ab A innerhalb des direkten CCW-Sweeps nach B, ist der
/// Sweep positiv; sonst wird das CW-Komplement genommen. Damit ist der von den
/// zwei möglichen Bögen durch A und B eindeutig der durch M bestimmt.
fn arc_sweep(center: DVec2, a: DVec2, m: DVec2, b: DVec2) -> f64 {
    let ang_a = (a - center).y.atan2((a - center).x);
    let ang_m = (m - center).y.atan2((m - center).x);
    let ang_b = (b - center).y.atan2((b - center).x);

    let off_m = (ang_m - ang_a).rem_euclid(std::f64::consts::TAU);
    let off_b = (ang_b - ang_a).rem_euclid(std::f64::consts::TAU);

    if off_m <= off_b {
        off_b
    } else {
        off_b - std::f64::consts::TAU
    }
}

/// Sampelt den Kreisbogen durch A (Start), M (Zwischenpunkt) und B (Ende).
///
/// Kollineare Punkte fallen still auf die Strecke A → B zurück, damit die
/// interaktive Preview auch mitten im Klick-Flow reagiert.
/// Sample-Anzahl skaliert mit der Bogenlänge |radius · sweep|; jede Tangente
/// steht senkrecht auf dem Radius und zeigt in Sweep-Richtung.
pub fn sample_arc_through(
    a: DVec2,
    m: DVec2,
    b: DVec2,
    step_in: f64,
    min_samples: usize,
    max_samples: usize,
) -> Vec<CurveSample> {
    let Some((center, radius)) = circumcenter_through(a, m, b) else {
        return sample_line(a, b, step_in, min_samples, max_samples);
    };

    let sweep = arc_sweep(center, a, m, b);
    let ang_a = (a - center).y.atan2((a - center).x);
    let arc_length = (radius * sweep).abs();
    let count = sample_count(arc_length, step_in, min_samples, max_samples);
    let dir = if sweep < 0.0 { -1.0 } else { 1.0 };

    (1..=count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let ang = ang_a + sweep * t;
            CurveSample {
                pos: center + radius * DVec2::new(ang.cos(), ang.sin()),
                tangent: DVec2::new(-ang.sin(), ang.cos()) * dir,
            }
        })
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
