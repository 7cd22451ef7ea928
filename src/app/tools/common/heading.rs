//! Heading-Policy: leitet die Orientierung neuer Wegpunkte aus der Geometrie ab.

use glam::DVec2;

use crate::shared::angles::{heading_from_delta, norm_deg, shortest_delta_deg};

/// Magnituden-Schwelle, unter der eine Tangente als degeneriert gilt.
const TANGENT_EPS: f64 = 1e-9;

/// Sitzungsweite Heading-Policy.
///
/// Wird beim Erzeugen eines Wegpunkts angewandt; danach ist dessen Heading
/// eingefrorene Daten, unabhängig von späteren Policy-Wechseln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingMode {
    /// Heading folgt der Fahrtrichtung (Tangente)
    #[default]
    Tangent,
    /// Konstantes Ziel-Heading über das ganze Segment (mit Übergangs-Sweep bei Kurven)
    Straight,
    /// Kein Auto-Heading; der Wert wird später vom User editiert
    Manual,
    /// Tangente um +90° gedreht (links der Fahrtrichtung)
    OrthLeft,
    /// Tangente um -90° gedreht (rechts der Fahrtrichtung)
    OrthRight,
}

/// Heading der Tangente; degeneriert (Magnitude ≈ 0) fällt auf `fallback` zurück.
fn tangent_heading(tangent: DVec2, fallback: f64) -> Option<f64> {
    if tangent.length_squared() < TANGENT_EPS * TANGENT_EPS {
        None
    } else {
        Some(heading_from_delta(tangent))
    }
}

/// Löst das Heading für ein einzelnes Sample auf.
///
/// `fallback` ist das Heading des Ankers bzw. des zuvor zugewiesenen Samples
/// und greift bei degenerierter Tangente sowie im Manual-Modus.
pub fn resolve_heading(mode: HeadingMode, tangent: DVec2, fallback: f64, end_heading: f64) -> f64 {
    match mode {
        HeadingMode::Straight => norm_deg(end_heading),
        HeadingMode::Manual => norm_deg(fallback),
        HeadingMode::Tangent => norm_deg(tangent_heading(tangent, fallback).unwrap_or(fallback)),
        HeadingMode::OrthLeft => match tangent_heading(tangent, fallback) {
            Some(h) => norm_deg(h + 90.0),
            None => norm_deg(fallback),
        },
        HeadingMode::OrthRight => match tangent_heading(tangent, fallback) {
            Some(h) => norm_deg(h - 90.0),
            None => norm_deg(fallback),
        },
    }
}

/// Heading-Verlauf eines Straight-Übergangs über `count` Samples.
///
/// Interpoliert linear im Winkel von `from` nach `to` über den Sample-Index,
/// entlang des kürzesten vorzeichenbehafteten Deltas (wickelt korrekt durch
/// ±180°). Das letzte Sample wird exakt auf `to` gesetzt, damit kein
/// Rundungs-Drift am Segmentende übrig bleibt.
pub fn sweep_headings(from: f64, to: f64, count: usize) -> Vec<f64> {
    let delta = shortest_delta_deg(from, to);
    (1..=count)
        .map(|i| {
            if i == count {
                norm_deg(to)
            } else {
                norm_deg(from + delta * (i as f64 / count as f64))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tangent_modus_folgt_der_fahrtrichtung() {
        let h = resolve_heading(HeadingMode::Tangent, DVec2::new(1.0, 1.0), 0.0, 0.0);
        assert_relative_eq!(h, 45.0);
    }

    #[test]
    fn degenerierte_tangente_faellt_auf_anker_zurueck() {
        let h = resolve_heading(HeadingMode::Tangent, DVec2::ZERO, 33.0, 0.0);
        assert_relative_eq!(h, 33.0);
        let h = resolve_heading(HeadingMode::OrthLeft, DVec2::ZERO, 33.0, 0.0);
        assert_relative_eq!(h, 33.0);
    }

    #[test]
    fn straight_modus_nutzt_ziel_heading() {
        let h = resolve_heading(HeadingMode::Straight, DVec2::new(1.0, 0.0), 10.0, 270.0);
        assert_relative_eq!(h, -90.0);
    }

    #[test]
    fn manual_modus_behaelt_fallback() {
        let h = resolve_heading(HeadingMode::Manual, DVec2::new(0.0, 5.0), -45.0, 120.0);
        assert_relative_eq!(h, -45.0);
    }

    #[test]
    fn orth_modi_drehen_um_90_grad() {
        let tangent = DVec2::new(1.0, 0.0);
        assert_relative_eq!(resolve_heading(HeadingMode::OrthLeft, tangent, 0.0, 0.0), 90.0);
        assert_relative_eq!(resolve_heading(HeadingMode::OrthRight, tangent, 0.0, 0.0), -90.0);
    }

    #[test]
    fn sweep_endet_exakt_auf_dem_ziel() {
        let headings = sweep_headings(0.0, 90.0, 4);
        assert_eq!(headings.len(), 4);
        assert_relative_eq!(headings[0], 22.5);
        assert_relative_eq!(headings[3], 90.0);
    }

    #[test]
    fn sweep_wickelt_durch_180() {
        // 170° → -170°: kurzer Weg über +180, nicht rückwärts über 0
        let headings = sweep_headings(170.0, -170.0, 4);
        assert_relative_eq!(headings[0], 175.0);
        assert_relative_eq!(headings[1], 180.0);
        assert_relative_eq!(headings[2], -175.0);
        assert_relative_eq!(headings[3], -170.0);
    }

    #[test]
    fn sweep_mit_einem_sample_ist_das_ziel() {
        let headings = sweep_headings(45.0, 200.0, 1);
        assert_eq!(headings.len(), 1);
        assert_relative_eq!(headings[0], norm_deg(200.0));
    }
}
