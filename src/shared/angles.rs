//! Winkel- und Skalar-Hilfsfunktionen.
//!
//! Alle Headings im Editor sind Grad-Werte, normalisiert auf (-180, 180].
//! Layer-neutral: wird von `core`, `app` und Tests gleichermaßen importiert.

use glam::DVec2;

/// Normalisiert einen Winkel (Grad) auf das Intervall (-180, 180].
pub fn norm_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Kürzester vorzeichenbehafteter Winkelabstand von `from` nach `to` (Grad).
///
/// Ergebnis liegt in (-180, 180]; es gilt `norm_deg(from + delta) == norm_deg(to)`.
pub fn shortest_delta_deg(from: f64, to: f64) -> f64 {
    norm_deg(to - from)
}

/// Heading (Grad) aus einem Welt-Delta.
///
/// Konvention des Editors: +x = vorwärts = 0°, +y = links = 90°,
/// positiv gegen den Uhrzeigersinn.
pub fn heading_from_delta(delta: DVec2) -> f64 {
    norm_deg(delta.y.atan2(delta.x).to_degrees())
}

/// Nachsichtiger f64-Parser für Benutzereingaben.
///
/// Nicht parsebare oder nicht-endliche Eingaben liefern `fallback` statt NaN,
/// damit fehlerhafter Text niemals die Zeichenmathematik korrumpiert.
pub fn lenient_f64_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Nachsichtiger f64-Parser mit dokumentiertem Default 0.0.
pub fn lenient_f64(text: &str) -> f64 {
    lenient_f64_or(text, 0.0)
}
