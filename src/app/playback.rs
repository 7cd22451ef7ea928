//! Playback: bildet eine gefahrene Distanz auf Position und Heading entlang
//! der committeten Wegpunkt-Polyline ab.
//!
//! Die Animation läuft unabhängig davon, mit welchem Tool die Segmente
//! entstanden sind; konsumiert wird nur die finale Punktliste.

use glam::DVec2;

use crate::core::{Pose, Waypoint};
use crate::shared::angles::{norm_deg, shortest_delta_deg};
use crate::shared::curve_geometry::polyline_length;

/// Längen-Epsilon: kürzere Segmente gelten als degeneriert.
const SEGMENT_EPS: f64 = 1e-12;

/// Position auf der Polyline zu einer gefahrenen Distanz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProgress {
    /// Index des Segments (0 = Start-Pose → erster Wegpunkt)
    pub index: usize,
    /// Lokaler Parameter im Segment, [0, 1]
    pub t: f64,
    /// Interpolierte Position
    pub position: DVec2,
    /// Segment-Anfang
    pub from: DVec2,
    /// Segment-Ende
    pub to: DVec2,
}

/// Sucht das Segment, in dem die geklemmte Distanz liegt.
///
/// Degenerierte Segmente (aufeinanderfallende Nachbarpunkte) werden beim
/// Suchen übersprungen, brechen den Lauf aber nicht ab. `None` bei leerer
/// oder längenloser Polyline; der Aufrufer lässt den Playback-Zustand
/// dann unangetastet.
pub fn segment_progress(points: &[DVec2], distance: f64) -> Option<SegmentProgress> {
    if points.len() < 2 {
        return None;
    }
    let total = polyline_length(points);
    if total <= SEGMENT_EPS {
        return None;
    }

    let clamped = distance.clamp(0.0, total);
    let mut consumed = 0.0;
    for i in 0..points.len() - 1 {
        let from = points[i];
        let to = points[i + 1];
        let seg_len = from.distance(to);
        if seg_len <= SEGMENT_EPS {
            continue;
        }
        if clamped - consumed <= seg_len {
            let t = (clamped - consumed) / seg_len;
            return Some(SegmentProgress {
                index: i,
                t,
                position: from.lerp(to, t),
                from,
                to,
            });
        }
        consumed += seg_len;
    }

    // Distanz hat durch Rundung das letzte Segment überlaufen:
    // letztes nicht-degeneriertes Segment bei t = 1 festnageln
    for i in (0..points.len() - 1).rev() {
        let from = points[i];
        let to = points[i + 1];
        if from.distance(to) > SEGMENT_EPS {
            return Some(SegmentProgress {
                index: i,
                t: 1.0,
                position: to,
                from,
                to,
            });
        }
    }
    None
}

/// Heading an einer Playback-Position.
///
/// Interpoliert vom Start-Heading des Segments (Heading des vorherigen
/// Wegpunkts bzw. der Start-Pose beim ersten Segment) zum End-Heading
/// entlang des kürzesten vorzeichenbehafteten Deltas, re-normalisiert
/// auf (-180, 180].
pub fn interpolate_heading(index: usize, t: f64, start: &Pose, points: &[Waypoint]) -> f64 {
    if points.is_empty() {
        return start.heading;
    }
    let from = if index == 0 {
        start.heading
    } else {
        points[(index - 1).min(points.len() - 1)].heading
    };
    let to = points[index.min(points.len() - 1)].heading;
    norm_deg(from + shortest_delta_deg(from, to) * t.clamp(0.0, 1.0))
}

// ── Frame-Uhr ────────────────────────────────────────────────────

/// Zustand der Playback-Uhr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Gestoppt, Distanz 0
    #[default]
    Stopped,
    /// Läuft, Distanz wächst pro Frame
    Playing,
    /// Pausiert (auch nach Erreichen des Pfad-Endes)
    Paused,
}

/// Frame-getriebene Distanz-Uhr für die Pfad-Animation.
///
/// Pro Frame wächst die Distanz um `velocity · Δt`, geklemmt auf die
/// Pfadlänge. Der erste Frame nach Play hat keinen gültigen vorherigen
/// Zeitstempel und zählt als Δt = 0.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    /// Gefahrene Distanz in Zoll
    pub distance: f64,
    state: PlaybackState,
    last_tick: Option<f64>,
}

impl PlaybackClock {
    /// Erstellt eine gestoppte Uhr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Startet bzw. setzt die Wiedergabe fort.
    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
        self.last_tick = None;
    }

    /// Pausiert die Wiedergabe; die Distanz bleibt stehen.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
        self.last_tick = None;
    }

    /// Stoppt die Wiedergabe und setzt die Distanz auf 0 zurück.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.distance = 0.0;
        self.last_tick = None;
    }

    /// Frame-Callback: rückt die Distanz um `velocity · Δt` vor.
    ///
    /// Robust gegen unregelmäßige Frame-Deltas; rückwärts springende
    /// Zeitstempel zählen als Δt = 0. Bei Erreichen der Gesamtlänge
    /// wechselt die Uhr in den Pausen-Zustand. Gibt die aktuelle
    /// Distanz zurück.
    pub fn tick(&mut self, now_s: f64, velocity: f64, total_length: f64) -> f64 {
        if self.state != PlaybackState::Playing {
            return self.distance;
        }
        let dt = self
            .last_tick
            .map(|last| (now_s - last).max(0.0))
            .unwrap_or(0.0);
        self.last_tick = Some(now_s);

        let total = total_length.max(0.0);
        self.distance = (self.distance + velocity * dt).min(total);
        if self.distance >= total {
            self.state = PlaybackState::Paused;
            self.last_tick = None;
        }
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polyline() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 0.0), // degeneriertes Segment
            DVec2::new(10.0, 10.0),
        ]
    }

    #[test]
    fn distanz_null_liefert_den_ersten_punkt() {
        let progress = segment_progress(&polyline(), 0.0).expect("fortschritt");
        assert_eq!(progress.index, 0);
        assert_relative_eq!(progress.t, 0.0);
        assert_relative_eq!(progress.position.x, 0.0);
    }

    #[test]
    fn distanz_ueber_gesamtlaenge_pinnt_das_ende() {
        let progress = segment_progress(&polyline(), 999.0).expect("fortschritt");
        assert_relative_eq!(progress.t, 1.0);
        assert_relative_eq!(progress.position.x, 10.0);
        assert_relative_eq!(progress.position.y, 10.0);
    }

    #[test]
    fn degenerierte_segmente_werden_uebersprungen() {
        // Distanz 15 liegt im zweiten echten Segment, Index 2 (Index 1 ist degeneriert)
        let progress = segment_progress(&polyline(), 15.0).expect("fortschritt");
        assert_eq!(progress.index, 2);
        assert_relative_eq!(progress.position.x, 10.0);
        assert_relative_eq!(progress.position.y, 5.0);
    }

    #[test]
    fn position_ist_monoton_entlang_der_polyline() {
        let points = polyline();
        let mut travelled_prev = -1.0;
        for step in 0..=40 {
            let d = step as f64 * 0.5;
            let p = segment_progress(&points, d).expect("fortschritt");
            // Bogenlänge bis zur Position als Monotonie-Maß
            let travelled = match p.index {
                0 => p.position.x,
                _ => 10.0 + p.position.y,
            };
            assert!(travelled >= travelled_prev - 1e-9);
            travelled_prev = travelled;
        }
    }

    #[test]
    fn leere_oder_laengenlose_polyline_liefert_none() {
        assert!(segment_progress(&[], 5.0).is_none());
        assert!(segment_progress(&[DVec2::ZERO], 5.0).is_none());
        assert!(segment_progress(&[DVec2::ZERO, DVec2::ZERO], 5.0).is_none());
    }

    #[test]
    fn heading_interpoliert_vom_start() {
        let start = Pose::new(DVec2::ZERO, 0.0);
        let points = vec![Waypoint::new(DVec2::new(10.0, 0.0), 90.0)];
        assert_relative_eq!(interpolate_heading(0, 0.0, &start, &points), 0.0);
        assert_relative_eq!(interpolate_heading(0, 0.5, &start, &points), 45.0);
        assert_relative_eq!(interpolate_heading(0, 1.0, &start, &points), 90.0);
    }

    #[test]
    fn heading_wickelt_durch_180() {
        let start = Pose::new(DVec2::ZERO, 170.0);
        let points = vec![Waypoint::new(DVec2::new(10.0, 0.0), -170.0)];
        assert_relative_eq!(interpolate_heading(0, 0.5, &start, &points), 180.0);
        assert_relative_eq!(interpolate_heading(0, 0.75, &start, &points), -175.0);
    }

    #[test]
    fn uhr_erster_frame_zaehlt_nicht() {
        let mut clock = PlaybackClock::new();
        clock.play();
        // Kein vorheriger Zeitstempel → Δt = 0
        assert_relative_eq!(clock.tick(100.0, 30.0, 50.0), 0.0);
        assert_relative_eq!(clock.tick(100.5, 30.0, 50.0), 15.0);
    }

    #[test]
    fn uhr_klemmt_und_pausiert_am_ende() {
        let mut clock = PlaybackClock::new();
        clock.play();
        clock.tick(0.0, 30.0, 20.0);
        assert_relative_eq!(clock.tick(10.0, 30.0, 20.0), 20.0);
        assert_eq!(clock.state(), PlaybackState::Paused);

        // Weitere Ticks ändern nichts mehr
        assert_relative_eq!(clock.tick(11.0, 30.0, 20.0), 20.0);
    }

    #[test]
    fn stop_setzt_distanz_zurueck() {
        let mut clock = PlaybackClock::new();
        clock.play();
        clock.tick(0.0, 30.0, 100.0);
        clock.tick(1.0, 30.0, 100.0);
        assert!(clock.distance > 0.0);

        clock.stop();
        assert_eq!(clock.state(), PlaybackState::Stopped);
        assert_relative_eq!(clock.distance, 0.0);
    }

    #[test]
    fn rueckwaerts_springender_zeitstempel_ist_harmlos() {
        let mut clock = PlaybackClock::new();
        clock.play();
        clock.tick(5.0, 30.0, 100.0);
        let before = clock.tick(6.0, 30.0, 100.0);
        // Zeitstempel springt zurück → Δt = 0, Distanz bleibt
        assert_relative_eq!(clock.tick(2.0, 30.0, 100.0), before);
    }
}
