//! Zentrale Konfiguration für den Feld-Pfad-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Feld ────────────────────────────────────────────────────────────

/// Kantenlänge des quadratischen Spielfelds in Zoll (12 ft).
pub const FIELD_SIZE_IN: f64 = 144.0;
/// Raster-Schrittweite beim Snapping in Zoll (0 deaktiviert das Runden).
pub const SNAP_STEP_IN: f64 = 1.0;
/// Standard-Maßstab Canvas-Pixel pro Zoll.
pub const PIXELS_PER_INCH: f64 = 4.0;

// ── Curve-Sampler ───────────────────────────────────────────────────

/// Zoll pro Kurven-Sample (steuert Auflösung vs. Geschwindigkeit).
pub const SAMPLE_STEP_IN: f64 = 2.0;
/// Untere Schranke der Sample-Anzahl pro Kurve.
pub const CURVE_MIN_SAMPLES: usize = 8;
/// Obere Schranke der Sample-Anzahl für Bézier-Kurven.
pub const BEZIER_MAX_SAMPLES: usize = 64;
/// Obere Schranke der Sample-Anzahl für Kreisbögen.
pub const ARC_MAX_SAMPLES: usize = 72;
/// Determinanten-Epsilon für den Kollinearitäts-Check beim Umkreis.
pub const COLLINEAR_EPS: f64 = 1e-6;

// ── Freihand-Fit ────────────────────────────────────────────────────

/// Mindestabstand (Zoll) zwischen aufeinanderfolgenden Roh-Samples eines Strokes.
pub const STROKE_DEDUPE_DIST_IN: f64 = 0.5;
/// Minimale legale Segmentlänge in Zoll (verwirft Mikro-Strokes).
pub const MIN_SEGMENT_LENGTH_IN: f64 = 1.0;
/// Score-Malus für den Linien-Kandidaten (glatte Kurven werden bevorzugt).
pub const FIT_PENALTY_LINE: f64 = 0.12;
/// Score-Malus für den Bogen-Kandidaten.
pub const FIT_PENALTY_ARC: f64 = 0.04;
/// Score-Malus für den Bézier-Kandidaten.
pub const FIT_PENALTY_BEZIER: f64 = 0.0;
/// Minimaler Lateral-Abstand (Zoll) des gefitteten Kontrollpunkts zur Sehne.
/// Darunter ist der Bézier-Kandidat zur Linie degeneriert und wird verworfen.
pub const BEZIER_CONTROL_MIN_OFFSET_IN: f64 = 0.75;
/// Minimaler Gesamt-Sweep (Radiant) eines Bogen-Kandidaten.
pub const ARC_MIN_SWEEP_RAD: f64 = 0.05;
/// Maximaler Radius (Zoll) eines Bogen-Kandidaten; größere Radien sind
/// auf Feldgröße praktisch Geraden.
pub const ARC_MAX_RADIUS_IN: f64 = 300.0;

// ── Playback ────────────────────────────────────────────────────────

/// Standard-Abspielgeschwindigkeit in Zoll pro Sekunde.
pub const DEFAULT_VELOCITY_IN_PER_S: f64 = 30.0;
/// Standard-Positionstoleranz des exportierten Pfads in Zoll.
pub const DEFAULT_TOLERANCE_IN: f64 = 1.0;

// ── Roboter ─────────────────────────────────────────────────────────

/// Footprint-Länge des Roboters entlang lokal +x in Zoll.
pub const ROBOT_LENGTH_IN: f64 = 18.0;
/// Footprint-Breite des Roboters entlang lokal +y in Zoll.
pub const ROBOT_WIDTH_IN: f64 = 18.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Tiefe des Undo-Stacks.
pub const UNDO_MAX_DEPTH: usize = 64;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `field_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Feld ────────────────────────────────────────────────────
    /// Kantenlänge des Spielfelds in Zoll
    pub field_size_in: f64,
    /// Raster-Schrittweite beim Snapping (0 = nur Clamping)
    pub snap_step_in: f64,
    /// Canvas-Pixel pro Zoll
    pub pixels_per_inch: f64,

    // ── Sampler ─────────────────────────────────────────────────
    /// Zoll pro Kurven-Sample
    pub sample_step_in: f64,
    /// Untere Schranke der Sample-Anzahl pro Kurve
    pub curve_min_samples: usize,
    /// Obere Schranke für Bézier-Kurven
    pub bezier_max_samples: usize,
    /// Obere Schranke für Kreisbögen
    pub arc_max_samples: usize,

    // ── Freihand ────────────────────────────────────────────────
    /// Mindestabstand zwischen Stroke-Samples in Zoll
    pub stroke_dedupe_dist_in: f64,
    /// Minimale legale Segmentlänge in Zoll
    pub min_segment_length_in: f64,
    /// Score-Malus des Linien-Kandidaten
    pub fit_penalty_line: f64,
    /// Score-Malus des Bogen-Kandidaten
    pub fit_penalty_arc: f64,
    /// Score-Malus des Bézier-Kandidaten
    #[serde(default = "default_fit_penalty_bezier")]
    pub fit_penalty_bezier: f64,

    // ── Roboter ─────────────────────────────────────────────────
    /// Footprint-Länge entlang lokal +x in Zoll
    pub robot_length_in: f64,
    /// Footprint-Breite entlang lokal +y in Zoll
    pub robot_width_in: f64,

    // ── Playback / Export ───────────────────────────────────────
    /// Standard-Abspielgeschwindigkeit in Zoll pro Sekunde
    pub default_velocity: f64,
    /// Standard-Positionstoleranz in Zoll
    pub default_tolerance: f64,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Tiefe des Undo-Stacks
    #[serde(default = "default_undo_max_depth")]
    pub undo_max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            field_size_in: FIELD_SIZE_IN,
            snap_step_in: SNAP_STEP_IN,
            pixels_per_inch: PIXELS_PER_INCH,

            sample_step_in: SAMPLE_STEP_IN,
            curve_min_samples: CURVE_MIN_SAMPLES,
            bezier_max_samples: BEZIER_MAX_SAMPLES,
            arc_max_samples: ARC_MAX_SAMPLES,

            stroke_dedupe_dist_in: STROKE_DEDUPE_DIST_IN,
            min_segment_length_in: MIN_SEGMENT_LENGTH_IN,
            fit_penalty_line: FIT_PENALTY_LINE,
            fit_penalty_arc: FIT_PENALTY_ARC,
            fit_penalty_bezier: FIT_PENALTY_BEZIER,

            robot_length_in: ROBOT_LENGTH_IN,
            robot_width_in: ROBOT_WIDTH_IN,

            default_velocity: DEFAULT_VELOCITY_IN_PER_S,
            default_tolerance: DEFAULT_TOLERANCE_IN,

            undo_max_depth: UNDO_MAX_DEPTH,
        }
    }
}

/// Serde-Default für `fit_penalty_bezier` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_fit_penalty_bezier() -> f64 {
    FIT_PENALTY_BEZIER
}

/// Serde-Default für `undo_max_depth` (Abwärtskompatibilität).
fn default_undo_max_depth() -> usize {
    UNDO_MAX_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("field_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("field_path_editor.toml")
    }

    /// Halbe Feldkante in Zoll (Feldgrenze auf beiden Achsen).
    pub fn field_half(&self) -> f64 {
        self.field_size_in / 2.0
    }
}
