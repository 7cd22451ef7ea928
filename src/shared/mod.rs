//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält reine Geometrie und Konfiguration, die von `core` und `app`
//! gleichermaßen importiert werden, um direkte Abhängigkeiten zu vermeiden.

pub mod angles;
pub mod curve_geometry;
pub mod options;

pub use curve_geometry::CurveSample;
pub use options::EditorOptions;
