//! Gemeinsame Bausteine für Segment-Tools.

pub mod builder;
pub mod heading;

pub use builder::{HeadingSpec, SegmentRecord};
pub use heading::HeadingMode;
