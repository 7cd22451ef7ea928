//! Core-Domänentypen: Posen, Wegpunkte, Pfad-Modell, Feld-Transformation.

pub mod field;
pub mod path;
pub mod pose;

pub use field::{footprint_corners, rotate_local_to_world, snap_to_field, FieldTransform};
pub use path::PathModel;
pub use pose::{LivePose, Pose, Tag, Waypoint};
