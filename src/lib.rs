//! Feld-Pfad-Editor-Kern als Library.
//! Geometrie- und Pfadaufbau-Engine exportiert für UI-Frontends und Tests.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use crate::app::{
    EditorSession, HeadingMode, PathTool, PlaybackClock, PlaybackState, SegmentKind,
    SegmentProgress, ToolAction, ToolManager, ToolPreview, ToolResult, UndoEntry, UndoStack,
};
pub use crate::core::{
    footprint_corners, rotate_local_to_world, snap_to_field, FieldTransform, LivePose, PathModel,
    Pose, Tag, Waypoint,
};
pub use crate::json::{parse_path_json, write_path_json, PathFile};
pub use crate::shared::{CurveSample, EditorOptions};
