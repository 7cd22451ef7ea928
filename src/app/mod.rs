//! Applikations-Schicht: Sitzung, Tools, Use-Cases, History, Playback.

pub mod history;
pub mod playback;
pub mod session;
pub mod tools;
pub mod use_cases;

pub use history::{UndoEntry, UndoStack};
pub use playback::{PlaybackClock, PlaybackState, SegmentProgress};
pub use session::EditorSession;
pub use tools::common::HeadingMode;
pub use tools::{PathTool, SegmentKind, ToolAction, ToolManager, ToolPreview, ToolResult};
