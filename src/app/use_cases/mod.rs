//! Zentrale Mutations-Use-Cases: Tools liefern reine Daten, hier wird angewendet.

mod apply_tool_result;
mod undo;

pub use apply_tool_result::apply_tool_result;
pub use undo::{clear_path, undo_last};
