//! Use-Case: Ergebnis eines Segment-Tools anwenden (Wegpunkte anhängen).

use crate::app::history::{UndoEntry, UndoStack};
use crate::app::tools::ToolResult;
use crate::core::PathModel;

/// Wendet ein `ToolResult` auf den Pfad an.
///
/// Hängt alle neuen Wegpunkte in einem Undo-Schritt an und gibt die
/// Anzahl der angehängten Punkte zurück.
pub fn apply_tool_result(path: &mut PathModel, history: &mut UndoStack, result: ToolResult) -> usize {
    if result.new_points.is_empty() {
        log::warn!("Tool-Ergebnis ohne Wegpunkte — nichts anzuwenden");
        return 0;
    }

    let kind = result.kind;
    let count = path.append_points(result.new_points);
    history.record(UndoEntry { kind, count });

    log::info!(
        "{}-Segment angewendet: {} Wegpunkte, Pfad hat jetzt {}",
        kind.label(),
        count,
        path.points.len()
    );
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::SegmentKind;
    use crate::core::{Pose, Waypoint};
    use crate::shared::EditorOptions;
    use glam::DVec2;

    #[test]
    fn anwenden_haengt_punkte_an_und_registriert_undo() {
        let options = EditorOptions::default();
        let mut path = PathModel::new(Pose::default(), &options);
        let mut history = UndoStack::new_with_capacity(8);

        let result = ToolResult {
            kind: SegmentKind::Bezier,
            new_points: vec![
                Waypoint::new(DVec2::new(12.0, 0.0), 0.0),
                Waypoint::new(DVec2::new(24.0, 0.0), 0.0),
            ],
        };
        assert_eq!(apply_tool_result(&mut path, &mut history, result), 2);
        assert_eq!(path.points.len(), 2);
        assert!(history.can_undo());
    }

    #[test]
    fn leeres_ergebnis_ist_ein_noop() {
        let options = EditorOptions::default();
        let mut path = PathModel::new(Pose::default(), &options);
        let mut history = UndoStack::new_with_capacity(8);

        let result = ToolResult {
            kind: SegmentKind::Line,
            new_points: Vec::new(),
        };
        assert_eq!(apply_tool_result(&mut path, &mut history, result), 0);
        assert!(history.is_empty());
    }
}
