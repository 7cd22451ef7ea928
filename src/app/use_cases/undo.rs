//! Use-Cases: letzten Schritt rückgängig machen, Pfad leeren.

use crate::app::history::UndoStack;
use crate::core::PathModel;

/// Macht den jüngsten Anhäng-Schritt rückgängig.
///
/// Entfernt die im Undo-Eintrag vermerkte Anzahl Wegpunkte vom Pfad-Ende
/// und gibt sie zurück; 0 wenn nichts rückgängig zu machen ist.
pub fn undo_last(path: &mut PathModel, history: &mut UndoStack) -> usize {
    let Some(entry) = history.pop() else {
        log::warn!("Undo ohne Einträge — nichts zu tun");
        return 0;
    };
    path.truncate_last(entry.count);
    log::info!(
        "{}-Segment rückgängig: {} Wegpunkte entfernt, Pfad hat jetzt {}",
        entry.kind.label(),
        entry.count,
        path.points.len()
    );
    entry.count
}

/// Leert die Wegpunkt-Liste und den Undo-Stack.
pub fn clear_path(path: &mut PathModel, history: &mut UndoStack) {
    let removed = path.points.len();
    path.clear();
    history.clear();
    log::info!("Pfad geleert: {} Wegpunkte entfernt", removed);
}
