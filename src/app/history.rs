//! Undo-Stack über angehängte Wegpunkt-Läufe.
//!
//! Jeder Eintrag merkt sich nur, wie viele zuletzt angehängte Wegpunkte
//! eine User-Aktion rückgängig macht; der Pfad selbst bleibt die einzige
//! Datenquelle. LIFO mit begrenzter Tiefe.

use crate::app::tools::SegmentKind;

/// Ein Undo-Eintrag: Segment-Typ plus Anzahl der anzuhängenden Wegpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoEntry {
    /// Typ des erzeugenden Segments (für Status-Anzeige)
    pub kind: SegmentKind,
    /// Anzahl der Wegpunkte, die dieser Schritt angehängt hat
    pub count: usize,
}

/// Undo-Stack mit maximaler Tiefe.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
    max_depth: usize,
}

impl UndoStack {
    /// Erstellt einen neuen Undo-Stack mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Registriert einen Eintrag; bei voller Tiefe fällt der älteste raus.
    pub fn record(&mut self, entry: UndoEntry) {
        if self.max_depth > 0 && self.entries.len() >= self.max_depth {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Nimmt den jüngsten Eintrag vom Stack.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    /// Anzahl der Einträge auf dem Stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ist der Stack leer?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leert den Stack (z.B. bei "Pfad löschen").
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
