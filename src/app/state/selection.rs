/// Auswahlbezogener Anwendungszustand
///
/// Hält nur einen Index in die Punktliste, keine Referenz auf den Punkt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index des aktuell gezogenen Kontrollpunkts
    pub dragged_index: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            dragged_index: None,
        }
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged_index.is_some()
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.dragged_index = None;
    }
}
