//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::ControlPoint;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte (Marker)
    pub control_points: Vec<ControlPoint>,
    /// Polylinie des aktiven Schritts, ohne Snapshot die Kontrollpunkte selbst
    pub active_points: Vec<ControlPoint>,
    /// Fehlerflag (zu wenige Punkte beim Start)
    pub error: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Ob eine Polylinie gezeichnet werden soll.
    pub fn has_polyline(&self) -> bool {
        !self.control_points.is_empty() && self.active_points.len() >= 2
    }
}
