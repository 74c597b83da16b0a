//! Gemeinsame Typen der Sub-Renderer.

use crate::core::ControlPoint;
use crate::shared::EditorOptions;

/// Gemeinsamer Kontext für alle Sub-Renderer eines Frames.
pub(crate) struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    /// Linke obere Canvas-Ecke in Bildschirmkoordinaten
    pub origin: egui::Pos2,
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Canvas-Koordinate → Bildschirmposition.
    pub fn to_screen(&self, point: ControlPoint) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32, point.y as f32)
    }
}

/// RGBA-Float-Farbe → egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::color32;

    #[test]
    fn opaque_colors_convert_exactly() {
        assert_eq!(color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
        assert_eq!(color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
    }
}
