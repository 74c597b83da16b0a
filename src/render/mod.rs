//! Canvas-Rendering mit dem egui-Painter.
//!
//! Der Renderer enthält keine Logik: er zeichnet nur, was die
//! `RenderScene` vorgibt.

mod curve_renderer;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
use crate::shared::ERROR_MESSAGE;
use types::{color32, RenderContext};

/// Position der Fehlermeldung relativ zur Canvas-Ecke.
const ERROR_TEXT_OFFSET: egui::Vec2 = egui::vec2(20.0, 20.0);

/// Rendert die komplette Szene in `rect`.
pub fn render_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let ctx = RenderContext {
        painter,
        origin: rect.min,
        options: &scene.options,
    };

    // 1. Hintergrund
    painter.rect_filled(rect, 0.0, color32(scene.options.background_color));

    // 2. Fehlermeldung
    if scene.error {
        painter.text(
            rect.min + ERROR_TEXT_OFFSET,
            egui::Align2::LEFT_BOTTOM,
            ERROR_MESSAGE,
            egui::FontId::proportional(14.0),
            color32(scene.options.error_color),
        );
    }

    // 3. Kontrollpunkte
    point_renderer::render(&ctx, &scene.control_points);

    // 4. Polylinie (nur wenn Kontrollpunkte existieren)
    if scene.has_polyline() {
        curve_renderer::render(&ctx, &scene.active_points);
    }
}
