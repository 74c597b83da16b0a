//! Kreis-Marker für Kontrollpunkte.

use super::types::{color32, RenderContext};
use crate::core::ControlPoint;

/// Zeichnet einen Kreis (Outline) pro Kontrollpunkt.
pub(crate) fn render(ctx: &RenderContext, points: &[ControlPoint]) {
    let stroke = egui::Stroke::new(1.0, color32(ctx.options.point_color));
    for point in points {
        ctx.painter
            .circle_stroke(ctx.to_screen(*point), ctx.options.point_radius, stroke);
    }
}
