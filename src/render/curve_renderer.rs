//! Polylinie des aktiven Schritts.

use super::types::{color32, RenderContext};
use crate::core::ControlPoint;

/// Zeichnet Liniensegmente zwischen aufeinanderfolgenden Punkten.
///
/// Weniger als zwei Punkte ergeben nichts.
pub(crate) fn render(ctx: &RenderContext, points: &[ControlPoint]) {
    if points.len() < 2 {
        return;
    }
    let stroke = egui::Stroke::new(
        ctx.options.curve_stroke_width,
        color32(ctx.options.curve_color),
    );
    let screen: Vec<egui::Pos2> = points.iter().map(|p| ctx.to_screen(*p)).collect();
    ctx.painter.add(egui::Shape::line(screen, stroke));
}
