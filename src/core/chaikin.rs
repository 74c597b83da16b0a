//! Chaikin-Eckenschneiden: expandiert eine Kontrollpunkt-Folge in eine feste
//! Anzahl von Unterteilungsschritten.
//!
//! Koordinaten werden in `f64` interpoliert und anschließend **zur Null hin
//! abgeschnitten** (`as i32`), nicht gerundet. Die Drift über mehrere
//! Iterationen ist damit Teil des Verhaltens.

use super::ControlPoint;
use glam::DVec2;

/// Anzahl der Unterteilungs-Iterationen nach dem Ausgangspolygon.
pub const MAX_ITERATIONS: usize = 7;
/// Gewicht von `p0` für den Punkt Q (nahe am Kantenanfang).
pub const Q_RATIO: f64 = 0.75;
/// Gewicht von `p0` für den Punkt R (nahe am Kantenende).
pub const R_RATIO: f64 = 0.25;

/// Polylinie nach `k` Iterationen.
pub type Step = Vec<ControlPoint>;

/// Berechnet alle Schritte `0..=MAX_ITERATIONS` für die gegebenen Punkte.
///
/// Schritt 0 ist die Eingabe unverändert. Es findet keine Validierung statt:
/// Aufrufer sorgen für mindestens zwei Punkte. Ein einzelner Punkt wird pro
/// Iteration verdoppelt (Anfangs- und Endpunkt sind derselbe Punkt).
pub fn generate_steps(points: &[ControlPoint]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(MAX_ITERATIONS + 1);
    let mut current = points.to_vec();
    steps.push(current.clone());

    for _ in 0..MAX_ITERATIONS {
        current = apply_iteration(&current);
        steps.push(current.clone());
    }

    steps
}

/// Eine Iteration: Endpunkte bleiben, jede Kante wird durch Q und R ersetzt.
///
/// Für `n >= 1` Punkte entstehen genau `2n` Punkte. Eine leere Eingabe
/// bleibt leer.
pub fn apply_iteration(points: &[ControlPoint]) -> Step {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut next = Vec::with_capacity(points.len() * 2);
    next.push(first);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        next.push(intermediate_point(p0, p1, Q_RATIO));
        next.push(intermediate_point(p0, p1, R_RATIO));
    }
    next.push(last);
    next
}

/// `ratio · p0 + (1 - ratio) · p1`, komponentenweise zur Null hin abgeschnitten.
pub fn intermediate_point(p0: ControlPoint, p1: ControlPoint, ratio: f64) -> ControlPoint {
    let blended = ratio * p0.as_dvec2() + (1.0 - ratio) * p1.as_dvec2();
    truncate(blended)
}

fn truncate(v: DVec2) -> ControlPoint {
    // `as` schneidet ab (trunc), kein round
    ControlPoint::new(v.x as i32, v.y as i32)
}
