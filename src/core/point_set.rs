//! Geordnete Kontrollpunkt-Liste mit Hit-Test in Einfügereihenfolge.

use super::ControlPoint;

/// Ordnete, veränderbare Kontrollpunkt-Folge.
///
/// Die Reihenfolge definiert die Nachbarschaft für die Unterteilung und
/// bleibt über alle Mutationen erhalten. Punkte werden über ihren Index
/// adressiert, nie über Referenzen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<ControlPoint>,
}

impl PointSet {
    /// Erstellt eine leere Punktliste.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt ans Ende an und gibt seinen Index zurück.
    pub fn append(&mut self, point: ControlPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Sucht den **ersten** Punkt (Einfügereihenfolge) mit euklidischem
    /// Abstand `<= threshold` zum Klickpunkt.
    ///
    /// Es wird bewusst nicht der global nächste Punkt gesucht.
    pub fn find_near(&self, click: ControlPoint, threshold: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.as_dvec2().distance(click.as_dvec2()) <= threshold)
    }

    /// Setzt die Koordinaten eines bestehenden Punkts.
    ///
    /// Gibt `false` zurück, wenn der Index nicht existiert.
    pub fn set_position(&mut self, index: usize, position: ControlPoint) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Punkt an Index.
    pub fn get(&self, index: usize) -> Option<ControlPoint> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Reihenfolge.
    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }
}

impl FromIterator<ControlPoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = ControlPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> ControlPoint {
        ControlPoint::new(x, y)
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut set = PointSet::new();
        assert_eq!(set.append(p(5, 5)), 0);
        assert_eq!(set.append(p(1, 1)), 1);
        assert_eq!(set.append(p(9, 9)), 2);
        assert_eq!(set.as_slice(), &[p(5, 5), p(1, 1), p(9, 9)]);
    }

    #[test]
    fn test_find_near_prefers_insertion_order_over_proximity() {
        let set: PointSet = [p(0, 0), p(3, 0)].into_iter().collect();
        // Klick näher an B, beide innerhalb des Radius → A gewinnt
        assert_eq!(set.find_near(p(2, 0), 10.0), Some(0));
        assert_eq!(set.find_near(p(0, 0), 10.0), Some(0));
    }

    #[test]
    fn test_find_near_threshold_is_inclusive() {
        let set: PointSet = [p(0, 0)].into_iter().collect();
        assert_eq!(set.find_near(p(6, 8), 10.0), Some(0));
        assert_eq!(set.find_near(p(7, 8), 10.0), None);
    }

    #[test]
    fn test_find_near_empty_set() {
        assert_eq!(PointSet::new().find_near(p(0, 0), 10.0), None);
    }

    #[test]
    fn test_set_position_preserves_cardinality_and_order() {
        let mut set: PointSet = [p(0, 0), p(10, 0), p(20, 0)].into_iter().collect();
        assert!(set.set_position(1, p(50, 50)));
        assert!(set.set_position(1, p(60, 40)));
        assert_eq!(set.as_slice(), &[p(0, 0), p(60, 40), p(20, 0)]);
        assert!(!set.set_position(3, p(1, 1)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut set: PointSet = [p(0, 0), p(10, 0)].into_iter().collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }
}
