//! Sammlung fertiger Formen mit genau einem ausstehenden Eintrag.

/// Formen, die wissen, ob sie fertig konstruiert sind.
pub trait Completable {
    fn is_complete(&self) -> bool;
}

impl Completable for super::RegularPolygon {
    fn is_complete(&self) -> bool {
        super::RegularPolygon::is_complete(self)
    }
}

impl Completable for super::FreehandPolygon {
    fn is_complete(&self) -> bool {
        self.is_closed()
    }
}

/// Fertige Formen (nur Anhängen) plus ein separater ausstehender Eintrag.
#[derive(Debug, Clone)]
pub struct ShapeCollection<T> {
    completed: Vec<T>,
    current: T,
}

impl<T: Completable> ShapeCollection<T> {
    /// Erstellt eine leere Sammlung mit frischem ausstehenden Eintrag.
    pub fn new(pending: T) -> Self {
        Self {
            completed: Vec::new(),
            current: pending,
        }
    }

    /// Erstellt eine Sammlung aus geladenen, fertigen Formen.
    pub fn with_completed(completed: Vec<T>, pending: T) -> Self {
        Self { completed, current: pending }
    }

    /// Ist der ausstehende Eintrag fertig, wird er übernommen und durch
    /// `make_pending()` ersetzt. Gibt `true` zurück, wenn übernommen wurde.
    pub fn promote_if_complete(&mut self, make_pending: impl FnOnce() -> T) -> bool {
        if !self.current.is_complete() {
            return false;
        }
        let finished = std::mem::replace(&mut self.current, make_pending());
        self.completed.push(finished);
        true
    }

    /// Ersetzt alles durch einen einzelnen frischen ausstehenden Eintrag.
    pub fn clear(&mut self, pending: T) {
        self.completed.clear();
        self.current = pending;
    }

    pub fn completed(&self) -> &[T] {
        &self.completed
    }

    /// Zuletzt fertiggestellte Form.
    pub fn last_completed(&self) -> Option<&T> {
        self.completed.last()
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    /// Alle Einträge, fertige zuerst, der ausstehende zuletzt.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.completed.iter().chain(std::iter::once(&self.current))
    }

    /// Mutierbarer Zugriff auf alle Einträge (z.B. für Rescale).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.completed
            .iter_mut()
            .chain(std::iter::once(&mut self.current))
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegularPolygon;

    #[test]
    fn test_promote_moves_complete_current() {
        let mut shapes = ShapeCollection::new(RegularPolygon::new());
        assert!(!shapes.promote_if_complete(RegularPolygon::new));

        shapes.current_mut().set_side_count(3).expect("gültig");
        shapes.current_mut().set_side_length(2.0).expect("gültig");
        assert!(shapes.promote_if_complete(RegularPolygon::new));

        assert_eq!(shapes.completed_count(), 1);
        assert!(!shapes.current().is_complete());
        assert_eq!(shapes.iter().count(), 2);
    }

    #[test]
    fn test_clear_keeps_single_pending() {
        let complete = RegularPolygon::with_params(4, 1.0).expect("gültig");
        let mut shapes = ShapeCollection::with_completed(vec![complete], RegularPolygon::new());
        shapes.clear(RegularPolygon::new());
        assert_eq!(shapes.completed_count(), 0);
        assert!(shapes.last_completed().is_none());
    }
}
