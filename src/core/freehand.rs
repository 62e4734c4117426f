//! Freihand-Polygon: schrittweiser Aufbau aus (Seitenlänge, Winkel)-Paaren.
//!
//! Ablauf:
//! 1. Seitenanzahl setzen → `AwaitingFirstSide`
//! 2. Erste Kante braucht nur eine Seitenlänge (Richtung: +x)
//! 3. Jede weitere Kante braucht eine frische Seitenlänge *und* einen frischen
//!    Winkel, in beliebiger Reihenfolge
//! 4. Sind `side_count` Eckpunkte vorhanden, schließt der nächste Tick die Form
//!    automatisch zum Startpunkt → `Closed`
//!
//! Eckpunkte liegen immer in Device-Koordinaten der aktuellen Skalierung.

use super::error::{ShapeError, SideCountIssue};
use super::geometry::{self, UNIT_PER_SIDE};
use crate::shared::DrawSurface;
use glam::DVec2;

/// Toleranz beim Vergleich von Start- und Schlusspunkt geladener Formen.
const CLOSE_EPSILON: f64 = 1e-6;

/// Konstruktionsphase eines Freihand-Polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionState {
    /// Seitenanzahl fehlt noch
    AwaitingSideCount,
    /// Erste Kante: nur Seitenlänge nötig
    AwaitingFirstSide,
    /// Weitere Kanten: Seitenlänge und Winkel nötig
    AwaitingSideAndAngle,
    /// Form geschlossen, nur noch Rescale erlaubt
    Closed,
}

/// Freihand-Polygon (Builder und fertige Form zugleich)
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandPolygon {
    side_count: Option<u32>,
    vertices: Vec<DVec2>,
    state: ConstructionState,
    loaded: bool,
    scale: f64,
    pending_side: Option<f64>,
    pending_angle: Option<f64>,
}

impl FreehandPolygon {
    /// Erstellt ein neues, ausstehendes Polygon mit Startpunkt `start`.
    pub fn new(start: DVec2, scale: f64) -> Self {
        Self {
            side_count: None,
            vertices: vec![start],
            state: ConstructionState::AwaitingSideCount,
            loaded: false,
            scale,
            pending_side: None,
            pending_angle: None,
        }
    }

    /// Gibt `true` zurück, wenn der Punktzug wieder am Startpunkt endet.
    pub fn is_closed_ring(points: &[DVec2]) -> bool {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => first.distance(*last) <= CLOSE_EPSILON,
            _ => false,
        }
    }

    /// Rekonstruiert eine gespeicherte Form (Device-Koordinaten bei Skalierung 1.0).
    ///
    /// Erwartet mindestens ein Dreieck plus Schlusspunkt, Schlusspunkt = Startpunkt.
    pub fn from_loaded(points: Vec<DVec2>) -> Result<Self, ShapeError> {
        let Some(&first) = points.first() else {
            return Err(ShapeError::corrupt(0, "freehand shape without points"));
        };
        if points.len() < 4 {
            return Err(ShapeError::corrupt(
                0,
                format!("freehand shape needs at least 4 points, got {}", points.len()),
            ));
        }
        if !Self::is_closed_ring(&points) {
            return Err(ShapeError::corrupt(0, "freehand shape is not closed"));
        }

        let side_count = i64::try_from(points.len() - 1)
            .map_err(|_| ShapeError::InvalidSideCount(SideCountIssue::TooMany))
            .and_then(geometry::checked_side_count)
            .map_err(|e| ShapeError::corrupt(0, format!("invalid freehand shape: {e}")))?;
        let mut vertices = points;
        // Schlusspunkt exakt auf den Start legen, damit Rescale ihn nicht verschiebt
        if let Some(closing) = vertices.last_mut() {
            *closing = first;
        }

        Ok(Self {
            side_count: Some(side_count),
            vertices,
            state: ConstructionState::Closed,
            loaded: true,
            scale: 1.0,
            pending_side: None,
            pending_angle: None,
        })
    }

    /// Setzt die Ziel-Seitenanzahl. Nur erlaubt, solange noch keine Kante existiert.
    pub fn set_side_count(&mut self, side_count: i64) -> Result<(), ShapeError> {
        self.ensure_editable()?;
        if !matches!(
            self.state,
            ConstructionState::AwaitingSideCount | ConstructionState::AwaitingFirstSide
        ) {
            return Err(ShapeError::ImmutableShape);
        }
        let count = geometry::checked_side_count(side_count)?;

        self.side_count = Some(count);
        self.vertices.truncate(1);
        self.state = ConstructionState::AwaitingFirstSide;
        Ok(())
    }

    /// Nimmt eine Seitenlänge entgegen und hängt ggf. sofort einen Eckpunkt an.
    pub fn submit_side(&mut self, length: f64) -> Result<(), ShapeError> {
        self.ensure_accepts_edges()?;
        if !length.is_finite() || length <= 0.0 {
            return Err(ShapeError::InvalidSideLength);
        }
        self.pending_side = Some(length);
        self.try_append();
        Ok(())
    }

    /// Nimmt einen Winkel (Grad, gegen den Uhrzeigersinn zur x-Achse) entgegen.
    pub fn submit_angle(&mut self, angle_deg: f64) -> Result<(), ShapeError> {
        self.ensure_accepts_edges()?;
        if !angle_deg.is_finite() {
            return Err(ShapeError::InvalidAngle);
        }
        self.pending_angle = Some(angle_deg);
        self.try_append();
        Ok(())
    }

    /// Frame-Schritt: schließt die Form, sobald alle freien Eckpunkte gesetzt sind.
    ///
    /// Gibt `true` zurück, wenn die Form in diesem Tick geschlossen wurde.
    pub fn tick(&mut self) -> bool {
        if self.state != ConstructionState::AwaitingSideAndAngle {
            return false;
        }
        let Some(side_count) = self.side_count else {
            return false;
        };
        if self.vertices.len() != side_count as usize {
            return false;
        }

        self.vertices.push(self.start());
        self.state = ConstructionState::Closed;
        self.pending_side = None;
        self.pending_angle = None;
        true
    }

    /// Projiziert alle Eckpunkte außer dem Start auf eine neue Skalierung.
    pub fn rescale(&mut self, new_scale: f64) {
        if new_scale == self.scale || !new_scale.is_finite() || new_scale <= 0.0 {
            return;
        }
        let start = self.start();
        let old_scale = self.scale;
        for vertex in self.vertices.iter_mut().skip(1) {
            *vertex = geometry::rescale_point(*vertex, start, old_scale, new_scale);
        }
        self.scale = new_scale;
    }

    fn ensure_editable(&self) -> Result<(), ShapeError> {
        if self.loaded || self.state == ConstructionState::Closed {
            return Err(ShapeError::ImmutableShape);
        }
        Ok(())
    }

    fn ensure_accepts_edges(&self) -> Result<(), ShapeError> {
        self.ensure_editable()?;
        if self.state == ConstructionState::AwaitingSideCount {
            return Err(ShapeError::SideCountMissing);
        }
        Ok(())
    }

    fn try_append(&mut self) {
        let last = self.vertices[self.vertices.len() - 1];
        match self.state {
            ConstructionState::AwaitingFirstSide => {
                let Some(length) = self.pending_side.take() else {
                    return;
                };
                self.pending_angle = None;
                self.vertices
                    .push(last + DVec2::new(length * UNIT_PER_SIDE / self.scale, 0.0));
                self.state = ConstructionState::AwaitingSideAndAngle;
            }
            ConstructionState::AwaitingSideAndAngle => {
                let Some(side_count) = self.side_count else {
                    return;
                };
                if self.vertices.len() >= side_count as usize {
                    return;
                }
                let (Some(length), Some(angle)) = (self.pending_side, self.pending_angle) else {
                    return;
                };
                self.pending_side = None;
                self.pending_angle = None;
                self.vertices
                    .push(geometry::freehand_step(last, length, angle, self.scale));
            }
            ConstructionState::AwaitingSideCount | ConstructionState::Closed => {}
        }
    }

    /// Startpunkt (immer der erste Eckpunkt).
    pub fn start(&self) -> DVec2 {
        self.vertices[0]
    }

    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    pub fn state(&self) -> ConstructionState {
        self.state
    }

    pub fn side_count(&self) -> Option<u32> {
        self.side_count
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Ob die Form aus dem Store geladen wurde.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_closed(&self) -> bool {
        self.state == ConstructionState::Closed
    }

    /// Ob seit dem letzten Eckpunkt bereits eine Seitenlänge bzw. ein Winkel vorliegt.
    pub fn pending_inputs(&self) -> (bool, bool) {
        (self.pending_side.is_some(), self.pending_angle.is_some())
    }

    /// Eckpunkte umgerechnet auf eine andere Skalierung (z.B. 1.0 für den Store).
    pub fn points_at_scale(&self, target_scale: f64) -> Vec<DVec2> {
        let start = self.start();
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    p
                } else {
                    geometry::rescale_point(p, start, self.scale, target_scale)
                }
            })
            .collect()
    }

    /// Umfang des bisher gezeichneten Linienzugs (auch bei unfertiger Form).
    pub fn perimeter(&self) -> f64 {
        geometry::polyline_perimeter(&self.vertices, self.scale)
    }

    /// Schnürsenkel-Fläche des bisher gezeichneten Linienzugs.
    pub fn area(&self) -> f64 {
        geometry::shoelace_area(&self.vertices, self.scale)
    }

    /// Statuszeile für die Eingabemaske.
    pub fn status_text(&self) -> &'static str {
        match self.state {
            ConstructionState::AwaitingSideCount => "Enter the number of sides",
            ConstructionState::AwaitingFirstSide => "Enter the first side length",
            ConstructionState::AwaitingSideAndAngle => "Enter side length and angle",
            ConstructionState::Closed => "Shape closed",
        }
    }

    /// Zeichnet den Linienzug in gespeicherter Reihenfolge.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for pair in self.vertices.windows(2) {
            surface.draw_segment(pair[0], pair[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::DEFAULT_ORIGIN;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn started(side_count: i64) -> FreehandPolygon {
        let mut polygon = FreehandPolygon::new(DEFAULT_ORIGIN, 1.0);
        polygon
            .set_side_count(side_count)
            .expect("Seitenanzahl sollte gültig sein");
        polygon
    }

    #[test]
    fn test_square_scenario_closes_on_tick() {
        let mut polygon = started(4);
        assert_eq!(polygon.state(), ConstructionState::AwaitingFirstSide);

        polygon.submit_side(10.0).expect("erste Seite");
        assert_eq!(polygon.vertices().len(), 2);

        polygon.submit_side(10.0).expect("zweite Seite");
        polygon.submit_angle(90.0).expect("zweiter Winkel");
        assert_eq!(polygon.vertices().len(), 3);

        polygon.submit_side(10.0).expect("dritte Seite");
        polygon.submit_angle(180.0).expect("dritter Winkel");
        assert_eq!(polygon.vertices().len(), 4);
        assert_eq!(polygon.state(), ConstructionState::AwaitingSideAndAngle);

        assert!(polygon.tick());
        assert_eq!(polygon.vertices().len(), 5);
        assert_eq!(polygon.state(), ConstructionState::Closed);
        assert_eq!(polygon.vertices()[0], polygon.vertices()[4]);

        assert_relative_eq!(polygon.perimeter(), 40.0);
        assert_relative_eq!(polygon.area(), 100.0);
    }

    #[test]
    fn test_angle_may_arrive_before_side() {
        let mut polygon = started(3);
        polygon.submit_side(5.0).expect("erste Seite");

        polygon.submit_angle(120.0).expect("Winkel zuerst");
        assert_eq!(polygon.vertices().len(), 2);
        assert_eq!(polygon.pending_inputs(), (false, true));

        polygon.submit_side(5.0).expect("dann Seite");
        assert_eq!(polygon.vertices().len(), 3);
        assert_eq!(polygon.pending_inputs(), (false, false));
    }

    #[test]
    fn test_each_vertex_needs_fresh_pair() {
        let mut polygon = started(5);
        polygon.submit_side(5.0).expect("erste Seite");
        polygon.submit_side(5.0).expect("Seite");
        polygon.submit_angle(30.0).expect("Winkel");
        assert_eq!(polygon.vertices().len(), 3);

        // Nur ein neuer Winkel reicht nicht
        polygon.submit_angle(60.0).expect("Winkel");
        assert_eq!(polygon.vertices().len(), 3);
    }

    #[test]
    fn test_tick_does_not_close_early() {
        let mut polygon = started(4);
        polygon.submit_side(10.0).expect("erste Seite");
        assert!(!polygon.tick());
        assert_eq!(polygon.state(), ConstructionState::AwaitingSideAndAngle);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut polygon = FreehandPolygon::new(DEFAULT_ORIGIN, 1.0);
        assert_eq!(
            polygon.set_side_count(2),
            Err(ShapeError::InvalidSideCount(SideCountIssue::TooFew))
        );
        assert_eq!(
            polygon.set_side_count(-1),
            Err(ShapeError::InvalidSideCount(SideCountIssue::TooFew))
        );
        assert_eq!(polygon.submit_side(3.0), Err(ShapeError::SideCountMissing));

        polygon.set_side_count(4).expect("gültig");
        assert_eq!(polygon.submit_side(0.0), Err(ShapeError::InvalidSideLength));
        assert_eq!(polygon.submit_side(-5.0), Err(ShapeError::InvalidSideLength));
        assert_eq!(polygon.submit_angle(f64::NAN), Err(ShapeError::InvalidAngle));
        assert_eq!(polygon.vertices().len(), 1);
    }

    #[test]
    fn test_side_count_locked_after_first_edge() {
        let mut polygon = started(4);
        polygon.set_side_count(6).expect("vor der ersten Kante änderbar");
        assert_eq!(polygon.side_count(), Some(6));

        polygon.submit_side(1.0).expect("erste Seite");
        assert_eq!(polygon.set_side_count(3), Err(ShapeError::ImmutableShape));
    }

    #[test]
    fn test_closed_rejects_input() {
        let mut polygon = started(3);
        polygon.submit_side(3.0).expect("erste Seite");
        polygon.submit_side(3.0).expect("Seite");
        polygon.submit_angle(120.0).expect("Winkel");
        assert!(polygon.tick());
        assert_eq!(polygon.submit_side(1.0), Err(ShapeError::ImmutableShape));
        assert_eq!(polygon.submit_angle(1.0), Err(ShapeError::ImmutableShape));
    }

    #[test]
    fn test_loaded_shape_is_immutable_but_rescalable() {
        let points = vec![
            DVec2::new(250.0, 275.0),
            DVec2::new(310.0, 275.0),
            DVec2::new(310.0, 315.0),
            DVec2::new(250.0, 275.0),
        ];
        let mut polygon = FreehandPolygon::from_loaded(points).expect("gültige Form");
        assert!(polygon.is_loaded());
        assert!(polygon.is_closed());
        assert_eq!(polygon.side_count(), Some(3));
        assert_eq!(polygon.set_side_count(4), Err(ShapeError::ImmutableShape));
        assert_eq!(polygon.submit_side(4.0), Err(ShapeError::ImmutableShape));

        polygon.rescale(2.0);
        assert_eq!(polygon.vertices()[1], DVec2::new(280.0, 275.0));
        assert_eq!(polygon.vertices()[3], polygon.vertices()[0]);
        // Logische Maße bleiben erhalten
        assert_relative_eq!(polygon.area(), 12.0);
    }

    #[test]
    fn test_from_loaded_rejects_open_or_short_shapes() {
        let open = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        assert!(matches!(
            FreehandPolygon::from_loaded(open),
            Err(ShapeError::CorruptPersistedData { .. })
        ));

        let short = vec![DVec2::ZERO, DVec2::X, DVec2::ZERO];
        assert!(FreehandPolygon::from_loaded(short).is_err());
    }

    #[test]
    fn test_from_loaded_rejects_too_many_points() {
        let n = geometry::MAX_SIDE_COUNT as usize + 1;
        let mut ring: Vec<DVec2> = (0..n).map(|i| DVec2::new(i as f64, (i % 2) as f64)).collect();
        ring.push(ring[0]);
        assert!(matches!(
            FreehandPolygon::from_loaded(ring),
            Err(ShapeError::CorruptPersistedData { .. })
        ));
    }

    #[test]
    fn test_rescale_noop_on_same_scale() {
        let mut polygon = started(4);
        polygon.submit_side(10.0).expect("erste Seite");
        let before = polygon.clone();
        polygon.rescale(1.0);
        assert_eq!(polygon, before);
    }

    #[test]
    fn test_new_edges_use_current_scale() {
        let mut polygon = started(4);
        polygon.rescale(2.0);
        polygon.submit_side(10.0).expect("erste Seite");
        assert_eq!(polygon.vertices()[1], DEFAULT_ORIGIN + DVec2::new(50.0, 0.0));
        assert_relative_eq!(polygon.perimeter(), 10.0);
    }

    #[test]
    fn test_points_at_scale_normalizes() {
        let mut polygon = started(4);
        polygon.submit_side(10.0).expect("erste Seite");
        polygon.rescale(4.0);
        let normalized = polygon.points_at_scale(1.0);
        assert_relative_eq!(normalized[1].x, DEFAULT_ORIGIN.x + 100.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_rescale_roundtrip_restores_vertices(s1 in 0.125f64..512.0, s2 in 0.125f64..512.0) {
            let mut polygon = started(5);
            polygon.submit_side(7.5).expect("erste Seite");
            polygon.submit_side(3.0).expect("Seite");
            polygon.submit_angle(72.0).expect("Winkel");
            polygon.rescale(s1);
            let original = polygon.vertices().to_vec();

            polygon.rescale(s2);
            polygon.rescale(s1);

            for (a, b) in original.iter().zip(polygon.vertices()) {
                prop_assert!((*a - *b).length() < 1e-6);
            }
        }
    }
}
