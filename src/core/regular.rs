//! Regelmäßiges Polygon: Seitenanzahl und Seitenlänge.

use super::error::ShapeError;
use super::geometry;
use crate::shared::DrawSurface;
use glam::DVec2;

/// Regelmäßiges n-Eck.
///
/// Ein Polygon ist entweder vollständig (beide Felder gesetzt) oder ausstehend.
/// Die Skalierung ist kein Teil des Modells, sie wird beim Rendern übergeben.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegularPolygon {
    side_count: Option<u32>,
    side_length: Option<f64>,
}

impl RegularPolygon {
    /// Erstellt ein ausstehendes Polygon ohne Parameter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein vollständiges Polygon (z.B. beim Laden aus dem Store).
    pub fn with_params(side_count: i64, side_length: f64) -> Result<Self, ShapeError> {
        let mut polygon = Self::new();
        polygon.set_side_count(side_count)?;
        polygon.set_side_length(side_length)?;
        Ok(polygon)
    }

    /// Setzt die Seitenanzahl (mindestens 3).
    pub fn set_side_count(&mut self, side_count: i64) -> Result<(), ShapeError> {
        let count = geometry::checked_side_count(side_count)?;
        self.side_count = Some(count);
        Ok(())
    }

    /// Setzt die Seitenlänge (endlich und größer 0).
    pub fn set_side_length(&mut self, side_length: f64) -> Result<(), ShapeError> {
        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(ShapeError::InvalidSideLength);
        }
        self.side_length = Some(side_length);
        Ok(())
    }

    pub fn side_count(&self) -> Option<u32> {
        self.side_count
    }

    pub fn side_length(&self) -> Option<f64> {
        self.side_length
    }

    /// Gibt `true` zurück, wenn Seitenanzahl und Seitenlänge gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.params().is_some()
    }

    fn params(&self) -> Option<(u32, f64)> {
        Some((self.side_count?, self.side_length?))
    }

    /// Umfang in logischen Einheiten, gerundet auf 2 Stellen.
    pub fn perimeter(&self) -> Result<f64, ShapeError> {
        let (n, side) = self.params().ok_or(ShapeError::Incomplete)?;
        Ok(geometry::regular_perimeter(n, side))
    }

    /// Fläche in logischen Einheiten², gerundet auf 2 Stellen.
    pub fn area(&self) -> Result<f64, ShapeError> {
        let (n, side) = self.params().ok_or(ShapeError::Incomplete)?;
        Ok(geometry::regular_area(n, side))
    }

    /// Eckpunkt-Ring in Device-Koordinaten für die gegebene Skalierung.
    pub fn vertices(&self, origin: DVec2, scale: f64) -> Vec<DVec2> {
        match self.params() {
            Some((n, side)) => geometry::regular_vertices(n, side, origin, scale),
            None => Vec::new(),
        }
    }

    /// Zeichnet das geschlossene Polygon. Ausstehende Polygone zeichnen nichts.
    pub fn render(&self, surface: &mut dyn DrawSurface, scale: f64) {
        let origin = surface.to_device(DVec2::ZERO, scale);
        let ring = self.vertices(origin, scale);
        let Some(&first) = ring.first() else {
            return;
        };
        for pair in ring.windows(2) {
            surface.draw_segment(pair[0], pair[1]);
        }
        if let Some(&last) = ring.last() {
            surface.draw_segment(last, first);
        }
    }
}
