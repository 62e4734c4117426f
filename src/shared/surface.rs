//! Zeichenflächen-Vertrag zwischen Formen und Renderer.

use crate::core::geometry::UNIT_PER_SIDE;
use glam::DVec2;

/// Minimale Zeichenfläche: Liniensegmente in Device-Koordinaten.
pub trait DrawSurface {
    /// Zeichnet ein Segment zwischen zwei Device-Punkten.
    fn draw_segment(&mut self, from: DVec2, to: DVec2);

    /// Device-Position des logischen Ursprungs.
    fn origin(&self) -> DVec2;

    /// Bildet einen logischen Punkt auf Device-Koordinaten ab.
    fn to_device(&self, logical: DVec2, scale: f64) -> DVec2 {
        self.origin() + logical * UNIT_PER_SIDE / scale
    }
}

/// Sammelt Segmente in einer Liste (Render-Szene, Tests).
#[derive(Debug, Clone, Default)]
pub struct SegmentBuffer {
    origin: DVec2,
    pub segments: Vec<[DVec2; 2]>,
}

impl SegmentBuffer {
    pub fn new(origin: DVec2) -> Self {
        Self {
            origin,
            segments: Vec::new(),
        }
    }
}

impl DrawSurface for SegmentBuffer {
    fn draw_segment(&mut self, from: DVec2, to: DVec2) {
        self.segments.push([from, to]);
    }

    fn origin(&self) -> DVec2 {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_device_applies_unit_and_scale() {
        let buffer = SegmentBuffer::new(DVec2::new(250.0, 275.0));
        assert_eq!(
            buffer.to_device(DVec2::new(1.0, -2.0), 2.0),
            DVec2::new(255.0, 265.0)
        );
    }
}
