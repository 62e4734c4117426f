//! Freihand-Nachzeichnen per Zeigegerät oder Beschleunigungs-Sensor.

use crate::shared::DrawSurface;
use glam::DVec2;

/// Herkunft der Nachzeichen-Samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSource {
    /// Absolute Zeiger-Positionen (Maus)
    Pointer,
    /// Relative Beschleunigungs-Inkremente (externes Gerät)
    Device,
}

/// Sammelt nachgezeichnete Striche als unabhängige Linienzüge.
#[derive(Debug, Clone)]
pub struct TraceCapture {
    source: TraceSource,
    origin: DVec2,
    armed: bool,
    /// Geschwindigkeit (nur Device-Modus), wird nur durch `reset` gedämpft
    velocity: DVec2,
    /// Letzte Position; `None` = nächstes Sample beginnt einen neuen Strich
    cursor: Option<DVec2>,
    /// Ob das nächste Segment an den letzten Strich anschließt
    stroke_open: bool,
    strokes: Vec<Vec<DVec2>>,
}

impl TraceCapture {
    /// Erstellt eine leere Aufzeichnung für die gegebene Quelle.
    pub fn new(source: TraceSource, origin: DVec2) -> Self {
        let mut capture = Self {
            source,
            origin,
            armed: false,
            velocity: DVec2::ZERO,
            cursor: None,
            stroke_open: false,
            strokes: Vec::new(),
        };
        capture.reset();
        capture
    }

    pub fn source(&self) -> TraceSource {
        self.source
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn strokes(&self) -> &[Vec<DVec2>] {
        &self.strokes
    }

    /// Aktiviert die Aufzeichnung (Eintritt in den Trace-Modus / Maustaste gedrückt).
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Deaktiviert die Aufzeichnung und setzt den Cursor zurück.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.reset();
    }

    /// Setzt Geschwindigkeit und Cursor zurück, bereits gezeichnete Striche bleiben.
    pub fn reset(&mut self) {
        self.velocity = DVec2::ZERO;
        self.stroke_open = false;
        self.cursor = match self.source {
            TraceSource::Pointer => None,
            TraceSource::Device => Some(self.origin),
        };
    }

    /// Löscht alle Striche und setzt zurück.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.reset();
    }

    /// Addiert ein Beschleunigungs-Inkrement und zeichnet ein Segment zur neuen Position.
    ///
    /// Ignoriert, wenn nicht scharf geschaltet oder keine Device-Quelle.
    pub fn accelerate(&mut self, increment: DVec2) {
        if !self.armed || self.source != TraceSource::Device {
            return;
        }
        self.velocity += increment;
        let last = self.cursor.unwrap_or(self.origin);
        let next = last + self.velocity;
        self.push_segment(last, next);
    }

    /// Verarbeitet eine absolute Zeigerposition.
    ///
    /// Ohne vorherige Position beginnt ein neuer, unverbundener Strich.
    pub fn pointer_moved(&mut self, position: DVec2) {
        if !self.armed || self.source != TraceSource::Pointer {
            return;
        }
        match self.cursor {
            Some(last) => self.push_segment(last, position),
            None => self.cursor = Some(position),
        }
    }

    /// Beendet den aktuellen Strich (Maustaste losgelassen).
    pub fn cut(&mut self) {
        self.cursor = None;
        self.stroke_open = false;
        if self.source == TraceSource::Device {
            self.reset();
        }
    }

    fn push_segment(&mut self, from: DVec2, to: DVec2) {
        // Stillstand erzeugt keine Null-Segmente
        if from == to {
            return;
        }
        match self.strokes.last_mut() {
            Some(stroke) if self.stroke_open => stroke.push(to),
            _ => self.strokes.push(vec![from, to]),
        }
        self.stroke_open = true;
        self.cursor = Some(to);
    }

    /// Zeichnet alle Striche.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for stroke in &self.strokes {
            for pair in stroke.windows(2) {
                surface.draw_segment(pair[0], pair[1]);
            }
        }
    }
}
