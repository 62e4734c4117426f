//! Geometrie-Kernel: reine Funktionen für Eckpunkte, Umfang und Fläche.
//!
//! Koordinaten-Konvention:
//! - Logische Einheiten sind die vom Benutzer eingegebenen Längen.
//! - Device-Koordinaten = logisch × [`UNIT_PER_SIDE`] / `scale`.
//! - Alle Messwerte werden auf zwei Nachkommastellen gerundet.

use super::error::{ShapeError, SideCountIssue};
use glam::DVec2;

/// Device-Einheiten pro logischer Längeneinheit bei Skalierung 1.0.
pub const UNIT_PER_SIDE: f64 = 10.0;

/// Fester Startpunkt aller Formen in Device-Koordinaten.
pub const DEFAULT_ORIGIN: DVec2 = DVec2::new(250.0, 275.0);

/// Größte erlaubte Seitenanzahl eines Polygons.
pub const MAX_SIDE_COUNT: u32 = 10_000;

/// Prüft eine Seitenanzahl auf den Bereich `3..=MAX_SIDE_COUNT`.
pub fn checked_side_count(side_count: i64) -> Result<u32, ShapeError> {
    if side_count < 3 {
        return Err(ShapeError::InvalidSideCount(SideCountIssue::TooFew));
    }
    u32::try_from(side_count)
        .ok()
        .filter(|n| *n <= MAX_SIDE_COUNT)
        .ok_or(ShapeError::InvalidSideCount(SideCountIssue::TooMany))
}

/// Rundet auf zwei Nachkommastellen (kaufmännisch, weg von Null).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Erzeugt den Eckpunkt-Ring eines regelmäßigen Polygons in Device-Koordinaten.
///
/// Kante `i` läuft in Richtung `θ·i` mit `θ = 2π / side_count`; jeder Eckpunkt
/// ist der vorige plus `side_length · UNIT_PER_SIDE / scale · (sin θi, cos θi)`.
/// Der Ring enthält `side_count` Punkte, der Schluss zurück zum Start ist implizit.
///
/// Vorbedingung (vom Aufrufer geprüft): `side_count >= 3`, `side_length > 0`, `scale > 0`.
pub fn regular_vertices(side_count: u32, side_length: f64, start: DVec2, scale: f64) -> Vec<DVec2> {
    let theta = std::f64::consts::TAU / f64::from(side_count);
    let step = side_length * UNIT_PER_SIDE / scale;

    let mut vertices = Vec::with_capacity(side_count as usize);
    let mut current = start;
    vertices.push(current);
    for i in 0..side_count.saturating_sub(1) {
        let angle = theta * f64::from(i);
        current += DVec2::new(angle.sin(), angle.cos()) * step;
        vertices.push(current);
    }
    vertices
}

/// Umfang eines regelmäßigen Polygons: `n · L`.
pub fn regular_perimeter(side_count: u32, side_length: f64) -> f64 {
    round2(f64::from(side_count) * side_length)
}

/// Fläche eines regelmäßigen Polygons: `L² · n / (4 · tan(π/n))`.
///
/// Nicht definiert für `side_count < 3`.
pub fn regular_area(side_count: u32, side_length: f64) -> f64 {
    let n = f64::from(side_count);
    round2(side_length * side_length * n / (4.0 * (std::f64::consts::PI / n).tan()))
}

/// Summe der Kantenlängen aufeinanderfolgender Punkte in logischen Einheiten.
///
/// `points` liegen in Device-Koordinaten bei Skalierung `scale`.
pub fn polyline_perimeter(points: &[DVec2], scale: f64) -> f64 {
    let total: f64 = points
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]) / UNIT_PER_SIDE * scale).length())
        .sum();
    round2(total)
}

/// Schnürsenkel-Fläche über aufeinanderfolgende Punkte in gespeicherter Reihenfolge.
///
/// Erwartet einen geschlossenen Linienzug (letzter Punkt = erster Punkt) mit
/// konsistentem Umlaufsinn. Der Betrag macht das Ergebnis vom Umlaufsinn
/// unabhängig; bei Selbstüberschneidung ist der Wert geometrisch bedeutungslos.
pub fn shoelace_area(points: &[DVec2], scale: f64) -> f64 {
    let factor = scale * scale / (UNIT_PER_SIDE * UNIT_PER_SIDE);
    let (forward, backward) = points
        .windows(2)
        .fold((0.0, 0.0), |(fwd, bwd), pair| {
            (
                fwd + pair[0].x * pair[1].y * factor,
                bwd + pair[0].y * pair[1].x * factor,
            )
        });
    round2((forward - backward).abs() / 2.0)
}

/// Projiziert einen Device-Punkt von `old_scale` auf `new_scale`, relativ zu `start`.
///
/// Die logische Lage bleibt erhalten: `start + (p - start) / new_scale * old_scale`.
#[inline]
pub fn rescale_point(point: DVec2, start: DVec2, old_scale: f64, new_scale: f64) -> DVec2 {
    start + (point - start) / new_scale * old_scale
}

/// Nächster Eckpunkt einer Freihand-Kante in Device-Koordinaten.
///
/// `angle_deg` wird gegen den Uhrzeigersinn zur x-Achse gemessen; da die
/// Device-y-Achse nach unten zeigt, wird mit `360 - angle` gerechnet.
pub fn freehand_step(last: DVec2, length: f64, angle_deg: f64, scale: f64) -> DVec2 {
    let radians = (360.0 - angle_deg).to_radians();
    last + DVec2::new(radians.cos(), radians.sin()) * length * UNIT_PER_SIDE / scale
}
