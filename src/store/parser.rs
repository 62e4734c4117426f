//! Parser für den zeilenbasierten Form-Speicher.
//!
//! Zeile 1 enthält alle regelmäßigen Polygone als flache Liste
//! `[n, L, n, L, …]`, danach folgt je Freihand-Polygon eine Zeile
//! `[[x, y], [x, y], …]`. Eine Leerzeile beendet den Freihand-Block.

mod tokens;

use crate::core::{FreehandPolygon, RegularPolygon, ShapeError};
use glam::DVec2;
use tokens::{parse_float, parse_side_count, split_tokens, LEGACY_PLACEHOLDER};

/// Vollständig geladener Form-Speicher.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    pub regulars: Vec<RegularPolygon>,
    pub freehands: Vec<FreehandPolygon>,
}

/// Parse-Ergebnis je Abschnitt, damit ein defekter Abschnitt den anderen nicht mitreißt.
#[derive(Debug, Clone)]
pub struct ParsedStore {
    pub regulars: Result<Vec<RegularPolygon>, ShapeError>,
    pub freehands: Result<Vec<FreehandPolygon>, ShapeError>,
}

impl ParsedStore {
    /// Strikte Variante: der erste defekte Abschnitt bricht ab.
    pub fn into_strict(self) -> Result<ShapeStore, ShapeError> {
        Ok(ShapeStore {
            regulars: self.regulars?,
            freehands: self.freehands?,
        })
    }

    /// Tolerante Variante: defekte Abschnitte werden geloggt und leer übernommen.
    pub fn recover(self) -> ShapeStore {
        let regulars = self.regulars.unwrap_or_else(|e| {
            log::warn!("Regelmäßige Formen verworfen: {}", e);
            Vec::new()
        });
        let freehands = self.freehands.unwrap_or_else(|e| {
            log::warn!("Freihand-Formen verworfen: {}", e);
            Vec::new()
        });
        ShapeStore {
            regulars,
            freehands,
        }
    }
}

/// Parst den kompletten Speicherinhalt abschnittsweise.
///
/// Leerer Inhalt ergibt zwei leere Abschnitte.
pub fn parse_shape_store(content: &str) -> ParsedStore {
    let mut lines = content.lines().enumerate();

    let regulars = match lines.next() {
        Some((index, line)) => parse_regular_line(line, index + 1),
        None => Ok(Vec::new()),
    };

    let freehands = lines
        .take_while(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| parse_freehand_line(line, index + 1).transpose())
        .collect::<Result<Vec<_>, _>>();

    ParsedStore {
        regulars,
        freehands,
    }
}

/// Parst die Zeile mit den regelmäßigen Polygonen.
pub fn parse_regular_line(line: &str, line_no: usize) -> Result<Vec<RegularPolygon>, ShapeError> {
    let tokens = split_tokens(line);
    if tokens.len() % 2 != 0 {
        return Err(ShapeError::corrupt(
            line_no,
            format!("odd number of tokens ({})", tokens.len()),
        ));
    }

    let mut polygons = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        if pair.contains(&LEGACY_PLACEHOLDER) {
            log::warn!("Zeile {}: ausstehender Platzhalter übersprungen", line_no);
            continue;
        }
        let side_count = parse_side_count(pair[0], line_no)?;
        let side_length = parse_float(pair[1], line_no)?;
        let polygon = RegularPolygon::with_params(side_count, side_length).map_err(|e| {
            ShapeError::corrupt(line_no, format!("invalid regular polygon: {e}"))
        })?;
        polygons.push(polygon);
    }
    Ok(polygons)
}

/// Parst eine Freihand-Zeile. `Ok(None)` für Platzhalter und offene, unfertige Formen.
pub fn parse_freehand_line(
    line: &str,
    line_no: usize,
) -> Result<Option<FreehandPolygon>, ShapeError> {
    let tokens = split_tokens(line);
    if tokens.len() % 2 != 0 {
        return Err(ShapeError::corrupt(
            line_no,
            format!("odd number of coordinates ({})", tokens.len()),
        ));
    }

    let points = tokens
        .chunks_exact(2)
        .map(|pair| Ok(DVec2::new(parse_float(pair[0], line_no)?, parse_float(pair[1], line_no)?)))
        .collect::<Result<Vec<_>, ShapeError>>()?;

    // Unfertige Formen stehen als offener Linienzug im Speicher
    if points.len() < 4 || !FreehandPolygon::is_closed_ring(&points) {
        log::warn!(
            "Zeile {}: unfertige Freihand-Form mit {} Punkten übersprungen",
            line_no,
            points.len()
        );
        return Ok(None);
    }

    FreehandPolygon::from_loaded(points)
        .map(Some)
        .map_err(|e| match e {
            ShapeError::CorruptPersistedData { reason, .. } => ShapeError::corrupt(line_no, reason),
            other => other,
        })
}
