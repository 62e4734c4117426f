//! Token-Zerlegung: entfernt Klammern und trennt an Kommas.

use crate::core::ShapeError;

/// Platzhalter, den ältere Versionen für ausstehende Einträge geschrieben haben.
pub(super) const LEGACY_PLACEHOLDER: &str = "None";

/// Entfernt `[`/`]` sowie Zeilenumbrüche und liefert die getrimmten Tokens.
///
/// Eine leere Liste (`[]`) ergibt keine Tokens.
pub(super) fn split_tokens(line: &str) -> Vec<&str> {
    let stripped = line.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace());
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped
        .split(',')
        .map(|token| token.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace()))
        .collect()
}

/// Parst eine Koordinate oder Seitenlänge.
pub(super) fn parse_float(token: &str, line: usize) -> Result<f64, ShapeError> {
    let value = token
        .parse::<f64>()
        .map_err(|_| ShapeError::corrupt(line, format!("'{token}' is not a number")))?;
    if !value.is_finite() {
        return Err(ShapeError::corrupt(line, format!("'{token}' is not finite")));
    }
    Ok(value)
}

/// Parst eine Seitenanzahl. Akzeptiert auch ganzzahlige Gleitkommawerte (`5.0`).
pub(super) fn parse_side_count(token: &str, line: usize) -> Result<i64, ShapeError> {
    if let Ok(count) = token.parse::<i64>() {
        return Ok(count);
    }
    let value = parse_float(token, line)?;
    if value.fract() != 0.0 {
        return Err(ShapeError::corrupt(
            line,
            format!("side count '{token}' is not an integer"),
        ));
    }
    Ok(value as i64)
}
