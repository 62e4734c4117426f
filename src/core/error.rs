//! Fehler-Taxonomie für Formkonstruktion, Messung und Persistenz.

use thiserror::Error;

/// Warum eine Seitenanzahl-Eingabe abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideCountIssue {
    /// Text ist keine Ganzzahl
    NotAnInteger,
    /// Ganzzahl kleiner als 3
    TooFew,
    /// Ganzzahl größer als [`MAX_SIDE_COUNT`](super::geometry::MAX_SIDE_COUNT)
    TooMany,
}

impl std::fmt::Display for SideCountIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger => f.write_str("The input has to be an integer."),
            Self::TooFew => f.write_str("The number of sides should be at least 3."),
            Self::TooMany => write!(
                f,
                "The number of sides should be at most {}.",
                super::geometry::MAX_SIDE_COUNT
            ),
        }
    }
}

/// Alle Fehler der Kern-Domäne.
///
/// Der `Display`-Text ist gleichzeitig die Statusnachricht, die der Controller
/// bei abgelehnter Eingabe anzeigt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{0}")]
    InvalidSideCount(SideCountIssue),
    #[error("The side length has to be a positive number.")]
    InvalidSideLength,
    #[error("The angle has to be a number.")]
    InvalidAngle,
    #[error("The shape is not finished yet.")]
    Incomplete,
    #[error("This shape can no longer be edited.")]
    ImmutableShape,
    #[error("Enter the number of sides first.")]
    SideCountMissing,
    #[error("Corrupt shape store (line {line}): {reason}")]
    CorruptPersistedData { line: usize, reason: String },
    #[error("No shape is displayed")]
    NoShapeAvailable,
}

impl ShapeError {
    /// Kurzform für Persistenz-Fehler an einer 1-basierten Zeilennummer.
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::CorruptPersistedData {
            line,
            reason: reason.into(),
        }
    }

    /// Eingabefehler, die lokal behandelt werden (Feld leeren, Nachricht setzen).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSideCount(_)
                | Self::InvalidSideLength
                | Self::InvalidAngle
                | Self::ImmutableShape
                | Self::SideCountMissing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_count_messages_differ_by_issue() {
        let not_int = ShapeError::InvalidSideCount(SideCountIssue::NotAnInteger).to_string();
        let too_few = ShapeError::InvalidSideCount(SideCountIssue::TooFew).to_string();
        assert_eq!(not_int, "The input has to be an integer.");
        assert!(too_few.contains("at least 3"));
        let too_many = ShapeError::InvalidSideCount(SideCountIssue::TooMany).to_string();
        assert_eq!(too_many, "The number of sides should be at most 10000.");
    }

    #[test]
    fn test_corrupt_message_contains_line() {
        let err = ShapeError::corrupt(3, "odd token count");
        assert_eq!(
            err.to_string(),
            "Corrupt shape store (line 3): odd token count"
        );
        assert!(!err.is_input_error());
    }
}
