//! Numerische Eingabefelder mit eigener Validierungsregel.

use super::mode::AppMode;
use crate::core::{geometry, ShapeError, SideCountIssue};

/// Ziel einer numerischen Feldeingabe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTarget {
    RegularSideCount,
    RegularSideLength,
    FreehandSideCount,
    FreehandSide,
    FreehandAngle,
}

/// Validierter Feldwert
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    SideCount(i64),
    Length(f64),
    Angle(f64),
}

impl InputTarget {
    pub const ALL: [InputTarget; 5] = [
        Self::RegularSideCount,
        Self::RegularSideLength,
        Self::FreehandSideCount,
        Self::FreehandSide,
        Self::FreehandAngle,
    ];

    /// Beschriftung des Eingabefelds.
    pub fn label(self) -> &'static str {
        match self {
            Self::RegularSideCount | Self::FreehandSideCount => "Number of sides",
            Self::RegularSideLength | Self::FreehandSide => "Side length",
            Self::FreehandAngle => "Angle (degrees)",
        }
    }

    /// Modus, in dem das Feld Eingaben annimmt.
    pub fn mode(self) -> AppMode {
        match self {
            Self::RegularSideCount | Self::RegularSideLength => AppMode::RegularEntry,
            Self::FreehandSideCount | Self::FreehandSide | Self::FreehandAngle => {
                AppMode::FreehandEntry
            }
        }
    }

    /// Parst und validiert den Feldtext.
    pub fn parse(self, text: &str) -> Result<FieldValue, ShapeError> {
        let text = text.trim();
        match self {
            Self::RegularSideCount | Self::FreehandSideCount => {
                let count = text.parse::<i64>().map_err(|e| {
                    let issue = match e.kind() {
                        std::num::IntErrorKind::PosOverflow => SideCountIssue::TooMany,
                        std::num::IntErrorKind::NegOverflow => SideCountIssue::TooFew,
                        _ => SideCountIssue::NotAnInteger,
                    };
                    ShapeError::InvalidSideCount(issue)
                })?;
                geometry::checked_side_count(count)?;
                Ok(FieldValue::SideCount(count))
            }
            Self::RegularSideLength | Self::FreehandSide => text
                .parse::<f64>()
                .ok()
                .filter(|length| length.is_finite() && *length > 0.0)
                .map(FieldValue::Length)
                .ok_or(ShapeError::InvalidSideLength),
            Self::FreehandAngle => text
                .parse::<f64>()
                .ok()
                .filter(|angle| angle.is_finite())
                .map(FieldValue::Angle)
                .ok_or(ShapeError::InvalidAngle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_count_validation() {
        assert_eq!(
            InputTarget::RegularSideCount.parse(" 5 "),
            Ok(FieldValue::SideCount(5))
        );
        assert_eq!(
            InputTarget::RegularSideCount.parse("5.5"),
            Err(ShapeError::InvalidSideCount(SideCountIssue::NotAnInteger))
        );
        assert_eq!(
            InputTarget::FreehandSideCount.parse("abc"),
            Err(ShapeError::InvalidSideCount(SideCountIssue::NotAnInteger))
        );
        for too_few in ["2", "-1", "0"] {
            assert_eq!(
                InputTarget::FreehandSideCount.parse(too_few),
                Err(ShapeError::InvalidSideCount(SideCountIssue::TooFew))
            );
        }
    }

    #[test]
    fn test_side_count_upper_bound() {
        assert_eq!(
            InputTarget::RegularSideCount.parse("10000"),
            Ok(FieldValue::SideCount(10_000))
        );
        for too_many in ["10001", "50000000", "4294967296", "99999999999999999999"] {
            assert_eq!(
                InputTarget::RegularSideCount.parse(too_many),
                Err(ShapeError::InvalidSideCount(SideCountIssue::TooMany)),
                "{too_many}"
            );
        }
    }

    #[test]
    fn test_length_validation() {
        assert_eq!(
            InputTarget::FreehandSide.parse("2.5"),
            Ok(FieldValue::Length(2.5))
        );
        for bad in ["0", "-5", "abc", "inf", "NaN", ""] {
            assert_eq!(
                InputTarget::RegularSideLength.parse(bad),
                Err(ShapeError::InvalidSideLength),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_angle_accepts_negative_and_zero() {
        assert_eq!(
            InputTarget::FreehandAngle.parse("-45"),
            Ok(FieldValue::Angle(-45.0))
        );
        assert_eq!(InputTarget::FreehandAngle.parse("0"), Ok(FieldValue::Angle(0.0)));
        assert_eq!(
            InputTarget::FreehandAngle.parse("north"),
            Err(ShapeError::InvalidAngle)
        );
    }

    #[test]
    fn test_every_target_belongs_to_an_entry_mode() {
        for target in InputTarget::ALL {
            assert!(target.mode().input_targets().contains(&target));
        }
    }
}
