//! Bildschirm-Modi der Anwendung und ihre Übergänge.
//!
//! Übergänge werden ausschließlich durch Button-Aktionen ausgelöst.
//! Eintritts- und Austrittsaktionen (frischer Eintrag, Trace scharf schalten)
//! führt der Controller über `use_cases::mode` aus.

use super::input_target::InputTarget;

/// Aktiver Bildschirm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Startbildschirm
    #[default]
    Start,
    /// Anleitung
    Tutorial,
    /// Hauptmenü (Hub aller Zeichenmodi)
    Main,
    /// Eingabe regelmäßiger Polygone
    RegularEntry,
    /// Eingabe von Freihand-Polygonen
    FreehandEntry,
    /// Nachzeichnen mit der Maus
    PointerTrace,
    /// Nachzeichnen mit dem Neigungs-Gerät
    DeviceTrace,
}

/// Diskrete Button-Aktionen der Oberfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiButton {
    StartDrawing,
    Tutorial,
    Back,
    DrawRegular,
    DrawFreehand,
    DrawWithPointer,
    DrawWithDevice,
    Clear,
    ShowCoordinatePlane,
    HideCoordinatePlane,
    ZoomIn,
    ZoomOut,
    CalculateArea,
    CalculatePerimeter,
}

impl UiButton {
    /// Beschriftung für die Oberfläche.
    pub fn label(self) -> &'static str {
        match self {
            Self::StartDrawing => "START DRAWING",
            Self::Tutorial => "TUTORIAL",
            Self::Back => "BACK",
            Self::DrawRegular => "draw regular shapes",
            Self::DrawFreehand => "draw customized shapes",
            Self::DrawWithPointer => "draw with mouse",
            Self::DrawWithDevice => "draw with tilt device",
            Self::Clear => "CLEAR",
            Self::ShowCoordinatePlane => "show coordinate plane",
            Self::HideCoordinatePlane => "hide coordinate plane",
            Self::ZoomIn => "+",
            Self::ZoomOut => "-",
            Self::CalculateArea => "calculate area",
            Self::CalculatePerimeter => "calculate perimeter",
        }
    }
}

impl AppMode {
    /// Zielmodus für eine Button-Aktion, `None` wenn die Aktion den Modus nicht wechselt.
    pub fn next(self, button: UiButton) -> Option<AppMode> {
        use AppMode::*;
        match (self, button) {
            (Start, UiButton::StartDrawing) => Some(Main),
            (Start, UiButton::Tutorial) => Some(Tutorial),
            (Tutorial, UiButton::Back) => Some(Start),
            (Main, UiButton::DrawRegular) => Some(RegularEntry),
            (Main, UiButton::DrawFreehand) => Some(FreehandEntry),
            (Main, UiButton::DrawWithPointer) => Some(PointerTrace),
            (Main, UiButton::DrawWithDevice) => Some(DeviceTrace),
            (Main, UiButton::Back) => Some(Start),
            (RegularEntry | FreehandEntry | PointerTrace | DeviceTrace, UiButton::Back) => {
                Some(Main)
            }
            _ => None,
        }
    }

    /// Buttons, die in diesem Modus angeboten werden (ohne Koordinaten-Umschalter).
    pub fn buttons(self) -> &'static [UiButton] {
        match self {
            Self::Start => &[UiButton::StartDrawing, UiButton::Tutorial],
            Self::Tutorial => &[UiButton::Back],
            Self::Main => &[
                UiButton::DrawRegular,
                UiButton::DrawFreehand,
                UiButton::DrawWithPointer,
                UiButton::DrawWithDevice,
                UiButton::Clear,
                UiButton::Back,
            ],
            Self::RegularEntry | Self::FreehandEntry => &[
                UiButton::CalculateArea,
                UiButton::CalculatePerimeter,
                UiButton::Clear,
                UiButton::Back,
            ],
            Self::PointerTrace | Self::DeviceTrace => &[UiButton::Clear, UiButton::Back],
        }
    }

    /// Eingabefelder dieses Modus.
    pub fn input_targets(self) -> &'static [InputTarget] {
        match self {
            Self::RegularEntry => &[InputTarget::RegularSideCount, InputTarget::RegularSideLength],
            Self::FreehandEntry => &[
                InputTarget::FreehandSideCount,
                InputTarget::FreehandSide,
                InputTarget::FreehandAngle,
            ],
            _ => &[],
        }
    }

    /// Ob eine Zeichenfläche mit Koordinatenkreuz angezeigt wird.
    pub fn has_canvas(self) -> bool {
        !matches!(self, Self::Start | Self::Tutorial)
    }

    /// Ob Zoom-Buttons angeboten werden (nicht beim Nachzeichnen).
    pub fn supports_zoom(self) -> bool {
        matches!(self, Self::Main | Self::RegularEntry | Self::FreehandEntry)
    }

    /// Ob der Modus die Statusnachricht anzeigt.
    pub fn shows_message(self) -> bool {
        matches!(
            self,
            Self::Main | Self::RegularEntry | Self::FreehandEntry | Self::DeviceTrace
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [AppMode; 7] = [
        AppMode::Start,
        AppMode::Tutorial,
        AppMode::Main,
        AppMode::RegularEntry,
        AppMode::FreehandEntry,
        AppMode::PointerTrace,
        AppMode::DeviceTrace,
    ];

    #[test]
    fn test_start_to_main_and_tutorial() {
        assert_eq!(AppMode::Start.next(UiButton::StartDrawing), Some(AppMode::Main));
        assert_eq!(AppMode::Start.next(UiButton::Tutorial), Some(AppMode::Tutorial));
        assert_eq!(AppMode::Tutorial.next(UiButton::Back), Some(AppMode::Start));
    }

    #[test]
    fn test_entry_modes_return_to_main_on_back() {
        for mode in [
            AppMode::RegularEntry,
            AppMode::FreehandEntry,
            AppMode::PointerTrace,
            AppMode::DeviceTrace,
        ] {
            assert_eq!(mode.next(UiButton::Back), Some(AppMode::Main));
        }
    }

    #[test]
    fn test_non_navigation_buttons_keep_mode() {
        for mode in ALL_MODES {
            for button in [
                UiButton::Clear,
                UiButton::ZoomIn,
                UiButton::ZoomOut,
                UiButton::CalculateArea,
                UiButton::ShowCoordinatePlane,
            ] {
                assert_eq!(mode.next(button), None, "{mode:?} + {button:?}");
            }
        }
    }

    #[test]
    fn test_draw_buttons_only_from_main() {
        assert_eq!(AppMode::RegularEntry.next(UiButton::DrawFreehand), None);
        assert_eq!(AppMode::Start.next(UiButton::DrawRegular), None);
        assert_eq!(
            AppMode::Main.next(UiButton::DrawWithDevice),
            Some(AppMode::DeviceTrace)
        );
    }

    #[test]
    fn test_offered_navigation_buttons_lead_somewhere() {
        for mode in ALL_MODES {
            for &button in mode.buttons() {
                let navigates = mode.next(button).is_some();
                let local = matches!(
                    button,
                    UiButton::Clear | UiButton::CalculateArea | UiButton::CalculatePerimeter
                );
                assert!(navigates || local, "{mode:?} bietet toten Button {button:?}");
            }
        }
    }
}
