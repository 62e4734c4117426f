//! Zentrale Konfiguration für den Shape-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Device-Ursprung aller Formen (Pixel).
pub const ORIGIN: [f64; 2] = [250.0, 275.0];
/// Größe der Zeichenfläche in Pixeln.
pub const CANVAS_SIZE: [f32; 2] = [700.0, 550.0];
/// Linienstärke der Formen in Pixeln.
pub const LINE_WIDTH: f32 = 2.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Kleinste Anzeige-Skalierung (2^-3).
pub const SCALE_MIN: f64 = 0.125;
/// Größte Anzeige-Skalierung (2^9).
pub const SCALE_MAX: f64 = 512.0;
/// Faktor pro Zoom-Schritt.
pub const ZOOM_STEP: f64 = 2.0;

// ── Eingabe / Takt ──────────────────────────────────────────────────

/// Teiler für rohe Beschleunigungs-Samples des Nachzeichen-Geräts.
pub const DEVICE_SENSITIVITY: f64 = 1200.0;
/// Ticks pro Aufhellungs-Schritt der Statusnachricht.
pub const MESSAGE_FADE_INTERVAL: u32 = 3;
/// Ziel-Taktrate der Update-Schleife.
pub const TICK_RATE_HZ: u32 = 100;

// ── Persistenz ──────────────────────────────────────────────────────

/// Dateiname des Form-Speichers.
pub const STORE_FILE: &str = "shape_store.txt";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geo_shape_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Device-Ursprung der Formen
    pub origin: [f64; 2],
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Linienstärke
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Minimale Anzeige-Skalierung
    pub scale_min: f64,
    /// Maximale Anzeige-Skalierung
    pub scale_max: f64,
    /// Zoom-Faktor pro Schritt
    pub zoom_step: f64,

    /// Teiler für Geräte-Samples (größer = träger)
    pub device_sensitivity: f64,
    /// Ticks pro Fade-Schritt der Statusnachricht
    #[serde(default = "default_message_fade_interval")]
    pub message_fade_interval: u32,
    /// Ziel-Taktrate
    #[serde(default = "default_tick_rate_hz")]
    pub tick_rate_hz: u32,

    /// Pfad des Form-Speichers (relativ zum Arbeitsverzeichnis)
    pub store_file: PathBuf,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            origin: ORIGIN,
            canvas_size: CANVAS_SIZE,
            line_width: LINE_WIDTH,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            zoom_step: ZOOM_STEP,
            device_sensitivity: DEVICE_SENSITIVITY,
            message_fade_interval: MESSAGE_FADE_INTERVAL,
            tick_rate_hz: TICK_RATE_HZ,
            store_file: PathBuf::from(STORE_FILE),
        }
    }
}

/// Serde-Default für `line_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_line_width() -> f32 {
    LINE_WIDTH
}

fn default_message_fade_interval() -> u32 {
    MESSAGE_FADE_INTERVAL
}

fn default_tick_rate_hz() -> u32 {
    TICK_RATE_HZ
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler oder ungültigen Werten: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(reason) => {
                        log::warn!("Optionen ungültig ({}), verwende Standardwerte", reason);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft die Wertebereiche, die Zoom und Geräte-Eingabe voraussetzen.
    pub fn validate(&self) -> Result<(), String> {
        let scale_ok = |v: f64| v.is_finite() && v > 0.0;
        if !scale_ok(self.scale_min) || !scale_ok(self.scale_max) {
            return Err(format!(
                "scale limits must be finite and positive ({}, {})",
                self.scale_min, self.scale_max
            ));
        }
        if self.scale_min > self.scale_max {
            return Err(format!(
                "scale_min {} exceeds scale_max {}",
                self.scale_min, self.scale_max
            ));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(format!("zoom_step must be > 1, got {}", self.zoom_step));
        }
        if !(self.device_sensitivity.is_finite() && self.device_sensitivity > 0.0) {
            return Err(format!(
                "device_sensitivity must be > 0, got {}",
                self.device_sensitivity
            ));
        }
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("geo_shape_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("geo_shape_editor.toml")
    }

    /// Device-Ursprung als Vektor.
    pub fn origin(&self) -> glam::DVec2 {
        glam::DVec2::from_array(self.origin)
    }

    /// Begrenzt eine Skalierung auf den erlaubten Zoom-Bereich.
    ///
    /// Panikfrei auch bei vertauschten Grenzen, dann gewinnt `scale_min`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.min(self.scale_max).max(self.scale_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let options = EditorOptions {
            zoom_step: 4.0,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
origin = [0.0, 0.0]
canvas_size = [400.0, 300.0]
scale_min = 0.5
scale_max = 8.0
zoom_step = 2.0
device_sensitivity = 600.0
store_file = "shapes.txt"
"#;
        let parsed: EditorOptions = toml::from_str(text).expect("Deserialisierung");
        assert_eq!(parsed.message_fade_interval, MESSAGE_FADE_INTERVAL);
        assert_eq!(parsed.line_width, LINE_WIDTH);
        assert_eq!(parsed.clamp_scale(100.0), 8.0);
    }

    #[test]
    fn test_validate_rejects_unusable_ranges() {
        assert_eq!(EditorOptions::default().validate(), Ok(()));

        let broken = [
            EditorOptions {
                scale_min: 8.0,
                scale_max: 0.5,
                ..EditorOptions::default()
            },
            EditorOptions {
                scale_min: 0.0,
                ..EditorOptions::default()
            },
            EditorOptions {
                scale_max: f64::INFINITY,
                ..EditorOptions::default()
            },
            EditorOptions {
                zoom_step: 1.0,
                ..EditorOptions::default()
            },
            EditorOptions {
                zoom_step: -2.0,
                ..EditorOptions::default()
            },
            EditorOptions {
                device_sensitivity: 0.0,
                ..EditorOptions::default()
            },
        ];
        for options in broken {
            assert!(options.validate().is_err(), "{options:?}");
        }
    }

    #[test]
    fn test_invalid_file_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("geo_shape_editor.toml");
        let options = EditorOptions {
            scale_min: 8.0,
            scale_max: 0.5,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        std::fs::write(&path, text).expect("Schreiben");

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_clamp_scale_never_panics_on_swapped_limits() {
        let options = EditorOptions {
            scale_min: 8.0,
            scale_max: 0.5,
            ..EditorOptions::default()
        };
        assert_eq!(options.clamp_scale(100.0), 8.0);
        assert_eq!(options.clamp_scale(0.1), 8.0);
    }

    #[test]
    fn test_load_from_missing_file_falls_back() {
        let options = EditorOptions::load_from_file(Path::new("/nonexistent/geo_shape_editor.toml"));
        assert_eq!(options, EditorOptions::default());
    }
}
