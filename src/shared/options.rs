//! Zentrale Konfiguration für den Chaikin-Editor.
//!
//! `EditorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Hintergrundfarbe (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker in Pixeln.
pub const POINT_RADIUS: f32 = 4.0;
/// Klick innerhalb dieses Abstands greift einen bestehenden Punkt.
pub const DRAG_THRESHOLD: f64 = 10.0;
/// Farbe der Marker (RGBA: Weiß).
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Linienstärke der Polylinie in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 2.0;
/// Farbe der Polylinie (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Animation ───────────────────────────────────────────────────────

/// Abstand zwischen zwei Animationsschritten in Millisekunden.
pub const ANIMATION_INTERVAL_MS: u64 = 1000;

// ── Fehleranzeige ───────────────────────────────────────────────────

/// Text bei Start mit zu wenigen Punkten.
pub const ERROR_MESSAGE: &str = "You need at least 2 points to start animation.";
/// Farbe der Fehlermeldung (RGBA: Rot).
pub const ERROR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Alle beim Start einlesbaren Editor-Optionen.
/// Wird als `chaikin_editor.toml` neben der Binary gesucht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
    pub background_color: [f32; 4],
    /// Marker-Radius in Pixeln
    pub point_radius: f32,
    pub point_color: [f32; 4],
    /// Greif-Radius für Drag in Pixeln
    pub drag_threshold: f64,
    pub curve_stroke_width: f32,
    pub curve_color: [f32; 4],
    /// Tick-Intervall der Animation
    pub animation_interval_ms: u64,
    pub error_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: [CANVAS_WIDTH, CANVAS_HEIGHT],
            background_color: BACKGROUND_COLOR,
            point_radius: POINT_RADIUS,
            point_color: POINT_COLOR,
            drag_threshold: DRAG_THRESHOLD,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_color: CURVE_COLOR,
            animation_interval_ms: ANIMATION_INTERVAL_MS,
            error_color: ERROR_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder bekommen Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("chaikin_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("chaikin_editor.toml")
    }

    /// Tick-Intervall als `Duration`.
    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts = EditorOptions::from_toml_str("animation_interval_ms = 250\n")
            .expect("gültiges TOML");
        assert_eq!(opts.animation_interval(), Duration::from_millis(250));
        assert_eq!(opts.drag_threshold, DRAG_THRESHOLD);
        assert_eq!(opts.canvas_size, [CANVAS_WIDTH, CANVAS_HEIGHT]);
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(EditorOptions::from_toml_str("point_radius = \"gross\"").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/chaikin_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
