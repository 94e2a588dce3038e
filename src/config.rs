//! Scene configuration for the demo binary.
//!
//! ```json
//! {
//!     "viewport": [640, 480],
//!     "spacing": 4,
//!     "labels": [
//!         { "text": "Hello", "font_size": 24, "margins": { "top": 10, "bottom": 5, "left": 8, "right": 8 } }
//!     ]
//! }
//! ```

use std::{path::PathBuf, rc::Rc};

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigResult,
    render::ui::{
        margins::MarginSet,
        widgets::{Font, Label, PaddedLabel},
    },
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub text: String,
    pub font_size: f32,
    pub color: [f32; 4],
    pub margins: MarginSet,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 24.0,
            color: [1.0, 1.0, 1.0, 1.0],
            margins: MarginSet::default(),
        }
    }
}

impl LabelConfig {
    /// Creates the configured label using `font`.
    pub fn build(&self, font: &Rc<Font>) -> PaddedLabel {
        let label = Label::new(&self.text, self.font_size, Vec4::from(self.color), font);
        PaddedLabel::from_margins(label, self.margins)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: [f32; 2],
    pub spacing: f32,
    pub labels: Vec<LabelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: [1280.0, 720.0],
            spacing: 4.0,
            labels: vec![
                LabelConfig {
                    text: "Padded label".to_string(),
                    margins: MarginSet::new(10.0, 5.0, 8.0, 8.0),
                    ..Default::default()
                },
                LabelConfig {
                    text: "No margins".to_string(),
                    ..Default::default()
                },
            ],
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &std::path::Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loading config from {}", path.display());
        Self::from_json(&contents)
    }

    /// `<config dir>/padded-label/config.json`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("padded-label").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::{
        error::ConfigError, render::ui::widgets::Widget,
        render::ui::widgets::label::tests::test_font,
    };

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Config::from_json(
            r#"{ "labels": [ { "text": "Hi", "font_size": 20, "margins": { "left": 8, "right": 8 } } ] }"#,
        )
        .unwrap();

        assert_eq!(config.viewport, [1280.0, 720.0]);
        assert_eq!(config.spacing, 4.0);
        assert_eq!(config.labels.len(), 1);
        assert_eq!(config.labels[0].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(config.labels[0].margins, MarginSet::new(0.0, 0.0, 8.0, 8.0));
    }

    #[test]
    fn test_build_uses_configured_margins() {
        let config = LabelConfig {
            text: "0123456789".to_string(),
            font_size: 20.0,
            margins: MarginSet::new(10.0, 5.0, 8.0, 8.0),
            ..Default::default()
        };
        let label = config.build(&test_font());

        assert_eq!(label.margins(), config.margins);
        assert_eq!(label.size_hint(), Vec2::new(116.0, 35.0));
    }

    #[test]
    fn test_invalid_json_is_a_parsing_error() {
        let err = Config::from_json(r#"{ "spacing": "wide" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Config::load(std::path::Path::new("/nonexistent/padded-label.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
