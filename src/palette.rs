//! Colors and stroke width for the drawing
//!
//! Laser software usually maps stroke colors to operations, so cut and mark
//! strokes get distinct colors. A palette can be loaded from TOML to match a
//! particular machine's color table.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Colors and stroke width used when rendering a layout
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Stroke color of outline primitives
    pub cut: String,
    /// Stroke and fill color of engraved primitives
    pub mark: String,
    /// Background fill color
    pub background: String,
    /// Stroke width in millimeters
    pub stroke_width: f64,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: TomlColors,
    #[serde(default)]
    stroke: TomlStroke,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlColors {
    cut: Option<String>,
    mark: Option<String>,
    background: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlStroke {
    width: Option<f64>,
}

/// Default palette: black cuts, red marks on white
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
cut = "black"
mark = "red"
background = "white"

[stroke]
width = 0.15
"##;

const FALLBACK_CUT: &str = "black";
const FALLBACK_MARK: &str = "red";
const FALLBACK_BACKGROUND: &str = "white";
const FALLBACK_STROKE_WIDTH: f64 = 0.15;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    ///
    /// Keys missing from the document keep their default values.
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            cut: parsed.colors.cut.unwrap_or_else(|| FALLBACK_CUT.to_string()),
            mark: parsed.colors.mark.unwrap_or_else(|| FALLBACK_MARK.to_string()),
            background: parsed
                .colors
                .background
                .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string()),
            stroke_width: parsed.stroke.width.unwrap_or(FALLBACK_STROKE_WIDTH),
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
