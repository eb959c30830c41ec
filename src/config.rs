use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Geometry of line decorations and arrowheads, in canvas units
/// (half-millimeters on the sheet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineStyleConfig {
    /// Distance between repeated decoration glyphs along a line.
    pub decoration_step: f64,
    /// Half-length of a tick glyph.
    pub tick_size: f64,
    /// Radius of a dot glyph.
    pub dot_radius: f64,
    pub arrow_length: f64,
    pub arrow_angle_deg: f64,
    /// Pipe-body rectangle straddling a PFD pipe midpoint.
    pub pipe_body_length: f64,
    pub pipe_body_height: f64,
}

impl Default for LineStyleConfig {
    fn default() -> Self {
        Self {
            decoration_step: 30.0,
            tick_size: 6.0,
            dot_radius: 2.5,
            arrow_length: 14.0,
            arrow_angle_deg: 15.0,
            pipe_body_length: 24.0,
            pipe_body_height: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// Shear ratio applied to flat symbols on isometric runs,
    /// tan(30 deg) by default so symbol axes follow the pipe.
    pub skew_ratio: f64,
    /// Tag label text size and its gap below the symbol.
    pub label_size: f64,
    pub label_gap: f64,
    /// Instrument bubble radius.
    pub bubble_radius: f64,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            skew_ratio: 0.57735,
            label_size: 8.0,
            label_gap: 12.0,
            bubble_radius: 16.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBlockConfig {
    /// Title block spans this fraction of the usable width/height.
    pub width_fraction: f64,
    pub height_fraction: f64,
    /// Rows inside the block; row height = block height / rows.
    pub rows: u32,
    pub label_size: f64,
    pub value_size: f64,
}

impl Default for TitleBlockConfig {
    fn default() -> Self {
        Self {
            width_fraction: 0.25,
            height_fraction: 0.25,
            rows: 8,
            label_size: 5.0,
            value_size: 8.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftConfig {
    pub theme: Theme,
    pub line_style: LineStyleConfig,
    pub symbol: SymbolConfig,
    pub title_block: TitleBlockConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    theme: Option<String>,
    line_style: Option<LineStyleConfig>,
    symbol: Option<SymbolConfig>,
    title_block: Option<TitleBlockConfig>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<DraftConfig> {
    let mut config = DraftConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "blueprint" {
            config.theme = Theme::blueprint();
        } else if theme_name == "drafting" || theme_name == "default" {
            config.theme = Theme::drafting();
        }
    }
    if let Some(line_style) = parsed.line_style {
        config.line_style = line_style;
    }
    if let Some(symbol) = parsed.symbol {
        config.symbol = symbol;
    }
    if let Some(title_block) = parsed.title_block {
        config.title_block = title_block;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.line_style.decoration_step, 30.0);
        assert_eq!(config.title_block.rows, 8);
    }
}
