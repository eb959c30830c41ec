use serde::{Deserialize, Serialize};

/// Pen palette for a finished sheet. Drafting output is essentially
/// monochrome; the theme mostly picks ink and paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f64,
    pub ink: String,
    pub paper: String,
    pub thin_stroke: f64,
    pub stroke: f64,
    pub wide_stroke: f64,
}

impl Theme {
    /// Black ink on white paper, the default plot style.
    pub fn drafting() -> Self {
        Self {
            font_family: "ISOCPEUR, 'Courier New', monospace".to_string(),
            font_size: 7.0,
            ink: "#1A1A1A".to_string(),
            paper: "#FFFFFF".to_string(),
            thin_stroke: 0.5,
            stroke: 1.0,
            wide_stroke: 2.0,
        }
    }

    /// White-on-blue print style.
    pub fn blueprint() -> Self {
        Self {
            font_family: "ISOCPEUR, 'Courier New', monospace".to_string(),
            font_size: 7.0,
            ink: "#F2F6FF".to_string(),
            paper: "#17355E".to_string(),
            thin_stroke: 0.5,
            stroke: 1.0,
            wide_stroke: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::drafting()
    }
}
