//! Output rendering for the CLI

use anyhow::Result;
use filtergainlib::FilterAnalysis;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Bordered text table
    #[default]
    Table,
    /// Pretty-printed JSON of the whole analysis
    Json,
}

impl OutputMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputMode::Json,
            _ => OutputMode::Table,
        }
    }
}

/// Render an analysis in the requested mode, newline-terminated.
pub fn render_analysis(analysis: &FilterAnalysis, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Table => Ok(analysis.to_table().render()),
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(analysis)?;
            json.push('\n');
            Ok(json)
        }
    }
}
