//! Renderer module
//!
//! Renders stats snapshots and versions to different output formats: jsonl, json, md, raw

use serde::Serialize;
use serde_json::json;
use std::io::Write;

use crate::core::model::{StatsSnapshot, Version};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for stats and versions
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a stats snapshot to a string
    pub fn render_stats(&self, snapshot: &StatsSnapshot) -> String {
        match self.config.format {
            OutputFormat::Jsonl => {
                let rows: Vec<_> = snapshot
                    .iter()
                    .map(|(field, value)| json!({ "field": field, "value": value }))
                    .collect();
                self.join_jsonl(&rows)
            }
            OutputFormat::Json => self.to_json(snapshot),
            OutputFormat::Markdown => {
                if snapshot.is_empty() {
                    return String::new();
                }
                let mut output = String::from("## ccache stats\n\n| field | value |\n|---|---|\n");
                for (field, value) in snapshot.iter() {
                    output.push_str(&format!("| `{}` | {} |\n", field, value));
                }
                output
            }
            OutputFormat::Raw => snapshot
                .iter()
                .map(|(field, value)| format!("{} {}", field, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Render a version to a string
    pub fn render_version(&self, version: &Version) -> String {
        match self.config.format {
            OutputFormat::Jsonl | OutputFormat::Json => self.to_json(version),
            OutputFormat::Markdown => format!("## ccache version\n\n`{}`\n", version),
            OutputFormat::Raw => version.to_string(),
        }
    }

    /// Render stats to a writer
    pub fn render_stats_to<W: Write>(
        &self,
        snapshot: &StatsSnapshot,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render_stats(snapshot);
        writer.write_all(output.as_bytes())
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    fn join_jsonl(&self, rows: &[serde_json::Value]) -> String {
        rows.iter()
            .map(|row| self.to_json(row))
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }
}
