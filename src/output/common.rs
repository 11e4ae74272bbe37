//! Common utilities for output formatters

use serde::Serialize;

/// Result type for renderers
pub type RenderResult = std::result::Result<String, Box<dyn std::error::Error>>;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render any serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(data: &T) -> RenderResult {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render any serializable value as YAML
pub fn render_yaml<T: Serialize + ?Sized>(data: &T) -> RenderResult {
    Ok(serde_yml::to_string(data)?)
}
