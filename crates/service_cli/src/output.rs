//! Report rendering
//!
//! Every command produces a serialisable report. JSON output is the report
//! itself; table output flattens it into `field | value` rows.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::config::OutputFormat;
use crate::Result;

/// Render `report` in the requested format.
pub fn render<R: Serialize>(format: OutputFormat, title: &str, report: &R) -> Result<String> {
    let value = serde_json::to_value(report)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&value)?),
        OutputFormat::Table => Ok(render_table(title, &value)),
    }
}

/// Render `report` and write it to stdout.
pub fn emit<R: Serialize>(format: OutputFormat, title: &str, report: &R) -> Result<()> {
    let rendered = render(format, title, report)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

fn render_table(title: &str, value: &Value) -> String {
    let mut rows = Vec::new();
    flatten("", value, &mut rows);

    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once("Field".len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };
    let line = |k: &str, v: &str| {
        format!(
            "│ {:<kw$} │ {:<vw$} │",
            k,
            v,
            kw = key_width,
            vw = value_width
        )
    };

    let mut out = Vec::with_capacity(rows.len() + 5);
    out.push(title.to_string());
    out.push(rule("┌", "┬", "┐"));
    out.push(line("Field", "Value"));
    out.push(rule("├", "┼", "┤"));
    for (k, v) in &rows {
        out.push(line(k, v));
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, rows);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, i), child, rows);
            }
        }
        Value::Null => rows.push((prefix.to_string(), "-".to_string())),
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}
