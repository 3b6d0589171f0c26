// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting utilities
//!
//! Commands hand a slice of API models and their default columns to
//! [`Output::print`]. Models are converted to JSON values, so a column is
//! any dotted path into the serialized form (for example `sync.status`).

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

pub mod json;
pub mod table;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    List,
    Json,
    Yaml,
    Value,
}

/// Output settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub format: OutputFormat,
    /// Explicit columns; the command's defaults are used when empty
    pub properties: Vec<String>,
}

impl Output {
    pub fn new(format: OutputFormat, properties: Vec<String>) -> Self {
        Self { format, properties }
    }

    /// Render items and print them to stdout
    pub fn print<T: Serialize>(&self, items: &[T], columns: &[&str]) -> Result<()> {
        let rendered = self.render(items, columns)?;
        if !rendered.is_empty() {
            println!("{}", rendered.trim_end_matches('\n'));
        }
        Ok(())
    }

    /// Render items in the selected format
    pub fn render<T: Serialize>(&self, items: &[T], columns: &[&str]) -> Result<String> {
        let values = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        match self.format {
            OutputFormat::Json => json::to_json(&values),
            OutputFormat::Yaml => json::to_yaml(&values),
            OutputFormat::Table => {
                let columns = self.columns(columns);
                Ok(table::render_table(&values, &columns))
            }
            OutputFormat::Value => {
                let columns = self.columns(columns);
                Ok(table::render_values(&values, &columns))
            }
            OutputFormat::List => {
                if self.properties.is_empty() {
                    Ok(table::render_list_all(&values))
                } else {
                    Ok(table::render_list(&values, &self.properties))
                }
            }
        }
    }

    fn columns(&self, defaults: &[&str]) -> Vec<String> {
        if self.properties.is_empty() {
            defaults.iter().map(|c| c.to_string()).collect()
        } else {
            self.properties.clone()
        }
    }

    /// Whether a human is expected to read the output
    pub fn is_human(&self) -> bool {
        matches!(self.format, OutputFormat::Table | OutputFormat::List)
    }
}

/// Look up a dotted path in a JSON value
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Flatten nested objects into dotted keys
///
/// Arrays are kept as leaves so they render as one comma-joined cell.
pub fn flatten(value: &Value) -> BTreeMap<String, Value> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, child, out);
                }
            }
            _ => {
                out.insert(prefix.to_string(), value.clone());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk("", value, &mut out);
    out
}

/// Render a single JSON value as cell text
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn vpc() -> Value {
        json!({
            "id": "vpc-1",
            "name": "prod",
            "sync": {"status": "complete", "type": "update"},
            "tags": ["a", "b"],
            "created_at": null
        })
    }

    #[test]
    fn test_lookup_dotted_path() {
        let v = vpc();
        assert_eq!(lookup(&v, "sync.status"), Some(&json!("complete")));
        assert_eq!(lookup(&v, "tags.1"), Some(&json!("b")));
        assert_eq!(lookup(&v, "sync.missing"), None);
    }

    #[test]
    fn test_flatten() {
        let flat = flatten(&vpc());
        let keys: Vec<_> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["created_at", "id", "name", "sync.status", "sync.type", "tags"]
        );
    }

    #[test_case(json!(null), "" ; "null is empty")]
    #[test_case(json!("x"), "x" ; "string unquoted")]
    #[test_case(json!(42), "42" ; "number")]
    #[test_case(json!(false), "false" ; "bool")]
    #[test_case(json!(["a", 1, null]), "a,1," ; "array joined")]
    #[test_case(json!({"k": "v"}), r#"{"k":"v"}"# ; "object as json")]
    fn test_render_value(value: Value, expected: &str) {
        assert_eq!(render_value(&value), expected);
    }

    #[test]
    fn test_properties_override_defaults() {
        let output = Output::new(OutputFormat::Value, vec!["sync.status".to_string()]);
        let rendered = output.render(&[vpc()], &["id", "name"]).unwrap();
        assert_eq!(rendered, "complete\n");
    }

    #[test]
    fn test_json_is_array() {
        let output = Output::new(OutputFormat::Json, vec![]);
        let rendered = output.render(&[vpc()], &["id"]).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!([vpc()]));
    }
}
