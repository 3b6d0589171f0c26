// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table, list and value output formatting

use comfy_table::{Table, presets::NOTHING};
use serde_json::Value;

use super::{flatten, lookup, render_value};

/// Create a new table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

fn cell(item: &Value, column: &str) -> String {
    lookup(item, column).map(render_value).unwrap_or_default()
}

/// Borderless table with one row per item
pub fn render_table(items: &[Value], columns: &[String]) -> String {
    let headers: Vec<String> = columns.iter().map(|c| c.to_uppercase()).collect();
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut table = create_table(&headers);
    for item in items {
        table.add_row(columns.iter().map(|c| cell(item, c)).collect::<Vec<_>>());
    }
    format!("{table}\n")
}

/// Tab-separated values, one line per item, without headers
pub fn render_values(items: &[Value], columns: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            let line = columns
                .iter()
                .map(|c| cell(item, c))
                .collect::<Vec<_>>()
                .join("\t");
            format!("{line}\n")
        })
        .collect()
}

fn render_block(pairs: &[(String, String)]) -> String {
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(k, v)| format!("{:width$} : {}\n", k, v, width = width))
        .collect()
}

/// `property : value` blocks for the given properties
pub fn render_list(items: &[Value], properties: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            let pairs: Vec<_> = properties
                .iter()
                .map(|p| (p.clone(), cell(item, p)))
                .collect();
            render_block(&pairs)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `property : value` blocks for every flattened property
pub fn render_list_all(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| {
            let pairs: Vec<_> = flatten(item)
                .into_iter()
                .map(|(k, v)| (k, render_value(&v)))
                .collect();
            render_block(&pairs)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_headers_and_cells() {
        let items = vec![
            json!({"id": "vpc-1", "sync": {"status": "complete"}}),
            json!({"id": "vpc-2", "sync": {"status": "in-progress"}}),
        ];
        let rendered = render_table(&items, &columns(&["id", "sync.status"]));
        let lines: Vec<_> = rendered.lines().map(str::trim_end).collect();
        assert!(lines[0].contains("ID"));
        assert!(lines[0].contains("SYNC.STATUS"));
        assert!(lines[1].contains("vpc-1") && lines[1].contains("complete"));
        assert!(lines[2].contains("vpc-2") && lines[2].contains("in-progress"));
    }

    #[test]
    fn test_missing_column_renders_empty() {
        let items = vec![json!({"id": "i-1"})];
        assert_eq!(render_values(&items, &columns(&["id", "nope"])), "i-1\t\n");
    }

    #[test]
    fn test_list_blocks_are_aligned() {
        let items = vec![json!({"id": "i-1", "name": "web"})];
        assert_eq!(
            render_list(&items, &columns(&["id", "name"])),
            "id   : i-1\nname : web\n"
        );
    }

    #[test]
    fn test_list_all_flattens() {
        let items = vec![json!({"id": "i-1", "sync": {"status": "complete"}})];
        assert_eq!(
            render_list_all(&items),
            "id          : i-1\nsync.status : complete\n"
        );
    }
}
