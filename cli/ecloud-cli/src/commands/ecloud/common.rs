// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Arguments and helpers shared by every eCloud resource command

use std::fmt::Display;
use std::future::Future;

use anyhow::{Result, bail};
use clap::Args;
use ecloud_client::{Filter, FilterOperator, Parameters, Sort};
use serde::Serialize;

use crate::output::Output;

/// Arguments accepted by every `list` verb
#[derive(Args, Clone, Debug, Default)]
pub struct ListArgs {
    /// Filter results, as property[:operator]=value (repeatable)
    ///
    /// Operators: eq, lk, gt, lt, in, neq, nin, nlk. Without an operator,
    /// a comma-separated value means `in`, a value containing `*` means
    /// `lk`, anything else means `eq`.
    #[arg(long = "filter", value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Sort by property, optionally suffixed with :asc or :desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Fetch a single page instead of every page
    #[arg(long)]
    pub page: Option<u32>,
}

impl ListArgs {
    /// Build request parameters from the flags
    pub fn parameters(&self) -> Result<Parameters> {
        let mut params = Parameters::new();
        for raw in &self.filters {
            params = params.with_filter(parse_filter(raw)?);
        }
        if let Some(sort) = &self.sort {
            params = params.with_sort(parse_sort(sort)?);
        }
        if let Some(page) = self.page {
            params = params.with_page(page);
        }
        Ok(params)
    }
}

/// Parse `property[:operator]=value`
pub fn parse_filter(raw: &str) -> Result<Filter> {
    let Some((lhs, value)) = raw.split_once('=') else {
        bail!("invalid filter '{}': expected property[:operator]=value", raw);
    };
    if value.is_empty() {
        bail!("invalid filter '{}': missing value", raw);
    }

    let (property, operator) = match lhs.split_once(':') {
        Some((property, op)) => {
            let operator = op.parse::<FilterOperator>().map_err(|_| {
                anyhow::anyhow!("invalid filter '{}': unknown operator '{}'", raw, op)
            })?;
            (property, operator)
        }
        None => (lhs, infer_operator(value)),
    };
    if property.is_empty() {
        bail!("invalid filter '{}': missing property", raw);
    }

    let values = value.split(',').map(|v| v.trim().to_string()).collect();
    Ok(Filter::new(property, operator, values))
}

fn infer_operator(value: &str) -> FilterOperator {
    if value.contains(',') {
        FilterOperator::In
    } else if value.contains('*') {
        FilterOperator::Lk
    } else {
        FilterOperator::Eq
    }
}

/// Parse `property[:asc|:desc]`
pub fn parse_sort(raw: &str) -> Result<Sort> {
    let (property, descending) = match raw.rsplit_once(':') {
        Some((property, dir)) if dir.eq_ignore_ascii_case("desc") => (property, true),
        Some((property, dir)) if dir.eq_ignore_ascii_case("asc") => (property, false),
        Some((_, dir)) => bail!("invalid sort '{}': unknown direction '{}'", raw, dir),
        None => (raw, false),
    };
    if property.is_empty() {
        bail!("invalid sort '{}': missing property", raw);
    }
    Ok(Sort {
        property: property.to_string(),
        descending,
    })
}

/// `--wait` flag for mutating verbs
#[derive(Args, Clone, Debug, Default)]
pub struct WaitFlag {
    /// Wait for the operation to complete
    #[arg(long)]
    pub wait: bool,
}

/// Collects per-item failures of a batch command
///
/// Each failure is written to stderr as it happens; [`BatchErrors::finish`]
/// turns any failures into a single error so the process exits non-zero.
#[derive(Debug, Default)]
pub struct BatchErrors {
    failed: usize,
}

impl BatchErrors {
    pub fn record(&mut self, message: impl Display) {
        eprintln!("{message}");
        self.failed += 1;
    }

    pub fn finish(self) -> Result<()> {
        if self.failed > 0 {
            bail!("{} operation(s) failed", self.failed);
        }
        Ok(())
    }
}

/// Fetch each ID in turn and print every success together
pub async fn show_each<I, T, E, F, Fut>(
    output: &Output,
    resource: &str,
    ids: &[I],
    columns: &[&str],
    mut fetch: F,
) -> Result<()>
where
    I: Display + Clone,
    T: Serialize,
    E: Display,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let mut errors = BatchErrors::default();
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        match fetch(id.clone()).await {
            Ok(item) => items.push(item),
            Err(e) => errors.record(format!("Error retrieving {} [{}]: {}", resource, id, e)),
        }
    }
    output.print(&items, columns)?;
    errors.finish()
}

/// Run an action for each ID, reporting failures without stopping
///
/// `verb` completes the failure message, e.g. "removing" gives
/// `Error removing instance [i-1]: ...`.
pub async fn for_each<I, F, Fut>(verb: &str, resource: &str, ids: &[I], mut action: F) -> Result<()>
where
    I: Display + Clone,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut errors = BatchErrors::default();
    for id in ids {
        if let Err(e) = action(id.clone()).await {
            errors.record(format!("Error {} {} [{}]: {:#}", verb, resource, id, e));
        }
    }
    errors.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("name=web", "name", FilterOperator::Eq, &["web"] ; "implicit eq")]
    #[test_case("name=web*", "name", FilterOperator::Lk, &["web*"] ; "implicit lk")]
    #[test_case("id=i-1,i-2", "id", FilterOperator::In, &["i-1", "i-2"] ; "implicit in")]
    #[test_case("vcpu_cores:gt=2", "vcpu_cores", FilterOperator::Gt, &["2"] ; "explicit gt")]
    #[test_case("name:NEQ=a=b", "name", FilterOperator::Neq, &["a=b"] ; "value keeps equals")]
    #[test_case("sync.status:eq=complete", "sync.status", FilterOperator::Eq, &["complete"] ; "dotted property")]
    fn test_parse_filter(raw: &str, property: &str, operator: FilterOperator, values: &[&str]) {
        let filter = parse_filter(raw).unwrap();
        assert_eq!(filter.property, property);
        assert_eq!(filter.operator, operator);
        assert_eq!(filter.values, values);
    }

    #[test_case("name" ; "no equals")]
    #[test_case("name=" ; "no value")]
    #[test_case("=web" ; "no property")]
    #[test_case("name:like=web" ; "unknown operator")]
    fn test_parse_filter_rejects(raw: &str) {
        assert!(parse_filter(raw).is_err());
    }

    #[test]
    fn test_parse_sort() {
        let sort = parse_sort("created_at:desc").unwrap();
        assert_eq!(sort.property, "created_at");
        assert!(sort.descending);

        let sort = parse_sort("name").unwrap();
        assert!(!sort.descending);

        assert!(parse_sort("name:sideways").is_err());
    }

    #[test]
    fn test_list_args_parameters() {
        let args = ListArgs {
            filters: vec!["name=web".to_string()],
            sort: Some("name:asc".to_string()),
            page: Some(2),
        };
        let query = args.parameters().unwrap().to_query();
        assert_eq!(
            query,
            vec![
                ("name:eq".to_string(), "web".to_string()),
                ("sort".to_string(), "name".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_batch_errors() {
        assert!(BatchErrors::default().finish().is_ok());

        let mut errors = BatchErrors::default();
        errors.record("Error retrieving vpc [vpc-1]: boom");
        errors.record("Error retrieving vpc [vpc-2]: boom");
        assert_eq!(
            errors.finish().unwrap_err().to_string(),
            "2 operation(s) failed"
        );
    }

    #[tokio::test]
    async fn test_for_each_continues_after_failure() {
        let mut seen = Vec::new();
        let result = for_each("removing", "vpc", &["a", "b", "c"], |id| {
            seen.push(id);
            async move {
                if id == "b" {
                    bail!("boom")
                }
                Ok(())
            }
        })
        .await;

        assert_eq!(seen, vec!["a", "b", "c"]);
        assert_eq!(result.unwrap_err().to_string(), "1 operation(s) failed");
    }
}
