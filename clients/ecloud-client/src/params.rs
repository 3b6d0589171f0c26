// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request parameters for collection endpoints
//!
//! The API accepts filters as `property:operator=value` query pairs, a
//! single `sort=property[:desc]` pair, and `page`/`per_page` for paging.

use strum::{Display, EnumString};

/// Comparison operator applied by a [`Filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterOperator {
    Eq,
    Lk,
    Gt,
    Lt,
    In,
    Neq,
    Nin,
    Nlk,
}

/// A single server-side filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub property: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(
        property: impl Into<String>,
        operator: FilterOperator,
        values: Vec<String>,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            values,
        }
    }

    /// Exact-match filter on one value
    pub fn eq(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property, FilterOperator::Eq, vec![value.into()])
    }

    fn to_query(&self) -> (String, String) {
        (
            format!("{}:{}", self.property, self.operator),
            self.values.join(","),
        )
    }
}

/// Sort order for a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub descending: bool,
}

impl Sort {
    fn to_query(&self) -> (String, String) {
        let value = if self.descending {
            format!("{}:desc", self.property)
        } else {
            self.property.clone()
        };
        ("sort".to_string(), value)
    }
}

/// Parameters for a collection request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pub filters: Vec<Filter>,
    pub sort: Option<Sort>,
    /// Fetch only this page; all pages are fetched when unset
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Encode as query pairs, in a stable order
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self.filters.iter().map(Filter::to_query).collect();
        if let Some(sort) = &self.sort {
            query.push(sort.to_query());
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        query
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_empty_parameters() {
        assert!(Parameters::new().to_query().is_empty());
    }

    #[test]
    fn test_filters_sort_and_paging() {
        let params = Parameters::new()
            .with_filter(Filter::eq("name", "web"))
            .with_filter(Filter::new(
                "id",
                FilterOperator::In,
                vec!["i-1".to_string(), "i-2".to_string()],
            ))
            .with_sort(Sort {
                property: "created_at".to_string(),
                descending: true,
            })
            .with_page(2)
            .with_per_page(50);

        assert_eq!(
            params.to_query(),
            vec![
                pair("name:eq", "web"),
                pair("id:in", "i-1,i-2"),
                pair("sort", "created_at:desc"),
                pair("page", "2"),
                pair("per_page", "50"),
            ]
        );
    }

    #[test]
    fn test_ascending_sort_has_no_suffix() {
        let params = Parameters::new().with_sort(Sort {
            property: "name".to_string(),
            descending: false,
        });
        assert_eq!(params.to_query(), vec![pair("sort", "name")]);
    }

    #[test]
    fn test_operator_parse() {
        assert_eq!(FilterOperator::from_str("NLK").unwrap(), FilterOperator::Nlk);
        assert_eq!(FilterOperator::Neq.to_string(), "neq");
        assert!(FilterOperator::from_str("like").is_err());
    }
}
