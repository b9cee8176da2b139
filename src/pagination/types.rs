//! Pagination types
//!
//! Wire envelope for one page of a list endpoint, caller-facing list
//! options, and the aggregated result returned to callers.

use crate::http::RequestMutator;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the JSON filter for list endpoints
pub const FILTER_HEADER: &str = "X-Filter";

/// One page of a paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Current page number (1-indexed)
    #[serde(default)]
    pub page: u32,
    /// Total number of pages
    #[serde(default)]
    pub pages: u32,
    /// Total number of results across all pages
    #[serde(default)]
    pub results: u32,
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Pagination metadata reported by the server for the last fetched page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Last page that was fetched
    pub page: u32,
    /// Total number of pages
    pub pages: u32,
    /// Total number of results
    pub results: u32,
}

/// Caller-supplied shaping for list requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page to fetch; 0 fetches every page
    #[serde(default)]
    pub page: u32,
    /// Items per page requested from the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Opaque JSON filter sent in the `X-Filter` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Total pages reported by the last list call (see [`ListOptions::record`])
    #[serde(default)]
    pub pages: u32,
    /// Total results reported by the last list call (see [`ListOptions::record`])
    #[serde(default)]
    pub results: u32,
}

impl ListOptions {
    /// Create empty list options (fetch all pages)
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the filter from a JSON value
    #[must_use]
    pub fn filter(mut self, filter: &Value) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    /// Set the filter from a raw JSON string
    #[must_use]
    pub fn raw_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Copy the totals of a finished list call back onto these options
    pub fn record(&mut self, info: &PageInfo) {
        self.pages = info.pages;
        self.results = info.results;
    }
}

impl RequestMutator for ListOptions {
    fn mutate(&self, mut request: RequestBuilder) -> RequestBuilder {
        if self.page > 0 {
            request = request.query(&[("page", self.page)]);
        }
        if let Some(page_size) = self.page_size {
            request = request.query(&[("page_size", page_size)]);
        }
        if let Some(ref filter) = self.filter {
            request = request.header(FILTER_HEADER, filter.as_str());
        }
        request
    }
}

/// Items aggregated from a list endpoint plus the server's totals
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Metadata from the last fetched page
    pub page_info: PageInfo,
}

impl<T> Paginated<T> {
    /// Number of items collected
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items were collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the collected items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Take ownership of the collected items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
