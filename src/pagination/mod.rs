//! Pagination module
//!
//! Supports the single `page`/`pages`/`results`/`data` envelope used by
//! every list endpoint of the API.
//!
//! # Overview
//!
//! [`get_paginated_results`] fetches page 1, learns the total page count,
//! then fetches the remaining pages strictly in order. Callers that ask for
//! a specific page through [`ListOptions`] get only that page.

mod aggregator;
mod types;

pub use aggregator::get_paginated_results;
pub use types::{ListOptions, PageInfo, Paginated, PaginatedResponse, FILTER_HEADER};

#[cfg(test)]
mod tests;
