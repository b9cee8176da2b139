//! Page aggregation
//!
//! Walks a list endpoint one page at a time and concatenates the `data`
//! arrays in server order.

use super::types::{ListOptions, PageInfo, Paginated, PaginatedResponse};
use crate::error::Result;
use crate::http::{Client, RequestParams};
use crate::types::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Aggregate results from a paginated endpoint.
///
/// With no page requested (`page == 0`) every page from 1 to the total
/// reported by the first response is fetched in order. A specific page
/// fetches only that page. The first failure aborts the call and no
/// partial items are returned.
pub async fn get_paginated_results<T: DeserializeOwned>(
    client: &Client,
    endpoint: &str,
    opts: Option<&ListOptions>,
) -> Result<Paginated<T>> {
    let mut request_opts = opts.cloned().unwrap_or_default();
    let mut items = Vec::new();

    let page_defined = request_opts.page > 0;
    let starting_page = if page_defined { request_opts.page } else { 1 };

    let mut page_info =
        fetch_page(client, endpoint, &mut request_opts, starting_page, &mut items).await?;

    if page_defined {
        return Ok(Paginated { items, page_info });
    }

    let total_pages = page_info.pages;
    for page in 2..=total_pages {
        page_info = fetch_page(client, endpoint, &mut request_opts, page, &mut items).await?;
    }

    Ok(Paginated { items, page_info })
}

/// Fetch one page and append its items
async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    endpoint: &str,
    opts: &mut ListOptions,
    page: u32,
    items: &mut Vec<T>,
) -> Result<PageInfo> {
    opts.page = page;

    let params = RequestParams::new().mutator(&*opts);
    let body = client.do_request(Method::GET, endpoint, params).await?;
    let response: PaginatedResponse<T> = serde_json::from_slice(&body)?;

    debug!(
        "Fetched page {}/{} of {} ({} items, {} results)",
        page,
        response.pages,
        endpoint,
        response.data.len(),
        response.results
    );

    items.extend(response.data);

    Ok(PageInfo {
        page: if response.page > 0 { response.page } else { page },
        pages: response.pages,
        results: response.results,
    })
}
