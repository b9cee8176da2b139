//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::http::{Client, ClientConfig, RequestMutator};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use std::ops::Range;
use std::time::Duration;
use test_case::test_case;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Item {
    id: u32,
}

fn page_body(page: u32, pages: u32, results: u32, ids: Range<u32>) -> Value {
    let data: Vec<Value> = ids.map(|id| json!({ "id": id })).collect();
    json!({
        "page": page,
        "pages": pages,
        "results": results,
        "data": data
    })
}

fn test_client(server: &MockServer) -> Client {
    Client::with_config(ClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

async fn mount_page(server: &MockServer, page: u32, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// Envelope and Options Tests
// ============================================================================

#[test]
fn test_paginated_response_deserialize() {
    let response: PaginatedResponse<Item> =
        serde_json::from_value(page_body(2, 3, 25, 10..20)).unwrap();

    assert_eq!(response.page, 2);
    assert_eq!(response.pages, 3);
    assert_eq!(response.results, 25);
    assert_eq!(response.data.len(), 10);
    assert_eq!(response.data[0], Item { id: 10 });
}

#[test]
fn test_paginated_response_missing_data() {
    let response: PaginatedResponse<Item> =
        serde_json::from_value(json!({"page": 1, "pages": 0, "results": 0})).unwrap();
    assert!(response.data.is_empty());
}

#[test]
fn test_list_options_builder() {
    let opts = ListOptions::new()
        .page(3)
        .page_size(50)
        .filter(&json!({"status": "open"}));

    assert_eq!(opts.page, 3);
    assert_eq!(opts.page_size, Some(50));
    assert_eq!(opts.filter.as_deref(), Some(r#"{"status":"open"}"#));
    assert_eq!(opts.pages, 0);
    assert_eq!(opts.results, 0);
}

#[test]
fn test_list_options_record() {
    let mut opts = ListOptions::new();
    opts.record(&PageInfo {
        page: 3,
        pages: 3,
        results: 25,
    });

    assert_eq!(opts.pages, 3);
    assert_eq!(opts.results, 25);
    assert_eq!(opts.page, 0);
}

#[test]
fn test_list_options_mutator() {
    let opts = ListOptions::new()
        .page(2)
        .page_size(25)
        .raw_filter(r#"{"label":"web"}"#);

    let request = opts
        .mutate(reqwest::Client::new().get("https://api.example.com/v4/items"))
        .build()
        .unwrap();

    assert_eq!(request.url().query(), Some("page=2&page_size=25"));
    assert_eq!(
        request.headers().get(FILTER_HEADER).unwrap(),
        r#"{"label":"web"}"#
    );
}

#[test]
fn test_list_options_mutator_empty() {
    let request = ListOptions::new()
        .mutate(reqwest::Client::new().get("https://api.example.com/v4/items"))
        .build()
        .unwrap();

    assert_eq!(request.url().query(), None);
    assert!(request.headers().get(FILTER_HEADER).is_none());
}

#[test]
fn test_paginated_helpers() {
    let paginated = Paginated {
        items: vec![Item { id: 1 }, Item { id: 2 }],
        page_info: PageInfo {
            page: 1,
            pages: 1,
            results: 2,
        },
    };

    assert_eq!(paginated.len(), 2);
    assert!(!paginated.is_empty());
    assert_eq!(paginated.iter().map(|i| i.id).sum::<u32>(), 3);
    let ids: Vec<u32> = paginated.clone().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(paginated.into_items(), vec![Item { id: 1 }, Item { id: 2 }]);
    assert!(Paginated::<Item>::default().is_empty());
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[tokio::test]
async fn test_aggregates_all_pages_in_order() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, page_body(1, 3, 25, 0..10), 1).await;
    mount_page(&mock_server, 2, page_body(2, 3, 25, 10..20), 1).await;
    mount_page(&mock_server, 3, page_body(3, 3, 25, 20..25), 1).await;

    let client = test_client(&mock_server);
    let mut opts = ListOptions::new();
    let result: Paginated<Item> = get_paginated_results(&client, "items", Some(&opts))
        .await
        .unwrap();
    opts.record(&result.page_info);

    assert_eq!(result.len(), 25);
    let ids: Vec<u32> = result.iter().map(|i| i.id).collect();
    assert_eq!(ids, (0..25).collect::<Vec<_>>());
    assert_eq!(
        result.page_info,
        PageInfo {
            page: 3,
            pages: 3,
            results: 25
        }
    );
    assert_eq!(opts.pages, 3);
    assert_eq!(opts.results, 25);
}

#[tokio::test]
async fn test_requests_are_sequential_by_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, page_body(1, 3, 6, 0..2), 1).await;
    mount_page(&mock_server, 2, page_body(2, 3, 6, 2..4), 1).await;
    mount_page(&mock_server, 3, page_body(3, 3, 6, 4..6), 1).await;

    let client = test_client(&mock_server);
    let _: Paginated<Item> = get_paginated_results(&client, "items", None)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let pages: Vec<String> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_explicit_page_fetches_only_that_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, page_body(1, 3, 25, 0..10), 0).await;
    mount_page(&mock_server, 2, page_body(2, 3, 25, 10..20), 1).await;
    mount_page(&mock_server, 3, page_body(3, 3, 25, 20..25), 0).await;

    let client = test_client(&mock_server);
    let opts = ListOptions::new().page(2);
    let result: Paginated<Item> = get_paginated_results(&client, "items", Some(&opts))
        .await
        .unwrap();

    let ids: Vec<u32> = result.iter().map(|i| i.id).collect();
    assert_eq!(ids, (10..20).collect::<Vec<_>>());
    assert_eq!(result.page_info.page, 2);
    assert_eq!(result.page_info.pages, 3);
    assert_eq!(result.page_info.results, 25);
}

#[test_case(2, 2 ; "server echoes requested page")]
#[test_case(3, 3 ; "server reports a different page")]
#[test_case(0, 2 ; "server omits page")]
#[tokio::test]
async fn test_page_info_reports_server_page(reported: u32, expected: u32) {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 2, page_body(reported, 3, 25, 10..20), 1).await;

    let client = test_client(&mock_server);
    let opts = ListOptions::new().page(2);
    let result: Paginated<Item> = get_paginated_results(&client, "items", Some(&opts))
        .await
        .unwrap();

    assert_eq!(result.len(), 10);
    assert_eq!(result.page_info.page, expected);
}

#[tokio::test]
async fn test_single_page_issues_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, 3, 0..3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result: Paginated<Item> = get_paginated_results(&client, "items", None)
        .await
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.page_info.pages, 1);
}

#[tokio::test]
async fn test_zero_pages_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "pages": 0,
            "results": 0,
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result: Paginated<Item> = get_paginated_results(&client, "items", None)
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.page_info.results, 0);
}

#[tokio::test]
async fn test_mid_sequence_failure_discards_partial_results() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, page_body(1, 3, 25, 0..10), 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"reason": "Internal server error"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 3, page_body(3, 3, 25, 20..25), 0).await;

    let client = test_client(&mock_server);
    let result: crate::Result<Paginated<Item>> =
        get_paginated_results(&client, "items", None).await;

    match result {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_page_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "pages": 1,
            "results": 1,
            "data": [{"id": "not-a-number"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result: crate::Result<Paginated<Item>> =
        get_paginated_results(&client, "items", None).await;

    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn test_page_size_and_filter_are_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "25"))
        .and(header(FILTER_HEADER, r#"{"label":"web"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 2, 30, 0..25)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "25"))
        .and(header(FILTER_HEADER, r#"{"label":"web"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, 2, 30, 25..30)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let opts = ListOptions::new()
        .page_size(25)
        .filter(&json!({"label": "web"}));
    let result: Paginated<Item> = get_paginated_results(&client, "items", Some(&opts))
        .await
        .unwrap();

    assert_eq!(result.len(), 30);
    // The caller's options are left untouched
    assert_eq!(opts.page, 0);
}

#[tokio::test]
async fn test_cancellation_aborts_aggregation() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, page_body(1, 2, 4, 0..2), 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/items"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(2, 2, 4, 2..4))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = test_client(&mock_server).with_cancellation(token.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        token.cancel();
    });

    let result: crate::Result<Paginated<Item>> =
        get_paginated_results(&client, "items", None).await;

    assert!(matches!(result, Err(Error::Cancelled)));
}
