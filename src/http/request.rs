//! Typed request helpers
//!
//! Thin wrappers over [`Client::do_request`] that encode request bodies and
//! decode JSON responses into the caller's type.

use super::client::{Client, RequestParams};
use crate::error::{Error, Result};
use crate::types::Method;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Run a GET request against `endpoint` and decode the response
pub async fn do_get_request<T: DeserializeOwned>(client: &Client, endpoint: &str) -> Result<T> {
    let body = client
        .do_request(Method::GET, endpoint, RequestParams::new())
        .await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Run a POST request with at most one options value as the JSON body
pub async fn do_post_request<T, O>(client: &Client, endpoint: &str, options: &[O]) -> Result<T>
where
    T: DeserializeOwned,
    O: Serialize,
{
    send_with_options(client, Method::POST, endpoint, options).await
}

/// Run a PUT request with at most one options value as the JSON body
pub async fn do_put_request<T, O>(client: &Client, endpoint: &str, options: &[O]) -> Result<T>
where
    T: DeserializeOwned,
    O: Serialize,
{
    send_with_options(client, Method::PUT, endpoint, options).await
}

/// Run a DELETE request; only success or failure is reported
pub async fn do_delete_request(client: &Client, endpoint: &str) -> Result<()> {
    client
        .do_request(Method::DELETE, endpoint, RequestParams::new())
        .await?;
    Ok(())
}

async fn send_with_options<T, O>(
    client: &Client,
    method: Method,
    endpoint: &str,
    options: &[O],
) -> Result<T>
where
    T: DeserializeOwned,
    O: Serialize,
{
    let mut params = RequestParams::new();
    if let Some(body) = encode_options(options)? {
        params = params.body(body);
    }

    let body = client.do_request(method, endpoint, params).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Encode the options slice into a request body.
///
/// No options, or an options value that serializes to `null` (such as
/// `None`), means no body. More than one options value is rejected.
pub(crate) fn encode_options<O: Serialize>(options: &[O]) -> Result<Option<Bytes>> {
    match options {
        [] => Ok(None),
        [opts] => {
            let value = serde_json::to_value(opts)?;
            if value.is_null() {
                return Ok(None);
            }
            Ok(Some(Bytes::from(serde_json::to_vec(&value)?)))
        }
        _ => Err(Error::InvalidOptions {
            count: options.len(),
        }),
    }
}
