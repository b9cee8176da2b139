//! HTTP module
//!
//! Provides the request dispatcher and path builder every resource uses.
//!
//! # Features
//!
//! - **Path Building**: `api_path!` escapes string arguments for path segments
//! - **Dispatch**: one request per call, error envelope decoding, cancellation
//! - **Typed Helpers**: GET/POST/PUT/DELETE with JSON encode and decode

mod client;
mod path;
mod request;

pub use client::{
    Client, ClientConfig, ClientConfigBuilder, RequestMutator, RequestParams, API_VERSION_ENV,
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, TOKEN_ENV, URL_ENV,
};
pub use path::{format_api_path, PathArg};
pub use request::{do_delete_request, do_get_request, do_post_request, do_put_request};
