//! # Linode API Client
//!
//! A typed async client for the Linode v4 REST API.
//!
//! ## Features
//!
//! - **Typed Requests**: GET/POST/PUT/DELETE with JSON encode and decode
//! - **Transparent Pagination**: list calls walk every page and return one collection
//! - **Safe Paths**: string path arguments are percent-escaped
//! - **Structured Errors**: API error envelopes decode into code and message
//! - **Cancellation**: in-flight requests abort through a `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linode_api::{Client, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!
//!     // Every page, concatenated in server order
//!     let tickets = client.list_tickets(None).await?;
//!     println!("{} of {} tickets", tickets.len(), tickets.page_info.results);
//!
//!     // Only page 2
//!     let page = client
//!         .list_node_balancers(Some(&ListOptions::new().page(2)))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource Accessors                       │
//! │  tickets  nodebalancers  configs  nodes  object storage     │
//! └─────────────────────────────────────────────────────────────┘
//!            │                                  │
//! ┌──────────┴──────────┐            ┌──────────┴──────────┐
//! │  Typed Helpers      │            │  Page Aggregator    │
//! │  GET/POST/PUT/DEL   │◄───────────│  page 1..N in order │
//! └──────────┬──────────┘            └─────────────────────┘
//!            │
//! ┌──────────┴──────────────────────────────────────────────────┐
//! │  Client::do_request  (path, auth, mutator, error envelope)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client, request dispatcher and path builder
pub mod http;

/// Page aggregation for list endpoints
pub mod pagination;

/// Typed resource models and accessors
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{Client, ClientConfig};
pub use pagination::{ListOptions, PageInfo, Paginated};
pub use resources::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
