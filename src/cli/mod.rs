//! CLI module
//!
//! Command-line interface over the API client.
//!
//! # Commands
//!
//! - `tickets list|get` - Support tickets
//! - `nodebalancers list|get|delete` - NodeBalancers
//! - `configs <nb>` - Configs on a NodeBalancer
//! - `nodes <nb> <config>` - Nodes behind a config
//! - `buckets list|get` - Object Storage buckets

mod commands;
mod runner;

pub use commands::{BucketCommands, Cli, Commands, NodeBalancerCommands, TicketCommands};
pub use runner::Runner;
