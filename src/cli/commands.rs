//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Linode API command-line client
#[derive(Parser, Debug)]
#[command(name = "linode-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API token (defaults to $LINODE_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// API host (defaults to $LINODE_URL or https://api.linode.com)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Fetch only this page of a list (0 = all pages)
    #[arg(long, global = true, default_value = "0")]
    pub page: u32,

    /// Items per page for list requests
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// JSON filter for list requests
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Support tickets
    #[command(subcommand)]
    Tickets(TicketCommands),

    /// NodeBalancers
    #[command(subcommand)]
    Nodebalancers(NodeBalancerCommands),

    /// List configs on a NodeBalancer
    Configs {
        /// NodeBalancer ID
        nodebalancer_id: u64,
    },

    /// List nodes behind a NodeBalancer config
    Nodes {
        /// NodeBalancer ID
        nodebalancer_id: u64,
        /// Config ID
        config_id: u64,
    },

    /// Object Storage buckets
    #[command(subcommand)]
    Buckets(BucketCommands),
}

/// Ticket subcommands
#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// List tickets
    List,
    /// Show one ticket
    Get {
        /// Ticket ID
        id: u64,
    },
}

/// NodeBalancer subcommands
#[derive(Subcommand, Debug)]
pub enum NodeBalancerCommands {
    /// List NodeBalancers
    List,
    /// Show one NodeBalancer
    Get {
        /// NodeBalancer ID
        id: u64,
    },
    /// Delete a NodeBalancer
    Delete {
        /// NodeBalancer ID
        id: u64,
    },
}

/// Bucket subcommands
#[derive(Subcommand, Debug)]
pub enum BucketCommands {
    /// List buckets, optionally in one region
    List {
        /// Region or cluster
        #[arg(long)]
        region: Option<String>,
    },
    /// Show one bucket
    Get {
        /// Region or cluster
        region: String,
        /// Bucket label
        label: String,
    },
}
