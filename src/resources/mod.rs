//! Resource accessors
//!
//! Typed models and `Client` methods for each API resource. Every accessor
//! builds its path with `api_path!` and goes through either the typed
//! request helpers or the page aggregator.

mod nodebalancer_configs;
mod nodebalancer_nodes;
mod nodebalancers;
mod object_storage;
mod tickets;

pub use nodebalancer_configs::{
    ConfigAlgorithm, ConfigCheck, ConfigCipher, ConfigProtocol, ConfigStickiness,
    NodeBalancerConfig, NodeBalancerConfigCreateOptions, NodeBalancerConfigUpdateOptions,
    NodeBalancerNodeStatus,
};
pub use nodebalancer_nodes::{
    NodeBalancerNode, NodeBalancerNodeCreateOptions, NodeBalancerNodeUpdateOptions, NodeMode,
};
pub use nodebalancers::{
    NodeBalancer, NodeBalancerCreateOptions, NodeBalancerTransfer, NodeBalancerUpdateOptions,
};
pub use object_storage::{ObjectStorageAcl, ObjectStorageBucket, ObjectStorageBucketCreateOptions};
pub use tickets::{Ticket, TicketEntity, TicketStatus};
