//! NodeBalancers

use crate::api_path;
use crate::error::Result;
use crate::http::{do_delete_request, do_get_request, do_post_request, do_put_request, Client};
use crate::pagination::{get_paginated_results, ListOptions, Paginated};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::nodebalancer_configs::NodeBalancerConfigCreateOptions;

/// A NodeBalancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancer {
    pub id: u64,
    #[serde(default)]
    pub label: Option<String>,
    pub region: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
    /// Connections per second allowed from a single client IP
    #[serde(default)]
    pub client_conn_throttle: u32,
    #[serde(default)]
    pub transfer: NodeBalancerTransfer,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated: Option<NaiveDateTime>,
}

/// Network transfer stats in MB for the current month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerTransfer {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(rename = "out", default)]
    pub outbound: Option<f64>,
    #[serde(rename = "in", default)]
    pub inbound: Option<f64>,
}

/// Fields accepted when creating a NodeBalancer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_conn_throttle: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configs: Vec<NodeBalancerConfigCreateOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_id: Option<u64>,
}

/// Fields accepted when updating a NodeBalancer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_conn_throttle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NodeBalancer {
    /// Create options that would recreate this NodeBalancer
    pub fn create_options(&self) -> NodeBalancerCreateOptions {
        NodeBalancerCreateOptions {
            label: self.label.clone(),
            region: Some(self.region.clone()),
            client_conn_throttle: Some(self.client_conn_throttle),
            configs: Vec::new(),
            tags: self.tags.clone(),
            firewall_id: None,
        }
    }

    /// Update options pre-filled with this NodeBalancer's mutable fields
    pub fn update_options(&self) -> NodeBalancerUpdateOptions {
        NodeBalancerUpdateOptions {
            label: self.label.clone(),
            client_conn_throttle: Some(self.client_conn_throttle),
            tags: Some(self.tags.clone()),
        }
    }
}

impl Client {
    /// List NodeBalancers on the account
    pub async fn list_node_balancers(
        &self,
        opts: Option<&ListOptions>,
    ) -> Result<Paginated<NodeBalancer>> {
        get_paginated_results(self, "nodebalancers", opts).await
    }

    /// Get a NodeBalancer by ID
    pub async fn get_node_balancer(&self, nodebalancer_id: u64) -> Result<NodeBalancer> {
        let e = api_path!("nodebalancers/{}", nodebalancer_id);
        do_get_request(self, &e).await
    }

    /// Create a NodeBalancer
    pub async fn create_node_balancer(
        &self,
        opts: &NodeBalancerCreateOptions,
    ) -> Result<NodeBalancer> {
        do_post_request(self, "nodebalancers", std::slice::from_ref(opts)).await
    }

    /// Update a NodeBalancer
    pub async fn update_node_balancer(
        &self,
        nodebalancer_id: u64,
        opts: &NodeBalancerUpdateOptions,
    ) -> Result<NodeBalancer> {
        let e = api_path!("nodebalancers/{}", nodebalancer_id);
        do_put_request(self, &e, std::slice::from_ref(opts)).await
    }

    /// Delete a NodeBalancer
    pub async fn delete_node_balancer(&self, nodebalancer_id: u64) -> Result<()> {
        let e = api_path!("nodebalancers/{}", nodebalancer_id);
        do_delete_request(self, &e).await
    }
}
