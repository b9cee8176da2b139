//! NodeBalancer backend nodes

use crate::api_path;
use crate::error::Result;
use crate::http::{do_delete_request, do_get_request, do_post_request, do_put_request, Client};
use crate::pagination::{get_paginated_results, ListOptions, Paginated};
use serde::{Deserialize, Serialize};

/// How traffic is sent to a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    #[default]
    Accept,
    Reject,
    Drain,
    Backup,
}

/// A backend behind a NodeBalancer config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerNode {
    pub id: u64,
    /// `ip:port` of the backend
    pub address: String,
    pub label: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub mode: NodeMode,
    pub config_id: u64,
    pub nodebalancer_id: u64,
}

/// Fields accepted when creating a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerNodeCreateOptions {
    pub address: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<NodeMode>,
}

/// Fields accepted when updating a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerNodeUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<NodeMode>,
}

impl NodeBalancerNode {
    /// Create options that would recreate this node
    pub fn create_options(&self) -> NodeBalancerNodeCreateOptions {
        NodeBalancerNodeCreateOptions {
            address: self.address.clone(),
            label: self.label.clone(),
            weight: Some(self.weight),
            mode: Some(self.mode),
        }
    }

    /// Update options pre-filled with this node's fields
    pub fn update_options(&self) -> NodeBalancerNodeUpdateOptions {
        NodeBalancerNodeUpdateOptions {
            address: Some(self.address.clone()),
            label: Some(self.label.clone()),
            weight: Some(self.weight),
            mode: Some(self.mode),
        }
    }
}

impl Client {
    /// List nodes behind a NodeBalancer config
    pub async fn list_node_balancer_nodes(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Paginated<NodeBalancerNode>> {
        let e = api_path!(
            "nodebalancers/{}/configs/{}/nodes",
            nodebalancer_id,
            config_id
        );
        get_paginated_results(self, &e, opts).await
    }

    /// Get a NodeBalancer node
    pub async fn get_node_balancer_node(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        node_id: u64,
    ) -> Result<NodeBalancerNode> {
        let e = api_path!(
            "nodebalancers/{}/configs/{}/nodes/{}",
            nodebalancer_id,
            config_id,
            node_id
        );
        do_get_request(self, &e).await
    }

    /// Create a node behind a NodeBalancer config
    pub async fn create_node_balancer_node(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        opts: &NodeBalancerNodeCreateOptions,
    ) -> Result<NodeBalancerNode> {
        let e = api_path!(
            "nodebalancers/{}/configs/{}/nodes",
            nodebalancer_id,
            config_id
        );
        do_post_request(self, &e, std::slice::from_ref(opts)).await
    }

    /// Update a NodeBalancer node
    pub async fn update_node_balancer_node(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        node_id: u64,
        opts: &NodeBalancerNodeUpdateOptions,
    ) -> Result<NodeBalancerNode> {
        let e = api_path!(
            "nodebalancers/{}/configs/{}/nodes/{}",
            nodebalancer_id,
            config_id,
            node_id
        );
        do_put_request(self, &e, std::slice::from_ref(opts)).await
    }

    /// Delete a NodeBalancer node
    pub async fn delete_node_balancer_node(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        node_id: u64,
    ) -> Result<()> {
        let e = api_path!(
            "nodebalancers/{}/configs/{}/nodes/{}",
            nodebalancer_id,
            config_id,
            node_id
        );
        do_delete_request(self, &e).await
    }
}
