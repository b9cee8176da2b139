//! NodeBalancer port configurations

use crate::api_path;
use crate::error::Result;
use crate::http::{do_delete_request, do_get_request, do_post_request, do_put_request, Client};
use crate::pagination::{get_paginated_results, ListOptions, Paginated};
use serde::{Deserialize, Serialize};

use super::nodebalancer_nodes::NodeBalancerNodeCreateOptions;

/// Protocol a config port speaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigProtocol {
    #[default]
    Http,
    Https,
    Tcp,
    Udp,
}

/// Balancing algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigAlgorithm {
    #[default]
    Roundrobin,
    Leastconn,
    Source,
    RingHash,
}

/// Session stickiness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStickiness {
    #[default]
    None,
    Table,
    HttpCookie,
    SessionAffinity,
    SourceIp,
}

/// Active health check type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigCheck {
    #[default]
    None,
    Connection,
    Http,
    HttpBody,
}

/// TLS cipher suite for HTTPS configs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigCipher {
    #[default]
    Recommended,
    Legacy,
    None,
}

/// Node health counts for a config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBalancerNodeStatus {
    #[serde(default)]
    pub up: u32,
    #[serde(default)]
    pub down: u32,
}

/// A port configuration on a NodeBalancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerConfig {
    pub id: u64,
    pub port: u16,
    #[serde(default)]
    pub protocol: ConfigProtocol,
    #[serde(default)]
    pub algorithm: ConfigAlgorithm,
    #[serde(default)]
    pub stickiness: ConfigStickiness,
    #[serde(default)]
    pub check: ConfigCheck,
    #[serde(default)]
    pub check_interval: u32,
    #[serde(default)]
    pub check_attempts: u32,
    #[serde(default)]
    pub check_path: String,
    #[serde(default)]
    pub check_body: String,
    #[serde(default)]
    pub check_passive: bool,
    #[serde(default)]
    pub check_timeout: u32,
    #[serde(default)]
    pub cipher_suite: ConfigCipher,
    pub nodebalancer_id: u64,
    #[serde(default)]
    pub ssl_commonname: String,
    #[serde(default)]
    pub ssl_fingerprint: String,
    #[serde(default)]
    pub nodes_status: NodeBalancerNodeStatus,
}

/// Fields accepted when creating a config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancerConfigCreateOptions {
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ConfigProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<ConfigAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickiness: Option<ConfigStickiness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<ConfigCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_passive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_suite: Option<ConfigCipher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeBalancerNodeCreateOptions>,
}

/// Updates share the create shape; unset fields are left unchanged
pub type NodeBalancerConfigUpdateOptions = NodeBalancerConfigCreateOptions;

impl NodeBalancerConfig {
    /// Update options pre-filled with this config's fields
    pub fn update_options(&self) -> NodeBalancerConfigUpdateOptions {
        NodeBalancerConfigUpdateOptions {
            port: self.port,
            protocol: Some(self.protocol),
            algorithm: Some(self.algorithm),
            stickiness: Some(self.stickiness),
            check: Some(self.check),
            check_interval: Some(self.check_interval),
            check_attempts: Some(self.check_attempts),
            check_path: Some(self.check_path.clone()),
            check_body: Some(self.check_body.clone()),
            check_passive: Some(self.check_passive),
            check_timeout: Some(self.check_timeout),
            cipher_suite: Some(self.cipher_suite),
            ssl_cert: None,
            ssl_key: None,
            nodes: Vec::new(),
        }
    }
}

impl Client {
    /// List configs on a NodeBalancer
    pub async fn list_node_balancer_configs(
        &self,
        nodebalancer_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Paginated<NodeBalancerConfig>> {
        let e = api_path!("nodebalancers/{}/configs", nodebalancer_id);
        get_paginated_results(self, &e, opts).await
    }

    /// Get a NodeBalancer config
    pub async fn get_node_balancer_config(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
    ) -> Result<NodeBalancerConfig> {
        let e = api_path!("nodebalancers/{}/configs/{}", nodebalancer_id, config_id);
        do_get_request(self, &e).await
    }

    /// Create a config on a NodeBalancer
    pub async fn create_node_balancer_config(
        &self,
        nodebalancer_id: u64,
        opts: &NodeBalancerConfigCreateOptions,
    ) -> Result<NodeBalancerConfig> {
        let e = api_path!("nodebalancers/{}/configs", nodebalancer_id);
        do_post_request(self, &e, std::slice::from_ref(opts)).await
    }

    /// Update a NodeBalancer config
    pub async fn update_node_balancer_config(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
        opts: &NodeBalancerConfigUpdateOptions,
    ) -> Result<NodeBalancerConfig> {
        let e = api_path!("nodebalancers/{}/configs/{}", nodebalancer_id, config_id);
        do_put_request(self, &e, std::slice::from_ref(opts)).await
    }

    /// Delete a NodeBalancer config
    pub async fn delete_node_balancer_config(
        &self,
        nodebalancer_id: u64,
        config_id: u64,
    ) -> Result<()> {
        let e = api_path!("nodebalancers/{}/configs/{}", nodebalancer_id, config_id);
        do_delete_request(self, &e).await
    }
}
