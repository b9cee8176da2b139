//! Object Storage buckets
//!
//! Buckets are addressed by region and label, both of which are
//! caller-supplied strings and go through path escaping.

use crate::api_path;
use crate::error::Result;
use crate::http::{do_delete_request, do_get_request, do_post_request, Client};
use crate::pagination::{get_paginated_results, ListOptions, Paginated};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An Object Storage bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageBucket {
    pub label: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub s3_endpoint: Option<String>,
    #[serde(default)]
    pub endpoint_type: Option<String>,
    #[serde(default)]
    pub created: Option<NaiveDateTime>,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub objects: u64,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Canned ACL applied to a new bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectStorageAcl {
    Private,
    PublicRead,
    AuthenticatedRead,
    PublicReadWrite,
}

/// Fields accepted when creating a bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageBucketCreateOptions {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<ObjectStorageAcl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_enabled: Option<bool>,
}

impl Client {
    /// List every bucket on the account
    pub async fn list_object_storage_buckets(
        &self,
        opts: Option<&ListOptions>,
    ) -> Result<Paginated<ObjectStorageBucket>> {
        get_paginated_results(self, "object-storage/buckets", opts).await
    }

    /// List buckets in one region
    pub async fn list_object_storage_buckets_in_region(
        &self,
        region: &str,
        opts: Option<&ListOptions>,
    ) -> Result<Paginated<ObjectStorageBucket>> {
        let e = api_path!("object-storage/buckets/{}", region);
        get_paginated_results(self, &e, opts).await
    }

    /// Get a bucket by region and label
    pub async fn get_object_storage_bucket(
        &self,
        region: &str,
        label: &str,
    ) -> Result<ObjectStorageBucket> {
        let e = api_path!("object-storage/buckets/{}/{}", region, label);
        do_get_request(self, &e).await
    }

    /// Create a bucket
    pub async fn create_object_storage_bucket(
        &self,
        opts: &ObjectStorageBucketCreateOptions,
    ) -> Result<ObjectStorageBucket> {
        do_post_request(self, "object-storage/buckets", std::slice::from_ref(opts)).await
    }

    /// Delete a bucket by region and label
    pub async fn delete_object_storage_bucket(&self, region: &str, label: &str) -> Result<()> {
        let e = api_path!("object-storage/buckets/{}/{}", region, label);
        do_delete_request(self, &e).await
    }
}
