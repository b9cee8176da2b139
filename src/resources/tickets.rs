//! Support tickets

use crate::api_path;
use crate::error::Result;
use crate::http::{do_get_request, Client};
use crate::pagination::{get_paginated_results, ListOptions, Paginated};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A support ticket on the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub closed: Option<NaiveDateTime>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub entity: Option<TicketEntity>,
    #[serde(default)]
    pub gravatar_id: String,
    #[serde(default)]
    pub opened: Option<NaiveDateTime>,
    #[serde(default)]
    pub opened_by: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub closeable: bool,
}

/// The entity a ticket refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEntity {
    pub id: u64,
    pub label: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub url: String,
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    Open,
    Closed,
}

impl Client {
    /// List support tickets on the account, open tickets first
    pub async fn list_tickets(&self, opts: Option<&ListOptions>) -> Result<Paginated<Ticket>> {
        get_paginated_results(self, "support/tickets", opts).await
    }

    /// Get a support ticket by ID
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Ticket> {
        let e = api_path!("support/tickets/{}", ticket_id);
        do_get_request(self, &e).await
    }
}
