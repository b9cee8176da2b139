//! CLI runner - executes commands

use crate::cli::commands::{BucketCommands, Cli, Commands, NodeBalancerCommands, TicketCommands};
use crate::error::{Error, Result, ResultExt};
use crate::http::{Client, ClientConfig};
use crate::pagination::{ListOptions, Paginated};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let opts = self.list_options()?;

        let output = match &self.cli.command {
            Commands::Tickets(TicketCommands::List) => {
                list_output(client.list_tickets(Some(&opts)).await?)?
            }
            Commands::Tickets(TicketCommands::Get { id }) => {
                serde_json::to_value(client.get_ticket(*id).await?)?
            }
            Commands::Nodebalancers(NodeBalancerCommands::List) => {
                list_output(client.list_node_balancers(Some(&opts)).await?)?
            }
            Commands::Nodebalancers(NodeBalancerCommands::Get { id }) => {
                serde_json::to_value(client.get_node_balancer(*id).await?)?
            }
            Commands::Nodebalancers(NodeBalancerCommands::Delete { id }) => {
                client.delete_node_balancer(*id).await?;
                info!("Deleted NodeBalancer {}", id);
                json!({ "deleted": id })
            }
            Commands::Configs { nodebalancer_id } => list_output(
                client
                    .list_node_balancer_configs(*nodebalancer_id, Some(&opts))
                    .await?,
            )?,
            Commands::Nodes {
                nodebalancer_id,
                config_id,
            } => list_output(
                client
                    .list_node_balancer_nodes(*nodebalancer_id, *config_id, Some(&opts))
                    .await?,
            )?,
            Commands::Buckets(BucketCommands::List { region }) => match region {
                Some(region) => list_output(
                    client
                        .list_object_storage_buckets_in_region(region, Some(&opts))
                        .await?,
                )?,
                None => list_output(client.list_object_storage_buckets(Some(&opts)).await?)?,
            },
            Commands::Buckets(BucketCommands::Get { region, label }) => {
                serde_json::to_value(client.get_object_storage_bucket(region, label).await?)?
            }
        };

        self.print(&output)
    }

    /// Build the API client from flags and environment
    fn client(&self) -> Result<Client> {
        let mut config = ClientConfig::from_env();
        if let Some(ref token) = self.cli.token {
            config.token = Some(token.clone());
        }
        if let Some(ref url) = self.cli.url {
            config.base_url = url.clone();
        }
        if config.token.is_none() {
            return Err(Error::missing_field("token (use --token or LINODE_TOKEN)"));
        }
        Client::with_config(config).context("Failed to create API client")
    }

    /// Build list options from flags
    fn list_options(&self) -> Result<ListOptions> {
        let mut opts = ListOptions::new().page(self.cli.page);
        if let Some(page_size) = self.cli.page_size {
            opts = opts.page_size(page_size);
        }
        if let Some(ref filter) = self.cli.filter {
            let value: Value = serde_json::from_str(filter).context("Invalid --filter JSON")?;
            opts = opts.filter(&value);
        }
        Ok(opts)
    }

    fn print(&self, value: &Value) -> Result<()> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}

/// Render a list result with its page metadata
fn list_output<T: Serialize>(result: Paginated<T>) -> Result<Value> {
    Ok(json!({
        "page": result.page_info.page,
        "pages": result.page_info.pages,
        "results": result.page_info.results,
        "data": serde_json::to_value(&result.items)?,
    }))
}
