//! Command implementations for regionctl.

use crate::client::DaemonClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use region_common::NodeCoordinates;

pub async fn status(client: &DaemonClient) -> Result<()> {
    let health = client.health().await?;

    println!("regiond {} - {}", health.version, health.status.green());
    println!("uptime: {}s", health.uptime_seconds);
    Ok(())
}

pub async fn regions(
    client: &DaemonClient,
    identifier: String,
    entity: String,
    node: String,
    pretty: bool,
) -> Result<()> {
    let coords = NodeCoordinates::new(identifier, entity, node);
    let document = client.regions(&coords).await?;

    let text = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        document.to_string()
    };
    println!("{text}");
    Ok(())
}
