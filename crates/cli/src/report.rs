//! Inventory report: total Bulk, encumbrance and container fullness.

use std::fmt::Write as _;

use anyhow::Result;
use bulk_core::{
    BulkConfig, ItemRecord, StackDefinitions, calculate_bulk, calculate_encumbrance, format_bulk,
    get_container_map, to_bulk_items,
};
use console::style;
use serde::Serialize;

use crate::config::CliConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub total: String,
    pub total_light_bulk: u32,
    pub encumbrance: EncumbranceReport,
    pub containers: Vec<ContainerReport>,
    /// Stack-group units that did not fill a stack anywhere.
    pub leftover: Vec<(String, u32)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncumbranceReport {
    pub bulk: u32,
    pub encumbered_at: u32,
    pub limit: u32,
    pub is_encumbered: bool,
    pub is_over_limit: bool,
    pub encumbered_percentage: u32,
    pub limit_percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContainerReport {
    pub id: String,
    pub held: String,
    pub capacity: String,
    pub full_percentage: u32,
    pub is_overloaded: bool,
}

/// Runs the engine over `records` and collects everything the report shows.
pub fn build_report(
    records: &[ItemRecord],
    definitions: &StackDefinitions,
    config: &BulkConfig,
    cli: &CliConfig,
) -> Result<InventoryReport> {
    let items = to_bulk_items(records);
    let (bulk, overflow) = calculate_bulk(&items, definitions, config, cli.actor_size)?;
    let encumbrance = calculate_encumbrance(
        cli.strength,
        cli.bonus_limit,
        cli.bonus_encumbered,
        bulk,
        cli.actor_size,
    );

    let container_map = get_container_map(records, definitions, config, cli.actor_size)?;
    // Record order, first record per id.
    let mut containers: Vec<ContainerReport> = Vec::new();
    for record in records {
        let Some(data) = container_map.get(&record.id) else {
            continue;
        };
        if !data.is_container() || containers.iter().any(|c| c.id == record.id.as_str()) {
            continue;
        }
        containers.push(ContainerReport {
            id: record.id.to_string(),
            held: data.formatted_held_item_bulk.clone(),
            capacity: data.formatted_capacity.clone(),
            full_percentage: data.full_percentage(),
            is_overloaded: data.is_overloaded(),
        });
    }

    Ok(InventoryReport {
        total: format_bulk(bulk),
        total_light_bulk: bulk.to_light_bulk(),
        encumbrance: EncumbranceReport {
            bulk: encumbrance.bulk(),
            encumbered_at: encumbrance.encumbered_at,
            limit: encumbrance.limit,
            is_encumbered: encumbrance.is_encumbered(),
            is_over_limit: encumbrance.is_over_limit(),
            encumbered_percentage: encumbrance.encumbered_percentage(),
            limit_percentage: encumbrance.limit_percentage(),
        },
        containers,
        leftover: overflow
            .iter()
            .map(|(group, quantity)| (group.to_string(), quantity))
            .collect(),
    })
}

/// Human-readable rendering of a report.
pub fn render_summary(report: &InventoryReport) -> String {
    let mut out = String::new();
    let encumbrance = &report.encumbrance;

    let status = if encumbrance.is_over_limit {
        style("over limit").red().bold()
    } else if encumbrance.is_encumbered {
        style("encumbered").yellow().bold()
    } else {
        style("unencumbered").green()
    };

    let _ = writeln!(out, "{} {}", style("Total Bulk:").bold().cyan(), report.total);
    let _ = writeln!(
        out,
        "{} {} ({}% of encumbered, {}% of limit)",
        style("Status:").bold().cyan(),
        status,
        encumbrance.encumbered_percentage,
        encumbrance.limit_percentage,
    );
    let _ = writeln!(
        out,
        "  encumbered above {}, maximum {}",
        format_threshold(encumbrance.encumbered_at),
        format_threshold(encumbrance.limit),
    );

    if !report.containers.is_empty() {
        let _ = writeln!(out, "{}", style("Containers:").bold().cyan());
        for container in &report.containers {
            let fullness = format!("{:>3}%", container.full_percentage);
            let fullness = if container.is_overloaded {
                style(fullness).red()
            } else {
                style(fullness).dim()
            };
            let _ = writeln!(
                out,
                "  {} {} / {}  {}",
                fullness, container.held, container.capacity, container.id
            );
        }
    }

    if !report.leftover.is_empty() {
        let leftover: Vec<String> = report
            .leftover
            .iter()
            .map(|(group, quantity)| format!("{quantity} {group}"))
            .collect();
        let _ = writeln!(
            out,
            "{} {}",
            style("Loose (no Bulk):").bold().cyan(),
            leftover.join(", ")
        );
    }

    out
}

fn format_threshold(light_bulk: u32) -> String {
    format_bulk(bulk_core::Bulk::from_light(light_bulk))
}
