//! Quote command implementation for the dispatch CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dispatch_core::{Cell, Constraint, EntityType, Grid, Location, Objective};
use dispatch_orders::{Delivery, Order, OrderService};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_QUOTE_CLIENT, ARG_QUOTE_FOOD_ITEM, ARG_QUOTE_MAP, ARG_QUOTE_MAX_PRICE,
    ARG_QUOTE_MAX_TIME, ARG_QUOTE_OBJECTIVE, ARG_QUOTE_RESTAURANT, CliError, ENV_QUOTE_CLIENT,
    ENV_QUOTE_FOOD_ITEM, ENV_QUOTE_MAP, ENV_QUOTE_RESTAURANT,
};

/// CLI arguments for the `quote` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a city map, validate the order against it and print \
                 the winning delivery as JSON. Inputs can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Quote the best courier for an order"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct QuoteArgs {
    /// Path to the map text file, one row per line.
    #[arg(long = ARG_QUOTE_MAP, value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
    /// Restaurant location as `row,col`.
    #[arg(long = ARG_QUOTE_RESTAURANT, value_name = "row,col")]
    #[serde(default)]
    pub(crate) restaurant: Option<String>,
    /// Client location as `row,col`.
    #[arg(long = ARG_QUOTE_CLIENT, value_name = "row,col")]
    #[serde(default)]
    pub(crate) client: Option<String>,
    /// Name of the food item being delivered.
    #[arg(long = ARG_QUOTE_FOOD_ITEM, value_name = "name")]
    #[serde(default)]
    pub(crate) food_item: Option<String>,
    /// `cheapest` (default) or `fastest`.
    #[arg(long = ARG_QUOTE_OBJECTIVE, value_name = "objective")]
    #[serde(default)]
    pub(crate) objective: Option<Objective>,
    /// Highest acceptable price.
    #[arg(long = ARG_QUOTE_MAX_PRICE, value_name = "price")]
    #[serde(default)]
    pub(crate) max_price: Option<u64>,
    /// Highest acceptable delivery time in minutes.
    #[arg(long = ARG_QUOTE_MAX_TIME, value_name = "minutes")]
    #[serde(default)]
    pub(crate) max_time: Option<u64>,
}

impl QuoteArgs {
    pub(crate) fn into_config(self) -> Result<QuoteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QuoteConfig::try_from(merged)
    }
}

/// Resolved `quote` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteConfig {
    /// Path to the map text file.
    pub(crate) map: Utf8PathBuf,
    /// Restaurant location.
    pub(crate) restaurant: Location,
    /// Client location.
    pub(crate) client: Location,
    /// Food item name.
    pub(crate) food_item: String,
    /// Comparison key between couriers.
    pub(crate) objective: Objective,
    /// Price and time ceilings.
    pub(crate) constraint: Constraint,
}

impl QuoteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.map, ARG_QUOTE_MAP)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match dispatch_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn order(&self) -> Order {
        Order::new(
            Cell::new(self.client, EntityType::Client),
            Cell::new(self.restaurant, EntityType::Restaurant),
            self.food_item.as_str(),
            self.objective,
            self.constraint,
        )
    }
}

impl TryFrom<QuoteArgs> for QuoteConfig {
    type Error = CliError;

    fn try_from(args: QuoteArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_QUOTE_MAP,
            env: ENV_QUOTE_MAP,
        })?;
        let restaurant = parse_location(
            args.restaurant,
            ARG_QUOTE_RESTAURANT,
            ENV_QUOTE_RESTAURANT,
        )?;
        let client = parse_location(args.client, ARG_QUOTE_CLIENT, ENV_QUOTE_CLIENT)?;
        let food_item = args.food_item.ok_or(CliError::MissingArgument {
            field: ARG_QUOTE_FOOD_ITEM,
            env: ENV_QUOTE_FOOD_ITEM,
        })?;
        let constraint = Constraint {
            max_price: args.max_price,
            max_time: args.max_time,
        };

        Ok(Self {
            map,
            restaurant,
            client,
            food_item,
            objective: args.objective.unwrap_or_default(),
            constraint,
        })
    }
}

fn parse_location(
    value: Option<String>,
    field: &'static str,
    env: &'static str,
) -> Result<Location, CliError> {
    let raw = value.ok_or(CliError::MissingArgument { field, env })?;
    raw.parse()
        .map_err(|source| CliError::InvalidLocation { field, source })
}

pub(super) fn run_quote(args: QuoteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_quote_with(args, &mut stdout)
}

pub(super) fn run_quote_with(args: QuoteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let delivery = execute_quote(args)?;
    write_delivery(writer, &delivery)
}

fn execute_quote(args: QuoteArgs) -> Result<Delivery, CliError> {
    let config = resolve_quote_config(args)?;
    let grid = load_map(&config.map)?;
    info!(
        "loaded {} rows from {}; quoting {} from {} to {}",
        grid.row_count(),
        config.map,
        config.objective,
        config.restaurant,
        config.client
    );
    let service = OrderService::from_grid(grid);
    service.place(&config.order()).map_err(CliError::from)
}

fn resolve_quote_config(args: QuoteArgs) -> Result<QuoteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Reads and parses a map file.
pub(super) fn load_map(path: &Utf8Path) -> Result<Grid, CliError> {
    let text = dispatch_fs::read_utf8_to_string(path).map_err(|source| CliError::ReadMap {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse().map_err(|source| CliError::ParseMap {
        path: path.to_path_buf(),
        source,
    })
}

fn write_delivery(writer: &mut dyn Write, delivery: &Delivery) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(delivery).map_err(CliError::SerialiseDelivery)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteQuoteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteQuoteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QuoteConfig, CliError> {
    let merged = QuoteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QuoteConfig::try_from(merged)
}
