//! Command-line interface for quoting courier deliveries on a city map.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod quote;

pub use error::CliError;

use quote::{QuoteArgs, run_quote};

pub(crate) const ARG_QUOTE_MAP: &str = "map";
pub(crate) const ARG_QUOTE_RESTAURANT: &str = "restaurant";
pub(crate) const ARG_QUOTE_CLIENT: &str = "client";
pub(crate) const ARG_QUOTE_FOOD_ITEM: &str = "food-item";
pub(crate) const ARG_QUOTE_OBJECTIVE: &str = "objective";
pub(crate) const ARG_QUOTE_MAX_PRICE: &str = "max-price";
pub(crate) const ARG_QUOTE_MAX_TIME: &str = "max-time";
pub(crate) const ENV_QUOTE_MAP: &str = "DISPATCH_CMDS_QUOTE_MAP";
pub(crate) const ENV_QUOTE_RESTAURANT: &str = "DISPATCH_CMDS_QUOTE_RESTAURANT";
pub(crate) const ENV_QUOTE_CLIENT: &str = "DISPATCH_CMDS_QUOTE_CLIENT";
pub(crate) const ENV_QUOTE_FOOD_ITEM: &str = "DISPATCH_CMDS_QUOTE_FOOD_ITEM";

/// Run the `dispatch` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments fail to parse, configuration is
/// incomplete, the map cannot be loaded, or the order is refused.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Quote(args) => run_quote(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch",
    about = "Match food orders to the best courier on a grid city map",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote the best delivery for one order.
    Quote(QuoteArgs),
}

#[cfg(test)]
mod tests;
