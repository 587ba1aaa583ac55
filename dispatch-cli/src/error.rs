//! Error types emitted by the dispatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dispatch_core::{GridError, ParseLocationError};
use dispatch_orders::OrderError;
use thiserror::Error;

/// Errors emitted by the dispatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A location option is not of the form `row,col`.
    #[error("invalid {field}: {source}")]
    InvalidLocation {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: ParseLocationError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the map file failed.
    #[error("failed to read map at {path:?}: {source}")]
    ReadMap {
        /// Map file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The map file contains an unknown symbol.
    #[error("failed to parse map at {path:?}: {source}")]
    ParseMap {
        /// Map file path.
        path: Utf8PathBuf,
        /// Grid construction failure.
        #[source]
        source: GridError,
    },
    /// The order was refused or no courier could take it.
    #[error(transparent)]
    Order(#[from] OrderError),
    /// Serialising the delivery failed.
    #[error("failed to serialise delivery: {0}")]
    SerialiseDelivery(#[source] serde_json::Error),
    /// Writing the quote output failed.
    #[error("failed to write quote output: {0}")]
    WriteQuoteOutput(#[source] std::io::Error),
}
