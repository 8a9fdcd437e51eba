//! Error types emitted by the courier CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::CatalogError;
use courier_planner::PlanError;
use thiserror::Error;

/// Errors emitted by the courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The output file name is empty or contains a path separator.
    #[error("output file {name:?} must be a plain file name")]
    InvalidOutputFile {
        /// Name as configured.
        name: String,
    },
    /// Reading the catalogue file failed.
    #[error("failed to read catalogue at {path:?}: {source}")]
    ReadCatalog {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue could not be decoded or failed validation.
    #[error("catalogue {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Catalogue path, or the name of the built-in dataset.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: CatalogError,
    },
    /// The simulation rejected its configuration or input.
    #[error("simulation failed: {0}")]
    Simulation(#[from] PlanError),
    /// Serialising the route report failed.
    #[error("failed to serialise route report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the route report failed.
    #[error("failed to write route report to {path:?}: {source}")]
    WriteReport {
        /// Report destination.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the run summary failed.
    #[error("failed to write run summary: {0}")]
    WriteSummary(#[source] std::io::Error),
}
