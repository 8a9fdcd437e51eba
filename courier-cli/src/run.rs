//! Run command implementation for the courier CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::Catalog;
use courier_planner::{Simulation, SimulationConfig, SimulationReport};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::{Feature, catalogue_markers, feature_collection};
use crate::{
    ARG_ALLOW_REPEAT_VISITS, ARG_CAPACITY, ARG_CATALOG, ARG_MAX_ITERATIONS, ARG_OUTPUT_DIR,
    ARG_OUTPUT_FILE, CliError,
};

/// The Mataró dataset used when no catalogue path is configured.
pub(crate) const BUILTIN_CATALOG: &str = include_str!("../data/mataro.json");
/// Name reported for the built-in dataset in errors.
pub(crate) const BUILTIN_CATALOG_NAME: &str = "<built-in mataro.json>";
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "out";
pub(crate) const DEFAULT_OUTPUT_FILE: &str = "routes.geojson";

/// CLI arguments for the `run` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Simulate a courier emptying the order pool: pack a bag by \
                 hill climbing, collect it from the nearest restaurants, \
                 deliver it, and repeat until every order is delivered. The \
                 routes are written as GeoJSON. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Simulate a delivery day and write its routes"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct RunArgs {
    /// Path to a JSON catalogue. Defaults to the built-in Mataró dataset.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Bag capacity in grams.
    #[arg(long = ARG_CAPACITY, value_name = "grams")]
    #[serde(default)]
    pub(crate) capacity: Option<u32>,
    /// Whether a restaurant may prepare more than one order.
    #[arg(long = ARG_ALLOW_REPEAT_VISITS, value_name = "bool")]
    #[serde(default)]
    pub(crate) allow_repeat_visits: Option<bool>,
    /// Iteration cap for the batch packer's hill climb.
    #[arg(long = ARG_MAX_ITERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_iterations: Option<usize>,
    /// Folder receiving the route report.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// File name of the route report inside the output folder.
    #[arg(long = ARG_OUTPUT_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) output_file: Option<String>,
}

impl RunArgs {
    pub(crate) fn into_config(self) -> Result<RunConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RunConfig::try_from(merged)
    }
}

/// Resolved `run` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunConfig {
    /// Catalogue path; `None` selects the built-in dataset.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Planner settings.
    pub(crate) simulation: SimulationConfig,
    /// Where the GeoJSON report is written.
    pub(crate) output_path: Utf8PathBuf,
}

impl RunConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.catalog
            .as_deref()
            .map_or(Ok(()), |path| Self::require_existing(path, ARG_CATALOG))
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match courier_fs::is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        let defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            capacity: args.capacity.unwrap_or(defaults.capacity),
            allow_repeat_visits: args
                .allow_repeat_visits
                .unwrap_or(defaults.allow_repeat_visits),
            max_hill_climb_iterations: args
                .max_iterations
                .unwrap_or(defaults.max_hill_climb_iterations),
        };
        simulation.validate()?;

        let output_file = args
            .output_file
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_owned());
        if !is_plain_file_name(&output_file) {
            return Err(CliError::InvalidOutputFile { name: output_file });
        }
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            catalog: args.catalog,
            simulation,
            output_path: output_dir.join(output_file),
        })
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Utf8Path::new(name);
    !name.is_empty() && path.file_name() == Some(name)
}

pub(super) fn run_simulation(args: RunArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(args, &mut stdout)
}

/// Execute `run` and write the one-line summary to `writer`.
pub(super) fn run_with(args: RunArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_run_config(args)?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    log::info!(
        "loaded {} orders and {} restaurants across {} specialties",
        catalog.orders().len(),
        catalog.restaurants().len(),
        catalog.specialties().len()
    );

    let markers = catalogue_markers(&catalog);
    let report = Simulation::geodesic(config.simulation).run_catalog(catalog)?;
    write_report(&config.output_path, &report, markers)?;
    write_summary(writer, &report, &config.output_path)
}

fn resolve_run_config(args: RunArgs) -> Result<RunConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load the catalogue at `path`, or the built-in dataset when `path` is
/// `None`.
pub(super) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    path.map_or_else(load_builtin_catalog, load_catalog_file)
}

fn load_builtin_catalog() -> Result<Catalog, CliError> {
    Catalog::from_json_str(BUILTIN_CATALOG).map_err(|source| CliError::InvalidCatalog {
        path: Utf8PathBuf::from(BUILTIN_CATALOG_NAME),
        source,
    })
}

fn load_catalog_file(path: &Utf8Path) -> Result<Catalog, CliError> {
    let json = courier_fs::read_to_string(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_json_str(&json).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    path: &Utf8Path,
    report: &SimulationReport,
    markers: Vec<Feature>,
) -> Result<(), CliError> {
    let collection = feature_collection(report, markers);
    let payload = serde_json::to_string_pretty(&collection).map_err(CliError::SerialiseReport)?;
    courier_fs::write_file(path, payload).map_err(|source| CliError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("route report written to {path}");
    Ok(())
}

fn write_summary(
    writer: &mut dyn Write,
    report: &SimulationReport,
    path: &Utf8Path,
) -> Result<(), CliError> {
    writeln!(
        writer,
        "Delivered {} orders in {} cycles over {:.2} km; routes written to {path}",
        report.delivered_orders(),
        report.cycles.len(),
        report.total_distance_km()
    )
    .map_err(CliError::WriteSummary)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RunConfig, CliError> {
    let merged = RunArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RunConfig::try_from(merged)
}
