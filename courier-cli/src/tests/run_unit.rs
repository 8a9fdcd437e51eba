//! Focused unit tests covering run configuration and catalogue loading.

use super::helpers::{SUSHI_CATALOG, Workspace};
use super::*;
use crate::run::{RunConfig, config_from_layers_for_test, load_catalog};
use camino::Utf8PathBuf;
use courier_core::CatalogError;
use courier_planner::PlanError;
use rstest::rstest;

#[rstest]
fn defaults_fill_every_unset_option() {
    let config = RunConfig::try_from(RunArgs::default()).expect("defaults are valid");
    assert_eq!(config.catalog, None);
    assert_eq!(config.simulation.capacity, 12_000);
    assert!(config.simulation.allow_repeat_visits);
    assert_eq!(config.simulation.max_hill_climb_iterations, 1_000);
    assert_eq!(config.output_path, Utf8PathBuf::from("out/routes.geojson"));
}

#[rstest]
fn explicit_arguments_override_defaults() {
    let args = RunArgs {
        capacity: Some(1_000),
        allow_repeat_visits: Some(false),
        max_iterations: Some(50),
        output_dir: Some(Utf8PathBuf::from("maps")),
        output_file: Some("day.geojson".to_owned()),
        ..RunArgs::default()
    };
    let config = RunConfig::try_from(args).expect("valid arguments");
    assert_eq!(config.simulation.capacity, 1_000);
    assert!(!config.simulation.allow_repeat_visits);
    assert_eq!(config.simulation.max_hill_climb_iterations, 50);
    assert_eq!(config.output_path, Utf8PathBuf::from("maps/day.geojson"));
}

#[rstest]
#[case::empty("")]
#[case::nested("nested/routes.geojson")]
#[case::parent("..")]
fn output_file_must_be_a_plain_name(#[case] name: &str) {
    let args = RunArgs {
        output_file: Some(name.to_owned()),
        ..RunArgs::default()
    };
    let err = RunConfig::try_from(args).expect_err("name should be rejected");
    match err {
        CliError::InvalidOutputFile { name: rejected } => assert_eq!(rejected, name),
        other => panic!("expected InvalidOutputFile, found {other:?}"),
    }
}

#[rstest]
#[case::zero_capacity(Some(0), None)]
#[case::zero_iterations(None, Some(0))]
fn invalid_simulation_settings_are_rejected(
    #[case] capacity: Option<u32>,
    #[case] max_iterations: Option<usize>,
) {
    let args = RunArgs {
        capacity,
        max_iterations,
        ..RunArgs::default()
    };
    let err = RunConfig::try_from(args).expect_err("settings should be rejected");
    match err {
        CliError::Simulation(PlanError::InvalidConfig { .. }) => {}
        other => panic!("expected InvalidConfig, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_the_builtin_dataset() {
    let config = RunConfig::try_from(RunArgs::default()).expect("defaults are valid");
    config.validate_sources().expect("nothing to check");
}

#[rstest]
fn validate_sources_reports_missing_catalogues() {
    let workspace = Workspace::new();
    let args = RunArgs {
        catalog: Some(workspace.path("missing.json")),
        ..RunArgs::default()
    };
    let config = RunConfig::try_from(args).expect("valid arguments");
    let err = config.validate_sources().expect_err("catalogue is missing");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.path("missing.json"));
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let args = RunArgs {
        catalog: Some(workspace.path("")),
        ..RunArgs::default()
    };
    let config = RunConfig::try_from(args).expect("valid arguments");
    let err = config
        .validate_sources()
        .expect_err("a directory is not a catalogue");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn builtin_catalogue_is_the_mataro_dataset() {
    let catalog = load_catalog(None).expect("built-in catalogue is valid");
    assert_eq!(catalog.specialties().len(), 14);
    assert_eq!(catalog.orders().len(), 20);
    assert_eq!(catalog.restaurants().len(), 82);
    assert!(catalog.unserved_specialties().is_empty());
    assert_eq!(catalog.origin().latitude, 41.528_154_350_078_815);
    assert_eq!(catalog.origin().longitude, 2.434_622_955_825_619_6);
}

#[rstest]
fn catalogue_files_are_loaded_from_disk() {
    let workspace = Workspace::new();
    let path = workspace.write_catalog("sushi.json", SUSHI_CATALOG);
    let catalog = load_catalog(Some(&path)).expect("valid catalogue");
    assert_eq!(catalog.orders().len(), 2);
    assert_eq!(catalog.lightest_unit_weight(), Some(300));
}

#[rstest]
fn malformed_catalogues_report_their_path() {
    let workspace = Workspace::new();
    let path = workspace.write_catalog("broken.json", "{ not json");
    let err = load_catalog(Some(&path)).expect_err("catalogue is malformed");
    match err {
        CliError::InvalidCatalog {
            path: reported,
            source: CatalogError::Parse(_),
        } => assert_eq!(reported, path),
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[rstest]
fn unreadable_catalogues_report_io_errors() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    let err = load_catalog(Some(&path)).expect_err("catalogue is missing");
    match err {
        CliError::ReadCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadCatalog, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "capacity": "heavy" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "capacity": 900,
            "max_iterations": 40,
            "output_dir": "from-file",
        }),
        None,
    );
    composer.push_environment(json!({
        "capacity": 800,
        "output_dir": "from-env",
    }));
    composer.push_cli(json!({
        "output_file": "cli.geojson",
        "allow_repeat_visits": false,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.simulation.capacity, 800);
    assert_eq!(config.simulation.max_hill_climb_iterations, 40);
    assert!(!config.simulation.allow_repeat_visits);
    assert_eq!(config.output_path, Utf8PathBuf::from("from-env/cli.geojson"));
}
