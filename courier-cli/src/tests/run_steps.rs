//! Behaviour-driven step definitions driving the run CLI scenarios.

use super::helpers::{SUSHI_CATALOG, Workspace};
use super::*;
use crate::report::{FeatureCollection, Properties};
use camino::Utf8PathBuf;
use courier_planner::PlanError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct RunWorld {
    workspace: Workspace,
    catalog: RefCell<Option<Utf8PathBuf>>,
    allow_repeat_visits: RefCell<Option<bool>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RunWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            catalog: RefCell::new(None),
            allow_repeat_visits: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn output_dir(&self) -> Utf8PathBuf {
        self.workspace.path("out")
    }

    fn report_path(&self) -> Utf8PathBuf {
        self.output_dir().join("routes.geojson")
    }

    fn build_command_line(&self, capacity: u32) -> Vec<String> {
        let mut argv = vec![
            "courier".to_owned(),
            "run".to_owned(),
            format!("--{ARG_CAPACITY}"),
            capacity.to_string(),
            format!("--{ARG_OUTPUT_DIR}"),
            self.output_dir().into_string(),
        ];
        if let Some(path) = self.catalog.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), path.to_string()]);
        }
        if let Some(allow) = *self.allow_repeat_visits.borrow() {
            argv.extend([format!("--{ARG_ALLOW_REPEAT_VISITS}"), allow.to_string()]);
        }
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RunWorld {
    RunWorld::new()
}

#[given("an empty output folder")]
fn empty_output_folder(#[from(world)] world: &RunWorld) {
    assert!(!world.output_dir().exists());
}

#[given("a catalogue file with two sushi orders")]
fn sushi_catalogue(#[from(world)] world: &RunWorld) {
    let path = world.workspace.write_catalog("sushi.json", SUSHI_CATALOG);
    world.catalog.replace(Some(path));
}

#[given("a catalogue path that does not exist")]
fn missing_catalogue(#[from(world)] world: &RunWorld) {
    world
        .catalog
        .replace(Some(world.workspace.path("absent.json")));
}

#[given("restaurants may not be visited twice")]
fn no_repeat_visits(#[from(world)] world: &RunWorld) {
    world.allow_repeat_visits.replace(Some(false));
}

#[when("I run the simulation with capacity {capacity}")]
fn run_command(#[from(world)] world: &RunWorld, capacity: u32) {
    let invocation = world.build_command_line(capacity);
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        run_with(cli, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and reports {count} delivered orders")]
fn command_succeeds(#[from(world)] world: &RunWorld, count: usize) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert!(
        stdout.starts_with(&format!("Delivered {count} orders in ")),
        "unexpected summary: {stdout}"
    );
    assert!(stdout.trim_end().ends_with(world.report_path().as_str()));
}

#[then("the route report holds a pickup and a delivery line per cycle")]
fn report_holds_routes(#[from(world)] world: &RunWorld) {
    let text = std::fs::read_to_string(world.report_path()).expect("report written");
    let collection: FeatureCollection = serde_json::from_str(&text).expect("report is GeoJSON");
    let labels: Vec<&str> = collection
        .features
        .iter()
        .filter_map(|feature| match &feature.properties {
            Properties::Route { label, .. } => Some(label.as_str()),
            Properties::Marker { .. } => None,
        })
        .collect();

    let pickups = labels.iter().filter(|l| l.starts_with("Pickup ")).count();
    let deliveries = labels.iter().filter(|l| l.starts_with("Delivery ")).count();
    assert!(pickups > 0);
    assert_eq!(pickups, deliveries);
    assert_eq!(labels.last(), Some(&"Return to origin"));
    assert_eq!(labels.len(), pickups + deliveries + 1);
}

#[then("the command fails because the catalogue is missing")]
fn fails_missing_catalogue(#[from(world)] world: &RunWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because no restaurant serves {kind}")]
fn fails_unserved(#[from(world)] world: &RunWorld, kind: String) {
    match &*world.error() {
        CliError::Simulation(PlanError::UnservedSpecialty { specialty, .. }) => {
            assert_eq!(specialty, kind.trim_matches('"'));
        }
        other => panic!("expected UnservedSpecialty, found {other:?}"),
    }
}

#[then("the command fails because nothing fits in a bag of {capacity}")]
fn fails_capacity(#[from(world)] world: &RunWorld, capacity: u32) {
    match &*world.error() {
        CliError::Simulation(PlanError::CapacityBelowLightestOrder {
            capacity: rejected,
            lightest,
        }) => {
            assert_eq!(*rejected, capacity);
            assert_eq!(*lightest, 300);
        }
        other => panic!("expected CapacityBelowLightestOrder, found {other:?}"),
    }
}

#[then("no route report is written")]
fn no_report(#[from(world)] world: &RunWorld) {
    assert!(!world.report_path().exists());
}

macro_rules! register_run_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/run_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RunWorld) {
            let _ = world;
        }
    };
}

register_run_scenario!(run_builtin_dataset, "simulating the built-in dataset");
register_run_scenario!(
    run_without_repeat_visits,
    "simulating a custom catalogue without repeat visits"
);
register_run_scenario!(run_custom_catalogue, "simulating a custom catalogue");
register_run_scenario!(run_missing_catalogue, "rejecting a missing catalogue");
register_run_scenario!(run_capacity_too_small, "rejecting a capacity below every order");
