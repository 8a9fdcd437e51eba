//! Shared test harness modules for the courier CLI.

use super::*;

mod helpers;
mod run_steps;
mod run_unit;
