//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod plan;
mod run;

pub use plan::{build_plan, render_plan_text, run_plan, PlanFormat, PlanRequest};
pub use run::{check_config, resolve_theme, run_interactive};
