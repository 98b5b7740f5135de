//! **A terminal recovery planner for athletes.**
//!
//! `reactivate` walks a user through a short assessment (sore body areas,
//! today's training intensity, available equipment), picks one of three
//! recovery plans from the intensity, and guides them through its exercises
//! with a timer. Everything runs locally; plans come from a fixed table.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Intensity`], [`Tier`], [`Assessment`] and the pure plan
//!   generator [`generate`] producing a [`RecoveryPlan`].
//! - **[`session`]**: the [`Session`] value and its transition function
//!   [`Session::apply`], the [`ExerciseTimer`], and the [`TickSource`] seam
//!   that drives it.
//! - **[`config`]**: YAML configuration with discovery, validation and a
//!   JSON Schema.
//! - **[`tui`]**: the ratatui front end.
//! - **[`cli`]**: handlers behind the `reactivate` binary.
//!
//! ## Generating a Plan
//!
//! ```
//! use reactivate::{Action, Session, View};
//!
//! let session = Session::default()
//!     .apply(Action::Start)
//!     .apply(Action::TogglePainArea("Back".into()))
//!     .apply(Action::Submit);
//!
//! assert_eq!(session.view(), View::Dashboard);
//! let plan = session.plan().unwrap();
//! assert_eq!(plan.title, "Targeted Recovery");
//! assert_eq!(plan.pain_focus, vec!["Back".to_string()]);
//! ```
//!
//! ## Timing an Exercise
//!
//! ```
//! use reactivate::session::{Action, Session};
//!
//! let session = Session::default()
//!     .apply(Action::Start)
//!     .apply(Action::Submit)
//!     .apply(Action::StartExercise)
//!     .apply(Action::Tick(125));
//!
//! assert_eq!(session.timer().display(), "2:05");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: intensity and layout math stay within small bounds
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // App state legitimately uses several bools for overlay flags
    clippy::struct_excessive_bools,
    // Variable names like `before`/`from` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use error::{CatalogKind, ReactivateError, Result};
pub use model::{
    generate, Assessment, Catalog, Exercise, Intensity, RecoveryPlan, Tier,
};
pub use session::{
    format_time, Action, ExerciseTimer, IntervalTicker, ManualTicker, Session, Stage, TickSource,
    View,
};
