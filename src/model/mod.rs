//! Domain types for the recovery planner.
//!
//! An [`Assessment`] collects the onboarding answers, the [`Tier`] derived
//! from its [`Intensity`] selects one of the hard-coded plan templates, and
//! [`generate`] overlays the user's selections to produce a [`RecoveryPlan`].
//!
//! ```
//! use indexmap::IndexSet;
//! use reactivate::model::{generate, Intensity, Tier};
//!
//! let plan = generate(Intensity::saturating(8), &IndexSet::new(), &IndexSet::new());
//! assert_eq!(plan.tier, Tier::Intense);
//! assert_eq!(plan.pain_focus, vec!["General Recovery".to_string()]);
//! ```

mod assessment;
mod catalog;
mod plan;

pub use assessment::{toggle, Assessment, Intensity, Tier};
pub use catalog::Catalog;
pub use plan::{
    generate, template_for, Exercise, ExerciseTemplate, PlanTemplate, RecoveryPlan,
    DEFAULT_EQUIPMENT, DEFAULT_PAIN_FOCUS,
};
