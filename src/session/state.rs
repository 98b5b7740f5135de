//! Session state and the view transition table.

use super::timer::ExerciseTimer;
use crate::model::{Assessment, Intensity, RecoveryPlan};
use std::fmt;
use std::sync::Arc;

/// The four mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Onboarding,
    Dashboard,
    Completion,
}

impl View {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Onboarding => "onboarding",
            Self::Dashboard => "dashboard",
            Self::Completion => "completion",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the session is, together with the data that screen needs.
///
/// Dashboard and Completion carry their plan, so a plan is always present
/// on those screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Landing,
    Onboarding,
    Dashboard {
        plan: Arc<RecoveryPlan>,
        exercise_index: usize,
    },
    Completion {
        plan: Arc<RecoveryPlan>,
    },
}

/// User intents and timer ticks fed into [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Landing: "Get Started"
    Start,
    /// Onboarding: flip a pain area
    TogglePainArea(String),
    /// Onboarding: flip a piece of equipment
    ToggleEquipment(String),
    /// Onboarding: move the intensity slider to a value
    SetIntensity(Intensity),
    /// Onboarding: nudge the intensity slider
    AdjustIntensity(i64),
    /// Onboarding: "Generate My Recovery Plan"
    Submit,
    /// Dashboard: start timing the current exercise
    StartExercise,
    /// Dashboard: pause the timer
    PauseExercise,
    /// Dashboard: mark the current exercise done
    CompleteExercise,
    /// Dashboard: whole seconds elapsed on the tick source
    Tick(u64),
    /// Completion: back to the dashboard with the same plan
    PlanTomorrow,
    /// Completion: back to onboarding, answers kept
    NewAssessment,
}

/// All mutable state of one interactive session.
///
/// Transitions consume the session and return the next one; actions that
/// do not apply to the current screen return it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    stage: Stage,
    assessment: Assessment,
    completed_sessions: u32,
    timer: ExerciseTimer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Assessment::default())
    }
}

impl Session {
    /// A fresh session on the landing page with the given pre-fill.
    #[must_use]
    pub fn new(assessment: Assessment) -> Self {
        Self {
            stage: Stage::Landing,
            assessment,
            completed_sessions: 0,
            timer: ExerciseTimer::new(),
        }
    }

    #[must_use]
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub const fn view(&self) -> View {
        match self.stage {
            Stage::Landing => View::Landing,
            Stage::Onboarding => View::Onboarding,
            Stage::Dashboard { .. } => View::Dashboard,
            Stage::Completion { .. } => View::Completion,
        }
    }

    #[must_use]
    pub const fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    #[must_use]
    pub const fn timer(&self) -> &ExerciseTimer {
        &self.timer
    }

    /// The plan shown on the dashboard or completion screen.
    #[must_use]
    pub fn plan(&self) -> Option<&Arc<RecoveryPlan>> {
        match &self.stage {
            Stage::Dashboard { plan, .. } | Stage::Completion { plan } => Some(plan),
            Stage::Landing | Stage::Onboarding => None,
        }
    }

    /// Index of the active exercise; zero outside the dashboard.
    #[must_use]
    pub const fn current_exercise_index(&self) -> usize {
        match self.stage {
            Stage::Dashboard { exercise_index, .. } => exercise_index,
            _ => 0,
        }
    }

    /// Apply one action and return the resulting session.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        let from = self.view();
        let label = action_name(&action);
        let next = self.transition(action);
        if next.view() != from {
            tracing::debug!(from = %from, to = %next.view(), action = label, "View transition");
        }
        next
    }

    fn transition(mut self, action: Action) -> Self {
        match (self.stage, action) {
            (Stage::Landing, Action::Start) => {
                self.stage = Stage::Onboarding;
            }

            (Stage::Onboarding, Action::TogglePainArea(area)) => {
                self.assessment.toggle_pain_area(&area);
                self.stage = Stage::Onboarding;
            }
            (Stage::Onboarding, Action::ToggleEquipment(item)) => {
                self.assessment.toggle_equipment(&item);
                self.stage = Stage::Onboarding;
            }
            (Stage::Onboarding, Action::SetIntensity(intensity)) => {
                self.assessment.intensity = intensity;
                self.stage = Stage::Onboarding;
            }
            (Stage::Onboarding, Action::AdjustIntensity(delta)) => {
                self.assessment.intensity = self.assessment.intensity.adjust(delta);
                self.stage = Stage::Onboarding;
            }
            (Stage::Onboarding, Action::Submit) => {
                let plan = Arc::new(self.assessment.plan());
                self.timer = self.timer.reset();
                self.stage = Stage::Dashboard {
                    plan,
                    exercise_index: 0,
                };
            }

            (Stage::Dashboard { plan, exercise_index }, Action::StartExercise) => {
                self.timer = self.timer.start();
                self.stage = Stage::Dashboard { plan, exercise_index };
            }
            (Stage::Dashboard { plan, exercise_index }, Action::PauseExercise) => {
                self.timer = self.timer.pause();
                self.stage = Stage::Dashboard { plan, exercise_index };
            }
            (Stage::Dashboard { plan, exercise_index }, Action::Tick(seconds)) => {
                self.timer = self.timer.tick(seconds);
                self.stage = Stage::Dashboard { plan, exercise_index };
            }
            (Stage::Dashboard { plan, exercise_index }, Action::CompleteExercise) => {
                self.timer = self.timer.reset();
                if exercise_index < plan.last_index() {
                    self.stage = Stage::Dashboard {
                        plan,
                        exercise_index: exercise_index + 1,
                    };
                } else {
                    self.completed_sessions = self.completed_sessions.saturating_add(1);
                    tracing::info!(
                        completed_sessions = self.completed_sessions,
                        plan = %plan.title,
                        "Recovery session completed"
                    );
                    self.stage = Stage::Completion { plan };
                }
            }

            (Stage::Completion { plan }, Action::PlanTomorrow) => {
                self.stage = Stage::Dashboard {
                    plan,
                    exercise_index: 0,
                };
            }
            (Stage::Completion { .. }, Action::NewAssessment) => {
                self.stage = Stage::Onboarding;
            }

            (stage, action) => {
                tracing::trace!(view = stage_name(&stage), action = action_name(&action), "Ignored action");
                self.stage = stage;
            }
        }
        self
    }
}

const fn stage_name(stage: &Stage) -> &'static str {
    match stage {
        Stage::Landing => "landing",
        Stage::Onboarding => "onboarding",
        Stage::Dashboard { .. } => "dashboard",
        Stage::Completion { .. } => "completion",
    }
}

const fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Start => "start",
        Action::TogglePainArea(_) => "toggle_pain_area",
        Action::ToggleEquipment(_) => "toggle_equipment",
        Action::SetIntensity(_) => "set_intensity",
        Action::AdjustIntensity(_) => "adjust_intensity",
        Action::Submit => "submit",
        Action::StartExercise => "start_exercise",
        Action::PauseExercise => "pause_exercise",
        Action::CompleteExercise => "complete_exercise",
        Action::Tick(_) => "tick",
        Action::PlanTomorrow => "plan_tomorrow",
        Action::NewAssessment => "new_assessment",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_dashboard() -> Session {
        Session::default().apply(Action::Start).apply(Action::Submit)
    }

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.view(), View::Landing);
        assert_eq!(session.completed_sessions(), 0);
        assert!(session.plan().is_none());
        assert_eq!(session.assessment().intensity.value(), 7);
    }

    #[test]
    fn test_start_goes_to_onboarding() {
        let session = Session::default().apply(Action::Start);
        assert_eq!(session.view(), View::Onboarding);
    }

    #[test]
    fn test_submit_generates_plan() {
        let session = on_dashboard();
        assert_eq!(session.view(), View::Dashboard);
        assert_eq!(session.current_exercise_index(), 0);
        let plan = session.plan().expect("plan on dashboard");
        assert_eq!(plan.title, "Targeted Recovery");
    }

    #[test]
    fn test_complete_advances_then_finishes() {
        let mut session = on_dashboard().apply(Action::StartExercise);
        session = session.apply(Action::CompleteExercise);
        assert_eq!(session.view(), View::Dashboard);
        assert_eq!(session.current_exercise_index(), 1);
        assert!(!session.timer().is_running());

        session = session.apply(Action::CompleteExercise);
        assert_eq!(session.current_exercise_index(), 2);

        session = session.apply(Action::CompleteExercise);
        assert_eq!(session.view(), View::Completion);
        assert_eq!(session.completed_sessions(), 1);
        assert_eq!(session.current_exercise_index(), 0);
    }

    #[test]
    fn test_tick_only_counts_on_dashboard_while_running() {
        let session = on_dashboard().apply(Action::Tick(5));
        assert_eq!(session.timer().elapsed_seconds(), 0);

        let session = session.apply(Action::StartExercise).apply(Action::Tick(5));
        assert_eq!(session.timer().elapsed_seconds(), 5);

        let session = session.apply(Action::PauseExercise).apply(Action::Tick(5));
        assert_eq!(session.timer().elapsed_seconds(), 5);
    }

    #[test]
    fn test_ignored_actions_leave_session_unchanged() {
        let landing = Session::default();
        assert_eq!(landing.clone().apply(Action::Submit), landing);
        assert_eq!(landing.clone().apply(Action::CompleteExercise), landing);

        let onboarding = landing.apply(Action::Start);
        assert_eq!(onboarding.clone().apply(Action::PlanTomorrow), onboarding);
        assert_eq!(onboarding.clone().apply(Action::Tick(3)), onboarding);
    }

    #[test]
    fn test_toggles_only_in_onboarding() {
        let landing = Session::default().apply(Action::TogglePainArea("Legs".into()));
        assert!(landing.assessment().pain_areas.is_empty());

        let onboarding = Session::default()
            .apply(Action::Start)
            .apply(Action::TogglePainArea("Legs".into()));
        assert!(onboarding.assessment().has_pain_area("Legs"));
    }

    #[test]
    fn test_adjust_intensity_clamps() {
        let session = Session::default()
            .apply(Action::Start)
            .apply(Action::AdjustIntensity(10));
        assert_eq!(session.assessment().intensity.value(), 10);
        let session = session.apply(Action::AdjustIntensity(-20));
        assert_eq!(session.assessment().intensity.value(), 1);
    }
}
