//! Integration tests for the session state machine.
//!
//! These drive a session through whole user journeys and check the
//! guarantees each screen relies on.

use reactivate::model::{Assessment, Intensity, Tier};
use reactivate::session::{Action, Session, Stage, View};
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn apply_all(session: Session, actions: impl IntoIterator<Item = Action>) -> Session {
    actions.into_iter().fold(session, Session::apply)
}

fn finish_plan(session: Session) -> Session {
    let count = session.plan().map_or(0, |p| p.exercise_count());
    (0..count).fold(session, |s, _| {
        s.apply(Action::StartExercise).apply(Action::CompleteExercise)
    })
}

fn onboarding() -> Session {
    Session::default().apply(Action::Start)
}

// ============================================================================
// Journeys
// ============================================================================

mod journey_tests {
    use super::*;

    #[test]
    fn test_landing_is_initial() {
        let session = Session::default();
        assert_eq!(session.view(), View::Landing);
        assert_eq!(session.completed_sessions(), 0);
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_back_pain_moderate_journey() {
        let session = apply_all(
            onboarding(),
            [
                Action::TogglePainArea("Back".into()),
                Action::SetIntensity(Intensity::saturating(6)),
                Action::Submit,
            ],
        );

        assert_eq!(session.view(), View::Dashboard);
        assert_eq!(session.current_exercise_index(), 0);
        let plan = session.plan().unwrap();
        assert_eq!(plan.tier, Tier::Moderate);
        assert_eq!(plan.title, "Targeted Recovery");
        assert_eq!(plan.total_duration, "35 minutes");
        assert_eq!(plan.pain_focus, vec!["Back".to_string()]);
        assert_eq!(plan.equipment_used, vec!["Bodyweight".to_string()]);
        assert!(plan.insight.contains("(6/10)"));
        assert!(plan.insight.contains("reported pain in Back"));
    }

    #[test]
    fn test_three_completions_reach_completion_screen() {
        let session = apply_all(onboarding(), [Action::Submit]);

        let session = session.apply(Action::StartExercise).apply(Action::CompleteExercise);
        assert_eq!(session.current_exercise_index(), 1);
        let session = session.apply(Action::StartExercise).apply(Action::CompleteExercise);
        assert_eq!(session.current_exercise_index(), 2);
        assert_eq!(session.view(), View::Dashboard);

        let session = session.apply(Action::StartExercise).apply(Action::CompleteExercise);
        assert_eq!(session.view(), View::Completion);
        assert_eq!(session.completed_sessions(), 1);
        assert!(!session.timer().is_running());
        assert_eq!(session.timer().elapsed_seconds(), 0);
    }

    #[test]
    fn test_plan_tomorrow_reuses_the_same_plan() {
        let done = finish_plan(apply_all(onboarding(), [Action::Submit]));
        let before = Arc::clone(done.plan().unwrap());

        let again = done.apply(Action::PlanTomorrow);
        assert_eq!(again.view(), View::Dashboard);
        assert_eq!(again.current_exercise_index(), 0);
        assert!(Arc::ptr_eq(&before, again.plan().unwrap()));
        assert_eq!(again.completed_sessions(), 1);

        let twice = finish_plan(again);
        assert_eq!(twice.completed_sessions(), 2);
    }

    #[test]
    fn test_new_assessment_keeps_answers() {
        let done = finish_plan(apply_all(
            onboarding(),
            [
                Action::TogglePainArea("Neck".into()),
                Action::ToggleEquipment("Yoga Mat".into()),
                Action::SetIntensity(Intensity::saturating(2)),
                Action::Submit,
            ],
        ));

        let session = done.apply(Action::NewAssessment);
        assert_eq!(session.view(), View::Onboarding);
        assert!(session.assessment().has_pain_area("Neck"));
        assert!(session.assessment().has_equipment("Yoga Mat"));
        assert_eq!(session.assessment().intensity.value(), 2);
        assert_eq!(session.completed_sessions(), 1);
    }

    #[test]
    fn test_counter_never_resets_across_assessments() {
        let mut session = onboarding();
        for round in 1..=3 {
            session = finish_plan(session.apply(Action::Submit));
            assert_eq!(session.completed_sessions(), round);
            session = session.apply(Action::NewAssessment);
        }
    }
}

// ============================================================================
// Timer
// ============================================================================

mod timer_tests {
    use super::*;

    #[test]
    fn test_timer_counts_only_while_running() {
        let session = apply_all(onboarding(), [Action::Submit, Action::StartExercise]);
        let session = session.apply(Action::Tick(65));
        assert_eq!(session.timer().display(), "1:05");

        let session = session.apply(Action::PauseExercise).apply(Action::Tick(30));
        assert_eq!(session.timer().elapsed_seconds(), 65);

        let session = session.apply(Action::StartExercise);
        assert!(session.timer().is_running());
        assert_eq!(session.timer().elapsed_seconds(), 0);
    }

    #[test]
    fn test_complete_resets_timer_for_next_exercise() {
        let session = apply_all(
            onboarding(),
            [Action::Submit, Action::StartExercise, Action::Tick(12)],
        );
        let session = session.apply(Action::CompleteExercise);
        assert_eq!(session.current_exercise_index(), 1);
        assert!(!session.timer().is_running());
        assert_eq!(session.timer().elapsed_seconds(), 0);
    }
}

// ============================================================================
// Ignored actions
// ============================================================================

mod ignored_action_tests {
    use super::*;

    #[test]
    fn test_actions_outside_their_screen_are_ignored() {
        let landing = Session::default();
        for action in [
            Action::Submit,
            Action::StartExercise,
            Action::CompleteExercise,
            Action::PlanTomorrow,
            Action::NewAssessment,
            Action::TogglePainArea("Legs".into()),
            Action::Tick(3),
        ] {
            assert_eq!(landing.clone().apply(action), landing);
        }
    }

    #[test]
    fn test_onboarding_ignores_dashboard_actions() {
        let session = onboarding();
        assert_eq!(session.clone().apply(Action::CompleteExercise), session);
        assert_eq!(session.clone().apply(Action::Start), session);
    }

    #[test]
    fn test_completion_ignores_timer_actions() {
        let done = finish_plan(apply_all(onboarding(), [Action::Submit]));
        assert_eq!(done.clone().apply(Action::StartExercise), done);
        assert_eq!(done.clone().apply(Action::Tick(5)), done);
        assert!(matches!(done.stage(), Stage::Completion { .. }));
    }

    #[test]
    fn test_prefilled_assessment_is_used() {
        let session = Session::new(Assessment::with_intensity(Intensity::saturating(9)));
        let session = apply_all(session, [Action::Start, Action::Submit]);
        assert_eq!(session.plan().unwrap().tier, Tier::Intense);
    }
}
