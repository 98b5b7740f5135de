//! Property-based tests for the plan generator, selection sets and timer.

use indexmap::IndexSet;
use proptest::prelude::*;
use reactivate::model::{generate, template_for, toggle, Catalog, Intensity, Tier};
use reactivate::session::{format_time, Action, Session, View};

fn labels() -> impl Strategy<Value = Vec<String>> {
    let catalog = Catalog::default();
    let options: Vec<String> = catalog
        .body_areas
        .into_iter()
        .chain(catalog.equipment)
        .collect();
    prop::collection::vec(prop::sample::select(options), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn tier_matches_intensity_range(n in 1i64..=10) {
        let tier = Intensity::saturating(n).tier();
        let expected = if n >= 8 {
            Tier::Intense
        } else if n >= 5 {
            Tier::Moderate
        } else {
            Tier::Light
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn out_of_range_intensity_is_rejected(n in prop_oneof![i64::MIN..1i64, 11i64..i64::MAX]) {
        prop_assert!(Intensity::new(n).is_err());
        let clamped = Intensity::saturating(n).value();
        prop_assert!(clamped == Intensity::MIN || clamped == Intensity::MAX);
    }

    #[test]
    fn generate_is_deterministic(n in 1i64..=10, pain in labels(), gear in labels()) {
        let pain: IndexSet<String> = pain.into_iter().collect();
        let gear: IndexSet<String> = gear.into_iter().collect();
        let intensity = Intensity::saturating(n);
        prop_assert_eq!(generate(intensity, &pain, &gear), generate(intensity, &pain, &gear));
    }

    #[test]
    fn plan_follows_its_template(n in 1i64..=10, pain in labels(), gear in labels()) {
        let pain: IndexSet<String> = pain.into_iter().collect();
        let gear: IndexSet<String> = gear.into_iter().collect();
        let plan = generate(Intensity::saturating(n), &pain, &gear);
        let template = template_for(plan.tier);

        prop_assert_eq!(plan.title.as_str(), template.title);
        prop_assert_eq!(plan.exercises.len(), template.exercises.len());
        prop_assert!(!plan.exercises.is_empty());
        prop_assert!(!plan.pain_focus.is_empty());
        prop_assert!(!plan.equipment_used.is_empty());

        if !pain.is_empty() {
            prop_assert_eq!(plan.pain_focus, pain.iter().cloned().collect::<Vec<_>>());
        }
        if !gear.is_empty() {
            prop_assert_eq!(plan.equipment_used, gear.iter().cloned().collect::<Vec<_>>());
        }
    }

    #[test]
    fn toggle_twice_restores_set(start in labels(), item in "[A-Z][a-z]{2,10}") {
        let before: IndexSet<String> = start.into_iter().collect();
        let mut set = before.clone();
        toggle(&mut set, &item);
        toggle(&mut set, &item);
        prop_assert_eq!(set.len(), before.len());
        prop_assert!(set.iter().all(|s| before.contains(s)));
    }

    #[test]
    fn format_time_shape(seconds in 0u64..1_000_000) {
        let text = format_time(seconds);
        let (minutes, secs) = text.split_once(':').unwrap();
        prop_assert_eq!(secs.len(), 2);
        prop_assert_eq!(minutes.parse::<u64>().unwrap(), seconds / 60);
        prop_assert_eq!(secs.parse::<u64>().unwrap(), seconds % 60);
    }

    #[test]
    fn counter_matches_finished_sessions(rounds in 0u32..6) {
        let mut session = Session::default().apply(Action::Start).apply(Action::Submit);
        for _ in 0..rounds {
            for _ in 0..3 {
                session = session.apply(Action::StartExercise).apply(Action::CompleteExercise);
            }
            prop_assert_eq!(session.view(), View::Completion);
            session = session.apply(Action::PlanTomorrow);
        }
        prop_assert_eq!(session.completed_sessions(), rounds);
    }
}
