//! Recovery plan templates and the plan generator.

use super::assessment::{Intensity, Tier};
use indexmap::IndexSet;
use serde::Serialize;

/// Focus label used when no pain areas were reported.
pub const DEFAULT_PAIN_FOCUS: &str = "General Recovery";
/// Equipment label used when nothing was selected.
pub const DEFAULT_EQUIPMENT: &str = "Bodyweight";

const NO_PAIN_PHRASE: &str = "general areas";

/// A fixed exercise entry in a plan template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

/// A fixed plan for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTemplate {
    pub title: &'static str,
    pub total_duration: &'static str,
    pub exercises: &'static [ExerciseTemplate],
}

const LIGHT: PlanTemplate = PlanTemplate {
    title: "Active Recovery",
    total_duration: "20 minutes",
    exercises: &[
        ExerciseTemplate {
            name: "Light Walking",
            duration: "5 min",
            description: "Gentle movement to promote blood flow",
        },
        ExerciseTemplate {
            name: "Dynamic Stretching",
            duration: "10 min",
            description: "Full body mobility sequence",
        },
        ExerciseTemplate {
            name: "Breathing Exercises",
            duration: "5 min",
            description: "Deep breathing for relaxation",
        },
    ],
};

const MODERATE: PlanTemplate = PlanTemplate {
    title: "Targeted Recovery",
    total_duration: "35 minutes",
    exercises: &[
        ExerciseTemplate {
            name: "Foam Rolling",
            duration: "10 min",
            description: "Focus on tight muscle groups",
        },
        ExerciseTemplate {
            name: "Mobility Sequence",
            duration: "15 min",
            description: "Joint mobility and flexibility",
        },
        ExerciseTemplate {
            name: "Recovery Stretches",
            duration: "10 min",
            description: "Static stretches for problem areas",
        },
    ],
};

const INTENSE: PlanTemplate = PlanTemplate {
    title: "Deep Recovery Protocol",
    total_duration: "45 minutes",
    exercises: &[
        ExerciseTemplate {
            name: "Contrast Therapy",
            duration: "15 min",
            description: "Alternating hot/cold treatment",
        },
        ExerciseTemplate {
            name: "Myofascial Release",
            duration: "15 min",
            description: "Deep tissue work with tools",
        },
        ExerciseTemplate {
            name: "Restorative Yoga",
            duration: "15 min",
            description: "Gentle poses for recovery",
        },
    ],
};

/// Look up the hard-coded template for a tier.
#[must_use]
pub const fn template_for(tier: Tier) -> &'static PlanTemplate {
    match tier {
        Tier::Light => &LIGHT,
        Tier::Moderate => &MODERATE,
        Tier::Intense => &INTENSE,
    }
}

/// One step of a recovery plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: String,
    pub duration: String,
    pub description: String,
}

impl From<&ExerciseTemplate> for Exercise {
    fn from(t: &ExerciseTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            duration: t.duration.to_string(),
            description: t.description.to_string(),
        }
    }
}

/// A plan generated from an assessment.
///
/// Only [`generate`] builds one, so `exercises` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryPlan {
    pub tier: Tier,
    pub intensity: Intensity,
    pub title: String,
    pub total_duration: String,
    pub exercises: Vec<Exercise>,
    pub pain_focus: Vec<String>,
    pub equipment_used: Vec<String>,
    pub insight: String,
}

impl RecoveryPlan {
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.exercises.len().saturating_sub(1)
    }

    #[must_use]
    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }
}

/// Generate a recovery plan. Deterministic for identical inputs.
#[must_use]
pub fn generate(
    intensity: Intensity,
    pain_areas: &IndexSet<String>,
    equipment: &IndexSet<String>,
) -> RecoveryPlan {
    let tier = intensity.tier();
    let template = template_for(tier);

    let pain_focus = or_default(pain_areas, DEFAULT_PAIN_FOCUS);
    let equipment_used = or_default(equipment, DEFAULT_EQUIPMENT);

    let reported = if pain_areas.is_empty() {
        NO_PAIN_PHRASE.to_string()
    } else {
        pain_areas.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };
    let insight = format!(
        "Based on your training intensity ({intensity}/10) and reported pain in {reported}, \
         this plan focuses on targeted recovery."
    );

    tracing::info!(
        tier = tier.name(),
        intensity = intensity.value(),
        pain_areas = pain_areas.len(),
        equipment = equipment.len(),
        "Generated recovery plan"
    );

    RecoveryPlan {
        tier,
        intensity,
        title: template.title.to_string(),
        total_duration: template.total_duration.to_string(),
        exercises: template.exercises.iter().map(Exercise::from).collect(),
        pain_focus,
        equipment_used,
        insight,
    }
}

fn or_default(selected: &IndexSet<String>, fallback: &str) -> Vec<String> {
    if selected.is_empty() {
        vec![fallback.to_string()]
    } else {
        selected.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_templates_have_three_exercises() {
        for tier in Tier::all() {
            assert_eq!(template_for(*tier).exercises.len(), 3, "{tier}");
        }
    }

    #[test]
    fn test_generate_selects_template_by_tier() {
        let none = IndexSet::new();
        assert_eq!(generate(Intensity::saturating(4), &none, &none).title, "Active Recovery");
        assert_eq!(generate(Intensity::saturating(5), &none, &none).title, "Targeted Recovery");
        assert_eq!(
            generate(Intensity::saturating(8), &none, &none).title,
            "Deep Recovery Protocol"
        );
    }

    #[test]
    fn test_generate_defaults_when_empty() {
        let none = IndexSet::new();
        let plan = generate(Intensity::DEFAULT, &none, &none);
        assert_eq!(plan.pain_focus, vec![DEFAULT_PAIN_FOCUS.to_string()]);
        assert_eq!(plan.equipment_used, vec![DEFAULT_EQUIPMENT.to_string()]);
        assert_eq!(
            plan.insight,
            "Based on your training intensity (7/10) and reported pain in general areas, \
             this plan focuses on targeted recovery."
        );
    }

    #[test]
    fn test_generate_overlays_selections() {
        let plan = generate(
            Intensity::saturating(9),
            &set(&["Back", "Neck"]),
            &set(&["Ice Bath"]),
        );
        assert_eq!(plan.pain_focus, vec!["Back", "Neck"]);
        assert_eq!(plan.equipment_used, vec!["Ice Bath"]);
        assert!(plan.insight.contains("(9/10)"));
        assert!(plan.insight.contains("reported pain in Back, Neck,"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let pain = set(&["Legs"]);
        let gear = set(&["Yoga Mat", "Foam Roller"]);
        let a = generate(Intensity::saturating(6), &pain, &gear);
        let b = generate(Intensity::saturating(6), &pain, &gear);
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_serializes_tier_lowercase() {
        let none = IndexSet::new();
        let plan = generate(Intensity::saturating(2), &none, &none);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["tier"], "light");
        assert_eq!(json["intensity"], 2);
        assert_eq!(json["exercises"][0]["name"], "Light Walking");
    }
}
