//! Plan command handler.
//!
//! Generates a recovery plan without the TUI, for scripts and quick checks.

use crate::config::AppConfig;
use crate::model::{generate, Intensity, RecoveryPlan};
use anyhow::Result;
use indexmap::IndexSet;
use std::fmt::Write as _;
use std::io::Write;

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PlanFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Answers for a headless assessment.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Training intensity; the configured default when absent
    pub intensity: Option<i64>,
    pub pain_areas: Vec<String>,
    pub equipment: Vec<String>,
}

/// Validate a request against the configured catalog and generate its plan.
///
/// Labels match case-insensitively and are normalized to the catalog's
/// spelling; repeats collapse.
pub fn build_plan(config: &AppConfig, request: &PlanRequest) -> crate::Result<RecoveryPlan> {
    let intensity = match request.intensity {
        Some(value) => Intensity::new(value)?,
        None => config.assessment.intensity(),
    };

    let mut pain_areas = IndexSet::new();
    for label in &request.pain_areas {
        pain_areas.insert(config.catalog.body_area(label)?.to_string());
    }

    let mut equipment = IndexSet::new();
    for label in &request.equipment {
        equipment.insert(config.catalog.equipment_item(label)?.to_string());
    }

    Ok(generate(intensity, &pain_areas, &equipment))
}

/// Render a plan as plain text.
#[must_use]
pub fn render_plan_text(plan: &RecoveryPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", plan.title, plan.total_duration);
    let _ = writeln!(
        out,
        "Intensity {}/10, {} tier",
        plan.intensity,
        plan.tier
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", plan.insight);
    let _ = writeln!(out);
    for (i, exercise) in plan.exercises.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [{}]\n   {}",
            i + 1,
            exercise.name,
            exercise.duration,
            exercise.description
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Focus areas: {}", plan.pain_focus.join(", "));
    let _ = writeln!(out, "Using today: {}", plan.equipment_used.join(", "));
    out
}

/// Run the plan command, writing the plan to `out`.
pub fn run_plan(
    config: &AppConfig,
    request: &PlanRequest,
    format: PlanFormat,
    out: &mut impl Write,
) -> Result<()> {
    let plan = build_plan(config, request)?;
    match format {
        PlanFormat::Text => write!(out, "{}", render_plan_text(&plan))?,
        PlanFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReactivateError;
    use crate::model::Tier;

    fn request(intensity: i64, pain: &[&str], equipment: &[&str]) -> PlanRequest {
        PlanRequest {
            intensity: Some(intensity),
            pain_areas: pain.iter().map(ToString::to_string).collect(),
            equipment: equipment.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_build_plan_normalizes_labels() {
        let config = AppConfig::default();
        let plan = build_plan(&config, &request(8, &["legs", "BACK", "Legs"], &["foam roller"])).unwrap();
        assert_eq!(plan.tier, Tier::Intense);
        assert_eq!(plan.pain_focus, vec!["Legs".to_string(), "Back".to_string()]);
        assert_eq!(plan.equipment_used, vec!["Foam Roller".to_string()]);
    }

    #[test]
    fn test_build_plan_uses_config_default_intensity() {
        let config = AppConfig::builder().default_intensity(3).build();
        let plan = build_plan(&config, &PlanRequest::default()).unwrap();
        assert_eq!(plan.tier, Tier::Light);
        assert_eq!(plan.intensity.value(), 3);
    }

    #[test]
    fn test_build_plan_rejects_out_of_range_intensity() {
        let err = build_plan(&AppConfig::default(), &request(11, &[], &[])).unwrap_err();
        assert!(matches!(err, ReactivateError::InvalidIntensity { value: 11, .. }));
    }

    #[test]
    fn test_build_plan_rejects_unknown_label() {
        let err = build_plan(&AppConfig::default(), &request(5, &["Elbow"], &[])).unwrap_err();
        assert!(matches!(err, ReactivateError::UnknownLabel { .. }));
        assert!(err.to_string().contains("Elbow"));
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        run_plan(&AppConfig::default(), &request(5, &[], &[]), PlanFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Targeted Recovery (35 minutes)"));
        assert!(text.contains("1. Foam Rolling [10 min]"));
        assert!(text.contains("Focus areas: General Recovery"));
        assert!(text.contains("Using today: Bodyweight"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        run_plan(&AppConfig::default(), &request(2, &["Neck"], &[]), PlanFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tier"], "light");
        assert_eq!(value["intensity"], 2);
        assert_eq!(value["title"], "Active Recovery");
        assert_eq!(value["exercises"].as_array().unwrap().len(), 3);
        assert_eq!(value["pain_focus"][0], "Neck");
    }
}
