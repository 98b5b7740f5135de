//! Option lists offered on the onboarding screen.

use crate::error::{CatalogKind, ReactivateError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const BODY_AREAS: &[&str] = &["Legs", "Back", "Shoulders", "Arms", "Core", "Neck"];
const EQUIPMENT: &[&str] = &[
    "Foam Roller",
    "Resistance Bands",
    "Massage Ball",
    "Ice Bath",
    "Heating Pad",
    "Yoga Mat",
];

/// Body areas and equipment the user can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Catalog {
    /// Body areas shown under "Any pain or soreness?"
    pub body_areas: Vec<String>,
    /// Equipment shown under "Available Equipment"
    pub equipment: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            body_areas: BODY_AREAS.iter().map(|s| (*s).to_string()).collect(),
            equipment: EQUIPMENT.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Catalog {
    /// Resolve a user-typed body area to its catalog spelling.
    pub fn body_area(&self, label: &str) -> Result<&str> {
        Self::resolve(&self.body_areas, CatalogKind::BodyArea, label)
    }

    /// Resolve a user-typed equipment label to its catalog spelling.
    pub fn equipment_item(&self, label: &str) -> Result<&str> {
        Self::resolve(&self.equipment, CatalogKind::Equipment, label)
    }

    fn resolve<'a>(options: &'a [String], kind: CatalogKind, label: &str) -> Result<&'a str> {
        let wanted = label.trim();
        options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
            .ok_or_else(|| ReactivateError::unknown_label(kind, wanted, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.body_areas.len(), 6);
        assert_eq!(catalog.equipment.len(), 6);
        assert_eq!(catalog.body_areas[0], "Legs");
        assert_eq!(catalog.equipment[5], "Yoga Mat");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = Catalog::default();
        assert_eq!(catalog.body_area("shoulders").unwrap(), "Shoulders");
        assert_eq!(catalog.equipment_item(" foam roller ").unwrap(), "Foam Roller");
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = Catalog::default();
        let err = catalog.equipment_item("Treadmill").unwrap_err();
        assert!(matches!(
            err,
            ReactivateError::UnknownLabel {
                kind: CatalogKind::Equipment,
                ..
            }
        ));
    }
}
