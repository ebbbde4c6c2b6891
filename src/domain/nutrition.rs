//! Menu selection choices offered by the menu generator panel.
//!
//! Each enum carries the literal Portuguese label shown in the select control
//! and embedded verbatim in the assembled prompt. The first variant of every
//! enum is the default selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Main goal of the person the menu is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Goal {
    #[default]
    #[serde(rename = "Manter o peso (saudável)")]
    MaintainWeight,
    #[serde(rename = "Emagrecer")]
    LoseWeight,
    #[serde(rename = "Ganhar massa muscular (Hipertrofia)")]
    GainMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::MaintainWeight, Goal::LoseWeight, Goal::GainMuscle];

    pub fn label(self) -> &'static str {
        match self {
            Goal::MaintainWeight => "Manter o peso (saudável)",
            Goal::LoseWeight => "Emagrecer",
            Goal::GainMuscle => "Ganhar massa muscular (Hipertrofia)",
        }
    }
}

/// Dietary preference; `Nenhuma` means no preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietaryPreference {
    #[default]
    #[serde(rename = "Nenhuma")]
    None,
    #[serde(rename = "Vegetariana")]
    Vegetarian,
    #[serde(rename = "Vegana")]
    Vegan,
    #[serde(rename = "Low Carb")]
    LowCarb,
    #[serde(rename = "carnívora")]
    Carnivore,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 5] = [
        DietaryPreference::None,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::LowCarb,
        DietaryPreference::Carnivore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryPreference::None => "Nenhuma",
            DietaryPreference::Vegetarian => "Vegetariana",
            DietaryPreference::Vegan => "Vegana",
            DietaryPreference::LowCarb => "Low Carb",
            DietaryPreference::Carnivore => "carnívora",
        }
    }
}

/// Dietary restriction; `Nenhuma` means no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietaryRestriction {
    #[default]
    #[serde(rename = "Nenhuma")]
    None,
    #[serde(rename = "Intolerância à lactose")]
    LactoseIntolerance,
    #[serde(rename = "Alergia ao glúten")]
    GlutenAllergy,
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "Alergia a frutos do mar")]
    SeafoodAllergy,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 5] = [
        DietaryRestriction::None,
        DietaryRestriction::LactoseIntolerance,
        DietaryRestriction::GlutenAllergy,
        DietaryRestriction::Diabetes,
        DietaryRestriction::SeafoodAllergy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryRestriction::None => "Nenhuma",
            DietaryRestriction::LactoseIntolerance => "Intolerância à lactose",
            DietaryRestriction::GlutenAllergy => "Alergia ao glúten",
            DietaryRestriction::Diabetes => "Diabetes",
            DietaryRestriction::SeafoodAllergy => "Alergia a frutos do mar",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })+
    };
}

display_label!(Goal, DietaryPreference, DietaryRestriction);

/// The three selections submitted from the menu generator panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuSelection {
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub preference: DietaryPreference,
    #[serde(default)]
    pub restriction: DietaryRestriction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_options() {
        let selection = MenuSelection::default();
        assert_eq!(selection.goal, Goal::ALL[0]);
        assert_eq!(selection.preference, DietaryPreference::ALL[0]);
        assert_eq!(selection.restriction, DietaryRestriction::ALL[0]);
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Goal::GainMuscle).expect("serialize");
        assert_eq!(json, "\"Ganhar massa muscular (Hipertrofia)\"");

        let parsed: DietaryRestriction =
            serde_json::from_str("\"Intolerância à lactose\"").expect("deserialize");
        assert_eq!(parsed, DietaryRestriction::LactoseIntolerance);
    }

    #[test]
    fn labels_match_serde_names_for_every_variant() {
        for goal in Goal::ALL {
            let json = serde_json::to_string(&goal).expect("serialize");
            assert_eq!(json, format!("\"{}\"", goal.label()));
        }
        for preference in DietaryPreference::ALL {
            let json = serde_json::to_string(&preference).expect("serialize");
            assert_eq!(json, format!("\"{preference}\""));
        }
        for restriction in DietaryRestriction::ALL {
            let json = serde_json::to_string(&restriction).expect("serialize");
            assert_eq!(json, format!("\"{restriction}\""));
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let selection: MenuSelection =
            serde_json::from_str(r#"{"goal":"Emagrecer"}"#).expect("deserialize");
        assert_eq!(selection.goal, Goal::LoseWeight);
        assert_eq!(selection.preference, DietaryPreference::None);
        assert_eq!(selection.restriction, DietaryRestriction::None);
    }
}
