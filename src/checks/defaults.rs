//! Default judgements for every safety category, parameterized by age group.
//!
//! These are the product-design baselines a check run starts from. Callers
//! override individual categories through the engine's overrides map.

use crate::models::{AgeGroup, CheckResult, CheckStatus, SafetyCategory};

/// Baseline judgement for one category before overrides are applied.
pub fn default_check(category: SafetyCategory, age_group: AgeGroup) -> CheckResult {
    match category {
        SafetyCategory::SmallParts => match age_group {
            AgeGroup::Infant | AgeGroup::Toddler => CheckResult::new(
                CheckStatus::Warning,
                "Ensure all parts measure more than 3.5cm",
            ),
            _ => CheckResult::new(
                CheckStatus::Passed,
                "Age range is suitable, small parts risk is low",
            ),
        },
        SafetyCategory::SharpEdges => {
            CheckResult::new(CheckStatus::Passed, "All edges use a rounded design")
        }
        SafetyCategory::MaterialSafety => CheckResult::new(
            CheckStatus::Passed,
            "Uses non-toxic materials that meet safety standards",
        ),
        SafetyCategory::SizeSpecifications => match age_group {
            AgeGroup::Infant => CheckResult::new(
                CheckStatus::Passed,
                "Dimensions are suitable for infant grip",
            ),
            _ => CheckResult::new(
                CheckStatus::Passed,
                "Dimensions meet the standard for the age group",
            ),
        },
        // Policy default for the assisted product lines, not a measurement
        SafetyCategory::ElectricalSafety => CheckResult::new(
            CheckStatus::NotApplicable,
            "Product contains no electrical components",
        ),
        SafetyCategory::ChemicalSafety => CheckResult::new(
            CheckStatus::Passed,
            "Free of harmful chemicals and meets environmental requirements",
        ),
        SafetyCategory::StructuralStability => CheckResult::new(
            CheckStatus::Passed,
            "Structure is stable and resistant to tipping",
        ),
        SafetyCategory::LabelingRequirements => CheckResult::new(
            CheckStatus::Passed,
            "Labeling is complete and includes safety warnings",
        ),
    }
}
