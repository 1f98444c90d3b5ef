//! Severity derivation for evaluated safety items.
//!
//! Severity is a fixed lookup on (category, status). Failures on choking,
//! laceration and shock hazards rank critical, chemical failures high, and
//! everything else medium. Warnings and non-failures stay low.

use crate::models::{CheckStatus, SafetyCategory, Severity};

/// Impact ranking for one category's final status.
pub fn derive_severity(category: SafetyCategory, status: CheckStatus) -> Severity {
    match status {
        CheckStatus::Failed => match category {
            SafetyCategory::SmallParts
            | SafetyCategory::SharpEdges
            | SafetyCategory::ElectricalSafety => Severity::Critical,
            SafetyCategory::ChemicalSafety => Severity::High,
            _ => Severity::Medium,
        },
        CheckStatus::Warning => Severity::Low,
        CheckStatus::Passed | CheckStatus::NotApplicable => Severity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_critical_categories() {
        for category in [
            SafetyCategory::SmallParts,
            SafetyCategory::SharpEdges,
            SafetyCategory::ElectricalSafety,
        ] {
            assert_eq!(
                derive_severity(category, CheckStatus::Failed),
                Severity::Critical
            );
        }
    }

    #[test]
    fn test_failed_chemical_is_high() {
        assert_eq!(
            derive_severity(SafetyCategory::ChemicalSafety, CheckStatus::Failed),
            Severity::High
        );
    }

    #[test]
    fn test_failed_remaining_categories_are_medium() {
        for category in [
            SafetyCategory::MaterialSafety,
            SafetyCategory::SizeSpecifications,
            SafetyCategory::StructuralStability,
            SafetyCategory::LabelingRequirements,
        ] {
            assert_eq!(
                derive_severity(category, CheckStatus::Failed),
                Severity::Medium
            );
        }
    }

    #[test]
    fn test_warning_is_always_low() {
        for category in SafetyCategory::ALL {
            assert_eq!(derive_severity(category, CheckStatus::Warning), Severity::Low);
        }
    }

    #[test]
    fn test_passed_and_not_applicable_are_low() {
        for category in SafetyCategory::ALL {
            assert_eq!(derive_severity(category, CheckStatus::Passed), Severity::Low);
            assert_eq!(
                derive_severity(category, CheckStatus::NotApplicable),
                Severity::Low
            );
        }
    }
}
