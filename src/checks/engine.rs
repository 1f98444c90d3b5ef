//! Safety check scoring and recommendation engine.
//!
//! Given a product name, a target age group and optional per-category
//! overrides, produces a scored safety report:
//! - every category in the closed set is judged exactly once
//! - overrides replace the baseline judgement for their category entirely
//! - severity is derived from (category, final status), never supplied
//! - the overall score ignores not-applicable items in its denominator
//! - failed and warning items turn into recommendation messages, in
//!   category evaluation order

use std::collections::HashMap;

use uuid::Uuid;

use crate::checks::defaults::default_check;
use crate::checks::severity::derive_severity;
use crate::models::{
    AgeGroup, CheckResult, CheckStatus, SafetyCategory, SafetyCheck, SafetyItem,
};

const CERTIFICATION_ADVICE: &str =
    "All safety checks passed. Third-party certification testing is recommended before market release.";

/// Safety check engine
///
/// Pure except for the generated report identifier: identical inputs yield
/// identical items, score, recommendations and pass flag.
pub struct SafetyCheckEngine;

impl SafetyCheckEngine {
    /// Runs a full safety check for one product.
    ///
    /// # Arguments
    /// * `product_name` - Identifying name, passed through to the report
    /// * `age_group` - Target age band driving the baseline judgements
    /// * `overrides` - Caller judgements replacing baselines per category
    ///
    /// # Returns
    /// A fresh report with one item per safety category.
    pub fn run(
        product_name: &str,
        age_group: AgeGroup,
        overrides: &HashMap<SafetyCategory, CheckResult>,
    ) -> SafetyCheck {
        let items: Vec<SafetyItem> = SafetyCategory::ALL
            .iter()
            .map(|&category| {
                let result = Self::merge_result(category, age_group, overrides);
                let severity = derive_severity(category, result.status);
                SafetyItem::new(category, result, severity)
            })
            .collect();

        let overall_score = Self::overall_score(&items);
        let recommendations = Self::recommendations(&items);
        let passed = items.iter().all(|item| item.status != CheckStatus::Failed);

        SafetyCheck {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.to_string(),
            age_group,
            items,
            overall_score,
            recommendations,
            passed,
        }
    }

    /// Merge-by-key: an override replaces the baseline entirely, status and
    /// notes both.
    fn merge_result(
        category: SafetyCategory,
        age_group: AgeGroup,
        overrides: &HashMap<SafetyCategory, CheckResult>,
    ) -> CheckResult {
        overrides
            .get(&category)
            .cloned()
            .unwrap_or_else(|| default_check(category, age_group))
    }

    /// Score over relevant items only. 100 when nothing is relevant.
    fn overall_score(items: &[SafetyItem]) -> i32 {
        let passed = items
            .iter()
            .filter(|i| i.status == CheckStatus::Passed)
            .count() as i32;
        let warning = items
            .iter()
            .filter(|i| i.status == CheckStatus::Warning)
            .count() as i32;
        let not_applicable = items
            .iter()
            .filter(|i| i.status == CheckStatus::NotApplicable)
            .count() as i32;

        let relevant = items.len() as i32 - not_applicable;
        if relevant == 0 {
            return 100;
        }

        (passed * 100 + warning * 50) / relevant
    }

    /// One message per failed or warning item, in item order, or the single
    /// certification suggestion when there is nothing to flag.
    fn recommendations(items: &[SafetyItem]) -> Vec<String> {
        let mut recommendations = Vec::new();

        for item in items {
            match item.status {
                CheckStatus::Failed => {
                    recommendations.push(format!(
                        "Critical issue: {} failed inspection. {}",
                        item.name, item.notes
                    ));
                }
                CheckStatus::Warning => {
                    recommendations.push(format!(
                        "Caution: {} carries a potential risk. {}",
                        item.name, item.notes
                    ));
                }
                _ => {}
            }
        }

        if recommendations.is_empty() {
            recommendations.push(CERTIFICATION_ADVICE.to_string());
        }

        recommendations
    }
}
