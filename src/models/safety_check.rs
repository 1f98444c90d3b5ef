use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "infant")]
    Infant,
    #[serde(rename = "toddler")]
    Toddler,
    #[serde(rename = "preschool")]
    Preschool,
    #[serde(rename = "school_age")]
    SchoolAge,
    #[serde(rename = "teen")]
    Teen,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::All => "all",
            AgeGroup::Infant => "infant",
            AgeGroup::Toddler => "toddler",
            AgeGroup::Preschool => "preschool",
            AgeGroup::SchoolAge => "school_age",
            AgeGroup::Teen => "teen",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(AgeGroup::All),
            "infant" => Some(AgeGroup::Infant),
            "toddler" => Some(AgeGroup::Toddler),
            "preschool" => Some(AgeGroup::Preschool),
            "school_age" => Some(AgeGroup::SchoolAge),
            "teen" => Some(AgeGroup::Teen),
            _ => None,
        }
    }

    pub fn age_range(&self) -> &'static str {
        match self {
            AgeGroup::All => "all ages",
            AgeGroup::Infant => "0-3 years",
            AgeGroup::Toddler => "3-6 years",
            AgeGroup::Preschool => "6-9 years",
            AgeGroup::SchoolAge => "9-12 years",
            AgeGroup::Teen => "12+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SafetyCategory {
    #[serde(rename = "small_parts")]
    SmallParts,
    #[serde(rename = "sharp_edges")]
    SharpEdges,
    #[serde(rename = "material_safety")]
    MaterialSafety,
    #[serde(rename = "size_specifications")]
    SizeSpecifications,
    #[serde(rename = "electrical_safety")]
    ElectricalSafety,
    #[serde(rename = "chemical_safety")]
    ChemicalSafety,
    #[serde(rename = "structural_stability")]
    StructuralStability,
    #[serde(rename = "labeling_requirements")]
    LabelingRequirements,
}

impl SafetyCategory {
    /// Evaluation order for check runs. Reports and recommendations follow
    /// this order.
    pub const ALL: [SafetyCategory; 8] = [
        SafetyCategory::SmallParts,
        SafetyCategory::SharpEdges,
        SafetyCategory::MaterialSafety,
        SafetyCategory::SizeSpecifications,
        SafetyCategory::ElectricalSafety,
        SafetyCategory::ChemicalSafety,
        SafetyCategory::StructuralStability,
        SafetyCategory::LabelingRequirements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyCategory::SmallParts => "small_parts",
            SafetyCategory::SharpEdges => "sharp_edges",
            SafetyCategory::MaterialSafety => "material_safety",
            SafetyCategory::SizeSpecifications => "size_specifications",
            SafetyCategory::ElectricalSafety => "electrical_safety",
            SafetyCategory::ChemicalSafety => "chemical_safety",
            SafetyCategory::StructuralStability => "structural_stability",
            SafetyCategory::LabelingRequirements => "labeling_requirements",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "small_parts" => Some(SafetyCategory::SmallParts),
            "sharp_edges" => Some(SafetyCategory::SharpEdges),
            "material_safety" => Some(SafetyCategory::MaterialSafety),
            "size_specifications" => Some(SafetyCategory::SizeSpecifications),
            "electrical_safety" => Some(SafetyCategory::ElectricalSafety),
            "chemical_safety" => Some(SafetyCategory::ChemicalSafety),
            "structural_stability" => Some(SafetyCategory::StructuralStability),
            "labeling_requirements" => Some(SafetyCategory::LabelingRequirements),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyCategory::SmallParts => "Small parts",
            SafetyCategory::SharpEdges => "Sharp edges",
            SafetyCategory::MaterialSafety => "Material safety",
            SafetyCategory::SizeSpecifications => "Size specifications",
            SafetyCategory::ElectricalSafety => "Electrical safety",
            SafetyCategory::ChemicalSafety => "Chemical safety",
            SafetyCategory::StructuralStability => "Structural stability",
            SafetyCategory::LabelingRequirements => "Labeling requirements",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[serde(rename = "passed")]
    Passed,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "not_applicable")]
    NotApplicable,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Warning => "warning",
            CheckStatus::Failed => "failed",
            CheckStatus::NotApplicable => "not_applicable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "passed" => Some(CheckStatus::Passed),
            "warning" => Some(CheckStatus::Warning),
            "failed" => Some(CheckStatus::Failed),
            "not_applicable" => Some(CheckStatus::NotApplicable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn numeric_value(&self) -> i32 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

/// Caller-supplied judgement for one category, overriding the default
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub notes: String,
}

impl CheckResult {
    pub fn new(status: CheckStatus, notes: &str) -> Self {
        Self {
            status,
            notes: notes.to_string(),
        }
    }
}

/// One evaluated category in a safety check report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SafetyItem {
    pub category: SafetyCategory,
    pub name: String,
    pub status: CheckStatus,
    pub notes: String,
    pub severity: Severity,
}

impl SafetyItem {
    pub fn new(category: SafetyCategory, result: CheckResult, severity: Severity) -> Self {
        Self {
            category,
            name: category.display_name().to_string(),
            status: result.status,
            notes: result.notes,
            severity,
        }
    }
}

/// Full safety check report for one product evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyCheck {
    pub id: String,
    pub product_name: String,
    pub age_group: AgeGroup,
    pub items: Vec<SafetyItem>,
    pub overall_score: i32,
    pub recommendations: Vec<String>,
    pub passed: bool,
}

/// Row shape for listing past checks without loading their items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyCheckSummary {
    pub id: String,
    pub product_name: String,
    pub age_group: String,
    pub overall_score: i32,
    pub passed: bool,
    pub created_at: String,
}
