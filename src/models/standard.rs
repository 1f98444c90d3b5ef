use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductArea {
    #[serde(rename = "high_chair")]
    HighChair,
    #[serde(rename = "crib")]
    Crib,
}

impl ProductArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductArea::HighChair => "high_chair",
            ProductArea::Crib => "crib",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high_chair" => Some(ProductArea::HighChair),
            "crib" => Some(ProductArea::Crib),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductArea::HighChair => "High chair",
            ProductArea::Crib => "Crib",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StandardCategory {
    #[serde(rename = "international")]
    International,
    #[serde(rename = "regional")]
    Regional,
    #[serde(rename = "national")]
    National,
}

impl StandardCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardCategory::International => "international",
            StandardCategory::Regional => "regional",
            StandardCategory::National => "national",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "international" => Some(StandardCategory::International),
            "regional" => Some(StandardCategory::Regional),
            "national" => Some(StandardCategory::National),
            _ => None,
        }
    }
}

/// One regulatory standard in the bundled catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub version: String,
    pub category: StandardCategory,
    pub area: ProductArea,
    pub region: String,
    pub applicable_age: String,
    pub applicable_weight: String,
    pub scope: String,
    pub effective_date: String,
    pub status: String,
    pub source: String,
}

/// Compact shape for presenting a standard without its full scope text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardSummary {
    pub id: String,
    pub name: String,
    pub region: String,
    pub version: String,
    pub area: String,
}

impl StandardRecord {
    pub fn summary(&self) -> StandardSummary {
        StandardSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            region: self.region.clone(),
            version: self.version.clone(),
            area: self.area.display_name().to_string(),
        }
    }

    /// EN 14988-1 - European high chair standard
    pub fn en_14988_1() -> Self {
        Self {
            id: "EN-14988-1".to_string(),
            code: "EN 14988-1".to_string(),
            name: "Children's furniture - Child care articles - High chairs".to_string(),
            version: "2006+A1:2012".to_string(),
            category: StandardCategory::International,
            area: ProductArea::HighChair,
            region: "Europe (ECE)".to_string(),
            applicable_age: "Approx. 6 months to 3 years".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for high chairs, covering stability, structural strength, restraint systems, locking mechanisms, sharp edges and choking hazards. The 2024 edition is the latest revision.".to_string(),
            effective_date: "2024".to_string(),
            status: "current".to_string(),
            source: "European Committee for Standardization (CEN)".to_string(),
        }
    }

    /// EN 16120 - European home-use high chair standard
    pub fn en_16120() -> Self {
        Self {
            id: "EN-16120".to_string(),
            code: "EN 16120".to_string(),
            name: "Child use and care articles - Home use high chairs".to_string(),
            version: "2012+A1:2015".to_string(),
            category: StandardCategory::International,
            area: ProductArea::HighChair,
            region: "Europe (ECE)".to_string(),
            applicable_age: "Approx. 6 months to 3 years".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for home-use high chairs, covering height adjustment and locking of removable components.".to_string(),
            effective_date: "2015".to_string(),
            status: "current".to_string(),
            source: "European Committee for Standardization (CEN)".to_string(),
        }
    }

    /// ASTM F404 - US high chair standard
    pub fn astm_f404() -> Self {
        Self {
            id: "ASTM-F404".to_string(),
            code: "ASTM F404".to_string(),
            name: "Standard Consumer Safety Specification for High Chairs".to_string(),
            version: "2021".to_string(),
            category: StandardCategory::National,
            area: ProductArea::HighChair,
            region: "United States (USA)".to_string(),
            applicable_age: "Approx. 6 months to 3 years".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety performance requirements for high chairs, covering stability, strength, labeling, warning labels and chemical limits. F404-21 tightens lead content limits for paints and accessible components.".to_string(),
            effective_date: "2021".to_string(),
            status: "current".to_string(),
            source: "ASTM International".to_string(),
        }
    }

    /// AS 4684 - Australian high chair standard
    pub fn as_4684() -> Self {
        Self {
            id: "AS-4684".to_string(),
            code: "AS 4684".to_string(),
            name: "Children's furniture - High chairs - Safety requirements".to_string(),
            version: "2009".to_string(),
            category: StandardCategory::National,
            area: ProductArea::HighChair,
            region: "Australia (AU)".to_string(),
            applicable_age: "Approx. 6 months to 3 years".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for high chairs, covering stability, strength, restraint systems and locking of folding mechanisms.".to_string(),
            effective_date: "2009".to_string(),
            status: "current".to_string(),
            source: "Standards Australia".to_string(),
        }
    }

    /// GB 22793.1 - Chinese children's high chair standard
    pub fn gb_22793_1() -> Self {
        Self {
            id: "GB-22793.1".to_string(),
            code: "GB 22793.1".to_string(),
            name: "Children's high chairs - Part 1: Safety requirements".to_string(),
            version: "2008".to_string(),
            category: StandardCategory::National,
            area: ProductArea::HighChair,
            region: "China (CN)".to_string(),
            applicable_age: "Approx. 6 months to 3 years".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for children's high chairs, covering materials, structure, stability, strength, markings and instructions for use.".to_string(),
            effective_date: "2008".to_string(),
            status: "current".to_string(),
            source: "State Administration for Market Regulation (SAMR)".to_string(),
        }
    }

    /// EN 1130 - European cot and cradle standard
    pub fn en_1130() -> Self {
        Self {
            id: "EN-1130".to_string(),
            code: "EN 1130".to_string(),
            name: "Children's furniture - Cots".to_string(),
            version: "2019".to_string(),
            category: StandardCategory::International,
            area: ProductArea::Crib,
            region: "Europe (ECE)".to_string(),
            applicable_age: "Newborn to approx. 18 months".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for cots, covering dimensions, slat spacing, protrusions, mattresses and locking of folding mechanisms.".to_string(),
            effective_date: "2019".to_string(),
            status: "current".to_string(),
            source: "European Committee for Standardization (CEN)".to_string(),
        }
    }

    /// ASTM F1169 - US full-size crib standard
    pub fn astm_f1169() -> Self {
        Self {
            id: "ASTM-F1169".to_string(),
            code: "ASTM F1169".to_string(),
            name: "Standard Consumer Safety Specification for Full-Size Baby Cribs".to_string(),
            version: "2019".to_string(),
            category: StandardCategory::National,
            area: ProductArea::Crib,
            region: "United States (USA)".to_string(),
            applicable_age: "Newborn to approx. 3 years".to_string(),
            applicable_weight: "Typically \u{2264}23kg".to_string(),
            scope: "Safety performance requirements for full-size baby cribs, including the drop-side prohibition, rail heights and slat spacing.".to_string(),
            effective_date: "2019".to_string(),
            status: "current".to_string(),
            source: "ASTM International".to_string(),
        }
    }

    /// ASTM F1821 - US non-full-size crib standard
    pub fn astm_f1821() -> Self {
        Self {
            id: "ASTM-F1821".to_string(),
            code: "ASTM F1821".to_string(),
            name: "Standard Consumer Safety Specification for Non-Full-Size Baby Cribs".to_string(),
            version: "2021".to_string(),
            category: StandardCategory::National,
            area: ProductArea::Crib,
            region: "United States (USA)".to_string(),
            applicable_age: "Newborn to approx. 18 months".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety performance requirements for non-full-size baby cribs.".to_string(),
            effective_date: "2021".to_string(),
            status: "current".to_string(),
            source: "ASTM International".to_string(),
        }
    }

    /// GB/T 33266 - Chinese infant crib standard
    pub fn gb_t_33266() -> Self {
        Self {
            id: "GB/T-33266".to_string(),
            code: "GB/T 33266".to_string(),
            name: "Safety requirements for infant cribs".to_string(),
            version: "2016".to_string(),
            category: StandardCategory::National,
            area: ProductArea::Crib,
            region: "China (CN)".to_string(),
            applicable_age: "Newborn to approx. 18 months".to_string(),
            applicable_weight: "Typically \u{2264}15kg".to_string(),
            scope: "Safety requirements for infant cribs, covering materials, structure, dimensions, markings and instructions for use.".to_string(),
            effective_date: "2016".to_string(),
            status: "current".to_string(),
            source: "State Administration for Market Regulation (SAMR)".to_string(),
        }
    }

    /// AS/NZS 2172 - Australia/New Zealand cot standard
    pub fn as_nzs_2172() -> Self {
        Self {
            id: "AS-NZS-2172".to_string(),
            code: "AS/NZS 2172".to_string(),
            name: "Cots for household use - Safety requirements".to_string(),
            version: "2013".to_string(),
            category: StandardCategory::International,
            area: ProductArea::Crib,
            region: "Australia/New Zealand (AU/NZ)".to_string(),
            applicable_age: "Newborn to approx. 3 years".to_string(),
            applicable_weight: "Typically \u{2264}23kg".to_string(),
            scope: "Safety requirements for household cots.".to_string(),
            effective_date: "2013".to_string(),
            status: "current".to_string(),
            source: "Standards Australia".to_string(),
        }
    }

    pub fn high_chair_standards() -> Vec<Self> {
        vec![
            StandardRecord::en_14988_1(),
            StandardRecord::astm_f404(),
            StandardRecord::gb_22793_1(),
            StandardRecord::en_16120(),
            StandardRecord::as_4684(),
        ]
    }

    pub fn crib_standards() -> Vec<Self> {
        vec![
            StandardRecord::en_1130(),
            StandardRecord::astm_f1169(),
            StandardRecord::astm_f1821(),
            StandardRecord::gb_t_33266(),
            StandardRecord::as_nzs_2172(),
        ]
    }

    pub fn all_standards() -> Vec<Self> {
        let mut standards = StandardRecord::high_chair_standards();
        standards.extend(StandardRecord::crib_standards());
        standards
    }
}
