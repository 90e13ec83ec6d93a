//! Categorical factor tables
//!
//! Each table maps the fixed set of accepted category labels for one
//! attribute to its numeric factor. Lookups are exact and case-sensitive;
//! a label that is not listed is an error, never a default.

use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTable {
    pub attribute: &'static str,
    pub entries: &'static [(&'static str, f64)],
}

impl FactorTable {
    pub fn lookup(&self, category: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|(label, _)| *label == category)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| SimulationError::UnknownCategory {
                attribute: self.attribute,
                value: category.to_string(),
            })
    }
}

/// Employment type as an income growth multiplier
pub const EMPLOYMENT_INCOME_TABLE: FactorTable = FactorTable {
    attribute: "employment_type",
    entries: &[
        ("full-time", 1.0),
        ("part-time", 0.8),
        ("self-employed", 1.2),
        ("unemployed", 0.5),
    ],
};

/// Employment type as a default-risk multiplier
pub const EMPLOYMENT_RISK_TABLE: FactorTable = FactorTable {
    attribute: "employment_type",
    entries: &[
        ("full-time", 1.0),
        ("part-time", 1.2),
        ("self-employed", 1.5),
        ("unemployed", 2.0),
    ],
};

pub const REGION_TABLE: FactorTable = FactorTable {
    attribute: "region",
    entries: &[("urban", 1.2), ("suburban", 1.0), ("rural", 0.8)],
};

pub const AGE_GROUP_TABLE: FactorTable = FactorTable {
    attribute: "age_group",
    entries: &[
        ("18-25", 0.9),
        ("26-35", 1.0),
        ("36-45", 1.1),
        ("46-55", 1.1),
        ("56+", 1.0),
    ],
};

pub const EDUCATION_TABLE: FactorTable = FactorTable {
    attribute: "education_level",
    entries: &[
        ("high school", 0.8),
        ("bachelor", 1.0),
        ("master", 1.2),
        ("phd", 1.2),
    ],
};

pub const MARITAL_STATUS_TABLE: FactorTable = FactorTable {
    attribute: "marital_status",
    entries: &[
        ("single", 1.0),
        ("married", 1.1),
        ("divorced", 0.9),
        ("widowed", 0.9),
    ],
};

pub const INSURANCE_TYPE_TABLE: FactorTable = FactorTable {
    attribute: "health_insurance_type",
    entries: &[("private", 1.2), ("public", 1.0), ("none", 0.8)],
};

/// The set of categorical tables a variant resolves against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTables {
    pub employment_type: &'static FactorTable,
    pub region: &'static FactorTable,
    pub age_group: &'static FactorTable,
    pub education_level: &'static FactorTable,
    pub marital_status: &'static FactorTable,
    pub health_insurance_type: &'static FactorTable,
}

impl FactorTables {
    pub const STANDARD: FactorTables = FactorTables {
        employment_type: &EMPLOYMENT_INCOME_TABLE,
        region: &REGION_TABLE,
        age_group: &AGE_GROUP_TABLE,
        education_level: &EDUCATION_TABLE,
        marital_status: &MARITAL_STATUS_TABLE,
        health_insurance_type: &INSURANCE_TYPE_TABLE,
    };
}

impl Default for FactorTables {
    fn default() -> Self {
        Self::STANDARD
    }
}
