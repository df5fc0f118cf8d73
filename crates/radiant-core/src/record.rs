use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One normalized input row. The external normalizer owns type coercion
/// (missing/unparseable numerics arrive as `0`, strings arrive trimmed); this
/// crate only checks that the contract holds at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub jurisdiction: String,
    pub category: String,
    #[serde(default)]
    pub fines: f64,
    #[serde(default)]
    pub arrests: f64,
    #[serde(default)]
    pub charges: f64,
    #[serde(default, rename = "totalTests")]
    pub total_tests: f64,
}

impl Record {
    pub fn validate(&self) -> Result<()> {
        if self.jurisdiction.is_empty() || self.jurisdiction.trim() != self.jurisdiction {
            return Err(Error::ContractViolation {
                message: format!("jurisdiction must be a non-empty trimmed string, got {:?}", self.jurisdiction),
            });
        }
        if self.category.is_empty() || self.category.trim() != self.category {
            return Err(Error::ContractViolation {
                message: format!("category must be a non-empty trimmed string, got {:?}", self.category),
            });
        }
        for (field, value) in [
            ("fines", self.fines),
            ("arrests", self.arrests),
            ("charges", self.charges),
            ("totalTests", self.total_tests),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ContractViolation {
                    message: format!("\"{field}\" has invalid value: {value}. All fields must be finite and >= 0."),
                });
            }
        }
        if self.fines == 0.0 && self.arrests == 0.0 && self.charges == 0.0 && self.total_tests == 0.0 {
            return Err(Error::ContractViolation {
                message: format!(
                    "all-zero row for {}/{} should have been excluded by the normalizer",
                    self.jurisdiction, self.category
                ),
            });
        }
        Ok(())
    }
}

/// Validates a whole normalized batch. Returns the first violation.
pub fn validate_records(records: &[Record]) -> Result<()> {
    for record in records {
        record.validate()?;
    }
    Ok(())
}
