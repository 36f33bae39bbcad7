use crate::engine::config::{ReactionLimits, ValidationConfig};
use crate::engine::equation::{EquationValidationResult, validate_reaction_equation_with};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Broad family a reaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionCategory {
    Organic,
    Inorganic,
}

impl ReactionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionCategory::Organic => "organic",
            ReactionCategory::Inorganic => "inorganic",
        }
    }
}

impl fmt::Display for ReactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionCategory {
    type Err = ();

    /// Parses `"organic"` or `"inorganic"`. The match is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organic" => Ok(ReactionCategory::Organic),
            "inorganic" => Ok(ReactionCategory::Inorganic),
            _ => Err(()),
        }
    }
}

/// A user-authored or bundled reaction record.
///
/// Fields are kept as raw strings so that incomplete records can be loaded and then
/// reported on field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionData {
    pub name: String,
    pub equation: String,
    pub description: String,
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalyst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<String>,
}

impl ReactionData {
    pub fn category(&self) -> Option<ReactionCategory> {
        self.category.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionField {
    Name,
    Equation,
    Description,
    #[serde(rename = "type")]
    Type,
    Category,
}

impl ReactionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionField::Name => "name",
            ReactionField::Equation => "equation",
            ReactionField::Description => "description",
            ReactionField::Type => "type",
            ReactionField::Category => "category",
        }
    }
}

impl fmt::Display for ReactionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field outcome of [`validate_reaction_data`]. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReactionDataValidation {
    pub errors: BTreeMap<ReactionField, String>,
}

impl ReactionDataValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ReactionField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

pub fn validate_reaction_data(data: &ReactionData) -> ReactionDataValidation {
    validate_reaction_data_with(data, &ValidationConfig::default())
}

/// Checks every field of a reaction record and collects one message per failing field.
///
/// The equation field reuses the equation validator, so its message is the same one
/// the equation validator would produce on its own.
pub fn validate_reaction_data_with(
    data: &ReactionData,
    config: &ValidationConfig,
) -> ReactionDataValidation {
    let equation = validate_reaction_equation_with(&data.equation, config);
    validate_reaction_fields(data, &equation, &config.reaction)
}

/// Field checks for a record whose equation has already been validated.
pub(crate) fn validate_reaction_fields(
    data: &ReactionData,
    equation: &EquationValidationResult,
    limits: &ReactionLimits,
) -> ReactionDataValidation {
    let mut errors = BTreeMap::new();

    if data.name.trim().is_empty() {
        errors.insert(ReactionField::Name, "Reaction name is required".to_string());
    } else if data.name.chars().count() > limits.max_name_chars {
        errors.insert(
            ReactionField::Name,
            format!("Name must be less than {} characters", limits.max_name_chars),
        );
    }

    if let Err(e) = equation {
        errors.insert(ReactionField::Equation, e.to_string());
    }

    if data.description.trim().is_empty() {
        errors.insert(
            ReactionField::Description,
            "Description is required".to_string(),
        );
    } else if data.description.chars().count() > limits.max_description_chars {
        errors.insert(
            ReactionField::Description,
            format!(
                "Description must be less than {} characters",
                limits.max_description_chars
            ),
        );
    }

    if data.reaction_type.trim().is_empty() {
        errors.insert(ReactionField::Type, "Reaction type is required".to_string());
    }

    if data.category().is_none() {
        errors.insert(
            ReactionField::Category,
            "Category must be either organic or inorganic".to_string(),
        );
    }

    ReactionDataValidation { errors }
}
