use thiserror::Error;

pub const DEFAULT_MAX_COUNT: u32 = 100;
pub const DEFAULT_MAX_COEFFICIENT: u32 = 100;
pub const DEFAULT_MAX_NAME_CHARS: usize = 100;
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid limit for '{name}': {value} (must be at least 1)")]
    InvalidLimit { name: &'static str, value: usize },
}

/// Upper bounds applied to formulas and equations.
///
/// These are sanity ceilings for user input, not chemical constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaLimits {
    /// Largest subscript accepted after an element symbol.
    pub max_count: u32,
    /// Largest stoichiometric coefficient accepted in front of a formula.
    pub max_coefficient: u32,
}

impl Default for FormulaLimits {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            max_coefficient: DEFAULT_MAX_COEFFICIENT,
        }
    }
}

/// Length limits for the free-text fields of a reaction record, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionLimits {
    pub max_name_chars: usize,
    pub max_description_chars: usize,
}

impl Default for ReactionLimits {
    fn default() -> Self {
        Self {
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    pub formula: FormulaLimits,
    pub reaction: ReactionLimits,
}

impl ValidationConfig {
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ValidationConfigBuilder {
    max_count: Option<u32>,
    max_coefficient: Option<u32>,
    max_name_chars: Option<usize>,
    max_description_chars: Option<usize>,
}

impl ValidationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_count(mut self, max_count: u32) -> Self {
        self.max_count = Some(max_count);
        self
    }
    pub fn max_coefficient(mut self, max_coefficient: u32) -> Self {
        self.max_coefficient = Some(max_coefficient);
        self
    }
    pub fn max_name_chars(mut self, chars: usize) -> Self {
        self.max_name_chars = Some(chars);
        self
    }
    pub fn max_description_chars(mut self, chars: usize) -> Self {
        self.max_description_chars = Some(chars);
        self
    }

    pub fn build(self) -> Result<ValidationConfig, ConfigError> {
        let formula = FormulaLimits {
            max_count: at_least_one("max_count", self.max_count.unwrap_or(DEFAULT_MAX_COUNT))?,
            max_coefficient: at_least_one(
                "max_coefficient",
                self.max_coefficient.unwrap_or(DEFAULT_MAX_COEFFICIENT),
            )?,
        };
        let reaction = ReactionLimits {
            max_name_chars: at_least_one(
                "max_name_chars",
                self.max_name_chars.unwrap_or(DEFAULT_MAX_NAME_CHARS),
            )?,
            max_description_chars: at_least_one(
                "max_description_chars",
                self.max_description_chars
                    .unwrap_or(DEFAULT_MAX_DESCRIPTION_CHARS),
            )?,
        };
        Ok(ValidationConfig { formula, reaction })
    }
}

fn at_least_one<T>(name: &'static str, value: T) -> Result<T, ConfigError>
where
    T: Copy + TryInto<usize>,
{
    let as_usize = value.try_into().unwrap_or(usize::MAX);
    if as_usize == 0 {
        return Err(ConfigError::InvalidLimit { name, value: 0 });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_matches_default() {
        let config = ValidationConfigBuilder::new().build().unwrap();
        assert_eq!(config, ValidationConfig::default());
        assert_eq!(config.formula.max_count, 100);
        assert_eq!(config.formula.max_coefficient, 100);
        assert_eq!(config.reaction.max_name_chars, 100);
        assert_eq!(config.reaction.max_description_chars, 1000);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ValidationConfig::builder()
            .max_count(12)
            .max_coefficient(4)
            .max_name_chars(20)
            .max_description_chars(200)
            .build()
            .unwrap();
        assert_eq!(config.formula.max_count, 12);
        assert_eq!(config.formula.max_coefficient, 4);
        assert_eq!(config.reaction.max_name_chars, 20);
        assert_eq!(config.reaction.max_description_chars, 200);
    }

    #[test]
    fn builder_rejects_zero_limits() {
        assert_eq!(
            ValidationConfig::builder().max_count(0).build(),
            Err(ConfigError::InvalidLimit {
                name: "max_count",
                value: 0
            })
        );
        assert!(
            ValidationConfig::builder()
                .max_description_chars(0)
                .build()
                .is_err()
        );
    }
}
