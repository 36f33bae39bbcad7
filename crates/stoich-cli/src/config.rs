use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use stoich::engine::config::{ValidationConfig, ValidationConfigBuilder};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialLimits {
    max_count: Option<u32>,
    max_coefficient: Option<u32>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialReactionLimits {
    max_name_chars: Option<usize>,
    max_description_chars: Option<usize>,
}

/// Settings read from a TOML configuration file. Every key is optional.
///
/// ```toml
/// [limits]
/// max-count = 100
/// max-coefficient = 100
///
/// [reactions]
/// max-name-chars = 100
/// max-description-chars = 1000
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    limits: Option<PartialLimits>,
    reactions: Option<PartialReactionLimits>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty when none was given.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final validation settings.
    ///
    /// Precedence, highest first: dedicated CLI flags, `-S` overrides, the file, defaults.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<ValidationConfig> {
        self.apply_set_values(&cli.set_values)?;

        let limits = self.limits.unwrap_or_default();
        let reactions = self.reactions.unwrap_or_default();

        let mut builder = ValidationConfigBuilder::new();
        if let Some(max_count) = cli.max_count.or(limits.max_count) {
            builder = builder.max_count(max_count);
        }
        if let Some(max_coefficient) = cli.max_coefficient.or(limits.max_coefficient) {
            builder = builder.max_coefficient(max_coefficient);
        }
        if let Some(chars) = reactions.max_name_chars {
            builder = builder.max_name_chars(chars);
        }
        if let Some(chars) = reactions.max_description_chars {
            builder = builder.max_description_chars(chars);
        }

        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        debug!(?config, "Resolved validation configuration.");
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "limits.max-count" => {
                    self.limits.get_or_insert_with(Default::default).max_count =
                        Some(parse_integer(key, value_str)?);
                }
                "limits.max-coefficient" => {
                    self.limits
                        .get_or_insert_with(Default::default)
                        .max_coefficient = Some(parse_integer(key, value_str)?);
                }
                "reactions.max-name-chars" => {
                    self.reactions
                        .get_or_insert_with(Default::default)
                        .max_name_chars = Some(parse_integer(key, value_str)?);
                }
                "reactions.max-description-chars" => {
                    self.reactions
                        .get_or_insert_with(Default::default)
                        .max_description_chars = Some(parse_integer(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_integer<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid integer value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stoich.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn parse_cli(args: &[&str]) -> Cli {
        let mut full = vec!["stoich"];
        full.extend_from_slice(args);
        full.extend_from_slice(&["formula", "H2O"]);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&parse_cli(&[]))
            .unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(
            r#"
[limits]
max-count = 20
max-coefficient = 8

[reactions]
max-name-chars = 40
"#,
        );
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&parse_cli(&[]))
            .unwrap();
        assert_eq!(config.formula.max_count, 20);
        assert_eq!(config.formula.max_coefficient, 8);
        assert_eq!(config.reaction.max_name_chars, 40);
        assert_eq!(config.reaction.max_description_chars, 1000);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let (_dir, path) = write_config("[limits]\nmax-count = 20\nmax-coefficient = 8\n");
        let path_str = path.to_string_lossy().to_string();
        let cli = parse_cli(&["--config", &path_str, "--max-count", "50"]);

        let config = PartialAppConfig::load(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(config.formula.max_count, 50);
        assert_eq!(config.formula.max_coefficient, 8);
    }

    #[test]
    fn set_values_override_file_but_not_dedicated_flags() {
        let (_dir, path) = write_config("[limits]\nmax-count = 20\n");
        let cli = parse_cli(&[
            "-S",
            "limits.max-count=30",
            "-S",
            "reactions.max-description-chars=500",
        ]);
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(config.formula.max_count, 30);
        assert_eq!(config.reaction.max_description_chars, 500);

        let cli = parse_cli(&["-S", "limits.max-count=30", "--max-count", "7"]);
        let config = PartialAppConfig::default().merge_with_cli(&cli).unwrap();
        assert_eq!(config.formula.max_count, 7);
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let (_dir, path) = write_config("[limits]\nmax-atoms = 5\n");
        let result = PartialAppConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = PartialAppConfig::from_file(Path::new("/no/such/stoich.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for (arg, fragment) in [
            ("limits.max-count", "Invalid --set format"),
            ("limits.unknown=3", "Unsupported configuration key"),
            ("limits.max-count=lots", "Invalid integer value"),
        ] {
            let err = PartialAppConfig::default()
                .merge_with_cli(&parse_cli(&["-S", arg]))
                .unwrap_err();
            assert!(err.to_string().contains(fragment), "{arg}: {err}");
        }
    }

    #[test]
    fn zero_limits_are_rejected_by_the_builder() {
        let err = PartialAppConfig::default()
            .merge_with_cli(&parse_cli(&["--max-coefficient", "0"]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
