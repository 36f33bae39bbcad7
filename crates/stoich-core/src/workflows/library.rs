use super::reaction::ReactionData;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonLibrary {
    List(Vec<ReactionData>),
    Table { reactions: Vec<ReactionData> },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLibrary {
    #[serde(default)]
    reactions: Vec<ReactionData>,
}

/// An ordered collection of reaction records loaded from a data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionLibrary {
    records: Vec<ReactionData>,
}

impl ReactionLibrary {
    pub fn from_records(records: Vec<ReactionData>) -> Self {
        Self { records }
    }

    /// Loads a library, choosing the format from the file extension.
    ///
    /// - `.json`: a top-level array of records, or an object with a `reactions` array
    /// - `.toml`: a `[[reactions]]` array of tables
    /// - `.csv`: a header row naming the record fields (`name,equation,description,type,category`)
    pub fn load(path: &Path) -> Result<Self, LibraryLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let records = match extension.as_deref() {
            Some("json") => Self::load_json(path)?,
            Some("toml") => Self::load_toml(path)?,
            Some("csv") => Self::load_csv(path)?,
            _ => {
                return Err(LibraryLoadError::UnsupportedFormat {
                    path: path.to_string_lossy().to_string(),
                });
            }
        };

        debug!("Loaded {} reaction record(s) from {:?}", records.len(), path);
        Ok(Self { records })
    }

    fn read(path: &Path) -> Result<String, LibraryLoadError> {
        std::fs::read_to_string(path).map_err(|e| LibraryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    fn load_json(path: &Path) -> Result<Vec<ReactionData>, LibraryLoadError> {
        let content = Self::read(path)?;
        let library: JsonLibrary =
            serde_json::from_str(&content).map_err(|e| LibraryLoadError::Json {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(match library {
            JsonLibrary::List(records) => records,
            JsonLibrary::Table { reactions } => reactions,
        })
    }

    fn load_toml(path: &Path) -> Result<Vec<ReactionData>, LibraryLoadError> {
        let content = Self::read(path)?;
        let library: TomlLibrary =
            toml::from_str(&content).map_err(|e| LibraryLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(library.reactions)
    }

    fn load_csv(path: &Path) -> Result<Vec<ReactionData>, LibraryLoadError> {
        let to_error = |e: csv::Error| LibraryLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(path)
            .map_err(to_error)?;
        reader
            .deserialize()
            .collect::<Result<Vec<ReactionData>, _>>()
            .map_err(to_error)
    }

    pub fn records(&self) -> &[ReactionData] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum LibraryLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unsupported reaction library format for '{path}'. Expected .json, .toml or .csv")]
    UnsupportedFormat { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_array() {
        let file = write_temp(
            ".json",
            r#"[{"name": "Water", "equation": "2H2 + O2 → 2H2O", "description": "d",
                "type": "combination", "category": "inorganic"}]"#,
        );
        let library = ReactionLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.records()[0].equation, "2H2 + O2 → 2H2O");
    }

    #[test]
    fn loads_json_object_with_reactions_key() {
        let file = write_temp(
            ".json",
            r#"{"reactions": [{"name": "A"}, {"name": "B", "category": "organic"}]}"#,
        );
        let library = ReactionLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.records()[1].category, "organic");
        assert_eq!(library.records()[0].equation, "");
    }

    #[test]
    fn loads_toml_array_of_tables() {
        let file = write_temp(
            ".toml",
            r#"
[[reactions]]
name = "Methane combustion"
equation = "CH4 + 2O2 -> CO2 + 2H2O"
description = "Complete combustion of methane."
type = "combustion"
category = "organic"
temperature = "high"
"#,
        );
        let library = ReactionLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.records()[0].reaction_type, "combustion");
        assert_eq!(library.records()[0].temperature.as_deref(), Some("high"));
    }

    #[test]
    fn loads_csv_with_header_row() {
        let file = write_temp(
            ".csv",
            "name,equation,description,type,category,catalyst\n\
             Rusting,4Fe + 3O2 = 2Fe2O3,Iron oxidizes.,combination,inorganic,\n\
             Salt,Na + Cl = NaCl,Sodium chloride.,combination,inorganic,none\n",
        );
        let library = ReactionLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.records()[0].name, "Rusting");
        assert!(library.records()[0].catalyst.is_none());
        assert_eq!(library.records()[1].catalyst.as_deref(), Some("none"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = write_temp(".yaml", "reactions: []");
        assert!(matches!(
            ReactionLibrary::load(file.path()),
            Err(LibraryLoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = ReactionLibrary::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LibraryLoadError::Io { .. })));
    }

    #[test]
    fn malformed_json_reports_parse_error_with_path() {
        let file = write_temp(".json", "{ not json");
        let err = ReactionLibrary::load(file.path()).unwrap_err();
        assert!(matches!(err, LibraryLoadError::Json { .. }));
        assert!(err.to_string().contains(&*file.path().to_string_lossy()));
    }
}
