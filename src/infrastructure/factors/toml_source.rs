//! Emission factors from a TOML file
//!
//! ```toml
//! [regions.India]
//! Bike = 0.05
//! Electricity = 0.82
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::entities::{EmissionFactorTable, RegionFactors};
use crate::domain::ports::FactorSource;
use crate::domain::services::closest_match;
use crate::domain::value_objects::Category;
use crate::error::{FootprintError, FootprintResult};

#[derive(Debug, Deserialize)]
struct FactorFile {
    #[serde(default)]
    regions: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Factor table read from disk on `load`
#[derive(Debug, Clone)]
pub struct TomlFactorFile {
    path: PathBuf,
}

impl TomlFactorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn invalid(&self, message: impl Into<String>) -> FootprintError {
        FootprintError::InvalidFactorFile {
            file: self.path.clone(),
            message: message.into(),
        }
    }

    fn parse(&self, content: &str) -> FootprintResult<EmissionFactorTable> {
        let deserializer = toml::Deserializer::new(content);
        let mut ignored = Vec::new();
        let file: FactorFile = serde_ignored::deserialize(deserializer, |path| {
            ignored.push(path.to_string());
        })
        .map_err(|e| self.invalid(e.to_string()))?;

        for key in ignored {
            warn!(file = %self.path.display(), key = %key, "ignoring unknown key in factor file");
        }

        let mut regions = BTreeMap::new();
        for (region, entries) in file.regions {
            let mut factors = RegionFactors::new();
            for (name, value) in entries {
                let category = parse_category(&name)
                    .ok_or_else(|| self.invalid(unknown_category_message(&region, &name)))?;
                factors.insert(category, value);
            }
            regions.insert(region, factors);
        }

        EmissionFactorTable::from_regions(regions).map_err(|e| self.invalid(e.to_string()))
    }
}

impl FactorSource for TomlFactorFile {
    fn load(&self) -> FootprintResult<EmissionFactorTable> {
        debug!(path = %self.path.display(), "reading factor file");
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| self.invalid(format!("cannot read file: {}", e)))?;
        self.parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_category(name: &str) -> Option<Category> {
    Category::ALL.into_iter().find(|c| c.name() == name)
}

fn unknown_category_message(region: &str, name: &str) -> String {
    let names = Category::ALL.map(|c| c.name());
    match closest_match(name, names.iter().copied(), 3) {
        Some(suggestion) => format!(
            "unknown category '{}' in region '{}' (did you mean '{}'?)",
            name, region, suggestion
        ),
        None => format!(
            "unknown category '{}' in region '{}' (expected one of: {})",
            name,
            region,
            names.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(content: &str) -> (tempfile::TempDir, TomlFactorFile) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factors.toml");
        fs::write(&path, content).unwrap();
        (dir, TomlFactorFile::new(path))
    }

    #[test]
    fn loads_builtin_equivalent_file() {
        let (_dir, source) = write_file(
            r#"
[regions.India]
Bike = 0.05
Car = 0.14
Bus = 0.03
Electricity = 0.82
Diet = 1.25
Waste = 0.1
"#,
        );
        assert_eq!(source.load().unwrap(), EmissionFactorTable::builtin());
    }

    #[test]
    fn loads_multiple_regions() {
        let (_dir, source) = write_file(
            r#"
[regions.India]
Bike = 0.05
Electricity = 0.82
Diet = 1.25
Waste = 0.1

[regions.Kenya]
Bus = 0.04
Electricity = 0.3
Diet = 1.0
Waste = 0.2
"#,
        );
        let table = source.load().unwrap();
        assert_eq!(table.regions(), vec!["India", "Kenya"]);
        assert_eq!(table.lookup("Kenya", Category::Bus).unwrap(), 0.04);
    }

    #[test]
    fn missing_file_is_invalid_factor_file() {
        let source = TomlFactorFile::new("/nonexistent/factors.toml");
        let err = source.load().unwrap_err();
        assert!(matches!(err, FootprintError::InvalidFactorFile { .. }));
        assert!(err.to_string().contains("cannot read file"));
    }

    #[test]
    fn syntax_error_is_reported() {
        let (_dir, source) = write_file("[regions.India\nBike = ");
        let err = source.load().unwrap_err();
        assert!(matches!(err, FootprintError::InvalidFactorFile { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let (_dir, source) = write_file("");
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("no regions"), "{err}");
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        let (_dir, source) = write_file("[regions.India]\nDiet = 0.0\n");
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("must be a positive number"), "{err}");
    }

    #[test]
    fn unknown_category_suggests_closest() {
        let (_dir, source) = write_file("[regions.India]\nElectricty = 0.82\n");
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("did you mean 'Electricity'"), "{err}");
    }

    #[test]
    fn unknown_top_level_key_is_ignored() {
        let (_dir, source) = write_file(
            "version = 2\n[regions.India]\nBus = 0.03\nElectricity = 0.82\nDiet = 1.25\nWaste = 0.1\n",
        );
        let table = source.load().unwrap();
        assert_eq!(table.lookup("India", Category::Bus).unwrap(), 0.03);
    }

    #[test]
    fn region_with_only_a_vehicle_is_rejected() {
        let (_dir, source) = write_file(
            r#"
[regions.Kenya]
Bike = 0.05

[regions.Peru]
Bus = 0.04
Electricity = 0.3
Diet = 1.0
Waste = 0.2
"#,
        );
        let err = source.load().unwrap_err();
        assert!(matches!(err, FootprintError::InvalidFactorFile { .. }));
        assert!(
            err.to_string()
                .contains("region 'Kenya' is incomplete: missing Electricity, Diet, Waste"),
            "{err}"
        );
    }

    #[test]
    fn region_without_transport_is_rejected() {
        let (_dir, source) = write_file(
            r#"
[regions.Peru]
Electricity = 0.3
Diet = 1.0
Waste = 0.2
"#,
        );
        let err = source.load().unwrap_err();
        assert!(
            err.to_string().contains("region 'Peru' is incomplete: missing a transport factor"),
            "{err}"
        );
    }

    #[test]
    fn describe_is_the_path() {
        let source = TomlFactorFile::new("/tmp/f.toml");
        assert_eq!(source.describe(), "/tmp/f.toml");
    }
}
