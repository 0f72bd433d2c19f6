use crate::config::validate_runway_input;
use crate::core::ConfigProvider;
use crate::domain::model::RunwayInput;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration, selected with `--config <file>`. Covers the
/// same parameters as the CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub analysis: AnalysisSection,
    pub table: TableSection,
    pub runway: RunwaySection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSection {
    #[serde(default = "default_airport")]
    pub airport: String,
    pub description: Option<String>,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            airport: default_airport(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwaySection {
    pub length_m: f64,
    pub altitude_m: f64,
    pub temperature_c: f64,
    pub slope_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            formats: default_formats(),
        }
    }
}

fn default_airport() -> String {
    "Tuxtla Gutiérrez".to_string()
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string(), "json".to_string()]
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| AnalysisError::ConfigError {
            message: format!("cannot parse config file {}: {}", path.display(), e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn airport(&self) -> &str {
        &self.analysis.airport
    }

    fn table_path(&self) -> &str {
        &self.table.path
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_formats(&self) -> &[String] {
        &self.report.formats
    }

    fn runway_input(&self) -> RunwayInput {
        RunwayInput {
            runway_length_m: self.runway.length_m,
            altitude_m: self.runway.altitude_m,
            temperature_c: self.runway.temperature_c,
            slope_percent: self.runway.slope_percent,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("analysis.airport", &self.analysis.airport)?;
        validation::validate_path("table.path", &self.table.path)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_report_formats("report.formats", &self.report.formats)?;
        validate_runway_input("runway", &self.runway_input())?;
        Ok(())
    }
}
