pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::RunwayInput;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "runway-check")]
#[command(about = "Runway length correction and takeoff feasibility analysis")]
pub struct CliConfig {
    #[arg(long, default_value = "Tuxtla Gutiérrez", help = "Airport name for the report header")]
    pub airport: String,

    #[arg(long, default_value = "data/aeronaves.csv", help = "Fleet requirement table (CSV)")]
    pub table_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "3102.0", help = "Runway length (m)")]
    pub runway_length: f64,

    #[arg(long, default_value = "73.0", help = "Airport altitude (m)")]
    pub altitude: f64,

    #[arg(long, default_value = "30.0", help = "Reference temperature (°C)")]
    pub temperature: f64,

    #[arg(long, default_value = "0.65", help = "Runway slope (%)")]
    pub slope: f64,

    #[arg(long, value_delimiter = ',', default_value = "csv,json", help = "Report files to write")]
    pub formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Load analysis parameters from a TOML file instead")]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn airport(&self) -> &str {
        &self.airport
    }

    fn table_path(&self) -> &str {
        &self.table_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_formats(&self) -> &[String] {
        &self.formats
    }

    fn runway_input(&self) -> RunwayInput {
        RunwayInput {
            runway_length_m: self.runway_length,
            altitude_m: self.altitude,
            temperature_c: self.temperature,
            slope_percent: self.slope,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_non_empty_string("airport", &self.airport)?;
        validation::validate_path("table_path", &self.table_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_report_formats("formats", &self.formats)?;
        validate_runway_input("", &self.runway_input())?;
        Ok(())
    }
}

/// Intake ranges for the five analysis parameters. The calculator itself
/// trusts these bounds.
pub fn validate_runway_input(
    prefix: &str,
    input: &RunwayInput,
) -> crate::utils::error::Result<()> {
    let field = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        }
    };

    validation::validate_finite(&field("runway_length"), input.runway_length_m)?;
    validation::validate_finite(&field("altitude"), input.altitude_m)?;
    validation::validate_finite(&field("temperature"), input.temperature_c)?;
    validation::validate_finite(&field("slope"), input.slope_percent)?;

    validation::validate_range(&field("runway_length"), input.runway_length_m, 0.0, 5000.0)?;
    validation::validate_range(&field("altitude"), input.altitude_m, 0.0, 5000.0)?;
    validation::validate_range(&field("temperature"), input.temperature_c, -50.0, 60.0)?;
    validation::validate_range(&field("slope"), input.slope_percent, -10.0, 10.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            airport: "Tuxtla Gutiérrez".to_string(),
            table_path: "data/aeronaves.csv".to_string(),
            output_path: "./output".to_string(),
            runway_length: 3102.0,
            altitude: 73.0,
            temperature: 30.0,
            slope: 0.65,
            formats: vec!["csv".to_string()],
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_inputs_rejected() {
        let mut c = config();
        c.altitude = 5001.0;
        assert!(c.validate().is_err());

        let mut c = config();
        c.slope = -10.5;
        assert!(c.validate().is_err());

        let mut c = config();
        c.temperature = 61.0;
        assert!(c.validate().is_err());

        let mut c = config();
        c.runway_length = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut c = config();
        c.formats = vec!["xml".to_string()];
        assert!(c.validate().is_err());
    }
}
