use crate::domain::model::{AircraftRequirement, AnalysisOutcome, RunwayInput};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn airport(&self) -> &str;
    fn table_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_formats(&self) -> &[String];
    fn runway_input(&self) -> RunwayInput;
}

/// The three analysis stages: load the fleet table, compute and classify,
/// write the report files.
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<AircraftRequirement>>;
    fn transform(&self, fleet: Vec<AircraftRequirement>) -> Result<AnalysisOutcome>;
    fn load(&self, outcome: &AnalysisOutcome) -> Result<String>;
}
