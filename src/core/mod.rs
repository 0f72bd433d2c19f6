pub mod classifier;
pub mod corrections;
pub mod engine;
pub mod pipeline;
pub mod table;

pub use crate::domain::model::{
    AircraftRequirement, AnalysisOutcome, AnalysisReport, ClassifiedAircraft, CorrectionResult,
    Feasibility, RunwayInput,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
