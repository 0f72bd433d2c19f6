use serde::{Deserialize, Serialize};

/// Runway and atmospheric parameters for a single analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayInput {
    pub runway_length_m: f64,
    pub altitude_m: f64,
    pub temperature_c: f64,
    pub slope_percent: f64,
}

/// Correction factors and the corrected runway length derived from a
/// `RunwayInput`. `advisory` is set when the combined altitude+temperature
/// factor exceeds the safe threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectionResult {
    pub fh: f64,
    pub ft: f64,
    pub fc: f64,
    pub fp: f64,
    pub lcr_m: f64,
    pub advisory: bool,
}

/// One row of the fleet table. `required_length_m` is `None` when the LCRi
/// cell was missing or not a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftRequirement {
    pub identifier: String,
    pub required_length_m: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    CanDepart,
    CannotDepart,
    Undetermined,
}

impl Feasibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feasibility::CanDepart => "can_depart",
            Feasibility::CannotDepart => "cannot_depart",
            Feasibility::Undetermined => "undetermined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedAircraft {
    pub identifier: String,
    pub required_length_m: Option<f64>,
    pub feasibility: Feasibility,
}

/// Full result record of one analysis: inputs, derived scalars and the
/// classified fleet, in table order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub airport: String,
    pub input: RunwayInput,
    pub corrections: CorrectionResult,
    pub aircraft: Vec<ClassifiedAircraft>,
    pub generated_at: String,
}

/// Hand-off between the transform and load stages: the report plus its
/// pre-rendered representations.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub text_output: String,
    pub csv_output: String,
}
