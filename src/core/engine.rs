use crate::domain::model::AnalysisOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Result of a full engine run: the analysis outcome plus where the report
/// files were written.
pub struct AnalysisRun {
    pub outcome: AnalysisOutcome,
    pub output_location: String,
}

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<AnalysisRun> {
        tracing::info!("Starting runway analysis");

        let fleet = self.pipeline.extract()?;
        tracing::info!("Loaded {} aircraft requirements", fleet.len());

        let outcome = self.pipeline.transform(fleet)?;
        tracing::info!(
            "Corrected runway length LCR = {:.2} m",
            outcome.report.corrections.lcr_m
        );

        let output_location = self.pipeline.load(&outcome)?;
        tracing::info!("Report saved to: {}", output_location);

        Ok(AnalysisRun {
            outcome,
            output_location,
        })
    }
}
