use crate::core::table::{self, FleetCache, FleetTable};
use crate::core::{classifier, corrections};
use crate::domain::model::{
    AircraftRequirement, AnalysisOutcome, AnalysisReport, ClassifiedAircraft, Feasibility,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct AnalysisPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    table_cache: FleetCache,
}

impl<S: Storage, C: ConfigProvider> AnalysisPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            table_cache: FleetCache::new(),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for AnalysisPipeline<S, C> {
    fn extract(&self) -> Result<Vec<AircraftRequirement>> {
        let path = self.config.table_path();

        let fleet = self.table_cache.get_or_load(|| {
            tracing::debug!("Loading fleet table from: {}", path);
            let bytes = std::fs::read(path)
                .map_err(|e| table::read_error(path, e.into()))?;
            FleetTable::from_bytes(&bytes)
        })?;

        tracing::debug!("Fleet table has {} aircraft", fleet.aircraft.len());
        Ok(fleet.aircraft.clone())
    }

    fn transform(&self, fleet: Vec<AircraftRequirement>) -> Result<AnalysisOutcome> {
        let input = self.config.runway_input();

        let corrections = corrections::correct_runway_length(&input)?;
        if corrections.advisory {
            tracing::warn!(
                "Combined factor FC = {:.2} exceeds the {} advisory threshold",
                corrections.fc,
                corrections::COMBINED_FACTOR_ADVISORY
            );
        }

        let aircraft = classifier::classify_fleet(corrections.lcr_m, &fleet);

        let report = AnalysisReport {
            airport: self.config.airport().to_string(),
            input,
            corrections,
            aircraft,
            generated_at: chrono::Local::now().format("%d/%m/%Y %H:%M").to_string(),
        };

        Ok(AnalysisOutcome {
            text_output: render_text(&report),
            csv_output: render_csv(&report.aircraft),
            report,
        })
    }

    fn load(&self, outcome: &AnalysisOutcome) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.report_formats() {
            match format.as_str() {
                "csv" => {
                    self.storage
                        .write_file("report.csv", outcome.csv_output.as_bytes())?;
                    written.push("report.csv");
                }
                "json" => {
                    let json = serde_json::to_string_pretty(&outcome.report)?;
                    self.storage.write_file("report.json", json.as_bytes())?;
                    written.push("report.json");
                }
                other => {
                    // Formats are validated at intake; anything else is a bug
                    // worth hearing about but not worth aborting the report.
                    tracing::warn!("Skipping unsupported report format: {}", other);
                }
            }
        }

        tracing::debug!("Wrote {} report file(s)", written.len());
        Ok(format!(
            "{}/{{{}}}",
            self.config.output_path(),
            written.join(",")
        ))
    }
}

fn render_text(report: &AnalysisReport) -> String {
    let c = &report.corrections;
    let mut lines = Vec::new();

    lines.push(format!("Runway analysis: {}", report.airport));
    lines.push(format!(
        "Runway {:.1} m | altitude {:.1} m | temperature {:.1} °C | slope {:.2} %",
        report.input.runway_length_m,
        report.input.altitude_m,
        report.input.temperature_c,
        report.input.slope_percent
    ));
    lines.push(String::new());

    // FC drops to 2 decimals when in advisory, mirroring the original
    // highlighted display.
    let fc = if c.advisory {
        format!("{:.2}", c.fc)
    } else {
        format!("{:.3}", c.fc)
    };
    lines.push(format!("FH: {:.3}   FT: {:.3}", c.fh, c.ft));
    lines.push(format!("FC: {}   FP: {:.3}", fc, c.fp));
    lines.push(format!("LCR(m) = {:.2}", c.lcr_m));
    lines.push(String::new());

    lines.push(format!(
        "{:<28} {:>10}   {}",
        "Aircraft", "LCRi (m)", "Can depart"
    ));
    for aircraft in &report.aircraft {
        let required = match aircraft.required_length_m {
            Some(v) => format!("{:.0}", v),
            None => "-".to_string(),
        };
        let verdict = match aircraft.feasibility {
            Feasibility::CanDepart => "yes",
            Feasibility::CannotDepart => "no",
            Feasibility::Undetermined => "unknown",
        };
        lines.push(format!(
            "{:<28} {:>10}   {}",
            aircraft.identifier, required, verdict
        ));
    }

    if c.advisory {
        lines.push(String::new());
        lines.push(format!(
            "WARNING: combined altitude+temperature factor exceeds {}. \
             Review conditions or consider alternative procedures.",
            corrections::COMBINED_FACTOR_ADVISORY
        ));
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", report.generated_at));

    lines.join("\n")
}

fn render_csv(aircraft: &[ClassifiedAircraft]) -> String {
    let mut lines = vec!["identifier,required_length_m,feasibility".to_string()];

    for a in aircraft {
        let required = a
            .required_length_m
            .map(|v| format!("{}", v))
            .unwrap_or_default();
        lines.push(format!(
            "{},{},{}",
            escape_csv_field(&a.identifier),
            required,
            a.feasibility.as_str()
        ));
    }

    lines.join("\n")
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
