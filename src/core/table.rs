use crate::domain::model::AircraftRequirement;
use crate::utils::error::{AnalysisError, Result};
use std::sync::OnceLock;

/// Header of the requirement column in the source table.
const REQUIREMENT_COLUMN: &str = "LCRi";

/// The per-aircraft runway-requirement table, loaded once and treated as
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct FleetTable {
    pub aircraft: Vec<AircraftRequirement>,
}

impl FleetTable {
    /// Parse the table from raw file bytes.
    ///
    /// The file is expected to be delimited text with a header row, an
    /// identifier column and a numeric `LCRi` column (matched
    /// case-insensitively, falling back to the second column). Cells that do
    /// not parse as a finite number coerce to "unknown"; the row is kept.
    /// Structural problems (fewer than two columns, ragged rows) are
    /// `MalformedSource` and abort the load.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = decode_latin1_tolerant(data);

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(malformed)?.clone();
        if headers.len() < 2 {
            return Err(AnalysisError::MalformedSource {
                message: format!(
                    "expected an identifier column and a {} column, found {} column(s)",
                    REQUIREMENT_COLUMN,
                    headers.len()
                ),
            });
        }

        let requirement_index = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(REQUIREMENT_COLUMN))
            .unwrap_or(1);
        let identifier_index = if requirement_index == 0 { 1 } else { 0 };

        let mut aircraft = Vec::new();
        for record in reader.records() {
            let record = record.map_err(malformed)?;

            let identifier = record
                .get(identifier_index)
                .unwrap_or_default()
                .to_string();
            if identifier.is_empty() {
                continue;
            }

            let required_length_m = record
                .get(requirement_index)
                .and_then(coerce_numeric);

            aircraft.push(AircraftRequirement {
                identifier,
                required_length_m,
            });
        }

        Ok(Self { aircraft })
    }
}

fn malformed(err: csv::Error) -> AnalysisError {
    AnalysisError::MalformedSource {
        message: err.to_string(),
    }
}

/// Parse a requirement cell, coercing anything that is not a finite number
/// to `None` instead of failing the load.
fn coerce_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode file bytes as UTF-8 when valid, otherwise as Latin-1 (every byte
/// maps to its code point). The source tables come from spreadsheet exports
/// with accented aircraft names in either encoding.
fn decode_latin1_tolerant(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => data.iter().map(|&b| b as char).collect(),
    }
}

/// Write-once table cache. The table is static for the lifetime of the
/// process: the first analysis loads it, every later one reads the same
/// immutable instance. Safe for concurrent readers, no locking after init.
#[derive(Debug, Default)]
pub struct FleetCache {
    table: OnceLock<FleetTable>,
}

impl FleetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<&FleetTable>
    where
        F: FnOnce() -> Result<FleetTable>,
    {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }

        let table = load()?;
        Ok(self.table.get_or_init(|| table))
    }
}

/// Map a file read failure on the table path to the loader's error taxonomy.
pub fn read_error(path: &str, err: AnalysisError) -> AnalysisError {
    match err {
        AnalysisError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            AnalysisError::SourceNotFound {
                path: path.to_string(),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_table() {
        let data = b"Aeronave,LCRi\nB737-800,2300\nA320,2100\n";
        let table = FleetTable::from_bytes(data).unwrap();

        assert_eq!(table.aircraft.len(), 2);
        assert_eq!(table.aircraft[0].identifier, "B737-800");
        assert_eq!(table.aircraft[0].required_length_m, Some(2300.0));
        assert_eq!(table.aircraft[1].required_length_m, Some(2100.0));
    }

    #[test]
    fn test_non_numeric_cell_coerces_to_unknown() {
        let data = b"Aeronave,LCRi\nB737-800,2300\nCaravelle,n/a\nA320,\n";
        let table = FleetTable::from_bytes(data).unwrap();

        assert_eq!(table.aircraft.len(), 3);
        assert_eq!(table.aircraft[1].identifier, "Caravelle");
        assert_eq!(table.aircraft[1].required_length_m, None);
        assert_eq!(table.aircraft[2].required_length_m, None);
    }

    #[test]
    fn test_latin1_identifiers_survive() {
        // "Aeronave,LCRi\nCarabela Ñandú,1800\n" with Ñ/ú as Latin-1 bytes.
        let data = b"Aeronave,LCRi\nCarabela \xd1and\xfa,1800\n";
        let table = FleetTable::from_bytes(data).unwrap();

        assert_eq!(table.aircraft[0].identifier, "Carabela Ñandú");
        assert_eq!(table.aircraft[0].required_length_m, Some(1800.0));
    }

    #[test]
    fn test_utf8_identifiers_survive() {
        let data = "Aeronave,LCRi\nCarabela Ñandú,1800\n".as_bytes();
        let table = FleetTable::from_bytes(data).unwrap();
        assert_eq!(table.aircraft[0].identifier, "Carabela Ñandú");
    }

    #[test]
    fn test_requirement_column_found_case_insensitively() {
        let data = b"lcri,Aeronave\n2300,B737-800\n";
        let table = FleetTable::from_bytes(data).unwrap();

        assert_eq!(table.aircraft[0].identifier, "B737-800");
        assert_eq!(table.aircraft[0].required_length_m, Some(2300.0));
    }

    #[test]
    fn test_non_finite_values_coerce_to_unknown() {
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
        assert_eq!(coerce_numeric("2300"), Some(2300.0));
        assert_eq!(coerce_numeric(" 2300.5 "), Some(2300.5));
    }

    #[test]
    fn test_cache_loads_exactly_once() {
        let cache = FleetCache::new();
        let mut loads = 0;

        for _ in 0..3 {
            let table = cache
                .get_or_load(|| {
                    loads += 1;
                    FleetTable::from_bytes(b"Aeronave,LCRi\nA320,2100\n")
                })
                .unwrap();
            assert_eq!(table.aircraft.len(), 1);
        }

        assert_eq!(loads, 1);
    }

    #[test]
    fn test_cache_retries_after_failed_load() {
        let cache = FleetCache::new();

        let missing = cache.get_or_load(|| {
            Err(AnalysisError::SourceNotFound {
                path: "aeronaves.csv".to_string(),
            })
        });
        assert!(matches!(
            missing,
            Err(AnalysisError::SourceNotFound { .. })
        ));

        let table = cache
            .get_or_load(|| FleetTable::from_bytes(b"Aeronave,LCRi\nA320,2100\n"))
            .unwrap();
        assert_eq!(table.aircraft.len(), 1);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let short = FleetTable::from_bytes(b"Aeronave,LCRi\nB737-800,2316\nB737-800\n");
        assert!(matches!(
            short,
            Err(AnalysisError::MalformedSource { .. })
        ));

        let long = FleetTable::from_bytes(b"Aeronave,LCRi\nB737-800,2316,extra\n");
        assert!(matches!(
            long,
            Err(AnalysisError::MalformedSource { .. })
        ));
    }

    #[test]
    fn test_single_column_header_is_malformed() {
        let result = FleetTable::from_bytes(b"Aeronave\nB737-800\n");
        assert!(matches!(
            result,
            Err(AnalysisError::MalformedSource { .. })
        ));
    }
}
