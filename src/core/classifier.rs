use crate::domain::model::{AircraftRequirement, ClassifiedAircraft, Feasibility};

/// Classify every aircraft in the fleet against the corrected runway length.
///
/// Departure requires strictly more corrected runway than the aircraft's
/// minimum: `lcr_m == required_length_m` classifies as `CannotDepart`.
/// Unknown requirements classify as `Undetermined` regardless of `lcr_m`;
/// they are never folded into `CannotDepart`.
pub fn classify_fleet(lcr_m: f64, fleet: &[AircraftRequirement]) -> Vec<ClassifiedAircraft> {
    fleet
        .iter()
        .map(|aircraft| {
            let feasibility = match aircraft.required_length_m {
                Some(required) if lcr_m > required => Feasibility::CanDepart,
                Some(_) => Feasibility::CannotDepart,
                None => Feasibility::Undetermined,
            };

            ClassifiedAircraft {
                identifier: aircraft.identifier.clone(),
                required_length_m: aircraft.required_length_m,
                feasibility,
            }
        })
        .collect()
}
