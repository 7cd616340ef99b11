use serde_json::Value;
use tracing::{debug, warn};

use crate::counties::county_for_postcode;
use crate::dataset::FarmRecord;
use crate::postcode::extract_postcode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AlreadyHadCounty,
    Updated {
        postcode: String,
        county: &'static str,
    },
    /// Postcode found but its area is not in the table.
    Unmapped { postcode: String },
    NoPostcode { city: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub already_had: usize,
    pub updated: usize,
    pub no_postcode: usize,
    pub unmapped: usize,
}

impl Tally {
    fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::AlreadyHadCounty => self.already_had += 1,
            Outcome::Updated { .. } => self.updated += 1,
            Outcome::Unmapped { .. } => self.unmapped += 1,
            Outcome::NoPostcode { .. } => self.no_postcode += 1,
        }
    }

    pub fn remaining_without_county(&self) -> usize {
        self.total - self.already_had - self.updated
    }

    /// Share of farms that end the run with a county, as a percentage.
    pub fn success_rate(&self) -> f64 {
        percent(self.already_had + self.updated, self.total)
    }
}

/// Decide what should happen to one farm without touching it.
pub fn classify(record: &FarmRecord<'_>) -> Outcome {
    if !record.county().is_blank() {
        return Outcome::AlreadyHadCounty;
    }
    let city = record.city();
    let Some(postcode) = extract_postcode(city) else {
        return Outcome::NoPostcode {
            city: city.to_string(),
        };
    };
    match county_for_postcode(&postcode) {
        Some(county) => Outcome::Updated { postcode, county },
        None => Outcome::Unmapped { postcode },
    }
}

/// Fill empty counties in place, in file order. `observe` sees every farm's
/// name and outcome so the caller can print progress.
pub fn populate<F>(farms: &mut [Value], mut observe: F) -> Tally
where
    F: FnMut(&str, &Outcome),
{
    let mut tally = Tally::default();
    for farm in farms.iter_mut() {
        let mut record = FarmRecord::new(farm);
        let outcome = classify(&record);
        match &outcome {
            Outcome::Updated { postcode, county } => {
                let written = record.set_county(county);
                debug_assert!(written, "Updated outcome without a location object");
                debug!(name = record.name(), %postcode, county, "county filled");
            }
            Outcome::Unmapped { postcode } => {
                warn!(name = record.name(), %postcode, "postcode area has no county");
            }
            Outcome::NoPostcode { .. } => {
                debug!(name = record.name(), "no postcode in city field");
            }
            Outcome::AlreadyHadCounty => {}
        }
        tally.record(&outcome);
        observe(record.name(), &outcome);
    }
    tally
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
