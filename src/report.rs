use crate::updater::{Outcome, Tally};

/// Progress line for one farm; `None` for farms that already had a county.
pub fn outcome_line(name: &str, outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::AlreadyHadCounty => None,
        Outcome::Updated { postcode, county } => {
            Some(format!("Updated {}: {} → {}", name, postcode, county))
        }
        Outcome::Unmapped { postcode } => {
            Some(format!("No county found for {}: {}", name, postcode))
        }
        Outcome::NoPostcode { city } => Some(format!("No postcode found for {}: {}", name, city)),
    }
}

pub fn render_summary(tally: &Tally) -> String {
    let mut out = String::new();
    out.push_str("=== COUNTY POPULATION STATISTICS ===\n");
    out.push_str(&format!("Total farms: {}\n", tally.total));
    out.push_str(&format!("Already had county: {}\n", tally.already_had));
    out.push_str(&format!("Updated with county: {}\n", tally.updated));
    out.push_str(&format!("No postcode available: {}\n", tally.no_postcode));
    out.push_str(&format!("No county for postcode area: {}\n", tally.unmapped));
    out.push_str(&format!(
        "Remaining without county: {}\n",
        tally.remaining_without_county()
    ));
    out.push_str(&format!("Success rate: {:.1}%", tally.success_rate()));
    out
}
