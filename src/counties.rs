//! Postcode area → county table.
//!
//! One representative county per area. Areas that straddle a boundary map to
//! whichever county holds most of the area.

use crate::postcode::postcode_area;

/// Sorted by area code; `county_for_area` relies on this for binary search.
pub const AREA_COUNTIES: &[(&str, &str)] = &[
    ("AB", "Aberdeenshire"),
    ("AL", "Hertfordshire"),
    ("B", "West Midlands"),
    ("BA", "Somerset"),
    ("BB", "Lancashire"),
    ("BD", "West Yorkshire"),
    ("BH", "Dorset"),
    ("BL", "Greater Manchester"),
    ("BN", "East Sussex"),
    ("BR", "Greater London"),
    ("BS", "Bristol"),
    ("BT", "Northern Ireland"),
    ("CA", "Cumbria"),
    ("CB", "Cambridgeshire"),
    ("CF", "South Glamorgan"),
    ("CH", "Cheshire"),
    ("CM", "Essex"),
    ("CO", "Essex"),
    ("CR", "Greater London"),
    ("CT", "Kent"),
    ("CV", "Warwickshire"),
    ("CW", "Cheshire"),
    ("DA", "Kent"),
    ("DD", "Angus"),
    ("DE", "Derbyshire"),
    ("DG", "Dumfries and Galloway"),
    ("DH", "Durham"),
    ("DL", "North Yorkshire"),
    ("DN", "South Yorkshire"),
    ("DT", "Dorset"),
    ("DY", "Worcestershire"),
    ("E", "Greater London"),
    ("EC", "Greater London"),
    ("EH", "Edinburgh"),
    ("EN", "Hertfordshire"),
    ("EX", "Devon"),
    ("FK", "Stirlingshire"),
    ("FY", "Lancashire"),
    ("G", "Glasgow"),
    ("GL", "Gloucestershire"),
    ("GU", "Surrey"),
    ("HA", "Greater London"),
    ("HD", "West Yorkshire"),
    ("HG", "North Yorkshire"),
    ("HP", "Buckinghamshire"),
    ("HR", "Herefordshire"),
    ("HS", "Outer Hebrides"),
    ("HU", "East Riding of Yorkshire"),
    ("HX", "West Yorkshire"),
    ("IG", "Essex"),
    ("IP", "Suffolk"),
    ("IV", "Inverness-shire"),
    ("KA", "Ayrshire"),
    ("KT", "Surrey"),
    ("KW", "Caithness"),
    ("KY", "Fife"),
    ("L", "Merseyside"),
    ("LA", "Cumbria"),
    ("LD", "Powys"),
    ("LE", "Leicestershire"),
    ("LL", "Clwyd"),
    ("LN", "Lincolnshire"),
    ("LS", "West Yorkshire"),
    ("LU", "Bedfordshire"),
    ("M", "Greater Manchester"),
    ("ME", "Kent"),
    ("MK", "Buckinghamshire"),
    ("ML", "Lanarkshire"),
    ("N", "Greater London"),
    ("NE", "Tyne and Wear"),
    ("NG", "Nottinghamshire"),
    ("NN", "Northamptonshire"),
    ("NP", "Gwent"),
    ("NR", "Norfolk"),
    ("NW", "Greater London"),
    ("OL", "Lancashire"),
    ("OX", "Oxfordshire"),
    ("PA", "Renfrewshire"),
    ("PE", "Lincolnshire"),
    ("PH", "Perthshire"),
    ("PL", "Cornwall"),
    ("PO", "Hampshire"),
    ("PR", "Lancashire"),
    ("RG", "Berkshire"),
    ("RH", "West Sussex"),
    ("RM", "Essex"),
    ("S", "South Yorkshire"),
    ("SA", "West Glamorgan"),
    ("SE", "Greater London"),
    ("SG", "Hertfordshire"),
    ("SK", "Derbyshire"),
    ("SL", "Berkshire"),
    ("SM", "Surrey"),
    ("SN", "Wiltshire"),
    ("SO", "Hampshire"),
    ("SP", "Wiltshire"),
    ("SR", "Tyne and Wear"),
    ("SS", "Essex"),
    ("ST", "Staffordshire"),
    ("SW", "Greater London"),
    ("SY", "Shropshire"),
    ("TA", "Somerset"),
    ("TD", "Roxburghshire"),
    ("TF", "Shropshire"),
    ("TN", "Kent"),
    ("TQ", "Devon"),
    ("TR", "Cornwall"),
    ("TS", "Cleveland"),
    ("TW", "Greater London"),
    ("UB", "Greater London"),
    ("W", "Greater London"),
    ("WA", "Cheshire"),
    ("WC", "Greater London"),
    ("WD", "Hertfordshire"),
    ("WF", "West Yorkshire"),
    ("WN", "Greater Manchester"),
    ("WR", "Worcestershire"),
    ("WS", "Staffordshire"),
    ("WV", "West Midlands"),
    ("YO", "North Yorkshire"),
    ("ZE", "Shetland"),
];

pub fn county_for_area(area: &str) -> Option<&'static str> {
    AREA_COUNTIES
        .binary_search_by(|(code, _)| (*code).cmp(area))
        .ok()
        .map(|i| AREA_COUNTIES[i].1)
}

/// Resolve a postcode-shaped string straight to its county.
pub fn county_for_postcode(postcode: &str) -> Option<&'static str> {
    let area = postcode_area(postcode)?;
    county_for_area(&area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sorted_and_unique() {
        assert!(AREA_COUNTIES.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(AREA_COUNTIES.len(), 121);
    }

    #[test]
    fn area_codes_are_one_or_two_uppercase_letters() {
        for (code, county) in AREA_COUNTIES {
            assert!(
                (1..=2).contains(&code.len()) && code.chars().all(|c| c.is_ascii_uppercase()),
                "bad area code {:?}",
                code
            );
            assert!(!county.trim().is_empty());
        }
    }

    #[test]
    fn known_areas() {
        assert_eq!(county_for_area("CV"), Some("Warwickshire"));
        assert_eq!(county_for_area("B"), Some("West Midlands"));
        assert_eq!(county_for_area("ZE"), Some("Shetland"));
        assert_eq!(county_for_area("AB"), Some("Aberdeenshire"));
    }

    #[test]
    fn unknown_areas() {
        assert_eq!(county_for_area("ZZ"), None);
        assert_eq!(county_for_area(""), None);
        assert_eq!(county_for_area("cv"), None);
    }

    #[test]
    fn ambiguous_areas_keep_single_choice() {
        assert_eq!(county_for_area("CM"), Some("Essex"));
        assert_eq!(county_for_area("CO"), Some("Essex"));
        assert_eq!(county_for_area("PE"), Some("Lincolnshire"));
    }

    #[test]
    fn from_postcode() {
        assert_eq!(county_for_postcode("CV31 1XX"), Some("Warwickshire"));
        assert_eq!(county_for_postcode(" tn27 0aa "), Some("Kent"));
        assert_eq!(county_for_postcode("QQ1 1AA"), None);
        assert_eq!(county_for_postcode(""), None);
    }
}
