use std::sync::LazyLock;

use regex::Regex;

// A9 9AA, A99 9AA, A9A 9AA, AA9 9AA, AA99 9AA, AA9A 9AA; space optional.
static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{1,2}[0-9][A-Z0-9]?\s*[0-9][A-Z]{2}\b").unwrap()
});
static AREA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z]{1,2})").unwrap());

/// Find the first postcode-shaped run inside free text such as
/// `"Leamington Spa CV31 1XX"`. The match is taken from the upper-cased text.
pub fn extract_postcode(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let upper = text.to_uppercase();
    POSTCODE_RE.find(&upper).map(|m| m.as_str().to_string())
}

/// Leading area letters of a postcode: `"CV31 1XX"` → `"CV"`, `"B1 1AA"` → `"B"`.
pub fn postcode_area(postcode: &str) -> Option<String> {
    let cleaned = postcode.trim().to_uppercase();
    if cleaned.is_empty() {
        return None;
    }
    AREA_RE.captures(&cleaned).map(|c| c[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_embedded_postcode() {
        assert_eq!(
            extract_postcode("Some City CV31 1XX").as_deref(),
            Some("CV31 1XX")
        );
        assert_eq!(extract_postcode("B1 1AA").as_deref(), Some("B1 1AA"));
        assert_eq!(
            extract_postcode("Farm Lane, W1A 0AX, London").as_deref(),
            Some("W1A 0AX")
        );
    }

    #[test]
    fn no_postcode() {
        assert_eq!(extract_postcode("No Postcode Here"), None);
        assert_eq!(extract_postcode(""), None);
        assert_eq!(extract_postcode("Unit 12 Industrial Estate"), None);
    }

    #[test]
    fn case_insensitive_and_upper_cased() {
        assert_eq!(
            extract_postcode("ashford tn27 0aa").as_deref(),
            Some("TN27 0AA")
        );
    }

    #[test]
    fn spacing_kept_as_found() {
        assert_eq!(extract_postcode("Town CV311XX").as_deref(), Some("CV311XX"));
        assert_eq!(
            extract_postcode("Town CV31   1XX").as_deref(),
            Some("CV31   1XX")
        );
    }

    #[test]
    fn leftmost_match_wins() {
        assert_eq!(
            extract_postcode("Moved from LS1 4AP to YO1 7HH").as_deref(),
            Some("LS1 4AP")
        );
    }

    #[test]
    fn needs_word_boundaries() {
        assert_eq!(extract_postcode("XYZ31 1XX"), None);
        assert_eq!(extract_postcode("CV31 1XXY"), None);
        assert_eq!(extract_postcode("Town, CV31 1XX.").as_deref(), Some("CV31 1XX"));
    }

    #[test]
    fn area_prefix() {
        assert_eq!(postcode_area("CV31 1XX").as_deref(), Some("CV"));
        assert_eq!(postcode_area("B1 1AA").as_deref(), Some("B"));
        assert_eq!(postcode_area("  sw1a 1aa ").as_deref(), Some("SW"));
    }

    #[test]
    fn area_prefix_missing() {
        assert_eq!(postcode_area(""), None);
        assert_eq!(postcode_area("   "), None);
        assert_eq!(postcode_area("31 1XX"), None);
    }
}
