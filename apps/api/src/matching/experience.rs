use crate::matching::round_to;

/// Parses a free-text experience requirement into a year estimate.
///
/// "3-5 years" → 4.0, "5+" → 5.0, "2 year" → 2.0. Anything unparseable,
/// negative or non-finite degrades to 0.0; failure to parse is expected for
/// free-form text and never an error.
pub fn parse_years(text: &str) -> f64 {
    let cleaned = text
        .to_lowercase()
        .replace('+', "")
        .replace("years", "")
        .replace("year", "");
    let cleaned = cleaned.trim();

    let years = if cleaned.contains('-') {
        let mut parts = cleaned.split('-');
        match (
            parts.next().and_then(parse_number),
            parts.next().and_then(parse_number),
        ) {
            (Some(low), Some(high)) => (low + high) / 2.0,
            _ => 0.0,
        }
    } else {
        parse_number(cleaned).unwrap_or(0.0)
    };

    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

fn parse_number(part: &str) -> Option<f64> {
    part.trim().parse::<f64>().ok()
}

/// Scores candidate experience against the requirement, 0-100.
///
/// An unstated or unparseable requirement scores 100. Meeting or exceeding
/// the requirement caps at 100; shortfalls score proportionally.
pub fn experience_score(required: &str, candidate: &str) -> f64 {
    let required_years = parse_years(required);
    if required_years == 0.0 {
        return 100.0;
    }
    let ratio = parse_years(candidate) / required_years;
    round_to((ratio * 100.0).min(100.0), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_averages_bounds() {
        assert_eq!(parse_years("3-5 years"), 4.0);
        assert_eq!(parse_years("1 - 2 Years"), 1.5);
    }

    #[test]
    fn test_parse_plus_suffix() {
        assert_eq!(parse_years("5+"), 5.0);
        assert_eq!(parse_years("7+ years"), 7.0);
    }

    #[test]
    fn test_parse_single_year_and_decimal() {
        assert_eq!(parse_years("1 year"), 1.0);
        assert_eq!(parse_years("2.5"), 2.5);
        assert_eq!(parse_years("  4  "), 4.0);
    }

    #[test]
    fn test_parse_unparseable_is_neutral() {
        assert_eq!(parse_years("senior"), 0.0);
        assert_eq!(parse_years(""), 0.0);
        assert_eq!(parse_years("three-five years"), 0.0);
        assert_eq!(parse_years("3-"), 0.0);
    }

    #[test]
    fn test_parse_rejects_non_finite_and_negative() {
        assert_eq!(parse_years("inf"), 0.0);
        assert_eq!(parse_years("NaN"), 0.0);
        assert_eq!(parse_years("-3"), 0.0);
    }

    #[test]
    fn test_score_exact_match_is_full() {
        assert_eq!(experience_score("5 years", "5 years"), 100.0);
    }

    #[test]
    fn test_score_shortfall_is_proportional() {
        assert_eq!(experience_score("5 years", "2 years"), 40.0);
        assert_eq!(experience_score("3", "1"), 33.3);
    }

    #[test]
    fn test_score_caps_excess_at_100() {
        assert_eq!(experience_score("2 years", "15 years"), 100.0);
    }

    #[test]
    fn test_score_missing_requirement_is_full() {
        assert_eq!(experience_score("", "0"), 100.0);
        assert_eq!(experience_score("", "10 years"), 100.0);
        assert_eq!(experience_score("not specified", ""), 100.0);
    }

    #[test]
    fn test_score_unparseable_candidate_is_zero() {
        assert_eq!(experience_score("3-5 years", "lots"), 0.0);
    }

    #[test]
    fn test_score_candidate_on_range_midpoint() {
        assert_eq!(experience_score("3-5 years", "4"), 100.0);
    }
}
