//! Lenient parsing for numbers typed into free-text form fields. Nothing here fails.

/// Parse a dollar amount, substituting 0 for blank or malformed text.
///
/// Accepts an optional leading `$` and thousands separators (`"$2,500.50"`). The whole string
/// must be a number: trailing text such as `"2500abc"` is malformed. Negative and non-finite
/// values also become 0.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a whole number, keeping `prior` when the text is not a valid value.
pub fn parse_whole_or<T>(raw: &str, prior: T) -> T
where
    T: std::str::FromStr,
{
    raw.trim().parse::<T>().unwrap_or(prior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_tolerate_currency_formatting() {
        assert_eq!(parse_amount("2500"), 2500.0);
        assert_eq!(parse_amount(" $2,500.50 "), 2500.5);
        assert_eq!(parse_amount("150"), 150.0);
    }

    #[test]
    fn malformed_amounts_become_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("lots"), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("2500abc"), 0.0);
    }

    #[test]
    fn whole_numbers_fall_back_to_prior_value() {
        assert_eq!(parse_whole_or::<u32>("260", 220), 260);
        assert_eq!(parse_whole_or::<u32>("two hundred", 220), 220);
        assert_eq!(parse_whole_or::<u16>("", 794), 794);
        assert_eq!(parse_whole_or::<u16>("-5", 794), 794);
    }
}
