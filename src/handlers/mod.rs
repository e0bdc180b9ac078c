pub mod activity;
pub mod todo;

/// Lenient path-id parsing: non-numeric input coerces to 0, which matches
/// no row and surfaces as not-found rather than a parse error.
pub(crate) fn parse_id(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("7"), 7);
        assert_eq!(parse_id("0"), 0);
    }

    #[test]
    fn non_numeric_ids_coerce_to_zero() {
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("7x"), 0);
    }
}
