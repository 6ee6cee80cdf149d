use crate::error::CrawlError;

/// Parses a `"start-end"` range and checks it against the chain head.
/// Bounds are inclusive; the check runs once, before any fetch.
pub fn validate_range(spec: &str, head: u64) -> Result<(u64, u64), CrawlError> {
    let invalid = || CrawlError::InvalidRange(spec.to_string());

    let (start, end) = spec.split_once('-').ok_or_else(invalid)?;
    let start: u64 = start.trim().parse().map_err(|_| invalid())?;
    let end: u64 = end.trim().parse().map_err(|_| invalid())?;

    if start > end || end > head {
        return Err(invalid());
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_range_parses() {
        assert_eq!(validate_range("10-20", 100).unwrap(), (10, 20));
        assert_eq!(validate_range("0-0", 100).unwrap(), (0, 0));
        assert_eq!(validate_range("100-100", 100).unwrap(), (100, 100));
    }

    #[test]
    fn decreasing_range_is_rejected() {
        assert!(matches!(validate_range("50-10", 100), Err(CrawlError::InvalidRange(_))));
    }

    #[test]
    fn range_beyond_head_is_rejected() {
        assert!(matches!(validate_range("10-200", 100), Err(CrawlError::InvalidRange(_))));
    }

    #[test]
    fn non_numeric_or_malformed_specs_are_rejected() {
        for spec in ["abc-20", "10-xyz", "10", "", "-", "1-2-3", "-5-10"] {
            assert!(
                matches!(validate_range(spec, 100), Err(CrawlError::InvalidRange(_))),
                "expected {spec:?} to be rejected"
            );
        }
    }
}
