// IDS Monitor - Input Validation
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Client-side correction of user input before it reaches the service.

use tracing::debug;

use super::ValidationError;

/// Parse a flow index typed by the user.
pub fn parse_index(raw: &str) -> Result<u64, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;

    u64::try_from(value).map_err(|_| ValidationError::NegativeIndex(value))
}

/// Parse a flow index, falling back to row 0 on bad input.
pub fn coerce_index(raw: &str) -> u64 {
    parse_index(raw).unwrap_or_else(|e| {
        debug!("Corrected flow index to 0: {}", e);
        0
    })
}

/// Clamp a requested simulation size to at least one flow.
pub fn coerce_flow_count(requested: i64) -> u32 {
    if requested < 1 {
        debug!("Corrected flow count to 1: {}", ValidationError::FlowCountTooSmall(requested));
        return 1;
    }
    u32::try_from(requested).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("540822"), Ok(540822));
        assert_eq!(parse_index(" 12 "), Ok(12));
        assert_eq!(parse_index("-3"), Err(ValidationError::NegativeIndex(-3)));
        assert!(matches!(parse_index("abc"), Err(ValidationError::NotANumber(_))));
    }

    #[test]
    fn test_coerce_index_falls_back_to_zero() {
        assert_eq!(coerce_index("-42"), 0);
        assert_eq!(coerce_index(""), 0);
        assert_eq!(coerce_index("7e3"), 0);
        assert_eq!(coerce_index("999999"), 999999);
    }

    #[test]
    fn test_coerce_flow_count() {
        assert_eq!(coerce_flow_count(50), 50);
        assert_eq!(coerce_flow_count(0), 1);
        assert_eq!(coerce_flow_count(-5), 1);
        assert_eq!(coerce_flow_count(i64::MAX), u32::MAX);
    }
}
