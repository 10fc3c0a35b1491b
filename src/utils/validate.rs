//! Soft validation of kernel results.
//!
//! A mismatch never aborts a run: it is carried on the report record,
//! printed ahead of the row it belongs to, and the driver moves on.

/// Absolute tolerance applied to every floating-point comparison.
pub const TOLERANCE: f64 = 1e-10;

#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    /// Result matched its expected value.
    Passed,
    /// Result is the reference other variants are checked against.
    Reference,
    /// One message per mismatching value.
    Failed(Vec<String>),
}

impl Validation {
    /// Compare a scalar against its expected value.
    pub fn scalar(result: f64, expected: f64) -> Self {
        if within_tolerance(result, expected) {
            Self::Passed
        } else {
            Self::Failed(vec![format!(
                "Result {:.6} failed to validate with expected value {}",
                result, expected
            )])
        }
    }

    /// Compare an exact integer result.
    pub fn exact(result: u64, expected: u64) -> Self {
        if result == expected {
            Self::Passed
        } else {
            Self::Failed(vec![format!(
                "Result {} failed to validate with expected value {}",
                result, expected
            )])
        }
    }

    pub fn from_mismatches(mismatches: Vec<String>) -> Self {
        if mismatches.is_empty() {
            Self::Passed
        } else {
            Self::Failed(mismatches)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn messages(&self) -> &[String] {
        match self {
            Self::Failed(messages) => messages,
            _ => &[],
        }
    }
}

/// `|result - expected| <= TOLERANCE`; NaN never passes.
#[inline]
pub fn within_tolerance(result: f64, expected: f64) -> bool {
    (result - expected).abs() <= TOLERANCE
}
