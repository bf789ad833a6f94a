use serde::{Deserialize, Serialize};

use crate::parse::parse_amount;

/// Inputs for a single payment calculation.
///
/// `None` marks a field that was blank or not a number. Such inputs still
/// reach the calculation and collapse to an empty result there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Option<f64>,
    pub annual_rate_percent: Option<f64>,
    pub term_years: u32,
}

impl LoanInput {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Self {
        Self {
            principal: Some(principal),
            annual_rate_percent: Some(annual_rate_percent),
            term_years,
        }
    }

    /// Builds an input from raw form text.
    ///
    /// ```
    /// use mortgage_core::LoanInput;
    ///
    /// let input = LoanInput::from_fields("200,000", "4", 30);
    /// assert_eq!(input.principal, Some(200000.0));
    ///
    /// let blank = LoanInput::from_fields("", "4", 30);
    /// assert_eq!(blank.principal, None);
    /// ```
    pub fn from_fields(
        balance: &str,
        rate: &str,
        term_years: u32,
    ) -> Self {
        Self {
            principal: parse_amount(balance),
            annual_rate_percent: parse_amount(rate),
            term_years,
        }
    }
}
