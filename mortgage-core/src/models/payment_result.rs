use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a payment calculation.
///
/// `Empty` covers every input that does not produce a finite payment: blank
/// fields, a zero rate, a zero term, or overflow. Callers clear their display
/// region when they receive it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PaymentResult {
    /// Monthly payment rounded to cents.
    Payment(Decimal),
    /// Finite payment beyond the range of [`Decimal`], rounded when rendered.
    Oversized(f64),
    #[default]
    Empty,
}

impl PaymentResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Payment(amount) => Some(*amount),
            Self::Oversized(_) | Self::Empty => None,
        }
    }
}

impl fmt::Display for PaymentResult {
    /// Renders the text shown in the output region, or nothing for `Empty`.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Payment(amount) => write!(f, "${amount:.2} is your payment"),
            Self::Oversized(payment) => write!(f, "${payment:.2} is your payment"),
            Self::Empty => Ok(()),
        }
    }
}
