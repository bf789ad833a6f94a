//! Monthly payment for a fully amortizing fixed-rate loan.
//!
//! ```text
//! r       = annual_rate_percent / 100 / 12
//! n       = term_years * 12
//! growth  = (1 + r)^n
//! payment = principal * r * growth / (growth - 1)
//! ```
//!
//! Degenerate inputs are not special-cased. A zero rate evaluates to `0 / 0`
//! and a zero term to `x / 0`; both fail the finiteness check and produce
//! [`PaymentResult::Empty`], the same as a blank field.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::{LoanInput, PaymentResult};

/// Converts an annual percentage rate into the periodic monthly rate.
///
/// ```
/// use mortgage_core::calculations::monthly_rate;
///
/// assert_eq!(monthly_rate(6.0), 0.005);
/// ```
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

pub fn number_of_payments(term_years: u32) -> f64 {
    f64::from(term_years) * 12.0
}

/// Evaluates the amortization formula without any guarding.
///
/// The result may be `NaN` or infinite.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    let growth = (1.0 + rate).powf(number_of_payments(term_years));

    principal * rate * growth / (growth - 1.0)
}

/// Computes the monthly payment for `input`.
///
/// Missing fields are evaluated as `NaN`. Any payment that is not finite
/// yields [`PaymentResult::Empty`]. Finite payments too large to hold as a
/// [`Decimal`] are kept as [`PaymentResult::Oversized`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::{LoanInput, PaymentResult, compute};
///
/// let result = compute(&LoanInput::new(100000.0, 5.0, 15));
/// assert_eq!(result, PaymentResult::Payment(dec!(790.79)));
/// ```
pub fn compute(input: &LoanInput) -> PaymentResult {
    let principal = input.principal.unwrap_or(f64::NAN);
    let annual_rate_percent = input.annual_rate_percent.unwrap_or(f64::NAN);

    let payment = monthly_payment(principal, annual_rate_percent, input.term_years);
    if !payment.is_finite() {
        return PaymentResult::Empty;
    }

    match Decimal::from_f64_retain(payment) {
        Some(amount) => {
            let mut cents = round_half_up(amount);
            // Sign follows the unrounded payment; -0.0 prints unsigned.
            cents.set_sign_negative(payment < 0.0);
            PaymentResult::Payment(cents)
        }
        None => PaymentResult::Oversized(payment),
    }
}

/// Computes the payment and renders the output text.
///
/// Returns an empty string when there is no valid result.
///
/// ```
/// use mortgage_core::compute_payment;
///
/// assert_eq!(compute_payment(200000.0, 4.0, 30), "$954.83 is your payment");
/// assert_eq!(compute_payment(f64::NAN, 5.0, 15), "");
/// ```
pub fn compute_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> String {
    compute(&LoanInput::new(principal, annual_rate_percent, term_years)).to_string()
}
