//! Fixed-rate mortgage payment calculations.
//!
//! The payment is the standard amortization formula evaluated in `f64`, gated
//! on finiteness, and rounded to cents as a [`rust_decimal::Decimal`].

pub mod common;
pub mod payment;

pub use payment::{compute, compute_payment, monthly_payment, monthly_rate, number_of_payments};
