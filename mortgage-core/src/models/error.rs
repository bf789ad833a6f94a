use thiserror::Error;

/// Errors raised while translating collaborator input into model values.
///
/// The payment calculation itself never fails; see [`crate::PaymentResult::Empty`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MortgageError {
    /// The term selector only offers 15 and 30 years.
    #[error("unsupported loan term '{0}', expected 15 or 30")]
    UnsupportedTerm(String),
}
