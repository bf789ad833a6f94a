mod error;
mod loan_input;
mod loan_term;
mod payment_result;

pub use error::MortgageError;
pub use loan_input::LoanInput;
pub use loan_term::LoanTerm;
pub use payment_result::PaymentResult;
