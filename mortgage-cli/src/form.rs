//! Form state for the mortgage calculator.
//!
//! Mirrors the fields of the calculator screen: raw text for the balance and
//! rate, the selected term, and the output region. The payment is only
//! recalculated on [`MortgageForm::submit`], never while fields are edited.

use mortgage_core::{LoanInput, LoanTerm, compute};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MortgageForm {
    balance: String,
    rate: String,
    term: LoanTerm,
    output: String,
}

impl MortgageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(
        &mut self,
        balance: impl Into<String>,
    ) {
        self.balance = balance.into();
    }

    pub fn set_rate(
        &mut self,
        rate: impl Into<String>,
    ) {
        self.rate = rate.into();
    }

    pub fn set_term(
        &mut self,
        term: LoanTerm,
    ) {
        self.term = term;
    }

    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn term(&self) -> LoanTerm {
        self.term
    }

    /// Text currently shown in the output region.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Snapshot of the fields as calculation input.
    pub fn loan_input(&self) -> LoanInput {
        LoanInput::from_fields(&self.balance, &self.rate, self.term.years())
    }

    /// Runs the calculation and replaces the output region.
    ///
    /// An empty result clears the region.
    pub fn submit(&mut self) -> &str {
        let input = self.loan_input();
        let result = compute(&input);
        debug!(?input, ?result, "submitted mortgage form");

        self.output = result.to_string();
        &self.output
    }
}
