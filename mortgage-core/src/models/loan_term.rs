use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MortgageError;

/// Loan terms offered by the term selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanTerm {
    #[default]
    FifteenYears,
    ThirtyYears,
}

impl LoanTerm {
    pub fn years(&self) -> u32 {
        match self {
            Self::FifteenYears => 15,
            Self::ThirtyYears => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FifteenYears => "15",
            Self::ThirtyYears => "30",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "15" => Some(Self::FifteenYears),
            "30" => Some(Self::ThirtyYears),
            _ => None,
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.years()
    }
}

impl FromStr for LoanTerm {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MortgageError::UnsupportedTerm(s.trim().to_string()))
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} Years", self.years())
    }
}
