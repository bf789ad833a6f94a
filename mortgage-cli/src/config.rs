use clap::Parser;
use mortgage_core::LoanTerm;

/// Monthly payment calculator for fixed-rate mortgages.
///
/// With both `--balance` and `--rate` the payment is calculated once and
/// printed. Otherwise the fields are prompted for on stdin until end of input.
#[derive(Debug, Parser)]
#[command(name = "mortgage-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Loan balance (principal), e.g. `250,000`
    #[arg(short, long)]
    pub balance: Option<String>,

    /// Annual interest rate in percent, e.g. `6.25`
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Loan term in years (15 or 30)
    #[arg(short, long, default_value = "15")]
    pub term: LoanTerm,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub balance: Option<String>,
    pub rate: Option<String>,
    pub term: LoanTerm,
    pub log_level: String,
}

impl CalculatorConfig {
    /// True when every field needed for a single calculation was supplied.
    pub fn is_one_shot(&self) -> bool {
        self.balance.is_some() && self.rate.is_some()
    }
}

impl From<Cli> for CalculatorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            balance: cli.balance,
            rate: cli.rate,
            term: cli.term,
            log_level: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> CalculatorConfig {
        let argv = std::iter::once("mortgage-calc").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn defaults_to_interactive_fifteen_year_term() {
        let config = parse(&[]);

        assert_eq!(config.term, LoanTerm::FifteenYears);
        assert_eq!(config.log_level, "warn");
        assert!(!config.is_one_shot());
    }

    #[test]
    fn balance_and_rate_select_one_shot_mode() {
        let config = parse(&["--balance", "200000", "--rate", "4", "--term", "30"]);

        assert_eq!(config.balance.as_deref(), Some("200000"));
        assert_eq!(config.rate.as_deref(), Some("4"));
        assert_eq!(config.term, LoanTerm::ThirtyYears);
        assert!(config.is_one_shot());
    }

    #[test]
    fn balance_alone_stays_interactive() {
        let config = parse(&["-b", "200000"]);

        assert!(!config.is_one_shot());
    }

    #[test]
    fn rejects_terms_outside_selector() {
        let result = Cli::try_parse_from(["mortgage-calc", "--term", "20"]);

        assert!(result.is_err());
    }
}
