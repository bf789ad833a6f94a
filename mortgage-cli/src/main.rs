use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use mortgage_cli::config::{CalculatorConfig, Cli};
use mortgage_cli::form::MortgageForm;
use mortgage_cli::logging::init_logging;
use mortgage_cli::session::run_session;

fn main() -> Result<()> {
    let config = CalculatorConfig::from(Cli::parse());
    init_logging(&config.log_level)?;
    debug!(one_shot = config.is_one_shot(), "starting calculator");

    let mut form = MortgageForm::new();
    form.set_term(config.term);

    if let (Some(balance), Some(rate)) = (&config.balance, &config.rate) {
        debug!(%balance, %rate, term = %config.term, "calculating single payment");
        form.set_balance(balance.as_str());
        form.set_rate(rate.as_str());
        println!("{}", form.submit());
    } else {
        if let Some(balance) = &config.balance {
            warn!(%balance, "--balance ignored without --rate; prompting for all fields");
        }
        if let Some(rate) = &config.rate {
            warn!(%rate, "--rate ignored without --balance; prompting for all fields");
        }
        run_session(&mut form, io::stdin().lock(), io::stdout().lock())
            .context("Failed to run interactive session")?;
    }

    Ok(())
}
