//! Line-oriented front end for [`MortgageForm`].
//!
//! Each round prompts for the balance, rate and term, submits the form and
//! prints the output region. A blank term answer keeps the current selection.

use std::io::{self, BufRead, Write};

use mortgage_core::LoanTerm;
use tracing::{info, warn};

use crate::form::MortgageForm;

/// Writes `prompt` and reads one line. Returns `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Runs prompt rounds until input is exhausted.
///
/// Returns the number of completed submissions.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut MortgageForm,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut submissions = 0;

    loop {
        let Some(balance) = prompt_line(&mut input, &mut output, "balance: ")? else {
            break;
        };
        form.set_balance(balance);

        let Some(rate) = prompt_line(&mut input, &mut output, "rate: ")? else {
            break;
        };
        form.set_rate(rate);

        let term_prompt = format!("term [15|30] ({}): ", form.term().as_str());
        let Some(term) = prompt_line(&mut input, &mut output, &term_prompt)? else {
            break;
        };
        if !term.trim().is_empty() {
            match term.parse::<LoanTerm>() {
                Ok(term) => form.set_term(term),
                Err(e) => warn!(selected = %form.term(), "{e}; keeping current term"),
            }
        }

        writeln!(output, "{}", form.submit())?;
        submissions += 1;
    }

    info!(submissions, "session finished");
    Ok(submissions)
}
