//! Behavioural checks of the public calculation API across a spread of
//! realistic loans, plus the reference scenarios the output text must match.

use mortgage_core::{LoanInput, LoanTerm, PaymentResult, compute, compute_payment};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SUFFIX: &str = " is your payment";

/// Returns true when `text` reads `$<digits>.<two digits> is your payment`.
fn is_payment_text(text: &str) -> bool {
    let Some(amount) = text
        .strip_prefix('$')
        .and_then(|rest| rest.strip_suffix(SUFFIX))
    else {
        return false;
    };
    let Some((whole, cents)) = amount.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && cents.len() == 2
        && cents.chars().all(|c| c.is_ascii_digit())
}

#[test]
fn positive_inputs_always_produce_payment_text() {
    let principals = [1.0, 999.99, 85000.0, 200000.0, 1250000.0];
    let rates = [0.01, 2.5, 4.0, 7.125, 18.0];

    for term in [LoanTerm::FifteenYears, LoanTerm::ThirtyYears] {
        for principal in principals {
            for rate in rates {
                let text = compute_payment(principal, rate, term.years());
                assert!(
                    is_payment_text(&text),
                    "unexpected output {text:?} for {principal} at {rate}% over {term}"
                );
            }
        }
    }
}

#[test]
fn reference_scenarios() {
    assert_eq!(compute_payment(200000.0, 4.0, 30), "$954.83 is your payment");
    assert_eq!(compute_payment(100000.0, 5.0, 15), "$790.79 is your payment");
    assert_eq!(compute_payment(f64::NAN, 5.0, 15), "");
    assert_eq!(compute_payment(100000.0, 0.0, 15), "");
}

#[test]
fn blank_fields_produce_empty_result() {
    let no_balance = LoanInput::from_fields("", "5", 15);
    let no_rate = LoanInput::from_fields("100000", "", 15);

    assert_eq!(compute(&no_balance), PaymentResult::Empty);
    assert_eq!(compute(&no_rate), PaymentResult::Empty);
}

#[test]
fn formatted_fields_match_numeric_input() {
    let from_text = compute(&LoanInput::from_fields(" 100,000 ", "5.00", 15));

    assert_eq!(from_text, PaymentResult::Payment(dec!(790.79)));
}

#[test]
fn longer_term_lowers_payment_for_same_loan() {
    let short = compute(&LoanInput::new(300000.0, 6.5, 15)).amount().unwrap();
    let long = compute(&LoanInput::new(300000.0, 6.5, 30)).amount().unwrap();

    assert!(long < short);
}

#[test]
fn total_paid_exceeds_principal() {
    let payment = compute(&LoanInput::new(100000.0, 5.0, 15)).amount().unwrap();

    assert!(payment * dec!(180) > dec!(100000));
}

#[test]
fn repeated_calls_are_identical() {
    let first = compute_payment(425000.0, 6.875, 30);
    let second = compute_payment(425000.0, 6.875, 30);

    assert_eq!(first, second);
}
