
use super::grammar::{FACTOR_SEGMENT_RE, FACTOR_RE, LABEL_RE, LABEL_RUN_RE};
use super::source::Span;
use super::tokenizer::TokenizerState;
use crate::errorlist::ErrorList;
use crate::quantity::{LabelCount, Quantity};

use log::trace;
use thiserror::Error;

use std::num::IntErrorKind;

/// A whitespace-delimited run of the label segment that is not a
/// valid label. Such runs are dropped from the parsed quantity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{token}' at {span} is not a valid label")]
pub struct LabelTokenError {
  pub token: String,
  pub span: Span,
}

/// Parses the text of one edit field into a quantity.
///
/// Returns `None` only for the empty string, meaning "no value, leave
/// the previous state alone". Every other input produces a quantity:
/// a missing or malformed factor defaults to `1`, and malformed label
/// runs are dropped.
pub fn parse_input(input: &str) -> Option<Quantity> {
  parse_input_with_errors(input, &mut ErrorList::new())
}

/// As [`parse_input`], but each dropped label run is recorded in
/// `errors`.
pub fn parse_input_with_errors(input: &str, errors: &mut ErrorList<LabelTokenError>) -> Option<Quantity> {
  if input.is_empty() {
    return None;
  }

  let (factor, labels) = separate_factor_labels(input);
  let factor = if factor.is_empty() { 1.0 } else { parse_factor(factor) };
  let labels = parse_labels(labels, input.len() - labels.len(), errors);
  Some(Quantity::new(factor, labels))
}

/// Splits an edit field into its factor text and the label text that
/// follows it. The factor must be followed by a separator or the end
/// of the input; otherwise the factor text is empty and the whole
/// input is label text.
pub fn separate_factor_labels(input: &str) -> (&str, &str) {
  let mut state = TokenizerState::new(input);
  let factor = state.read_regex_with_captures(&FACTOR_SEGMENT_RE)
    .and_then(|captures| captures.get(1))
    .unwrap_or("");
  (factor, state.remaining())
}

/// Parses a factor token. Anything that does not match the factor
/// grammar is `1`. Percentages are divided by 100 and negative zero
/// becomes zero.
pub fn parse_factor(input: &str) -> f64 {
  let Some(captures) = FACTOR_RE.captures(input) else {
    return 1.0;
  };
  let Ok(value) = captures[1].parse::<f64>() else {
    return 1.0;
  };
  let value = if &captures[2] == "%" { value / 100.0 } else { value };
  if value == 0.0 { 0.0 } else { value }
}

/// Scans whitespace-delimited runs, summing the exponents of the
/// valid labels. A run `label^N` contributes `N`; a missing or zero
/// exponent contributes `1`, and one too large for `i64` saturates.
///
/// `offset` is the byte position of `input` within the whole field,
/// so that reported spans point into the field.
fn parse_labels(input: &str, offset: usize, errors: &mut ErrorList<LabelTokenError>) -> LabelCount {
  let mut labels = LabelCount::new();
  let mut state = TokenizerState::new(input);
  let runs = state.read_many(|state| {
    state.consume_spaces();
    state.read_regex(&LABEL_RUN_RE)
  });
  for run in runs {
    match LABEL_RE.captures(run.as_str()) {
      Some(captures) => {
        let exponent = captures.get(2)
          .map(|m| parse_exponent(m.as_str()))
          .filter(|n| *n != 0)
          .unwrap_or(1);
        labels.add(&captures[1], exponent);
      }
      None => {
        let span = run.span().shifted(offset);
        trace!("Dropping invalid label '{}' at {}", run.as_str(), span);
        errors.push(LabelTokenError { token: run.as_str().to_owned(), span });
      }
    }
  }
  labels
}

/// Digits of an exponent. Values past the range of `i64` saturate,
/// and anything that is not a number at all is `0`.
fn parse_exponent(digits: &str) -> i64 {
  match digits.parse::<i64>() {
    Ok(n) => n,
    Err(err) => match err.kind() {
      IntErrorKind::PosOverflow => i64::MAX,
      IntErrorKind::NegOverflow => i64::MIN,
      _ => 0,
    },
  }
}
