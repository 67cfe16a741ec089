
use super::source::{SourceOffset, Span};
use super::grammar::SEPARATOR_RE;

use regex::{Regex, Captures};

/// Cursor over the text of a single edit field. Reads advance the
/// cursor only when they succeed.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

#[derive(Debug)]
pub struct TokenizerCaptures<'a> {
  captures: Captures<'a>,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  /// The unread portion of the input.
  pub fn remaining(&self) -> &'a str {
    self.input
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the cursor by `amount` bytes, never past the end of the
  /// input, and returns the skipped text.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// Reads the text matched by `regex` at the cursor. The regex MUST
  /// be anchored at the start of the input; this function panics
  /// otherwise.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }

  /// As [`TokenizerState::read_regex`], but keeps the capture groups.
  pub fn read_regex_with_captures(&mut self, regex: &Regex) -> Option<TokenizerCaptures<'a>> {
    let c = regex.captures(self.input)?;
    let whole = c.get(0)?;
    assert_eq!(whole.start(), 0, "Regex must be anchored at the start of the input");
    self.advance(whole.len());
    Some(TokenizerCaptures { captures: c })
  }

  pub fn read_many<T, F>(&mut self, mut function: F) -> Vec<T>
  where F: FnMut(&mut Self) -> Option<T> {
    let mut output = Vec::new();
    while let Some(item) = function(self) {
      output.push(item);
    }
    output
  }

  /// Skips whitespace and Unicode space separators.
  pub fn consume_spaces(&mut self) {
    self.read_regex(&SEPARATOR_RE);
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

impl<'h> TokenizerCaptures<'h> {
  pub fn get(&self, i: usize) -> Option<&'h str> {
    self.captures.get(i).map(|m| m.as_str())
  }
}
