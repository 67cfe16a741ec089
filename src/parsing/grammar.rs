//! Regular-language rules for the text a user types into a single
//! quantity field.
//!
//! All of these regexes are anchored at the start of their input, as
//! [`TokenizerState`](super::tokenizer::TokenizerState) requires.

use regex::Regex;
use once_cell::sync::Lazy;

/// A leading factor followed by at least one separator, or by the end
/// of the input. Capture group 1 is the factor text.
pub static FACTOR_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(-?\p{N}+(?:\.\p{N}+)?%?)(?:[\s\p{Z}]+|$)").unwrap()
});

/// A complete factor token. Capture group 1 is the number, group 2 is
/// the (possibly empty) percent sign.
pub static FACTOR_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(-?\p{N}+(?:\.\p{N}+)?)(%?)$").unwrap()
});

/// A complete label token. Capture group 1 is the label text, group 2
/// is the optional exponent digits after `^`.
///
/// A label starts with a letter, the degree sign, or an emoji, and
/// continues with letters, digits, a few punctuation marks, and emoji
/// continuation characters (modifiers, joiners, variation selectors),
/// so that compound emoji count as a single label.
pub static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(concat!(
    r"^(",
    r"(?:\p{L}|°|\p{Emoji_Modifier_Base}\p{Emoji_Modifier}?|\p{Emoji_Presentation}|\p{Emoji}\x{FE0F})",
    r"[\p{Emoji}\p{Emoji_Modifier_Base}\p{Emoji_Modifier}\x{FE0F}\p{Emoji_Presentation}\p{Join_Control}\p{L}\p{N}\-_#@~°!]*",
    r")(?:\^(\p{N}+))?$",
  )).unwrap()
});

/// One whitespace-delimited run of the label segment. Whether it is a
/// valid label is decided separately by [`LABEL_RE`].
pub static LABEL_RUN_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[^\s\p{Z}]+").unwrap()
});

/// Whitespace, including Unicode space separators.
pub static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[\s\p{Z}]*").unwrap()
});

#[cfg(test)]
mod tests {
  use super::*;

  fn label_captures(input: &str) -> Option<(String, Option<String>)> {
    LABEL_RE.captures(input).map(|c| {
      (c[1].to_owned(), c.get(2).map(|m| m.as_str().to_owned()))
    })
  }

  #[test]
  fn test_factor_segment() {
    let segment = |s: &str| FACTOR_SEGMENT_RE.captures(s).map(|c| c[1].to_owned());
    assert_eq!(segment("60"), Some("60".to_owned()));
    assert_eq!(segment("60.0"), Some("60.0".to_owned()));
    assert_eq!(segment("3 bus"), Some("3".to_owned()));
    assert_eq!(segment("3.0 bus"), Some("3.0".to_owned()));
    assert_eq!(segment("-12%\u{00A0}cake"), Some("-12%".to_owned()));
    assert_eq!(segment("99invalid"), None);
    assert_eq!(segment("m"), None);
  }

  #[test]
  fn test_factor_token() {
    assert!(FACTOR_RE.is_match("60"));
    assert!(FACTOR_RE.is_match("-60.5"));
    assert!(FACTOR_RE.is_match("60%"));
    assert!(!FACTOR_RE.is_match("60."));
    assert!(!FACTOR_RE.is_match(".5"));
    assert!(!FACTOR_RE.is_match("6 0"));
  }

  #[test]
  fn test_simple_labels() {
    assert_eq!(label_captures("m"), Some(("m".to_owned(), None)));
    assert_eq!(label_captures("grapes"), Some(("grapes".to_owned(), None)));
    assert_eq!(label_captures("foo-bar"), Some(("foo-bar".to_owned(), None)));
    assert_eq!(label_captures("bar#2"), Some(("bar#2".to_owned(), None)));
    assert_eq!(label_captures("°C"), Some(("°C".to_owned(), None)));
    assert_eq!(label_captures("m*n"), Some(("m*n".to_owned(), None)));
  }

  #[test]
  fn test_label_with_exponent() {
    assert_eq!(label_captures("m^3"), Some(("m".to_owned(), Some("3".to_owned()))));
    assert_eq!(label_captures("km^12"), Some(("km".to_owned(), Some("12".to_owned()))));
  }

  #[test]
  fn test_emoji_labels() {
    assert_eq!(label_captures("🍎"), Some(("🍎".to_owned(), None)));
    assert_eq!(label_captures("🍎^2"), Some(("🍎".to_owned(), Some("2".to_owned()))));
    assert_eq!(label_captures("👍🏽"), Some(("👍🏽".to_owned(), None)));
    // Zero-width joiner sequence.
    assert_eq!(label_captures("👩\u{200D}🚀"), Some(("👩\u{200D}🚀".to_owned(), None)));
  }

  #[test]
  fn test_invalid_labels() {
    assert_eq!(label_captures("3bar"), None);
    assert_eq!(label_captures("m$3"), None);
    assert_eq!(label_captures("m%3"), None);
    assert_eq!(label_captures("m&3"), None);
    assert_eq!(label_captures("m^"), None);
    assert_eq!(label_captures("^2"), None);
    assert_eq!(label_captures("-m"), None);
  }

  #[test]
  fn test_label_runs_and_separators() {
    assert_eq!(LABEL_RUN_RE.find("foo bar").map(|m| m.as_str()), Some("foo"));
    assert_eq!(LABEL_RUN_RE.find(" foo"), None);
    assert_eq!(SEPARATOR_RE.find(" \t\u{2003}x").map(|m| m.len()), Some(5));
    assert_eq!(SEPARATOR_RE.find("x").map(|m| m.len()), Some(0));
  }
}
