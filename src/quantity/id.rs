
use crate::util::radix::{digit_into_char, to_string_radix};

use rand::Rng;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use time::OffsetDateTime;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Opaque identifier of a ratio within an expression.
///
/// Ids exist so that a host can track terms across reordering. They
/// are carried through edits of the same term and never take part in
/// any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RatioId(String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{id}' is not a valid ratio id")]
pub struct InvalidRatioIdError {
  pub id: String,
}

impl RatioId {
  pub const LEN: usize = TIMESTAMP_LEN + RANDOM_LEN;

  /// A fresh id: the current time in milliseconds followed by random
  /// characters, all in base 36.
  pub fn generate() -> Self {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let millis = u64::try_from(millis).unwrap_or_default();
    let timestamp = format!("{:0>width$}", to_string_radix(millis, 36), width = TIMESTAMP_LEN);

    let mut id: String = timestamp.chars().skip(timestamp.len() - TIMESTAMP_LEN).collect();
    let mut rng = rand::thread_rng();
    id.extend((0..RANDOM_LEN).map(|_| digit_into_char(rng.gen_range(0..36))));
    RatioId(id)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

const TIMESTAMP_LEN: usize = 8;
const RANDOM_LEN: usize = 10;

impl Display for RatioId {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for RatioId {
  type Err = InvalidRatioIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() == RatioId::LEN && s.chars().all(|c| c.is_ascii_alphanumeric()) {
      Ok(RatioId(s.to_owned()))
    } else {
      Err(InvalidRatioIdError { id: s.to_owned() })
    }
  }
}

impl TryFrom<String> for RatioId {
  type Error = InvalidRatioIdError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl From<RatioId> for String {
  fn from(id: RatioId) -> Self {
    id.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_generate_shape() {
    let id = RatioId::generate();
    assert_eq!(id.as_str().len(), RatioId::LEN);
    assert!(id.as_str().chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
  }

  #[test]
  fn test_generated_ids_are_distinct() {
    let ids: Vec<_> = (0..50).map(|_| RatioId::generate()).collect();
    for (i, a) in ids.iter().enumerate() {
      for b in &ids[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }

  #[test]
  fn test_generated_id_round_trips_through_parse() {
    let id = RatioId::generate();
    assert_eq!(id.to_string().parse::<RatioId>(), Ok(id));
  }

  #[test]
  fn test_parse_rejects_malformed() {
    assert!("".parse::<RatioId>().is_err());
    assert!("short".parse::<RatioId>().is_err());
    assert!("lx2k4f7qabcdefghi!".parse::<RatioId>().is_err());
    assert!("lx2k4f7qabcdefghij".parse::<RatioId>().is_ok());
  }

  #[test]
  fn test_serde_validates() {
    let id: RatioId = serde_json::from_str(r#""lx2k4f7qabcdefghij""#).unwrap();
    assert_eq!(id.as_str(), "lx2k4f7qabcdefghij");
    assert!(serde_json::from_str::<RatioId>(r#""nope""#).is_err());
  }
}
