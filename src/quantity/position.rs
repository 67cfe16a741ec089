
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the two quantity slots of a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
  Numerator,
  Denominator,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Expected 'numerator' or 'denominator', got '{input}'")]
pub struct ParsePositionError {
  pub input: String,
}

impl Position {
  pub const ALL: [Position; 2] = [Position::Numerator, Position::Denominator];

  pub fn name(self) -> &'static str {
    match self {
      Position::Numerator => "numerator",
      Position::Denominator => "denominator",
    }
  }
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Position {
  type Err = ParsePositionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Position::ALL.into_iter()
      .find(|position| position.name() == s)
      .ok_or_else(|| ParsePositionError { input: s.to_owned() })
  }
}
