
use super::labels::LabelCount;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A number with an optional set of labels attached.
///
/// The factor carries no sign or magnitude constraint. An empty label
/// set means the quantity has no unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
  pub factor: f64,
  #[serde(default, skip_serializing_if = "LabelCount::is_empty")]
  pub labels: LabelCount,
}

impl Quantity {
  pub fn new(factor: f64, labels: LabelCount) -> Self {
    Self { factor, labels }
  }

  /// A quantity with no labels.
  pub fn scalar(factor: f64) -> Self {
    Self { factor, labels: LabelCount::new() }
  }

  /// The multiplicative identity, `{factor: 1}`.
  pub fn identity() -> Self {
    Self::scalar(1.0)
  }

  pub fn has_labels(&self) -> bool {
    !self.labels.is_empty()
  }

  /// True if this is exactly `1` with no labels. Zero is not an
  /// identity.
  pub fn is_identity(&self) -> bool {
    self.factor == 1.0 && !self.has_labels()
  }
}

impl Default for Quantity {
  fn default() -> Self {
    Quantity::identity()
  }
}

/// The raw form a user would type: the factor, then each label in
/// insertion order.
impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.labels.is_empty() {
      write!(f, "{}", self.factor)
    } else {
      write!(f, "{} {}", self.factor, self.labels)
    }
  }
}

impl From<f64> for Quantity {
  fn from(factor: f64) -> Self {
    Quantity::scalar(factor)
  }
}

/// Factors are compared approximately and labels exactly.
impl AbsDiffEq for Quantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    f64::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.labels == other.labels && self.factor.abs_diff_eq(&other.factor, epsilon)
  }
}

impl RelativeEq for Quantity {
  fn default_max_relative() -> f64 {
    f64::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.labels == other.labels && self.factor.relative_eq(&other.factor, epsilon, max_relative)
  }
}
