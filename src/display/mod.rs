
//! Canonical text rendering of quantities, label sets, and ratios.

mod factor;
mod stringify;

pub use factor::format_factor;
pub use stringify::{stringify_quantity, stringify_labels, stringify_ratio, stringify_expression};

use serde::{Serialize, Deserialize};

/// Rendering options for reduced results. The defaults produce the
/// canonical form, `"14400 grapes / h^2 • m"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
  /// Decimal places kept when rendering a reduced factor, before
  /// trailing zeros are stripped.
  pub decimal_places: usize,
  /// Placed between labels on the same side of a ratio.
  pub label_separator: String,
  /// Placed between the numerator and denominator labels.
  pub ratio_separator: String,
}

impl Default for DisplaySettings {
  fn default() -> Self {
    DisplaySettings {
      decimal_places: 2,
      label_separator: " • ".to_owned(),
      ratio_separator: " / ".to_owned(),
    }
  }
}
