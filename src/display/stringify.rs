
use super::DisplaySettings;
use super::factor::format_factor;
use crate::quantity::{LabelCount, LabelWithPower, Quantity, RatioLike};
use crate::quantity::algebra::cancel_out_labels;

use itertools::Itertools;

use std::cmp::Reverse;

impl DisplaySettings {
  /// Renders a signed exponent map. Positive entries go above the
  /// line and negative ones below it. Each side is sorted by
  /// descending exponent, then alphabetically ignoring case.
  pub fn stringify_labels(&self, labels: &LabelCount) -> String {
    let (numerator, denominator): (Vec<_>, Vec<_>) = labels.iter()
      .map(|elem| LabelWithPower::new(elem.label.as_str(), elem.exponent))
      .partition(|elem| elem.exponent > 0);
    let denominator = denominator.into_iter()
      .map(|elem| LabelWithPower::new(elem.label, - elem.exponent));

    let numerator = self.join_side(numerator);
    let denominator = self.join_side(denominator);
    if denominator.is_empty() {
      numerator
    } else {
      format!("{}{}{}", numerator, self.ratio_separator, denominator)
    }
  }

  /// Renders the reduced value of a ratio: the quotient of the
  /// factors, then the cancelled labels.
  pub fn stringify_ratio(&self, ratio: &impl RatioLike) -> String {
    let factor = ratio.numerator().factor / ratio.denominator_factor();
    let empty = LabelCount::new();
    let denominator_labels = ratio.denominator().map_or(&empty, |q| &q.labels);
    let labels = cancel_out_labels(&ratio.numerator().labels, denominator_labels);

    let factor = format_factor(factor, self.decimal_places);
    let labels = self.stringify_labels(&labels);
    let labels = labels.trim_start();
    if labels.is_empty() {
      factor
    } else {
      format!("{} {}", factor, labels)
    }
  }

  /// Each ratio rendered by [`DisplaySettings::stringify_ratio`] in
  /// parentheses, concatenated.
  pub fn stringify_expression<R: RatioLike>(&self, ratios: &[R]) -> String {
    ratios.iter()
      .map(|ratio| format!("({})", self.stringify_ratio(ratio)))
      .join("")
  }

  fn join_side(&self, side: impl IntoIterator<Item = LabelWithPower>) -> String {
    side.into_iter()
      .sorted_by_cached_key(|elem| {
        (Reverse(elem.exponent), elem.label.to_lowercase(), elem.label.clone())
      })
      .join(&self.label_separator)
  }
}

/// The raw form of a quantity, labels in insertion order. An absent
/// quantity renders as the empty string.
pub fn stringify_quantity(quantity: Option<&Quantity>) -> String {
  quantity.map(Quantity::to_string).unwrap_or_default()
}

pub fn stringify_labels(labels: &LabelCount) -> String {
  DisplaySettings::default().stringify_labels(labels)
}

pub fn stringify_ratio(ratio: &impl RatioLike) -> String {
  DisplaySettings::default().stringify_ratio(ratio)
}

pub fn stringify_expression<R: RatioLike>(ratios: &[R]) -> String {
  DisplaySettings::default().stringify_expression(ratios)
}
