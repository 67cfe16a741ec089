
//! Folding a chain of ratios into a single ratio, and cancelling the
//! labels of the result.

use super::base::Quantity;
use super::labels::LabelCount;
use super::position::Position;
use super::ratio::{BaseRatio, RatioLike};

use num::One;

fn has_no_labels(quantity: Option<&Quantity>) -> bool {
  quantity.map_or(true, |q| !q.has_labels())
}

/// True if the quantity is absent, or is exactly `1` with no labels.
/// Zero is not trivial.
pub fn quantity_is_trivial(quantity: Option<&Quantity>) -> bool {
  quantity.map_or(true, Quantity::is_identity)
}

/// True if the ratio is the multiplicative identity in one of the
/// recognized forms: `1`, `1/1`, or `-1/-1`, all without labels.
pub fn is_ratio_trivial(ratio: &impl RatioLike) -> bool {
  let numerator = ratio.numerator();
  let denominator = ratio.denominator();
  if !has_no_labels(Some(numerator)) || !has_no_labels(denominator) {
    return false;
  }
  match denominator.map(|q| q.factor) {
    None => numerator.factor == 1.0,
    Some(den) => (numerator.factor == 1.0 && den == 1.0) || (numerator.factor == -1.0 && den == -1.0),
  }
}

/// The product of the factors on one side of every ratio. An absent
/// quantity counts as `1`.
pub fn multiply_factors<R: RatioLike>(ratios: &[R], position: Position) -> f64 {
  ratios.iter()
    .fold(1.0, |acc, ratio| acc * ratio.get(position).map_or(1.0, |q| q.factor))
}

/// The sum of label exponents on one side of every ratio, traversed
/// left to right.
pub fn compound_labels<R: RatioLike>(ratios: &[R], position: Position) -> LabelCount {
  ratios.iter()
    .filter_map(|ratio| ratio.get(position))
    .fold(LabelCount::one(), |acc, q| acc * q.labels.clone())
}

/// Folds the whole chain into one aggregate numerator and
/// denominator. Labels are summed per side but not yet cancelled
/// against each other; see [`cancel_out_labels`].
pub fn calculate_results<R: RatioLike>(ratios: &[R]) -> BaseRatio {
  let side = |position| Quantity::new(
    multiply_factors(ratios, position),
    compound_labels(ratios, position),
  );
  BaseRatio::new(side(Position::Numerator), Some(side(Position::Denominator)))
}

/// Net exponent of every label appearing on either side: positive for
/// a net numerator label, negative for a net denominator label.
/// Labels that cancel completely are omitted.
///
/// Numerator labels come first in the result, followed by labels that
/// appear only in the denominator.
pub fn cancel_out_labels(numerator: &LabelCount, denominator: &LabelCount) -> LabelCount {
  let mut result = LabelCount::new();
  for label in numerator.labels().chain(denominator.labels()) {
    if !result.contains(label) {
      result.set(label, numerator.get(label) - denominator.get(label));
    }
  }
  result
}
