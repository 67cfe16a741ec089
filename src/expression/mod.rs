
//! Ordered chains of ratios, and the pure edit operations a host
//! applies to them.

mod editor;
pub mod presets;

use crate::display::stringify_ratio;
use crate::quantity::{BaseRatio, Ratio};
use crate::quantity::algebra::{calculate_results, quantity_is_trivial};

use log::debug;
use serde::{Serialize, Deserialize};

use std::ops::Deref;

/// An expression without ids, used as construction input.
pub type BaseExpression = Vec<BaseRatio>;

/// An ordered chain of ratios whose product is the quantity being
/// converted.
///
/// An expression is never empty. Every constructor, every edit, and
/// deserialization substitute the single identity term for an empty
/// sequence.
///
/// Expressions are values: edits return a new expression and leave
/// the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Ratio>", into = "Vec<Ratio>")]
pub struct Expression {
  ratios: Vec<Ratio>,
}

impl Expression {
  /// Builds an expression from id-less ratios, assigning a fresh id
  /// to each.
  pub fn new(base: BaseExpression) -> Self {
    base.into_iter().map(Ratio::new).collect::<Vec<_>>().into()
  }

  pub fn ratios(&self) -> &[Ratio] {
    &self.ratios
  }

  /// Simplifies the expression, folds it, and renders the reduced
  /// result.
  pub fn evaluate(&self) -> String {
    let simplified = self.simplify_expression();
    let result = stringify_ratio(&calculate_results(simplified.ratios()));
    debug!("Evaluated {} term(s) to '{}'", simplified.len(), result);
    result
  }

  /// True if the term at `index` is followed by another term and
  /// neither has a meaningful denominator, so that the two are
  /// displayed with a multiplication dot between them.
  pub fn needs_period(&self, index: usize) -> bool {
    let has_trivial_denominator = |ratio: &Ratio| quantity_is_trivial(ratio.denominator.as_ref());
    match (self.ratios.get(index), self.ratios.get(index.saturating_add(1))) {
      (Some(current), Some(next)) => has_trivial_denominator(current) && has_trivial_denominator(next),
      _ => false,
    }
  }
}

impl Default for Expression {
  /// The single identity term.
  fn default() -> Self {
    Expression { ratios: vec![Ratio::identity()] }
  }
}

impl From<Vec<Ratio>> for Expression {
  fn from(ratios: Vec<Ratio>) -> Self {
    if ratios.is_empty() {
      Expression::default()
    } else {
      Expression { ratios }
    }
  }
}

impl From<Expression> for Vec<Ratio> {
  fn from(expression: Expression) -> Self {
    expression.ratios
  }
}

impl FromIterator<Ratio> for Expression {
  fn from_iter<I: IntoIterator<Item = Ratio>>(iter: I) -> Self {
    iter.into_iter().collect::<Vec<_>>().into()
  }
}

impl Deref for Expression {
  type Target = [Ratio];

  fn deref(&self) -> &[Ratio] {
    &self.ratios
  }
}

impl<'a> IntoIterator for &'a Expression {
  type Item = &'a Ratio;
  type IntoIter = std::slice::Iter<'a, Ratio>;

  fn into_iter(self) -> Self::IntoIter {
    self.ratios.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::quantity::{LabelCount, Quantity, RatioId};

  fn ql<const N: usize>(factor: f64, labels: [(&str, i64); N]) -> Quantity {
    Quantity::new(factor, LabelCount::from(labels))
  }

  #[test]
  fn test_default_expression() {
    let expr = Expression::default();
    assert_eq!(expr.len(), 1);
    assert_eq!(expr[0].id().as_str().len(), RatioId::LEN);
    assert_eq!(expr[0].numerator, Quantity::identity());
    assert_eq!(expr[0].denominator, None);
  }

  #[test]
  fn test_new_expression_assigns_ids() {
    let expr = Expression::new(vec![
      BaseRatio::new(ql(5.0, [("foo", 1)]), Some(ql(1.0, [("bar", 1)]))),
    ]);
    assert_eq!(expr.len(), 1);
    assert_eq!(expr[0].id().as_str().len(), RatioId::LEN);
    assert_eq!(expr[0].numerator, ql(5.0, [("foo", 1)]));
    assert_eq!(expr[0].denominator, Some(ql(1.0, [("bar", 1)])));
  }

  #[test]
  fn test_empty_input_is_repaired() {
    let expr = Expression::new(vec![]);
    assert_eq!(expr.len(), 1);
    assert_eq!(expr[0].numerator, Quantity::identity());
    let expr: Expression = serde_json::from_str("[]").unwrap();
    assert_eq!(expr.len(), 1);
  }

  #[test]
  fn test_evaluate_chained_conversion() {
    assert_eq!(presets::grapes_per_metre().evaluate(), "14400 grapes");
    assert_eq!(presets::grapes_per_day().evaluate(), "2880 grapes / d");
  }

  #[test]
  fn test_evaluate_identity() {
    assert_eq!(Expression::default().evaluate(), "1");
  }

  #[test]
  fn test_needs_period() {
    let expr = Expression::new(vec![
      BaseRatio::numerator_only(ql(2.0, [("grapes", 1)])),
      BaseRatio::numerator_only(Quantity::scalar(3.0)),
      BaseRatio::new(ql(60.0, [("m", 1)]), Some(ql(1.0, [("h", 1)]))),
      BaseRatio::new(Quantity::scalar(4.0), Some(Quantity::identity())),
      BaseRatio::numerator_only(Quantity::scalar(3.0)),
    ]);
    assert!(expr.needs_period(0));
    assert!(!expr.needs_period(1));
    assert!(!expr.needs_period(2));
    assert!(expr.needs_period(3));
    assert!(!expr.needs_period(4));
    assert!(!expr.needs_period(99));
  }

  #[test]
  fn test_serde_round_trip() {
    let expr = presets::planks_and_wood();
    let json = serde_json::to_string(&expr).unwrap();
    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
  }

  #[test]
  fn test_deserialize_rejects_bad_id() {
    let json = r#"[{"id":"short","numerator":{"factor":1}}]"#;
    assert!(serde_json::from_str::<Expression>(json).is_err());
  }
}
