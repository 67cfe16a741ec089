
use super::base::Quantity;
use super::id::RatioId;
use super::position::Position;

use serde::{Serialize, Deserialize};

/// Read access shared by [`Ratio`] and [`BaseRatio`], so that the
/// algebra and the stringifier work on either.
pub trait RatioLike {
  fn numerator(&self) -> &Quantity;

  fn denominator(&self) -> Option<&Quantity>;

  fn get(&self, position: Position) -> Option<&Quantity> {
    match position {
      Position::Numerator => Some(self.numerator()),
      Position::Denominator => self.denominator(),
    }
  }

  /// The factor of the denominator, treating an absent denominator as
  /// the identity.
  fn denominator_factor(&self) -> f64 {
    self.denominator().map_or(1.0, |q| q.factor)
  }
}

/// A ratio without identity. This is the input to ratio and
/// expression construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseRatio {
  pub numerator: Quantity,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub denominator: Option<Quantity>,
}

/// One term of an expression: a numerator over an optional
/// denominator. An absent denominator means `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
  id: RatioId,
  pub numerator: Quantity,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub denominator: Option<Quantity>,
}

impl BaseRatio {
  pub fn new(numerator: Quantity, denominator: Option<Quantity>) -> Self {
    Self { numerator, denominator }
  }

  /// A ratio with only a numerator.
  pub fn numerator_only(numerator: Quantity) -> Self {
    Self { numerator, denominator: None }
  }
}

impl Ratio {
  /// Assigns a fresh id to `base`.
  pub fn new(base: BaseRatio) -> Self {
    Self::with_id(RatioId::generate(), base)
  }

  pub fn with_id(id: RatioId, base: BaseRatio) -> Self {
    Self { id, numerator: base.numerator, denominator: base.denominator }
  }

  /// The identity term, `1` with no denominator.
  pub fn identity() -> Self {
    Self::new(BaseRatio::default())
  }

  pub fn id(&self) -> &RatioId {
    &self.id
  }

  /// Replaces the quantity in the given slot, keeping the id.
  pub fn set(&mut self, position: Position, quantity: Quantity) {
    match position {
      Position::Numerator => self.numerator = quantity,
      Position::Denominator => self.denominator = Some(quantity),
    }
  }

  /// Swaps numerator and denominator, keeping the id. An absent
  /// denominator becomes an identity numerator.
  pub fn flipped(self) -> Self {
    Self {
      id: self.id,
      numerator: self.denominator.unwrap_or_default(),
      denominator: Some(self.numerator),
    }
  }
}

impl RatioLike for BaseRatio {
  fn numerator(&self) -> &Quantity {
    &self.numerator
  }

  fn denominator(&self) -> Option<&Quantity> {
    self.denominator.as_ref()
  }
}

impl RatioLike for Ratio {
  fn numerator(&self) -> &Quantity {
    &self.numerator
  }

  fn denominator(&self) -> Option<&Quantity> {
    self.denominator.as_ref()
  }
}

impl From<BaseRatio> for Ratio {
  fn from(base: BaseRatio) -> Self {
    Ratio::new(base)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::quantity::labels::LabelCount;

  fn foo_per_bar() -> BaseRatio {
    BaseRatio::new(
      Quantity::new(5.0, LabelCount::from([("foo", 1)])),
      Some(Quantity::new(1.0, LabelCount::from([("bar", 1)]))),
    )
  }

  #[test]
  fn test_new_ratio_assigns_id() {
    let ratio = Ratio::new(foo_per_bar());
    assert_eq!(ratio.id().as_str().len(), RatioId::LEN);
    assert_eq!(ratio.numerator, Quantity::new(5.0, LabelCount::from([("foo", 1)])));
    assert_eq!(ratio.denominator, Some(Quantity::new(1.0, LabelCount::from([("bar", 1)]))));
  }

  #[test]
  fn test_identity_ratio() {
    let ratio = Ratio::identity();
    assert_eq!(ratio.numerator, Quantity::identity());
    assert_eq!(ratio.denominator, None);
  }

  #[test]
  fn test_get_and_set() {
    let mut ratio = Ratio::identity();
    assert_eq!(ratio.get(Position::Denominator), None);
    assert_eq!(ratio.denominator_factor(), 1.0);
    ratio.set(Position::Denominator, Quantity::scalar(4.0));
    assert_eq!(ratio.get(Position::Denominator), Some(&Quantity::scalar(4.0)));
    assert_eq!(ratio.denominator_factor(), 4.0);
  }

  #[test]
  fn test_flipped_keeps_id() {
    let ratio = Ratio::new(foo_per_bar());
    let id = ratio.id().clone();
    let flipped = ratio.flipped();
    assert_eq!(flipped.id(), &id);
    assert_eq!(flipped.numerator, Quantity::new(1.0, LabelCount::from([("bar", 1)])));
    assert_eq!(flipped.denominator, Some(Quantity::new(5.0, LabelCount::from([("foo", 1)]))));
  }

  #[test]
  fn test_flipped_without_denominator() {
    let ratio = Ratio::new(BaseRatio::numerator_only(Quantity::scalar(3.0))).flipped();
    assert_eq!(ratio.numerator, Quantity::identity());
    assert_eq!(ratio.denominator, Some(Quantity::scalar(3.0)));
  }

  #[test]
  fn test_serde_shape() {
    let ratio = Ratio::with_id("lx2k4f7qabcdefghij".parse().unwrap(), BaseRatio::numerator_only(Quantity::scalar(2.0)));
    let json = serde_json::to_string(&ratio).unwrap();
    assert_eq!(json, r#"{"id":"lx2k4f7qabcdefghij","numerator":{"factor":2.0}}"#);
    let back: Ratio = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ratio);
  }
}
