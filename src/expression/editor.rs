
//! Index-based edits. Each operation returns a new expression;
//! invalid indices and unparseable text leave the expression as it
//! was.

use super::Expression;
use crate::parsing::parse_input;
use crate::quantity::{BaseRatio, Position, Quantity, Ratio};
use crate::quantity::algebra::is_ratio_trivial;

use log::trace;

impl Expression {
  /// Inserts `ratio`, or a fresh identity term, before `index`. An
  /// index past the end appends.
  pub fn insert_ratio(&self, index: usize, ratio: Option<Ratio>) -> Expression {
    let index = index.min(self.ratios.len());
    let mut ratios = self.ratios.clone();
    ratios.insert(index, ratio.unwrap_or_else(Ratio::identity));
    Expression { ratios }
  }

  /// Replaces the quantity at `position` of the term at `index` with
  /// the parse of `text`, keeping the term's id.
  ///
  /// Unchanged if `index` is out of range, if `text` is empty, or if
  /// a denominator would be set to the plain identity `1`.
  pub fn update_ratio(&self, index: usize, position: Position, text: &str) -> Expression {
    if index >= self.ratios.len() {
      trace!("Ignoring update of {} at out-of-range index {}", position, index);
      return self.clone();
    }
    let Some(quantity) = parse_input(text) else {
      return self.clone();
    };
    if position == Position::Denominator && quantity.is_identity() {
      trace!("Ignoring identity denominator at index {}", index);
      return self.clone();
    }

    let mut ratios = self.ratios.clone();
    ratios[index].set(position, quantity);
    Expression { ratios }
  }

  /// Removes the term at `index`. Removing the last remaining term
  /// leaves the identity term in its place.
  pub fn remove_ratio(&self, index: usize) -> Expression {
    if index >= self.ratios.len() {
      trace!("Ignoring removal at out-of-range index {}", index);
      return self.clone();
    }
    let mut ratios = self.ratios.clone();
    ratios.remove(index);
    Expression::from(ratios)
  }

  /// Swaps numerator and denominator of the term at `index`, keeping
  /// its id.
  pub fn flip_unit(&self, index: usize) -> Expression {
    if index >= self.ratios.len() {
      trace!("Ignoring flip at out-of-range index {}", index);
      return self.clone();
    }
    let mut ratios = self.ratios.clone();
    let ratio = ratios.remove(index);
    ratios.insert(index, ratio.flipped());
    Expression { ratios }
  }

  /// Moves the term at `from` so that it ends up at `to`, shifting
  /// the terms in between.
  pub fn move_ratio(&self, from: usize, to: usize) -> Expression {
    let len = self.ratios.len();
    if from >= len || to >= len {
      trace!("Ignoring move from {} to {} in expression of length {}", from, to, len);
      return self.clone();
    }
    let mut ratios = self.ratios.clone();
    let ratio = ratios.remove(from);
    ratios.insert(to, ratio);
    Expression { ratios }
  }

  /// Drops every trivial term. If nothing remains, the result is the
  /// identity term, carrying the id of the first term. A lone trivial
  /// term is returned as it is.
  pub fn simplify_expression(&self) -> Expression {
    let kept: Vec<Ratio> = self.ratios.iter()
      .filter(|ratio| !is_ratio_trivial(*ratio))
      .cloned()
      .collect();
    if !kept.is_empty() {
      return Expression { ratios: kept };
    }
    match self.ratios.as_slice() {
      [_] => self.clone(),
      ratios => {
        let identity = ratios.first()
          .map(|first| Ratio::with_id(first.id().clone(), BaseRatio::numerator_only(Quantity::identity())));
        Expression::from(identity.into_iter().collect::<Vec<_>>())
      }
    }
  }
}
