
//! Sample expressions, useful as a host's starting content.

use super::Expression;
use crate::quantity::{BaseRatio, LabelCount, Quantity};

fn labelled(factor: f64, label: &str) -> Quantity {
  Quantity::new(factor, LabelCount::from([(label, 1)]))
}

/// `(2 grapes / 1 m)(60 m / 1 h)(24 h / 1 d)(5 d)`, which reduces to
/// `14400 grapes`.
pub fn grapes_per_metre() -> Expression {
  Expression::new(vec![
    BaseRatio::new(labelled(2.0, "grapes"), Some(labelled(1.0, "m"))),
    BaseRatio::new(labelled(60.0, "m"), Some(labelled(1.0, "h"))),
    BaseRatio::new(labelled(24.0, "h"), Some(labelled(1.0, "d"))),
    BaseRatio::numerator_only(labelled(5.0, "d")),
  ])
}

/// `(15 planks)(4 planks / 1 wood)(1 wood / 3 planks)`.
pub fn planks_and_wood() -> Expression {
  Expression::new(vec![
    BaseRatio::numerator_only(labelled(15.0, "planks")),
    BaseRatio::new(labelled(4.0, "planks"), Some(labelled(1.0, "wood"))),
    BaseRatio::new(labelled(1.0, "wood"), Some(labelled(3.0, "planks"))),
  ])
}

/// `(2 grapes / 1 m)(60 m / 1 h)(24 h / 1 d)`, which reduces to
/// `2880 grapes / d`.
pub fn grapes_per_day() -> Expression {
  Expression::new(vec![
    BaseRatio::new(labelled(2.0, "grapes"), Some(labelled(1.0, "m"))),
    BaseRatio::new(labelled(60.0, "m"), Some(labelled(1.0, "h"))),
    BaseRatio::new(labelled(24.0, "h"), Some(labelled(1.0, "d"))),
  ])
}
