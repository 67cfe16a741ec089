
//! Chained unit-conversion expressions.
//!
//! Users type quantities such as `2 grapes` or `60 m` into the
//! numerator and denominator of a chain of ratios. This crate parses
//! that text, edits the chain, folds it into a single ratio with
//! cancelled labels, and renders the result, e.g. `14400 grapes`.

pub mod display;
pub mod errorlist;
pub mod expression;
pub mod parsing;
pub mod quantity;
pub mod util;
