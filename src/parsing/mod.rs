
//! Turning the free text of a single edit field into a
//! [`Quantity`](crate::quantity::Quantity).

pub mod grammar;
mod input;
pub mod source;
pub mod tokenizer;

pub use input::{parse_input, parse_input_with_errors, parse_factor, LabelTokenError};
