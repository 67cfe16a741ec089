//! The quantity data model and the algebra over it.
//!
//! A [`Quantity`] is a factor with labels, a [`Ratio`] is a quantity
//! over an optional quantity, and the functions in [`algebra`] fold
//! chains of ratios and cancel their labels.

pub mod algebra;
mod base;
mod id;
mod labels;
mod position;
mod ratio;

pub use base::Quantity;
pub use id::{RatioId, InvalidRatioIdError};
pub use labels::{LabelCount, LabelWithPower};
pub use position::{Position, ParsePositionError};
pub use ratio::{BaseRatio, Ratio, RatioLike};
