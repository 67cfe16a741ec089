
//! Miscellaneous helpers.

pub mod radix;
