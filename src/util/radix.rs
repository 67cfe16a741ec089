//! Base-36 digit helpers.

/// Digits used for radixes up to 36: decimal digits first, then the
/// lowercase Latin alphabet.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn digit_into_char(digit: u8) -> char {
  DIGITS.get(usize::from(digit))
    .map(|d| *d as char)
    .unwrap_or_else(|| panic!("Invalid digit {} in radix", digit))
}

/// Writes `value` in the given radix, most significant digit first.
/// Panics if `radix` is outside `2..=36`.
pub fn to_string_radix(mut value: u64, radix: u8) -> String {
  assert!((2..=36).contains(&radix), "Radix out of bounds");
  if value == 0 {
    return "0".to_owned();
  }
  let radix = u64::from(radix);
  let mut digits = Vec::new();
  while value > 0 {
    digits.push(digit_into_char((value % radix) as u8));
    value /= radix;
  }
  digits.into_iter().rev().collect()
}
