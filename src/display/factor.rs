
/// Renders `value` with at most `places` decimal places, dropping
/// trailing zeros and a trailing decimal point. Ties round away from
/// zero. A result that rounds to negative zero is rendered as `"0"`.
pub fn format_factor(value: f64, places: usize) -> String {
  if value.is_nan() {
    return "NaN".to_owned();
  }
  if value.is_infinite() {
    return if value > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
  }
  let fixed = format!("{:.*}", places, round_half_away(value, places));
  let trimmed = if fixed.contains('.') {
    fixed.trim_end_matches('0').trim_end_matches('.')
  } else {
    fixed.as_str()
  };
  if trimmed == "-0" {
    "0".to_owned()
  } else {
    trimmed.to_owned()
  }
}

fn round_half_away(value: f64, places: usize) -> f64 {
  let scale = i32::try_from(places).map_or(f64::INFINITY, |p| 10f64.powi(p));
  let scaled = value * scale;
  if scaled.is_finite() {
    scaled.round() / scale
  } else {
    value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_whole_numbers() {
    assert_eq!(format_factor(14400.0, 2), "14400");
    assert_eq!(format_factor(0.0, 2), "0");
    assert_eq!(format_factor(-3.0, 2), "-3");
    assert_eq!(format_factor(100.0, 0), "100");
  }

  #[test]
  fn test_fractions() {
    assert_eq!(format_factor(0.5, 2), "0.5");
    assert_eq!(format_factor(1.0 / 3.0, 2), "0.33");
    assert_eq!(format_factor(2.0 / 3.0, 2), "0.67");
    assert_eq!(format_factor(1.999, 2), "2");
    assert_eq!(format_factor(18.125, 3), "18.125");
  }

  #[test]
  fn test_ties_round_away_from_zero() {
    assert_eq!(format_factor(1.0 / 8.0, 2), "0.13");
    assert_eq!(format_factor(-1.0 / 8.0, 2), "-0.13");
    assert_eq!(format_factor(3.0 / 8.0, 2), "0.38");
    assert_eq!(format_factor(0.5, 0), "1");
    assert_eq!(format_factor(2.5, 0), "3");
    assert_eq!(format_factor(1e307, 2), format!("{:.0}", 1e307));
  }

  #[test]
  fn test_negative_zero() {
    assert_eq!(format_factor(-0.0, 2), "0");
    assert_eq!(format_factor(-0.001, 2), "0");
  }

  #[test]
  fn test_non_finite() {
    assert_eq!(format_factor(f64::INFINITY, 2), "∞");
    assert_eq!(format_factor(f64::NEG_INFINITY, 2), "-∞");
    assert_eq!(format_factor(f64::NAN, 2), "NaN");
  }
}
