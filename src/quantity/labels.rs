
use itertools::Itertools;
use num::One;
use serde::{Serialize, Deserialize, Serializer, Deserializer};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use std::fmt::{self, Formatter, Display};
use std::ops::Mul;

/// An opaque label raised to an integer power.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelWithPower {
  pub label: String,
  pub exponent: i64,
}

/// A map from label to exponent.
///
/// Entries are kept in first-insertion order, which is the order raw
/// quantities are rendered in. A given label appears at most once,
/// and no entry ever has a zero exponent: any mutation that brings an
/// exponent to zero removes the entry.
#[derive(Debug, Clone, Default)]
pub struct LabelCount {
  elements: Vec<LabelWithPower>,
}

impl LabelWithPower {
  pub fn new(label: impl Into<String>, exponent: i64) -> Self {
    Self { label: label.into(), exponent }
  }
}

impl LabelCount {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// The number of distinct labels.
  pub fn len(&self) -> usize {
    self.elements.len()
  }

  /// The exponent of `label`, or zero if it is absent.
  pub fn get(&self, label: &str) -> i64 {
    self.position(label).map_or(0, |i| self.elements[i].exponent)
  }

  pub fn contains(&self, label: &str) -> bool {
    self.position(label).is_some()
  }

  /// Adds `exponent` to the exponent of `label`, inserting it at the
  /// end if it was absent.
  pub fn add(&mut self, label: impl Into<String>, exponent: i64) {
    let label = label.into();
    match self.position(&label) {
      Some(i) => {
        let elem = &mut self.elements[i];
        elem.exponent = elem.exponent.saturating_add(exponent);
        if elem.exponent == 0 {
          self.elements.remove(i);
        }
      }
      None => {
        if exponent != 0 {
          self.elements.push(LabelWithPower { label, exponent });
        }
      }
    }
  }

  /// Overwrites the exponent of `label`. Setting zero removes it.
  pub fn set(&mut self, label: impl Into<String>, exponent: i64) {
    let label = label.into();
    match (self.position(&label), exponent) {
      (Some(i), 0) => {
        self.elements.remove(i);
      }
      (Some(i), _) => {
        self.elements[i].exponent = exponent;
      }
      (None, 0) => {}
      (None, _) => {
        self.elements.push(LabelWithPower { label, exponent });
      }
    }
  }

  /// The entries in first-insertion order. All exponents are
  /// non-zero.
  pub fn iter(&self) -> impl Iterator<Item = &LabelWithPower> {
    self.elements.iter()
  }

  pub fn labels(&self) -> impl Iterator<Item = &str> {
    self.elements.iter().map(|elem| elem.label.as_str())
  }

  fn position(&self, label: &str) -> Option<usize> {
    self.elements.iter().position(|elem| elem.label == label)
  }
}

impl Display for LabelWithPower {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.exponent > 1 {
      write!(f, "{}^{}", self.label, self.exponent)
    } else {
      write!(f, "{}", self.label)
    }
  }
}

/// Space-separated, in insertion order.
impl Display for LabelCount {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.elements.iter().join(" "))
  }
}

/// Two label counts are equal when they hold the same exponents,
/// regardless of insertion order.
impl PartialEq for LabelCount {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() &&
      self.elements.iter().all(|elem| other.get(&elem.label) == elem.exponent)
  }
}

impl Eq for LabelCount {}

impl<S: Into<String>> FromIterator<(S, i64)> for LabelCount {
  fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
    let mut labels = LabelCount::new();
    for (label, exponent) in iter {
      labels.add(label, exponent);
    }
    labels
  }
}

impl<S: Into<String>, const N: usize> From<[(S, i64); N]> for LabelCount {
  fn from(entries: [(S, i64); N]) -> Self {
    entries.into_iter().collect()
  }
}

impl<'a> Extend<&'a LabelWithPower> for LabelCount {
  fn extend<I: IntoIterator<Item = &'a LabelWithPower>>(&mut self, iter: I) {
    for elem in iter {
      self.add(elem.label.as_str(), elem.exponent);
    }
  }
}

impl Mul for LabelCount {
  type Output = LabelCount;

  fn mul(mut self, rhs: LabelCount) -> Self::Output {
    self.extend(rhs.iter());
    self
  }
}

impl One for LabelCount {
  fn one() -> Self {
    LabelCount::new()
  }

  fn is_one(&self) -> bool {
    self.is_empty()
  }
}

impl Serialize for LabelCount {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: Serializer {
    let mut map = serializer.serialize_map(Some(self.len()))?;
    for elem in &self.elements {
      map.serialize_entry(&elem.label, &elem.exponent)?;
    }
    map.end()
  }
}

impl<'de> Deserialize<'de> for LabelCount {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: Deserializer<'de> {
    deserializer.deserialize_map(LabelCountVisitor)
  }
}

struct LabelCountVisitor;

impl<'de> Visitor<'de> for LabelCountVisitor {
  type Value = LabelCount;

  fn expecting(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "a map from label to integer exponent")
  }

  fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
  where A: MapAccess<'de> {
    let mut labels = LabelCount::new();
    while let Some((label, exponent)) = access.next_entry::<String, i64>()? {
      labels.add(label, exponent);
    }
    Ok(labels)
  }
}
