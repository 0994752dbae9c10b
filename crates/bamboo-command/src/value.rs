use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

/// A single optional argument value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionValue {
  /// Not supplied. Never rendered.
  #[default]
  Absent,
  /// Boolean flag. `false` is never rendered.
  Flag(bool),
  /// String or number, rendered in its natural string form.
  Scalar(String),
}

impl OptionValue {
  /// Whether this value contributes a token when serialized.
  pub fn is_present(&self) -> bool {
    !matches!(self, OptionValue::Absent | OptionValue::Flag(false))
  }
}

impl From<bool> for OptionValue {
  fn from(value: bool) -> Self {
    OptionValue::Flag(value)
  }
}

impl From<&str> for OptionValue {
  fn from(value: &str) -> Self {
    OptionValue::Scalar(value.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(value: String) -> Self {
    OptionValue::Scalar(value)
  }
}

impl From<&String> for OptionValue {
  fn from(value: &String) -> Self {
    OptionValue::Scalar(value.clone())
  }
}

macro_rules! scalar_from_integer {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for OptionValue {
        fn from(value: $ty) -> Self {
          OptionValue::Scalar(value.to_string())
        }
      }
    )*
  };
}

scalar_from_integer!(i32, i64, u32, u64, usize);

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
  fn from(value: Option<T>) -> Self {
    value.map_or(OptionValue::Absent, Into::into)
  }
}

/// JSON `null` is absent, booleans are flags, strings and numbers are scalars.
impl<'de> Deserialize<'de> for OptionValue {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_any(OptionValueVisitor)
  }
}

struct OptionValueVisitor;

impl<'de> Visitor<'de> for OptionValueVisitor {
  type Value = OptionValue;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("null, a boolean, a string or a number")
  }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(OptionValue::Absent)
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(OptionValue::Absent)
  }

  fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
    OptionValue::deserialize(deserializer)
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
    Ok(OptionValue::Flag(v))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    Ok(OptionValue::Scalar(v.to_string()))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    Ok(OptionValue::Scalar(v.to_string()))
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    Ok(OptionValue::Scalar(v.to_string()))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Ok(OptionValue::Scalar(v.to_string()))
  }

  fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
    Ok(OptionValue::Scalar(v))
  }
}
