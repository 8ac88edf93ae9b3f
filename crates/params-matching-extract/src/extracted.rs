//! Extracted values

use params_matching_core::{Matched, ParamsResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Matched values shaped for a caller: a single value is handed out as is,
/// anything else as the ordered list.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
	One(Value),
	Many(Vec<Value>),
}

impl Extracted {
	/// Collapse into one JSON value; `Many` becomes an array.
	pub fn into_value(self) -> Value {
		match self {
			Self::One(value) => value,
			Self::Many(values) => Value::Array(values),
		}
	}

	/// The extracted values in order, regardless of shape.
	pub fn into_vec(self) -> Vec<Value> {
		match self {
			Self::One(value) => vec![value],
			Self::Many(values) => values,
		}
	}

	pub fn as_one(&self) -> Option<&Value> {
		match self {
			Self::One(value) => Some(value),
			Self::Many(_) => None,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::One(_) => 1,
			Self::Many(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Deserialize into `T`.
	///
	/// Several values deserialize positionally, so a tuple destructures them
	/// in query order.
	///
	/// # Examples
	///
	/// ```
	/// use params_matching_extract::Extracted;
	/// use serde_json::json;
	///
	/// let extracted = Extracted::Many(vec![json!("alice"), json!(42)]);
	/// let (login, age): (String, u32) = extracted.deserialize().unwrap();
	///
	/// assert_eq!(login, "alice");
	/// assert_eq!(age, 42);
	/// ```
	pub fn deserialize<T: DeserializeOwned>(self) -> ParamsResult<T> {
		Ok(serde_json::from_value(self.into_value())?)
	}
}

impl From<Matched> for Extracted {
	fn from(matched: Matched) -> Self {
		match <[Value; 1]>::try_from(matched.into_vec()) {
			Ok([value]) => Self::One(value),
			Err(values) => Self::Many(values),
		}
	}
}

impl From<Extracted> for Value {
	fn from(extracted: Extracted) -> Self {
		extracted.into_value()
	}
}
