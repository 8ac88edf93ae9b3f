//! Nested request parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ParamsError, ParamsResult, type_name};

/// A nested key-value parameter structure, as produced by a request parser.
///
/// Values are arbitrary JSON values; objects nest further params. Keys keep
/// their insertion order.
///
/// # Examples
///
/// ```
/// use params_matching_core::Params;
/// use serde_json::json;
///
/// let params = Params::from_value(json!({"user": {"name": "alice"}})).unwrap();
/// assert_eq!(params.get("user"), Some(&json!({"name": "alice"})));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
	/// Create empty params
	pub fn new() -> Self {
		Self(Map::new())
	}

	/// Build params from a JSON value, which must be an object.
	pub fn from_value(value: Value) -> ParamsResult<Self> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(ParamsError::NotAMapping {
				path: String::new(),
				found: type_name(&other),
			}),
		}
	}

	/// Decode an `application/x-www-form-urlencoded` string with bracket
	/// nesting (`user[name]=bob`, `ids[]=1`).
	///
	/// # Examples
	///
	/// ```
	/// use params_matching_core::Params;
	/// use serde_json::json;
	///
	/// let params = Params::from_urlencoded("user[name]=bob&ids[]=1&ids[]=2").unwrap();
	/// assert_eq!(params.get("user"), Some(&json!({"name": "bob"})));
	/// assert_eq!(params.get("ids"), Some(&json!(["1", "2"])));
	/// ```
	pub fn from_urlencoded(input: &str) -> ParamsResult<Self> {
		crate::urlencoded::decode(input).map(Self)
	}

	/// Decode the query string of a URI. A URI without a query yields
	/// empty params.
	#[cfg(feature = "http")]
	pub fn from_uri(uri: &http::Uri) -> ParamsResult<Self> {
		uri.query()
			.map(Self::from_urlencoded)
			.unwrap_or_else(|| Ok(Self::new()))
	}

	/// Look up a top-level value
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Insert a top-level value, returning the previous one
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	/// Borrow the underlying JSON object
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl From<Map<String, Value>> for Params {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl From<Params> for Value {
	fn from(params: Params) -> Self {
		Value::Object(params.0)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

impl TryFrom<Value> for Params {
	type Error = ParamsError;

	fn try_from(value: Value) -> ParamsResult<Self> {
		Self::from_value(value)
	}
}
