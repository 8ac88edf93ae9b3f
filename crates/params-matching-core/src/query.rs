//! Declarative queries over [`Params`](crate::Params).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParamsError, ParamsResult};

/// Description of which values to pull out of params.
///
/// The JSON shape maps one-to-one onto the variants: a string is a key, an
/// array is a sequence and an object drills into nested params.
///
/// # Examples
///
/// ```
/// use params_matching_core::Query;
/// use serde_json::json;
///
/// // Equivalent to: params(:clan, :family => [:son, :daughter])
/// let built = Query::seq([
///     Query::key("clan"),
///     Query::map([("family", Query::seq(["son", "daughter"]))]),
/// ]);
/// let parsed = Query::from_value(json!(["clan", {"family": ["son", "daughter"]}])).unwrap();
///
/// assert_eq!(built, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
	/// A single key, resolved against the current level.
	Key(String),
	/// Queries evaluated in order against the same level.
	Seq(Vec<Query>),
	/// Keys to drill into, each with the query to run one level down.
	///
	/// An empty `Seq` or empty `Map` as the sub-query is a [`DefaultValue`].
	Map(IndexMap<String, Query>),
}

impl Query {
	pub fn key(key: impl Into<String>) -> Self {
		Self::Key(key.into())
	}

	pub fn seq<I, Q>(queries: I) -> Self
	where
		I: IntoIterator<Item = Q>,
		Q: Into<Query>,
	{
		Self::Seq(queries.into_iter().map(Into::into).collect())
	}

	pub fn map<I, K, Q>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, Q)>,
		K: Into<String>,
		Q: Into<Query>,
	{
		Self::Map(
			entries
				.into_iter()
				.map(|(k, q)| (k.into(), q.into()))
				.collect(),
		)
	}

	/// Sub-query that defaults a missing branch to `[]`
	pub fn empty_seq() -> Self {
		Self::Seq(Vec::new())
	}

	/// Sub-query that defaults a missing branch to `{}`
	pub fn empty_map() -> Self {
		Self::Map(IndexMap::new())
	}

	/// Build a query from its JSON shape.
	///
	/// Numbers, booleans and null have no query meaning and are rejected.
	pub fn from_value(value: Value) -> ParamsResult<Self> {
		Self::deserialize(value).map_err(|e| ParamsError::InvalidQuery(e.to_string()))
	}

	pub fn is_key(&self) -> bool {
		matches!(self, Self::Key(_))
	}
}

impl From<&str> for Query {
	fn from(key: &str) -> Self {
		Self::Key(key.to_string())
	}
}

impl From<String> for Query {
	fn from(key: String) -> Self {
		Self::Key(key)
	}
}

impl<Q: Into<Query>> From<Vec<Q>> for Query {
	fn from(queries: Vec<Q>) -> Self {
		Self::seq(queries)
	}
}

impl<K: Into<String>, Q: Into<Query>> From<IndexMap<K, Q>> for Query {
	fn from(entries: IndexMap<K, Q>) -> Self {
		Self::map(entries)
	}
}

impl FromStr for Query {
	type Err = ParamsError;

	/// Parse a query from JSON text, e.g. `["clan", {"family": ["son"]}]`.
	fn from_str(s: &str) -> ParamsResult<Self> {
		serde_json::from_str(s).map_err(|e| ParamsError::InvalidQuery(e.to_string()))
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&json)
	}
}

/// Default literal substituted for a missing branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
	/// `[]`
	EmptySeq,
	/// `{}`
	EmptyMap,
}

impl DefaultValue {
	/// Recognize a sub-query that stands for a default rather than a drill.
	pub fn recognize(query: &Query) -> Option<Self> {
		match query {
			Query::Seq(queries) if queries.is_empty() => Some(Self::EmptySeq),
			Query::Map(entries) if entries.is_empty() => Some(Self::EmptyMap),
			_ => None,
		}
	}

	pub fn to_value(self) -> Value {
		match self {
			Self::EmptySeq => Value::Array(Vec::new()),
			Self::EmptyMap => Value::Object(serde_json::Map::new()),
		}
	}
}
