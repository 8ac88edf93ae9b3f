//! Error types for parameter matching.

use thiserror::Error;

/// Errors that can occur while building params or matching queries.
///
/// Lenient matching never produces an error: missing keys resolve to null.
#[derive(Debug, Error)]
pub enum ParamsError {
	/// A value that had to be a mapping was something else.
	#[error("Expected a mapping at '{path}', found {found}")]
	NotAMapping {
		/// Dotted key path of the offending value (empty for the root).
		path: String,
		/// JSON type name of the value found there.
		found: &'static str,
	},

	/// Query could not be built from the given description.
	#[error("Invalid query: {0}")]
	InvalidQuery(String),

	/// Urlencoded key used both as a nested mapping and as a plain value.
	#[error("Conflicting parameter key: {key}")]
	ConflictingKey {
		/// The raw key as it appeared in the encoded input.
		key: String,
	},

	/// Urlencoded key with unbalanced or misplaced brackets.
	#[error("Malformed parameter key: {key}")]
	MalformedKey {
		/// The raw key as it appeared in the encoded input.
		key: String,
	},

	/// Urlencoded key nested deeper than the decoder accepts.
	#[error("Parameter key nested deeper than {limit} levels: {key}")]
	TooDeep {
		/// The raw key as it appeared in the encoded input.
		key: String,
		/// Maximum number of bracketed segments per key.
		limit: usize,
	},

	/// Urlencoded input could not be decoded.
	#[error("Urlencoded decoding error: {0}")]
	UrlEncoded(#[from] serde_urlencoded::de::Error),

	/// Extracted values did not fit the requested type.
	#[error("Deserialization error: {0}")]
	Deserialization(#[from] serde_json::Error),

	/// Matcher configuration document could not be parsed.
	#[error("Config error: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type alias for parameter matching operations.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// JSON type name of a value, as reported in [`ParamsError::NotAMapping`].
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
	use serde_json::Value;

	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
