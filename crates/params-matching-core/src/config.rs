//! Matcher configuration.
//!
//! Configuration is plain data: it can be built in code or loaded from a
//! TOML document.
//!
//! ```
//! use params_matching_core::{DrillPolicy, MatcherConfig, Presence};
//!
//! let config = MatcherConfig::from_toml_str(
//!     r#"
//!     drill = "strict"
//!     presence = "non_blank"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.drill, DrillPolicy::Strict);
//! assert_eq!(config.presence, Presence::NonBlank);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParamsResult;

/// What to do when a query drills into a value that is not a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillPolicy {
	/// Treat the value as an empty mapping: leaves below resolve to null.
	#[default]
	Lenient,
	/// Fail with [`ParamsError::NotAMapping`](crate::ParamsError::NotAMapping).
	Strict,
}

/// Predicate a value must satisfy to count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
	/// Anything but null.
	#[default]
	NonNull,
	/// Rejects null, `false`, blank strings and empty arrays or objects.
	NonBlank,
}

impl Presence {
	pub fn is_present(self, value: &Value) -> bool {
		match self {
			Self::NonNull => !value.is_null(),
			Self::NonBlank => match value {
				Value::Null | Value::Bool(false) => false,
				Value::String(s) => !s.trim().is_empty(),
				Value::Array(items) => !items.is_empty(),
				Value::Object(map) => !map.is_empty(),
				Value::Bool(true) | Value::Number(_) => true,
			},
		}
	}
}

/// Settings shared by every match performed with a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
	pub drill: DrillPolicy,
	pub presence: Presence,
}

impl MatcherConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_drill(mut self, drill: DrillPolicy) -> Self {
		self.drill = drill;
		self
	}

	pub fn with_presence(mut self, presence: Presence) -> Self {
		self.presence = presence;
		self
	}

	/// Parse a configuration document. Missing fields keep their defaults.
	pub fn from_toml_str(s: &str) -> ParamsResult<Self> {
		Ok(toml::from_str(s)?)
	}
}
