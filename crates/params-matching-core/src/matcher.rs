//! Recursive query matching.

use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::config::{DrillPolicy, MatcherConfig};
use crate::error::{ParamsError, ParamsResult, type_name};
use crate::matched::Matched;
use crate::params::Params;
use crate::query::{DefaultValue, Query};

static EMPTY: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Match `query` against `params` with the default (lenient) configuration.
///
/// Never fails: absent keys and missing branches resolve to null.
///
/// # Examples
///
/// ```
/// use params_matching_core::{Params, Query, match_params};
/// use serde_json::json;
///
/// let params = Params::from_value(json!({
///     "clan": "x",
///     "family": {"son": 1, "daughter": 2},
/// }))
/// .unwrap();
/// let query: Query = r#"["clan", {"family": ["son", "daughter"]}]"#.parse().unwrap();
///
/// assert_eq!(match_params(&params, &query), vec![json!("x"), json!(1), json!(2)]);
/// ```
pub fn match_params(params: &Params, query: &Query) -> Matched {
	// Lenient drilling has no failure path.
	Matcher::new().matches(params, query).unwrap_or_default()
}

/// Walks a [`Query`] over [`Params`] depth-first, left to right.
///
/// - a key appends the value at the current level, or null
/// - a sequence runs each query against the current level
/// - a mapping drills into each key, or substitutes the default literal when
///   the sub-query is a [`DefaultValue`] and the key is absent or null
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
	config: MatcherConfig,
}

impl Matcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: MatcherConfig) -> Self {
		Self { config }
	}

	/// Shorthand for a matcher using [`DrillPolicy::Strict`].
	pub fn strict() -> Self {
		Self::with_config(MatcherConfig::new().with_drill(DrillPolicy::Strict))
	}

	pub fn config(&self) -> &MatcherConfig {
		&self.config
	}

	/// Match `query` against `params`.
	///
	/// Only fails under [`DrillPolicy::Strict`], when a mapping query meets a
	/// value that is neither a mapping nor null nor `false`.
	pub fn matches(&self, params: &Params, query: &Query) -> ParamsResult<Matched> {
		let mut out = Vec::new();
		let mut path = Vec::new();
		self.walk(params.as_map(), query, &mut path, &mut out)?;
		Ok(Matched::from(out))
	}

	fn walk<'q>(
		&self,
		level: &Map<String, Value>,
		query: &'q Query,
		path: &mut Vec<&'q str>,
		out: &mut Vec<Value>,
	) -> ParamsResult<()> {
		match query {
			Query::Key(key) => {
				out.push(level.get(key).cloned().unwrap_or(Value::Null));
			}
			Query::Seq(queries) => {
				for query in queries {
					self.walk(level, query, path, out)?;
				}
			}
			Query::Map(entries) => {
				for (key, sub) in entries {
					let value = level.get(key).filter(|v| !v.is_null());

					if let Some(default) = DefaultValue::recognize(sub) {
						if value.is_none() {
							tracing::trace!(key = %key, ?default, "substituting default");
						}
						out.push(value.cloned().unwrap_or_else(|| default.to_value()));
						continue;
					}

					path.push(key);
					let nested = self.drill(value, path)?;
					self.walk(nested, sub, path, out)?;
					path.pop();
				}
			}
		}
		Ok(())
	}

	fn drill<'p>(
		&self,
		value: Option<&'p Value>,
		path: &[&str],
	) -> ParamsResult<&'p Map<String, Value>> {
		match value {
			Some(Value::Object(map)) => Ok(map),
			// `false` drills like an absent branch
			None | Some(Value::Bool(false)) => Ok(&*EMPTY),
			Some(other) => match self.config.drill {
				DrillPolicy::Lenient => {
					tracing::trace!(
						path = %path.join("."),
						found = type_name(other),
						"drilling into a non-mapping value, treating it as empty"
					);
					Ok(&*EMPTY)
				}
				DrillPolicy::Strict => {
					let path = path.join(".");
					tracing::debug!(path = %path, found = type_name(other), "cannot drill into value");
					Err(ParamsError::NotAMapping {
						path,
						found: type_name(other),
					})
				}
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn family() -> Params {
		Params::from_value(json!({
			"clan": "cosa nostra",
			"family": {"son": 1, "daughter": 2},
		}))
		.unwrap()
	}

	fn query(value: Value) -> Query {
		Query::from_value(value).unwrap()
	}

	#[rstest]
	fn test_leaf_present(family: Params) {
		let matched = match_params(&family, &Query::key("clan"));

		assert_eq!(matched, vec![json!("cosa nostra")]);
	}

	#[rstest]
	fn test_leaf_absent_is_null(family: Params) {
		let matched = match_params(&family, &Query::key("loner"));

		assert_eq!(matched, vec![Value::Null]);
	}

	#[rstest]
	fn test_nested_sequence(family: Params) {
		let matched = match_params(&family, &query(json!({"family": ["son", "daughter"]})));

		assert_eq!(matched, vec![json!(1), json!(2)]);
	}

	#[rstest]
	fn test_mapping_entries_in_order(family: Params) {
		// Arrange
		let q = query(json!([{"family": ["daughter", "son"]}, "clan"]));

		// Act
		let matched = match_params(&family, &q);

		// Assert
		assert_eq!(matched, vec![json!(2), json!(1), json!("cosa nostra")]);
	}

	#[rstest]
	fn test_default_replaces_null_value() {
		// Arrange
		let params = Params::from_value(json!({"kids": null})).unwrap();

		// Act
		let matched = match_params(&params, &query(json!({"kids": []})));

		// Assert
		assert_eq!(matched, vec![json!([])]);
	}

	#[rstest]
	fn test_default_keeps_present_value_of_any_shape() {
		let params = Params::from_value(json!({"families": [1, 2]})).unwrap();

		let matched = match_params(&params, &query(json!({"families": {}})));

		assert_eq!(matched, vec![json!([1, 2])]);
	}

	#[rstest]
	fn test_drill_through_null_branch() {
		let params = Params::from_value(json!({"dad": null})).unwrap();

		let matched = match_params(&params, &query(json!({"dad": "son"})));

		assert_eq!(matched, vec![Value::Null]);
	}

	#[rstest]
	fn test_lenient_drill_into_scalar(family: Params) {
		let matched = Matcher::new()
			.matches(&family, &query(json!({"clan": ["name", {"codes": {}}]})))
			.unwrap();

		assert_eq!(matched, vec![Value::Null, json!({})]);
	}

	#[rstest]
	fn test_strict_drill_into_scalar_reports_path() {
		// Arrange
		let params = Params::from_value(json!({"user": {"address": "Kyoto"}})).unwrap();
		let q = query(json!({"user": {"address": "city"}}));

		// Act
		let result = Matcher::strict().matches(&params, &q);

		// Assert
		match result {
			Err(ParamsError::NotAMapping { path, found }) => {
				assert_eq!(path, "user.address");
				assert_eq!(found, "string");
			}
			other => panic!("expected NotAMapping, got {other:?}"),
		}
	}

	#[rstest]
	fn test_strict_drill_through_missing_and_null_branches() {
		let params = Params::from_value(json!({"dad": null})).unwrap();
		let q = query(json!([{"dad": "son"}, {"mom": {"daughter": "name"}}]));

		let matched = Matcher::strict().matches(&params, &q).unwrap();

		assert_eq!(matched, vec![Value::Null, Value::Null]);
	}

	#[rstest]
	#[case(Matcher::new())]
	#[case(Matcher::strict())]
	fn test_drill_through_false_branch(#[case] matcher: Matcher) {
		let params = Params::from_value(json!({"dad": false, "mom": true})).unwrap();

		let matched = matcher.matches(&params, &query(json!({"dad": "son"}))).unwrap();

		assert_eq!(matched, vec![Value::Null]);
	}

	#[rstest]
	fn test_strict_drill_into_true_fails() {
		let params = Params::from_value(json!({"mom": true})).unwrap();

		let result = Matcher::strict().matches(&params, &query(json!({"mom": "daughter"})));

		assert!(matches!(
			result,
			Err(ParamsError::NotAMapping { found: "boolean", .. })
		));
	}

	#[rstest]
	fn test_strict_default_on_scalar_is_not_a_drill(family: Params) {
		let matched = Matcher::strict()
			.matches(&family, &query(json!({"clan": []})))
			.unwrap();

		assert_eq!(matched, vec![json!("cosa nostra")]);
	}

	#[rstest]
	fn test_empty_sequence_query_matches_nothing(family: Params) {
		let matched = match_params(&family, &Query::empty_seq());

		assert!(matched.is_empty());
	}
}
