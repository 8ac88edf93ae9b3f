//! Controller params extraction tests
//!
//! These tests drive extraction the way a request handler does, through a
//! controller exposing its params via `ParamsSource`:
//! 1. Single values come back unwrapped, several as a list
//! 2. Callbacks run only when every extracted value is present
//! 3. Typed callbacks receive values positionally

use std::cell::RefCell;

use params_matching_core::{Params, Query};
use params_matching_extract::{Extracted, ParamsMatching, ParamsSource};
use rstest::rstest;
use serde_json::{Value, json};

struct ApplicationController {
	params: Params,
}

impl ParamsSource for ApplicationController {
	fn params(&self) -> &Params {
		&self.params
	}
}

// Helper mirroring a request handler: user params plus routing entries.
fn with_params(value: Value) -> ApplicationController {
	let mut params = Params::from_value(value).expect("fixture params must be an object");
	params.insert("controller", "application");
	params.insert("action", "fake_action");
	ApplicationController { params }
}

fn query(value: Value) -> Query {
	Query::from_value(value).expect("fixture query must be valid")
}

/// Records every invocation of the callback it hands out.
#[derive(Default)]
struct Recorder {
	calls: RefCell<Vec<Vec<Value>>>,
}

impl Recorder {
	fn callback(&self) -> impl FnOnce(Extracted) + '_ {
		move |extracted| self.calls.borrow_mut().push(extracted.into_vec())
	}

	fn calls(&self) -> Vec<Vec<Value>> {
		self.calls.borrow().clone()
	}
}

// ============================================================================
// Callback gating
// ============================================================================

#[rstest]
#[case(json!({"foo": 1}), json!("foo"), vec![json!(1)])]
#[case(json!({"dad": {"son": 1}}), json!({"dad": "son"}), vec![json!(1)])]
#[case(
	json!({"family": {"son": 1, "daughter": 2}}),
	json!({"family": ["son", "daughter"]}),
	vec![json!(1), json!(2)]
)]
#[case(json!({}), json!({"kids": []}), vec![json!([])])]
#[case(json!({}), json!({"kids": {}}), vec![json!({})])]
fn test_callback_invoked_with_present_values(
	#[case] params: Value,
	#[case] q: Value,
	#[case] expected: Vec<Value>,
) {
	// Arrange
	let controller = with_params(params);
	let recorder = Recorder::default();

	// Act
	let result = controller.params_then(&query(q), recorder.callback());

	// Assert
	assert!(result.is_some());
	assert_eq!(recorder.calls(), vec![expected]);
}

#[rstest]
#[case(json!({"foo": 1}), json!("bar"))]
#[case(json!({"dad": {"son": 1}}), json!({"mother": "daughter"}))]
#[case(json!({"family": {"son": 1, "daughter": 2}}), json!({"family": ["son", "loner"]}))]
fn test_callback_not_invoked_when_any_value_missing(#[case] params: Value, #[case] q: Value) {
	// Arrange
	let controller = with_params(params);
	let recorder = Recorder::default();

	// Act
	let result = controller.params_then(&query(q), recorder.callback());

	// Assert
	assert!(result.is_none());
	assert!(recorder.calls().is_empty());
}

#[rstest]
fn test_typed_callback_receives_positional_values() {
	// Arrange
	let controller = with_params(json!({
		"bookmark": {"target_type": "Post", "target_id": 42},
	}));
	let q = query(json!({"bookmark": ["target_type", "target_id"]}));

	// Act
	let created = controller
		.matching()
		.then_as(&q, |(target_type, target_id): (String, u64)| {
			format!("{target_type}:{target_id}")
		})
		.unwrap();

	// Assert
	assert_eq!(created.as_deref(), Some("Post:42"));
}

#[rstest]
fn test_typed_callback_reports_type_mismatch() {
	let controller = with_params(json!({"id": "not-a-number"}));

	let result = controller.matching().then_as(&Query::key("id"), |id: u64| id);

	assert!(result.is_err());
}

// ============================================================================
// Extraction without a callback
// ============================================================================

#[rstest]
fn test_single_param_is_plain_lookup() {
	let controller = with_params(json!({"foo": 1}));

	assert_eq!(
		controller.extract_params(&Query::key("foo")),
		Extracted::One(json!(1))
	);
}

#[rstest]
fn test_single_present_param_with_default_returns_param() {
	let controller = with_params(json!({"kids": [1, 2]}));

	let extracted = controller.extract_params(&query(json!({"kids": []})));

	assert_eq!(extracted.into_value(), json!([1, 2]));
}

#[rstest]
fn test_multiple_params_returned_in_order() {
	// Arrange
	let controller = with_params(json!({"foo": 1, "bar": 2}));

	// Act
	let extracted = controller.extract_params(&query(json!(["foo", "not_in_params", "bar"])));

	// Assert
	assert_eq!(
		extracted,
		Extracted::Many(vec![json!(1), Value::Null, json!(2)])
	);
}

#[rstest]
#[case(json!({"mom": "daughter"}))]
#[case(json!({"dad": "kiddie"}))]
#[case(json!({"grandpa": {"dad": "son"}}))]
fn test_missing_nested_param_is_null(#[case] q: Value) {
	let controller = with_params(json!({"dad": {"son": 1}}));

	assert_eq!(
		controller.extract_params(&query(q)),
		Extracted::One(Value::Null)
	);
}

#[rstest]
fn test_routing_entries_are_reachable() {
	let controller = with_params(json!({}));

	let extracted = controller.extract_params(&Query::seq(["controller", "action"]));

	assert_eq!(
		extracted,
		Extracted::Many(vec![json!("application"), json!("fake_action")])
	);
}

#[rstest]
fn test_raw_params_access() {
	let controller = with_params(json!({"foo": 1}));

	assert_eq!(controller.params().get("foo"), Some(&json!(1)));
	assert_eq!(controller.params().len(), 3);
}
