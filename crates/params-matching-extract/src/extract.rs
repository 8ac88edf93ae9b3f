//! Extraction entry points using the default configuration: lenient drilling
//! and a non-null presence check.

use params_matching_core::{Matched, Params, ParamsResult, Presence, Query, match_params};
use serde::de::DeserializeOwned;

use crate::extracted::Extracted;

/// Extract the values selected by `query`.
///
/// # Examples
///
/// ```
/// use params_matching_core::{Params, Query};
/// use params_matching_extract::{Extracted, extract};
/// use serde_json::json;
///
/// let params = Params::from_value(json!({"login": "alice", "password": "secret"})).unwrap();
///
/// assert_eq!(extract(&params, &Query::key("login")), Extracted::One(json!("alice")));
/// assert_eq!(
///     extract(&params, &Query::seq(["login", "password"])),
///     Extracted::Many(vec![json!("alice"), json!("secret")]),
/// );
/// ```
pub fn extract(params: &Params, query: &Query) -> Extracted {
	Extracted::from(match_params(params, query))
}

/// Call `f` with the extracted values only if every one of them is non-null.
///
/// Returns `None` without calling `f` when any value is missing.
///
/// # Examples
///
/// ```
/// use params_matching_core::{Params, Query};
/// use params_matching_extract::extract_then;
/// use serde_json::json;
///
/// let params = Params::from_value(json!({"foo": 1})).unwrap();
///
/// assert_eq!(extract_then(&params, &Query::key("foo"), |v| v.into_value()), Some(json!(1)));
/// assert_eq!(extract_then(&params, &Query::key("bar"), |v| v.into_value()), None);
/// ```
pub fn extract_then<F, R>(params: &Params, query: &Query, f: F) -> Option<R>
where
	F: FnOnce(Extracted) -> R,
{
	gate(match_params(params, query), Presence::NonNull).map(f)
}

/// Like [`extract_then`], but deserializes the values into `T` first, so a
/// tuple receives them as positional arguments.
///
/// # Examples
///
/// ```
/// use params_matching_core::{Params, Query};
/// use params_matching_extract::extract_then_as;
/// use serde_json::json;
///
/// let params = Params::from_value(json!({"bookmark": {"target_type": "Post", "target_id": 9}}))
///     .unwrap();
/// let query = Query::map([("bookmark", Query::seq(["target_type", "target_id"]))]);
///
/// let created = extract_then_as(&params, &query, |(kind, id): (String, u64)| format!("{kind}#{id}"))
///     .unwrap();
/// assert_eq!(created.as_deref(), Some("Post#9"));
/// ```
pub fn extract_then_as<T, F, R>(params: &Params, query: &Query, f: F) -> ParamsResult<Option<R>>
where
	T: DeserializeOwned,
	F: FnOnce(T) -> R,
{
	call_typed(gate(match_params(params, query), Presence::NonNull), f)
}

/// Pass `matched` through when every value satisfies `presence`.
pub(crate) fn gate(matched: Matched, presence: Presence) -> Option<Extracted> {
	match matched.first_missing(presence) {
		Some(index) => {
			tracing::debug!(
				index,
				total = matched.len(),
				?presence,
				"extracted value missing, skipping callback"
			);
			None
		}
		None => Some(Extracted::from(matched)),
	}
}

pub(crate) fn call_typed<T, F, R>(gated: Option<Extracted>, f: F) -> ParamsResult<Option<R>>
where
	T: DeserializeOwned,
	F: FnOnce(T) -> R,
{
	match gated {
		Some(extracted) => Ok(Some(f(extracted.deserialize()?))),
		None => Ok(None),
	}
}
