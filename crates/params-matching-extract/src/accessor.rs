//! Composition with an existing parameter accessor.
//!
//! Any type that can hand out its [`Params`] implements [`ParamsSource`]
//! and gains the [`ParamsMatching`] methods through a blanket impl:
//!
//! ```
//! use params_matching_core::{Params, Query};
//! use params_matching_extract::{ParamsMatching, ParamsSource};
//! use serde_json::json;
//!
//! struct UsersController {
//!     params: Params,
//! }
//!
//! impl ParamsSource for UsersController {
//!     fn params(&self) -> &Params {
//!         &self.params
//!     }
//! }
//!
//! let controller = UsersController {
//!     params: Params::from_value(json!({"user_id": 5})).unwrap(),
//! };
//!
//! let found = controller.params_then(&Query::key("user_id"), |id| id.into_value());
//! assert_eq!(found, Some(json!(5)));
//! ```

#[cfg(feature = "http")]
use std::sync::LazyLock;

use params_matching_core::{Matched, Matcher, MatcherConfig, Params, ParamsResult, Query};
use serde::de::DeserializeOwned;

use crate::extract::{self, call_typed, gate};
use crate::extracted::Extracted;

/// A value that exposes request params.
pub trait ParamsSource {
	fn params(&self) -> &Params;
}

impl ParamsSource for Params {
	fn params(&self) -> &Params {
		self
	}
}

impl<T: ParamsSource + ?Sized> ParamsSource for &T {
	fn params(&self) -> &Params {
		(**self).params()
	}
}

#[cfg(feature = "http")]
static EMPTY: LazyLock<Params> = LazyLock::new(Params::new);

/// Reads the [`Params`] stored in the request extensions; a request without
/// them exposes empty params.
#[cfg(feature = "http")]
impl<B> ParamsSource for http::Request<B> {
	fn params(&self) -> &Params {
		self.extensions().get::<Params>().unwrap_or(&*EMPTY)
	}
}

/// Decode the request's query string and store the result in its
/// extensions, replacing any params stored before.
#[cfg(feature = "http")]
pub fn attach_query_params<B>(request: &mut http::Request<B>) -> ParamsResult<()> {
	let params = Params::from_uri(request.uri())?;
	tracing::trace!(count = params.len(), "attaching query params to request");
	request.extensions_mut().insert(params);
	Ok(())
}

/// Matching methods for every [`ParamsSource`].
pub trait ParamsMatching: ParamsSource {
	/// Matcher over these params with the default configuration.
	fn matching(&self) -> ParamsMatcher<'_> {
		ParamsMatcher::new(self.params())
	}

	fn matching_with(&self, config: MatcherConfig) -> ParamsMatcher<'_> {
		ParamsMatcher::with_config(self.params(), config)
	}

	fn extract_params(&self, query: &Query) -> Extracted {
		extract::extract(self.params(), query)
	}

	/// See [`extract_then`](crate::extract_then).
	fn params_then<F, R>(&self, query: &Query, f: F) -> Option<R>
	where
		F: FnOnce(Extracted) -> R,
	{
		extract::extract_then(self.params(), query, f)
	}
}

impl<T: ParamsSource + ?Sized> ParamsMatching for T {}

/// Borrowed params paired with a configured [`Matcher`].
#[derive(Debug, Clone, Copy)]
pub struct ParamsMatcher<'a> {
	params: &'a Params,
	matcher: Matcher,
}

impl<'a> ParamsMatcher<'a> {
	pub fn new(params: &'a Params) -> Self {
		Self {
			params,
			matcher: Matcher::new(),
		}
	}

	pub fn with_config(params: &'a Params, config: MatcherConfig) -> Self {
		Self {
			params,
			matcher: Matcher::with_config(config),
		}
	}

	pub fn params(&self) -> &'a Params {
		self.params
	}

	pub fn matches(&self, query: &Query) -> ParamsResult<Matched> {
		self.matcher.matches(self.params, query)
	}

	pub fn extract(&self, query: &Query) -> ParamsResult<Extracted> {
		self.matches(query).map(Extracted::from)
	}

	/// Call `f` only if every extracted value passes the configured presence
	/// check.
	pub fn then<F, R>(&self, query: &Query, f: F) -> ParamsResult<Option<R>>
	where
		F: FnOnce(Extracted) -> R,
	{
		Ok(self.gated(query)?.map(f))
	}

	/// Like [`then`](Self::then), deserializing the values into `T` first.
	pub fn then_as<T, F, R>(&self, query: &Query, f: F) -> ParamsResult<Option<R>>
	where
		T: DeserializeOwned,
		F: FnOnce(T) -> R,
	{
		call_typed(self.gated(query)?, f)
	}

	fn gated(&self, query: &Query) -> ParamsResult<Option<Extracted>> {
		let matched = self.matches(query)?;
		Ok(gate(matched, self.matcher.config().presence))
	}
}
