//! # Params Matching
//!
//! Declarative extraction of values from nested web request params.
//!
//! Request handlers often reach several levels into their params and guard
//! every step against missing branches. A [`Query`] states the values wanted
//! once; matching returns them in order, resolves anything missing to null,
//! substitutes `[]` / `{}` defaults, and can run a callback only when every
//! value is present.
//!
//! ## Crates
//!
//! - [`core`] - [`Params`], [`Query`], [`Matcher`] and configuration
//! - [`extract`] - [`extract`](extract::extract), callback gating and the
//!   [`ParamsMatching`] accessor trait
//!
//! ## Feature Flags
//!
//! - `http` (default) - decode params from `http::Uri` and read them from
//!   `http::Request` extensions
//!
//! ## Quick Example
//!
//! ```rust
//! use params_matching::prelude::*;
//! use serde_json::json;
//!
//! let params = Params::from_value(json!({
//!     "old_password": "hunter2",
//!     "user": {"password": "s3cret", "password_confirmation": "s3cret"},
//! }))
//! .unwrap();
//!
//! // Only change the password when all three values are present
//! let query: Query = r#"["old_password", {"user": ["password", "password_confirmation"]}]"#
//!     .parse()
//!     .unwrap();
//! let changed = params
//!     .matching()
//!     .then_as(&query, |(old, new, confirmation): (String, String, String)| {
//!         old != new && new == confirmation
//!     })
//!     .unwrap();
//!
//! assert_eq!(changed, Some(true));
//! ```

pub mod core;
pub mod extract;

pub use params_matching_core::{
	DefaultValue, DrillPolicy, Matched, Matcher, MatcherConfig, Params, ParamsError,
	ParamsResult, Presence, Query, match_params,
};
pub use params_matching_extract::{
	Extracted, ParamsMatcher, ParamsMatching, ParamsSource, extract_then, extract_then_as,
};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```rust
/// use params_matching::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		Extracted, Matched, Matcher, MatcherConfig, Params, ParamsError, ParamsMatching,
		ParamsResult, ParamsSource, Presence, Query, extract_then, extract_then_as, match_params,
	};

	#[cfg(feature = "http")]
	pub use params_matching_extract::attach_query_params;
}
