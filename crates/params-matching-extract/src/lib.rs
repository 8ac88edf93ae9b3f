//! # Params Matching Extract
//!
//! Caller-facing extraction built on [`params_matching_core`].
//!
//! ## Overview
//!
//! - [`extract`] returns a single value directly, or the ordered list when a
//!   query selects several
//! - [`extract_then`] invokes a callback only when *every* extracted value is
//!   present, which doubles as a sanity check on incoming params
//! - [`extract_then_as`] deserializes the values first, so a tuple receives
//!   them as positional arguments
//! - [`ParamsMatching`] adds the same operations to anything implementing
//!   [`ParamsSource`], such as a controller or an `http::Request`
//!
//! ## Examples
//!
//! ```
//! use params_matching_core::{Params, Query};
//! use params_matching_extract::extract_then_as;
//! use serde_json::json;
//!
//! let params = Params::from_urlencoded("login=alice&password=secret").unwrap();
//! let query = Query::seq(["login", "password"]);
//!
//! let authenticated = extract_then_as(&params, &query, |(login, password): (String, String)| {
//!     login == "alice" && password == "secret"
//! })
//! .unwrap();
//! assert_eq!(authenticated, Some(true));
//!
//! // `otp` is absent, so the callback never runs
//! let missing = extract_then_as(&params, &Query::seq(["login", "otp"]), |(login, _): (String, String)| {
//!     login
//! })
//! .unwrap();
//! assert_eq!(missing, None);
//! ```

pub mod accessor;
pub mod extract;
pub mod extracted;

#[cfg(feature = "http")]
pub use accessor::attach_query_params;
pub use accessor::{ParamsMatcher, ParamsMatching, ParamsSource};
pub use extract::{extract, extract_then, extract_then_as};
pub use extracted::Extracted;
