//! # Params Matching Core
//!
//! Declarative extraction of values from nested request parameters.
//!
//! ## Overview
//!
//! A [`Query`] describes which values to pull out of [`Params`]:
//!
//! - a key reads one value (`"login"`)
//! - a sequence reads several (`["login", "password"]`)
//! - a mapping drills into nested params (`{"user": ["name", "email"]}`)
//! - an empty `[]` or `{}` under a mapping key is a default for a missing
//!   branch (`{"user_ids": []}`)
//!
//! [`match_params`] walks the query and returns every value in one flat
//! [`Matched`] sequence. Missing keys and missing branches resolve to null;
//! nothing panics on absent data.
//!
//! ## Examples
//!
//! ```
//! use params_matching_core::{Params, Query, match_params};
//! use serde_json::json;
//!
//! let params = Params::from_urlencoded(
//!     "country[state][name]=NY&kids[]=1&kids[]=2&clan=cosa+nostra",
//! )
//! .unwrap();
//! let query: Query = r#"[
//!     "kids",
//!     {"country": {"state": ["name", "population"]}, "families": [], "clan": []}
//! ]"#
//! .parse()
//! .unwrap();
//!
//! let matched = match_params(&params, &query);
//! assert_eq!(
//!     matched,
//!     vec![json!(["1", "2"]), json!("NY"), json!(null), json!([]), json!("cosa nostra")]
//! );
//! ```

pub mod config;
pub mod error;
pub mod matched;
pub mod matcher;
pub mod params;
pub mod query;
mod urlencoded;

pub use config::{DrillPolicy, MatcherConfig, Presence};
pub use error::{ParamsError, ParamsResult};
pub use matched::Matched;
pub use matcher::{Matcher, match_params};
pub use params::Params;
pub use query::{DefaultValue, Query};
