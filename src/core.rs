//! Params, queries and the matcher.
//!
//! # Examples
//!
//! ```rust
//! use params_matching::core::{Matcher, Params, Query};
//! use serde_json::json;
//!
//! let params = Params::from_value(json!({"dad": {"son": 1}})).unwrap();
//! let matched = Matcher::strict()
//!     .matches(&params, &Query::map([("dad", "son")]))
//!     .unwrap();
//! assert_eq!(matched, vec![json!(1)]);
//! ```

pub use params_matching_core::*;
