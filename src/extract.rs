//! Extraction, callback gating and accessor composition.

pub use params_matching_extract::*;
