//! Flat result of a match.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Presence;

/// Values pulled out by a query, in the order its leaves were walked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matched(Vec<Value>);

impl Matched {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.0.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[Value] {
		&self.0
	}

	pub fn into_vec(self) -> Vec<Value> {
		self.0
	}

	/// Every value is non-null.
	pub fn all_present(&self) -> bool {
		self.all(Presence::NonNull)
	}

	/// Every value is non-blank (see [`Presence::NonBlank`]).
	pub fn all_non_blank(&self) -> bool {
		self.all(Presence::NonBlank)
	}

	pub fn all(&self, presence: Presence) -> bool {
		self.first_missing(presence).is_none()
	}

	/// Index of the first value failing `presence`.
	pub fn first_missing(&self, presence: Presence) -> Option<usize> {
		self.0.iter().position(|v| !presence.is_present(v))
	}
}

impl From<Vec<Value>> for Matched {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl From<Matched> for Vec<Value> {
	fn from(matched: Matched) -> Self {
		matched.0
	}
}

impl PartialEq<Vec<Value>> for Matched {
	fn eq(&self, other: &Vec<Value>) -> bool {
		&self.0 == other
	}
}

impl IntoIterator for Matched {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Matched {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
