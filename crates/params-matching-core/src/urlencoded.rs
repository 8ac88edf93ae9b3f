//! Bracket-nested `application/x-www-form-urlencoded` decoding.
//!
//! Keys follow the common web convention:
//!
//! - `name=value` sets a top-level value (a repeated key keeps the last value)
//! - `user[name]=value` nests into mappings, up to [`MAX_DEPTH`] segments
//! - `ids[]=value` appends to a list; `[]` may only close a key
//!
//! All leaf values are strings.

use serde_json::{Map, Value};

use crate::error::{ParamsError, ParamsResult};

/// Bracketed segments allowed in one key, as in Rack's `param_depth_limit`.
pub(crate) const MAX_DEPTH: usize = 32;

#[derive(Debug, PartialEq)]
enum Segment<'a> {
	Name(&'a str),
	Push,
}

pub(crate) fn decode(input: &str) -> ParamsResult<Map<String, Value>> {
	let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)?;

	let mut root = Map::new();
	for (key, value) in pairs {
		let (base, segments) = parse_key(&key)?;
		tracing::trace!(key = %key, depth = segments.len(), "decoding parameter");
		assign(&mut root, &key, base, &segments, value)?;
	}
	Ok(root)
}

/// Split `a[b][]` into its base name and the bracketed segments that follow.
fn parse_key(raw: &str) -> ParamsResult<(&str, Vec<Segment<'_>>)> {
	let malformed = || ParamsError::MalformedKey {
		key: raw.to_string(),
	};

	let (base, mut rest) = match raw.find('[') {
		Some(idx) => raw.split_at(idx),
		None => (raw, ""),
	};
	if base.is_empty() || base.contains(']') {
		return Err(malformed());
	}

	let mut segments = Vec::new();
	while !rest.is_empty() {
		let inner = rest.strip_prefix('[').ok_or_else(malformed)?;
		let close = inner.find(']').ok_or_else(malformed)?;
		let name = &inner[..close];
		if name.contains('[') || segments.last() == Some(&Segment::Push) {
			return Err(malformed());
		}
		segments.push(if name.is_empty() {
			Segment::Push
		} else {
			Segment::Name(name)
		});
		rest = &inner[close + 1..];
		if segments.len() > MAX_DEPTH {
			tracing::debug!(limit = MAX_DEPTH, "parameter key nested too deeply");
			return Err(ParamsError::TooDeep {
				key: raw.to_string(),
				limit: MAX_DEPTH,
			});
		}
	}

	Ok((base, segments))
}

fn assign(
	map: &mut Map<String, Value>,
	raw: &str,
	name: &str,
	rest: &[Segment<'_>],
	value: String,
) -> ParamsResult<()> {
	let conflict = || {
		tracing::debug!(key = %raw, "parameter key conflicts with an earlier one");
		ParamsError::ConflictingKey {
			key: raw.to_string(),
		}
	};

	match rest.split_first() {
		None => match map.get(name) {
			Some(Value::Object(_)) | Some(Value::Array(_)) => Err(conflict()),
			_ => {
				map.insert(name.to_string(), Value::String(value));
				Ok(())
			}
		},
		Some((Segment::Push, _)) => {
			let slot = map
				.entry(name.to_string())
				.or_insert_with(|| Value::Array(Vec::new()));
			match slot {
				Value::Array(items) => {
					items.push(Value::String(value));
					Ok(())
				}
				_ => Err(conflict()),
			}
		}
		Some((Segment::Name(next), tail)) => {
			let slot = map
				.entry(name.to_string())
				.or_insert_with(|| Value::Object(Map::new()));
			match slot {
				Value::Object(inner) => assign(inner, raw, next, tail, value),
				_ => Err(conflict()),
			}
		}
	}
}
