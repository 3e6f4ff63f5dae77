//! URI template expansion and query encoding.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::{_prelude::*, error::ConfigError};

/// Placeholder token used by capability templates.
pub const PLACEHOLDER: &str = "{}";

/// Characters left as-is in query values: RFC 3986 unreserved plus `/`.
const QUERY_VALUE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~').remove(b'/');

/// Counts the `{}` placeholders in `template`.
pub fn count_placeholders(template: &str) -> usize {
	template.matches(PLACEHOLDER).count()
}

/// Substitutes `path_args` into the `{}` placeholders of `template`, in order.
///
/// The number of values must equal the number of placeholders.
pub fn expand_template<S>(template: &str, path_args: &[S]) -> Result<String, ConfigError>
where
	S: AsRef<str>,
{
	let expected = count_placeholders(template);

	if expected != path_args.len() {
		return Err(ConfigError::PathArity {
			template: template.to_owned(),
			expected,
			supplied: path_args.len(),
		});
	}

	let mut buf = String::with_capacity(template.len());
	let mut segments = template.split(PLACEHOLDER);

	if let Some(head) = segments.next() {
		buf.push_str(head);
	}
	for (value, segment) in path_args.iter().zip(segments) {
		buf.push_str(value.as_ref());
		buf.push_str(segment);
	}

	Ok(buf)
}

/// Builds `host/path[/instance_id][?k=v&...]`.
///
/// Query values are percent-encoded, keys are written as given, and pairs whose value is
/// `None` are skipped. Every written pair is followed by `&`, so a non-empty query ends with
/// a trailing separator the platforms tolerate.
pub fn build_uri<S, K, V>(
	host: &str,
	template: &str,
	path_args: &[S],
	instance_id: Option<&str>,
	params: &[(K, Option<V>)],
) -> Result<String, ConfigError>
where
	S: AsRef<str>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let path = expand_template(template, path_args)?;
	let mut uri = format!("{}/{path}", host.trim_end_matches('/'));

	if let Some(id) = instance_id {
		uri.push('/');
		uri.push_str(id);
	}
	if !params.is_empty() {
		uri.push('?');

		for (key, value) in params {
			if let Some(value) = value {
				uri.push_str(key.as_ref());
				uri.push('=');
				uri.extend(utf8_percent_encode(value.as_ref(), QUERY_VALUE_SET));
				uri.push('&');
			}
		}
	}

	Ok(uri)
}
