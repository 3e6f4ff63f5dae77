//! Per-call resource inputs: instance id, JSON body, and query parameters.

// self
use crate::_prelude::*;

/// Per-call inputs for a resource operation: instance id, JSON body, and query parameters.
///
/// Each call owns its own value, so parameters never leak from one call into the next.
///
/// ```
/// use zerion_api::{ResourceRequest, serde_json::json};
///
/// let request = ResourceRequest::new()
/// 	.id(42)
/// 	.param("fields", "name,email")
/// 	.body(json!({ "email": "updated@example.com" }));
///
/// assert_eq!(request.instance_id.as_deref(), Some("42"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRequest {
	/// Identifier appended after the expanded template (e.g. a user id).
	pub instance_id: Option<String>,
	/// JSON body sent with POST and PUT.
	pub body: Option<Value>,
	/// Query parameters in insertion order; `None` values are skipped.
	pub params: Vec<(String, Option<String>)>,
}
impl ResourceRequest {
	/// Creates an empty request (collection-level, no body, no query).
	pub fn new() -> Self {
		Self::default()
	}

	/// Targets a single resource instance.
	pub fn id(mut self, id: impl Display) -> Self {
		self.instance_id = Some(id.to_string());

		self
	}

	/// Targets an instance when `id` is `Some`.
	pub fn maybe_id<D>(mut self, id: Option<D>) -> Self
	where
		D: Display,
	{
		self.instance_id = id.map(|value| value.to_string());

		self
	}

	/// Sets the JSON body.
	pub fn body(mut self, body: Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Appends a query parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.params.push((key.into(), Some(value.to_string())));

		self
	}

	/// Appends a query parameter that is skipped when `value` is `None`.
	pub fn maybe_param<D>(mut self, key: impl Into<String>, value: Option<D>) -> Self
	where
		D: Display,
	{
		self.params.push((key.into(), value.map(|value| value.to_string())));

		self
	}
}
