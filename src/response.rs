//! Uniform response envelope returned by every resource call.

// self
use crate::{_prelude::*, http::HttpResponse};

/// Decoded response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
	/// Body parsed as JSON.
	Json(Value),
	/// Non-JSON body, decoded lossily as UTF-8.
	Text(String),
	/// No body.
	Empty,
}
impl ResponseBody {
	/// Decodes raw bytes, preferring JSON.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		if bytes.iter().all(u8::is_ascii_whitespace) {
			return Self::Empty;
		}

		match serde_json::from_slice(bytes) {
			Ok(value) => Self::Json(value),
			Err(_) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
		}
	}
}

/// Status, headers, and body of a completed call.
///
/// Non-2xx statuses are ordinary values; inspect [`ApiResponse::status`] or
/// [`ApiResponse::is_success`] to decide what to do with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers keyed by lower-cased name.
	pub headers: BTreeMap<String, String>,
	/// Decoded body.
	pub body: ResponseBody,
}
impl ApiResponse {
	/// Normalizes a transport response.
	pub fn from_http(response: HttpResponse) -> Self {
		Self {
			status: response.status,
			body: ResponseBody::from_bytes(&response.body),
			headers: response.headers,
		}
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns a header value, ignoring ASCII case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	/// JSON body, if the body parsed as JSON.
	pub fn json(&self) -> Option<&Value> {
		match &self.body {
			ResponseBody::Json(value) => Some(value),
			_ => None,
		}
	}

	/// Total collection size from the `Total-Count` header, used for paging.
	pub fn total_count(&self) -> Option<u64> {
		self.header("total-count")?.trim().parse().ok()
	}
}
impl Display for ApiResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.status)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bodies_are_decoded_by_content() {
		let json = ApiResponse::from_http(
			HttpResponse::new(200).with_header("Total-Count", "12").with_body(r#"[{"id":1}]"#),
		);

		assert_eq!(json.json(), Some(&serde_json::json!([{ "id": 1 }])));
		assert_eq!(json.total_count(), Some(12));
		assert_eq!(json.header("TOTAL-COUNT"), Some("12"));
		assert_eq!(json.to_string(), "200");

		let text = ApiResponse::from_http(HttpResponse::new(502).with_body("Bad Gateway"));

		assert_eq!(text.body, ResponseBody::Text("Bad Gateway".into()));
		assert!(!text.is_success());
		assert_eq!(ApiResponse::from_http(HttpResponse::new(204)).body, ResponseBody::Empty);
	}
}
