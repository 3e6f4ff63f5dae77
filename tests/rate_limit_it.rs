mod common;

// crates.io
use time::{Duration, OffsetDateTime};
// self
use common::*;
use zerion_api::{
	ApiClient,
	clock::{Clock, ManualClock},
	config::ClientOptions,
	ext::{FixedDelay, RateLimitContext, RateLimitDecision, RateLimitPolicy, RetryDirective},
	http::HttpResponse,
	platform::PlatformKind,
};

const DATAFLOWS: &str = "https://dataflownode.zerionsoftware.com/zcrypt/v1.0/dataflows";

struct RetryAt(OffsetDateTime);
impl RateLimitPolicy for RetryAt {
	fn evaluate(&self, _: &RateLimitContext) -> RateLimitDecision {
		RateLimitDecision::Delay(RetryDirective::at(self.0).with_reason("Quota window resets."))
	}
}

#[test]
fn without_retry_a_429_is_returned_after_one_attempt() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport.push_call(HttpResponse::new(429)).push_call(HttpResponse::new(200));

	let clock = ManualClock::new(EPOCH);
	let client = build_client(PlatformKind::Dfa, &transport, &clock, ClientOptions::default());
	let response = client.execute("GET", DATAFLOWS, None).expect("429 is a response.");

	assert_eq!(response.status, 429);
	assert_eq!(response.to_string(), "429");
	assert_eq!(client.api_calls(), 1);
	assert_eq!(clock.now(), EPOCH);
}

#[test]
fn with_retry_the_call_waits_a_minute_and_is_reissued() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(200).with_body(r#"[{"id":"df-1"}]"#));

	let clock = ManualClock::new(EPOCH);
	let options = ClientOptions::default().with_rate_limit_retry(true);
	let client = build_client(PlatformKind::Dfa, &transport, &clock, options);
	let response = client.execute("GET", DATAFLOWS, None).expect("Retry should succeed.");

	assert_eq!(response.status, 200);
	assert_eq!(client.api_calls(), 2);
	assert_eq!(clock.now(), EPOCH + Duration::seconds(60));
	assert!(client.last_elapsed().is_some());

	let calls = transport.resource_requests();

	assert_eq!(calls.len(), 2);
	assert_eq!(calls[0], calls[1]);
}

#[test]
fn retried_posts_resend_the_same_body() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(201));

	let clock = ManualClock::new(EPOCH);
	let options = ClientOptions::default().with_rate_limit_retry(true);
	let client = build_client(PlatformKind::Dfa, &transport, &clock, options);
	let body = serde_json::json!({ "name": "Nightly export" });
	let response = client.execute("POST", DATAFLOWS, Some(&body)).expect("Retry should succeed.");

	assert_eq!(response.status, 201);
	assert_eq!(client.api_calls(), 3);

	for call in transport.resource_requests() {
		assert_eq!(call.body.as_deref(), Some(br#"{"name":"Nightly export"}"#.as_slice()));
	}
}

#[test]
fn bounded_policy_gives_up_and_returns_the_429() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(200));

	let clock = ManualClock::new(EPOCH);
	let client = ApiClient::<ScriptedTransport>::builder(credentials(), transport.clone())
		.with_clock(clock.clone())
		.with_options(ClientOptions::default().with_rate_limit_retry(true))
		.with_rate_limit_policy(FixedDelay::new(Duration::seconds(1)).with_max_attempts(2))
		.build(PlatformKind::Dfa)
		.expect("Scripted client should build.");
	let response = client.execute("GET", DATAFLOWS, None).expect("429 is a response.");

	assert_eq!(response.status, 429);
	assert_eq!(client.api_calls(), 2);
	assert_eq!(clock.now(), EPOCH + Duration::seconds(1));
}

#[test]
fn retry_after_hint_is_honored_when_requested() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport
		.push_call(HttpResponse::new(429).with_header("Retry-After", "5"))
		.push_call(HttpResponse::new(200));

	let clock = ManualClock::new(EPOCH);
	let client = ApiClient::<ScriptedTransport>::builder(credentials(), transport.clone())
		.with_clock(clock.clone())
		.with_options(ClientOptions::default().with_rate_limit_retry(true))
		.with_rate_limit_policy(FixedDelay::default().honoring_retry_after())
		.build(PlatformKind::Dfa)
		.expect("Scripted client should build.");

	client.execute("GET", DATAFLOWS, None).expect("Retry should succeed.");

	assert_eq!(clock.now(), EPOCH + Duration::seconds(5));
	assert_eq!(client.api_calls(), 2);
}

#[test]
fn executor_waits_until_the_directed_instant() {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");
	transport
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(429))
		.push_call(HttpResponse::new(200));

	let clock = ManualClock::new(EPOCH);
	let client = ApiClient::<ScriptedTransport>::builder(credentials(), transport.clone())
		.with_clock(clock.clone())
		.with_options(ClientOptions::default().with_rate_limit_retry(true))
		.with_rate_limit_policy(RetryAt(EPOCH + Duration::seconds(90)))
		.build(PlatformKind::Dfa)
		.expect("Scripted client should build.");
	let response = client.execute("GET", DATAFLOWS, None).expect("Retry should succeed.");

	// The second 429 arrives after the directed instant, so it is retried without waiting.
	assert_eq!(response.status, 200);
	assert_eq!(client.api_calls(), 3);
	assert_eq!(clock.now(), EPOCH + Duration::seconds(90));
}
