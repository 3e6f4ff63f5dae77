mod common;

// crates.io
use serde_json::json;
use url::Url;
// self
use common::*;
use zerion_api::{
	Error, ResourceRequest,
	config::ClientOptions,
	error::ConfigError,
	http::HttpResponse,
	resource::{Method, MethodSet, ResourceDescription},
};

const IFB_HOST: &str = "https://api.iformbuilder.com/exzact/api/v80/acme";

fn transport_with(calls: usize) -> std::sync::Arc<ScriptedTransport> {
	let transport = ScriptedTransport::new();

	transport.push_token_ok("tok");

	for _ in 0..calls {
		transport.push_call(HttpResponse::new(200).with_body("{}"));
	}

	transport
}

#[test]
fn typed_methods_expand_templates_ids_and_queries() {
	let transport = transport_with(2);
	let ifb = build_ifb(&transport, ClientOptions::default());

	ifb.users("get", 123, ResourceRequest::new().id(9).param("fields", "email,username"))
		.expect("GET Users is allowed.");
	ifb.element_localizations(
		"PUT",
		1,
		2,
		3,
		ResourceRequest::new().id("es").body(json!({ "label": "Nombre" })),
	)
	.expect("PUT ElementLocalizations is allowed.");

	let calls = transport.resource_requests();

	assert_eq!(calls[0].method, Method::Get);
	assert_eq!(calls[0].url, format!("{IFB_HOST}/profiles/123/users/9?fields=email%2Cusername&"));
	assert_eq!(calls[0].body, None);
	assert_eq!(calls[1].url, format!("{IFB_HOST}/profiles/1/pages/2/elements/3/localizations/es"));
	assert_eq!(calls[1].body.as_deref(), Some(br#"{"label":"Nombre"}"#.as_slice()));
}

#[test]
fn capability_checks_run_before_any_request() {
	let transport = transport_with(0);
	let ifb = build_ifb(&transport, ClientOptions::default());

	assert!(matches!(
		ifb.profiles("DELETE", ResourceRequest::new().id(1)),
		Err(Error::MethodNotAllowed { method, resource })
			if method == "DELETE" && resource == "Profiles"
	));
	assert!(matches!(
		ifb.users("patch", 1, ResourceRequest::new()),
		Err(Error::MethodNotAllowed { method, .. }) if method == "PATCH"
	));
	assert!(matches!(
		ifb.records("copy", 1, 2, ResourceRequest::new()),
		Err(Error::InvalidMethod { method }) if method == "COPY"
	));
	assert!(matches!(
		ifb.call_resource("NoSuchResource", "GET", &["1"], ResourceRequest::new()),
		Err(Error::Config(ConfigError::UnknownResource { .. }))
	));
	assert!(matches!(
		ifb.call_resource("Pages", "GET", &["1", "2"], ResourceRequest::new()),
		Err(Error::Config(ConfigError::PathArity { expected: 1, supplied: 2, .. }))
	));
	assert!(transport.resource_requests().is_empty());
	assert_eq!(ifb.api_calls(), 0);
}

#[test]
fn descriptions_list_the_catalog() {
	let transport = transport_with(0);
	let ifb = build_ifb(&transport, ClientOptions::default());
	let dfa = build_dfa(&transport, ClientOptions::default());

	assert_eq!(ifb.describe_resources().len(), 32);
	assert_eq!(dfa.describe_resources().len(), 6);
	assert_eq!(ifb.describe_resource("NoSuchResource"), ResourceDescription::NotDefined);
	assert!(!dfa.describe_resource("NoSuchResource").is_defined());
	assert!(ifb.describe_resources().values().all(ResourceDescription::is_defined));
	assert_eq!(
		ifb.describe_resource("PageRecordAssignments"),
		ResourceDescription::Defined {
			methods: MethodSet::EMPTY.with(Method::Get).with(Method::Delete),
			template: "profiles/{}/pages/{}/record_assignments".into(),
		}
	);
	assert_eq!(
		dfa.describe_resource("Records").to_string(),
		"[DELETE] dataflows/{}/recordsets/{}/records"
	);
}

#[test]
fn dfa_link_helper_sends_a_pushrs_action() {
	let transport = transport_with(1);
	let dfa = build_dfa(&transport, ClientOptions::default().with_qa(true));

	dfa.link_record_sets("POST", "df-1", "rs-1", "rs-2")
		.expect("POST RecordSetLinks is allowed.");

	let call = &transport.resource_requests()[0];
	let body: serde_json::Value = serde_json::from_slice(
		call.body.as_deref().expect("Link requests should carry a body."),
	)
	.expect("Link body should be JSON.");

	assert_eq!(
		call.url,
		"https://qa-dataflownode.zerionsoftware.com/zcrypt/v1.0/dataflows/df-1/recordsets/rs-1/postactions"
	);
	assert_eq!(body, json!({ "actionType": "pushrs", "actionOutputRecordSetId": "rs-2" }));
	assert_eq!(
		transport.token_requests()[0].url,
		"https://qa-identity.zerionsoftware.com/oauth2/token"
	);
}

#[test]
fn private_media_is_a_bodyless_get() {
	let transport = transport_with(1);
	let ifb = build_ifb(&transport, ClientOptions::default());

	ifb.private_media_url("GET", 7, Some("https://cdn.example.com/a.png"))
		.expect("GET PrivateMedia is allowed.");

	let call = &transport.resource_requests()[0];

	assert_eq!(call.url, format!("{IFB_HOST}/profiles/7/media"));
	assert_eq!(call.body, None);
}

#[test]
fn host_override_replaces_the_computed_host() {
	let transport = transport_with(1);
	let host = Url::parse("http://127.0.0.1:8080/mock/").expect("Override URL should parse.");
	let ifb = build_ifb(&transport, ClientOptions::default().with_host(host));

	assert_eq!(ifb.host(), "http://127.0.0.1:8080/mock");

	ifb.profiles("GET", ResourceRequest::new().maybe_param::<u32>("offset", None))
		.expect("GET Profiles is allowed.");

	assert_eq!(transport.resource_requests()[0].url, "http://127.0.0.1:8080/mock/profiles?");
}
