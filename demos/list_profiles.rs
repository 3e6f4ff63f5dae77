//! Lists IFB profiles page by page against a local mock server, using the blocking reqwest
//! transport and the `Total-Count` header to drive paging.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use zerion_api::{
	ApiClient, ClientOptions, ResourceRequest, auth::Credentials, http::ReqwestHttpClient,
};

const PAGE_SIZE: u64 = 2;

fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start();
	let token_mock = server.mock(|when, then| {
		when.method(POST).path("/oauth2/token");
		then.status(200)
			.header("content-type", "application/json")
			.body("{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":3600}");
	});
	let first_page = server.mock(|when, then| {
		when.method(GET).path("/exzact/api/v80/demo/profiles").query_param("offset", "0");
		then.status(200)
			.header("Total-Count", "3")
			.body("[{\"id\":1,\"name\":\"Acme\"},{\"id\":2,\"name\":\"Globex\"}]");
	});
	let second_page = server.mock(|when, then| {
		when.method(GET).path("/exzact/api/v80/demo/profiles").query_param("offset", "2");
		then.status(200).header("Total-Count", "3").body("[{\"id\":3,\"name\":\"Initech\"}]");
	});
	let options = ClientOptions::default()
		.with_host(Url::parse(&server.url("/exzact/api/v80/demo"))?)
		.with_token_endpoint(Url::parse(&server.url("/oauth2/token"))?);
	// The mock server presents a self-signed certificate.
	let http = reqwest::blocking::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()?;
	let ifb = ApiClient::builder(
		Credentials::new("demo", "demo-key", "demo-secret"),
		ReqwestHttpClient::with_client(http),
	)
	.with_options(options)
	.build_ifb()?;
	let mut offset = 0;

	loop {
		let page = ifb.profiles(
			"GET",
			ResourceRequest::new()
				.param("fields", "name")
				.param("limit", PAGE_SIZE)
				.param("offset", offset),
		)?;

		for profile in page.json().and_then(|body| body.as_array()).into_iter().flatten() {
			println!("Profile {}: {}.", profile["id"], profile["name"]);
		}

		offset += PAGE_SIZE;

		if offset >= page.total_count().unwrap_or_default() {
			break;
		}
	}

	println!("Made {} API calls in this session.", ifb.api_calls());

	token_mock.assert();
	first_page.assert();
	second_page.assert();

	Ok(())
}
