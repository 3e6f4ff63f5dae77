//! Dataflow Automation (DFA) client and resource catalog.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	resource::ResourceRequest,
	response::ApiResponse,
};
#[cfg(feature = "reqwest")]
use crate::{auth::Credentials, config::ClientOptions, http::ReqwestHttpClient};

/// Dataflow Automation client.
pub struct Dfa<T>(pub(crate) ApiClient<T>)
where
	T: HttpTransport;
impl<T> Dfa<T>
where
	T: HttpTransport,
{
	/// Links a record set to a destination record set with a `pushrs` post action.
	pub fn link_record_sets(
		&self,
		method: &str,
		dataflow_id: impl Display,
		record_set_id: impl Display,
		destination_record_set_id: impl Display,
	) -> Result<ApiResponse> {
		self.record_set_links(
			method,
			dataflow_id,
			record_set_id,
			ResourceRequest::new().body(serde_json::json!({
				"actionType": "pushrs",
				"actionOutputRecordSetId": destination_record_set_id.to_string(),
			})),
		)
	}
}
#[cfg(feature = "reqwest")]
impl Dfa<ReqwestHttpClient> {
	/// Creates a client backed by a fresh blocking reqwest transport.
	pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self> {
		ApiClient::builder(credentials, ReqwestHttpClient::new()?)
			.with_options(options)
			.build_dfa()
	}
}
impl<T> Deref for Dfa<T>
where
	T: HttpTransport,
{
	type Target = ApiClient<T>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl<T> Debug for Dfa<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Dfa").field(&self.0).finish()
	}
}

def_resources! {
	/// DFA capability table.
	pub const DFA_RESOURCES for Dfa;

	/// Dataflows.
	"Dataflows" => fn dataflows() [Post, Get, Put, Delete] "dataflows";
	/// Record sets of a dataflow.
	"RecordSets" => fn record_sets(dataflow_id) [Post, Get, Put, Delete] "dataflows/{}/recordsets";
	/// Record set links; see [`Dfa::link_record_sets`].
	"RecordSetLinks" => fn record_set_links(dataflow_id, record_set_id)
		[Post] "dataflows/{}/recordsets/{}/postactions";
	/// Records of a record set.
	"Records" => fn records(dataflow_id, record_set_id)
		[Delete] "dataflows/{}/recordsets/{}/records";
	/// Webhooks of a record set.
	"Webhooks" => fn webhooks(dataflow_id, record_set_id)
		[Post, Get, Put, Delete] "dataflows/{}/recordsets/{}/webhooks";
	/// Post actions of a record set.
	"Actions" => fn actions(dataflow_id, record_set_id)
		[Post, Get, Put, Delete] "dataflows/{}/recordsets/{}/postactions";
}
