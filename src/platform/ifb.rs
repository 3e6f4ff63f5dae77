//! iFormBuilder (IFB) client and resource catalog.

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

/// iFormBuilder client.
///
/// Every resource method takes the verb, the template's path values in order, and a
/// [`ResourceRequest`] carrying the optional instance id, body, and query parameters.
pub struct Ifb<T>(pub(crate) ApiClient<T>)
where
	T: HttpTransport;
impl<T> Ifb<T>
where
	T: HttpTransport,
{
	/// Calls `PrivateMedia` with the `{"URL": media_url}` body.
	pub fn private_media_url(
		&self,
		method: &str,
		profile_id: impl Display,
		media_url: Option<&str>,
	) -> Result<ApiResponse> {
		self.private_media(
			method,
			profile_id,
			ResourceRequest::new().body(serde_json::json!({ "URL": media_url })),
		)
	}
}
#[cfg(feature = "reqwest")]
impl Ifb<ReqwestHttpClient> {
	/// Creates a client backed by a fresh blocking reqwest transport.
	///
	/// A token is requested immediately; failure to obtain one is logged, not returned.
	///
	/// ```no_run
	/// use zerion_api::{ClientOptions, Ifb, ResourceRequest, auth::Credentials};
	///
	/// let ifb = Ifb::new(Credentials::new("acme", "key", "secret"), ClientOptions::default())?;
	/// let users = ifb.users("GET", 123456, ResourceRequest::new().param("fields", "email"))?;
	///
	/// println!("{users} with {:?} users", users.total_count());
	/// # Ok::<(), zerion_api::Error>(())
	/// ```
	pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self> {
		ApiClient::builder(credentials, ReqwestHttpClient::new()?)
			.with_options(options)
			.build_ifb()
	}
}
impl<T> Deref for Ifb<T>
where
	T: HttpTransport,
{
	type Target = ApiClient<T>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl<T> Debug for Ifb<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Ifb").field(&self.0).finish()
	}
}

def_resources! {
	/// IFB capability table.
	pub const IFB_RESOURCES for Ifb;

	/// Profiles; the instance id is a profile id.
	"Profiles" => fn profiles() [Post, Get, Put] "profiles";
	/// Company information of a profile.
	"CompanyInfo" => fn company_info(profile_id) [Get, Put] "profiles/{}/company_info";
	/// Users of a profile.
	"Users" => fn users(profile_id) [Post, Get, Put, Delete] "profiles/{}/users";
	/// Pages assigned to a user.
	"UserPageAssignments" => fn user_page_assignments(profile_id, user_id)
		[Post, Get, Put, Delete] "profiles/{}/users/{}/page_assignments";
	/// Records assigned to a user.
	"UserRecordAssignments" => fn user_record_assignments(profile_id, user_id)
		[Post, Get, Put, Delete] "profiles/{}/users/{}/record_assignments";
	/// User groups of a profile.
	"UserGroups" => fn user_groups(profile_id) [Post, Get, Put, Delete] "profiles/{}/user_groups";
	/// Users in a user group.
	"UserGroupUserAssignments" => fn user_group_user_assignments(profile_id, user_group_id)
		[Post, Get, Put, Delete] "profiles/{}/user_groups/{}/users";
	/// Pages assigned to a user group.
	"UserGroupPageAssignments" => fn user_group_page_assignments(profile_id, user_group_id)
		[Post, Get, Put, Delete] "profiles/{}/user_groups/{}/page_assignments";
	/// Pages (forms) of a profile.
	"Pages" => fn pages(profile_id) [Post, Get, Put, Delete] "profiles/{}/pages";
	/// Record feed of a page.
	"PageFeeds" => fn page_feeds(profile_id, page_id) [Get] "profiles/{}/pages/{}/feed";
	/// Localizations of a page; the instance id is a language code.
	"PageLocalizations" => fn page_localizations(profile_id, page_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/localizations";
	/// Users assigned to a page.
	"PageUserAssignments" => fn page_user_assignments(profile_id, page_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/assignments";
	/// Record assignments of a page.
	"PageRecordAssignments" => fn page_record_assignments(profile_id, page_id)
		[Get, Delete] "profiles/{}/pages/{}/record_assignments";
	/// HTTP callbacks of a page.
	"PageEndpoints" => fn page_endpoints(profile_id, page_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/http_callbacks";
	/// Email alerts of a page.
	"PageEmailAlerts" => fn page_email_alerts(profile_id, page_id)
		[Post, Get, Delete] "profiles/{}/pages/{}/email_alerts";
	/// Re-triggers posts for a page.
	"PageTriggerPost" => fn page_trigger_post(profile_id, page_id)
		[Post] "profiles/{}/pages/{}/trigger_posts";
	/// Shares of a page.
	"PageShares" => fn page_shares(profile_id, page_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/shared_page";
	/// Dynamic attributes of a page.
	"PageDynamicAttributes" => fn page_dynamic_attributes(profile_id, page_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/dynamic_attributes";
	/// Page groups of a profile.
	"PageGroups" => fn page_groups(profile_id) [Post, Get, Put, Delete] "profiles/{}/page_groups";
	/// Pages in a page group.
	"PageGroupAssignments" => fn page_group_assignments(profile_id, page_group_id)
		[Post, Get, Delete] "profiles/{}/page_groups/{}/pages";
	/// Users assigned to a page group.
	"PageGroupUserAssignments" => fn page_group_user_assignments(profile_id, page_group_id)
		[Post, Get, Put, Delete] "profiles/{}/page_groups/{}/assignments";
	/// Elements of a page.
	"Elements" => fn elements(profile_id, page_id)
		[Post, Get, Put, Delete, Copy] "profiles/{}/pages/{}/elements";
	/// Localizations of an element; the instance id is a language code.
	"ElementLocalizations" => fn element_localizations(profile_id, page_id, element_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/elements/{}/localizations";
	/// Dynamic attributes of an element.
	"ElementDynamicAttributes" => fn element_dynamic_attributes(profile_id, page_id, element_id)
		[Post, Get, Put, Delete] "profiles/{}/pages/{}/elements/{}/dynamic_attributes";
	/// Option lists of a profile.
	"OptionLists" => fn option_lists(profile_id)
		[Post, Get, Put, Delete, Copy] "profiles/{}/optionlists";
	/// Options of an option list.
	"Options" => fn option_list_options(profile_id, option_list_id)
		[Post, Get, Put, Delete] "profiles/{}/optionlists/{}/options";
	/// Localizations of an option; the instance id is a language code.
	"OptionLocalizations" => fn option_localizations(profile_id, option_list_id, option_id)
		[Post, Get, Put, Delete] "profiles/{}/optionlists/{}/options/{}/localizations";
	/// Records of a page.
	"Records" => fn records(profile_id, page_id)
		[Post, Get, Put, Delete, Copy] "profiles/{}/pages/{}/records";
	/// User assignments of a record.
	"RecordAssignments" => fn record_assignments(profile_id, page_id, record_id)
		[Post, Get, Delete] "profiles/{}/pages/{}/records/{}/assignments";
	/// Push notifications.
	"Notifications" => fn notifications(profile_id) [Post] "profiles/{}/notifications";
	/// Private media; see [`Ifb::private_media_url`].
	"PrivateMedia" => fn private_media(profile_id) [Get] "profiles/{}/media";
	/// Device licenses of a profile.
	"DeviceLicenses" => fn device_licenses(profile_id) [Get] "profiles/{}/licenses";
}
