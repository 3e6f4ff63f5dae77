//! Capability entries and the per-platform lookup table.

// std
use std::borrow::Cow;
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	resource::{Method, MethodSet, uri},
};

/// Declares one resource: its name, allowed verbs, and URI template.
///
/// Templates are paths relative to the platform host with ordered `{}` placeholders, e.g.
/// `profiles/{}/pages/{}/records`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityEntry {
	/// Resource name (e.g. `Profiles`).
	pub name: Cow<'static, str>,
	/// Allowed verbs.
	pub methods: MethodSet,
	/// URI template relative to the host.
	pub template: Cow<'static, str>,
}
impl CapabilityEntry {
	/// Creates an entry from static data, usable in `const` tables.
	pub const fn from_static(
		name: &'static str,
		methods: MethodSet,
		template: &'static str,
	) -> Self {
		Self { name: Cow::Borrowed(name), methods, template: Cow::Borrowed(template) }
	}

	/// Creates an entry from owned data.
	pub fn new(name: impl Into<String>, methods: MethodSet, template: impl Into<String>) -> Self {
		Self { name: Cow::Owned(name.into()), methods, template: Cow::Owned(template.into()) }
	}

	/// Returns `true` if `method` is allowed.
	pub fn allows(&self, method: Method) -> bool {
		self.methods.contains(method)
	}

	/// Validates `method` (case-insensitive) against the allowed verbs.
	pub fn check_method(&self, method: &str) -> Result<Method> {
		Method::parse(method).filter(|parsed| self.allows(*parsed)).ok_or_else(|| {
			Error::MethodNotAllowed {
				method: method.to_ascii_uppercase(),
				resource: self.name.to_string(),
			}
		})
	}

	/// Number of positional placeholders in the template.
	pub fn placeholders(&self) -> usize {
		uri::count_placeholders(&self.template)
	}

	/// Substitutes `path_args` into the template.
	pub fn expand<S>(&self, path_args: &[S]) -> Result<String, ConfigError>
	where
		S: AsRef<str>,
	{
		uri::expand_template(&self.template, path_args)
	}
}

/// Result of [`CapabilityTable::describe`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ResourceDescription {
	/// The resource exists.
	Defined {
		/// Allowed verbs.
		methods: MethodSet,
		/// URI template.
		template: String,
	},
	/// The platform does not declare the resource.
	NotDefined,
}
impl ResourceDescription {
	/// Returns `true` for [`ResourceDescription::Defined`].
	pub fn is_defined(&self) -> bool {
		matches!(self, Self::Defined { .. })
	}
}
impl Display for ResourceDescription {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Defined { methods, template } => write!(f, "[{methods}] {template}"),
			Self::NotDefined => f.write_str("Resource not defined"),
		}
	}
}

/// Immutable mapping of resource name to [`CapabilityEntry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilityTable(BTreeMap<String, CapabilityEntry>);
impl CapabilityTable {
	/// Builds a table; later entries replace earlier ones with the same name.
	pub fn new<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = CapabilityEntry>,
	{
		Self(entries.into_iter().map(|entry| (entry.name.to_string(), entry)).collect())
	}

	/// Builds a table from a static declaration.
	pub fn from_static(entries: &'static [CapabilityEntry]) -> Self {
		Self::new(entries.iter().cloned())
	}

	/// Declared resource names, sorted.
	pub fn resources(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Number of declared resources.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when the table is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Looks up an entry.
	pub fn get(&self, resource: &str) -> Option<&CapabilityEntry> {
		self.0.get(resource)
	}

	/// Looks up an entry, failing with [`ConfigError::UnknownResource`].
	pub fn entry(&self, resource: &str) -> Result<&CapabilityEntry> {
		self.get(resource)
			.ok_or_else(|| ConfigError::UnknownResource { resource: resource.to_owned() }.into())
	}

	/// Describes a resource; unknown names yield [`ResourceDescription::NotDefined`].
	pub fn describe(&self, resource: &str) -> ResourceDescription {
		match self.get(resource) {
			Some(entry) => ResourceDescription::Defined {
				methods: entry.methods,
				template: entry.template.to_string(),
			},
			None => ResourceDescription::NotDefined,
		}
	}

	/// Validates `method` for `resource`.
	pub fn check_method(&self, resource: &str, method: &str) -> Result<Method> {
		self.entry(resource)?.check_method(method)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn table() -> CapabilityTable {
		CapabilityTable::new([
			CapabilityEntry::new(
				"Profiles",
				MethodSet::EMPTY.with(Method::Get).with(Method::Post),
				"profiles",
			),
			CapabilityEntry::from_static(
				"Users",
				MethodSet::EMPTY.with(Method::Get),
				"profiles/{}/users",
			),
		])
	}

	#[test]
	fn check_method_is_case_insensitive() {
		let table = table();

		assert_eq!(
			table.check_method("Profiles", "get").expect("GET should be allowed."),
			Method::Get
		);

		let err = table
			.check_method("Profiles", "DELETE")
			.expect_err("DELETE is not declared for Profiles.");

		assert!(matches!(
			err,
			Error::MethodNotAllowed { ref method, ref resource }
				if method == "DELETE" && resource == "Profiles"
		));
		assert!(matches!(
			table.check_method("Profiles", "patch"),
			Err(Error::MethodNotAllowed { .. })
		));
	}

	#[test]
	fn describe_never_fails_for_unknown_resources() {
		let table = table();

		assert_eq!(table.describe("NoSuchResource"), ResourceDescription::NotDefined);
		assert_eq!(
			table.describe("Users"),
			ResourceDescription::Defined {
				methods: MethodSet::EMPTY.with(Method::Get),
				template: "profiles/{}/users".into(),
			}
		);
		assert_eq!(table.resources().collect::<Vec<_>>(), ["Profiles", "Users"]);
		assert!(matches!(
			table.entry("NoSuchResource"),
			Err(Error::Config(ConfigError::UnknownResource { .. }))
		));
	}

	#[test]
	fn entries_expand_their_templates() {
		let table = table();
		let users = table.get("Users").expect("Users should be declared.");

		assert_eq!(users.placeholders(), 1);
		assert_eq!(users.expand(&["7"]).expect("One value fills one slot."), "profiles/7/users");
	}
}
