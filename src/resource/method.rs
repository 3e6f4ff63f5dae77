//! HTTP verbs and the compact verb sets declared per resource.

// self
use crate::_prelude::*;

/// HTTP verbs that appear in platform capability tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	/// Read a collection or instance.
	Get,
	/// Create.
	Post,
	/// Update.
	Put,
	/// Remove.
	Delete,
	/// Server-side copy; declared by some IFB resources but never executed by the client.
	Copy,
}
impl Method {
	/// Every verb in declaration order.
	pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Delete, Self::Copy];

	/// Returns the upper-case wire name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
			Method::Copy => "COPY",
		}
	}

	/// Parses a verb, ignoring ASCII case.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|method| method.as_str().eq_ignore_ascii_case(raw))
	}

	/// Returns `true` for the verbs the request executor sends.
	pub const fn is_executable(self) -> bool {
		!matches!(self, Method::Copy)
	}

	/// Returns `true` if requests with this verb carry a JSON body.
	pub const fn has_body(self) -> bool {
		matches!(self, Method::Post | Method::Put)
	}

	const fn bit(self) -> u8 {
		1 << self as u8
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Method {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| Error::InvalidMethod { method: s.to_ascii_uppercase() })
	}
}

/// Compact set of allowed verbs for one resource.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MethodSet(u8);
impl MethodSet {
	/// Set with no verbs.
	pub const EMPTY: Self = Self(0);

	/// Returns a copy of the set with `method` added.
	pub const fn with(self, method: Method) -> Self {
		Self(self.0 | method.bit())
	}

	/// Returns `true` if `method` is in the set.
	pub const fn contains(self, method: Method) -> bool {
		self.0 & method.bit() != 0
	}

	/// Returns `true` when no verbs are allowed.
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Iterates the verbs in declaration order.
	pub fn iter(self) -> impl Iterator<Item = Method> {
		Method::ALL.into_iter().filter(move |method| self.contains(*method))
	}
}
impl FromIterator<Method> for MethodSet {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Method>,
	{
		iter.into_iter().fold(Self::EMPTY, Self::with)
	}
}
impl Debug for MethodSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.iter()).finish()
	}
}
impl Display for MethodSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		for (idx, method) in self.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}

			f.write_str(method.as_str())?;
		}

		Ok(())
	}
}
impl Serialize for MethodSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_seq(self.iter())
	}
}
impl<'de> Deserialize<'de> for MethodSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Vec::<Method>::deserialize(deserializer)?.into_iter().collect())
	}
}
