//! Declarative resource catalog: verbs, capability tables, URI templates, and per-call
//! request values.
//!
//! Every platform resource is one [`CapabilityEntry`] (name, allowed verbs, URI template).
//! Validation and URI construction are table lookups; no resource carries its own logic.

pub mod capability;
pub mod method;
pub mod request;
pub mod uri;

pub use capability::*;
pub use method::*;
pub use request::*;
pub use uri::*;
