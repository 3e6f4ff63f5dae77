//! Client identity, signed assertions, and bearer token state.

pub mod assertion;
pub mod credentials;
pub mod manager;
pub mod secret;
pub mod token;

pub use assertion::*;
pub use credentials::*;
pub use manager::*;
pub use secret::*;
pub use token::*;
