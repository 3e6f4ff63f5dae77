//! Extension contracts for pluggable client behavior.
//!
//! The client ships [`FixedDelay`] as its only rate-limit policy; callers with different
//! quota strategies implement [`RateLimitPolicy`] and hand it to the
//! [`ClientBuilder`](crate::client::ClientBuilder).

pub mod rate_limit;

pub use rate_limit::*;
