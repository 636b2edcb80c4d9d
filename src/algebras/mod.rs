//! Capability algebras for hacocms-source.
//!
//! Traits here represent **capabilities**, not implementations. Each one is
//! object-safe and documents the laws every implementation must satisfy;
//! the laws are checked in each module's test suite.
//!
//! # Capability Traits
//!
//! - [`NodeHost`]: node registration, content digests and node ids, as
//!   provided by the host build framework
//!
//! Content retrieval lives next to its HTTP interpreter in `api`.

pub mod error;
pub mod host;

pub use error::HostError;
pub use host::NodeHost;
