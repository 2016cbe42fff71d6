//! Structured error taxonomy
//!
//! A [`StructuredError`] classifies a failure with a [`Category`] and can wrap
//! any other error, building a chain of context as the failure crosses layers.
//! [`classify`] finds the nearest structured error in an arbitrary chain.

#![allow(clippy::must_use_candidate)]

mod category;
pub mod chain;
mod context;
mod contract;
mod error;
mod http_error;
pub mod remote;

pub use category::Category;
pub use chain::{as_structured, classify, contains_structured, find_structured, is_structured};
pub use context::ResultExt;
pub use contract::ContractInvalid;
pub use error::{BoxError, StructuredError};
pub use http_error::HttpError;
pub use remote::{MalformedRemoteError, ServiceClientError, decode_remote};
