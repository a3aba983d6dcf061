//! HTTP access to the explorer REST API.
//!
//! `ApiClient` is the seam operations depend on; `RestClient` is the
//! reqwest-backed implementation used by the application.

mod client;
mod endpoint;
mod error;

pub use client::{ApiClient, RestClient};
pub use endpoint::Endpoint;
pub use error::FetchError;
