//! Azure DevOps REST access
//!
//! The [`api`] traits are what tool adapters depend on; [`AzureDevOpsClient`]
//! implements them over HTTP.

pub mod api;
pub mod client;
pub mod error;

pub use api::{Connection, CoreApi, GitApi, WorkItemApi};
pub use client::AzureDevOpsClient;
pub use error::{ApiError, ApiResult};
