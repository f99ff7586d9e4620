//! Handler implementations for Azure DevOps MCP tools
//!
//! Organized by domain: pr, project, repo, work_item. Handlers are generic
//! over the narrowest port they need so tests can drive them with fakes.

mod pr;
mod project;
mod repo;
mod work_item;

pub use pr::*;
pub use project::*;
pub use repo::*;
pub use work_item::*;
