//! Parameter types for Azure DevOps MCP tools
//!
//! Organized by domain: pr, project, repo, work_item

mod pr;
mod project;
mod repo;
mod work_item;

pub use pr::*;
pub use project::*;
pub use repo::*;
pub use work_item::*;
