//! Translation between tool-facing status strings and Azure DevOps codes
//!
//! Azure DevOps reports enum values as camelCase names on the REST wire,
//! while older payloads and the official SDKs use integer codes. The remote
//! enums here read either form and write names. Reading is lossy on
//! purpose: an unrecognised remote value degrades to `Unknown` instead of
//! failing the whole response.
//!
//! Tool arguments are the strict side: an unrecognised status there is a
//! validation error raised before any remote call.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ToolError;

/// Either shape a remote enum value can take on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Code(i64),
    Name(String),
}

// ============================================================================
// Pull request status
// ============================================================================

/// Pull request status as Azure DevOps knows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullRequestStatus {
    NotSet,
    Active,
    Abandoned,
    Completed,
    All,
}

impl PullRequestStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Active,
            2 => Self::Abandoned,
            3 => Self::Completed,
            4 => Self::All,
            _ => Self::NotSet,
        }
    }

    /// Name used on the REST wire and in `searchCriteria.status`
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::NotSet => "notSet",
            Self::Active => "active",
            Self::Abandoned => "abandoned",
            Self::Completed => "completed",
            Self::All => "all",
        }
    }

    fn from_wire_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "abandoned" => Self::Abandoned,
            "completed" => Self::Completed,
            "all" => Self::All,
            _ => Self::NotSet,
        }
    }
}

impl Serialize for PullRequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for PullRequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireValue::deserialize(deserializer)? {
            WireValue::Code(code) => Self::from_code(code),
            WireValue::Name(name) => Self::from_wire_name(&name),
        })
    }
}

/// The `status` filter accepted by `list_pull_requests`
///
/// Exactly `active`, `abandoned`, `completed` or `all`, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestStatusFilter {
    Active,
    Abandoned,
    Completed,
    All,
}

impl PullRequestStatusFilter {
    const NAMES: [&'static str; 4] = ["active", "abandoned", "completed", "all"];

    pub fn to_remote(self) -> PullRequestStatus {
        match self {
            Self::Active => PullRequestStatus::Active,
            Self::Abandoned => PullRequestStatus::Abandoned,
            Self::Completed => PullRequestStatus::Completed,
            Self::All => PullRequestStatus::All,
        }
    }
}

impl FromStr for PullRequestStatusFilter {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "abandoned" => Ok(Self::Abandoned),
            "completed" => Ok(Self::Completed),
            "all" => Ok(Self::All),
            other => Err(ToolError::Validation(format!(
                "Invalid pull request status: {}",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for PullRequestStatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for PullRequestStatusFilter {
    fn schema_name() -> Cow<'static, str> {
        "PullRequestStatusFilter".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "enum": Self::NAMES,
        })
    }
}

// ============================================================================
// Comment thread status
// ============================================================================

/// Review state of a comment thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentThreadStatus {
    Unknown,
    Active,
    Fixed,
    WontFix,
    Closed,
    ByDesign,
    Pending,
}

impl CommentThreadStatus {
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Active,
        Self::Fixed,
        Self::WontFix,
        Self::Closed,
        Self::ByDesign,
        Self::Pending,
    ];

    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Active => 1,
            Self::Fixed => 2,
            Self::WontFix => 3,
            Self::Closed => 4,
            Self::ByDesign => 5,
            Self::Pending => 6,
        }
    }

    pub fn from_code(code: i64) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or(Self::Unknown)
    }

    /// Canonical spelling shown to tool callers
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Active => "Active",
            Self::Fixed => "Fixed",
            Self::WontFix => "WontFix",
            Self::Closed => "Closed",
            Self::ByDesign => "ByDesign",
            Self::Pending => "Pending",
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Active => "active",
            Self::Fixed => "fixed",
            Self::WontFix => "wontFix",
            Self::Closed => "closed",
            Self::ByDesign => "byDesign",
            Self::Pending => "pending",
        }
    }
}

/// Display name for a possibly absent remote status
pub fn thread_status_name(status: Option<CommentThreadStatus>) -> &'static str {
    status.unwrap_or(CommentThreadStatus::Unknown).display_name()
}

impl fmt::Display for CommentThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Case-insensitive; `WontFix`, `wontfix` and `wontFix` are all accepted
impl FromStr for CommentThreadStatus {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "active" => Ok(Self::Active),
            "fixed" => Ok(Self::Fixed),
            "wontfix" => Ok(Self::WontFix),
            "closed" => Ok(Self::Closed),
            "bydesign" => Ok(Self::ByDesign),
            "pending" => Ok(Self::Pending),
            _ => Err(ToolError::Validation(format!("Invalid thread status: {}", s))),
        }
    }
}

impl Serialize for CommentThreadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for CommentThreadStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireValue::deserialize(deserializer)? {
            WireValue::Code(code) => Self::from_code(code),
            WireValue::Name(name) => name.parse().unwrap_or(Self::Unknown),
        })
    }
}

/// Thread status as a tool argument
///
/// Unlike the remote enum this rejects unrecognised values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadStatusArg(pub CommentThreadStatus);

impl<'de> Deserialize<'de> for ThreadStatusArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map(ThreadStatusArg).map_err(de::Error::custom)
    }
}

impl JsonSchema for ThreadStatusArg {
    fn schema_name() -> Cow<'static, str> {
        "ThreadStatus".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let names: Vec<&str> = CommentThreadStatus::ALL
            .into_iter()
            .map(CommentThreadStatus::display_name)
            .collect();
        json_schema!({
            "type": "string",
            "enum": names,
        })
    }
}

// ============================================================================
// Comment type
// ============================================================================

/// Origin of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentType {
    Unknown,
    Text,
    CodeChange,
    System,
}

impl CommentType {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Text,
            2 => Self::CodeChange,
            3 => Self::System,
            _ => Self::Unknown,
        }
    }

    /// Outward bucket name; also the REST wire name
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Text => "text",
            Self::CodeChange => "codeChange",
            Self::System => "system",
        }
    }

    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "codechange" => Self::CodeChange,
            "system" => Self::System,
            _ => Self::Unknown,
        }
    }
}

/// Outward name for a possibly absent remote comment type; never fails
pub fn comment_type_name(comment_type: Option<CommentType>) -> &'static str {
    comment_type.unwrap_or(CommentType::Unknown).name()
}

impl Serialize for CommentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CommentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireValue::deserialize(deserializer)? {
            WireValue::Code(code) => Self::from_code(code),
            WireValue::Name(name) => Self::from_name(&name),
        })
    }
}
