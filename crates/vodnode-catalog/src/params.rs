//! Names of the node parameters shared by every operation.

/// Selected resource group.
pub const RESOURCE: &str = "resource";
/// Selected operation within the resource group.
pub const OPERATION: &str = "operation";
/// Fetch every page instead of a single page of `limit` items.
pub const RETURN_ALL: &str = "returnAll";
/// Page size of a single-page read.
pub const LIMIT: &str = "limit";
/// Emit the raw response object instead of the extracted entries.
pub const RETURN_FULL_RESPONSE: &str = "returnFullResponse";

/// Prefix stripped from keys of a query collection.
pub const QUERY_PREFIX: &str = "query_";
/// Prefix stripped from keys of a body collection.
pub const BODY_PREFIX: &str = "body_";
