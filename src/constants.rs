// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

use std::time::Duration;

// ---------------------------------------------------------------------------
// hacoCMS API boundaries
// ---------------------------------------------------------------------------

/// How many records are requested per page of a list API.
///
/// hacoCMS caps `limit` at 100. We use the maximum to minimize round-trips.
pub const HACOCMS_PAGE_LIMIT: u32 = 100;

/// Path segment between the project base URL and the endpoint name.
pub const HACOCMS_API_PATH: &str = "api/v1";

/// Header carrying the project draft token, which unlocks unpublished content.
pub const HACOCMS_DRAFT_TOKEN_HEADER: &str = "Haco-Project-Draft-Token";

/// Upper bound for a single HTTP request, connect included.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Host node shape
// ---------------------------------------------------------------------------

/// Field the remote `id` is renamed to, since `id` is reserved by the host.
pub const RECORD_ID_FIELD: &str = "hacocmsId";

/// Field holding the remote id inside a remote record.
pub const REMOTE_ID_FIELD: &str = "id";

/// Prefix of every node type produced by this source.
pub const NODE_TYPE_PREFIX: &str = "Hacocms";

/// Owner tag attached to every node's internal metadata.
pub const NODE_OWNER: &str = "hacocms-source";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
