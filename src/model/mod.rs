//! Domain model: what hacoCMS returns and what the host graph receives.

mod node;
mod page;
mod record;

pub use node::{HostNode, NodeInternal};
pub use page::{ListQuery, PageMeta, PageResponse};
pub use record::RemoteRecord;
