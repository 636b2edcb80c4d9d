//! Error type for the host capability.
//!
//! Host callbacks are owned by the build framework; these variants describe
//! which callback failed so the caller can tell them apart.

use std::fmt;

/// Error raised by a [`NodeHost`](super::NodeHost) callback.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host refused to register a node.
    NodeRejected { node_id: String, reason: String },

    /// The content digest could not be computed.
    DigestFailed { reason: String },

    /// The host could not derive a node id from the seed.
    IdGenerationFailed { seed: String, reason: String },

    /// Some other host failure.
    Other { message: String },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeRejected { node_id, reason } => {
                write!(f, "Node {} rejected: {}", node_id, reason)
            }
            Self::DigestFailed { reason } => write!(f, "Content digest failed: {}", reason),
            Self::IdGenerationFailed { seed, reason } => {
                write!(f, "Node id generation failed for '{}': {}", seed, reason)
            }
            Self::Other { message } => write!(f, "Host error: {}", message),
        }
    }
}

impl std::error::Error for HostError {}
