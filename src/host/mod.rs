//! Host implementations of the [`NodeHost`](crate::algebras::NodeHost) capability.

mod memory;

pub use memory::MemoryNodeStore;
