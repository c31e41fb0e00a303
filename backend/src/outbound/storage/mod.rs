//! Key-value storage adapters behind the session store.

mod dir;
mod memory;

pub use dir::DirKeyValueStore;
pub use memory::MemoryKeyValueStore;
