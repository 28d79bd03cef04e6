//! Status store adapters.

mod json_file;
mod memory;

pub(crate) use json_file::atomic_write;
pub use json_file::JsonFileStatusStore;
pub use memory::MemoryStatusStore;
