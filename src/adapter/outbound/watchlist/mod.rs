//! Watch list adapters.

mod memory;
mod toml_file;

pub use memory::MemoryWatchList;
pub use toml_file::TomlWatchList;
