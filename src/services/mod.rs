mod error;
mod local_file;
mod memory_file;

pub use error::ReadError;
pub use local_file::LocalFile;
pub use memory_file::MemoryFile;
