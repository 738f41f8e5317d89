mod file_handle;

pub use file_handle::FileHandle;
