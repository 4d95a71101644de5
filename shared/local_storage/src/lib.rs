mod error;
mod file_storage;
mod local_storage;
mod memory_storage;

pub use error::Error;
pub use file_storage::FileStorage;
pub use local_storage::LocalStorage;
pub use memory_storage::MemoryStorage;
