//! Persistent file backing and the store snapshot it loads and persists.

mod file_backing;
mod snapshot;

pub use file_backing::FileBacking;
pub use snapshot::StoreSnapshot;
