/// Filesystem helpers: dataset path resolution and modification times.
pub mod fs;
