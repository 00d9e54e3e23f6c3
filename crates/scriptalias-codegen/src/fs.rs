//! Module existence checks.

use std::path::Path;

/// Read-only view of the file system used before discovery.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (*self).exists(path)
    }
}

/// The local disk. A module exists when its path names a regular file.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
