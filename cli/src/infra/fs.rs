//! Filesystem infrastructure: implements `LocalFs`.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production `LocalFs` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl LocalFs for OsFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
