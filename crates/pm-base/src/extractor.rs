use std::path::Path;

use crate::error::ExtractError;

/// Source of bone names for a binary model file.
///
/// Implementations treat the model tool as an opaque black box. `Ok` holds
/// the bone names sorted ascending (possibly empty); `Err` says why nothing
/// could be read. Callers must never let an `Err` abort a scan.
pub trait BoneExtractor {
    fn extract_bone_names(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

impl<T: BoneExtractor + ?Sized> BoneExtractor for &T {
    fn extract_bone_names(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        (**self).extract_bone_names(path)
    }
}
