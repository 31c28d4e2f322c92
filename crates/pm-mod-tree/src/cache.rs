use std::collections::HashMap;
use std::collections::hash_map::Entry;

use pm_base::Skeleton;

/// Per-run memo of skeletons already written out, keyed by the sorted bone list.
///
/// The value is the file name of the first model seen with that bone set.
#[derive(Debug, Default)]
pub struct SkeletonCache {
    owners: HashMap<Vec<String>, String>,
}

impl SkeletonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what `file_name` records for `bones`.
    ///
    /// An empty set is always `Missing` and never registered. The first file with
    /// a given set owns it and keeps the full list; later files get a reference.
    pub fn resolve(&mut self, file_name: &str, mut bones: Vec<String>) -> Skeleton {
        if bones.is_empty() {
            return Skeleton::Missing;
        }
        bones.sort_unstable();
        match self.owners.entry(bones) {
            Entry::Occupied(owner) => Skeleton::SameAs(owner.get().clone()),
            Entry::Vacant(slot) => {
                let bones = slot.key().clone();
                slot.insert(file_name.to_string());
                Skeleton::Bones(bones)
            }
        }
    }

    pub fn owner(&self, bones: &[String]) -> Option<&str> {
        let mut sorted = bones.to_vec();
        sorted.sort_unstable();
        self.owners.get(&sorted).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
