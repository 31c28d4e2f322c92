use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, warn};

use pm_base::config::constants::READ_ERROR_PLACEHOLDER;
use pm_base::{BoneExtractor, FileNode, Skeleton, TreeNode};

use crate::cache::SkeletonCache;
use crate::classify::{read_text_lossy, split_extension};
use crate::settings::ScanSettings;
use crate::stats::ScanStats;

/// Depth-first walk state for one run: settings, the extractor, and the skeleton cache.
pub struct Walker<'a, E: BoneExtractor> {
    settings: &'a ScanSettings,
    extractor: E,
    filter: Option<Gitignore>,
    cache: SkeletonCache,
    stats: ScanStats,
}

impl<'a, E: BoneExtractor> Walker<'a, E> {
    pub fn new(settings: &'a ScanSettings, extractor: E) -> Self {
        Self {
            filter: build_filter(&settings.root, &settings.filter),
            settings,
            extractor,
            cache: SkeletonCache::new(),
            stats: ScanStats::default(),
        }
    }

    /// Walk from the configured root. The root is always listed, even if its name is trusted.
    pub fn walk(&mut self) -> TreeNode {
        let root = self.settings.root.clone();
        self.walk_dir(&root, true)
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn cache(&self) -> &SkeletonCache {
        &self.cache
    }

    fn walk_dir(&mut self, path: &Path, is_root: bool) -> TreeNode {
        let name = entry_name(path);

        if !is_root && self.settings.is_trusted(&name) {
            debug!(path = %path.display(), "trusted folder, not descending");
            self.stats.trusted += 1;
            return TreeNode::trusted(name);
        }

        self.stats.directories += 1;
        let entries = match list_sorted(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to list directory");
                self.stats.errors += 1;
                return TreeNode::unlisted(name, e.to_string());
            }
        };

        let mut children = Vec::with_capacity(entries.len());
        for (file_name, full_path) in entries {
            let file_name = file_name.to_string_lossy().into_owned();
            if self.settings.is_ignored(&file_name) {
                continue;
            }
            let is_dir = full_path.is_dir();
            if self.is_filtered(&full_path, is_dir) {
                debug!(path = %full_path.display(), "excluded by filter");
                continue;
            }
            let child = if is_dir { self.walk_dir(&full_path, false) } else { self.visit_file(&full_path, file_name) };
            children.push(child);
        }

        TreeNode::directory(name, children)
    }

    fn visit_file(&mut self, path: &Path, name: String) -> TreeNode {
        self.stats.files += 1;
        let mut file = FileNode { ext: split_extension(&name), ..Default::default() };

        if self.settings.is_code(&file.ext) {
            file.content = Some(self.read_source(path));
        } else if self.settings.is_model(&file.ext) {
            file.skeleton = Some(self.skeleton_for(path, &name));
        }

        TreeNode::file(name, file)
    }

    fn read_source(&mut self, path: &Path) -> String {
        match read_text_lossy(path) {
            Ok(text) => {
                self.stats.sources += 1;
                text
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read source file");
                self.stats.errors += 1;
                READ_ERROR_PLACEHOLDER.to_string()
            }
        }
    }

    fn skeleton_for(&mut self, path: &Path, name: &str) -> Skeleton {
        self.stats.models += 1;
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let bones = match self.extractor.extract_bone_names(&absolute) {
            Ok(bones) => bones,
            Err(e) => {
                debug!(path = %absolute.display(), error = %e, "skeleton extraction failed");
                Vec::new()
            }
        };

        let skeleton = self.cache.resolve(name, bones);
        match &skeleton {
            Skeleton::Bones(bones) => {
                debug!(path = %absolute.display(), bones = bones.len(), "new skeleton");
                self.stats.skeletons_unique += 1;
            }
            Skeleton::SameAs(owner) => {
                debug!(path = %absolute.display(), owner = %owner, "skeleton already seen");
                self.stats.skeletons_shared += 1;
            }
            Skeleton::Missing => self.stats.skeletons_missing += 1,
        }
        skeleton
    }

    fn is_filtered(&self, path: &Path, is_dir: bool) -> bool {
        self.filter.as_ref().is_some_and(|gi| gi.matched(path, is_dir).is_ignore())
    }
}

/// Final path component, or the path as given when it has none (e.g. `.`).
fn entry_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Directory entries sorted by name. Any unreadable entry fails the whole listing.
fn list_sorted(dir: &Path) -> io::Result<Vec<(OsString, PathBuf)>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| (e.file_name(), e.path())))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Build gitignore matcher from the extra filter patterns
fn build_filter(root: &Path, patterns: &[String]) -> Option<Gitignore> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GitignoreBuilder::new(root);
    for line in patterns {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = builder.add_line(None, line) {
            warn!(pattern = line, error = %e, "ignoring invalid filter pattern");
        }
    }
    match builder.build() {
        Ok(gi) => Some(gi),
        Err(e) => {
            warn!(error = %e, "failed to build filter");
            None
        }
    }
}
