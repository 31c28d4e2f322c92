//! Project hierarchy builder: walks a directory into a [`TreeNode`] and writes it as JSON.
mod cache;
mod classify;
mod output;
mod settings;
mod stats;
mod walker;

use tracing::info;

use pm_base::{BoneExtractor, ScanError, TreeNode};

pub use cache::SkeletonCache;
pub use classify::{read_text_lossy, split_extension};
pub use output::{to_json, write_tree};
pub use settings::ScanSettings;
pub use stats::ScanStats;
pub use walker::Walker;

/// Build the full tree for `settings.root` in one depth-first pass.
pub fn build_hierarchy<E: BoneExtractor>(settings: &ScanSettings, extractor: E) -> (TreeNode, ScanStats) {
    let mut walker = Walker::new(settings, extractor);
    let tree = walker.walk();
    (tree, walker.stats())
}

/// Build the tree and write it to `settings.output`.
pub fn run_scan<E: BoneExtractor>(settings: &ScanSettings, extractor: E) -> Result<ScanStats, ScanError> {
    let (tree, stats) = build_hierarchy(settings, extractor);
    write_tree(&tree, &settings.output)?;
    info!(
        output = %settings.output.display(),
        directories = stats.directories,
        trusted = stats.trusted,
        files = stats.files,
        sources = stats.sources,
        models = stats.models,
        skeletons_unique = stats.skeletons_unique,
        skeletons_shared = stats.skeletons_shared,
        skeletons_missing = stats.skeletons_missing,
        errors = stats.errors,
        "scan complete"
    );
    Ok(stats)
}
