/// Counters collected over one walk, reported in the run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories listed (including the root)
    pub directories: usize,
    /// Trusted folders left unlisted
    pub trusted: usize,
    pub files: usize,
    /// Source files whose text was embedded
    pub sources: usize,
    pub models: usize,
    /// Models that own a new skeleton
    pub skeletons_unique: usize,
    /// Models referencing an earlier skeleton
    pub skeletons_shared: usize,
    /// Models with no bones or a failed extraction
    pub skeletons_missing: usize,
    /// Unreadable source files and failed listings
    pub errors: usize,
}
