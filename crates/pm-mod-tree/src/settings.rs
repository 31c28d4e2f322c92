use std::collections::HashSet;
use std::path::{Path, PathBuf};

use pm_base::config::{SCAN, ScanConfig};

/// Resolved runtime view of the scan configuration.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Entry names skipped everywhere (exact match)
    pub ignore_names: HashSet<String>,
    /// Lowercased folder names that are never descended into below the root
    pub trusted_folders: HashSet<String>,
    /// Lowercased extensions (with dot) whose text is embedded
    pub code_extensions: HashSet<String>,
    /// Lowercased extension (with dot) handed to the skeleton extractor
    pub model_extension: String,
    /// Extra gitignore-style patterns, relative to `root`
    pub filter: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self::from_config(&SCAN, ".")
    }
}

impl ScanSettings {
    pub fn from_config(cfg: &ScanConfig, root: impl Into<PathBuf>) -> Self {
        let settings = Self {
            root: root.into(),
            output: PathBuf::new(),
            ignore_names: cfg.ignore_names.iter().cloned().collect(),
            trusted_folders: cfg.trusted_folders.iter().map(|f| f.to_lowercase()).collect(),
            code_extensions: cfg.code_extensions.iter().map(|e| e.to_lowercase()).collect(),
            model_extension: cfg.model_extension.to_lowercase(),
            filter: Vec::new(),
        };
        settings.with_output(&cfg.output_file)
    }

    /// Set the output path. Its file name is also skipped during the walk.
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        let output = output.as_ref();
        if let Some(name) = output.file_name() {
            self.ignore_names.insert(name.to_string_lossy().into_owned());
        }
        self.output = output.to_path_buf();
        self
    }

    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignore_names.insert(name.into());
        self
    }

    pub fn with_filter(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.filter.extend(patterns);
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_names.contains(name)
    }

    pub fn is_trusted(&self, dir_name: &str) -> bool {
        self.trusted_folders.contains(&dir_name.to_lowercase())
    }

    pub fn is_code(&self, ext: &str) -> bool {
        self.code_extensions.contains(ext)
    }

    pub fn is_model(&self, ext: &str) -> bool {
        !ext.is_empty() && ext == self.model_extension
    }
}
