//! YAML scan configuration, embedded at compile time.
use std::sync::LazyLock;

use serde::Deserialize;

pub mod constants;

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    pub output_file: String,
    pub code_extensions: Vec<String>,
    pub model_extension: String,
    #[serde(default)]
    pub ignore_names: Vec<String>,
    #[serde(default)]
    pub trusted_folders: Vec<String>,
    pub extractor: ExtractorConfig,
}

/// How the external modeling tool is launched and how its output is scraped
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractorConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
    pub start_marker: String,
    pub end_marker: String,
}

impl ExtractorConfig {
    /// Expand the argument template, substituting the inline script.
    pub fn expand_args(&self, script: &str) -> Vec<String> {
        self.args.iter().map(|a| a.replace(constants::SCRIPT_PLACEHOLDER, script)).collect()
    }
}

fn parse_yaml<T: for<'de> Deserialize<'de>>(name: &str, content: &str) -> T {
    serde_yaml::from_str(content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

pub static SCAN: LazyLock<ScanConfig> =
    LazyLock::new(|| parse_yaml("scan.yaml", include_str!("../../../../yamls/scan.yaml")));
