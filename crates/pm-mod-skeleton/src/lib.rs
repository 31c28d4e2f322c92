//! Blender-backed skeleton extraction for `.fbx` models.
mod scrape;
mod script;

use std::io;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use tracing::debug;

use pm_base::config::{ExtractorConfig, SCAN};
use pm_base::process::run_with_timeout;
use pm_base::{BoneExtractor, ExtractError};

pub use scrape::scrape_bones;
pub use script::build_script;

/// Runs the modeling tool headless once per model and scrapes the bone list from stdout.
#[derive(Debug, Clone)]
pub struct BlenderExtractor {
    config: ExtractorConfig,
}

impl Default for BlenderExtractor {
    fn default() -> Self {
        Self::new(SCAN.extractor.clone())
    }
}

impl BlenderExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Override the program launched (e.g. a full path to the Blender binary).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.config.program = program.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

impl BoneExtractor for BlenderExtractor {
    fn extract_bone_names(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let cfg = &self.config;
        let script = build_script(path, &cfg.start_marker, &cfg.end_marker);

        debug!(program = %cfg.program, model = %path.display(), "reading skeleton");
        let mut cmd = Command::new(&cfg.program);
        cmd.args(cfg.expand_args(&script));

        let output = run_with_timeout(cmd, Duration::from_secs(cfg.timeout_secs)).map_err(|e| match e.kind() {
            io::ErrorKind::TimedOut => ExtractError::TimedOut(cfg.timeout_secs),
            _ => ExtractError::Spawn { program: cfg.program.clone(), source: e },
        })?;

        if !output.status.success() {
            return Err(ExtractError::ExitStatus(output.status));
        }

        scrape_bones(&String::from_utf8_lossy(&output.stdout), &cfg.start_marker, &cfg.end_marker)
    }
}
