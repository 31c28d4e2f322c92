// =============================================================================
// OUTPUT PLACEHOLDERS
// =============================================================================

/// Status attached to a trusted folder that was not descended into
pub const TRUSTED_FOLDER_STATUS: &str = "trusted folder, contents not scanned";

/// Stored as `content` when a source file cannot be read
pub const READ_ERROR_PLACEHOLDER: &str = "Error reading file";

/// Stored as `skeleton` when a model file yields no bones or extraction failed
pub const NO_BONES_PLACEHOLDER: &str = "No bones or error";

/// Prefix of the `skeleton` reference string pointing at the canonical file
pub const SAME_SKELETON_PREFIX: &str = "the same as for ";

// =============================================================================
// OUTPUT FORMAT
// =============================================================================

/// Indentation used when pretty-printing the map
pub const JSON_INDENT: &[u8] = b"    ";

// =============================================================================
// SUBPROCESS
// =============================================================================

/// How often a running child is polled for exit (milliseconds)
pub const PROCESS_POLL_INTERVAL_MS: u64 = 25;

/// Placeholder in the extractor argument template replaced by the inline script
pub const SCRIPT_PLACEHOLDER: &str = "{script}";
