pub mod config;
pub mod error;
pub mod extractor;
pub mod process;
pub mod types;

pub use error::{ExtractError, ScanError};
pub use extractor::BoneExtractor;
pub use types::{DirectoryNode, FileNode, NodeKind, Skeleton, TreeNode};
