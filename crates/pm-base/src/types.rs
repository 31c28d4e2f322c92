use serde::{Serialize, Serializer};

use crate::config::constants::{NO_BONES_PLACEHOLDER, SAME_SKELETON_PREFIX, TRUSTED_FOLDER_STATUS};

/// One filesystem entry in the project map.
///
/// Serializes as `{"name": ..., "type": "directory" | "file", ...}` with the
/// variant's fields following the tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Directory(DirectoryNode),
    File(FileNode),
}

/// Directory payload. Exactly one shape is produced by the walker:
/// listed (`children`), trusted (`status` + empty `children`) or failed (`error`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DirectoryNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FileNode {
    /// Lowercased extension including the dot, or empty
    pub ext: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<Skeleton>,
}

/// Skeleton data recorded for a model file.
#[derive(Debug, Clone, PartialEq)]
pub enum Skeleton {
    /// Canonical owner of this bone set: the full sorted list
    Bones(Vec<String>),
    /// No bones found, or the extractor failed
    Missing,
    /// Same bone set as an earlier file, named here
    SameAs(String),
}

impl Serialize for Skeleton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Skeleton::Bones(bones) => bones.serialize(serializer),
            Skeleton::Missing => serializer.serialize_str(NO_BONES_PLACEHOLDER),
            Skeleton::SameAs(owner) => serializer.collect_str(&format_args!("{}{}", SAME_SKELETON_PREFIX, owner)),
        }
    }
}

impl TreeNode {
    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(DirectoryNode { children: Some(children), ..Default::default() }),
        }
    }

    /// A trusted folder: marked, never listed.
    pub fn trusted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(DirectoryNode {
                status: Some(TRUSTED_FOLDER_STATUS.to_string()),
                children: Some(Vec::new()),
                error: None,
            }),
        }
    }

    /// A directory whose listing failed.
    pub fn unlisted(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(DirectoryNode { error: Some(error.into()), ..Default::default() }),
        }
    }

    pub fn file(name: impl Into<String>, file: FileNode) -> Self {
        Self { name: name.into(), kind: NodeKind::File(file) }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match &self.kind {
            NodeKind::Directory(d) => Some(d),
            NodeKind::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match &self.kind {
            NodeKind::File(f) => Some(f),
            NodeKind::Directory(_) => None,
        }
    }

    /// Children of a listed or trusted directory; empty for files and failed listings.
    pub fn children(&self) -> &[TreeNode] {
        self.as_directory().and_then(|d| d.children.as_deref()).unwrap_or(&[])
    }

    /// Find a direct child by entry name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children().iter().find(|c| c.name == name)
    }
}
