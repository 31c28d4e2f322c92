use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use pm_base::config::constants::JSON_INDENT;
use pm_base::{ScanError, TreeNode};

/// Pretty-print the tree. Non-ASCII text is emitted as-is, not escaped.
pub fn to_json(tree: &TreeNode) -> Result<Vec<u8>, ScanError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    tree.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the tree to `path`, replacing whatever was there.
pub fn write_tree(tree: &TreeNode, path: &Path) -> Result<(), ScanError> {
    let bytes = to_json(tree)?;
    fs::write(path, bytes).map_err(|source| ScanError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_base::FileNode;

    fn sample() -> TreeNode {
        TreeNode::directory(
            "проект",
            vec![TreeNode::file(
                "main.py",
                FileNode { ext: ".py".into(), content: Some("print('héllo')\n".into()), skeleton: None },
            )],
        )
    }

    #[test]
    fn four_space_indent_and_literal_unicode() {
        let text = String::from_utf8(to_json(&sample()).unwrap()).unwrap();
        let expected = r#"{
    "name": "проект",
    "type": "directory",
    "children": [
        {
            "name": "main.py",
            "type": "file",
            "ext": ".py",
            "content": "print('héllo')\n"
        }
    ]
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_children_stay_inline() {
        let text = String::from_utf8(to_json(&TreeNode::trusted("lib")).unwrap()).unwrap();
        assert!(text.contains(r#""children": []"#));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project_map.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();
        write_tree(&sample(), &path).unwrap();
        let written = fs::read(&path).unwrap();
        assert_eq!(written, to_json(&sample()).unwrap());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/map.json");
        match write_tree(&sample(), &path) {
            Err(ScanError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected write error, got {:?}", other),
        }
    }
}
