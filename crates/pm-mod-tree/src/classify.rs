use std::fs;
use std::io;
use std::path::Path;

/// Lowercased extension of an entry name, including the dot.
///
/// Leading dots do not start an extension (`.bashrc` has none); a trailing dot
/// is an extension of its own (`notes.` gives `.`).
pub fn split_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => name[dot..].to_lowercase(),
        _ => String::new(),
    }
}

/// Read a whole file as text, substituting U+FFFD for invalid UTF-8.
///
/// Line endings are normalized: `\r\n` and a lone `\r` both become `\n`.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_extensions() {
        assert_eq!(split_extension("main.py"), ".py");
        assert_eq!(split_extension("Hero.FBX"), ".fbx");
        assert_eq!(split_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn no_extension() {
        assert_eq!(split_extension("Makefile"), "");
        assert_eq!(split_extension(".bashrc"), "");
        assert_eq!(split_extension("..."), "");
    }

    #[test]
    fn dotfile_with_extension() {
        assert_eq!(split_extension(".eslintrc.js"), ".js");
        assert_eq!(split_extension("..hidden.h"), ".h");
    }

    #[test]
    fn trailing_dot() {
        assert_eq!(split_extension("notes."), ".");
    }

    #[test]
    fn lossy_read_replaces_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.py");
        fs::write(&path, b"print('ok')\n\xff\xfe# tail\n").unwrap();
        let text = read_text_lossy(&path).unwrap();
        assert_eq!(text, "print('ok')\n\u{FFFD}\u{FFFD}# tail\n");
    }

    #[test]
    fn crlf_and_lone_cr_become_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("win.py");
        fs::write(&path, b"a = 1\r\nb = 2\rc = 3\n").unwrap();
        assert_eq!(read_text_lossy(&path).unwrap(), "a = 1\nb = 2\nc = 3\n");
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_text_lossy(&dir.path().join("nope.py")).is_err());
    }
}
