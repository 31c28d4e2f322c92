use pm_base::ExtractError;

/// Pull the bone list printed between `start` and `end` out of free-form output.
///
/// The first `start` marker wins; `end` is searched for after it. The result is
/// sorted ascending regardless of the order the tool printed.
pub fn scrape_bones(output: &str, start: &str, end: &str) -> Result<Vec<String>, ExtractError> {
    let begin = output.find(start).ok_or(ExtractError::MissingMarkers)? + start.len();
    let len = output[begin..].find(end).ok_or(ExtractError::MissingMarkers)?;
    let mut bones: Vec<String> = serde_json::from_str(&output[begin..begin + len])?;
    bones.sort();
    Ok(bones)
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: &str = "SKEL_START";
    const E: &str = "SKEL_END";

    #[test]
    fn extracts_payload_from_noisy_output() {
        let out = "Blender 4.1\nRead prefs\nSKEL_START[\"Head\", \"Spine\"]SKEL_END\nBlender quit\n";
        assert_eq!(scrape_bones(out, S, E).unwrap(), vec!["Head", "Spine"]);
    }

    #[test]
    fn sorts_case_sensitively() {
        let out = "SKEL_START[\"spine\", \"Spine\", \"Arm\"]SKEL_END";
        assert_eq!(scrape_bones(out, S, E).unwrap(), vec!["Arm", "Spine", "spine"]);
    }

    #[test]
    fn empty_payload_is_ok_and_empty() {
        assert!(scrape_bones("SKEL_START[]SKEL_END", S, E).unwrap().is_empty());
    }

    #[test]
    fn decodes_unicode_escapes() {
        let out = "SKEL_START[\"\\u041a\\u043e\\u0441\\u0442\\u044c\"]SKEL_END";
        assert_eq!(scrape_bones(out, S, E).unwrap(), vec!["Кость"]);
    }

    #[test]
    fn missing_start_marker() {
        assert!(matches!(scrape_bones("Error: cannot import", S, E), Err(ExtractError::MissingMarkers)));
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        let out = "SKEL_END junk SKEL_START[\"Root\"]SKEL_END";
        assert_eq!(scrape_bones(out, S, E).unwrap(), vec!["Root"]);
    }

    #[test]
    fn missing_end_marker() {
        assert!(matches!(scrape_bones("SKEL_START[\"Root\"]", S, E), Err(ExtractError::MissingMarkers)));
    }

    #[test]
    fn malformed_payload() {
        assert!(matches!(scrape_bones("SKEL_START[Root]SKEL_END", S, E), Err(ExtractError::Malformed(_))));
        assert!(matches!(scrape_bones("SKEL_START{\"a\":1}SKEL_END", S, E), Err(ExtractError::Malformed(_))));
    }
}
