use std::path::Path;

/// Inline script run by Blender in background mode.
///
/// `__PATH__`, `__START__` and `__END__` are replaced with JSON string
/// literals, which Python reads as plain string literals.
const BLENDER_SCRIPT: &str = r#"
import bpy
import json

try:
    bpy.ops.wm.read_factory_settings(use_empty=True)
    bpy.ops.import_scene.fbx(filepath=__PATH__)
    bones = []
    for obj in bpy.data.objects:
        if obj.type == 'ARMATURE':
            bones.extend([bone.name for bone in obj.data.bones])
    print(__START__ + json.dumps(sorted(bones)) + __END__)
except Exception:
    print(__START__ + "[]" + __END__)
"#;

/// Build the inline script that imports `model` and prints its bone names
/// between the two markers.
pub fn build_script(model: &Path, start_marker: &str, end_marker: &str) -> String {
    BLENDER_SCRIPT
        .replace("__PATH__", &py_literal(&model.to_string_lossy()))
        .replace("__START__", &py_literal(start_marker))
        .replace("__END__", &py_literal(end_marker))
}

fn py_literal(s: &str) -> String {
    // A JSON string is also a valid Python string literal
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_path_and_markers() {
        let script = build_script(Path::new("/models/hero.fbx"), "SKEL_START", "SKEL_END");
        assert!(script.contains(r#"filepath="/models/hero.fbx""#));
        assert!(script.contains(r#"print("SKEL_START" + json.dumps(sorted(bones)) + "SKEL_END")"#));
        assert!(script.contains(r#"print("SKEL_START" + "[]" + "SKEL_END")"#));
        assert!(!script.contains("__PATH__"));
    }

    #[test]
    fn escapes_quotes_and_backslashes_in_path() {
        let script = build_script(Path::new(r#"/tmp/it's "odd"\hero.fbx"#), "S", "E");
        assert!(script.contains(r#"filepath="/tmp/it's \"odd\"\\hero.fbx""#));
    }

    #[test]
    fn resets_scene_before_import() {
        let script = build_script(Path::new("a.fbx"), "S", "E");
        let reset = script.find("read_factory_settings(use_empty=True)").unwrap();
        let import = script.find("import_scene.fbx").unwrap();
        assert!(reset < import);
    }
}
