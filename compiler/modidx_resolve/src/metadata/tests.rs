use super::*;

#[test]
fn test_file_name_strips_processed_marker() {
    assert_eq!(
        derive_file_name("/home/u/delphi/proj/model_processed.xml"),
        Some("model.xml".to_string())
    );
    assert_eq!(
        derive_file_name("crop_yield_processed.f"),
        Some("crop_yield.f".to_string())
    );
}

#[test]
fn test_file_name_keeps_whole_extension() {
    assert_eq!(
        derive_file_name("a/b/petasce_processed.f.xml"),
        Some("petasce.f.xml".to_string())
    );
}

#[test]
fn test_file_name_uses_last_marker() {
    assert_eq!(
        derive_file_name("x_processed.y_processed.xml"),
        Some("x_processed.y.xml".to_string())
    );
}

#[test]
fn test_file_name_absent_without_marker() {
    assert_eq!(derive_file_name("/home/u/proj/model.xml"), None);
    assert_eq!(derive_file_name("model_processed"), None);
    assert_eq!(derive_file_name("model_processedxml"), None);
}

#[test]
fn test_file_name_ignores_directories() {
    assert_eq!(derive_file_name("run_processed.d/model.xml"), None);
}

#[test]
fn test_project_path_extracts_directory() {
    assert_eq!(
        derive_project_path(
            "/home/u/delphi/translators/for2py/tests/model_processed.xml",
            "delphi"
        ),
        Some("delphi/translators/for2py/tests".to_string())
    );
}

#[test]
fn test_project_path_uses_last_root_occurrence() {
    assert_eq!(
        derive_project_path("/w/delphi/tests/delphi/src/m.xml", "delphi"),
        Some("delphi/src".to_string())
    );
}

#[test]
fn test_project_path_skips_segments_starting_with_root_letters() {
    // `d` occurs in "delphi", so `delphi/data` never anchors a match.
    assert_eq!(derive_project_path("/w/delphi/data/m.xml", "delphi"), None);
    assert_eq!(
        derive_project_path("/w/delphi/src/delphi/data/m.xml", "delphi"),
        Some("delphi/src/delphi/data".to_string())
    );
}

#[test]
fn test_project_path_needs_trailing_segment() {
    assert_eq!(derive_project_path("/w/delphi/src", "delphi"), None);
    assert_eq!(derive_project_path("/w/delphi/src/", "delphi"), None);
}

#[test]
fn test_project_path_absent_without_root() {
    assert_eq!(derive_project_path("/home/u/proj/m.xml", "delphi"), None);
    assert_eq!(derive_project_path("/home/u/proj/m.xml", ""), None);
}

#[test]
fn test_project_path_with_custom_root() {
    assert_eq!(
        derive_project_path("/srv/models/chime/sir/m.xml", "models"),
        Some("models/chime/sir".to_string())
    );
}

#[test]
fn test_serializes_as_pair() {
    let meta = FileMetadata {
        file_name: Some("m.f".to_string()),
        path: None,
    };
    assert_eq!(
        serde_json::to_string(&meta).unwrap_or_default(),
        r#"["m.f",null]"#
    );
}
