use super::*;
use rustc_hash::FxHashMap;

#[test]
fn test_canonical_lowercases() {
    assert_eq!(ModuleName::canonical("Mod1").as_str(), "mod1");
    assert_eq!(ModuleName::canonical("GEOMETRY"), ModuleName::canonical("geometry"));
}

#[test]
fn test_lookup_by_str() {
    let mut map = FxHashMap::default();
    map.insert(ModuleName::canonical("Physics"), 1);
    assert_eq!(map.get("physics"), Some(&1));
    assert_eq!(map.get("Physics"), None);
}

#[test]
fn test_display_and_debug() {
    let name = ModuleName::canonical("Main");
    assert_eq!(name.to_string(), "main");
    assert_eq!(format!("{name:?}"), "ModuleName(\"main\")");
}
