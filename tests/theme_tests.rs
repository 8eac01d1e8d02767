use textquill::theme::{get_builtin_theme, list_builtin_themes};

#[test]
fn test_builtin_theme_names() {
    let themes = list_builtin_themes();
    assert!(themes.contains(&"default-dark".to_string()));
    assert!(themes.contains(&"default-light".to_string()));
    let mut sorted = themes.clone();
    sorted.sort();
    assert_eq!(themes, sorted);
}

#[test]
fn test_unknown_theme() {
    assert!(get_builtin_theme("no-such-theme").is_none());
}

#[test]
fn test_light_and_dark_differ() {
    let dark = get_builtin_theme("default-dark").unwrap();
    let light = get_builtin_theme("default-light").unwrap();
    assert_ne!(dark.colors.background, light.colors.background);
}
