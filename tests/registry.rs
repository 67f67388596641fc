use plotheme::theme::args;
use plotheme::{Error, Registry, Theme};
use pretty_assertions::assert_eq;

#[test]
fn directory_registry() {
    let dir = tempfile::tempdir().unwrap();

    let mut dark = Theme::new("dark", "Dark theme");
    dark.set_color(args::Colors::new().with_figure_background_color("#000000"));
    dark.save(dir.path().join("dark.json")).unwrap();

    let mut light = Theme::new("light", "Light theme");
    light.set_color(args::Colors::new().with_figure_background_color("#ffffff"));
    light.save(dir.path().join("light.v2.json")).unwrap();

    std::fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();
    std::fs::create_dir(dir.path().join("nested.json")).unwrap();

    let reg = Registry::from_dir(dir.path()).unwrap();
    assert_eq!(reg.list(), vec!["dark".to_string(), "light".to_string()]);
    assert!(reg.contains("dark"));
    assert!(!reg.contains("notes"));

    assert_eq!(reg.load("dark").unwrap(), dark);
    assert_eq!(reg.load("light").unwrap(), light);
}

#[test]
fn unknown_name_lists_available() {
    let dir = tempfile::tempdir().unwrap();
    Theme::new("only", "").save(dir.path().join("only.json")).unwrap();

    let reg = Registry::from_dir(dir.path()).unwrap();
    let err = reg.load("other").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No theme named 'other' found. Available themes: only"
    );
    match err {
        Error::ThemeNotFound { name, available } => {
            assert_eq!(name, "other");
            assert_eq!(available, vec!["only".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let res = Registry::from_dir(dir.path().join("nope"));
    assert!(matches!(res, Err(Error::Io(_))));
}

#[test]
fn malformed_file_in_registry() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let reg = Registry::from_dir(dir.path()).unwrap();
    assert_eq!(reg.list(), vec!["broken".to_string()]);
    assert!(matches!(reg.load("broken"), Err(Error::Parse(_))));
}

#[cfg(feature = "bundled-themes")]
#[test]
fn bundled_themes() {
    let names = plotheme::list_themes();
    assert!(names.contains(&"minimal_light".to_string()));

    let theme = plotheme::load_theme("minimal_light").unwrap();
    assert_eq!(theme.name(), "minimal_light");
    assert!(theme.transforms().trim.is_some());

    let err = plotheme::load_theme("does_not_exist").unwrap_err();
    assert!(matches!(err, Error::ThemeNotFound { .. }));
}
