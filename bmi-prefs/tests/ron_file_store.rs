use bmi_model::Theme;
use bmi_prefs::{Error, PreferenceStore, Preferences, RonFileStore, ThemeStore};

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = RonFileStore::new(dir.path().join("preferences.ron"));

    assert!(store.load().unwrap().is_none());
}

#[test]
fn saved_preferences_are_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = RonFileStore::new(dir.path().join("nested").join("preferences.ron"));
    let preferences = Preferences::new(Theme::Light);

    store.save(&preferences).unwrap();

    assert_eq!(store.load().unwrap(), Some(preferences));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.ron");
    std::fs::write(&path, "(theme: purple)").unwrap();

    let result = RonFileStore::new(path).load();

    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[test]
fn theme_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.ron");

    let mut theme_store = ThemeStore::init(Box::new(RonFileStore::new(&path)), None);
    assert_eq!(theme_store.current(), Theme::Dark);
    theme_store.toggle().unwrap();
    theme_store.teardown();

    let theme_store = ThemeStore::init(Box::new(RonFileStore::new(&path)), Some(Theme::Dark));
    assert_eq!(theme_store.current(), Theme::Light);
}

#[test]
fn corrupt_file_falls_back_to_system_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.ron");
    std::fs::write(&path, "not ron at all").unwrap();

    let theme_store = ThemeStore::init(Box::new(RonFileStore::new(&path)), Some(Theme::Light));

    assert_eq!(theme_store.current(), Theme::Light);
}
