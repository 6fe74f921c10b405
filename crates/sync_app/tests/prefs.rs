use sync_app::{load_active_tab, save_active_tab};

#[test]
fn round_trips_the_active_tab() {
    let dir = tempfile::tempdir().expect("tempdir");

    save_active_tab(dir.path(), "mappings");
    assert_eq!(load_active_tab(dir.path()).as_deref(), Some("mappings"));

    // Last write wins.
    save_active_tab(dir.path(), "products");
    assert_eq!(load_active_tab(dir.path()).as_deref(), Some("products"));
}

#[test]
fn missing_file_loads_as_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(load_active_tab(dir.path()), None);
}

#[test]
fn corrupt_file_loads_as_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(".storesync_prefs.ron"), "not ron {{{{").expect("write");
    assert_eq!(load_active_tab(dir.path()), None);
}
