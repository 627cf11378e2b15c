// Kept in its own test binary: it changes the process working directory.
use std::fs;

#[test]
fn create_folder_structure_roots_at_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("css/components")).unwrap();
    fs::write(dir.path().join("css/components/pig.css"), "body { color: pink; }").unwrap();

    std::env::set_current_dir(dir.path()).unwrap();

    let report = truffle_scaffold::create_folder_structure().unwrap();

    assert_eq!(report.directories, 14);
    assert_eq!(report.files, 68);
    assert_eq!(
        fs::metadata(dir.path().join("css/components/pig.css"))
            .unwrap()
            .len(),
        0
    );
    assert!(dir.path().join("src/constants/GameStates.js").is_file());
}
