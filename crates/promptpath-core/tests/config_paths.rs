use std::path::PathBuf;

use promptpath_core::config::paths::config_path_in;

#[test]
fn config_file_lives_under_promptpath_dir() {
    let config_dir = PathBuf::from("/tmp/xdg-config");

    let path = config_path_in(&config_dir);

    assert_eq!(path, PathBuf::from("/tmp/xdg-config/promptpath/config.toml"));
}

#[test]
fn default_path_ends_with_config_file() {
    let home = PathBuf::from("/home/me");

    let path = promptpath_core::config::default_config_path(&home);

    assert!(path.ends_with("promptpath/config.toml"));
}
