// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config};
use iced_gallery::i18n::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to pt-BR
    let brazilian_config = Config {
        language: Some("pt-BR".to_string()),
        ..Config::default()
    };
    config::save_to_path(&brazilian_config, &temp_config_file_path)
        .expect("Failed to write pt-BR config file");

    let loaded_brazilian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load pt-BR config from path");
    let i18n_pt = I18n::new(None, &loaded_brazilian_config);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_locale_overrides_config_locale() {
    let config = Config {
        language: Some("pt-BR".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
