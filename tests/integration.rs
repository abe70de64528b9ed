// SPDX-License-Identifier: MPL-2.0
use animated_tabs::config::{self, Config, DEFAULT_RECONCILE_INTERVAL_MS};
use animated_tabs::i18n::fluent::I18n;
use animated_tabs::tabs::{default_icons, Tuning};
use animated_tabs::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_tab_title_is_translated_in_every_locale() {
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for descriptor in default_icons() {
            let caption = i18n.tr(descriptor.title_key);
            assert!(
                !caption.starts_with("MISSING"),
                "{lang} lacks {}",
                descriptor.title_key
            );
        }
    }
}

#[test]
fn animation_section_round_trips_into_tuning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[general]
theme_mode = "dark"

[animation]
reconcile_interval_ms = 2500
register_retry_ms = 40
register_recheck_ms = 15
ready_retry_ms = [100, 10]
frame_epsilon = 0.5
"#,
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

    let tuning = Tuning::from(&loaded.animation);
    assert_eq!(tuning.reconcile_interval, Duration::from_millis(2500));
    assert_eq!(tuning.register_retry, Duration::from_millis(40));
    assert_eq!(tuning.register_recheck, Duration::from_millis(15));
    assert_eq!(
        tuning.ready_retries,
        vec![Duration::from_millis(10), Duration::from_millis(100)]
    );
    assert_eq!(tuning.frame_epsilon, 0.5);
    assert_eq!(tuning.time_epsilon, Tuning::default().time_epsilon);
}

#[test]
fn missing_animation_section_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        Tuning::from(&loaded.animation).reconcile_interval,
        Duration::from_millis(DEFAULT_RECONCILE_INTERVAL_MS)
    );
}
