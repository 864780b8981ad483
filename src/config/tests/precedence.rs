//! Tests for configuration layer precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{apply_layer, build_config_from_layers};
use crate::ReviewDeskConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"database_url": "default-db"})), ("file", json!({"database_url": "file-db"}))],
    "database_url",
    "file-db",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"admin_secret": "file-secret"})), ("environment", json!({"admin_secret": "env-secret"}))],
    "admin_secret",
    "env-secret",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"format": "text"})), ("cli", json!({"format": "jsonl"}))],
    "format",
    "jsonl",
    "CLI should override environment"
)]
#[case::database_url_defaults_file_env_cli(
    vec![
        ("defaults", json!({"database_url": "default-db"})),
        ("file", json!({"database_url": "file-db"})),
        ("environment", json!({"database_url": "env-db"})),
        ("cli", json!({"database_url": "cli-db"}))
    ],
    "database_url",
    "cli-db",
    "CLI should win for database_url"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config =
        ReviewDeskConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    let actual = match field {
        "database_url" => config.database_url.as_deref(),
        "admin_secret" => config.admin_secret.as_deref(),
        "format" => config.format.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn defaults_are_none_when_no_sources_provided() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"database_url": null, "admin_secret": null}));

    let config = ReviewDeskConfig::merge_from_layers(composer.layers())
        .expect("merge should succeed with empty defaults");

    assert!(config.database_url.is_none(), "database_url should be None");
    assert!(config.admin_secret.is_none(), "admin_secret should be None");
    assert!(config.rating.is_none(), "rating should be None");
    assert!(
        !config.migrate_db,
        "migrate_db should default to false when unset"
    );
    assert!(!config.telemetry, "telemetry should default to false");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        (
            "file",
            json!({"database_url": "file-db", "admin_secret": "file-secret"}),
        ),
        ("cli", json!({"database_url": "cli-db"})),
    ]);

    assert_eq!(config.database_url.as_deref(), Some("cli-db"));
    assert_eq!(
        config.admin_secret.as_deref(),
        Some("file-secret"),
        "file secret should be preserved"
    );
}

#[rstest]
fn submission_fields_come_from_cli() {
    let config = build_config_from_layers(&[(
        "cli",
        json!({"menu": "bibimbap", "text": "Crispy rice.", "rating": 5}),
    )]);

    assert_eq!(config.menu.as_deref(), Some("bibimbap"));
    assert_eq!(config.text.as_deref(), Some("Crispy rice."));
    assert_eq!(config.rating, Some(5));
}

#[rstest]
fn migrate_db_layer_precedence_defaults_file_environment_cli() {
    let config = build_config_from_layers(&[
        ("defaults", json!({"migrate_db": false})),
        ("file", json!({"migrate_db": true})),
        ("environment", json!({"migrate_db": false})),
        ("cli", json!({"migrate_db": true})),
    ]);

    assert!(config.migrate_db, "CLI layer should win for migrate_db");
}
