use serial_test::serial;
use temp_env::with_vars;

use super::*;
use crate::Error;

fn cleanup_all_blackboard_env_vars() {
    for (key, _) in std::env::vars() {
        if key.starts_with("BLACKBOARD__") || key == "CONFIG_PATH" {
            std::env::remove_var(&key);
        }
    }
}

#[test]
#[serial]
fn default_config_should_initialize_with_hardcoded_values() {
    let config = BlackboardConfig::default();

    assert_eq!(config.watch.namespace, "/blackboard_watcher");
    assert_eq!(config.watch.root_topic, "blackboard");
    assert_eq!(config.watch.topic_prefix, "sub_blackboard_");
    assert_eq!(config.watch.channel_capacity, 2);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn new_should_merge_environment_overrides() {
    cleanup_all_blackboard_env_vars();
    with_vars(
        vec![
            ("BLACKBOARD__WATCH__ROOT_TOPIC", Some("board")),
            ("BLACKBOARD__WATCH__CHANNEL_CAPACITY", Some("16")),
        ],
        || {
            let config = BlackboardConfig::new().unwrap();

            assert_eq!(config.watch.root_topic, "board");
            assert_eq!(config.watch.channel_capacity, 16);
            assert_eq!(config.watch.topic_prefix, "sub_blackboard_");
        },
    );
}

#[test]
#[serial]
fn with_override_config_should_merge_file_settings() {
    cleanup_all_blackboard_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("watch_overrides.toml");

    std::fs::write(
        &config_path,
        r#"
        [watch]
        namespace = "/robot/tree"
        topic_prefix = "watch_"
        "#,
    )
    .unwrap();

    let empty_vars: Vec<(&str, Option<&str>)> = vec![];
    with_vars(empty_vars, || {
        let base_config = BlackboardConfig::new().expect("success");
        let config = base_config
            .with_override_config(config_path.to_str().unwrap())
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(config.watch.namespace, "/robot/tree");
        assert_eq!(config.watch.topic_prefix, "watch_");
        assert_eq!(config.watch.root_topic, "blackboard");
    });
}

#[test]
#[serial]
fn environment_variables_should_have_highest_priority() {
    cleanup_all_blackboard_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("watch.toml");
    std::fs::write(
        &config_path,
        r#"
        [watch]
        root_topic = "from_file"
        channel_capacity = 8
        "#,
    )
    .unwrap();

    with_vars(
        vec![
            ("CONFIG_PATH", Some(config_path.to_str().unwrap())),
            ("BLACKBOARD__WATCH__ROOT_TOPIC", Some("from_env")),
        ],
        || {
            let config = BlackboardConfig::new().unwrap();

            assert_eq!(config.watch.root_topic, "from_env");
            assert_eq!(config.watch.channel_capacity, 8);
        },
    );
}

#[test]
#[serial]
fn missing_config_path_file_should_fail() {
    cleanup_all_blackboard_env_vars();
    with_vars(vec![("CONFIG_PATH", Some("/nonexistent/blackboard.toml"))], || {
        assert!(matches!(BlackboardConfig::new(), Err(Error::Config(_))));
    });
}

#[test]
fn validation_should_reject_zero_channel_capacity() {
    let mut config = BlackboardConfig::default();
    config.watch.channel_capacity = 0;

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn validation_should_reject_empty_topics() {
    let mut config = WatchConfig::default();
    config.root_topic.clear();
    assert!(config.validate().is_err());

    let mut config = WatchConfig::default();
    config.topic_prefix.clear();
    assert!(config.validate().is_err());
}

#[test]
fn validation_should_reject_trailing_slash_namespace() {
    let config = WatchConfig {
        namespace: "/tree/".into(),
        ..WatchConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn absolute_and_relative_topics_should_mirror_each_other() {
    let config = WatchConfig::default();

    let absolute = config.absolute_topic("sub_blackboard_0");
    assert_eq!(absolute, "/blackboard_watcher/sub_blackboard_0");
    assert_eq!(config.relative_topic(&absolute), "sub_blackboard_0");
    assert_eq!(config.relative_topic("sub_blackboard_0"), "sub_blackboard_0");
    assert_eq!(config.relative_topic("/elsewhere/x"), "/elsewhere/x");
}
