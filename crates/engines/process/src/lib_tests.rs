use super::*;

#[test]
fn move_request_args_keep_fixed_args_first() {
    let mut config = ProcessEngineConfig::new("/opt/engines/alpha");
    config.args = vec!["--threads".to_string(), "4".to_string()];
    let engine = ProcessEngine::new(config);

    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let argv = engine.move_request_args(Duration::from_secs_f64(1.5), fen);

    let argv: Vec<&str> = argv.iter().map(|a| a.to_str().unwrap()).collect();
    assert_eq!(
        argv,
        vec!["--threads", "4", "--time", "1.5", "--position", fen]
    );
}

#[test]
fn move_request_args_format_whole_second_budgets_bare() {
    let engine = ProcessEngine::new(ProcessEngineConfig::new("alpha"));
    let argv = engine.move_request_args(Duration::from_secs(3), "8/8/8/8/8/8/8/8 w - - 0 1");
    assert_eq!(argv[1], OsString::from("3"));
}

#[test]
fn config_from_toml() {
    let config = ProcessEngineConfig::from_toml_str(
        r#"
        command = "./engines/alpha"
        args = ["--threads", "4"]
        grace_ms = 250
        "#,
    )
    .unwrap();

    assert_eq!(config.command, PathBuf::from("./engines/alpha"));
    assert_eq!(config.args, vec!["--threads", "4"]);
    assert_eq!(config.grace_ms, 250);
    assert!(config.name.is_none());
}

#[test]
fn config_toml_defaults() {
    let config = ProcessEngineConfig::from_toml_str(r#"command = "alpha""#).unwrap();
    assert!(config.args.is_empty());
    assert_eq!(config.grace_ms, DEFAULT_GRACE_MS);
}

#[test]
fn config_without_command_is_rejected() {
    assert!(ProcessEngineConfig::from_toml_str(r#"grace_ms = 100"#).is_err());
}

#[test]
fn display_name_defaults_to_executable_stem() {
    let engine = ProcessEngine::new(ProcessEngineConfig::new("/opt/engines/alpha-v2"));
    assert_eq!(engine.name(), "alpha-v2");
}

#[test]
fn display_name_prefers_configured_name() {
    let mut config = ProcessEngineConfig::new("/opt/engines/alpha-v2");
    config.name = Some("Alpha".to_string());
    let engine = ProcessEngine::new(config);
    assert_eq!(engine.name(), "Alpha");
}
