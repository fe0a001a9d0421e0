use formkit::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_from_root() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let formkit_toml = r#"
[server]
host = "0.0.0.0"
port = 8080
ui_origin = "http://localhost:8080"

[form]
max_submissions = 25
expose_submissions = true
"#;
    fs::write(root.join("formkit.toml"), formkit_toml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(
        settings.server.ui_origin.as_deref(),
        Some("http://localhost:8080")
    );
    assert_eq!(settings.form.max_submissions, 25);
    assert!(settings.form.expose_submissions);

    Ok(())
}

#[test]
fn test_load_yaml_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let formkit_yaml = r#"
server:
  host: 127.0.0.1
  port: 5000
"#;
    fs::write(root.join("formkit.yaml"), formkit_yaml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.server.port, 5000);
    assert!(settings.server.ui_origin.is_none());
    assert!(!settings.form.expose_submissions);

    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("formkit.toml"),
        "[server]\nhost = \"\"\nport = 0\n",
    )?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("server.host"));
    assert!(message.contains("server.port"));

    Ok(())
}
