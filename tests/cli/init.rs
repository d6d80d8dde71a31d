use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, streams};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["moduleSourceName"], "react-intl");
    assert_eq!(parsed["messagesDir"], "./build/messages");
    assert_eq!(
        parsed["componentNames"],
        serde_json::json!(["FormattedMessage", "FormattedHTMLMessage"])
    );
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    let (stdout, _) = streams(&output);

    assert!(output.status.success());
    assert!(stdout.contains("✓ Created .intlrc.json"));
    assert!(test.root().join(".intlrc.json").exists());

    let content = test.read_file(".intlrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".intlrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let (_, stderr) = streams(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error: .intlrc.json already exists"));
    assert_eq!(test.read_file(".intlrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "src/app.tsx",
        r#"export const title = t("Title");"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.read_file("build/messages/src/app.json")?.contains("\"Title\""));

    Ok(())
}
