use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localesRoot"], "./locales");
    assert_eq!(parsed["referenceLocale"], "en");
    assert_eq!(parsed["untranslatedMinLength"], 5);
    assert_eq!(parsed["titleCaseMinWords"], 3);
    assert!(
        parsed.get("allowList").is_some(),
        "Config should have 'allowList' field"
    );
    assert!(
        parsed.get("blocks").is_some(),
        "Config should have 'blocks' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created .locguardrc.json"));
    assert!(test.root().join(".locguardrc.json").exists());

    let content = test.read_file(".locguardrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locguardrc.json", "{}")?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains(".locguardrc.json already exists"));
    assert_eq!(test.read_file(".locguardrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;

    test.write_file("locales/en.ts", "export default {\n  'a': 'Hello',\n};\n")?;
    test.write_file("locales/nl.ts", "export default {\n  'a': 'Hallo',\n};\n")?;

    let result = run(&mut test.check_command())?;
    assert_eq!(
        result.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        result.stderr
    );

    Ok(())
}
