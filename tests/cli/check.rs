use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const EN: &str = "export default {
  // App
  'app.title': 'Weather station',
  'forecast.wind': 'Wind',
  'forecast.title': 'Forecast for today',
};
";

const NL: &str = "export default {
  // App
  'app.title': 'Weather station',
  'forecast.title': 'Verwachting Voor Vandaag Hier',
};
";

const NL_CLEAN: &str = "export default {
  // App
  'app.title': 'Weerstation',
  'forecast.wind': 'Wind',
  'forecast.title': 'Verwachting voor vandaag',
};
";

#[test]
fn test_check_reports_findings() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL)])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    let out = &result.stdout;
    assert!(out.contains("nl vs en: 1 missing, 1 untranslated, 1 title-case"));
    assert!(out.contains("  --> ./locales/nl.ts\n"));
    assert!(out.contains("warning: \"forecast.wind\"  missing-key"));
    assert!(out.contains("--> ./locales/en.ts:4"));
    assert!(out.contains("warning: \"app.title\"  untranslated"));
    assert!(out.contains("--> ./locales/nl.ts:3"));
    assert!(out.contains("warning: \"forecast.title\"  title-case"));
    assert!(out.contains("3 problems (0 errors, 3 warnings)"));

    Ok(())
}

#[test]
fn test_check_clean() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL_CLEAN)])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("Checked 1 locale file against 'en' - no issues found")
    );

    Ok(())
}

#[test]
fn test_check_skips_helper_modules() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.ts", EN),
        ("locales/nl.ts", NL_CLEAN),
        ("locales/index.ts", "export { default as en } from './en';\n"),
        ("locales/types.ts", "export type Messages = {};\n"),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(!result.stdout.contains("index"));
    assert!(!result.stdout.contains("types"));

    Ok(())
}

#[test]
fn test_check_explicit_files_with_allow() -> Result<()> {
    let test = CliTest::with_files(&[("i18n/en.ts", EN), ("i18n/nl.ts", NL)])?;

    let result = run(test.check_command().args([
        "i18n/nl.ts",
        "--reference",
        "i18n/en.ts",
        "--allow",
        "app.title",
    ]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("nl vs en: 1 missing, 0 untranslated, 1 title-case")
    );
    assert!(result.stdout.contains("--> i18n/en.ts:4"));

    Ok(())
}

#[test]
fn test_check_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".locguardrc.json",
            r#"{ "localesRoot": "./i18n", "referenceLocale": "nl", "allowList": ["app.*"] }"#,
        ),
        ("i18n/en.ts", EN),
        ("i18n/nl.ts", NL),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    // en is now the candidate; nl lacks 'forecast.wind' so en has nothing missing.
    assert!(
        result
            .stdout
            .contains("en vs nl: 0 missing, 0 untranslated, 0 title-case")
    );

    Ok(())
}

#[test]
fn test_check_reference_locale_flag() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL)])?;

    let result = run(test.check_command().args(["--reference-locale", "nl"]))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("en vs nl:"));

    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL)])?;

    let result = run(test.check_command().args(["--format", "json"]))?;

    assert_eq!(result.code, Some(0));
    let json: Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(json["reference_locale"], "en");
    assert_eq!(json["reports"][0]["locale"], "nl");
    assert_eq!(
        json["reports"][0]["missing_keys"][0]["context"]["key"],
        "forecast.wind"
    );
    assert_eq!(
        json["reports"][0]["suspected_untranslated"][0]["context"]["line"],
        3
    );
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));

    Ok(())
}

#[test]
fn test_check_unreadable_candidate_fails() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL_CLEAN)])?;

    let result = run(test.check_command().args(["locales/nl.ts", "locales/fr.ts"]))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("nl vs en:"));
    assert!(result.stdout.contains("file-error"));
    assert!(result.stdout.contains("--> locales/fr.ts"));
    assert!(result.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_missing_reference_is_an_error() -> Result<()> {
    let test = CliTest::with_files(&[("locales/nl.ts", NL)])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Reference locale 'en' not found"));

    Ok(())
}

#[test]
fn test_check_missing_locales_dir_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_check_verbose_notes() -> Result<()> {
    let test = CliTest::with_files(&[("locales/en.ts", EN), ("locales/nl.ts", NL_CLEAN)])?;

    let result = run(test.check_command().arg("-v"))?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("No .locguardrc.json found, using default configuration")
    );
    assert!(result.stderr.contains("loaded 'nl' (3 entries)"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("--help"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("check"));
    assert!(result.stdout.contains("repair"));
    assert!(result.stdout.contains("init"));

    Ok(())
}
