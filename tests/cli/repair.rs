use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const CONFIG: &str = r#"{
  "blocks": [
    {
      "start": "'comfort.modal.title':",
      "end": "'comfort.modal.summary':",
      "anchor": "// Comfort Score Modal"
    }
  ]
}"#;

const EN: &str = "export default {
  // Comfort Score Modal
  'comfort.modal.title': 'Comfort score',
  'comfort.modal.summary': 'Summary',
};
";

const DE_DUPLICATED: &str = "export default {
  // Comfort Score Modal
  'comfort.modal.title': 'Komfort',

  // Forecast Buttons
  'forecast.more': 'Mehr',

  'comfort.modal.title': 'Komfortwert',
  'comfort.modal.intro': 'Wie angenehm es sich anfühlt',
  'comfort.modal.summary': 'Zusammenfassung',
};
";

const DE_REPAIRED: &str = "export default {
  // Comfort Score Modal
  'comfort.modal.title': 'Komfortwert',
  'comfort.modal.intro': 'Wie angenehm es sich anfühlt',
  'comfort.modal.summary': 'Zusammenfassung',

  // Forecast Buttons
  'forecast.more': 'Mehr',

};
";

const FR_TRIPLED: &str = "export default {
  // Comfort Score Modal
  'comfort.modal.title': 'A',
  'comfort.modal.summary': 'A',
  'comfort.modal.title': 'B',
  'comfort.modal.summary': 'B',
  'comfort.modal.title': 'C',
  'comfort.modal.summary': 'C',
};
";

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        (".locguardrc.json", CONFIG),
        ("locales/en.ts", EN),
        ("locales/de.ts", DE_DUPLICATED),
    ])
}

#[test]
fn test_repair_dry_run() -> Result<()> {
    let test = project()?;

    let result = run(&mut test.repair_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    let out = &result.stdout;
    assert!(out.contains("./locales/de.ts\n"));
    assert!(out.contains(
        "'comfort.modal.title':  would deduplicate: kept lines 8-10, removed lines 3-3, placed at line 3"
    ));
    assert!(out.contains("./locales/en.ts\n"));
    assert!(out.contains("'comfort.modal.title':  already in place (lines 3-4)"));
    assert!(out.contains("Would repair 1 file(s)."));
    assert!(out.contains("Run with --apply to write these changes."));

    assert_eq!(test.read_file("locales/de.ts")?, DE_DUPLICATED);

    Ok(())
}

#[test]
fn test_repair_apply() -> Result<()> {
    let test = project()?;

    let result = run(test.repair_command().arg("--apply"))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Repaired 1 file(s)."));
    assert_eq!(test.read_file("locales/de.ts")?, DE_REPAIRED);
    assert_eq!(test.read_file("locales/en.ts")?, EN);

    Ok(())
}

#[test]
fn test_repair_apply_is_idempotent() -> Result<()> {
    let test = project()?;

    run(test.repair_command().arg("--apply"))?;
    let result = run(test.repair_command().arg("--apply"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Checked 2 files - nothing to repair"));
    assert_eq!(test.read_file("locales/de.ts")?, DE_REPAIRED);

    Ok(())
}

#[test]
fn test_repair_with_cli_markers() -> Result<()> {
    let test = CliTest::with_files(&[("locales/de.ts", DE_DUPLICATED)])?;

    let result = run(test.repair_command().args([
        "locales/de.ts",
        "--start",
        "'comfort.modal.title':",
        "--end",
        "'comfort.modal.summary':",
        "--anchor",
        "// Comfort Score Modal",
        "--apply",
    ]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_eq!(test.read_file("locales/de.ts")?, DE_REPAIRED);

    Ok(())
}

#[test]
fn test_repair_ambiguous_duplication_leaves_file() -> Result<()> {
    let test = project()?;
    test.write_file("locales/fr.ts", FR_TRIPLED)?;

    let result = run(test.repair_command().arg("--apply"))?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("./locales/fr.ts\n"));
    assert!(
        result
            .stdout
            .contains("error: ambiguous duplication: ''comfort.modal.title':' occurs 3 times")
    );
    assert!(
        result
            .stdout
            .contains("1 file(s) could not be repaired and were left unchanged")
    );
    assert_eq!(test.read_file("locales/fr.ts")?, FR_TRIPLED);
    // Other files are still repaired.
    assert_eq!(test.read_file("locales/de.ts")?, DE_REPAIRED);

    Ok(())
}

#[test]
fn test_repair_missing_anchor() -> Result<()> {
    let test = project()?;
    test.write_file(
        "locales/nl.ts",
        "export default {\n  'comfort.modal.title': 'T',\n  'comfort.modal.summary': 'S',\n};\n",
    )?;

    let result = run(test.repair_command().arg("locales/nl.ts"))?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("error: no anchor: '// Comfort Score Modal' not found")
    );

    Ok(())
}

#[test]
fn test_repair_without_blocks_is_an_error() -> Result<()> {
    let test = CliTest::with_files(&[("locales/de.ts", DE_DUPLICATED)])?;

    let result = run(&mut test.repair_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("No block definitions to repair."));

    Ok(())
}

#[test]
fn test_repair_json_output() -> Result<()> {
    let test = project()?;

    let result = run(test.repair_command().args(["--format", "json"]))?;

    assert_eq!(result.code, Some(0));
    let json: Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(json["applied"], false);
    assert_eq!(json["files"][0]["file_path"], "./locales/de.ts");
    assert_eq!(json["files"][0]["status"], "reconciled");
    assert_eq!(json["files"][0]["changed"], true);
    assert_eq!(
        json["files"][0]["outcomes"][0]["outcome"]["action"],
        "deduplicated"
    );
    assert_eq!(
        json["files"][1]["outcomes"][0]["outcome"]["action"],
        "already_placed"
    );

    Ok(())
}

#[test]
fn test_repair_preserves_crlf() -> Result<()> {
    let test = project()?;
    let crlf = DE_DUPLICATED.replace('\n', "\r\n");
    test.write_file("locales/de.ts", &crlf)?;

    run(test.repair_command().arg("--apply"))?;

    assert_eq!(
        test.read_file("locales/de.ts")?,
        DE_REPAIRED.replace('\n', "\r\n")
    );

    Ok(())
}
