use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const CATALOG: &str = "lang/lng_fr.json";

fn write_catalog(test: &CliTest, strings: serde_json::Value) -> Result<()> {
    let document = json!({
        "metadata": {"base": "en", "language": "fr", "created": "2021-3-4", "author": "tester"},
        "strings": strings,
    });
    test.write_file(CATALOG, &serde_json::to_string_pretty(&document)?)
}

#[test]
fn test_update_creates_new_catalog() -> Result<()> {
    let test = CliTest::with_source(
        r#"
void draw() {
    label(TR("Hello"));
    menu(TR_CTX("Save", "menu"));
}
"#,
    )?;

    let output = test.update_command("fr").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    For language 'fr':
    fr 'Hello' ! <not translated>
    fr (menu) 'Save' ! <not translated>
    ");
    assert!(stderr(&output).contains("not found, creating a new catalog"));
    assert!(stderr(&output).contains("lng_fr.json was created/updated (2 strings)"));

    let catalog = test.read_json(CATALOG)?;
    assert_eq!(catalog["metadata"]["base"], json!("en"));
    assert_eq!(catalog["metadata"]["language"], json!("fr"));
    assert_eq!(catalog["metadata"]["author"], json!(""));
    assert!(catalog["metadata"]["created"].is_string());
    assert_eq!(
        catalog["strings"],
        json!([
            {"context": "", "source": "Hello", "translation": null},
            {"context": "menu", "source": "Save", "translation": null}
        ])
    );

    Ok(())
}

#[test]
fn test_update_keeps_translations_and_adds_new_keys() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Hello"); TR("Bye");"#)?;
    write_catalog(
        &test,
        json!([{"context": "", "source": "Hello", "translation": "Bonjour"}]),
    )?;

    let output = test.update_command("fr").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    For language 'fr':
    fr 'Hello' = 'Bonjour'
    fr 'Bye' ! <not translated>
    ");

    let catalog = test.read_json(CATALOG)?;
    assert_eq!(catalog["metadata"]["created"], json!("2021-3-4"));
    assert_eq!(catalog["metadata"]["author"], json!("tester"));
    assert_eq!(
        catalog["strings"],
        json!([
            {"context": "", "source": "Hello", "translation": "Bonjour"},
            {"context": "", "source": "Bye", "translation": null}
        ])
    );

    Ok(())
}

#[test]
fn test_update_keeps_unused_keys_by_default() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Hello")"#)?;
    write_catalog(
        &test,
        json!([
            {"context": "", "source": "Hello", "translation": "Bonjour"},
            {"context": "old", "source": "Gone", "translation": "Parti"}
        ]),
    )?;

    let output = test.update_command("fr").output()?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r"
    For language 'fr':
    fr 'Hello' = 'Bonjour'
    fr (old) 'Gone' = 'Parti' ! <not used>
    ");
    assert_eq!(test.read_json(CATALOG)?["strings"].as_array().map(Vec::len), Some(2));

    Ok(())
}

#[test]
fn test_update_remove_unused() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Hello")"#)?;
    write_catalog(
        &test,
        json!([
            {"context": "", "source": "Hello", "translation": "Bonjour"},
            {"context": "old", "source": "Gone", "translation": "Parti"}
        ]),
    )?;

    let output = test
        .update_command("fr")
        .arg("--remove-unused")
        .output()?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r"
    For language 'fr':
    fr 'Hello' = 'Bonjour'
    ");
    assert_eq!(
        test.read_json(CATALOG)?["strings"],
        json!([{"context": "", "source": "Hello", "translation": "Bonjour"}])
    );

    Ok(())
}

#[test]
fn test_update_flags_special_character_mismatch() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Item (1)") TR("Hello, world!")"#)?;
    write_catalog(
        &test,
        json!([
            {"context": "", "source": "Item (1)", "translation": "Élément 1"},
            {"context": "", "source": "Hello, world!", "translation": "Bonjour, monde!"}
        ]),
    )?;

    let output = test.update_command("fr").output()?;

    assert_snapshot!(stdout(&output), @r"
    For language 'fr':
    fr 'Item (1)' = 'Élément 1' ! <special characters mismatch>
    fr 'Hello, world!' = 'Bonjour, monde!'
    ");
    assert!(stderr(&output).contains("2 keys (1 special characters mismatch)"));

    Ok(())
}

#[test]
fn test_update_twice_is_idempotent() -> Result<()> {
    let test = CliTest::with_source("TR(\"Hello\")\nTR_CTX(\"Save\", \"menu\")\n")?;

    test.update_command("de").output()?;
    let first = test.read_file("lang/lng_de.json")?;
    test.update_command("de").output()?;
    let second = test.read_file("lang/lng_de.json")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_update_writes_non_ascii_and_four_space_indent() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Settings")"#)?;
    test.write_file(
        "lang/lng_ja.json",
        r#"{"metadata": {"base": "en"}, "strings": [{"context": "", "source": "Settings", "translation": "設定"}]}"#,
    )?;

    let output = test.update_command("ja").output()?;
    assert!(output.status.success());

    let content = test.read_file("lang/lng_ja.json")?;
    assert!(content.contains("\"translation\": \"設定\""));
    assert!(content.contains("\n    \"strings\": ["));

    Ok(())
}

#[test]
fn test_update_with_malformed_catalog_starts_over() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Hello")"#)?;
    test.write_file(CATALOG, "{ not json")?;

    let output = test.update_command("fr").output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: Failed to parse catalog"));
    assert!(stderr(&output).contains("starting from an empty catalog"));
    assert!(stderr(&output).contains("warning: 1 catalog step degraded (use -v for details)"));

    let catalog = test.read_json(CATALOG)?;
    assert_eq!(catalog["metadata"]["base"], json!("en"));
    assert_eq!(
        catalog["strings"],
        json!([{"context": "", "source": "Hello", "translation": null}])
    );

    Ok(())
}

#[test]
fn test_update_missing_source_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.update_command("fr").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Source file not found"));
    assert!(!test.root().join(CATALOG).exists());

    Ok(())
}

#[test]
fn test_update_invalid_language_lists_allowed_codes() -> Result<()> {
    let test = CliTest::with_source(r#"TR("Hello")"#)?;

    let output = test.update_command("xx").output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Language code 'xx' is wrong. Allowed:"));
    assert!(err.contains("ja (Japanese)"));
    assert!(err.contains("pt-BR ([10.1.0+] BrazilianPortuguese)"));
    assert!(!test.root().join("lang").exists());

    Ok(())
}

#[test]
fn test_update_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".trsyncrc.json",
        r#"{ "sourceFile": "ui/overlay.cpp", "catalogDir": "romfs/lang", "baseLanguage": "ja", "author": "me" }"#,
    )?;
    test.write_file("ui/overlay.cpp", r#"TR_CTX("Open", "file")"#)?;

    let output = test.update_command("en-GB").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    For language 'en-GB':
    en-GB (file) 'Open' ! <not translated>
    ");
    let catalog = test.read_json("romfs/lang/lng_en-GB.json")?;
    assert_eq!(catalog["metadata"]["base"], json!("ja"));
    assert_eq!(catalog["metadata"]["author"], json!("me"));

    Ok(())
}

#[test]
fn test_update_cli_paths_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.cpp", r#"TR("Quit")"#)?;

    let output = test
        .update_command("it")
        .args(["--source", "src/app.cpp", "--catalog-dir", "out"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("out/lng_it.json").exists());

    Ok(())
}
