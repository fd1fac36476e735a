use anyhow::Result;

use crate::CliTest;

#[test]
fn test_check_clean_catalogs() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("no issues found"), "stdout: {}", out.stdout);
    assert!(out.stdout.contains("2 locale files"));

    Ok(())
}

#[test]
fn test_check_missing_key_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/en.json",
        r#"{"hero": {"title": "Hi", "cta": "Go"}}"#,
    )?;
    test.write_file("locales/bg.json", r#"{"hero": {"title": "Здравей"}}"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("missing-key"));
    assert!(out.stdout.contains("hero.cta"));
    assert!(out.stdout.contains("1 error"));

    Ok(())
}

#[test]
fn test_check_orphan_key_is_warning_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hero": {"title": "Hi"}}"#)?;
    test.write_file(
        "locales/bg.json",
        r#"{"hero": {"title": "Здравей", "old": "stale"}}"#,
    )?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 0, "warnings must not fail the check");
    assert!(out.stdout.contains("orphan-key"));
    assert!(out.stdout.contains("hero.old"));

    Ok(())
}

#[test]
fn test_check_shape_mismatch() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x"}}"#)?;
    test.write_file("locales/bg.json", r#"{"a": {"b": {"c": "y"}}}"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("shape-mismatch"));

    Ok(())
}

#[test]
fn test_check_flat_layout_is_equivalent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hero": {"title": "Hi"}}"#)?;
    test.write_file("locales/bg.json", r#"{"hero.title": "Здравей"}"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 0, "stdout: {}", out.stdout);
    assert!(out.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_unparseable_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hero": {"title": "Hi"}}"#)?;
    test.write_file("locales/bg.json", "{ not json")?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_check_unsupported_locale_file_is_skipped_not_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hero": {"title": "Hi"}}"#)?;
    test.write_file("locales/fr.json", r#"{"hero": {"title": "Salut"}}"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 0, "stdout: {}", out.stdout);
    assert!(!out.stdout.contains("parse-error"), "stdout: {}", out.stdout);
    assert!(out.stdout.contains("no issues found"));
    assert!(out.stderr.contains("1 locale file(s) skipped"));

    let verbose = test.run(&["check", "-v"])?;
    assert_eq!(verbose.code, 0);
    assert!(verbose.stderr.contains("fr.json"));
    // The skip is reported once, through the scan summary only.
    assert_eq!(verbose.stderr.matches("fr.json").count(), 1);

    Ok(())
}

#[test]
fn test_check_missing_locales_dir_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_check_locales_root_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"k": "v"}"#)?;

    let out = test.run(&["check", "--locales-root", "i18n"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    Ok(())
}

#[test]
fn test_check_respects_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".marqueerc.json", r#"{ "localesRoot": "./messages" }"#)?;
    test.write_file("messages/en.json", r#"{"k": "v"}"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["--help"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("resolve"));
    assert!(out.stdout.contains("play"));

    Ok(())
}
