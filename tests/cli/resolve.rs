use anyhow::Result;

use crate::CliTest;

#[test]
fn test_resolve_nested_key() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.title"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert_eq!(out.stdout.trim(), "We build software");

    Ok(())
}

#[test]
fn test_resolve_language_flag() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.title", "--language", "bg"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "Изграждаме софтуер");

    Ok(())
}

#[test]
fn test_resolve_missing_key_prints_literal_key() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.subtitle"])?;
    // Degraded output, not a failure.
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "hero.subtitle");

    Ok(())
}

#[test]
fn test_resolve_interpolation() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "footer.rights", "--param", "year=2024"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "© 2024 Corp");

    Ok(())
}

#[test]
fn test_resolve_unmatched_placeholder_left_verbatim() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "footer.rights", "--param", "other=1"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "© {{year}} Corp");

    Ok(())
}

#[test]
fn test_resolve_nested_flag_prints_subtree() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.stats", "--nested"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Projects"));
    assert!(out.stdout.contains("Clients"));
    // Pretty JSON, order preserved: Projects before Clients.
    let projects = out.stdout.find("Projects").unwrap();
    let clients = out.stdout.find("Clients").unwrap();
    assert!(projects < clients);

    Ok(())
}

#[test]
fn test_resolve_nested_flag_missing_key_fails() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.nope", "--nested"])?;
    assert_eq!(out.code, 1);
    assert!(out.stderr.contains("not found"));

    Ok(())
}

#[test]
fn test_resolve_uses_persisted_language() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    test.write_file(".marquee-state.json", r#"{"language": "bg"}"#)?;

    let out = test.run(&["resolve", "hero.title"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "Изграждаме софтуер");

    Ok(())
}

#[test]
fn test_resolve_corrupt_preference_falls_back_to_default() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    test.write_file(".marquee-state.json", r#"{"language": "xx"}"#)?;

    let out = test.run(&["resolve", "hero.title"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "We build software");

    Ok(())
}

#[test]
fn test_resolve_env_language_detection() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let output = test
        .command()
        .args(["resolve", "hero.title"])
        .env("LANG", "bg_BG.UTF-8")
        .output()?;
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Изграждаме софтуер"
    );

    Ok(())
}

#[test]
fn test_resolve_save_language_persists() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&[
        "resolve",
        "hero.title",
        "--language",
        "bg",
        "--save-language",
    ])?;
    assert_eq!(out.code, 0);
    assert!(test.read_file(".marquee-state.json")?.contains("\"bg\""));

    // Subsequent run picks up the preference without the flag.
    let out = test.run(&["resolve", "hero.title"])?;
    assert_eq!(out.stdout.trim(), "Изграждаме софтуер");

    Ok(())
}

#[test]
fn test_resolve_invalid_language_flag_is_error() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["resolve", "hero.title", "--language", "xx"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("Unsupported language code"));

    Ok(())
}
