use anyhow::Result;

use crate::CliTest;

#[test]
fn test_play_no_delay_prints_all_stages_in_order() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["play", "hero", "--no-delay"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    let lines: Vec<&str> = out.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "We build software",
            "From idea to launch",
            "120+ Projects",
            "40 Clients",
            "Talk to us",
        ]
    );

    Ok(())
}

#[test]
fn test_play_language_switch_plays_other_catalog() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["play", "hero", "--no-delay", "--language", "bg"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Изграждаме софтуер"));
    assert!(out.stdout.contains("Свържете се"));

    Ok(())
}

#[test]
fn test_play_leaf_key() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["play", "hero.title", "--no-delay"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "We build software");

    Ok(())
}

#[test]
fn test_play_skips_absent_stages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hero": {"title": "Only title"}}"#)?;

    let out = test.run(&["play", "hero", "--no-delay"])?;
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "Only title");

    Ok(())
}

#[test]
fn test_play_missing_key_is_error() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["play", "nope", "--no-delay"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("not found"));

    Ok(())
}

#[test]
fn test_play_animated_short_sequence() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"hi": "AB"}"#)?;

    // 1ms per character keeps the animated path fast enough for CI.
    let out = test.run(&["play", "hi", "--char-interval", "1"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert_eq!(out.stdout.trim(), "AB");

    Ok(())
}
