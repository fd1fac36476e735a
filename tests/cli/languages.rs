use anyhow::Result;

use crate::CliTest;

#[test]
fn test_languages_lists_all_and_marks_active() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let out = test.run(&["languages"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("* en  English"));
    assert!(out.stdout.contains("  bg  Български"));

    Ok(())
}

#[test]
fn test_languages_active_follows_preference() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    test.write_file(".marquee-state.json", r#"{"language": "bg"}"#)?;

    let out = test.run(&["languages"])?;
    assert!(out.stdout.contains("* bg"));
    assert!(!out.stdout.contains("* en"));

    Ok(())
}

#[test]
fn test_languages_flags_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"k": "v"}"#)?;

    let out = test.run(&["languages"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("(no catalog)"));

    Ok(())
}
