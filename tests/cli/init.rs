use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    let content = test.read_file(".marqueerc.json")?;
    assert!(content.contains("localesRoot"));
    assert!(content.contains("defaultLanguage"));
    assert!(content.contains("stateFile"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".marqueerc.json", "{}")?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("already exists"));

    Ok(())
}
