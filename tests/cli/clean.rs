use anyhow::Result;

use crate::CliTest;

#[test]
fn test_clean_removes_compiled_catalogs_and_empty_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locale/fr/LC_MESSAGES/myapp.mo", "mo")?;
    test.write_file("locale/fr/LC_MESSAGES/notes", "keep me")?;

    let output = test.clean_command().output()?;

    assert!(output.status.success());
    assert!(!test.root().join("locale/fr/LC_MESSAGES/myapp.mo").exists());
    assert!(test.root().join("locale/fr/LC_MESSAGES/notes").exists());
    // Directories still holding files are reported, not errors.
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("not removed"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_clean_force_removes_everything() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locale/fr/LC_MESSAGES/myapp.mo", "mo")?;
    test.write_file("locale/fr/LC_MESSAGES/notes", "stale")?;

    let output = test.clean_command().arg("--force").output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.is_empty(), "stderr: {stderr}");
    let remaining: Vec<_> = std::fs::read_dir(test.root().join("locale"))?.collect();
    assert!(remaining.is_empty());
    Ok(())
}

#[test]
fn test_force_clean_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".mopackrc.json", r#"{ "force_clean": true }"#)?;
    test.write_file("locale/fr/stale.log", "stale")?;

    let output = test.clean_command().output()?;

    assert!(output.status.success());
    let remaining: Vec<_> = std::fs::read_dir(test.root().join("locale"))?.collect();
    assert!(remaining.is_empty());
    Ok(())
}

#[test]
fn test_clean_without_locale_directory_is_quiet() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.clean_command().output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_clean_twice_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locale/fr/LC_MESSAGES/myapp.mo", "mo")?;

    let first = test.clean_command().output()?;
    assert!(first.status.success());

    let second = test.clean_command().output()?;
    assert!(second.status.success());
    assert!(second.stderr.is_empty());
    Ok(())
}
