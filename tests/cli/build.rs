use anyhow::Result;

use crate::CliTest;

const EMPTY_PO: &str = "msgid \"\"\nmsgstr \"\"\n";

#[test]
fn test_wrong_target_warns_and_does_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.po", EMPTY_PO)?;

    let output = test
        .build_command()
        .arg("--target")
        .arg("sdist")
        .output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning"), "stderr: {stderr}");
    assert!(stderr.contains("sdist"), "stderr: {stderr}");
    assert!(!test.root().join("locale").exists());
    Ok(())
}

#[test]
fn test_missing_messages_directory_fails_the_build_step() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("error"), "stderr: {stderr}");
    assert!(stderr.contains("messages"), "stderr: {stderr}");
    assert!(!test.root().join("locale").exists());
    Ok(())
}

#[test]
fn test_empty_messages_directory_stages_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("messages")?;

    let output = test.build_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(!test.root().join("locale").exists());
    Ok(())
}

#[test]
fn test_unrecognized_filenames_are_skipped() -> Result<()> {
    let test = CliTest::new()?;
    // Neither entry is a recognized translation source: one has the wrong
    // extension, the other's stem is not [<domain>-]<locale>.
    test.write_file("messages/notes.txt", "scratch")?;
    test.write_file("messages/readme.po", EMPTY_PO)?;

    let output = test.build_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(!test.root().join("locale").exists());
    Ok(())
}

#[test]
fn test_missing_custom_messages_directory_names_it() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".mopackrc.json", r#"{ "messages": "po" }"#)?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("po"), "stderr: {stderr}");
    Ok(())
}
