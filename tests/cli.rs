use std::{
    path::PathBuf,
    process::{Command, Output},
};

use anyhow::Result;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run(args: &[&str], files: [&str; 2]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_questbook-lint"))
        .arg("--no-color")
        .args(args)
        .arg(fixture(files[0]))
        .arg(fixture(files[1]))
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_consistent_exits_zero() -> Result<()> {
    let output = run(&[], ["consistent/intro.1.txt", "consistent/intro.2.txt"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Articles are consistent!");
    Ok(())
}

#[test]
fn test_inconsistent_exits_one() -> Result<()> {
    let output = run(&[], ["inconsistent/boss.1.txt", "inconsistent/boss.2.txt"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Articles are not consistent!"));

    let output = run(
        &[],
        ["inconsistent/paragraph.1.txt", "inconsistent/paragraph.2.txt"],
    )?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_invalid_style_code_exits_two() -> Result<()> {
    let output = run(&[], ["invalid/style_code.txt", "consistent/intro.2.txt"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid style code \"§z\" in line 2"), "{}", stderr);
    Ok(())
}

#[test]
fn test_missing_file_exits_two() -> Result<()> {
    let output = run(&[], ["consistent/intro.1.txt", "consistent/missing.txt"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_bad_option_exits_two() -> Result<()> {
    let output = run(
        &["--format", "xml"],
        ["consistent/intro.1.txt", "consistent/intro.2.txt"],
    )?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_keyed_inconsistent_exits_one() -> Result<()> {
    let output = run(&["--keyed"], ["keyed/en_us.json", "keyed/ja_jp.json"])?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("[quest.boss.desc] Articles are not consistent!"), "{}", out);
    assert!(!out.contains("[quest.intro.desc]"), "{}", out);
    assert!(out.contains("1 of 2 entries are consistent."), "{}", out);
    Ok(())
}
