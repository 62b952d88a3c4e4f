use anyhow::Result;
use indicatif::ProgressBar;

use questbook_lint::{
    lang_file::{compare_entry, compare_lang_files, KeyedOutcome, LangFile, Side},
    FormatError, ParseOptions,
};

static EN_US: &str = r#"{
    "quest.1.title": "§6Getting Started",
    "quest.1.desc": "Craft a §aworkbench§r.%nThen open it.",
    "quest.2.title": "§cDanger",
    "quest.3.title": "Only in English"
}"#;

static JA_JP: &str = r#"{
    "quest.2.title": "§b危険",
    "quest.1.title": "§6はじめに",
    "quest.1.desc": "§a作業台§rを作ろう。%n開いてみよう。",
    "quest.4.title": "日本語のみ"
}"#;

#[test]
fn test_load_keeps_file_order() -> Result<()> {
    let file = LangFile::parse(EN_US)?;
    assert_eq!(file.len(), 4);
    assert_eq!(
        file.keys().collect::<Vec<_>>(),
        vec![
            "quest.1.title",
            "quest.1.desc",
            "quest.2.title",
            "quest.3.title"
        ]
    );
    assert_eq!(file.get("quest.2.title"), Some("§cDanger"));
    Ok(())
}

#[test]
fn test_load_rejects_non_string_values() {
    assert!(LangFile::parse(r#"{ "a": 1 }"#).is_err());
    assert!(LangFile::parse(r#"["a"]"#).is_err());
    assert!(LangFile::parse("not json").is_err());
}

#[test]
fn test_compare_lang_files() -> Result<()> {
    let en = LangFile::parse(EN_US)?;
    let ja = LangFile::parse(JA_JP)?;

    let diff = compare_lang_files(&en, &ja, &ParseOptions::default(), ProgressBar::hidden());

    assert!(!diff.success);
    assert_eq!(
        diff.entries.iter().map(|e| e.key.as_str()).collect::<Vec<_>>(),
        vec!["quest.1.title", "quest.1.desc", "quest.2.title"]
    );
    assert!(diff.entries[0].success());
    assert!(diff.entries[1].success());
    assert!(!diff.entries[2].success());
    assert_eq!(diff.missing, vec!["quest.3.title"]);
    assert_eq!(diff.extra, vec!["quest.4.title"]);

    let failed: Vec<_> = diff.failed_entries().map(|e| e.key.as_str()).collect();
    assert_eq!(failed, vec!["quest.2.title"]);
    Ok(())
}

#[test]
fn test_missing_keys_do_not_fail() -> Result<()> {
    let en = LangFile::parse(r#"{ "a": "§aA", "b": "B" }"#)?;
    let ja = LangFile::parse(r#"{ "a": "§aエー" }"#)?;

    let diff = compare_lang_files(&en, &ja, &ParseOptions::default(), ProgressBar::hidden());
    assert!(diff.success);
    assert_eq!(diff.missing, vec!["b"]);
    Ok(())
}

#[test]
fn test_invalid_entry_is_reported_with_side() {
    let entry = compare_entry("k", "fine", "§zbad", &ParseOptions::default());
    assert_eq!(entry.key, "k");
    assert!(!entry.success());
    match entry.outcome {
        KeyedOutcome::Invalid { side, error } => {
            assert_eq!(side, Side::Article2);
            assert!(matches!(error, FormatError::InvalidSectionEscape { .. }));
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn test_invalid_entry_does_not_stop_others() -> Result<()> {
    let en = LangFile::parse(r#"{ "a": "50%off", "b": "§aok" }"#)?;
    let ja = LangFile::parse(r#"{ "a": "50%%オフ", "b": "§aオーケー" }"#)?;

    let diff = compare_lang_files(&en, &ja, &ParseOptions::default(), ProgressBar::hidden());
    assert!(!diff.success);
    assert_eq!(diff.entries.len(), 2);
    assert!(matches!(
        diff.entries[0].outcome,
        KeyedOutcome::Invalid {
            side: Side::Article1,
            ..
        }
    ));
    assert!(diff.entries[1].success());
    Ok(())
}
