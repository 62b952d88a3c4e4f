use anyhow::Result;

use questbook_lint::{
    parse_questbook_txt, parse_questbook_txt_with, Color, FormatError, Modifiers, ParseOptions,
    Style, TextEntry,
};

fn text(color: Color, content: &str) -> TextEntry {
    TextEntry::Text {
        style: Style {
            color,
            modifiers: Modifiers::default(),
        },
        content: content.to_string(),
    }
}

fn plain(content: &str) -> TextEntry {
    text(Color::DEFAULT, content)
}

#[test]
fn test_parse_colored_and_reset() -> Result<()> {
    let article = parse_questbook_txt("§aFoo§r bar")?;
    assert_eq!(article.texts(), &[text(Color::Green, "Foo"), plain(" bar")]);
    Ok(())
}

#[test]
fn test_parse_plain_text() -> Result<()> {
    let article = parse_questbook_txt("Hello, world")?;
    assert_eq!(article.texts(), &[plain("Hello, world")]);
    assert!(article.texts()[0].is_ignorable());
    Ok(())
}

#[test]
fn test_parse_empty() -> Result<()> {
    let article = parse_questbook_txt("")?;
    assert!(article.is_empty());
    Ok(())
}

#[test]
fn test_line_breaks_between_lines() -> Result<()> {
    let article = parse_questbook_txt("Intro%nSection")?;
    assert_eq!(
        article.texts(),
        &[plain("Intro"), TextEntry::LineBreak, plain("Section")]
    );
    assert_eq!(article.texts()[1].content(), "%n");
    Ok(())
}

#[test]
fn test_line_break_count_matches_lines() -> Result<()> {
    let raw = "§6Quest%nCollect §e10§r logs%nThen §cdefeat§r the boss%nDone";
    let article = parse_questbook_txt(raw)?;
    assert_eq!(article.line_break_count(), raw.split("%n").count() - 1);
    Ok(())
}

#[test]
fn test_line_breaks_never_at_edges() -> Result<()> {
    for raw in ["%nfoo", "foo%n", "foo%n%nbar", "%n%n", "§a%nfoo%n§r%nbar%n§b"] {
        let article = parse_questbook_txt(raw)?;
        let texts = article.texts();

        if let Some(first) = texts.first() {
            assert!(!first.is_line_break(), "{:?}", raw);
        }
        if let Some(last) = texts.last() {
            assert!(!last.is_line_break(), "{:?}", raw);
        }
    }

    let article = parse_questbook_txt("%n%nfoo%n%n")?;
    assert_eq!(article.texts(), &[plain("foo")]);
    Ok(())
}

#[test]
fn test_empty_line_keeps_its_break() -> Result<()> {
    let article = parse_questbook_txt("foo%n%nbar")?;
    assert_eq!(
        article.texts(),
        &[
            plain("foo"),
            TextEntry::LineBreak,
            TextEntry::LineBreak,
            plain("bar")
        ]
    );

    // an escape-only line is empty too
    let article = parse_questbook_txt("§aTitle%n§r§b%n%nBody")?;
    assert_eq!(article.line_break_count(), 3);
    Ok(())
}

#[test]
fn test_line_break_count_with_empty_lines() -> Result<()> {
    let raw = "§6Quest%n%nCollect §e10§r logs%n%n%nDone";
    let article = parse_questbook_txt(raw)?;
    assert_eq!(article.line_break_count(), raw.split("%n").count() - 1);
    Ok(())
}

#[test]
fn test_color_does_not_carry_over_lines() -> Result<()> {
    let article = parse_questbook_txt("§cred%nnot red")?;
    assert_eq!(
        article.texts(),
        &[text(Color::Red, "red"), TextEntry::LineBreak, plain("not red")]
    );
    Ok(())
}

#[test]
fn test_adjacent_runs_are_not_merged() -> Result<()> {
    let article = parse_questbook_txt("§aone§atwo")?;
    assert_eq!(
        article.texts(),
        &[text(Color::Green, "one"), text(Color::Green, "two")]
    );
    Ok(())
}

#[test]
fn test_escape_only_line_has_no_runs() -> Result<()> {
    let article = parse_questbook_txt("§a§r§b")?;
    assert!(article.is_empty());
    Ok(())
}

#[test]
fn test_modifiers_are_dropped_by_default() -> Result<()> {
    let article = parse_questbook_txt("§lBold§r and §a§oitalic")?;
    assert_eq!(
        article.texts(),
        &[plain("Bold"), plain(" and "), text(Color::Green, "italic")]
    );
    Ok(())
}

#[test]
fn test_track_modifiers() -> Result<()> {
    let options = ParseOptions {
        track_modifiers: true,
    };
    let article = parse_questbook_txt_with("§a§lBold§o both§c plain red§r", &options)?;

    let styles: Vec<Style> = article.iter().filter_map(|t| t.style().copied()).collect();
    assert_eq!(styles.len(), 3);

    assert_eq!(styles[0].color, Color::Green);
    assert!(styles[0].modifiers.bold);
    assert!(!styles[0].modifiers.italic);

    assert!(styles[1].modifiers.bold);
    assert!(styles[1].modifiers.italic);

    // a color code clears the modifiers
    assert_eq!(styles[2].color, Color::Red);
    assert!(styles[2].modifiers.is_empty());
    assert_eq!(styles[2].codes(), "§c");
    assert_eq!(styles[1].codes(), "§a§l§o");
    Ok(())
}

#[test]
fn test_tracked_modifier_on_default_color_is_significant() -> Result<()> {
    let options = ParseOptions {
        track_modifiers: true,
    };
    let article = parse_questbook_txt_with("§lBold", &options)?;
    assert!(!article.texts()[0].is_ignorable());
    Ok(())
}

#[test]
fn test_literal_percent_is_kept() -> Result<()> {
    let article = parse_questbook_txt("100%% done")?;
    assert_eq!(article.texts(), &[plain("100%% done")]);
    Ok(())
}

#[test]
fn test_lone_section_sign_at_line_end() -> Result<()> {
    let article = parse_questbook_txt("foo§%nbar")?;
    assert_eq!(
        article.texts(),
        &[plain("foo"), TextEntry::LineBreak, plain("bar")]
    );
    Ok(())
}

#[test]
fn test_content_is_line_without_escapes() -> Result<()> {
    let raw = "§6Gold §lcoins§r and %% more%n§b§nLinks§r here";
    let article = parse_questbook_txt(raw)?;

    let mut lines = vec![String::new()];
    for entry in &article {
        match entry {
            TextEntry::LineBreak => lines.push(String::new()),
            TextEntry::Text { content, .. } => {
                assert!(!content.is_empty());
                lines.last_mut().unwrap().push_str(content);
            }
        }
    }
    assert_eq!(lines, vec!["Gold coins and %% more", "Links here"]);
    Ok(())
}

#[test]
fn test_invalid_percent_escape() {
    for c in ['a', 'N', ' ', '1', '§', 'é'] {
        let raw = format!("first%nsecond %{} line", c);
        let error = parse_questbook_txt(&raw).unwrap_err();
        assert!(
            matches!(error, FormatError::InvalidPercentEscape { .. }),
            "{:?}",
            error
        );
        assert_eq!(error.sequence(), format!("%{}", c));
        assert_eq!(error.line(), format!("second %{} line", c));
        assert_eq!(error.line_number(), 2);
    }
}

#[test]
fn test_invalid_section_escape() {
    for c in ['g', 'z', 'A', 'F', 'p', 'x', ' ', '§'] {
        let raw = format!("§{}oops", c);
        let error = parse_questbook_txt(&raw).unwrap_err();
        assert!(
            matches!(error, FormatError::InvalidSectionEscape { .. }),
            "{:?}",
            error
        );
        assert_eq!(error.sequence(), format!("§{}", c));
        assert_eq!(error.line_number(), 1);
    }
}

#[test]
fn test_every_valid_style_code_is_accepted() -> Result<()> {
    for c in "0123456789abcdefklmnor".chars() {
        parse_questbook_txt(&format!("§{}text", c))?;
    }
    Ok(())
}

#[test]
fn test_invalid_escape_after_valid_one_is_found() {
    let error = parse_questbook_txt("§aok §bok §qbad").unwrap_err();
    assert_eq!(error.sequence(), "§q");
}

#[test]
fn test_error_message() {
    let error = parse_questbook_txt("50%off").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Invalid escape \"%o\" in line 1: \"50%off\""
    );
}
