use tracing::debug;

use crate::{
    questbook_txt::{
        error::FormatError,
        parser_helper::{split_lines, Article, ArticleBuilder},
        tokenizer::{tokenize_questbook_line, QuestbookTxtToken},
        validator::validate_questbook_txt,
    },
    style::{Modifiers, Style, StyleCode},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    // `§k`-`§o` set modifier flags that last until `§r`, a color code or the
    // end of the line. Off: they are accepted and dropped.
    pub track_modifiers: bool,
}

pub fn parse_questbook_txt(raw: &str) -> Result<Article, FormatError> {
    parse_questbook_txt_with(raw, &ParseOptions::default())
}

pub fn parse_questbook_txt_with(raw: &str, options: &ParseOptions) -> Result<Article, FormatError> {
    validate_questbook_txt(raw)?;

    let mut article = ArticleBuilder::new();

    for (i, line) in split_lines(raw).enumerate() {
        if 0 < i {
            article.push_line_break();
        }

        let mut style = Style::default();

        for token in tokenize_questbook_line(line) {
            match token {
                QuestbookTxtToken::Text(content) => article.push_text(style, content),

                QuestbookTxtToken::Escape(StyleCode::Reset) => style = Style::default(),

                QuestbookTxtToken::Escape(StyleCode::Color(color)) => {
                    style.color = color;
                    if options.track_modifiers {
                        style.modifiers = Modifiers::default();
                    }
                }

                QuestbookTxtToken::Escape(StyleCode::Modifier(modifier)) => {
                    if options.track_modifiers {
                        style.modifiers.set(modifier);
                    }
                }
            }
        }
    }

    let article = article.build();

    debug!(
        texts = article.len(),
        line_breaks = article.line_break_count(),
        "Parsed questbook article"
    );

    Ok(article)
}
