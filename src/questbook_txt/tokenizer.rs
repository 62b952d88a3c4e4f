use crate::style::StyleCode;

pub const SECTION_SIGN: char = '§';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestbookTxtToken {
    // maximal run of characters other than `§`
    Text(String),
    Escape(StyleCode),
}

// Splits one `%n`-delimited line into text runs and `§` escapes.
//
// A `§` that is not followed by a style code (end of line, newline) is dropped
// but still ends the current text run.
pub fn tokenize_questbook_line(line: &str) -> Vec<QuestbookTxtToken> {
    let mut tokens = Vec::new();

    let chars: Vec<char> = line.chars().collect();
    let mut chars: &[char] = &chars;

    let mut string_buffer = String::new();

    while !chars.is_empty() {
        if chars[0] != SECTION_SIGN {
            string_buffer.push(chars[0]);
            chars = &chars[1..];
            continue;
        }

        if !string_buffer.is_empty() {
            tokens.push(QuestbookTxtToken::Text(string_buffer));
            string_buffer = String::new();
        }

        match chars.get(1).and_then(|&c| StyleCode::of(c)) {
            Some(code) => {
                tokens.push(QuestbookTxtToken::Escape(code));
                chars = &chars[2..];
            }
            None => {
                chars = &chars[1..];
            }
        }
    }

    if !string_buffer.is_empty() {
        tokens.push(QuestbookTxtToken::Text(string_buffer));
    }

    tokens
}
