use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    questbook_txt::{error::FormatError, parser_helper::split_lines},
    style::StyleCode,
};

// `.` does not match a newline, so a lead character at the end of a line
// (or right before a newline) is not an escape and passes unchecked.
static REGEX_PERCENT_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%(.)").unwrap());
static REGEX_SECTION_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"§(.)").unwrap());

// Checks every escape of the document before anything is built.
pub fn validate_questbook_txt(raw: &str) -> Result<(), FormatError> {
    for (i, line) in split_lines(raw).enumerate() {
        validate_line(line, i + 1)?;
    }
    Ok(())
}

// `line` must not contain `%n`; the line separator is consumed by `split_lines`.
pub fn validate_line(line: &str, line_number: usize) -> Result<(), FormatError> {
    for captures in REGEX_PERCENT_ESCAPE.captures_iter(line) {
        let escaped = &captures[1];
        if escaped != "n" && escaped != "%" {
            return Err(FormatError::InvalidPercentEscape {
                sequence: captures[0].to_string(),
                line: line.to_string(),
                line_number,
            });
        }
    }

    for captures in REGEX_SECTION_ESCAPE.captures_iter(line) {
        let is_valid = captures[1]
            .chars()
            .next()
            .is_some_and(StyleCode::is_valid_escape);
        if !is_valid {
            return Err(FormatError::InvalidSectionEscape {
                sequence: captures[0].to_string(),
                line: line.to_string(),
                line_number,
            });
        }
    }

    Ok(())
}
