use serde::Serialize;
use thiserror::Error;

/// Malformed escape found while parsing a questbook article.
///
/// `line` is the offending `%n`-delimited line with its escapes left as
/// written, `line_number` counts those lines from 1.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum FormatError {
    #[error("Invalid escape \"{sequence}\" in line {line_number}: \"{line}\"")]
    InvalidPercentEscape {
        sequence: String,
        line: String,
        line_number: usize,
    },

    #[error("Invalid style code \"{sequence}\" in line {line_number}: \"{line}\"")]
    InvalidSectionEscape {
        sequence: String,
        line: String,
        line_number: usize,
    },
}

impl FormatError {
    pub fn sequence(&self) -> &str {
        match self {
            Self::InvalidPercentEscape { sequence, .. }
            | Self::InvalidSectionEscape { sequence, .. } => sequence,
        }
    }

    pub fn line(&self) -> &str {
        match self {
            Self::InvalidPercentEscape { line, .. } | Self::InvalidSectionEscape { line, .. } => {
                line
            }
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            Self::InvalidPercentEscape { line_number, .. }
            | Self::InvalidSectionEscape { line_number, .. } => *line_number,
        }
    }
}
