//! Checks that a translated questbook article keeps the formatting of the
//! original: the same `§` style codes and `%n` line breaks in the same order.
//! Plain text may differ freely.
//!
//! ```
//! use questbook_lint::{compare, parse_questbook_txt};
//!
//! let en = parse_questbook_txt("§aFoo§r bar").unwrap();
//! let ja = parse_questbook_txt("§aFoo§r baz").unwrap();
//! assert!(compare(&en, &ja).success);
//! ```

pub mod config;
pub mod diff;
pub mod lang_file;
pub mod questbook_txt;
pub mod renderer;
pub mod style;
pub mod utility;

pub use diff::{compare, DiffResult, DiffRow, RowKind};
pub use questbook_txt::{
    error::FormatError,
    parser::{parse_questbook_txt, parse_questbook_txt_with, ParseOptions},
    parser_helper::{Article, TextEntry},
};
pub use style::{Color, Modifier, Modifiers, Style, StyleCode};
