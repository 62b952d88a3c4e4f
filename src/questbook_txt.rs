// Questbook article markup
//
// - `%n` separates lines, `%%` is a literal percent (kept as written)
// - `§<code>` switches the current style; only 0-9, a-f, k-o and r may follow `§`
// - the style is reset to the default at the start of every line

pub mod error;
pub mod parser;
pub mod parser_helper;
pub mod tokenizer;
pub mod validator;
