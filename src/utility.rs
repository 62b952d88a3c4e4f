pub mod text_file;

pub use text_file::{decode_text, encoding_of, read_text_file};
