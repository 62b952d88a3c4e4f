use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};
use encoding_rs::Encoding;

pub fn encoding_of(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .with_context(|| format!("Unknown encoding: {:?}", label))
}

// A BOM overrides `encoding`.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, used, had_errors) = encoding.decode(bytes);
    ensure!(!had_errors, "Malformed {} byte sequence", used.name());
    Ok(text.into_owned())
}

pub fn read_text_file(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_text(&bytes, encoding).with_context(|| format!("Failed to decode {}", path.display()))
}
