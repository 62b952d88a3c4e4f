use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressIterator};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    diff::{compare, DiffResult},
    questbook_txt::{
        error::FormatError,
        parser::{parse_questbook_txt_with, ParseOptions},
    },
};

/// Language file: key -> questbook markup, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangFile {
    entries: Vec<(String, String)>,
}

impl LangFile {
    pub fn parse(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).context("Invalid JSON")?;

        let object = match value {
            serde_json::Value::Object(object) => object,
            value => bail!("Language file must be a JSON object, found: {}", value),
        };

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value {
                serde_json::Value::String(text) => entries.push((key, text)),
                value => bail!("Value of {:?} is not a string: {}", key, value),
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Article1,
    Article2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum KeyedOutcome {
    Compared(DiffResult),
    Invalid { side: Side, error: FormatError },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedEntry {
    pub key: String,
    pub outcome: KeyedOutcome,
}

impl KeyedEntry {
    pub fn success(&self) -> bool {
        matches!(&self.outcome, KeyedOutcome::Compared(result) if result.success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedDiff {
    pub success: bool,
    pub entries: Vec<KeyedEntry>,
    // in the first file only
    pub missing: Vec<String>,
    // in the second file only
    pub extra: Vec<String>,
}

impl KeyedDiff {
    pub fn failed_entries(&self) -> impl Iterator<Item = &KeyedEntry> {
        self.entries.iter().filter(|entry| !entry.success())
    }
}

pub fn compare_entry(
    key: &str,
    text_1: &str,
    text_2: &str,
    options: &ParseOptions,
) -> KeyedEntry {
    let parsed = parse_questbook_txt_with(text_1, options)
        .map_err(|error| (Side::Article1, error))
        .and_then(|article_1| {
            parse_questbook_txt_with(text_2, options)
                .map(|article_2| (article_1, article_2))
                .map_err(|error| (Side::Article2, error))
        });

    let outcome = match parsed {
        Ok((article_1, article_2)) => KeyedOutcome::Compared(compare(&article_1, &article_2)),
        Err((side, error)) => {
            warn!(key, ?side, %error, "Entry cannot be parsed");
            KeyedOutcome::Invalid { side, error }
        }
    };

    KeyedEntry {
        key: key.to_string(),
        outcome,
    }
}

// Entries are reported in the order of `file_1`.
pub fn compare_lang_files(
    file_1: &LangFile,
    file_2: &LangFile,
    options: &ParseOptions,
    progress: ProgressBar,
) -> KeyedDiff {
    let texts_2: HashMap<&str, &str> = file_2.iter().collect();
    let texts_1: HashMap<&str, &str> = file_1.iter().collect();

    let mut entries = Vec::new();
    let mut missing = Vec::new();

    for (key, text_1) in file_1.iter().progress_with(progress) {
        match texts_2.get(key) {
            Some(text_2) => entries.push(compare_entry(key, text_1, text_2, options)),
            None => {
                warn!(key, "Missing from the second file");
                missing.push(key.to_string());
            }
        }
    }

    let extra: Vec<String> = file_2
        .keys()
        .filter(|key| !texts_1.contains_key(key))
        .map(|key| key.to_string())
        .collect();
    for key in &extra {
        warn!(key = key.as_str(), "Missing from the first file");
    }

    let success = entries.iter().all(KeyedEntry::success);

    info!(
        compared = entries.len(),
        missing = missing.len(),
        extra = extra.len(),
        success,
        "Compared language files"
    );

    KeyedDiff {
        success,
        entries,
        missing,
        extra,
    }
}
