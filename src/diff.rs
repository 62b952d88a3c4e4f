use serde::Serialize;
use tracing::trace;

use crate::questbook_txt::parser_helper::{Article, TextEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    Matched,
    // default-styled text on one side with nothing opposite
    SkippedUnformatted,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub kind: RowKind,
    pub left: Option<TextEntry>,
    pub right: Option<TextEntry>,
}

impl DiffRow {
    fn both(kind: RowKind, left: &TextEntry, right: &TextEntry) -> Self {
        Self {
            kind,
            left: Some(left.clone()),
            right: Some(right.clone()),
        }
    }

    fn left_only(kind: RowKind, left: &TextEntry) -> Self {
        Self {
            kind,
            left: Some(left.clone()),
            right: None,
        }
    }

    fn right_only(kind: RowKind, right: &TextEntry) -> Self {
        Self {
            kind,
            left: None,
            right: Some(right.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub success: bool,
    pub rows: Vec<DiffRow>,
}

impl DiffResult {
    pub fn count(&self, kind: RowKind) -> usize {
        self.rows.iter().filter(|row| row.kind == kind).count()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &DiffRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Mismatch)
    }
}

/// Walks both articles once and checks that their formatting lines up.
///
/// Default-styled text is free: two of them always match, and one facing a
/// formatted entry or a line break is skipped on its own side. Everything
/// else is consumed pairwise and must have the same style. No lookahead is
/// done, so swapped formatted phrases show up as two mismatches.
pub fn compare(article_1: &Article, article_2: &Article) -> DiffResult {
    let a = article_1.texts();
    let b = article_2.texts();

    let mut rows = Vec::with_capacity(a.len().max(b.len()));

    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (x, y) = (&a[i], &b[j]);

        match (x.is_ignorable(), y.is_ignorable()) {
            (true, true) => {
                rows.push(DiffRow::both(RowKind::Matched, x, y));
                i += 1;
                j += 1;
            }

            (true, false) => {
                rows.push(DiffRow::left_only(RowKind::SkippedUnformatted, x));
                i += 1;
            }

            (false, true) => {
                rows.push(DiffRow::right_only(RowKind::SkippedUnformatted, y));
                j += 1;
            }

            (false, false) => {
                let kind = if x.has_same_format(y) {
                    RowKind::Matched
                } else {
                    RowKind::Mismatch
                };
                rows.push(DiffRow::both(kind, x, y));
                i += 1;
                j += 1;
            }
        }

        trace!(i, j, kind = ?rows.last().map(|row| row.kind), "Alignment step");
    }

    // at most one of these has anything left
    for x in &a[i..] {
        rows.push(DiffRow::left_only(remainder_kind(x), x));
    }
    for y in &b[j..] {
        rows.push(DiffRow::right_only(remainder_kind(y), y));
    }

    let success = rows.iter().all(|row| row.kind != RowKind::Mismatch);

    DiffResult { success, rows }
}

fn remainder_kind(entry: &TextEntry) -> RowKind {
    if entry.is_ignorable() {
        RowKind::SkippedUnformatted
    } else {
        RowKind::Mismatch
    }
}
