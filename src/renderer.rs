use anyhow::{anyhow, bail, Result};
use crossterm::style::{Color, Stylize};
use serde::Serialize;

use crate::{
    diff::{DiffResult, DiffRow, RowKind},
    lang_file::{KeyedDiff, KeyedOutcome, Side},
    questbook_txt::parser_helper::TextEntry,
};

// When the row table is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTable {
    Always,
    OnError,
    Never,
}

impl ShowTable {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "always" => Ok(Self::Always),
            "on-error" | "on_error" => Ok(Self::OnError),
            "never" => Ok(Self::Never),
            name => bail!("Unknown table policy: {}", name),
        }
    }

    pub fn should_show(&self, success: bool) -> bool {
        match self {
            Self::Always => true,
            Self::OnError => !success,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            name => bail!("Unknown output format: {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_table: ShowTable,
    pub format: OutputFormat,
    pub color: bool,
    pub titles: [String; 2],
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_table: ShowTable::OnError,
            format: OutputFormat::Table,
            color: true,
            titles: ["Article 1".to_string(), "Article 2".to_string()],
        }
    }
}

// "§a" + content, "%n" for a line break
pub fn format_entry(entry: &TextEntry) -> String {
    let (codes, content) = entry_parts(entry);
    format!("{}{}", codes, content)
}

fn entry_parts(entry: &TextEntry) -> (String, String) {
    match entry {
        TextEntry::Text { style, content } => (style.codes(), escape_control(content)),
        TextEntry::LineBreak => (String::new(), entry.content().to_string()),
    }
}

// keeps one row on one terminal line
fn escape_control(content: &str) -> String {
    content.replace('\r', "\\r").replace('\n', "\\n").replace('\t', "\\t")
}

fn row_texts(row: &DiffRow) -> (String, String) {
    (
        row.left.as_ref().map(format_entry).unwrap_or_default(),
        row.right.as_ref().map(format_entry).unwrap_or_default(),
    )
}

fn kind_name(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Matched => "matched",
        RowKind::SkippedUnformatted => "skipped-unformatted",
        RowKind::Mismatch => "mismatch",
    }
}

#[derive(Debug, Clone, Copy)]
enum Paint {
    Plain,
    Whole(Color),
    Codes(Color),
}

struct Cell {
    codes: String,
    content: String,
    paint: Paint,
}

impl Cell {
    fn empty() -> Self {
        Self {
            codes: String::new(),
            content: String::new(),
            paint: Paint::Plain,
        }
    }

    fn title(title: &str) -> Self {
        Self {
            codes: String::new(),
            content: title.to_string(),
            paint: Paint::Plain,
        }
    }

    fn of(entry: Option<&TextEntry>, paint: Paint) -> Self {
        match entry {
            Some(entry) => {
                let (codes, content) = entry_parts(entry);
                Self {
                    codes,
                    content,
                    paint,
                }
            }
            None => Self::empty(),
        }
    }

    fn width(&self) -> usize {
        self.codes.chars().count() + self.content.chars().count()
    }

    // Padding is added outside the styled part so escape sequences do not
    // count towards the column width.
    fn render(&self, width: usize, color: bool) -> String {
        let padding = " ".repeat(width.saturating_sub(self.width()));

        if !color {
            return format!("{}{}{}", self.codes, self.content, padding);
        }

        match self.paint {
            Paint::Plain => format!("{}{}{}", self.codes, self.content, padding),
            Paint::Whole(c) => format!(
                "{}{}",
                format!("{}{}", self.codes, self.content).with(c),
                padding
            ),
            Paint::Codes(c) => format!(
                "{}{}{}",
                self.codes.as_str().with(c).bold(),
                self.content,
                padding
            ),
        }
    }
}

// A line break has no codes to highlight, so a mismatched one is painted whole.
fn mismatch_paint(entry: Option<&TextEntry>, color: Color) -> Paint {
    match entry {
        Some(TextEntry::LineBreak) => Paint::Whole(color),
        _ => Paint::Codes(color),
    }
}

fn row_cells(row: &DiffRow) -> [Cell; 2] {
    let (left, right) = (row.left.as_ref(), row.right.as_ref());

    let (left_paint, right_paint) = match row.kind {
        RowKind::Matched => (Paint::Plain, Paint::Plain),
        RowKind::SkippedUnformatted => (Paint::Whole(Color::Yellow), Paint::Whole(Color::Yellow)),
        // leftovers on either side are red
        RowKind::Mismatch if left.is_none() || right.is_none() => (
            mismatch_paint(left, Color::Red),
            mismatch_paint(right, Color::Red),
        ),
        RowKind::Mismatch => (
            mismatch_paint(left, Color::Red),
            mismatch_paint(right, Color::Green),
        ),
    };

    [Cell::of(left, left_paint), Cell::of(right, right_paint)]
}

fn border(widths: &[usize; 2], left: char, middle: char, right: char) -> String {
    format!(
        "{}{}{}{}{}",
        left,
        "─".repeat(widths[0] + 2),
        middle,
        "─".repeat(widths[1] + 2),
        right
    )
}

pub fn render_table(result: &DiffResult, options: &ReportOptions) -> String {
    let header = [Cell::title(&options.titles[0]), Cell::title(&options.titles[1])];
    let rows: Vec<[Cell; 2]> = result.rows.iter().map(row_cells).collect();

    let mut widths = [header[0].width(), header[1].width()];
    for row in &rows {
        widths[0] = widths[0].max(row[0].width());
        widths[1] = widths[1].max(row[1].width());
    }

    let line = |cells: &[Cell; 2]| {
        format!(
            "│ {} │ {} │",
            cells[0].render(widths[0], options.color),
            cells[1].render(widths[1], options.color)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(border(&widths, '┌', '┬', '┐'));
    lines.push(line(&header));
    lines.push(border(&widths, '╞', '╪', '╡'));
    for (i, row) in rows.iter().enumerate() {
        if 0 < i {
            lines.push(border(&widths, '├', '┼', '┤'));
        }
        lines.push(line(row));
    }
    lines.push(border(&widths, '└', '┴', '┘'));

    lines.join("\n")
}

fn verdict(success: bool, color: bool) -> String {
    let (message, c) = if success {
        ("Articles are consistent!", Color::Green)
    } else {
        ("Articles are not consistent!", Color::Red)
    };

    if color {
        message.with(c).to_string()
    } else {
        message.to_string()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn csv_to_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to write csv: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_csv(result: &DiffResult, options: &ReportOptions) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["kind", options.titles[0].as_str(), options.titles[1].as_str()])?;

    for row in &result.rows {
        let (left, right) = row_texts(row);
        writer.write_record([kind_name(row.kind), left.as_str(), right.as_str()])?;
    }

    csv_to_string(writer)
}

/// Everything to print for one article pair.
pub fn render_report(result: &DiffResult, options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Csv => render_csv(result, options),
        OutputFormat::Table => {
            let mut out = verdict(result.success, options.color);
            if options.show_table.should_show(result.success) {
                out.push('\n');
                out.push_str(&render_table(result, options));
            }
            Ok(out)
        }
    }
}

fn side_title<'a>(side: Side, options: &'a ReportOptions) -> &'a str {
    match side {
        Side::Article1 => &options.titles[0],
        Side::Article2 => &options.titles[1],
    }
}

pub fn render_keyed_csv(diff: &KeyedDiff, options: &ReportOptions) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "key",
        "kind",
        options.titles[0].as_str(),
        options.titles[1].as_str(),
    ])?;

    for entry in &diff.entries {
        match &entry.outcome {
            KeyedOutcome::Compared(result) => {
                for row in &result.rows {
                    let (left, right) = row_texts(row);
                    writer.write_record([
                        entry.key.as_str(),
                        kind_name(row.kind),
                        left.as_str(),
                        right.as_str(),
                    ])?;
                }
            }
            KeyedOutcome::Invalid { side, error } => {
                let message = error.to_string();
                let (left, right) = match side {
                    Side::Article1 => (message.as_str(), ""),
                    Side::Article2 => ("", message.as_str()),
                };
                writer.write_record([entry.key.as_str(), "invalid", left, right])?;
            }
        }
    }
    for key in &diff.missing {
        writer.write_record([key.as_str(), "missing", "", ""])?;
    }
    for key in &diff.extra {
        writer.write_record([key.as_str(), "extra", "", ""])?;
    }

    csv_to_string(writer)
}

pub fn render_keyed_report(diff: &KeyedDiff, options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => to_json(diff),
        OutputFormat::Csv => render_keyed_csv(diff, options),
        OutputFormat::Table => {
            let mut lines = Vec::new();

            for entry in &diff.entries {
                match &entry.outcome {
                    KeyedOutcome::Compared(result) => {
                        if options.show_table.should_show(result.success) {
                            lines.push(format!(
                                "[{}] {}",
                                entry.key,
                                verdict(result.success, options.color)
                            ));
                            lines.push(render_table(result, options));
                        }
                    }
                    KeyedOutcome::Invalid { side, error } => {
                        let message =
                            format!("[{}] {}: {}", entry.key, side_title(*side, options), error);
                        lines.push(if options.color {
                            message.red().to_string()
                        } else {
                            message
                        });
                    }
                }
            }

            for key in &diff.missing {
                lines.push(format!("[{}] missing from {}", key, options.titles[1]));
            }
            for key in &diff.extra {
                lines.push(format!("[{}] missing from {}", key, options.titles[0]));
            }

            let failed = diff.failed_entries().count();
            lines.push(format!(
                "{} of {} entries are consistent.",
                diff.entries.len() - failed,
                diff.entries.len()
            ));
            lines.push(verdict(diff.success, options.color));

            Ok(lines.join("\n"))
        }
    }
}
