use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use encoding_rs::Encoding;

use crate::{
    questbook_txt::parser::ParseOptions,
    renderer::{OutputFormat, ReportOptions, ShowTable},
    utility::encoding_of,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub file_1: PathBuf,
    pub file_2: PathBuf,
    pub encoding: &'static Encoding,
    pub parse_options: ParseOptions,
    pub report: ReportOptions,
    pub keyed: bool,
    pub verbosity: usize,
}

pub enum Command {
    Run(Config),
    Help(String),
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt(
        "s",
        "show-table",
        "when to print the comparison table: always, on-error (default), never",
        "WHEN",
    );
    opts.optopt("f", "format", "table (default), json or csv", "FORMAT");
    opts.optopt("e", "encoding", "encoding of both files (default utf-8)", "LABEL");
    opts.optopt("t", "titles", "column titles (default \"Article 1,Article 2\")", "LEFT,RIGHT");
    opts.optflag("", "track-modifiers", "treat §k-§o as part of the style");
    opts.optflag("", "keyed", "compare two JSON language files entry by entry");
    opts.optflag("", "no-color", "do not color the output");
    opts.optflagmulti("v", "verbose", "more logging (repeatable)");
    opts.optflag("h", "help", "print this help");
    opts
}

pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {} [OPTIONS] FILE1 FILE2", program);
    options().usage(&brief)
}

fn parse_titles(value: &str) -> Result<[String; 2]> {
    let titles: Vec<&str> = value.split(',').map(str::trim).collect();
    ensure!(
        titles.len() == 2 && titles.iter().all(|t| !t.is_empty()),
        "Expected two comma-separated titles: {:?}",
        value
    );
    Ok([titles[0].to_string(), titles[1].to_string()])
}

// `args` excludes the program name.
pub fn parse_args(program: &str, args: &[String]) -> Result<Command> {
    let matches = match options().parse(args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        return Ok(Command::Help(usage(program)));
    }

    let mut report = ReportOptions::default();

    if let Some(value) = matches.opt_str("s") {
        report.show_table = ShowTable::of(&value)?;
    }
    if let Some(value) = matches.opt_str("f") {
        report.format = OutputFormat::of(&value)?;
    }
    if let Some(value) = matches.opt_str("t") {
        report.titles = parse_titles(&value)?;
    }
    report.color = !matches.opt_present("no-color");

    let encoding = match matches.opt_str("e") {
        Some(label) => encoding_of(&label)?,
        None => encoding_rs::UTF_8,
    };

    let file_1 = matches.free.first().context("FILE1 is required")?;
    let file_2 = matches.free.get(1).context("FILE2 is required")?;
    ensure!(
        matches.free.len() == 2,
        "Unexpected arguments: {:?}",
        &matches.free[2..]
    );

    Ok(Command::Run(Config {
        file_1: PathBuf::from(file_1),
        file_2: PathBuf::from(file_2),
        encoding,
        parse_options: ParseOptions {
            track_modifiers: matches.opt_present("track-modifiers"),
        },
        report,
        keyed: matches.opt_present("keyed"),
        verbosity: matches.opt_count("v"),
    }))
}
