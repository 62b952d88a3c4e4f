use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, path::Path, process::ExitCode};
use tracing_subscriber::EnvFilter;

use questbook_lint::{
    config::{parse_args, Command, Config},
    diff::compare,
    lang_file::{compare_lang_files, LangFile},
    questbook_txt::{parser::parse_questbook_txt_with, parser_helper::Article},
    renderer::{render_keyed_report, render_report},
    utility::read_text_file,
};

// keyed runs with this many keys or fewer finish too fast for a bar
const PROGRESS_BAR_MIN_KEYS: usize = 16;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

// Ok(false) when the articles are not consistent
fn run() -> Result<bool> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "questbook-lint".to_string());
    let args: Vec<String> = args.collect();

    let config = match parse_args(&program, &args)? {
        Command::Help(usage) => {
            println!("{}", usage);
            return Ok(true);
        }
        Command::Run(config) => config,
    };

    init_logging(config.verbosity);

    if config.keyed {
        run_keyed(&config)
    } else {
        run_article(&config)
    }
}

fn init_logging(verbosity: usize) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_article(path: &Path, config: &Config) -> Result<Article> {
    let raw = read_text_file(path, config.encoding)?;
    let article = parse_questbook_txt_with(&raw, &config.parse_options)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(article)
}

fn run_article(config: &Config) -> Result<bool> {
    let article_1 = load_article(&config.file_1, config)?;
    let article_2 = load_article(&config.file_2, config)?;

    let result = compare(&article_1, &article_2);

    println!("{}", render_report(&result, &config.report)?);

    Ok(result.success)
}

fn load_lang_file(path: &Path, config: &Config) -> Result<LangFile> {
    let raw = read_text_file(path, config.encoding)?;
    LangFile::parse(&raw).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_keyed(config: &Config) -> Result<bool> {
    let file_1 = load_lang_file(&config.file_1, config)?;
    let file_2 = load_lang_file(&config.file_2, config)?;

    let pb = progress_bar_for(file_1.len());
    let diff = compare_lang_files(&file_1, &file_2, &config.parse_options, pb.clone());
    pb.finish_and_clear();

    println!("{}", render_keyed_report(&diff, &config.report)?);

    Ok(diff.success)
}

fn progress_bar_for(keys: usize) -> ProgressBar {
    if keys <= PROGRESS_BAR_MIN_KEYS {
        ProgressBar::hidden()
    } else {
        create_progress_bar(keys as u64)
    }
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#-"),
    );
    pb
}
