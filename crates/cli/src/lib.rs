//! `permnames` — translate a raw permission JSON document into API rows.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use permnames_core::TranslateResult;
use permnames_translator::{FormattedPermissionRow, PermissionTranslator, RawPermissionSet};

/// Environment variable switching output to single-line JSON.
pub const COMPACT_ENV: &str = "PERMNAMES_COMPACT";

/// Where the raw permission set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Translate a raw permission set (JSON) into canonical permission rows.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "permnames", version)]
pub struct CliOptions {
    /// Raw permission set to read; stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed output.
    #[arg(long, env = COMPACT_ENV, value_parser = clap::builder::FalseyValueParser::new())]
    pub compact: bool,
}

impl CliOptions {
    pub fn input(&self) -> Input {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }
}

/// Serialize rows as JSON.
pub fn render(rows: &[FormattedPermissionRow], compact: bool) -> TranslateResult<String> {
    let text = if compact {
        serde_json::to_string(rows)?
    } else {
        serde_json::to_string_pretty(rows)?
    };
    Ok(text)
}

/// Read, translate, and write. Returns the number of rows written.
pub fn run<R, W>(options: &CliOptions, stdin: R, mut stdout: W) -> anyhow::Result<usize>
where
    R: Read,
    W: Write,
{
    let text = read_input(&options.input(), stdin)?;
    let raw = RawPermissionSet::from_json_str(&text).context("failed to parse raw permission set")?;

    let translator = PermissionTranslator::new();
    let rows = translator.format(&raw);

    let rendered = render(&rows, options.compact).context("failed to encode rows")?;
    writeln!(stdout, "{rendered}").context("failed to write output")?;

    tracing::info!(rows = rows.len(), entries = raw.len(), "translated permission set");
    Ok(rows.len())
}

fn read_input<R: Read>(input: &Input, mut stdin: R) -> anyhow::Result<String> {
    match input {
        Input::Stdin => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}
