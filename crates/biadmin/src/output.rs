//! Output formatting: table, JSON, YAML, plain.
//!
//! `PrintSink` is the CLI's `OutputSink`. Structured formats are written
//! to stdout as each object arrives; tables need every row for column
//! widths, so they are rendered on `finish`.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};
use tracing::debug;

use biadmin_config::Config;
use biadmin_core::{ErrorRecord, OutputSink};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Resolved output options ──────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct OutputOpts {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

impl OutputOpts {
    /// Flags win over `[defaults]` in the config file.
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Self {
        use clap::ValueEnum;

        let format = global.output.unwrap_or_else(|| {
            OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or(OutputFormat::Table)
        });
        let color = global.color.unwrap_or_else(|| {
            ColorMode::from_str(&cfg.defaults.color, true).unwrap_or(ColorMode::Auto)
        });
        Self {
            format,
            color: should_color(color),
            quiet: global.quiet,
        }
    }
}

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Streaming printer ────────────────────────────────────────────────

/// Prints command output as it is emitted.
///
/// `to_row` builds the table row, `id_fn` the `plain` line. The first
/// write failure is kept and reported by [`finish`](Self::finish); later
/// objects are dropped.
pub struct PrintSink<T, R> {
    opts: OutputOpts,
    to_row: fn(&T) -> R,
    id_fn: fn(&T) -> String,
    rows: Vec<R>,
    emitted: usize,
    failure: Option<CliError>,
}

impl<T, R> PrintSink<T, R>
where
    T: Serialize,
    R: Tabled,
{
    pub fn new(opts: OutputOpts, to_row: fn(&T) -> R, id_fn: fn(&T) -> String) -> Self {
        Self {
            opts,
            to_row,
            id_fn,
            rows: Vec::new(),
            emitted: 0,
            failure: None,
        }
    }

    fn emit(&mut self, item: &T) -> Result<(), CliError> {
        let first = self.emitted == 0;
        self.emitted += 1;
        if self.opts.quiet {
            return Ok(());
        }

        let mut out = io::stdout().lock();
        match self.opts.format {
            OutputFormat::Table => {
                self.rows.push((self.to_row)(item));
                return Ok(());
            }
            OutputFormat::Json => {
                let body = indent(&to_json(item, false)?);
                let lead = if first { "[\n" } else { ",\n" };
                write!(out, "{lead}{body}")?;
            }
            OutputFormat::JsonCompact => writeln!(out, "{}", to_json(item, true)?)?,
            OutputFormat::Yaml => write!(out, "---\n{}", to_yaml(item)?)?,
            OutputFormat::Plain => writeln!(out, "{}", (self.id_fn)(item))?,
        }
        out.flush()?;
        Ok(())
    }

    /// Flush buffered output and close open documents.
    ///
    /// Must be called even when the command failed, so partial output is
    /// well-formed.
    pub fn finish(self) -> Result<(), CliError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        if self.opts.quiet {
            return Ok(());
        }

        let mut out = io::stdout().lock();
        match self.opts.format {
            OutputFormat::Table => {
                if !self.rows.is_empty() {
                    writeln!(out, "{}", Table::new(&self.rows).with(Style::rounded()))?;
                }
            }
            OutputFormat::Json => {
                if self.emitted == 0 {
                    writeln!(out, "[]")?;
                } else {
                    writeln!(out, "\n]")?;
                }
            }
            OutputFormat::JsonCompact | OutputFormat::Yaml | OutputFormat::Plain => {}
        }
        out.flush()?;
        Ok(())
    }
}

impl<T, R> OutputSink<T> for PrintSink<T, R>
where
    T: Serialize,
    R: Tabled,
{
    fn write_object(&mut self, item: T) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = self.emit(&item) {
            self.failure = Some(err);
        }
    }

    /// The failing error itself is reported by `main`; the record only
    /// adds the id and target.
    fn write_error(&mut self, record: ErrorRecord) {
        debug!(
            error_id = %record.error_id,
            category = %record.category,
            target = record.target.as_deref().unwrap_or("-"),
            "error record"
        );
    }
}

// ── Single documents ─────────────────────────────────────────────────

/// Render one serializable value in a structured format. Table and plain
/// fall back to `text`.
pub fn render_single<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Plain => Ok(text(data)),
        OutputFormat::Json => to_json(data, false),
        OutputFormat::JsonCompact => to_json(data, true),
        OutputFormat::Yaml => to_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end_matches('\n'));
}

// ── Format-specific renderers ────────────────────────────────────────

fn to_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Serialize(e.to_string()))
}

fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Serialize(e.to_string()))
}

fn indent(body: &str) -> String {
    body.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
