use crate::span::Span;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

/// A comma-delimited segment of a `parse_and_sum` input that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number: {segment}")]
pub struct ParseError {
    /// The segment exactly as it appeared in the input, before trimming.
    pub segment: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(segment: impl Into<String>, span: Span) -> Self {
        Self { segment: segment.into(), span }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read demo config: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid demo config: {msg}")]
    Toml { msg: String, path: Option<PathBuf> },
}

impl ConfigError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn toml(msg: impl Into<String>) -> Self {
        Self::Toml { msg: msg.into(), path: None }
    }

    /// Attach the file the config was loaded from.
    pub fn at(self, file: PathBuf) -> Self {
        match self {
            Self::Toml { msg, .. } => Self::Toml { msg, path: Some(file) },
            other => other,
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Read { path, .. } => Some(path),
            Self::Toml { path, .. } => path.as_ref(),
        }
    }
}

/// Render a ParseError against the input it came from, labelling the bad segment.
/// Output carries no ANSI colour so it can be compared in tests.
pub fn render_parse_error(input: &str, err: &ParseError) -> String {
    use ariadne::{Config, Label, Report, ReportKind, Source};

    let Some(bytes) = label_range(input, err.span) else {
        return format!("error: {err}\n");
    };
    // ariadne counts offsets in chars
    let range = char_offset(input, bytes.start)..char_offset(input, bytes.end);

    let label = if err.segment.trim().is_empty() {
        "expected an integer here".to_string()
    } else {
        format!("`{}` is not an integer", err.segment.trim())
    };

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string())
        .with_label(Label::new(range).with_message(label))
        .finish()
        .write(Source::from(input), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {err}\n"),
    }
}

/// Render a ConfigError the way the CLI reports it.
pub fn render_config_error(err: &ConfigError) -> String {
    match err.path() {
        Some(path) => format!("error[config]: {err}\n  --> {}\n", path.display()),
        None => format!("error[config]: {err}\n"),
    }
}

/// Byte range to underline. Empty segments borrow the neighbouring comma;
/// an empty input has nothing to point at.
fn label_range(input: &str, span: Span) -> Option<Range<usize>> {
    if !span.is_empty() {
        Some(span.range())
    } else if span.end < input.len() {
        Some(span.start..span.start + 1)
    } else if span.start > 0 {
        Some(span.start - 1..span.start)
    } else {
        None
    }
}

fn char_offset(input: &str, byte: usize) -> usize {
    input.get(..byte).map_or(0, |prefix| prefix.chars().count())
}
