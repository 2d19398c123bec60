// duolog - core/render.rs
//
// Line rendering. Pure string building, no I/O.
//
// Shape (plain):   "<ts> <LEVEL> <file>:<line>: <message>\n"
// Shape (ansi):    "<ts> \x1b[Cm<LEVEL>\x1b[0m \x1b[90m<file>:<line>:\x1b[0m <message>\n"
//
// LEVEL is left-aligned in LEVEL_FIELD_WIDTH columns. An empty timestamp
// still leaves its separating space, so a line without timestamps starts
// with a single space.

use crate::core::level::Level;
use crate::util::constants::{ANSI_LOCATION, ANSI_RESET, LEVEL_FIELD_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Presentation strategy for console lines, fixed when an Emitter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Plain text.
    #[default]
    Plain,
    /// Level field coloured by severity, location field dim gray.
    Ansi,
}

impl Style {
    /// Style selected by the `color` cargo feature.
    pub const fn from_build() -> Self {
        if cfg!(feature = "color") {
            Style::Ansi
        } else {
            Style::Plain
        }
    }
}

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> Location<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

/// Render one complete line, trailing newline included.
///
/// A `Display` impl inside `message` that reports an error truncates the
/// message at that point; the line is still terminated.
pub fn render_line(
    style: Style,
    stamp: impl fmt::Display,
    level: Level,
    location: Location<'_>,
    message: fmt::Arguments<'_>,
) -> String {
    let mut out = String::with_capacity(64 + location.file.len());
    let _ = write_prefix(&mut out, style, stamp, level, location);
    let _ = out.write_fmt(message);
    out.push('\n');
    out
}

fn write_prefix(
    out: &mut String,
    style: Style,
    stamp: impl fmt::Display,
    level: Level,
    location: Location<'_>,
) -> fmt::Result {
    let Location { file, line } = location;
    match style {
        Style::Plain => write!(
            out,
            "{stamp} {level:<width$} {file}:{line}: ",
            width = LEVEL_FIELD_WIDTH
        ),
        Style::Ansi => write!(
            out,
            "{stamp} {color}{level:<width$}{ANSI_RESET} {ANSI_LOCATION}{file}:{line}:{ANSI_RESET} ",
            color = level.ansi_color(),
            width = LEVEL_FIELD_WIDTH
        ),
    }
}
