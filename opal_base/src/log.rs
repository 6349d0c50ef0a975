//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::Style;

use crate::source_file::{Location, SourceFile};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Style::Red.with("[error]:"),
            Severity::Info => Style::Green.with("[info]:"),
            Severity::Warning => Style::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the source line around a [`Location`] and
/// marks its column.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The source text the location points into.
    pub source_file: &'a SourceFile,

    /// The location to be marked.
    pub location: Location,

    /// The help message to be displayed under the marker.
    pub help_display: Option<T>,
}

impl<'a, T: Display> SourceCodeDisplay<'a, T> {
    fn write_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        line_number: usize,
        width: usize,
    ) -> std::fmt::Result {
        let Some(line) = self.source_file.get_line(line_number) else {
            return Ok(());
        };

        write!(
            f,
            "{}{:pad$} {} ",
            Style::Bold.with(Style::Cyan.with(line_number)),
            "",
            Style::Bold.with(Style::Cyan.with("┃")),
            pad = width - get_digit(line_number),
        )?;

        for char in line.chars() {
            // tabs are printed as 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }

    fn write_pipe(&self, f: &mut std::fmt::Formatter<'_>, width: usize) -> std::fmt::Result {
        write!(
            f,
            "{:width$} {}",
            "",
            Style::Bold.with(Style::Cyan.with("┃"))
        )
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.location.line;

        // the line after the marked one is shown too
        let width = get_digit(line + 1);

        writeln!(
            f,
            "{:width$}{} {}:{}",
            "",
            Style::Bold.with(Style::Cyan.with("-->")),
            self.source_file.full_path().display(),
            self.location,
        )?;

        self.write_pipe(f, width)?;
        writeln!(f)?;

        if line > 1 {
            self.write_line(f, line - 1, width)?;
        }
        self.write_line(f, line, width)?;

        // prints the marker under the column
        self.write_pipe(f, width)?;
        write!(f, " ")?;
        if let Some(text) = self.source_file.get_line(line) {
            for char in text.chars().take(self.location.column.saturating_sub(1)) {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }
        }
        write!(f, "{}", Style::Bold.with(Style::Red.with("^")))?;
        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }
        writeln!(f)?;

        self.write_line(f, line + 1, width)?;

        self.write_pipe(f, width)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests;
