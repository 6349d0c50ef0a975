//! Writes the HTML compilation report.

use std::io::{self, Write};

use crate::pipeline::Compilation;

/// The title of the report.
pub const TITLE: &str = "OPaL compilation report";

/// Escapes the characters of `text` that have a meaning in HTML.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            character => escaped.push(character),
        }
    }

    escaped
}

fn write_textarea<W: Write>(output: &mut W, heading: &str, text: &str) -> io::Result<()> {
    writeln!(output, "<h3>{heading}</h3>")?;
    writeln!(output, "<hr>")?;
    writeln!(
        output,
        "<textarea style='resize: none;' readonly rows='25' cols='80'>\n{}\n</textarea>",
        escape(text)
    )
}

/// Writes the report of `compilation` to `output`.
///
/// The report shows the original source, the preprocessed source and the symbol table.
///
/// # Errors
/// Returns the error of the underlying writer.
pub fn write<W: Write>(compilation: &Compilation, output: &mut W) -> io::Result<()> {
    writeln!(output, "<!DOCTYPE html>")?;
    writeln!(output, "<html>")?;
    writeln!(output, "<head>")?;
    writeln!(output, "<meta charset='utf-8'>")?;
    writeln!(output, "<title>{TITLE}</title>")?;
    writeln!(output, "</head>")?;
    writeln!(output, "<body>")?;
    writeln!(output, "<h2>Compilation steps report</h2>")?;

    write_textarea(
        output,
        &format!(
            "Original source file: <code>{}</code>",
            escape(&compilation.source().full_path().display().to_string())
        ),
        compilation.source().content(),
    )?;
    write_textarea(
        output,
        "Preprocessed source",
        compilation.preprocessed().content(),
    )?;

    writeln!(output, "<h3>Symbol table</h3>")?;
    writeln!(output, "<hr>")?;
    writeln!(output, "<table>")?;
    writeln!(
        output,
        "<tr><th>Line</th><th>Column</th><th>Type</th><th>Value</th></tr>"
    )?;

    for lexeme in compilation.symbol_table().iter() {
        let value = match (lexeme.int_value(), lexeme.text_value()) {
            (Some(value), _) => value.to_string(),
            (None, Some(text)) => escape(text),
            (None, None) => String::new(),
        };

        writeln!(
            output,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{value}</td></tr>",
            lexeme.line(),
            lexeme.column(),
            lexeme.lexeme_type()
        )?;
    }

    writeln!(output, "</table>")?;
    writeln!(output, "</body>")?;
    writeln!(output, "</html>")?;

    output.flush()
}

#[cfg(test)]
mod tests;
