use std::io::{self, Write};

use crate::bitmap::MaskBatch;
use crate::column::IndexColumn;
use crate::host::HostValue;

/// Reads an index batch from text, one index set per line.
///
/// Empty tokens, such as the one after a trailing delimiter, are skipped. Lines
/// that do not parse as integers are kept as text arrays so the host call
/// reports them as an element type error for that set.
pub struct IndexReader {
    pub delimiter: char,
    pub comment: char,
}

impl Default for IndexReader {
    fn default() -> Self { Self::new() }
}

impl IndexReader {
    pub fn new() -> Self { Self { delimiter: ',', comment: '#' } }
    pub fn with_delimiter(mut self, delimiter: char) -> Self { self.delimiter = delimiter; self }
    pub fn with_comment(mut self, comment: char) -> Self { self.comment = comment; self }

    pub fn read_str(&self, data: &str) -> HostValue {
        let cells = data
            .lines()
            .filter(|line| !line.trim_start().starts_with(self.comment))
            .map(|line| HostValue::Array(self.parse_line(line)))
            .collect();
        HostValue::Cell(cells)
    }

    fn parse_line(&self, line: &str) -> IndexColumn {
        let tokens = self.split_line(line);
        if let Ok(values) = tokens.iter().map(|t| t.parse::<u64>()).collect::<Result<Vec<_>, _>>() {
            return IndexColumn::UInt64(values);
        }
        if let Ok(values) = tokens.iter().map(|t| t.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
            return IndexColumn::Int64(values);
        }
        IndexColumn::Utf8(tokens)
    }

    fn split_line(&self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() { return Vec::new(); }
        if self.delimiter.is_whitespace() {
            return line.split_whitespace().map(str::to_string).collect();
        }
        line.split(self.delimiter)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One mask per line, `0`/`1` joined by the delimiter.
    Text,
    Json,
}

pub struct MaskWriter {
    pub delimiter: char,
    pub format: OutputFormat,
}

impl Default for MaskWriter {
    fn default() -> Self { Self::new() }
}

impl MaskWriter {
    pub fn new() -> Self { Self { delimiter: ',', format: OutputFormat::Text } }
    pub fn with_delimiter(mut self, delimiter: char) -> Self { self.delimiter = delimiter; self }
    pub fn with_format(mut self, format: OutputFormat) -> Self { self.format = format; self }

    pub fn write_text(&self, masks: &MaskBatch) -> String {
        let mut out = String::new();
        let delimiter = self.delimiter.to_string();
        for mask in masks {
            let digits: Vec<&str> = mask.as_slice().iter().map(|&b| if b { "1" } else { "0" }).collect();
            out.push_str(&digits.join(&delimiter));
            out.push('\n');
        }
        out
    }

    pub fn write<W: Write>(&self, mut out: W, masks: &MaskBatch) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => out.write_all(self.write_text(masks).as_bytes()),
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, masks)?;
                out.write_all(b"\n")
            }
        }
    }
}
