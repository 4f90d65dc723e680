//! Reading table rows from JSON or delimited text

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of arrays
    Json,
    /// Comma-separated lines
    Csv,
    /// Tab-separated lines
    Tsv,
}

impl InputFormat {
    /// Parse a `--format` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(InputFormat::Json),
            "csv" => Some(InputFormat::Csv),
            "tsv" => Some(InputFormat::Tsv),
            _ => None,
        }
    }

    /// Guess the format from a file extension, falling back to CSV
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("json") => InputFormat::Json,
            Some("tsv") => InputFormat::Tsv,
            _ => InputFormat::Csv,
        }
    }
}

/// Read the whole input, `-` meaning stdin
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path))
    }
}

/// Split input text into rows of cells
pub fn parse_rows(text: &str, format: InputFormat) -> Result<Vec<Vec<String>>> {
    match format {
        InputFormat::Json => parse_json(text),
        InputFormat::Csv => parse_delimited(text, b','),
        InputFormat::Tsv => parse_delimited(text, b'\t'),
    }
}

fn parse_json(text: &str) -> Result<Vec<Vec<String>>> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_str(text).context("expected a JSON array of arrays")?;
    Ok(rows
        .iter()
        .map(|row| row.iter().map(json_cell).collect())
        .collect())
}

/// Strings are taken verbatim, null is empty, everything else is its JSON text
fn json_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Records may be ragged; the table's row-size check reports that
fn parse_delimited(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed record {}", idx + 1))?;
        rows.push(
            record
                .iter()
                .map(|field| field.replace("\\n", "\n"))
                .collect(),
        );
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path("rows.json"), InputFormat::Json);
        assert_eq!(InputFormat::from_path("rows.tsv"), InputFormat::Tsv);
        assert_eq!(InputFormat::from_path("rows.csv"), InputFormat::Csv);
        assert_eq!(InputFormat::from_path("-"), InputFormat::Csv);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(InputFormat::from_name("tsv"), Some(InputFormat::Tsv));
        assert_eq!(InputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_parse_json_cells() {
        let text = r#"[["a", 1, 2.5], [null, true, [1,2]]]"#;
        let rows = parse_rows(text, InputFormat::Json).unwrap();
        assert_eq!(rows[0], vec!["a", "1", "2.5"]);
        assert_eq!(rows[1], vec!["", "true", "[1,2]"]);
    }

    #[test]
    fn test_parse_json_rejects_objects() {
        assert!(parse_rows(r#"{"a": 1}"#, InputFormat::Json).is_err());
    }

    #[test]
    fn test_parse_csv_skips_blank_lines() {
        let rows = parse_rows("a,b\n\n1,2\n", InputFormat::Csv).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_csv_quoted_delimiter() {
        let rows = parse_rows("Name,Age\n\"Smith, J\",30\n", InputFormat::Csv).unwrap();
        assert_eq!(rows, vec![vec!["Name", "Age"], vec!["Smith, J", "30"]]);
    }

    #[test]
    fn test_parse_csv_keeps_ragged_rows() {
        let rows = parse_rows("a,b\n1,2,3\n", InputFormat::Csv).unwrap();
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_parse_tsv_quoted_tab() {
        let rows = parse_rows("k\tv\n\"a\tb\"\tc\n", InputFormat::Tsv).unwrap();
        assert_eq!(rows[1], vec!["a\tb", "c"]);
    }

    #[test]
    fn test_parse_tsv_escaped_newline() {
        let rows = parse_rows("h\tx\nline1\\nline2\ty\n", InputFormat::Tsv).unwrap();
        assert_eq!(rows[1][0], "line1\nline2");
    }
}
