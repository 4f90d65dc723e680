//! The table builder: accumulates a header and rows, tracks column widths,
//! and draws a Markdown pipe table.
//!
//! The data flow is:
//! 1. Configure (border characters, column alignment)
//! 2. Fill (header, rows; every add is checked against the column count)
//! 3. Draw (read-only, idempotent)
//!
//! Column widths are character counts and only ever grow, so drawing never
//! has to truncate a cell.

use serde::Serialize;

use crate::error::PipeTableError;
use crate::options::{Align, BorderChars};
use crate::warning::EmptyTableWarning;
use crate::Result;

/// Replacement for literal newlines inside data cells.
pub const LINE_BREAK_TAG: &str = "<br>";

/// Builder for a Markdown pipe table.
///
/// ```text
/// |  Name | Age |
/// |-------|-----|
/// | Alice |  30 |
/// |  Bob  |  7  |
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableBuilder {
    chars: BorderChars,
    #[serde(skip_serializing_if = "Option::is_none")]
    row_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    align: Option<Vec<Align>>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
    #[serde(skip)]
    empty_warning: EmptyTableWarning,
}

impl TableBuilder {
    /// Create an empty table with the default border characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table that shares the given warn-once state.
    pub fn with_warning(empty_warning: EmptyTableWarning) -> Self {
        Self {
            empty_warning,
            ..Self::default()
        }
    }

    /// Replace the border characters.
    ///
    /// Expects horizontal, vertical, corner and header-fill, in that order.
    pub fn set_chars(&mut self, chars: &[char]) -> Result<()> {
        self.chars = BorderChars::from_slice(chars)?;
        Ok(())
    }

    /// Replace the border characters with an already validated set.
    pub fn set_border_chars(&mut self, chars: BorderChars) {
        self.chars = chars;
    }

    /// Check a column count against the established one.
    ///
    /// The first call records the count; later calls must match it.
    pub fn check_row_size(&mut self, actual: usize) -> Result<()> {
        check_size(&mut self.row_size, actual)
    }

    /// Set one alignment per column.
    pub fn set_cols_align(&mut self, align: &[Align]) -> Result<()> {
        self.check_row_size(align.len())?;
        self.align = Some(align.to_vec());
        Ok(())
    }

    /// Set alignment from `l`, `r` and `c` tokens.
    pub fn set_cols_align_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<()> {
        let align = Align::parse_all(tokens)?;
        self.set_cols_align(&align)
    }

    /// Replace the header.
    ///
    /// This does not touch column widths; [`TableBuilder::add_rows`] with the
    /// header flag does.
    pub fn add_header<C: ToString>(&mut self, header: &[C]) -> Result<()> {
        let header: Vec<String> = header.iter().map(ToString::to_string).collect();
        self.check_row_size(header.len())?;
        self.header = header;
        Ok(())
    }

    /// Raise each column width to at least the length of the matching cell.
    pub fn seed_widths<C: ToString>(&mut self, row: &[C]) {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        raise_widths(&mut self.widths, &cells);
    }

    /// Add rows in bulk, optionally taking the first one as the header.
    ///
    /// Widths are seeded from the first supplied row, header included. Data
    /// cells have newlines replaced with `<br>` before they are measured.
    /// The call is all-or-nothing: on error the table is left untouched.
    pub fn add_rows<R, C>(&mut self, rows: &[R], header: bool) -> Result<()>
    where
        R: AsRef<[C]>,
        C: ToString,
    {
        let (first, rest) = rows.split_first().ok_or(PipeTableError::EmptyRows)?;
        let first: Vec<String> = first.as_ref().iter().map(ToString::to_string).collect();

        let mut row_size = self.row_size;
        let mut widths = self.widths.clone();
        raise_widths(&mut widths, &first);

        let (new_header, data) = if header {
            check_size(&mut row_size, first.len())?;
            (Some(first), rest)
        } else {
            (None, rows)
        };

        let mut new_rows = Vec::with_capacity(data.len());
        for row in data {
            let cells: Vec<String> = row
                .as_ref()
                .iter()
                .map(|cell| cell.to_string().replace('\n', LINE_BREAK_TAG))
                .collect();
            check_size(&mut row_size, cells.len())?;
            raise_widths(&mut widths, &cells);
            new_rows.push(cells);
        }

        if self.row_size.is_none() {
            tracing::debug!(columns = ?row_size, "column count established");
        }
        self.row_size = row_size;
        self.widths = widths;
        if let Some(new_header) = new_header {
            self.header = new_header;
        }
        tracing::debug!(
            added = new_rows.len(),
            total = self.rows.len() + new_rows.len(),
            "rows added"
        );
        self.rows.extend(new_rows);
        Ok(())
    }

    pub fn chars(&self) -> BorderChars {
        self.chars
    }

    /// The established column count, if any add has happened yet.
    pub fn row_size(&self) -> Option<usize> {
        self.row_size
    }

    pub fn align(&self) -> Option<&[Align]> {
        self.align.as_deref()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Current per-column widths, in characters.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Draw the table.
    ///
    /// Returns `None` (and warns once) when there is neither a header nor any
    /// row. Without a header nothing is drawn, even if rows exist, and the
    /// result is an empty string. The output carries no trailing newline.
    pub fn draw(&self) -> Option<String> {
        if self.header.is_empty() && self.rows.is_empty() {
            self.empty_warning.warn();
            return None;
        }

        let mut output = String::new();
        if !self.header.is_empty() {
            self.draw_line(&self.header, &mut output);
            self.build_hline(&mut output);
            for row in &self.rows {
                self.draw_line(row, &mut output);
            }
        }

        if output.ends_with('\n') {
            output.pop();
        }
        Some(output)
    }

    fn width(&self, idx: usize) -> usize {
        self.widths.get(idx).copied().unwrap_or(0)
    }

    fn draw_line(&self, cells: &[String], output: &mut String) {
        let vertical = self.chars.vertical;
        output.push(vertical);
        output.push(' ');
        for (idx, cell) in cells.iter().enumerate() {
            output.push_str(&center(cell, self.width(idx)));
            output.push(' ');
            if idx + 1 < cells.len() {
                output.push(vertical);
                output.push(' ');
            }
        }
        output.push(vertical);
        output.push('\n');
    }

    fn build_hline(&self, output: &mut String) {
        let horizontal = self.chars.horizontal;
        let columns = self.row_size.unwrap_or(self.widths.len());

        let segments: Vec<String> = (0..columns)
            .map(|idx| {
                let (left, right) = match self.align.as_ref().and_then(|a| a.get(idx)) {
                    None => (horizontal, horizontal),
                    Some(Align::Left) => (':', horizontal),
                    Some(Align::Right) => (horizontal, ':'),
                    Some(Align::Center) => (':', ':'),
                };
                let fill = self.chars.header.to_string().repeat(self.width(idx));
                format!("{left}{fill}{right}")
            })
            .collect();

        output.push(self.chars.vertical);
        output.push_str(&segments.join(&self.chars.corner.to_string()));
        output.push(self.chars.vertical);
        output.push('\n');
    }
}

fn check_size(row_size: &mut Option<usize>, actual: usize) -> Result<()> {
    match *row_size {
        None => {
            *row_size = Some(actual);
            Ok(())
        }
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(PipeTableError::SizeMismatch { expected, actual }),
    }
}

fn raise_widths(widths: &mut Vec<usize>, cells: &[String]) {
    if widths.len() < cells.len() {
        widths.resize(cells.len(), 0);
    }
    for (width, cell) in widths.iter_mut().zip(cells) {
        *width = (*width).max(cell.chars().count());
    }
}

/// Pad `cell` with spaces to `width` characters, centered.
///
/// When both the margin and the width are odd the extra space goes on the
/// left, otherwise on the right.
fn center(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    if len >= width {
        return cell.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(margin - left))
}
