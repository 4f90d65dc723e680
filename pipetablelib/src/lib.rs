//! # pipetablelib
//!
//! Build Markdown pipe tables from a header and rows of stringifiable values.
//!
//! ## Overview
//!
//! A [`TableBuilder`] accumulates a header and data rows, keeps a running
//! maximum width per column, and draws the result as a Markdown table with
//! configurable border characters and per-column alignment markers:
//!
//! - **Borders**: horizontal, vertical, corner and header-fill characters
//! - **Alignment**: `l`, `r` or `c` per column, rendered as `:` markers
//! - **Line breaks**: newlines inside data cells become `<br>`
//! - **Pure data**: drawing returns a string, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use pipetablelib::{Align, TableBuilder};
//!
//! let mut table = TableBuilder::new();
//! table.set_cols_align(&[Align::Left, Align::Right]).unwrap();
//! table
//!     .add_rows(&[vec!["Name", "Age"], vec!["Alice", "30"]], true)
//!     .unwrap();
//!
//! assert_eq!(
//!     table.draw().unwrap(),
//!     "|  Name | Age |\n|:------|----:|\n| Alice |  30 |"
//! );
//! ```

pub mod error;
pub mod options;
pub mod table;
pub mod warning;

pub use error::PipeTableError;
pub use options::{Align, BorderChars, RenderOptions};
pub use table::{TableBuilder, LINE_BREAK_TAG};
pub use warning::{EmptyTableWarning, EMPTY_TABLE_MESSAGE};

/// Result type for pipetablelib operations
pub type Result<T> = std::result::Result<T, PipeTableError>;

/// Build a table from rows and options without drawing it.
///
/// An empty `rows` slice yields an empty table, which draws as `None`.
pub fn build_table<R, C>(rows: &[R], options: &RenderOptions) -> Result<TableBuilder>
where
    R: AsRef<[C]>,
    C: ToString,
{
    let mut table = TableBuilder::new();
    table.set_border_chars(options.chars);
    if let Some(align) = &options.align {
        table.set_cols_align(align)?;
    }
    if !rows.is_empty() {
        table.add_rows(rows, options.header)?;
    }
    Ok(table)
}

/// Build and draw a table in one call.
///
/// Returns `Ok(None)` when `rows` is empty, after the empty-table warning.
pub fn render_rows<R, C>(rows: &[R], options: &RenderOptions) -> Result<Option<String>>
where
    R: AsRef<[C]>,
    C: ToString,
{
    Ok(build_table(rows, options)?.draw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows_defaults() {
        let rows = vec![vec!["Name", "Age"], vec!["Alice", "30"], vec!["Bob", "7"]];
        let output = render_rows(&rows, &RenderOptions::new()).unwrap().unwrap();
        assert_eq!(
            output,
            "|  Name | Age |\n|-------|-----|\n| Alice |  30 |\n|  Bob  |  7  |"
        );
    }

    #[test]
    fn test_render_rows_without_header() {
        let rows = vec![vec!["a", "b"]];
        let output = render_rows(&rows, &RenderOptions::new().header(false)).unwrap();
        assert_eq!(output, Some(String::new()));
    }

    #[test]
    fn test_render_rows_alignment_mismatch() {
        let rows = vec![vec!["a", "b"]];
        let options = RenderOptions::new().align(vec![Align::Center]);
        assert_eq!(
            render_rows(&rows, &options),
            Err(PipeTableError::SizeMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_render_rows_empty() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(render_rows(&rows, &RenderOptions::new()), Ok(None));
    }

    #[test]
    fn test_build_table_applies_options() {
        let rows = vec![vec!["a", "b"], vec!["1", "2"]];
        let options = RenderOptions::new()
            .chars(BorderChars::new('=', '!', '+', '~'))
            .align(vec![Align::Center, Align::Left]);
        let table = build_table(&rows, &options).unwrap();
        assert_eq!(table.chars(), options.chars);
        assert_eq!(table.align(), Some(&[Align::Center, Align::Left][..]));
        assert_eq!(table.header(), &["a", "b"]);
        assert_eq!(table.rows().len(), 1);
    }
}
