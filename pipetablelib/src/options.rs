//! Configuration types for table rendering.
//!
//! This module contains the value types that control how a table is drawn:
//! the four border characters, per-column alignment, and the bundled
//! [`RenderOptions`] used by one-shot rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PipeTableError;
use crate::Result;

/// The four characters a table is drawn with.
///
/// In order: horizontal border, vertical border, corner/junction, and the
/// fill character used under the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderChars {
    /// Horizontal border (unmarked ends of rule segments)
    pub horizontal: char,
    /// Vertical border (cell separators and line frames)
    pub vertical: char,
    /// Junction between rule segments
    pub corner: char,
    /// Fill character of the rule line
    pub header: char,
}

impl Default for BorderChars {
    fn default() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            corner: '|',
            header: '-',
        }
    }
}

impl BorderChars {
    /// Create border characters from explicit values.
    pub fn new(horizontal: char, vertical: char, corner: char, header: char) -> Self {
        Self {
            horizontal,
            vertical,
            corner,
            header,
        }
    }

    /// Build from a slice, which must hold exactly four characters.
    pub fn from_slice(chars: &[char]) -> Result<Self> {
        match *chars {
            [horizontal, vertical, corner, header] => {
                Ok(Self::new(horizontal, vertical, corner, header))
            }
            _ => Err(PipeTableError::BorderCount {
                actual: chars.len(),
            }),
        }
    }

    /// The characters in configuration order.
    pub fn to_array(self) -> [char; 4] {
        [self.horizontal, self.vertical, self.corner, self.header]
    }
}

impl TryFrom<&[char]> for BorderChars {
    type Error = PipeTableError;

    fn try_from(chars: &[char]) -> Result<Self> {
        Self::from_slice(chars)
    }
}

impl FromStr for BorderChars {
    type Err = PipeTableError;

    /// Parse a four-character string such as `"-||-"`.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        Self::from_slice(&chars)
    }
}

/// Column alignment marker for the rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    /// `:---`
    #[serde(rename = "l")]
    Left,
    /// `---:`
    #[serde(rename = "r")]
    Right,
    /// `:---:`
    #[serde(rename = "c")]
    Center,
}

impl Align {
    /// The single-letter token for this alignment.
    pub fn token(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Right => "r",
            Align::Center => "c",
        }
    }

    /// Parse a list of tokens, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Align>> {
        tokens.iter().map(|t| t.as_ref().parse()).collect()
    }
}

impl FromStr for Align {
    type Err = PipeTableError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "l" => Ok(Align::Left),
            "r" => Ok(Align::Right),
            "c" => Ok(Align::Center),
            other => Err(PipeTableError::InvalidAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Options for one-shot rendering with [`crate::render_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Border characters
    pub chars: BorderChars,
    /// Per-column alignment; `None` leaves rule segments unmarked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Vec<Align>>,
    /// Treat the first row as the header
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chars: BorderChars::default(),
            align: None,
            header: true,
        }
    }
}

impl RenderOptions {
    /// Create default options (default chars, no alignment, first row is header).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set border characters
    pub fn chars(mut self, chars: BorderChars) -> Self {
        self.chars = chars;
        self
    }

    /// Builder: set per-column alignment
    pub fn align(mut self, align: Vec<Align>) -> Self {
        self.align = Some(align);
        self
    }

    /// Builder: set whether the first row is the header
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}
