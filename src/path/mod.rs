//! # Rich Key Paths
//!
//! A `KeyPath` is the parsed form of a path string such as
//! `"users[0].address.city"`: an ordered list of key and index segments.
//! Parsing is a pure function — no I/O, no state, no graph access.

pub mod parser;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// Default component delimiter.
pub const DEFAULT_DELIMITER: char = '.';

// ============================================================================
// Syntax
// ============================================================================

/// Path syntax settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSyntax {
    /// Separator between components (`.` in `a.b.c`).
    pub delimiter: char,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self { delimiter: DEFAULT_DELIMITER }
    }
}

impl PathSyntax {
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            '[' | ']' => Err(Error::Config(format!(
                "delimiter '{}' collides with index brackets",
                self.delimiter
            ))),
            c if c.is_ascii_digit() => Err(Error::Config(format!(
                "delimiter '{c}' cannot be a digit"
            ))),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Segments
// ============================================================================

/// One step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Dictionary key or record property name.
    Key(String),
    /// Sequence position.
    Index(usize),
}

impl Segment {
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{k}"),
            Segment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self { Segment::Key(key.to_owned()) }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self { Segment::Index(index) }
}

// ============================================================================
// KeyPath
// ============================================================================

/// A parsed, non-empty key path.
///
/// The path keeps the delimiter it was written with, so `Display` and
/// error locations read back in the caller's own syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: SmallVec<[Segment; 4]>,
    delimiter: char,
}

impl KeyPath {
    /// Parse with the default `.` / `[n]` syntax.
    pub fn parse(path: &str) -> Result<Self> {
        Self::parse_with(path, &PathSyntax::default())
    }

    pub fn parse_with(path: &str, syntax: &PathSyntax) -> Result<Self> {
        let segments = parser::parse_segments(path, syntax.delimiter)?;
        Ok(Self { segments, delimiter: syntax.delimiter })
    }

    /// Build a path from already-split segments using the default syntax.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Result<Self> {
        Self::from_segments_with(segments, &PathSyntax::default())
    }

    /// Build a path from already-split segments.
    ///
    /// Fails on an empty list, and on keys that would not read back as the
    /// same segment: empty keys, or keys containing the delimiter or a bracket.
    pub fn from_segments_with(
        segments: impl IntoIterator<Item = Segment>,
        syntax: &PathSyntax,
    ) -> Result<Self> {
        let segments: SmallVec<[Segment; 4]> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(Error::MalformedPath {
                position: 0,
                message: "Path has no segments".into(),
            });
        }
        for (position, segment) in segments.iter().enumerate() {
            if let Segment::Key(key) = segment {
                if key.is_empty() {
                    return Err(Error::MalformedPath {
                        position,
                        message: "Empty key segment".into(),
                    });
                }
                if key.contains([syntax.delimiter, '[', ']']) {
                    return Err(Error::MalformedPath {
                        position,
                        message: format!("Key '{key}' contains a delimiter or bracket"),
                    });
                }
            }
        }
        Ok(Self { segments, delimiter: syntax.delimiter })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a parsed path; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> &Segment {
        // Non-empty by construction.
        &self.segments[self.segments.len() - 1]
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Render the first `n` segments, used for error locations.
    pub fn prefix(&self, n: usize) -> String {
        render(&self.segments[..n.min(self.segments.len())], self.delimiter)
    }

    /// Render with a different delimiter.
    pub fn render_with(&self, syntax: &PathSyntax) -> String {
        render(&self.segments, syntax.delimiter)
    }
}

fn render(segments: &[Segment], delimiter: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Key(k) => {
                if i > 0 {
                    out.push(delimiter);
                }
                out.push_str(k);
            }
            Segment::Index(n) => {
                out.push('[');
                out.push_str(&n.to_string());
                out.push(']');
            }
        }
    }
    out
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments, self.delimiter))
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for KeyPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
