//! Key-path parser — splits a path string into segments.

use std::iter::Peekable;
use std::str::CharIndices;

use smallvec::SmallVec;

use crate::{Error, Result};
use super::Segment;

/// Parse `input` into key and index segments.
///
/// Components are separated by `delimiter`. Each component is a key,
/// optionally followed by bracketed indices (`b[2][3]`), or bracketed
/// indices alone (`[0]`), which apply to the node reached so far.
pub fn parse_segments(input: &str, delimiter: char) -> Result<SmallVec<[Segment; 4]>> {
    if input.is_empty() {
        return Err(malformed(0, "Empty path"));
    }

    let mut segments = SmallVec::new();
    let mut chars = input.char_indices().peekable();

    loop {
        let start = chars.peek().map_or(input.len(), |&(pos, _)| pos);

        // Key: everything up to the delimiter or a bracket
        let mut key = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if c == delimiter || c == '[' || c == ']' {
                break;
            }
            key.push(c);
            chars.next();
        }
        let has_key = !key.is_empty();
        if has_key {
            segments.push(Segment::Key(key));
        }

        // Indices: zero or more `[n]`
        let mut indices = 0usize;
        while let Some(&(open, '[')) = chars.peek() {
            chars.next();
            segments.push(Segment::Index(parse_index(&mut chars, open)?));
            indices += 1;
        }

        if !has_key && indices == 0 {
            return Err(malformed(start, "Empty path component"));
        }

        match chars.next() {
            None => break,
            Some((_, c)) if c == delimiter => {}
            Some((pos, ']')) => return Err(malformed(pos, "Unmatched ']'")),
            Some((pos, c)) => {
                return Err(malformed(
                    pos,
                    format!("Expected '{delimiter}' or '[' after index, found '{c}'"),
                ));
            }
        }
    }

    Ok(segments)
}

/// Parse the digits of one bracket group. The opening `[` is already consumed.
fn parse_index(chars: &mut Peekable<CharIndices<'_>>, open: usize) -> Result<usize> {
    let mut digits = String::new();
    loop {
        match chars.next() {
            Some((_, ']')) => break,
            Some((_, c)) if c.is_ascii_digit() => digits.push(c),
            Some((pos, c)) => {
                return Err(malformed(pos, format!("Invalid character '{c}' in index")));
            }
            None => return Err(malformed(open, "Unterminated '['")),
        }
    }
    if digits.is_empty() {
        return Err(malformed(open, "Empty index"));
    }
    digits
        .parse::<usize>()
        .map_err(|_| malformed(open, format!("Index {digits} does not fit in usize")))
}

fn malformed(position: usize, message: impl Into<String>) -> Error {
    Error::MalformedPath { position, message: message.into() }
}
