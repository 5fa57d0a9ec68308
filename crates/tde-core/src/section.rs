//! Isolation of the JSON object of interest inside a scanned span.
//!
//! The dump is not valid JSON as a whole, so the object is located by marker
//! search and index arithmetic, then checked with a string-aware brace/bracket
//! walk before it is handed to the decoder.
use std::fmt;

use crate::error::{ExtractionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Items,
    Presets,
}

impl SectionKind {
    /// Character the section text is cut back to before the end marker.
    /// Presets sit inside a larger object, so they end at the separating comma.
    pub fn end_trim(self) -> char {
        match self {
            SectionKind::Items => '}',
            SectionKind::Presets => ',',
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::Items => "items",
            SectionKind::Presets => "presets",
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionMarkers<'a> {
    pub start: &'a str,
    pub end: &'a str,
    /// Key introducing the object, e.g. `"data": {`.
    pub wrapper_key: &'a str,
}

/// Returns the JSON object text for `kind` inside `span`.
pub fn isolate<'s>(span: &'s str, kind: SectionKind, markers: &SectionMarkers<'_>) -> Result<&'s str> {
    let missing = |marker: &str| ExtractionError::MarkerNotFound {
        section: kind,
        marker: marker.to_string(),
    };
    let malformed = |reason: String| ExtractionError::MalformedSection {
        section: kind,
        reason,
    };

    let start = span.find(markers.start).ok_or_else(|| missing(markers.start))?;
    let wrapper = start
        + span[start..]
            .find(markers.wrapper_key)
            .ok_or_else(|| missing(markers.wrapper_key))?;
    let open = wrapper
        + span[wrapper..]
            .find('{')
            .ok_or_else(|| malformed(format!("no '{{' after {:?}", markers.wrapper_key)))?;
    let body = &span[open..];

    let end = body.find(markers.end).ok_or_else(|| missing(markers.end))?;
    let head = &body[..end];
    let trim = kind.end_trim();
    let cut = head
        .rfind(trim)
        .ok_or_else(|| malformed(format!("no {trim:?} before end marker {:?}", markers.end)))?;
    let object = &head[..cut];

    match object_end(object) {
        Ok(close) if object[close + 1..].trim().is_empty() => Ok(object),
        Ok(close) => Err(malformed(format!(
            "unexpected text after object at byte {}",
            open + close + 1
        ))),
        Err(reason) => Err(malformed(reason)),
    }
}

// Byte index of the brace closing the object that starts at index 0.
fn object_end(text: &str) -> std::result::Result<usize, String> {
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for (i, b) in text.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => stack.push(b'}'),
            b'[' => stack.push(b']'),
            b'}' | b']' => {
                if stack.pop() != Some(b) {
                    return Err(format!("unbalanced {:?} at byte {i}", b as char));
                }
                if stack.is_empty() {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(format!("{} unclosed brackets", stack.len()))
}
