// Line-oriented capture of one marker-delimited span of the resource dump.
// The dump can be several gigabytes; only the captured lines are kept.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ExtractionError, Result};

/// Captures the lines from the one containing `start` up to and including the
/// one containing `end`. Returns an empty string when `start` never appears.
pub fn scan_file(path: &Path, start: &str, end: &str) -> Result<String> {
    let unreadable = |source| ExtractionError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    scan_reader(BufReader::new(file), start, end).map_err(unreadable)
}

pub fn scan_reader<R: BufRead>(mut reader: R, start: &str, end: &str) -> io::Result<String> {
    let mut out = String::new();
    let mut buf = Vec::new();
    let mut capturing = false;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        // On the start line only the text after the start marker may close the span.
        let tail = if capturing {
            &line[..]
        } else if let Some(pos) = line.find(start) {
            capturing = true;
            &line[pos + start.len()..]
        } else {
            continue;
        };
        let done = tail.contains(end);
        out.push_str(&line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
        if done {
            break;
        }
    }
    Ok(out)
}
