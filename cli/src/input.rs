//! Friendship list loading: one `A B` pair per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::InputError;

/// Pairs read from an input source, plus how many lines were ignored.
#[derive(Debug, Default)]
pub struct Friendships {
    pub pairs: Vec<(String, String)>,
    pub skipped: usize,
}

/// Open `path` and parse it with [`read_pairs`].
pub fn load_file(path: &Path) -> Result<Friendships, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_pairs(BufReader::new(file))
}

/// Parse every line of `reader`. Lines that are not exactly two names
/// separated by one space, or are not valid UTF-8, are skipped.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Friendships, InputError> {
    let mut out = Friendships::default();

    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| InputError::Read { line: i + 1, source })?;
        match std::str::from_utf8(&line).ok().and_then(parse_line) {
            Some(pair) => out.pairs.push(pair),
            None => {
                debug!(
                    line = i + 1,
                    content = %String::from_utf8_lossy(&line),
                    "skipping malformed line"
                );
                out.skipped += 1;
            }
        }
    }

    Ok(out)
}

/// Split `A B` into its two names. Trailing whitespace (including a CR
/// from CRLF files) is ignored; anything else must match exactly.
fn parse_line(line: &str) -> Option<(String, String)> {
    let mut tokens = line.trim_end().split(' ');
    let a = tokens.next()?;
    let b = tokens.next()?;
    if tokens.next().is_some() || a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a.to_string(), b.to_string()))
}
