// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential line reader with a bounded line length.
//!
//! Lines longer than the limit are cut at the limit and the rest of the
//! physical line is skipped, so memory use stays bounded no matter how
//! long a line is. A limit of zero disables truncation.

use std::io::{self, BufRead, BufReader, Read};

use memchr::memchr;

/// Default maximum line length in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8192;

/// One line of input without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// The physical line was longer than the limit.
    pub truncated: bool,
}

/// Forward-only line reader over a byte stream.
pub struct LineSource<R> {
    reader: BufReader<R>,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: Read> LineSource<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self {
            reader: BufReader::new(inner),
            max_len,
            buf: Vec::new(),
        }
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` at end of input. A final line without a trailing
    /// newline is still returned once.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        self.buf.clear();
        let mut truncated = false;
        let mut saw_bytes = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                if !saw_bytes {
                    return Ok(None);
                }
                break;
            }
            saw_bytes = true;

            let newline = memchr(b'\n', available);
            let chunk_len = newline.unwrap_or(available.len());
            let keep = if self.max_len == 0 {
                chunk_len
            } else {
                self.max_len.saturating_sub(self.buf.len()).min(chunk_len)
            };
            if keep < chunk_len {
                truncated = true;
            }
            self.buf.extend_from_slice(&available[..keep]);

            match newline {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    break;
                }
                None => self.reader.consume(chunk_len),
            }
        }

        // A cut line lost its terminator with the discarded tail
        if !truncated && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(Some(Line {
            text: String::from_utf8_lossy(&self.buf).into_owned(),
            truncated,
        }))
    }
}

impl<R: Read> Iterator for LineSource<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
