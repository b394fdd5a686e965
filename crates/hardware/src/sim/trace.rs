//! Memory trace parsing.
//!
//! A trace is plain text, one access per line:
//!
//! ```text
//! # core op address
//! 0 r 0x7fff1000
//! 1 w 7fff1040
//! ```
//!
//! The core id is decimal, the operation is a single token whose first
//! character selects the access (`w`/`W` writes, anything else reads), and the
//! address is hexadecimal with an optional `0x` prefix. Blank lines and lines
//! starting with `#` are ignored.

use std::io::BufRead;

use crate::common::{AccessType, SimError, TraceError, TraceErrorKind};

/// One access from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Issuing core.
    pub core: usize,
    /// Read or write.
    pub op: AccessType,
    /// Byte address.
    pub addr: u64,
}

impl TraceRecord {
    /// Parses one trace line.
    ///
    /// # Arguments
    ///
    /// * `text` - The line, without its terminator.
    /// * `line` - 1-based line number, used in errors.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] when a field is missing or malformed.
    pub fn parse(text: &str, line: usize) -> Result<Option<Self>, TraceError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }
        let err = |kind| TraceError { line, kind };

        let mut fields = text.split_whitespace();
        let core = fields
            .next()
            .ok_or_else(|| err(TraceErrorKind::MissingField("core")))?;
        let core = core
            .parse::<usize>()
            .map_err(|_| err(TraceErrorKind::BadCore(core.to_owned())))?;

        let op = fields
            .next()
            .and_then(|token| token.chars().next())
            .map(AccessType::from_code)
            .ok_or_else(|| err(TraceErrorKind::MissingField("operation")))?;

        let addr = fields
            .next()
            .ok_or_else(|| err(TraceErrorKind::MissingField("address")))?;
        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);
        let addr = u64::from_str_radix(digits, 16)
            .map_err(|_| err(TraceErrorKind::BadAddress(addr.to_owned())))?;

        Ok(Some(Self { core, op, addr }))
    }
}

/// Iterator over the records of a buffered trace.
///
/// Yields an error (and keeps going) for each malformed line; callers usually
/// stop at the first one.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read.
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(e) => return Some(Err(e.into())),
            }
            match TraceRecord::parse(&self.buf, self.line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
