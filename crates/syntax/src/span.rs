use std::fmt;
use std::ops::Range;

/// A region of source text, stored as a byte offset plus a length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
  pub start: usize,
  pub len: usize,
}

impl Span {
  pub fn new(start: usize, len: usize) -> Self {
    Span { start, len }
  }

  /// A zero-length span, for positions like end of file.
  pub fn empty(at: usize) -> Self {
    Span { start: at, len: 0 }
  }

  pub fn end(&self) -> usize {
    self.start + self.len
  }
}

impl From<Range<usize>> for Span {
  fn from(range: Range<usize>) -> Self {
    Span::new(range.start, range.end - range.start)
  }
}

impl fmt::Display for Span {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "bytes {}-{}", self.start, self.end())
  }
}
