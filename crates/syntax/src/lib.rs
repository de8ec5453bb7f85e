use beef::lean::Cow;

pub mod lexer;
pub mod span;
pub mod token;

pub use lexer::Lexer;
pub use span::Span;
pub use token::Token;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A syntax-level failure: malformed input caught by the lexer, or a
/// failed expectation while the parser drives the cursor.
#[derive(Clone, Debug)]
pub struct Error {
  text: Cow<'static, str>,
  at: Span,
}

impl Error {
  pub fn new(text: impl Into<Cow<'static, str>>, at: Span) -> Self {
    Error {
      text: text.into(),
      at,
    }
  }

  pub fn message(&self) -> &str {
    &self.text
  }

  pub fn span(&self) -> Span {
    self.at
  }

  /// Renders the error against its source, pointing at the offending line.
  pub fn report(&self, src: &str) -> String {
    let start = self.at.start.min(src.len());
    let line_start = src[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = src[start..]
      .find('\n')
      .map(|i| start + i)
      .unwrap_or(src.len());
    let line_no = src[..start].matches('\n').count() + 1;
    let column = start - line_start;
    let mut out = format!("error: {}\n", self.text);
    out.push_str(&format!("  --> line {line_no}\n"));
    out.push_str(&format!("   | {}\n", &src[line_start..line_end]));
    out.push_str(&format!("   | {:>width$}^\n", "", width = column));
    out
  }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "syntax error: {} (at {})", self.text, self.at)
  }
}
