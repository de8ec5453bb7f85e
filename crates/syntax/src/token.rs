use std::fmt;

/// A single Mython token.
///
/// Equality compares the variant and, for the valued variants, the payload;
/// the parser leans on this for its `expect` calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
  /// An integer literal.
  Number(i64),
  /// An identifier.
  Id(String),
  /// A string literal, with escapes already decoded.
  Str(String),
  /// A single punctuation character: one of `< > = + - * / ( ) . , :`.
  Char(char),

  // Keywords
  Class,
  Return,
  If,
  Else,
  Def,
  Print,
  And,
  Or,
  Not,
  None,
  True,
  False,

  // Two-character comparison operators
  Eq,
  NotEq,
  LessOrEq,
  GreaterOrEq,

  // Structural markers synthesized by the lexer
  Newline,
  Indent,
  Dedent,
  Eof,
}

impl Token {
  /// Recognizes a keyword, if `word` is one.
  pub(crate) fn keyword(word: &str) -> Option<Token> {
    let token = match word {
      "class" => Token::Class,
      "return" => Token::Return,
      "if" => Token::If,
      "else" => Token::Else,
      "def" => Token::Def,
      "print" => Token::Print,
      "and" => Token::And,
      "or" => Token::Or,
      "not" => Token::Not,
      "None" => Token::None,
      "True" => Token::True,
      "False" => Token::False,
      _ => return Option::None,
    };
    Some(token)
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(v) => write!(f, "`{v}`"),
      Token::Id(name) => write!(f, "`{name}`"),
      Token::Str(v) => write!(f, "{v:?}"),
      Token::Char(c) => write!(f, "`{c}`"),
      Token::Class => f.write_str("`class`"),
      Token::Return => f.write_str("`return`"),
      Token::If => f.write_str("`if`"),
      Token::Else => f.write_str("`else`"),
      Token::Def => f.write_str("`def`"),
      Token::Print => f.write_str("`print`"),
      Token::And => f.write_str("`and`"),
      Token::Or => f.write_str("`or`"),
      Token::Not => f.write_str("`not`"),
      Token::None => f.write_str("`None`"),
      Token::True => f.write_str("`True`"),
      Token::False => f.write_str("`False`"),
      Token::Eq => f.write_str("`==`"),
      Token::NotEq => f.write_str("`!=`"),
      Token::LessOrEq => f.write_str("`<=`"),
      Token::GreaterOrEq => f.write_str("`>=`"),
      Token::Newline => f.write_str("end of line"),
      Token::Indent => f.write_str("indent"),
      Token::Dedent => f.write_str("dedent"),
      Token::Eof => f.write_str("end of file"),
    }
  }
}
