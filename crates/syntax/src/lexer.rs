use logos::Logos;

use crate::span::Span;
use crate::token::Token;
use crate::{Error, Result};

/// The raw surface of the source, before line structure is applied.
///
/// Words are classified into keywords and identifiers later, because a
/// keyword is only a keyword when followed by end-of-line, whitespace,
/// `:` or `,` (so `None_` lexes as the identifier `None_`, and `print(` as
/// the identifier `print`).
#[derive(Clone, Debug, PartialEq, Logos)]
enum RawToken {
  #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
  Number(i64),

  #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
  Word,

  #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
  #[regex(r#"'([^'\\\n]|\\[^\n])*'"#)]
  Str,

  #[token("==")]
  Eq,
  #[token("!=")]
  NotEq,
  #[token("<=")]
  LessOrEq,
  #[token(">=")]
  GreaterOrEq,

  #[regex(r"[<>=+\-*/().,:]", |lex| lex.slice().chars().next())]
  Char(char),

  /// A line break together with the next line's leading spaces.
  #[regex(r"\r?\n[ ]*")]
  Break,

  /// Whitespace between tokens. Kept (not skipped) so that leading spaces
  /// on the very first line still count towards its indentation.
  #[regex(r"[ \t]+")]
  Space,

  #[regex(r"#[^\n]*", logos::skip)]
  Comment,

  #[error]
  Error,
}

/// The materialized token sequence for one source file, and the cursor the
/// parser drives over it.
///
/// `lex` applies the line rules up front: each logical line's leading width
/// must be an even number of spaces, level changes emit `Indent`/`Dedent`,
/// every non-blank line is terminated by `Newline`, and the sequence ends
/// with enough `Dedent`s to return to level zero followed by `Eof`. Blank
/// lines and `#`-comment lines emit nothing at all.
pub struct Lexer {
  tokens: Vec<Token>,
  spans: Vec<Span>,
  pos: usize,
}

impl Lexer {
  pub fn lex(src: &str) -> Result<Lexer> {
    let mut raw = RawToken::lexer(src);
    let mut tokens = Vec::new();
    let mut spans = Vec::new();

    // Leading width of the current line, and the level the previous
    // non-blank line ended up at.
    let mut width = 0usize;
    let mut level = 0usize;
    // True until the current line emits its first token.
    let mut fresh_line = true;

    while let Some(kind) = raw.next() {
      let span = Span::from(raw.span());
      let token = match kind {
        RawToken::Break => {
          if !fresh_line {
            tokens.push(Token::Newline);
            spans.push(span);
            fresh_line = true;
          }
          width = raw.slice().trim_start_matches(|c| c == '\r' || c == '\n').len();
          continue;
        }
        RawToken::Space => {
          if fresh_line {
            width += raw.slice().matches(' ').count();
          }
          continue;
        }
        RawToken::Comment => continue,
        RawToken::Error => {
          let slice = raw.slice();
          let message = if slice.starts_with('"') || slice.starts_with('\'') {
            "unterminated string".into()
          } else {
            format!("unrecognized character `{slice}`")
          };
          return Err(Error::new(message, span));
        }
        RawToken::Number(value) => Token::Number(value),
        RawToken::Word => {
          let word = raw.slice();
          match Token::keyword(word).filter(|_| ends_word(raw.remainder())) {
            Some(keyword) => keyword,
            None => Token::Id(word.to_owned()),
          }
        }
        RawToken::Str => {
          let slice = raw.slice();
          Token::Str(unescape(&slice[1..slice.len() - 1]))
        }
        RawToken::Eq => Token::Eq,
        RawToken::NotEq => Token::NotEq,
        RawToken::LessOrEq => Token::LessOrEq,
        RawToken::GreaterOrEq => Token::GreaterOrEq,
        RawToken::Char(c) => Token::Char(c),
      };

      if fresh_line {
        if width % 2 != 0 {
          return Err(Error::new(
            "indentation must be a multiple of two spaces",
            span,
          ));
        }
        let new_level = width / 2;
        if new_level > level {
          tokens.push(Token::Indent);
          spans.push(span);
        } else {
          for _ in new_level..level {
            tokens.push(Token::Dedent);
            spans.push(span);
          }
        }
        level = new_level;
        fresh_line = false;
      }

      tokens.push(token);
      spans.push(span);
    }

    let end = Span::empty(src.len());
    if !fresh_line {
      tokens.push(Token::Newline);
      spans.push(end);
    }
    for _ in 0..level {
      tokens.push(Token::Dedent);
      spans.push(end);
    }
    tokens.push(Token::Eof);
    spans.push(end);

    Ok(Lexer { tokens, spans, pos: 0 })
  }

  #[inline]
  pub fn current(&self) -> &Token {
    &self.tokens[self.pos]
  }

  #[inline]
  pub fn span(&self) -> Span {
    self.spans[self.pos]
  }

  /// Advances the cursor and returns the new current token. Sticky at the
  /// terminal `Eof`: the cursor never moves past it.
  pub fn next(&mut self) -> &Token {
    if self.pos + 1 < self.tokens.len() {
      self.pos += 1;
    }
    &self.tokens[self.pos]
  }

  /// Consumes the current token, which must equal `expected`.
  pub fn expect(&mut self, expected: &Token) -> Result<()> {
    if self.current() == expected {
      self.next();
      Ok(())
    } else {
      Err(Error::new(
        format!("expected {expected}, found {}", self.current()),
        self.span(),
      ))
    }
  }

  /// Consumes the current token, which must be an identifier.
  pub fn expect_id(&mut self) -> Result<String> {
    match self.current() {
      Token::Id(name) => {
        let name = name.clone();
        self.next();
        Ok(name)
      }
      found => Err(Error::new(
        format!("expected an identifier, found {found}"),
        self.span(),
      )),
    }
  }
}

// A word only reads as a keyword when it stands on its own before `rest`.
fn ends_word(rest: &str) -> bool {
  matches!(
    rest.chars().next(),
    None | Some(' ' | '\t' | '\r' | '\n' | ':' | ',')
  )
}

// `\n` and `\t` become the control characters; any other escaped character
// stands for itself.
fn unescape(body: &str) -> String {
  let mut out = String::with_capacity(body.len());
  let mut chars = body.chars();
  while let Some(c) = chars.next() {
    if c != '\\' {
      out.push(c);
      continue;
    }
    match chars.next() {
      Some('n') => out.push('\n'),
      Some('t') => out.push('\t'),
      Some(other) => out.push(other),
      None => {}
    }
  }
  out
}
