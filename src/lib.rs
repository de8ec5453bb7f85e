//! A tree-walking interpreter for Mython, a small Python-flavoured
//! language with integers, strings, booleans, `None`, and single
//! inheritance classes with `__init__`/`__str__`/`__eq__`/`__lt__`/
//! `__add__` dispatch.

mod ast;
mod eval;
mod io;
mod parser;
mod runtime;

#[cfg(test)]
mod tests;

pub use io::{CollectPrint, NoPrint, PrintWriter, StdPrint};
pub use runtime::{Closure, Context, Object, ObjectHolder, RuntimeError};
pub use syntax::Error as SyntaxError;

pub type Result<T, E = EvalError> = std::result::Result<T, E>;

/// Everything that can go wrong between source text and finished
/// execution.
#[derive(Debug)]
pub enum EvalError {
  Syntax(SyntaxError),
  Runtime(RuntimeError),
}

impl From<SyntaxError> for EvalError {
  fn from(value: SyntaxError) -> Self {
    EvalError::Syntax(value)
  }
}

impl From<RuntimeError> for EvalError {
  fn from(value: RuntimeError) -> Self {
    EvalError::Runtime(value)
  }
}

impl std::error::Error for EvalError {}

impl std::fmt::Display for EvalError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EvalError::Syntax(e) => write!(f, "{e}"),
      EvalError::Runtime(e) => write!(f, "runtime error: {e}"),
    }
  }
}

/// An interpreter session: a global scope plus an output stream.
///
/// ```
/// let io = mython::CollectPrint::new();
/// let mut vm = mython::Mython::with_io(io.clone());
/// vm.eval("print 1 + 2 * 3").unwrap();
/// assert_eq!(io.contents(), "7\n");
/// ```
pub struct Mython {
  globals: Closure,
  cx: Context,
}

impl Mython {
  /// An interpreter printing to stdout.
  pub fn new() -> Self {
    Self::with_io(StdPrint)
  }

  /// An interpreter printing to `io`.
  pub fn with_io(io: impl PrintWriter + 'static) -> Self {
    Mython {
      globals: Closure::new(),
      cx: Context::new(io),
    }
  }

  /// Parses and executes `src` against this session's global scope.
  /// Bindings persist, so later calls see the globals of earlier ones.
  pub fn eval(&mut self, src: &str) -> Result<()> {
    let program = parser::parse(src)?;
    program.exec(&mut self.globals, &self.cx)?;
    Ok(())
  }
}

impl Default for Mython {
  fn default() -> Self {
    Self::new()
  }
}
