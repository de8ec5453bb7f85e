use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Destination for `print` output.
///
/// Implement this trait to capture or redirect what a Mython program
/// prints. The default sink is [`StdPrint`], which writes to stdout.
pub trait PrintWriter {
  /// Writes a chunk of rendered output.
  fn write_str(&mut self, text: &str);

  /// Writes a single character. Argument separators and the final line
  /// terminator of a `print` statement go through here.
  fn write_char(&mut self, c: char) {
    self.write_str(c.encode_utf8(&mut [0u8; 4]));
  }
}

/// Default [`PrintWriter`] that writes to stdout.
#[derive(Debug, Default)]
pub struct StdPrint;

impl PrintWriter for StdPrint {
  fn write_str(&mut self, text: &str) {
    let _ = io::stdout().write_all(text.as_bytes());
  }
}

/// A [`PrintWriter`] that collects all output into a shared buffer.
///
/// Cloning is shallow: every clone reads and appends to the same buffer,
/// so a test can keep one handle and give the interpreter the other.
#[derive(Clone, Debug, Default)]
pub struct CollectPrint {
  buf: Rc<RefCell<String>>,
}

impl CollectPrint {
  pub fn new() -> Self {
    Self::default()
  }

  /// Everything printed so far.
  pub fn contents(&self) -> String {
    self.buf.borrow().clone()
  }
}

impl PrintWriter for CollectPrint {
  fn write_str(&mut self, text: &str) {
    self.buf.borrow_mut().push_str(text);
  }
}

/// A [`PrintWriter`] that discards all output.
#[derive(Debug, Default)]
pub struct NoPrint;

impl PrintWriter for NoPrint {
  fn write_str(&mut self, _text: &str) {}
}
