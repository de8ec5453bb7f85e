use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use mython::{EvalError, Mython};

#[derive(Debug, Parser)]
#[clap(name = "mython", version)]
struct App {
  /// Path to the program to run, or `-` to read it from stdin. Omitting
  /// the path also reads from stdin.
  #[arg(value_name = "FILE")]
  file: Option<PathBuf>,
}

impl App {
  /// The program text plus a name to report failures under.
  fn source(&self) -> anyhow::Result<(String, String)> {
    match &self.file {
      Some(path) if path.as_os_str() != "-" => {
        let text = fs::read_to_string(path)
          .with_context(|| format!("failed to read {}", path.display()))?;
        Ok((text, path.display().to_string()))
      }
      _ => {
        if atty::is(atty::Stream::Stdin) {
          bail!("no input file given and stdin is a terminal");
        }
        let mut text = String::new();
        std::io::stdin()
          .read_to_string(&mut text)
          .context("failed to read stdin")?;
        Ok((text, "<stdin>".to_owned()))
      }
    }
  }
}

fn main() -> anyhow::Result<()> {
  let app = App::parse();
  let (source, name) = app.source()?;

  let mut vm = Mython::new();
  match vm.eval(&source) {
    Ok(()) => Ok(()),
    Err(EvalError::Syntax(e)) => {
      eprint!("{}", e.report(&source));
      bail!("failed to run {name}")
    }
    Err(EvalError::Runtime(e)) => {
      eprintln!("runtime error: {e}");
      bail!("failed to run {name}")
    }
  }
}
