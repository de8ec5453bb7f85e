//! Recursive-descent parser from the token cursor to the executable tree.
//!
//! Class declarations are resolved while parsing: the parser keeps a table
//! of the classes seen so far, builds the class object for each `class`
//! statement, and wires constructor calls (`Name(...)`) and base-class
//! references straight to it. A name that is not a declared class cannot
//! be called.

use std::rc::Rc;

use indexmap::IndexMap;
use syntax::{Error, Lexer, Result, Token};

use crate::ast::{BinaryOp, Expr, Stmt};
use crate::runtime::{Class, Method};

/// Parses a Mython program into its root compound statement.
pub fn parse(src: &str) -> Result<Stmt> {
  let lex = Lexer::lex(src)?;
  Parser::new(lex).program()
}

struct Parser {
  lex: Lexer,
  classes: IndexMap<String, Rc<Class>>,
  in_method: bool,
}

impl Parser {
  fn new(lex: Lexer) -> Self {
    Self {
      lex,
      classes: IndexMap::new(),
      in_method: false,
    }
  }

  fn eat(&mut self, token: &Token) -> bool {
    if self.lex.current() == token {
      self.lex.next();
      true
    } else {
      false
    }
  }

  fn error(&self, message: impl Into<beef::lean::Cow<'static, str>>) -> Error {
    Error::new(message, self.lex.span())
  }

  fn program(mut self) -> Result<Stmt> {
    let mut body = Vec::new();
    while self.lex.current() != &Token::Eof {
      body.push(self.stmt()?);
    }
    Ok(Stmt::Compound(body))
  }

  fn stmt(&mut self) -> Result<Stmt> {
    match self.lex.current() {
      Token::Class => self.class_stmt(),
      Token::If => self.if_stmt(),
      Token::Print => self.print_stmt(),
      Token::Return => self.return_stmt(),
      _ => self.simple_stmt(),
    }
  }

  fn class_stmt(&mut self) -> Result<Stmt> {
    self.lex.next();
    let name = self.lex.expect_id()?;
    let parent = if self.eat(&Token::Char('(')) {
      let span = self.lex.span();
      let parent_name = self.lex.expect_id()?;
      let parent = self
        .classes
        .get(&parent_name)
        .cloned()
        .ok_or_else(|| Error::new(format!("unknown base class `{parent_name}`"), span))?;
      self.lex.expect(&Token::Char(')'))?;
      Some(parent)
    } else {
      None
    };
    self.lex.expect(&Token::Char(':'))?;
    self.lex.expect(&Token::Newline)?;
    self.lex.expect(&Token::Indent)?;

    let mut methods = Vec::new();
    while !self.eat(&Token::Dedent) {
      methods.push(self.method_def()?);
    }

    let class = Rc::new(Class::new(name.clone(), methods, parent));
    self.classes.insert(name, class.clone());
    Ok(Stmt::ClassDef { class })
  }

  fn method_def(&mut self) -> Result<Method> {
    self.lex.expect(&Token::Def)?;
    let name = self.lex.expect_id()?;
    let params_span = self.lex.span();
    self.lex.expect(&Token::Char('('))?;
    let mut params = Vec::new();
    if !self.eat(&Token::Char(')')) {
      loop {
        params.push(self.lex.expect_id()?);
        if !self.eat(&Token::Char(',')) {
          break;
        }
      }
      self.lex.expect(&Token::Char(')'))?;
    }
    // `self` is spelled out in the declaration but is not a formal
    // parameter: the recorded arity is the call-site argument count.
    if params.first().map(String::as_str) != Some("self") {
      return Err(Error::new(
        format!("method `{name}` must take `self` as its first parameter"),
        params_span,
      ));
    }
    params.remove(0);
    self.lex.expect(&Token::Char(':'))?;
    self.lex.expect(&Token::Newline)?;

    let in_method = std::mem::replace(&mut self.in_method, true);
    let body = self.suite();
    self.in_method = in_method;

    Ok(Method {
      name,
      params,
      body: Stmt::MethodBody(Box::new(body?)),
    })
  }

  // INDENT stmt+ DEDENT
  fn suite(&mut self) -> Result<Stmt> {
    self.lex.expect(&Token::Indent)?;
    let mut body = Vec::new();
    while !self.eat(&Token::Dedent) {
      body.push(self.stmt()?);
    }
    Ok(Stmt::Compound(body))
  }

  fn if_stmt(&mut self) -> Result<Stmt> {
    self.lex.next();
    let cond = self.expr()?;
    self.lex.expect(&Token::Char(':'))?;
    self.lex.expect(&Token::Newline)?;
    let then = Box::new(self.suite()?);
    let otherwise = if self.eat(&Token::Else) {
      self.lex.expect(&Token::Char(':'))?;
      self.lex.expect(&Token::Newline)?;
      Some(Box::new(self.suite()?))
    } else {
      None
    };
    Ok(Stmt::If {
      cond,
      then,
      otherwise,
    })
  }

  fn print_stmt(&mut self) -> Result<Stmt> {
    self.lex.next();
    let mut args = Vec::new();
    if self.lex.current() != &Token::Newline {
      loop {
        args.push(self.expr()?);
        if !self.eat(&Token::Char(',')) {
          break;
        }
      }
    }
    self.lex.expect(&Token::Newline)?;
    Ok(Stmt::Print { args })
  }

  fn return_stmt(&mut self) -> Result<Stmt> {
    if !self.in_method {
      return Err(self.error("`return` outside of a method"));
    }
    self.lex.next();
    let value = self.expr()?;
    self.lex.expect(&Token::Newline)?;
    Ok(Stmt::Return { value })
  }

  // An assignment or a bare expression statement: parse an expression
  // first, then convert it into an assignment target when `=` follows.
  fn simple_stmt(&mut self) -> Result<Stmt> {
    let target = self.expr()?;
    let stmt = if self.eat(&Token::Char('=')) {
      let value = self.expr()?;
      match target {
        Expr::Var(mut path) => {
          if path.len() == 1 {
            Stmt::Assign {
              name: path.remove(0),
              value,
            }
          } else {
            let field = path.remove(path.len() - 1);
            Stmt::SetField {
              object: path,
              field,
              value,
            }
          }
        }
        _ => return Err(self.error("invalid assignment target")),
      }
    } else {
      Stmt::Expr(target)
    };
    self.lex.expect(&Token::Newline)?;
    Ok(stmt)
  }

  fn expr(&mut self) -> Result<Expr> {
    self.or_expr()
  }

  fn or_expr(&mut self) -> Result<Expr> {
    let mut left = self.and_expr()?;
    while self.eat(&Token::Or) {
      let right = self.and_expr()?;
      left = binary(BinaryOp::Or, left, right);
    }
    Ok(left)
  }

  fn and_expr(&mut self) -> Result<Expr> {
    let mut left = self.not_expr()?;
    while self.eat(&Token::And) {
      let right = self.not_expr()?;
      left = binary(BinaryOp::And, left, right);
    }
    Ok(left)
  }

  fn not_expr(&mut self) -> Result<Expr> {
    if self.eat(&Token::Not) {
      Ok(Expr::Not(Box::new(self.not_expr()?)))
    } else {
      self.comp_expr()
    }
  }

  // A single, non-chaining comparison.
  fn comp_expr(&mut self) -> Result<Expr> {
    let left = self.add_expr()?;
    let op = match self.lex.current() {
      Token::Eq => BinaryOp::Eq,
      Token::NotEq => BinaryOp::NotEq,
      Token::LessOrEq => BinaryOp::LessEq,
      Token::GreaterOrEq => BinaryOp::GreaterEq,
      Token::Char('<') => BinaryOp::Less,
      Token::Char('>') => BinaryOp::Greater,
      _ => return Ok(left),
    };
    self.lex.next();
    let right = self.add_expr()?;
    Ok(binary(op, left, right))
  }

  fn add_expr(&mut self) -> Result<Expr> {
    let mut left = self.mul_expr()?;
    loop {
      let op = match self.lex.current() {
        Token::Char('+') => BinaryOp::Add,
        Token::Char('-') => BinaryOp::Sub,
        _ => break,
      };
      self.lex.next();
      let right = self.mul_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  fn mul_expr(&mut self) -> Result<Expr> {
    let mut left = self.postfix_expr()?;
    loop {
      let op = match self.lex.current() {
        Token::Char('*') => BinaryOp::Mul,
        Token::Char('/') => BinaryOp::Div,
        _ => break,
      };
      self.lex.next();
      let right = self.postfix_expr()?;
      left = binary(op, left, right);
    }
    Ok(left)
  }

  // `.name(args)` method calls chain on any expression; a bare `.name` is
  // a field read and only extends a pure name path.
  fn postfix_expr(&mut self) -> Result<Expr> {
    let mut expr = self.primary_expr()?;
    while self.eat(&Token::Char('.')) {
      let name = self.lex.expect_id()?;
      if self.eat(&Token::Char('(')) {
        let args = self.call_args()?;
        expr = Expr::MethodCall {
          object: Box::new(expr),
          name,
          args,
        };
      } else {
        match &mut expr {
          Expr::Var(path) => path.push(name),
          _ => return Err(self.error(format!("expected `(` after `.{name}`"))),
        }
      }
    }
    Ok(expr)
  }

  fn primary_expr(&mut self) -> Result<Expr> {
    let expr = match self.lex.current() {
      Token::Number(value) => {
        let value = *value;
        self.lex.next();
        Expr::Number(value)
      }
      Token::Str(value) => {
        let value = value.clone();
        self.lex.next();
        Expr::Str(value)
      }
      Token::True => {
        self.lex.next();
        Expr::Bool(true)
      }
      Token::False => {
        self.lex.next();
        Expr::Bool(false)
      }
      Token::None => {
        self.lex.next();
        Expr::None
      }
      Token::Char('(') => {
        self.lex.next();
        let inner = self.expr()?;
        self.lex.expect(&Token::Char(')'))?;
        inner
      }
      Token::Id(_) => return self.name_expr(),
      found => return Err(self.error(format!("expected an expression, found {found}"))),
    };
    Ok(expr)
  }

  // A bare name, a constructor call of a declared class, or `str(...)`.
  fn name_expr(&mut self) -> Result<Expr> {
    let name = self.lex.expect_id()?;
    if self.lex.current() != &Token::Char('(') {
      return Ok(Expr::Var(vec![name]));
    }
    let span = self.lex.span();
    self.lex.next();
    let mut args = self.call_args()?;

    if let Some(class) = self.classes.get(&name) {
      return Ok(Expr::New {
        class: class.clone(),
        args,
      });
    }
    if name == "str" {
      if args.len() != 1 {
        return Err(Error::new("`str` takes exactly one argument", span));
      }
      return Ok(Expr::Stringify(Box::new(args.remove(0))));
    }
    Err(Error::new(format!("unknown class `{name}`"), span))
  }

  // Opening `(` already consumed.
  fn call_args(&mut self) -> Result<Vec<Expr>> {
    let mut args = Vec::new();
    if self.eat(&Token::Char(')')) {
      return Ok(args);
    }
    loop {
      args.push(self.expr()?);
      if !self.eat(&Token::Char(',')) {
        break;
      }
    }
    self.lex.expect(&Token::Char(')'))?;
    Ok(args)
  }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
  Expr::Binary {
    op,
    left: Box::new(left),
    right: Box::new(right),
  }
}
