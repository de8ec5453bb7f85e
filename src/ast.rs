//! The executable tree the parser produces and the evaluator walks.

use std::rc::Rc;

use crate::runtime::Class;

pub enum Stmt {
  Assign { name: String, value: Expr },
  SetField {
    object: Vec<String>,
    field: String,
    value: Expr,
  },
  Print { args: Vec<Expr> },
  If {
    cond: Expr,
    then: Box<Stmt>,
    otherwise: Option<Box<Stmt>>,
  },
  /// Unwinds to the enclosing [`Stmt::MethodBody`].
  Return { value: Expr },
  ClassDef { class: Rc<Class> },
  Expr(Expr),
  Compound(Vec<Stmt>),
  /// The boundary of one method invocation: catches the `return` unwind
  /// and turns normal completion into `None`.
  MethodBody(Box<Stmt>),
}

pub enum Expr {
  Number(i64),
  Str(String),
  Bool(bool),
  None,
  /// A dotted name path. The head resolves in the current scope, each
  /// further name in the field closure of the instance so far.
  Var(Vec<String>),
  Binary {
    op: BinaryOp,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  Not(Box<Expr>),
  Stringify(Box<Expr>),
  MethodCall {
    object: Box<Expr>,
    name: String,
    args: Vec<Expr>,
  },
  New { class: Rc<Class>, args: Vec<Expr> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  And,
  Or,
  Eq,
  NotEq,
  Less,
  LessEq,
  Greater,
  GreaterEq,
}

impl BinaryOp {
  pub fn symbol(&self) -> &'static str {
    match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
      BinaryOp::And => "and",
      BinaryOp::Or => "or",
      BinaryOp::Eq => "==",
      BinaryOp::NotEq => "!=",
      BinaryOp::Less => "<",
      BinaryOp::LessEq => "<=",
      BinaryOp::Greater => ">",
      BinaryOp::GreaterEq => ">=",
    }
  }
}
