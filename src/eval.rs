//! Tree-walking execution of the Mython AST.

use std::rc::Rc;

use crate::ast::{BinaryOp, Expr, Stmt};
use crate::runtime::{Closure, Context, Instance, Object, ObjectHolder, RunResult, RuntimeError};

/// The outcome of executing one statement.
///
/// `Return` is the unwind started by a `return` statement. Compounds and
/// branches forward it untouched; only [`Stmt::MethodBody`] catches it, so
/// a `return` exits exactly the method invocation it sits in.
pub enum Flow {
  Value(ObjectHolder),
  Return(ObjectHolder),
}

impl Stmt {
  pub fn exec(&self, scope: &mut Closure, cx: &Context) -> RunResult<Flow> {
    match self {
      Stmt::Assign { name, value } => {
        let value = value.eval(scope, cx)?;
        scope.insert(name.clone(), value.clone());
        Ok(Flow::Value(value))
      }
      Stmt::SetField {
        object,
        field,
        value,
      } => {
        let target = lookup(scope, object)?;
        let referent = target.get();
        let instance = match referent.as_deref() {
          Some(Object::Instance(instance)) => instance,
          _ => {
            return Err(RuntimeError::new(format!(
              "cannot assign field `{field}` on a value of type `{}`",
              target.type_name()
            )))
          }
        };
        let value = value.eval(scope, cx)?;
        instance.set_field(field.clone(), value.clone());
        Ok(Flow::Value(value))
      }
      Stmt::Print { args } => {
        // Arguments are evaluated and rendered up front, so output a
        // nested `print` produces lands before this whole line.
        let mut parts = Vec::with_capacity(args.len());
        for arg in args {
          let value = arg.eval(scope, cx)?;
          parts.push(render(&value, cx)?);
        }
        let mut out = cx.out();
        out.write_str(&parts.join(" "));
        out.write_char('\n');
        Ok(Flow::Value(ObjectHolder::none()))
      }
      Stmt::If {
        cond,
        then,
        otherwise,
      } => {
        if cond.eval(scope, cx)?.is_true() {
          then.exec(scope, cx)
        } else if let Some(stmt) = otherwise {
          stmt.exec(scope, cx)
        } else {
          Ok(Flow::Value(ObjectHolder::none()))
        }
      }
      Stmt::Return { value } => Ok(Flow::Return(value.eval(scope, cx)?)),
      Stmt::ClassDef { class } => {
        let holder = ObjectHolder::own(Object::Class(class.clone()));
        scope.insert(class.name().to_owned(), holder);
        Ok(Flow::Value(ObjectHolder::none()))
      }
      Stmt::Expr(expr) => Ok(Flow::Value(expr.eval(scope, cx)?)),
      Stmt::Compound(body) => {
        for stmt in body {
          if let Flow::Return(value) = stmt.exec(scope, cx)? {
            return Ok(Flow::Return(value));
          }
        }
        Ok(Flow::Value(ObjectHolder::none()))
      }
      Stmt::MethodBody(body) => match body.exec(scope, cx)? {
        Flow::Return(value) => Ok(Flow::Value(value)),
        Flow::Value(_) => Ok(Flow::Value(ObjectHolder::none())),
      },
    }
  }
}

impl Expr {
  pub fn eval(&self, scope: &Closure, cx: &Context) -> RunResult<ObjectHolder> {
    match self {
      Expr::Number(v) => Ok(ObjectHolder::own(Object::Number(*v))),
      Expr::Str(v) => Ok(ObjectHolder::own(Object::Str(v.clone()))),
      Expr::Bool(v) => Ok(ObjectHolder::own(Object::Bool(*v))),
      Expr::None => Ok(ObjectHolder::none()),
      Expr::Var(path) => lookup(scope, path),
      Expr::Not(inner) => {
        let value = inner.eval(scope, cx)?;
        Ok(ObjectHolder::own(Object::Bool(!value.is_true())))
      }
      Expr::Stringify(inner) => {
        let value = inner.eval(scope, cx)?;
        Ok(ObjectHolder::own(Object::Str(render(&value, cx)?)))
      }
      Expr::Binary { op, left, right } => {
        let left = left.eval(scope, cx)?;
        let right = right.eval(scope, cx)?;
        binary(*op, left, right, cx)
      }
      Expr::MethodCall { object, name, args } => {
        let receiver = object.eval(scope, cx)?;
        let args = eval_args(args, scope, cx)?;
        call(&receiver, name, args, cx)
      }
      Expr::New { class, args } => {
        let holder = ObjectHolder::Owned(Instance::new(class.clone()));
        // Arguments are only evaluated when an `__init__` of matching
        // arity is there to receive them.
        if class.has_method("__init__", args.len()) {
          let args = eval_args(args, scope, cx)?;
          call(&holder, "__init__", args, cx)?;
        }
        Ok(holder)
      }
    }
  }
}

fn eval_args(args: &[Expr], scope: &Closure, cx: &Context) -> RunResult<Vec<ObjectHolder>> {
  args.iter().map(|arg| arg.eval(scope, cx)).collect()
}

// Head resolves in `scope`, every further name in the field closure of the
// instance resolved so far.
fn lookup(scope: &Closure, path: &[String]) -> RunResult<ObjectHolder> {
  let (head, rest) = match path.split_first() {
    Some(parts) => parts,
    None => return Ok(ObjectHolder::none()),
  };
  let mut value = scope
    .get(head)
    .cloned()
    .ok_or_else(|| RuntimeError::new(format!("undefined variable `{head}`")))?;
  for name in rest {
    let referent = value.get();
    let instance = match referent.as_deref() {
      Some(Object::Instance(instance)) => instance,
      _ => {
        return Err(RuntimeError::new(format!(
          "cannot read field `{name}` of a value of type `{}`",
          value.type_name()
        )))
      }
    };
    value = instance.field(name).ok_or_else(|| {
      RuntimeError::new(format!(
        "undefined field `{name}` on class `{}`",
        instance.class().name()
      ))
    })?;
  }
  Ok(value)
}

/// Invokes `name` on `receiver` with already-evaluated arguments. The
/// method body runs in a fresh closure binding the parameters plus `self`.
pub fn call(
  receiver: &ObjectHolder,
  name: &str,
  args: Vec<ObjectHolder>,
  cx: &Context,
) -> RunResult<ObjectHolder> {
  let Some(object) = receiver.get() else {
    return Err(RuntimeError::new(format!(
      "cannot call method `{name}` on `None`"
    )));
  };
  let Object::Instance(instance) = &*object else {
    return Err(RuntimeError::new(format!(
      "cannot call method `{name}` on a value of type `{}`",
      object.type_name()
    )));
  };
  let class = instance.class().clone();
  let method = class
    .get_method(name)
    .filter(|m| m.params.len() == args.len())
    .ok_or_else(|| {
      let plural = if args.len() == 1 { "" } else { "s" };
      RuntimeError::new(format!(
        "class `{}` has no method `{name}` taking {} argument{plural}",
        class.name(),
        args.len()
      ))
    })?;

  let mut locals = Closure::new();
  for (param, value) in method.params.iter().zip(args) {
    locals.insert(param.clone(), value);
  }
  locals.insert("self".to_owned(), ObjectHolder::share(&object));

  match method.body.exec(&mut locals, cx)? {
    Flow::Value(value) | Flow::Return(value) => Ok(value),
  }
}

pub fn render(value: &ObjectHolder, cx: &Context) -> RunResult<String> {
  let Some(object) = value.get() else {
    return Ok("None".to_owned());
  };
  match &*object {
    Object::Number(v) => Ok(v.to_string()),
    Object::Str(v) => Ok(v.clone()),
    Object::Bool(v) => Ok(if *v { "True" } else { "False" }.to_owned()),
    Object::Class(class) => Ok(class.to_string()),
    Object::Instance(instance) => {
      if instance.class().has_method("__str__", 0) {
        let shown = call(value, "__str__", Vec::new(), cx)?;
        render(&shown, cx)
      } else {
        Ok(format!(
          "<class `{}` instance at {:p}>",
          instance.class().name(),
          Rc::as_ptr(&object)
        ))
      }
    }
  }
}

fn binary(op: BinaryOp, left: ObjectHolder, right: ObjectHolder, cx: &Context) -> RunResult<ObjectHolder> {
  let value = match op {
    BinaryOp::Add => return add(left, right, cx),
    BinaryOp::Sub => return numeric(left, right, op, i64::wrapping_sub),
    BinaryOp::Mul => return numeric(left, right, op, i64::wrapping_mul),
    BinaryOp::Div => return divide(left, right),
    // `and` and `or` deliberately evaluate both operands; both were
    // already computed by the caller.
    BinaryOp::And => Object::Bool(left.is_true() && right.is_true()),
    BinaryOp::Or => Object::Bool(left.is_true() || right.is_true()),
    BinaryOp::Eq => Object::Bool(equal(&left, &right, cx)?),
    BinaryOp::NotEq => Object::Bool(!equal(&left, &right, cx)?),
    BinaryOp::Less => Object::Bool(less(&left, &right, cx)?),
    BinaryOp::LessEq => Object::Bool(less(&left, &right, cx)? || equal(&left, &right, cx)?),
    BinaryOp::Greater => Object::Bool(!less(&left, &right, cx)? && !equal(&left, &right, cx)?),
    BinaryOp::GreaterEq => Object::Bool(!less(&left, &right, cx)?),
  };
  Ok(ObjectHolder::own(value))
}

fn add(left: ObjectHolder, right: ObjectHolder, cx: &Context) -> RunResult<ObjectHolder> {
  if let (Some(l), Some(r)) = (left.get(), right.get()) {
    match (&*l, &*r) {
      (Object::Number(a), Object::Number(b)) => {
        return Ok(ObjectHolder::own(Object::Number(a.wrapping_add(*b))))
      }
      (Object::Str(a), Object::Str(b)) => {
        return Ok(ObjectHolder::own(Object::Str(format!("{a}{b}"))))
      }
      (Object::Instance(instance), _) if instance.class().has_method("__add__", 1) => {
        return call(&left, "__add__", vec![right.clone()], cx)
      }
      _ => {}
    }
  }
  Err(unsupported(BinaryOp::Add, &left, &right))
}

fn numeric(
  left: ObjectHolder,
  right: ObjectHolder,
  op: BinaryOp,
  apply: fn(i64, i64) -> i64,
) -> RunResult<ObjectHolder> {
  match numbers(&left, &right) {
    Some((a, b)) => Ok(ObjectHolder::own(Object::Number(apply(a, b)))),
    None => Err(unsupported(op, &left, &right)),
  }
}

fn divide(left: ObjectHolder, right: ObjectHolder) -> RunResult<ObjectHolder> {
  match numbers(&left, &right) {
    Some((_, 0)) => Err(RuntimeError::new("division by zero")),
    Some((a, b)) => Ok(ObjectHolder::own(Object::Number(a.wrapping_div(b)))),
    None => Err(unsupported(BinaryOp::Div, &left, &right)),
  }
}

fn numbers(left: &ObjectHolder, right: &ObjectHolder) -> Option<(i64, i64)> {
  match (left.get().as_deref(), right.get().as_deref()) {
    (Some(Object::Number(a)), Some(Object::Number(b))) => Some((*a, *b)),
    _ => None,
  }
}

fn unsupported(op: BinaryOp, left: &ObjectHolder, right: &ObjectHolder) -> RuntimeError {
  RuntimeError::new(format!(
    "unsupported operand types for `{}`: `{}` and `{}`",
    op.symbol(),
    left.type_name(),
    right.type_name()
  ))
}

// Two empty handles are equal; leaf values of the same kind compare by
// payload; an instance on the left dispatches `__eq__` with whatever is on
// the right.
pub fn equal(left: &ObjectHolder, right: &ObjectHolder, cx: &Context) -> RunResult<bool> {
  let (l, r) = (left.get(), right.get());
  if l.is_none() && r.is_none() {
    return Ok(true);
  }
  if let (Some(l), Some(r)) = (&l, &r) {
    match (&**l, &**r) {
      (Object::Number(a), Object::Number(b)) => return Ok(a == b),
      (Object::Str(a), Object::Str(b)) => return Ok(a == b),
      (Object::Bool(a), Object::Bool(b)) => return Ok(a == b),
      _ => {}
    }
  }
  if let Some(Object::Instance(instance)) = l.as_deref() {
    if instance.class().has_method("__eq__", 1) {
      return Ok(call(left, "__eq__", vec![right.clone()], cx)?.is_true());
    }
  }
  Err(incomparable("equality", left, right))
}

// The other four comparisons all derive from this and `equal`.
pub fn less(left: &ObjectHolder, right: &ObjectHolder, cx: &Context) -> RunResult<bool> {
  if let (Some(l), Some(r)) = (left.get(), right.get()) {
    match (&*l, &*r) {
      (Object::Number(a), Object::Number(b)) => return Ok(a < b),
      (Object::Str(a), Object::Str(b)) => return Ok(a < b),
      (Object::Bool(a), Object::Bool(b)) => return Ok(a < b),
      _ => {}
    }
  }
  if let Some(Object::Instance(instance)) = left.get().as_deref() {
    if instance.class().has_method("__lt__", 1) {
      return Ok(call(left, "__lt__", vec![right.clone()], cx)?.is_true());
    }
  }
  Err(incomparable("ordering", left, right))
}

fn incomparable(how: &str, left: &ObjectHolder, right: &ObjectHolder) -> RuntimeError {
  RuntimeError::new(format!(
    "cannot compare `{}` and `{}` for {how}",
    left.type_name(),
    right.type_name()
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::io::NoPrint;

  fn cx() -> Context {
    Context::new(NoPrint)
  }

  fn number(v: i64) -> ObjectHolder {
    ObjectHolder::own(Object::Number(v))
  }

  fn string(v: &str) -> ObjectHolder {
    ObjectHolder::own(Object::Str(v.to_owned()))
  }

  #[test]
  fn leaf_equality_is_symmetric() {
    let cx = cx();
    let pairs = [
      (number(1), number(1)),
      (number(1), number(2)),
      (string("a"), string("a")),
      (string("a"), string("b")),
      (
        ObjectHolder::own(Object::Bool(true)),
        ObjectHolder::own(Object::Bool(false)),
      ),
    ];
    for (a, b) in &pairs {
      assert_eq!(equal(a, b, &cx).unwrap(), equal(b, a, &cx).unwrap());
    }
  }

  #[test]
  fn none_is_only_equal_to_none() {
    let cx = cx();
    assert!(equal(&ObjectHolder::none(), &ObjectHolder::none(), &cx).unwrap());
    assert!(equal(&ObjectHolder::none(), &number(0), &cx).is_err());
    assert!(equal(&number(0), &ObjectHolder::none(), &cx).is_err());
  }

  #[test]
  fn mixed_leaf_kinds_do_not_compare() {
    let cx = cx();
    assert!(equal(&number(1), &string("1"), &cx).is_err());
    assert!(less(&string("1"), &number(1), &cx).is_err());
  }

  #[test]
  fn strings_order_lexicographically() {
    let cx = cx();
    assert!(less(&string("abc"), &string("abd"), &cx).unwrap());
    assert!(!less(&string("b"), &string("a"), &cx).unwrap());
  }

  #[test]
  fn rendering_none() {
    assert_eq!(render(&ObjectHolder::none(), &cx()).unwrap(), "None");
  }

  #[test]
  fn default_instance_rendering_is_opaque_and_distinct() {
    use crate::runtime::{Class, Instance};
    use std::rc::Rc;

    let cx = cx();
    let class = Rc::new(Class::new("Blank", Vec::new(), None));
    let a = ObjectHolder::Owned(Instance::new(class.clone()));
    let b = ObjectHolder::Owned(Instance::new(class));
    let shown_a = render(&a, &cx).unwrap();
    let shown_b = render(&b, &cx).unwrap();
    assert!(shown_a.starts_with("<class `Blank` instance at"));
    assert_ne!(shown_a, shown_b);
  }

  #[test]
  fn division_guards() {
    assert!(divide(number(1), number(0)).is_err());
    let value = divide(number(-7), number(2)).unwrap();
    match value.get().as_deref() {
      Some(Object::Number(v)) => assert_eq!(*v, -3),
      _ => panic!("expected a number"),
    }
  }
}
