use mython::{CollectPrint, EvalError, Mython};

#[test]
fn mython_e2e() {
  let io = CollectPrint::new();
  let mut vm = Mython::with_io(io.clone());

  vm.eval(
    r#"
class Shape:
  def __init__(self, name):
    self.name = name
  def __str__(self):
    return self.name
  def __eq__(self, other):
    return self.area() == other.area()
  def __lt__(self, other):
    return self.area() < other.area()

class Square(Shape):
  def __init__(self, side):
    self.name = "square"
    self.side = side
  def area(self):
    return self.side * self.side

class Rect(Shape):
  def __init__(self, w, h):
    self.name = "rect"
    self.w = w
    self.h = h
  def area(self):
    return self.w * self.h

s = Square(4)
r = Rect(2, 8)
print s, r
print s.area(), r.area()
print s == r, s < r, s >= r
"#,
  )
  .unwrap();

  assert_eq!(io.contents(), "square rect\n16 16\nTrue False True\n");
}

#[test]
fn globals_persist_across_eval_calls() {
  let io = CollectPrint::new();
  let mut vm = Mython::with_io(io.clone());

  vm.eval("x = 20").unwrap();
  vm.eval("x = x + 22\nprint x").unwrap();

  assert_eq!(io.contents(), "42\n");
}

#[test]
fn errors_surface_through_the_facade() {
  let mut vm = Mython::with_io(CollectPrint::new());

  match vm.eval("print 1 +\n") {
    Err(EvalError::Syntax(e)) => assert!(e.message().contains("expected an expression")),
    other => panic!("expected a syntax error, got {other:?}"),
  }

  match vm.eval("print nothing\n") {
    Err(EvalError::Runtime(e)) => {
      assert!(e.message().contains("undefined variable `nothing`"))
    }
    other => panic!("expected a runtime error, got {other:?}"),
  }
}
