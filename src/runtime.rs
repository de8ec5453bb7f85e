//! The Mython value model: objects, the handles that keep them alive, and
//! the class machinery behind method dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use beef::lean::Cow;
use indexmap::IndexMap;

use crate::ast;
use crate::io::PrintWriter;

pub type RunResult<T, E = RuntimeError> = std::result::Result<T, E>;

/// A fatal evaluation failure: an undefined name, a missing method, an
/// unsupported operand, a zero divisor. Mython has no way to catch these.
#[derive(Clone, Debug)]
pub struct RuntimeError {
  message: Cow<'static, str>,
}

impl RuntimeError {
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    let message = message.into();
    RuntimeError { message }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl std::error::Error for RuntimeError {}

impl fmt::Display for RuntimeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

/// A scope frame: the global scope, one method call's locals, or one
/// instance's fields.
pub type Closure = IndexMap<String, ObjectHolder>;

/// A Mython value.
pub enum Object {
  Number(i64),
  Str(String),
  Bool(bool),
  Class(Rc<Class>),
  Instance(Instance),
}

impl Object {
  pub fn type_name(&self) -> &'static str {
    match self {
      Object::Number(_) => "Number",
      Object::Str(_) => "String",
      Object::Bool(_) => "Bool",
      Object::Class(_) => "Class",
      Object::Instance(_) => "Instance",
    }
  }
}

/// A handle to a value.
///
/// Handles are cheap to clone. `Owned` keeps its referent alive; `Shared`
/// is the non-owning alias used to bind `self` inside an instance's field
/// closure and a method call's locals, where the instance is guaranteed to
/// be kept alive further up the stack. An empty handle is the Mython
/// `None`.
#[derive(Clone)]
pub enum ObjectHolder {
  Owned(Rc<Object>),
  Shared(Weak<Object>),
  None,
}

impl ObjectHolder {
  pub fn own(object: Object) -> Self {
    ObjectHolder::Owned(Rc::new(object))
  }

  pub fn share(object: &Rc<Object>) -> Self {
    ObjectHolder::Shared(Rc::downgrade(object))
  }

  pub fn none() -> Self {
    ObjectHolder::None
  }

  /// The referent, if any. A dead alias reads as the empty handle.
  pub fn get(&self) -> Option<Rc<Object>> {
    match self {
      ObjectHolder::Owned(object) => Some(object.clone()),
      ObjectHolder::Shared(object) => object.upgrade(),
      ObjectHolder::None => None,
    }
  }

  /// Mython truthiness: a non-zero number, a non-empty string, or `True`.
  /// Everything else, including classes and instances, is falsy.
  pub fn is_true(&self) -> bool {
    match self.get().as_deref() {
      Some(Object::Number(v)) => *v != 0,
      Some(Object::Str(v)) => !v.is_empty(),
      Some(Object::Bool(v)) => *v,
      _ => false,
    }
  }

  pub fn type_name(&self) -> &'static str {
    match self.get() {
      Some(object) => object.type_name(),
      None => "None",
    }
  }
}

/// One method of a class. `params` lists the formal parameters after the
/// implicit `self`, so its length is the call-site argument count.
pub struct Method {
  pub name: String,
  pub params: Vec<String>,
  pub body: ast::Stmt,
}

/// An immutable class: a name, a method table sorted by name, and an
/// optional base class. The parent chain is finite and acyclic.
pub struct Class {
  name: String,
  methods: Vec<Method>,
  parent: Option<Rc<Class>>,
}

impl Class {
  pub fn new(name: impl Into<String>, mut methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
    let name = name.into();
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    Class {
      name,
      methods,
      parent,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  // This class first, then the ancestor chain.
  pub fn get_method(&self, name: &str) -> Option<&Method> {
    match self.methods.binary_search_by(|m| m.name.as_str().cmp(name)) {
      Ok(i) => Some(&self.methods[i]),
      Err(_) => self.parent.as_deref().and_then(|parent| parent.get_method(name)),
    }
  }

  // Exact arity match only.
  pub fn has_method(&self, name: &str, argc: usize) -> bool {
    self
      .get_method(name)
      .map(|m| m.params.len() == argc)
      .unwrap_or(false)
  }
}

impl fmt::Display for Class {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Class {}", self.name)
  }
}

pub struct Instance {
  class: Rc<Class>,
  fields: RefCell<Closure>,
}

impl Instance {
  /// Creates a fresh instance. Its field closure starts out binding `self`
  /// to a non-owning alias of the instance itself, which keeps the
  /// instance free of an ownership cycle.
  pub fn new(class: Rc<Class>) -> Rc<Object> {
    Rc::new_cyclic(|this: &Weak<Object>| {
      let mut fields = Closure::new();
      fields.insert("self".to_owned(), ObjectHolder::Shared(this.clone()));
      Object::Instance(Instance {
        class,
        fields: RefCell::new(fields),
      })
    })
  }

  pub fn class(&self) -> &Rc<Class> {
    &self.class
  }

  pub fn field(&self, name: &str) -> Option<ObjectHolder> {
    self.fields.borrow().get(name).cloned()
  }

  pub fn set_field(&self, name: impl Into<String>, value: ObjectHolder) {
    self.fields.borrow_mut().insert(name.into(), value);
  }
}

/// What the evaluator needs from its surroundings: the output stream.
#[derive(Clone)]
pub struct Context {
  out: Rc<RefCell<dyn PrintWriter>>,
}

impl Context {
  pub fn new(io: impl PrintWriter + 'static) -> Self {
    Context {
      out: Rc::new(RefCell::new(io)),
    }
  }

  pub fn out(&self) -> std::cell::RefMut<'_, dyn PrintWriter> {
    self.out.borrow_mut()
  }
}
