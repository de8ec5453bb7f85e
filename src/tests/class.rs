check! {
  init_runs_on_construction,
  r#"
    class Dog:
      def __init__(self, n):
        self.n = n
      def __str__(self):
        return self.n

    d = Dog("Rex")
    print d
  "#,
  "Rex\n"
}

check! {
  classes_print_by_name,
  r#"
    class Dog:
      def bark(self):
        return "woof"

    print Dog
  "#,
  "Class Dog\n"
}

check! {
  constructing_without_init_ignores_no_arguments,
  r#"
    class Empty:
      def touch(self):
        return 1

    e = Empty()
    print e.touch()
  "#,
  "1\n"
}

check! {
  constructor_arguments_are_skipped_without_a_matching_init,
  r#"
    class Quiet:
      def touch(self):
        return 1

    q = Quiet(1, 2, 3)
    print q.touch()
  "#,
  "1\n"
}

check! {
  fields_are_per_instance,
  r#"
    class Counter:
      def __init__(self, start):
        self.n = start
      def bump(self):
        self.n = self.n + 1
        return self.n

    a = Counter(0)
    b = Counter(10)
    a.bump()
    a.bump()
    b.bump()
    print a.n, b.n
  "#,
  "2 11\n"
}

check! {
  methods_can_construct_other_classes,
  r#"
    class Part:
      def __init__(self, n):
        self.n = n

    class Factory:
      def build(self, n):
        return Part(n)

    f = Factory()
    p = f.build(9)
    print p.n
  "#,
  "9\n"
}

check! {
  str_dispatch_nests,
  r#"
    class Name:
      def __init__(self, text):
        self.text = text
      def __str__(self):
        return self.text

    class Badge:
      def __init__(self, name):
        self.name = name
      def __str__(self):
        return self.name

    print Badge(Name("Ada"))
  "#,
  "Ada\n"
}

check! {
  stringify_uses_str_dispatch,
  r#"
    class Tag:
      def __init__(self, n):
        self.n = n
      def __str__(self):
        return self.n

    t = Tag("label")
    s = str(t) + "!"
    print s
    n = None
    print str(5) + str(n)
  "#,
  "label!\n5None\n"
}
