check! {
  and_or_not_produce_booleans,
  r#"
    print 1 and 2
    print 0 or ""
    print not 0, not "x"
  "#,
  "True\nFalse\nTrue False\n"
}

check! {
  and_evaluates_both_operands,
  r#"
    class Noisy:
      def __init__(self, n):
        self.n = n
      def touch(self):
        print "touched", self.n
        return 0

    a = Noisy(1)
    b = Noisy(2)
    print a.touch() and b.touch()
  "#,
  "touched 1\ntouched 2\nFalse\n"
}

check! {
  or_evaluates_both_operands,
  r#"
    class Noisy:
      def __init__(self, n):
        self.n = n
      def touch(self):
        print "touched", self.n
        return 1

    a = Noisy(1)
    b = Noisy(2)
    print a.touch() or b.touch()
  "#,
  "touched 1\ntouched 2\nTrue\n"
}

check! {
  not_binds_tighter_than_and,
  r#"
    print not 0 and not 0
    print not (1 and 0)
  "#,
  "True\nTrue\n"
}

check! {
  and_binds_tighter_than_or,
  r#"
    print 1 or 0 and 0
  "#,
  "True\n"
}

check! {
  logic_applies_truthiness_not_values,
  r#"
    print "a" and "b"
    print None or None
  "#,
  "True\nFalse\n"
}
