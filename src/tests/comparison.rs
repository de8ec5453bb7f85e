check! {
  number_comparisons,
  r#"
    print 1 < 2, 2 <= 2, 3 > 2, 2 >= 3, 1 == 1, 1 != 1
  "#,
  "True True True False True False\n"
}

check! {
  string_comparisons_are_lexicographic,
  r#"
    print "abc" < "abd", "b" < "a", "x" == "x", "x" != "y"
  "#,
  "True False True True\n"
}

check! {
  booleans_compare_with_false_below_true,
  r#"
    print False < True, True <= False, True == True
  "#,
  "True False True\n"
}

check! {
  none_equals_only_none,
  r#"
    print None == None
    print None != None
  "#,
  "True\nFalse\n"
}

check! {
  eq_dispatches_to_dunder_eq,
  r#"
    class P:
      def __init__(self, x):
        self.x = x
      def __eq__(self, o):
        return self.x == o.x

    print P(5) == P(5)
    print P(5) == P(6)
  "#,
  "True\nFalse\n"
}

check! {
  derived_comparisons_use_lt_and_eq,
  r#"
    class V:
      def __init__(self, x):
        self.x = x
      def __lt__(self, o):
        return self.x < o.x
      def __eq__(self, o):
        return self.x == o.x

    print V(1) < V(2)
    print V(1) <= V(1)
    print V(2) > V(1)
    print V(1) >= V(1)
    print V(1) != V(2)
  "#,
  "True\nTrue\nTrue\nTrue\nTrue\n"
}

check! {
  comparisons_in_conditions,
  r#"
    class V:
      def __init__(self, x):
        self.x = x
      def __lt__(self, o):
        return self.x < o.x
      def __eq__(self, o):
        return self.x == o.x

    if V(3) > V(2):
      print "greater"
  "#,
  "greater\n"
}

check! {
  eq_dispatches_even_against_none,
  r#"
    class P:
      def __init__(self, x):
        self.x = x
      def __eq__(self, o):
        if o == None:
          return False
        return self.x == o.x

    p = P(1)
    n = None
    print p == n, p == P(1)
  "#,
  "False True\n"
}

check_error! {
  comparing_across_leaf_kinds,
  r#"
    print 1 == "1"
  "#,
  "cannot compare `Number` and `String` for equality"
}

check_error! {
  ordering_none,
  r#"
    print None < 1
  "#,
  "cannot compare `None` and `Number` for ordering"
}

check_error! {
  instances_without_eq_do_not_compare,
  r#"
    class T:
      def touch(self):
        return 0

    print T() == T()
  "#,
  "cannot compare `Instance` and `Instance` for equality"
}

check_error! {
  instances_without_lt_do_not_order,
  r#"
    class T:
      def touch(self):
        return 0

    print T() < T()
  "#,
  "cannot compare `Instance` and `Instance` for ordering"
}
