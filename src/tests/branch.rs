check! {
  if_takes_the_truthy_branch,
  r#"
    if 1:
      print "yes"
    if 0:
      print "no"
  "#,
  "yes\n"
}

check! {
  else_takes_the_falsy_branch,
  r#"
    if "":
      print "then"
    else:
      print "else"
  "#,
  "else\n"
}

check! {
  branch_conditions_use_truthiness,
  r#"
    if None:
      print "none is truthy"
    else:
      print "none is falsy"
    if "text":
      print "text is truthy"
  "#,
  "none is falsy\ntext is truthy\n"
}

check! {
  classes_and_instances_are_falsy,
  r#"
    class T:
      def touch(self):
        return 0

    if T:
      print "class"
    else:
      print "no class"
    if T():
      print "instance"
    else:
      print "no instance"
  "#,
  "no class\nno instance\n"
}

check! {
  nested_branches,
  r#"
    x = 5
    if x > 3:
      if x > 4:
        print "big"
      else:
        print "medium"
    else:
      print "small"
  "#,
  "big\n"
}

check! {
  comparison_drives_branching,
  r#"
    a = 2
    if a == 2:
      print "two"
    if a != 2:
      print "not two"
  "#,
  "two\n"
}
