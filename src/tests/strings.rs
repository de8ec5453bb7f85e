check! {
  concatenation,
  r#"
    print "a\nb" + "c"
  "#,
  "a\nbc\n"
}

check! {
  escape_sequences,
  r#"
    print "tab\there"
    print "quote\"inside"
    print "back\\slash"
  "#,
  "tab\there\nquote\"inside\nback\\slash\n"
}

check! {
  unknown_escapes_keep_the_escaped_character,
  r#"
    print "a\qb"
  "#,
  "aqb\n"
}

check! {
  single_and_double_quotes_agree,
  r#"
    print 'single' + " " + "double"
    print 'it\'s'
  "#,
  "single double\nit's\n"
}

check! {
  empty_strings_concatenate,
  r#"
    print "" + "x" + ""
  "#,
  "x\n"
}

check! {
  strings_build_up_across_statements,
  r#"
    s = "a"
    s = s + "b"
    s = s + "c"
    print s
  "#,
  "abc\n"
}
