#[macro_export]
macro_rules! check {
  ($name:ident, $input:literal, $expected:expr) => {
    #[test]
    fn $name() {
      let input = indoc::indoc!($input);
      let io = $crate::CollectPrint::new();
      let mut vm = $crate::Mython::with_io(io.clone());
      if let Err(e) = vm.eval(input) {
        panic!("eval failed:\n{e}");
      }
      assert_eq!(io.contents(), $expected);
    }
  };
}

#[macro_export]
macro_rules! check_error {
  ($name:ident, $input:literal, $message:literal) => {
    #[test]
    fn $name() {
      let input = indoc::indoc!($input);
      let io = $crate::CollectPrint::new();
      let mut vm = $crate::Mython::with_io(io.clone());
      match vm.eval(input) {
        Ok(()) => panic!(
          "unexpected eval success, stdout=`{:?}`",
          io.contents()
        ),
        Err(e) => {
          let rendered = e.to_string();
          assert!(
            rendered.contains($message),
            "error `{rendered}` does not mention `{}`",
            $message
          );
        }
      }
    }
  };
}
