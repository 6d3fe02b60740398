#[macro_export]
macro_rules! tests {
    ($file:ident in $scope:ident is OK $($expected:expr)*) => {
        #[test]
        fn $file() {
            use ember_lang::{ember, RunMode};

            let mut expected = vec![$($expected),*];

            // if exists, concat expected lines with new lines
            let expected = match expected.len() {
                0 => "".to_string(),
                _ => {
                    // add empty string to end to add new line to end of output
                    expected.push("");
                    expected.join("\n")
                }
            };

            let source = std::fs::read_to_string(
                format!("tests/target/{}/{}.ember", stringify!($scope), stringify!($file))
            ).unwrap();

            let mut output = Vec::new();
            let mut ember = ember::new(&mut output);

            ember.run(&source, RunMode::File);
            assert!(!ember.had_error() && !ember.had_runtime_error());

            // drop ember here to release the borrow on output before reading it
            drop(ember);
            assert_eq!(expected, std::str::from_utf8(&output).unwrap());
        }
    };

    ($file:ident in $scope:ident is ERR $($expected:expr)+) => {
        #[test]
        fn $file() {
            use assert_cmd::Command;
            // output concats expected with new line
            let output = vec![$($expected),+].join("\n");
            let file = format!("tests/target/{}/{}.ember", stringify!($scope), stringify!($file));

            Command::cargo_bin("ember").unwrap()
                .arg(file)
                .assert()
                .stderr(format!("{output}\n"))
                .failure();
        }
    };
}
