use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_run-integration-tests"))
        .args(args)
        .output()
        .expect("failed to spawn run-integration-tests")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_one_colorized_line() {
    let output = run(&["DEBUG", "hello %s!", "world"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\x1b[1;30m[\x1b[1;32mDEBUG\x1b[1;30m]\x1b[0m\t  hello world!\n"
    );
}

#[test]
fn every_level_uses_its_color() {
    for (level, code) in [
        ("DEBUG", "32"),
        ("INFO", "37"),
        ("WARN", "33"),
        ("ERROR", "31"),
        ("FATAL", "35"),
    ] {
        let output = run(&[level, "%s", "x"]);
        assert_eq!(output.status.code(), Some(0), "level {level}");
        assert_eq!(
            stdout(&output),
            format!("\x1b[1;30m[\x1b[1;{code}m{level}\x1b[1;30m]\x1b[0m\t  x\n")
        );
    }
}

#[test]
fn too_few_arguments_exit_with_usage() {
    for args in [&[][..], &["INFO"][..], &["INFO", "no args"][..]] {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1));
        let text = stdout(&output);
        assert!(text.contains("USAGE"), "got: {text}");
        assert!(!text.contains("[INFO]"));
    }
}

#[test]
fn unknown_level_exits_with_diagnostic() {
    let output = run(&["warning", "hello %s", "world"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("'warning'"), "got: {text}");
    assert!(!text.contains("hello"));
}

#[test]
fn arguments_are_passed_as_text() {
    let output = run(&["INFO", "%d/%s", "7", "8", "9"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(
        stdout(&output).ends_with("\t  %!d(string=7)/8%!(EXTRA string=9)\n"),
        "got: {}",
        stdout(&output)
    );
}

#[test]
fn oversized_width_is_reported_inline() {
    let output = run(&["INFO", "%99999999999999999999s|%.9999999999f", "x", "y"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(
        stdout(&output).ends_with("\t  %!(BADWIDTH)x|%!(BADPREC)%!f(string=y)\n"),
        "got: {}",
        stdout(&output)
    );
}
