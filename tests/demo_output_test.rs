use multi_catch_demo::{
    dispatch, run, CaptureSink, Fault, Handler, Roster, TomlConfig, COMPLETION_MARKER,
    START_MARKER,
};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_prints_exactly_n_names_before_fault() {
    for n in 0..6 {
        let names: Vec<String> = (0..n).map(|i| format!("player-{}", i)).collect();
        let (outcome, sink) = run(&Roster::new(names.clone()), CaptureSink::default()).unwrap();
        let lines = sink.into_lines();

        assert_eq!(outcome.elements_printed, n);
        assert_eq!(lines.len(), n + 3);
        assert_eq!(lines[0], START_MARKER);
        assert_eq!(&lines[1..=n], names.as_slice());
        assert_eq!(lines.last().map(String::as_str), Some(COMPLETION_MARKER));
    }
}

#[test]
fn test_only_index_handler_fires_for_default_roster() {
    let (outcome, sink) = run(&Roster::default(), CaptureSink::default()).unwrap();
    let lines = sink.into_lines();

    assert_eq!(outcome.handled_by, Some(Handler::IndexOutOfBounds));
    assert!(!lines.iter().any(|l| l.starts_with("Arithmetic Exception")));
    assert!(!lines.iter().any(|l| l.starts_with("Exception ::")));
}

#[test]
fn test_handler_order_for_each_fault_kind() {
    assert_eq!(dispatch(&Fault::DivisionByZero), Handler::Arithmetic);
    assert_eq!(
        dispatch(&Fault::IndexOutOfRange {
            index: 9,
            length: 2
        }),
        Handler::IndexOutOfBounds
    );
    assert_eq!(
        dispatch(&Fault::Generic {
            message: "boom".to_string()
        }),
        Handler::CatchAll
    );
}

#[test]
fn test_roster_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[roster]\nnames = [\"Gill\", \"Pant\"]").unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    let (outcome, sink) = run(&config.roster().unwrap(), CaptureSink::default()).unwrap();

    assert_eq!(outcome.elements_printed, 2);
    assert_eq!(sink.lines()[1..3], ["Gill", "Pant"]);
}

#[test]
fn test_binary_output_and_exit_code() {
    let output = Command::new(env!("CARGO_BIN_EXE_multi-catch-demo"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "try Block:: Begin",
            "Rohit",
            "Shikar",
            "Virat",
            "Dhoni",
            "ArrayIndexOutOfBounds :: Accessed index out of bounds",
            "rest of the code",
        ]
    );
}

#[test]
fn test_binary_rejects_blank_name() {
    let output = Command::new(env!("CARGO_BIN_EXE_multi-catch-demo"))
        .args(["--names", "Rohit, "])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_reports_missing_config_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_multi-catch-demo"))
        .args(["--config", "/nonexistent/roster.toml"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot read config file '/nonexistent/roster.toml'"));
    assert!(!stderr.contains("Could not write output"));
}
