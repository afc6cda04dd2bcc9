use std::path::PathBuf;

use crate::{
    environment::prelude::{Environment, Value, NULL},
    eval::prelude::RuntimeErrorType,
    parser::prelude::ParseErrorType,
    utils::prelude::Error
};

use super::{run, run_from_stream, run_source};

fn write_source(name: &str, src: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lhs-runner-{}-{name}", std::process::id()));

    std::fs::write(&path, src).expect("write temporary source");

    path
}

#[test]
fn test_run_source() -> Result<(), Error> {
    let mut env = Environment::prelude();

    assert_eq!(run_source("let x = 2; x * 21;", &mut env)?, Value::from(42.0));
    assert_eq!(run_source("x = x + 1;", &mut env)?, Value::from(3.0));
    assert_eq!(run_source("", &mut env)?, NULL);

    Ok(())
}

#[test]
fn test_run_source_errors() {
    let mut env = Environment::prelude();

    match run_source("let = 5;", &mut env) {
        Err(Error::Parse { path, error, .. }) => {
            assert_eq!(path, PathBuf::new());
            assert_eq!(error.error, ParseErrorType::ExpectedIdent);
        },
        other => panic!("Expected a parse error, got {other:?}")
    }

    match run_source("let a = 1; a + \"b\";", &mut env) {
        Err(Error::Runtime { src, error, .. }) => {
            assert_eq!(src, "let a = 1; a + \"b\";");
            assert!(matches!(error.error, RuntimeErrorType::InvalidOperands { .. }));
        },
        other => panic!("Expected a runtime error, got {other:?}")
    }

    // statements before the failure stay applied
    assert_eq!(env.lookup("a"), Ok(Value::from(1.0)));
}

#[test]
fn test_run_file() -> Result<(), Error> {
    let path = write_source("file.lhs", "let greeting: string = \"hi\";\nconst n = 4;\nn % 3;\n");

    let mut env = Environment::prelude();
    let from_file = run(path.clone(), &mut env)?;

    let mut env = Environment::prelude();
    let from_stream = run_from_stream(path.clone(), &mut env)?;

    assert_eq!(from_file, Value::from(1.0));
    assert_eq!(from_stream, from_file);
    assert_eq!(env.lookup("greeting"), Ok(Value::from("hi")));

    let _ = std::fs::remove_file(path);

    Ok(())
}

#[test]
fn test_stream_keeps_source() {
    let path = write_source("broken.lhs", "let x = 1;\nx = \"é\";\n");

    let mut env = Environment::prelude();

    match run_from_stream(path.clone(), &mut env) {
        Err(Error::Runtime { src, error, .. }) => {
            assert_eq!(src, "let x = 1;\nx = \"é\";\n");
            assert_eq!((error.span.start, error.span.end), (11, 20));
        },
        other => panic!("Expected a runtime error, got {other:?}")
    }

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("this/file/does/not/exist.lhs");

    let mut env = Environment::new();

    assert_eq!(
        run(path.clone(), &mut env),
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound })
    );
    assert_eq!(
        run_from_stream(path, &mut env),
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound })
    );
}

#[test]
fn test_pretty_errors() {
    let mut env = Environment::prelude();

    let parse = run_source("let x = (1 + 2;", &mut env)
        .expect_err("unclosed paren")
        .pretty_string();

    assert!(parse.contains("Syntax error"), "{parse}");
    assert!(parse.contains("<input>"), "{parse}");
    assert!(parse.contains("Expected `)`"), "{parse}");

    let runtime = run_source("y;", &mut env)
        .expect_err("undeclared")
        .pretty_string();

    assert!(runtime.contains("Runtime error"), "{runtime}");
    assert!(runtime.contains("cannot resolve `y`"), "{runtime}");

    let eof = run_source("1 +", &mut env)
        .expect_err("dangling operator")
        .pretty_string();

    assert!(eof.contains("Unexpected end of input"), "{eof}");

    let io = Error::StdIo { err: std::io::ErrorKind::NotFound }.pretty_string();

    assert!(io.contains("Standard IO error"), "{io}");
}
