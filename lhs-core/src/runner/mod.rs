//! Drives a whole source through parsing and evaluation against a caller owned
//! [`Environment`], wrapping failures into the printable [`Error`].

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::evaluate,
    parser::prelude::{produce_ast, produce_ast_from_stream, Program},
    utils::prelude::Error
};

pub fn run(path: PathBuf, env: &mut Environment) -> Result<Value, Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    let program = parse(path.clone(), src.clone())?;

    evaluate_program(path, src, &program, env)
}

/// Same as [`run`], but the file is lexed while it is being read.
pub fn run_from_stream(path: PathBuf, env: &mut Environment) -> Result<Value, Error> {
    let file = match std::fs::File::open(path.clone()) {
        Ok(file) => file,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut io_error = None;
    let mut reader = std::io::BufReader::new(file);

    let parsed = {
        let stream = reader.chars()
            .map_while(|c| match c {
                Ok(c) => {
                    src.push(c);
                    Some(c)
                },
                Err(err) => {
                    io_error = Some(err.kind());
                    None
                }
            });

        produce_ast_from_stream(stream)
    };

    if let Some(err) = io_error {
        return Err(Error::StdIo { err })
    }

    let program = match parsed {
        Ok(program) => program,
        Err(err) => {
            let error = Error::Parse { path, src, error: err };
            return Err(error)
        }
    };

    evaluate_program(path, src, &program, env)
}

/// Runs an in-memory source, as the interactive loop does for every line.
pub fn run_source(src: &str, env: &mut Environment) -> Result<Value, Error> {
    let program = parse(PathBuf::new(), src.to_string())?;

    evaluate_program(PathBuf::new(), src.to_string(), &program, env)
}

fn parse(path: PathBuf, src: String) -> Result<Program, Error> {
    match produce_ast(&src) {
        Ok(program) => Ok(program),
        Err(err) => Err(Error::Parse { path, src, error: err })
    }
}

fn evaluate_program(
    path: PathBuf,
    src: String,
    program: &Program,
    env: &mut Environment
) -> Result<Value, Error> {
    evaluate(program, env)
        .map_err(|error| Error::Runtime { path, src, error })
}
