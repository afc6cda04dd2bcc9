mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_error, print_finished, print_running};
use lhs_core::{
    environment::prelude::Environment,
    parser::prelude::produce_ast,
    runner::run_from_stream,
    utils::prelude::Error
};

#[derive(Parser)]
enum Command {
    /// Parses and evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Print the parsed program instead of evaluating it
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Start from an empty scope without `true`, `false` and `null`
        #[arg(long, default_value_t = false)]
        no_prelude: bool
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    let _ = match Command::parse() {
        Command::Run { path, print_ast, no_prelude } => {
            if print_ast {
                match std::fs::read_to_string(&path) {
                    Ok(src) => match produce_ast(&src) {
                        Ok(program) => println!("{program}"),
                        Err(error) => print_error(&Error::Parse { path, src, error })
                    },
                    Err(err) => print_error(&Error::StdIo { err: err.kind() })
                };

                return;
            }

            let mut env = match no_prelude {
                true => Environment::new(),
                false => Environment::prelude()
            };

            print_running(&path.display().to_string());
            let start = std::time::Instant::now();

            match run_from_stream(path, &mut env) {
                Ok(value) => println!("{value}"),
                Err(err) => print_error(&err)
            };

            print_finished(std::time::Instant::now() - start);
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    };
}
