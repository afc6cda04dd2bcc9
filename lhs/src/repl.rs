use std::io::Write;

use lhs_core::{environment::prelude::Environment, runner::run_source};

use crate::cli::print_error;

const PROMPT: &str = "> ";

/// Evaluates one line at a time. Declarations persist between lines and a
/// failing line leaves whatever it changed before the failure in place.
pub fn start() -> std::io::Result<()> {
	crate::cli::handle_interrupt("repl");

	let stdin = std::io::stdin();
	let mut env = Environment::prelude();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		let input = input.trim_end_matches(['\n', '\r']);

		match input {
			"" => {},
			".exit" => return Ok(()),
			_ => match run_source(input, &mut env) {
				Ok(value) => println!("{value}"),
				Err(err) => print_error(&err)
			}
		}
	}
}
